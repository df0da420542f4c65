// curricula/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand, ValueEnum};
use curricula_core::domain::requirements::GroupScope;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "curricula")]
#[command(about = "Turns academic catalog exports into per-program requirement tables", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🎓 Builds the requirement table from a catalog CSV
    Assemble {
        /// Catalog export (CSV)
        input: PathBuf,

        /// Directory searched for curricula.yaml
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Explicit configuration file (overrides --project-dir lookup)
        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Output file (default: `output-path` from the configuration)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Which rows feed the groups of a detected category: program | catalog
        #[arg(long)]
        scope: Option<GroupScope>,

        /// Replace a category's keywords, e.g. "thesis_capstone=Capstone Course|Senior Thesis"
        #[arg(long = "keywords", value_name = "CATEGORY=KW1|KW2")]
        keywords: Vec<String>,

        #[arg(long, value_enum, default_value = "csv")]
        format: OutputFormat,

        /// Append rows to an existing CSV instead of replacing it (CSV only)
        #[arg(long)]
        append: bool,
    },

    /// 🔎 Checks that every list cell of an assembled table decodes
    Verify {
        input: PathBuf,

        /// Exit with error if any cell is malformed
        #[arg(long)]
        strict: bool,
    },

    /// 🧽 Re-applies label normalization to the list cells of an existing table
    Normalize {
        input: PathBuf,

        /// Destination (default: rewrite the input in place)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// 🔤 Sorts an assembled table by program name
    Sort {
        input: PathBuf,

        /// Destination (default: rewrite the input in place)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// ✂️  Writes one catalog CSV per program and degree
    Split {
        input: PathBuf,

        #[arg(long, default_value = "programs")]
        out_dir: PathBuf,
    },

    /// ⚖️  Compares an active course list against a corrected one
    Diff {
        #[arg(long, env = "ACTIVE_COURSES_PATH")]
        active: PathBuf,

        #[arg(long, env = "CORRECTED_COURSES_PATH")]
        corrected: PathBuf,

        #[arg(long, default_value = "subj_cou_nbr")]
        active_column: String,

        #[arg(long, default_value = "course_id")]
        corrected_column: String,

        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// 🗂️  Separates programs with flat course lists from structured ones
    Triage {
        input: PathBuf,

        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}
