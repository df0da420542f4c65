// curricula/src/commands/assemble.rs
//
// USE CASE: Build the per-program requirement table from a catalog export.

use std::path::PathBuf;

use anyhow::{Context, bail};
use comfy_table::{Table, presets::UTF8_FULL};
use curricula_core::application::run_assembly;
use curricula_core::domain::ports::RequirementSink;
use curricula_core::domain::project::{CurriculaConfig, OutputMode};
use curricula_core::domain::requirements::{Assembly, GroupScope, RequirementCategory};
use curricula_core::infrastructure::config::{load_config, load_config_file};
use curricula_core::infrastructure::json::JsonRequirementSink;
use curricula_core::infrastructure::tables::{CsvCatalogSource, CsvRequirementSink};

use crate::cli::OutputFormat;
use tracing::warn;

pub struct AssembleArgs {
    pub input: PathBuf,
    pub project_dir: PathBuf,
    pub config: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub scope: Option<GroupScope>,
    pub keywords: Vec<String>,
    pub format: OutputFormat,
    pub append: bool,
}

pub fn execute(args: AssembleArgs) -> anyhow::Result<()> {
    let start = std::time::Instant::now();

    println!("⚙️  Loading configuration...");
    let mut config = resolve_config(&args)?;
    if let Some(scope) = args.scope {
        config.requirements.group_scope = scope;
    }
    for spec in &args.keywords {
        let (category, keywords) = parse_keyword_override(spec)?;
        config
            .requirements
            .override_keywords(category, keywords)
            .with_context(|| format!("Invalid --keywords value '{}'", spec))?;
    }
    if args.append {
        config.output_mode = OutputMode::Append;
    }
    if args.format == OutputFormat::Json && config.output_mode == OutputMode::Append {
        warn!("Append mode only applies to CSV output; the JSON document is replaced");
        eprintln!("⚠️  Append ignored: JSON output always replaces the target file.");
    }

    let output = args.output.clone().unwrap_or_else(|| {
        let path = args.project_dir.join(&config.output_path);
        match args.format {
            OutputFormat::Csv => path,
            OutputFormat::Json => path.with_extension("json"),
        }
    });
    println!(
        "   Scope: {} | Output: {}",
        config.requirements.group_scope,
        output.display()
    );

    let source = CsvCatalogSource::new(&args.input);
    let sink: Box<dyn RequirementSink> = match args.format {
        OutputFormat::Csv => Box::new(CsvRequirementSink::new(&output, config.output_mode)),
        OutputFormat::Json => Box::new(JsonRequirementSink::new(&output)),
    };

    let assembly = run_assembly(&source, sink.as_ref(), &config.requirements)
        .with_context(|| format!("Failed to assemble requirements from {:?}", args.input))?;

    print_summary(&assembly);

    if !assembly.warnings.is_empty() {
        eprintln!(
            "\n⚠️  {} category extraction(s) failed and were reported as absent:",
            assembly.warnings.len()
        );
        for w in &assembly.warnings {
            let report = miette::Report::new(w.error.clone())
                .wrap_err(format!("{} / {}", w.program, w.category));
            eprintln!("{:?}", report);
        }
    }

    println!(
        "\n✨ SUCCESS! {} programs written to {} in {:.2?}",
        assembly.records.len(),
        output.display(),
        start.elapsed()
    );
    Ok(())
}

/// Splits `category=kw1|kw2` into the category name and its keywords.
fn parse_keyword_override(spec: &str) -> anyhow::Result<(&str, Vec<&str>)> {
    let Some((category, keywords)) = spec.split_once('=') else {
        bail!("Expected CATEGORY=KW1|KW2, got '{}'", spec);
    };
    Ok((category.trim(), keywords.split('|').map(str::trim).collect()))
}

fn resolve_config(args: &AssembleArgs) -> anyhow::Result<CurriculaConfig> {
    match &args.config {
        Some(path) => load_config_file(path)
            .with_context(|| format!("Failed to load configuration from {:?}", path)),
        None => load_config(&args.project_dir).with_context(|| {
            format!(
                "Failed to load project configuration from {:?}",
                args.project_dir
            )
        }),
    }
}

fn print_summary(assembly: &Assembly) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Category", "Programs"]);
    for category in RequirementCategory::ALL {
        table.add_row(vec![
            category.to_string(),
            assembly.count_present(category).to_string(),
        ]);
    }

    println!("\n📊 Requirement Summary ({} programs):", assembly.records.len());
    println!("{table}");
}
