// curricula/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // RUST_LOG=debug curricula assemble ... for details. Logs go to stderr so that
    // stdout stays clean for summaries.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Assemble {
            input,
            project_dir,
            config,
            output,
            scope,
            keywords,
            format,
            append,
        } => commands::assemble::execute(commands::assemble::AssembleArgs {
            input,
            project_dir,
            config,
            output,
            scope,
            keywords,
            format,
            append,
        }),
        Commands::Verify { input, strict } => commands::verify::execute(input, strict),
        Commands::Normalize { input, output } => commands::normalize::execute(input, output),
        Commands::Sort { input, output } => commands::sort::execute(input, output),
        Commands::Split { input, out_dir } => commands::split::execute(input, out_dir),
        Commands::Diff {
            active,
            corrected,
            active_column,
            corrected_column,
            out_dir,
        } => commands::diff::execute(active, corrected, active_column, corrected_column, out_dir),
        Commands::Triage { input, out_dir } => commands::triage::execute(input, out_dir),
    }
}
