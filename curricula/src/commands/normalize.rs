// curricula/src/commands/normalize.rs

use std::path::PathBuf;

use curricula_core::application::renormalize_requirements_file;

pub fn execute(input: PathBuf, output: Option<PathBuf>) -> anyhow::Result<()> {
    let output = output.unwrap_or_else(|| input.clone());
    let summary = renormalize_requirements_file(&input, &output)?;

    println!(
        "🧽 {} cell(s) rewritten into {}",
        summary.cells_rewritten,
        output.display()
    );
    if summary.elements_skipped > 0 {
        println!("   ⚠️  {} malformed group(s) dropped", summary.elements_skipped);
    }
    if summary.cells_unreadable > 0 {
        println!(
            "   ⚠️  {} cell(s) are not group lists and were left unchanged",
            summary.cells_unreadable
        );
    }
    Ok(())
}
