// curricula/src/commands/split.rs
//
// USE CASE: One catalog file per program and degree.

use std::path::PathBuf;

use curricula_core::application::split_catalog;

pub fn execute(input: PathBuf, out_dir: PathBuf) -> anyhow::Result<()> {
    println!("✂️  Splitting {}...", input.display());

    let summary = split_catalog(&input, &out_dir)?;

    for file in &summary.files {
        println!("   ➜ {}", file.display());
    }
    if summary.skipped_rows > 0 {
        println!(
            "   ⚠️  {} row(s) without program or degree skipped",
            summary.skipped_rows
        );
    }
    println!(
        "✨ {} file(s) written to {}",
        summary.files.len(),
        out_dir.display()
    );
    Ok(())
}
