// curricula/src/commands/sort.rs

use std::path::PathBuf;

use curricula_core::application::sort_requirements_file;

pub fn execute(input: PathBuf, output: Option<PathBuf>) -> anyhow::Result<()> {
    let output = output.unwrap_or_else(|| input.clone());
    let rows = sort_requirements_file(&input, &output)?;
    println!("🔤 {} programs sorted into {}", rows, output.display());
    Ok(())
}
