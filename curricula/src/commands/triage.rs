// curricula/src/commands/triage.rs

use std::path::PathBuf;

use curricula_core::application::triage_catalog;

pub fn execute(input: PathBuf, out_dir: PathBuf) -> anyhow::Result<()> {
    let triage = triage_catalog(&input)?;

    std::fs::create_dir_all(&out_dir)?;
    let (easy, hard) = triage.save(&out_dir)?;

    println!("🗂️  Easy: {} programs -> {}", triage.easy.len(), easy.display());
    println!("🗂️  Hard: {} programs -> {}", triage.hard.len(), hard.display());
    Ok(())
}
