// curricula/src/commands/diff.rs
//
// USE CASE: Course list reconciliation.

use std::path::PathBuf;

use comfy_table::{Table, presets::UTF8_FULL};
use curricula_core::application::{DiffRequest, diff_course_lists};

pub fn execute(
    active: PathBuf,
    corrected: PathBuf,
    active_column: String,
    corrected_column: String,
    out_dir: PathBuf,
) -> anyhow::Result<()> {
    println!("⚖️  Comparing course lists...");

    let report = diff_course_lists(&DiffRequest {
        active_path: &active,
        active_column: &active_column,
        corrected_path: &corrected,
        corrected_column: &corrected_column,
    })?;

    std::fs::create_dir_all(&out_dir)?;
    let (active_out, corrected_out) = report.save(&out_dir)?;

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["", "Courses"]);
    table.add_row(vec!["Active".to_string(), report.total_active.to_string()]);
    table.add_row(vec!["Corrected".to_string(), report.total_corrected.to_string()]);
    table.add_row(vec!["Matching".to_string(), report.matching.to_string()]);
    table.add_row(vec![
        "Active only".to_string(),
        report.active_not_corrected.len().to_string(),
    ]);
    table.add_row(vec![
        "Corrected only".to_string(),
        report.corrected_not_active.len().to_string(),
    ]);
    println!("{table}");

    println!("📄 {}", active_out.display());
    println!("📄 {}", corrected_out.display());
    Ok(())
}
