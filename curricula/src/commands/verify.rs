// curricula/src/commands/verify.rs
//
// USE CASE: Check that an assembled table can be read back.

use std::path::PathBuf;

use comfy_table::{Table, presets::UTF8_FULL};
use curricula_core::application::verify_requirements_file;

pub fn execute(input: PathBuf, strict: bool) -> anyhow::Result<()> {
    println!("🔎 Verifying {}...", input.display());

    let report = verify_requirements_file(&input)?;

    println!(
        "   Programs: {} | Cells checked: {} | Courses decoded: {}",
        report.programs_checked, report.cells_checked, report.courses_decoded
    );
    for column in &report.missing_columns {
        println!("   ⚠️  Column '{}' not present", column);
    }

    if report.is_clean() {
        println!("\n✅ All list cells decode.");
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Program", "Column", "Element", "Reason"]);
    for issue in &report.issues {
        let element = issue
            .element
            .map(|i| i.to_string())
            .unwrap_or_else(|| "whole cell".to_string());
        table.add_row(vec![
            issue.program.clone(),
            issue.column.clone(),
            element,
            issue.reason.clone(),
        ]);
    }
    eprintln!("\n⚠️  {} malformed element(s):", report.issues.len());
    eprintln!("{table}");

    if strict {
        eprintln!("\n❌ Verification failed (strict mode).");
        std::process::exit(1);
    }
    Ok(())
}
