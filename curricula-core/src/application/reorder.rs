// curricula-core/src/application/reorder.rs

use std::path::Path;
use tracing::info;

use crate::error::CurriculaError;
use crate::infrastructure::tables::requirements::PROGRAM_COLUMN;
use crate::infrastructure::tables::{Table, read_table, write_table};

/// Sorts an assembled table alphabetically by program. Ties keep their input order.
pub fn sort_by_program(table: &mut Table) -> Result<(), CurriculaError> {
    let idx = table.column(PROGRAM_COLUMN)?;
    table
        .rows
        .sort_by(|a, b| Table::cell(a, idx).cmp(Table::cell(b, idx)));
    Ok(())
}

/// Reads `input`, sorts it and writes it to `output` (which may be `input`).
pub fn sort_requirements_file(input: &Path, output: &Path) -> Result<usize, CurriculaError> {
    let mut table = read_table(input)?;
    sort_by_program(&mut table)?;
    write_table(output, &table.headers, table.rows.iter().cloned())?;
    info!(rows = table.rows.len(), output = %output.display(), "Programs sorted");
    Ok(table.rows.len())
}
