// curricula-core/src/application/split.rs

use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{info, instrument, warn};

use crate::error::CurriculaError;
use crate::infrastructure::tables::catalog::columns;
use crate::infrastructure::tables::{Table, read_table, write_table};

#[derive(Debug, Clone, Default)]
pub struct SplitSummary {
    pub files: Vec<PathBuf>,
    pub skipped_rows: usize,
}

/// `<ProgramName>_<Degree>.csv` with slashes and spaces replaced.
pub fn split_file_name(program: &str, degree: &str) -> String {
    format!("{}_{}.csv", program, degree)
        .chars()
        .map(|c| if c == '/' || c == ' ' { '_' } else { c })
        .collect()
}

fn safe_join(out_dir: &Path, file_name: &str) -> Result<PathBuf, CurriculaError> {
    let candidate = Path::new(file_name);
    let mut components = candidate.components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(out_dir.join(candidate)),
        _ => Err(CurriculaError::UnsafePath(file_name.to_string())),
    }
}

/// Partitions catalog rows by program and degree, keeping every original column.
pub fn partition_by_program(
    table: &Table,
) -> Result<(BTreeMap<(String, String), Vec<Vec<String>>>, usize), CurriculaError> {
    let program_idx = table.column(columns::PROGRAM_NAME)?;
    let degree_idx = table.column(columns::DEGREE)?;

    let mut groups: BTreeMap<(String, String), Vec<Vec<String>>> = BTreeMap::new();
    let mut skipped = 0;
    for row in &table.rows {
        let program = Table::cell(row, program_idx).trim();
        let degree = Table::cell(row, degree_idx).trim();
        if program.is_empty() || degree.is_empty() {
            skipped += 1;
            continue;
        }
        groups
            .entry((program.to_string(), degree.to_string()))
            .or_default()
            .push(row.clone());
    }
    Ok((groups, skipped))
}

#[instrument(skip_all, fields(input = %input.display(), out_dir = %out_dir.display()))]
pub fn split_catalog(input: &Path, out_dir: &Path) -> Result<SplitSummary, CurriculaError> {
    let table = read_table(input)?;
    let (groups, skipped_rows) = partition_by_program(&table)?;
    if skipped_rows > 0 {
        warn!(skipped_rows, "Rows without program or degree were skipped");
    }

    fs::create_dir_all(out_dir)?;
    let mut files = Vec::with_capacity(groups.len());
    for ((program, degree), rows) in groups {
        let path = safe_join(out_dir, &split_file_name(&program, &degree))?;
        write_table(&path, &table.headers, rows)?;
        files.push(path);
    }

    info!(files = files.len(), "Catalog split by program");
    Ok(SplitSummary {
        files,
        skipped_rows,
    })
}
