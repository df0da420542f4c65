// curricula-core/src/application/verification.rs

use std::path::Path;
use tracing::{instrument, warn};

use crate::domain::requirements::{RequirementCategory, decode_entries};
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::tables::requirements::PROGRAM_COLUMN;
use crate::infrastructure::tables::{Table, read_table};

/// A list cell, or one element of it, that does not decode back into course groups.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationIssue {
    pub program: String,
    pub column: String,
    /// Position of the bad element; `None` when the cell itself is not a list.
    pub element: Option<usize>,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct VerificationReport {
    pub programs_checked: usize,
    pub cells_checked: usize,
    pub courses_decoded: usize,
    pub missing_columns: Vec<String>,
    pub issues: Vec<VerificationIssue>,
}

impl VerificationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

#[instrument]
pub fn verify_requirements_file(path: &Path) -> Result<VerificationReport, InfrastructureError> {
    verify_table(&read_table(path)?)
}

/// Decodes every list cell of an assembled requirements table, element by element.
pub fn verify_table(table: &Table) -> Result<VerificationReport, InfrastructureError> {
    let program_idx = table.column(PROGRAM_COLUMN)?;

    let mut report = VerificationReport::default();
    let mut list_columns = Vec::new();
    for category in RequirementCategory::ALL {
        let column = category.list_column();
        match table.optional_column(column) {
            Some(idx) => list_columns.push((column, idx)),
            None => {
                warn!(column, "List column absent from table, skipping");
                report.missing_columns.push(column.to_string());
            }
        }
    }

    for row in &table.rows {
        let program = Table::cell(row, program_idx);
        report.programs_checked += 1;

        for (column, idx) in &list_columns {
            let cell = Table::cell(row, *idx);
            if cell.trim().is_empty() {
                continue;
            }
            report.cells_checked += 1;

            let entries = match decode_entries(cell) {
                Ok(entries) => entries,
                Err(e) => {
                    report.issues.push(VerificationIssue {
                        program: program.to_string(),
                        column: column.to_string(),
                        element: None,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            // Good elements still count; each bad one is reported on its own.
            for (position, entry) in entries.into_iter().enumerate() {
                match entry {
                    Ok(group) => report.courses_decoded += group.courses().len(),
                    Err(e) => report.issues.push(VerificationIssue {
                        program: program.to_string(),
                        column: column.to_string(),
                        element: Some(position),
                        reason: e.to_string(),
                    }),
                }
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::tables::requirement_headers;
    use anyhow::Result;

    fn headers() -> Vec<String> {
        requirement_headers().into_iter().map(String::from).collect()
    }

    fn row(program: &str, common_core: &str) -> Vec<String> {
        let mut cells = vec![String::new(); 15];
        cells[0] = program.to_string();
        cells[5] = "True".to_string();
        cells[6] = common_core.to_string();
        cells
    }

    #[test]
    fn test_clean_table_has_no_issues() -> Result<()> {
        let table = Table::new(
            headers(),
            vec![row("P1", "[['credits_2', 'MATH 101', 'MATH 102'], 'HIST 110']")],
        );

        let report = verify_table(&table)?;

        assert!(report.is_clean());
        assert_eq!(report.programs_checked, 1);
        assert_eq!(report.cells_checked, 1);
        assert_eq!(report.courses_decoded, 3);
        assert!(report.missing_columns.is_empty());
        Ok(())
    }

    #[test]
    fn test_broken_cells_are_reported_per_program() -> Result<()> {
        let table = Table::new(
            headers(),
            vec![
                row("P1", "[['credits_2', 'MATH 101'"),
                row("P2", "['HIST 110']"),
                row("P3", "[[]]"),
            ],
        );

        let report = verify_table(&table)?;

        assert_eq!(report.issues.len(), 2);
        assert_eq!(report.issues[0].program, "P1");
        assert_eq!(report.issues[0].column, "majorCommonCoreList");
        assert_eq!(report.issues[0].element, None);
        assert_eq!(report.issues[1].program, "P3");
        assert_eq!(report.issues[1].element, Some(0));
        Ok(())
    }

    #[test]
    fn test_bad_element_does_not_hide_good_ones() -> Result<()> {
        let table = Table::new(
            headers(),
            vec![row(
                "P1",
                "[['credits_2', 'MATH 101', 'MATH 102'], [], 'HIST 110', ['credits_x', 'ART 1']]",
            )],
        );

        let report = verify_table(&table)?;

        let positions: Vec<Option<usize>> = report.issues.iter().map(|i| i.element).collect();
        assert_eq!(positions, vec![Some(1), Some(3)]);
        assert_eq!(report.courses_decoded, 3);
        Ok(())
    }

    #[test]
    fn test_program_column_is_required() {
        let table = Table::new(vec!["Name".into()], vec![]);
        assert!(matches!(
            verify_table(&table),
            Err(InfrastructureError::MissingInputColumn { .. })
        ));
    }

    #[test]
    fn test_absent_list_columns_are_listed() -> Result<()> {
        let table = Table::new(vec!["Program".into(), "prereqToMajorList".into()], vec![]);
        let report = verify_table(&table)?;
        assert_eq!(report.missing_columns.len(), 6);
        Ok(())
    }
}
