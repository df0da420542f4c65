// curricula-core/src/infrastructure/tables/requirements.rs

use crate::domain::ports::RequirementSink;
use crate::domain::project::OutputMode;
use crate::domain::requirements::{ProgramRequirementRecord, RequirementCategory, encode_optional};
use crate::error::CurriculaError;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::{append_write, atomic_write, is_missing_or_empty};
use crate::infrastructure::tables::table::render_table;
use std::path::PathBuf;
use tracing::info;

pub const PROGRAM_COLUMN: &str = "Program";

/// `Program`, then a flag/list column pair per category.
pub fn requirement_headers() -> Vec<&'static str> {
    let mut headers = vec![PROGRAM_COLUMN];
    for category in RequirementCategory::ALL {
        headers.push(category.flag_column());
        headers.push(category.list_column());
    }
    headers
}

pub fn record_cells(record: &ProgramRequirementRecord) -> Vec<String> {
    let mut cells = vec![record.program.clone()];
    for category in RequirementCategory::ALL {
        cells.push(flag_cell(record.has(category)).to_string());
        cells.push(encode_optional(record.groups(category)));
    }
    cells
}

fn flag_cell(present: bool) -> &'static str {
    if present { "True" } else { "False" }
}

pub fn render_requirements(
    records: &[ProgramRequirementRecord],
    include_header: bool,
) -> Result<Vec<u8>, InfrastructureError> {
    render_table(
        &requirement_headers(),
        records.iter().map(record_cells),
        include_header,
    )
}

/// Writes the requirements table as CSV.
pub struct CsvRequirementSink {
    path: PathBuf,
    mode: OutputMode,
}

impl CsvRequirementSink {
    pub fn new(path: impl Into<PathBuf>, mode: OutputMode) -> Self {
        Self {
            path: path.into(),
            mode,
        }
    }
}

impl RequirementSink for CsvRequirementSink {
    fn write(&self, records: &[ProgramRequirementRecord]) -> Result<(), CurriculaError> {
        match self.mode {
            OutputMode::Overwrite => {
                atomic_write(&self.path, render_requirements(records, true)?)?;
            }
            OutputMode::Append => {
                let fresh = is_missing_or_empty(&self.path);
                append_write(&self.path, render_requirements(records, fresh)?)?;
            }
        }
        info!(path = %self.path.display(), records = records.len(), "Requirements table written");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::requirements::{CategoryRequirement, CourseGroup, CreditLabel};
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    fn record(program: &str) -> ProgramRequirementRecord {
        ProgramRequirementRecord {
            program: program.to_string(),
            requirements: RequirementCategory::ALL
                .into_iter()
                .map(|category| match category {
                    RequirementCategory::MajorCommonCore => CategoryRequirement::found(
                        category,
                        vec![
                            CourseGroup::merged(CreditLabel::credits("2"), ["MATH 101", "MATH 102"]),
                            CourseGroup::standalone("HIST 110"),
                        ],
                    ),
                    _ => CategoryRequirement::absent(category),
                })
                .collect(),
        }
    }

    #[test]
    fn test_headers_follow_category_order() {
        let headers = requirement_headers();
        assert_eq!(headers.len(), 15);
        assert_eq!(headers[0], "Program");
        assert_eq!(headers[7], "hasThesisCapstone");
        assert_eq!(headers[8], "ChooseThesisCapstone");
        assert_eq!(headers[14], "otherGradReq");
    }

    #[test]
    fn test_record_cells_encode_flags_and_lists() {
        let cells = record_cells(&record("P1"));
        assert_eq!(cells[1], "False");
        assert_eq!(cells[2], "");
        assert_eq!(cells[5], "True");
        assert_eq!(cells[6], "[['credits_2', 'MATH 101', 'MATH 102'], 'HIST 110']");
    }

    #[test]
    fn test_append_mode_writes_header_once() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("requirements.csv");
        let sink = CsvRequirementSink::new(&path, OutputMode::Append);

        sink.write(&[record("P1")])?;
        sink.write(&[record("P2")])?;

        let content = fs::read_to_string(&path)?;
        assert_eq!(content.matches("Program,").count(), 1);
        assert_eq!(content.lines().count(), 3);
        Ok(())
    }

    #[test]
    fn test_overwrite_mode_replaces_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("requirements.csv");
        let sink = CsvRequirementSink::new(&path, OutputMode::Overwrite);

        sink.write(&[record("P1")])?;
        sink.write(&[record("P2")])?;

        let content = fs::read_to_string(&path)?;
        assert_eq!(content.lines().count(), 2);
        assert!(content.contains("P2,"));
        assert!(!content.contains("P1,"));
        Ok(())
    }
}
