// curricula-core/src/infrastructure/tables/catalog.rs

use crate::domain::catalog::{CatalogRow, compose_program_name};
use crate::domain::ports::CatalogSource;
use crate::error::CurriculaError;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::tables::table::{Table, read_table};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

pub mod columns {
    pub const PROGRAM_NAME: &str = "ProgramName";
    pub const DEGREE: &str = "Degree";
    pub const EMPHASIS_NAME: &str = "EmphasisName";
    pub const DESCRIPTION: &str = "Description";
    pub const SUBJECT_ABBREVIATION: &str = "SubjectAbbreviation";
    pub const COURSE_NUMBER: &str = "CourseNumber";
    pub const GROUP_CREDITS: &str = "GroupCredits";
    pub const GROUP_CATEGORY_NOTES: &str = "Group_CategoryNotes";
    pub const GROUP_CATEGORY_TITLE: &str = "Group_CategoryTitle";
    pub const SERIES_HEADING: &str = "SeriesHeading";
}

/// Reads the catalog export (one row per course within a requirement group).
pub struct CsvCatalogSource {
    path: PathBuf,
}

impl CsvCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for CsvCatalogSource {
    fn load(&self) -> Result<Vec<CatalogRow>, CurriculaError> {
        load_catalog(&self.path).map_err(CurriculaError::Infrastructure)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[instrument]
pub fn load_catalog(path: &Path) -> Result<Vec<CatalogRow>, InfrastructureError> {
    let table = read_table(path)?;
    let rows = catalog_rows(&table)?;
    info!(rows = rows.len(), "Catalog loaded");
    Ok(rows)
}

/// Maps table cells onto [`CatalogRow`]s. `Degree`, `EmphasisName` and
/// `Group_CategoryNotes` are optional; every other column is required.
pub fn catalog_rows(table: &Table) -> Result<Vec<CatalogRow>, InfrastructureError> {
    let program = table.column(columns::PROGRAM_NAME)?;
    let description = table.column(columns::DESCRIPTION)?;
    let subject = table.column(columns::SUBJECT_ABBREVIATION)?;
    let number = table.column(columns::COURSE_NUMBER)?;
    let credits = table.column(columns::GROUP_CREDITS)?;
    let degree = table.optional_column(columns::DEGREE);
    let emphasis = table.optional_column(columns::EMPHASIS_NAME);
    let note = table.optional_column(columns::GROUP_CATEGORY_NOTES);

    let rows = table
        .rows
        .iter()
        .map(|row| {
            let cell = |idx: usize| Table::cell(row, idx);
            CatalogRow {
                program_name: compose_program_name(
                    cell(program),
                    degree.map(cell),
                    emphasis.map(cell),
                ),
                description: cell(description).to_string(),
                subject_abbreviation: cell(subject).to_string(),
                course_number: cell(number).to_string(),
                group_credits: cell(credits).to_string(),
                group_category_note: note
                    .map(cell)
                    .map(str::trim)
                    .filter(|n| !n.is_empty())
                    .map(str::to_string),
            }
        })
        .collect();

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    const HEADER: &str = "ProgramName,Degree,EmphasisName,Description,SubjectAbbreviation,CourseNumber,GroupCredits,Group_CategoryNotes";

    #[test]
    fn test_load_catalog_composes_program_names() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("catalog.csv");
        fs::write(
            &path,
            format!(
                "{}\nBiology,BS,,Major Common Core,BIOL,101,Choose 4 Credits, Lab \nBiology,BS,Ecology,Capstone Course,BIOL,499,Choose 3 Credits,\n",
                HEADER
            ),
        )?;

        let rows = CsvCatalogSource::new(&path).load()?;

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].program_name, "Biology (BS)");
        assert_eq!(rows[0].group_category_note.as_deref(), Some("Lab"));
        assert_eq!(rows[0].subject_course(), "BIOL 101");
        assert_eq!(rows[1].program_name, "Biology (BS) Ecology");
        assert_eq!(rows[1].group_category_note, None);
        Ok(())
    }

    #[test]
    fn test_optional_columns_may_be_absent() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("catalog.csv");
        fs::write(
            &path,
            "ProgramName,Description,SubjectAbbreviation,CourseNumber,GroupCredits\nHistory,Capstone Course,HIST,490,Choose 3\n",
        )?;

        let rows = load_catalog(&path)?;

        assert_eq!(rows[0].program_name, "History");
        assert_eq!(rows[0].group_category_note, None);
        Ok(())
    }

    #[test]
    fn test_missing_required_column_is_fatal() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("catalog.csv");
        fs::write(&path, "ProgramName,Description\nHistory,Capstone Course\n")?;

        let err = load_catalog(&path).err();

        assert!(matches!(
            err,
            Some(InfrastructureError::MissingInputColumn { ref column, .. }) if column == "SubjectAbbreviation"
        ));
        Ok(())
    }
}
