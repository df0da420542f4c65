// curricula-core/src/application/triage.rs

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::error::CurriculaError;
use crate::infrastructure::tables::catalog::columns;
use crate::infrastructure::tables::{Table, read_table, write_table};

pub const EASY_FILE: &str = "easy.csv";
pub const HARD_FILE: &str = "hard.csv";

/// Programs listed by how much structure their catalog rows carry.
///
/// A row is "easy" when it has neither a category title nor a series heading. A
/// program with both kinds of rows appears in both lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgramTriage {
    pub easy: Vec<(String, String)>,
    pub hard: Vec<(String, String)>,
}

impl ProgramTriage {
    pub fn classify(table: &Table) -> Result<Self, CurriculaError> {
        let program_idx = table.column(columns::PROGRAM_NAME)?;
        let degree_idx = table.optional_column(columns::DEGREE);
        let title_idx = table.optional_column(columns::GROUP_CATEGORY_TITLE);
        let heading_idx = table.optional_column(columns::SERIES_HEADING);

        let mut triage = Self::default();
        let mut seen_easy = HashSet::new();
        let mut seen_hard = HashSet::new();
        for row in &table.rows {
            let program = Table::cell(row, program_idx).to_string();
            let degree = degree_idx
                .map(|i| Table::cell(row, i).to_string())
                .unwrap_or_default();

            let (list, seen) = if is_set(row, title_idx) || is_set(row, heading_idx) {
                (&mut triage.hard, &mut seen_hard)
            } else {
                (&mut triage.easy, &mut seen_easy)
            };
            if seen.insert(program.clone()) {
                list.push((program, degree));
            }
        }
        Ok(triage)
    }

    pub fn save(&self, out_dir: &Path) -> Result<(PathBuf, PathBuf), CurriculaError> {
        let easy = out_dir.join(EASY_FILE);
        let hard = out_dir.join(HARD_FILE);
        write_programs(&easy, &self.easy)?;
        write_programs(&hard, &self.hard)?;
        Ok((easy, hard))
    }
}

fn is_set(row: &[String], idx: Option<usize>) -> bool {
    idx.is_some_and(|i| !Table::cell(row, i).trim().is_empty())
}

fn write_programs(path: &Path, programs: &[(String, String)]) -> Result<(), CurriculaError> {
    write_table(
        path,
        &[columns::PROGRAM_NAME, columns::DEGREE],
        programs.iter().map(|(p, d)| vec![p.clone(), d.clone()]),
    )?;
    Ok(())
}

#[instrument]
pub fn triage_catalog(input: &Path) -> Result<ProgramTriage, CurriculaError> {
    let triage = ProgramTriage::classify(&read_table(input)?)?;
    info!(easy = triage.easy.len(), hard = triage.hard.len(), "Programs triaged");
    Ok(triage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_rows_are_triaged_and_deduplicated() -> Result<()> {
        let dir = tempdir()?;
        let input = dir.path().join("catalog.csv");
        fs::write(
            &input,
            "ProgramName,Degree,Group_CategoryTitle,SeriesHeading\n\
             Art,BA,,\n\
             Art,BA,,\n\
             Biology,BS,Core,\n\
             Biology,BS,,\n\
             Chemistry,BS,,Series A\n",
        )?;

        let triage = triage_catalog(&input)?;

        assert_eq!(
            triage.easy,
            vec![("Art".into(), "BA".into()), ("Biology".into(), "BS".into())]
        );
        assert_eq!(
            triage.hard,
            vec![("Biology".into(), "BS".into()), ("Chemistry".into(), "BS".into())]
        );

        let (easy, _) = triage.save(dir.path())?;
        assert_eq!(fs::read_to_string(easy)?, "ProgramName,Degree\nArt,BA\nBiology,BS\n");
        Ok(())
    }

    #[test]
    fn test_without_structure_columns_everything_is_easy() -> Result<()> {
        let table = Table::new(
            vec!["ProgramName".into()],
            vec![vec!["Art".into()], vec!["Music".into()]],
        );
        let triage = ProgramTriage::classify(&table)?;
        assert_eq!(triage.easy.len(), 2);
        assert!(triage.hard.is_empty());
        Ok(())
    }
}
