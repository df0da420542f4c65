// curricula-core/src/application/discrepancy.rs

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::error::CurriculaError;
use crate::infrastructure::tables::{Table, read_table, write_table};

pub const DISCREPANCY_COLUMN: &str = "course_id";
pub const ACTIVE_ONLY_FILE: &str = "discrepancies_in_active_not_corrected.csv";
pub const CORRECTED_ONLY_FILE: &str = "discrepancies_in_corrected_not_active.csv";

/// Removes all whitespace and upper-cases, so `"math 101"` and `"MATH101"` compare equal.
pub fn normalize_course_id(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

fn course_ids(table: &Table, column: &str) -> Result<BTreeSet<String>, CurriculaError> {
    let idx = table.column(column)?;
    Ok(table
        .rows
        .iter()
        .map(|row| normalize_course_id(Table::cell(row, idx)))
        .filter(|id| !id.is_empty())
        .collect())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseDiscrepancies {
    pub total_active: usize,
    pub total_corrected: usize,
    pub matching: usize,
    pub active_not_corrected: Vec<String>,
    pub corrected_not_active: Vec<String>,
}

impl CourseDiscrepancies {
    pub fn compare(active: &BTreeSet<String>, corrected: &BTreeSet<String>) -> Self {
        Self {
            total_active: active.len(),
            total_corrected: corrected.len(),
            matching: active.intersection(corrected).count(),
            active_not_corrected: active.difference(corrected).cloned().collect(),
            corrected_not_active: corrected.difference(active).cloned().collect(),
        }
    }

    /// Writes both difference lists into `out_dir` and returns their paths.
    pub fn save(&self, out_dir: &Path) -> Result<(PathBuf, PathBuf), CurriculaError> {
        let active_path = out_dir.join(ACTIVE_ONLY_FILE);
        let corrected_path = out_dir.join(CORRECTED_ONLY_FILE);
        write_ids(&active_path, &self.active_not_corrected)?;
        write_ids(&corrected_path, &self.corrected_not_active)?;
        Ok((active_path, corrected_path))
    }
}

fn write_ids(path: &Path, ids: &[String]) -> Result<(), CurriculaError> {
    write_table(
        path,
        &[DISCREPANCY_COLUMN],
        ids.iter().map(|id| vec![id.clone()]),
    )?;
    Ok(())
}

#[derive(Debug, Clone)]
pub struct DiffRequest<'a> {
    pub active_path: &'a Path,
    pub active_column: &'a str,
    pub corrected_path: &'a Path,
    pub corrected_column: &'a str,
}

#[instrument(skip_all, fields(active = %request.active_path.display(), corrected = %request.corrected_path.display()))]
pub fn diff_course_lists(request: &DiffRequest<'_>) -> Result<CourseDiscrepancies, CurriculaError> {
    let active = course_ids(&read_table(request.active_path)?, request.active_column)?;
    let corrected = course_ids(&read_table(request.corrected_path)?, request.corrected_column)?;

    let report = CourseDiscrepancies::compare(&active, &corrected);
    info!(
        matching = report.matching,
        active_only = report.active_not_corrected.len(),
        corrected_only = report.corrected_not_active.len(),
        "Course lists compared"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_normalization() {
        assert_eq!(normalize_course_id(" math  101 "), "MATH101");
        assert_eq!(normalize_course_id("Cs\t2420"), "CS2420");
    }

    #[test]
    fn test_diff_end_to_end() -> Result<()> {
        let dir = tempdir()?;
        let active = dir.path().join("active.csv");
        let corrected = dir.path().join("corrected.csv");
        fs::write(&active, "subj_cou_nbr,title\nMATH 101,Algebra\nmath101,dup\nHIST 110,History\nBIOL 1010,Bio\n")?;
        fs::write(&corrected, "course_id\nMATH101\nBIOL1010\nCHEM 1210\n")?;

        let report = diff_course_lists(&DiffRequest {
            active_path: &active,
            active_column: "subj_cou_nbr",
            corrected_path: &corrected,
            corrected_column: "course_id",
        })?;

        assert_eq!(report.total_active, 3);
        assert_eq!(report.total_corrected, 3);
        assert_eq!(report.matching, 2);
        assert_eq!(report.active_not_corrected, vec!["HIST110"]);
        assert_eq!(report.corrected_not_active, vec!["CHEM1210"]);

        let (active_out, corrected_out) = report.save(dir.path())?;
        assert_eq!(fs::read_to_string(active_out)?, "course_id\nHIST110\n");
        assert_eq!(fs::read_to_string(corrected_out)?, "course_id\nCHEM1210\n");
        Ok(())
    }

    #[test]
    fn test_missing_column_is_an_error() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("active.csv");
        fs::write(&path, "other\nX\n")?;

        let result = diff_course_lists(&DiffRequest {
            active_path: &path,
            active_column: "subj_cou_nbr",
            corrected_path: &path,
            corrected_column: "course_id",
        });
        assert!(result.is_err());
        Ok(())
    }
}
