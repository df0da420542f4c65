// curricula-core/src/application/renormalize.rs

use std::path::Path;
use tracing::{info, instrument, warn};

use crate::domain::requirements::{RequirementCategory, encode_groups, normalize_encoded};
use crate::error::CurriculaError;
use crate::infrastructure::tables::requirements::PROGRAM_COLUMN;
use crate::infrastructure::tables::{Table, read_table, write_table};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenormalizeSummary {
    pub cells_rewritten: usize,
    pub elements_skipped: usize,
    /// Cells left untouched because they are not a list at all.
    pub cells_unreadable: usize,
}

/// Runs the label normalizer over every list cell already stored in `table`.
///
/// Notes are stripped from anchors and `credits_unknown` groups are flattened. Malformed
/// elements are dropped with a warning; the rest of the cell is kept.
pub fn renormalize_table(table: &mut Table) -> Result<RenormalizeSummary, CurriculaError> {
    let program_idx = table.column(PROGRAM_COLUMN)?;
    let list_columns: Vec<(&'static str, usize)> = RequirementCategory::ALL
        .iter()
        .filter_map(|c| {
            table
                .optional_column(c.list_column())
                .map(|idx| (c.list_column(), idx))
        })
        .collect();

    let mut summary = RenormalizeSummary::default();
    for row in &mut table.rows {
        let program = Table::cell(row, program_idx).to_string();

        for &(column, idx) in &list_columns {
            let Some(cell) = row.get_mut(idx) else {
                continue;
            };
            if cell.trim().is_empty() {
                continue;
            }

            match normalize_encoded(cell) {
                Ok((groups, skipped)) => {
                    for error in &skipped {
                        warn!(%program, column, %error, "Dropping malformed group");
                    }
                    summary.elements_skipped += skipped.len();

                    let encoded = encode_groups(&groups);
                    if *cell != encoded {
                        *cell = encoded;
                        summary.cells_rewritten += 1;
                    }
                }
                Err(error) => {
                    warn!(%program, column, %error, "Cell is not a group list, left as is");
                    summary.cells_unreadable += 1;
                }
            }
        }
    }

    Ok(summary)
}

#[instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
pub fn renormalize_requirements_file(
    input: &Path,
    output: &Path,
) -> Result<RenormalizeSummary, CurriculaError> {
    let mut table = read_table(input)?;
    let summary = renormalize_table(&mut table)?;
    write_table(output, &table.headers, table.rows)?;
    info!(
        rewritten = summary.cells_rewritten,
        skipped = summary.elements_skipped,
        "Group lists normalized"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_cells_are_normalized_and_bad_elements_dropped() -> Result<()> {
        let mut table = Table::new(
            vec!["Program".into(), "majorCommonCoreList".into(), "otherGradReq".into()],
            vec![vec![
                "Art (BA)".into(),
                r#"["['credits_3_Writing', 'ENGL 101']", ['credits_unknown', 'PHIL 201', 'PHIL 202'], "[oops"]"#.into(),
                "[['credits_2', 'ART 100']]".into(),
            ]],
        );

        let summary = renormalize_table(&mut table)?;

        assert_eq!(
            table.rows[0][1],
            "[['credits_3', 'ENGL 101'], 'PHIL 201', 'PHIL 202']"
        );
        assert_eq!(table.rows[0][2], "[['credits_2', 'ART 100']]");
        assert_eq!(
            summary,
            RenormalizeSummary {
                cells_rewritten: 1,
                elements_skipped: 1,
                cells_unreadable: 0,
            }
        );
        Ok(())
    }

    #[test]
    fn test_unreadable_cell_is_left_alone() -> Result<()> {
        let mut table = Table::new(
            vec!["Program".into(), "reqGenEdsList".into()],
            vec![vec!["Art (BA)".into(), "not a list".into()]],
        );

        let summary = renormalize_table(&mut table)?;

        assert_eq!(table.rows[0][1], "not a list");
        assert_eq!(summary.cells_unreadable, 1);
        Ok(())
    }

    #[test]
    fn test_file_round_trip() -> Result<()> {
        let dir = tempdir()?;
        let input = dir.path().join("legacy.csv");
        fs::write(
            &input,
            "Program,ChooseThesisCapstone\nArt (BA),\"[['credits_1_Capstone', 'ART 499']]\"\n",
        )?;
        let output = dir.path().join("clean.csv");

        renormalize_requirements_file(&input, &output)?;

        assert_eq!(
            fs::read_to_string(&output)?,
            "Program,ChooseThesisCapstone\nArt (BA),\"[['credits_1', 'ART 499']]\"\n"
        );
        Ok(())
    }
}
