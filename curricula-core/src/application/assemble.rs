// curricula-core/src/application/assemble.rs

use std::time::Instant;
use tracing::{info, instrument, warn};

use crate::domain::ports::{CatalogSource, RequirementSink};
use crate::domain::requirements::{Assembly, RequirementAssembler, RequirementsConfig};
use crate::error::CurriculaError;

/// Load -> classify -> write. The catalog is read once and the sink is called once with
/// the complete record list; nothing is written if loading fails.
#[instrument(skip_all, fields(source = %source.describe(), sink = %sink.describe()))]
pub fn run_assembly(
    source: &dyn CatalogSource,
    sink: &dyn RequirementSink,
    config: &RequirementsConfig,
) -> Result<Assembly, CurriculaError> {
    let start = Instant::now();

    let catalog = source.load()?;
    info!(rows = catalog.len(), scope = %config.group_scope, "Catalog snapshot ready");

    let assembler = RequirementAssembler::new(config)?;
    let assembly = assembler.assemble(&catalog);

    for warning in &assembly.warnings {
        warn!(
            program = %warning.program,
            category = %warning.category,
            error = %warning.error,
            "Category reported as absent"
        );
    }

    sink.write(&assembly.records)?;

    info!(
        programs = assembly.records.len(),
        warnings = assembly.warnings.len(),
        "Assembly finished in {:.2?}",
        start.elapsed()
    );
    Ok(assembly)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::CatalogRow;
    use crate::domain::requirements::{ProgramRequirementRecord, RequirementCategory};
    use crate::infrastructure::error::InfrastructureError;
    use anyhow::Result;
    use std::sync::Mutex;

    struct MemorySource {
        rows: Vec<CatalogRow>,
    }

    impl CatalogSource for MemorySource {
        fn load(&self) -> Result<Vec<CatalogRow>, CurriculaError> {
            Ok(self.rows.clone())
        }
        fn describe(&self) -> String {
            "memory".into()
        }
    }

    struct FailingSource;

    impl CatalogSource for FailingSource {
        fn load(&self) -> Result<Vec<CatalogRow>, CurriculaError> {
            Err(InfrastructureError::UnreadableSource {
                path: "catalog.csv".into(),
                reason: "not found".into(),
            }
            .into())
        }
        fn describe(&self) -> String {
            "failing".into()
        }
    }

    #[derive(Default)]
    struct MemorySink {
        written: Mutex<Vec<Vec<ProgramRequirementRecord>>>,
    }

    impl RequirementSink for MemorySink {
        fn write(&self, records: &[ProgramRequirementRecord]) -> Result<(), CurriculaError> {
            self.written
                .lock()
                .map_err(|e| CurriculaError::InternalError(e.to_string()))?
                .push(records.to_vec());
            Ok(())
        }
        fn describe(&self) -> String {
            "memory".into()
        }
    }

    #[test]
    fn test_run_assembly_writes_every_program_once() -> Result<()> {
        let source = MemorySource {
            rows: vec![
                CatalogRow {
                    program_name: "P1".into(),
                    description: "Capstone Course".into(),
                    subject_abbreviation: "ART".into(),
                    course_number: "499".into(),
                    group_credits: "Choose 3 Credits".into(),
                    group_category_note: None,
                },
                CatalogRow {
                    program_name: "P2".into(),
                    description: "Elective".into(),
                    ..Default::default()
                },
            ],
        };
        let sink = MemorySink::default();

        let assembly = run_assembly(&source, &sink, &RequirementsConfig::default())?;

        assert_eq!(assembly.records.len(), 2);
        assert_eq!(assembly.count_present(RequirementCategory::ThesisCapstone), 1);
        let written = sink
            .written
            .lock()
            .map_err(|e| anyhow::anyhow!(e.to_string()))?;
        assert_eq!(written.len(), 1);
        assert_eq!(written[0], assembly.records);
        Ok(())
    }

    #[test]
    fn test_source_failure_aborts_before_writing() {
        let sink = MemorySink::default();

        let result = run_assembly(&FailingSource, &sink, &RequirementsConfig::default());

        assert!(matches!(
            result,
            Err(CurriculaError::Infrastructure(
                InfrastructureError::UnreadableSource { .. }
            ))
        ));
        assert!(sink.written.lock().map(|w| w.is_empty()).unwrap_or(false));
    }
}
