// curricula-core/src/domain/ports/requirements.rs

use crate::domain::requirements::ProgramRequirementRecord;
use crate::error::CurriculaError;

/// Receives the finished records of a run.
pub trait RequirementSink: Send + Sync {
    fn write(&self, records: &[ProgramRequirementRecord]) -> Result<(), CurriculaError>;

    fn describe(&self) -> String;
}
