// curricula-core/src/domain/ports/catalog.rs

use crate::domain::catalog::CatalogRow;
use crate::error::CurriculaError;

/// Supplies the catalog snapshot for a run. The whole table is loaded up front.
pub trait CatalogSource: Send + Sync {
    fn load(&self) -> Result<Vec<CatalogRow>, CurriculaError>;

    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;
}
