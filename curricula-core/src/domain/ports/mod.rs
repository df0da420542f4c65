// curricula-core/src/domain/ports/mod.rs

pub mod catalog;
pub mod requirements;

pub use catalog::CatalogSource;
pub use requirements::RequirementSink;
