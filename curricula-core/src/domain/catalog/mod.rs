// curricula-core/src/domain/catalog/mod.rs

pub mod row;

pub use row::{CatalogRow, compose_program_name};
