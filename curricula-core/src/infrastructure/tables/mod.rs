// curricula-core/src/infrastructure/tables/mod.rs

pub mod catalog;
pub mod requirements;
pub mod table;

pub use catalog::{CsvCatalogSource, load_catalog};
pub use requirements::{CsvRequirementSink, requirement_headers};
pub use table::{Table, read_table, render_table, write_table};
