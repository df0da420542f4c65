pub mod project;

pub use crate::domain::project::CurriculaConfig;
pub use project::{apply_overrides, load_config, load_config_file};
