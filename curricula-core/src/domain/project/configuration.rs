// curricula-core/src/domain/project/configuration.rs

use crate::domain::requirements::RequirementsConfig;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// How the requirements table is written when the output file already exists.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Replace the file atomically.
    #[default]
    Overwrite,
    /// Add rows at the end; the header is written only for a new file.
    Append,
}

#[derive(Debug, Deserialize, Serialize, Validate, Clone, PartialEq)]
pub struct CurriculaConfig {
    #[serde(rename = "output-path", default = "default_output_path")]
    #[validate(length(min = 1, message = "Output path cannot be empty"))]
    pub output_path: String,

    #[serde(rename = "output-mode", default)]
    pub output_mode: OutputMode,

    #[validate(nested)]
    #[serde(default)]
    pub requirements: RequirementsConfig,
}

impl Default for CurriculaConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            output_mode: OutputMode::default(),
            requirements: RequirementsConfig::default(),
        }
    }
}

fn default_output_path() -> String {
    "requirements.csv".to_string()
}
