// curricula-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(curricula::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- TABULAR ---
    #[error("CSV Error: {0}")]
    #[diagnostic(code(curricula::infra::csv))]
    Csv(#[from] csv::Error),

    #[error("Missing required column '{column}' in {path}")]
    #[diagnostic(
        code(curricula::infra::missing_column),
        help("Check the header row of the input table.")
    )]
    MissingInputColumn { column: String, path: String },

    #[error("Unreadable source '{path}': {reason}")]
    #[diagnostic(
        code(curricula::infra::unreadable_source),
        help("Make sure the file exists and is a comma-separated table.")
    )]
    UnreadableSource { path: String, reason: String },

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(curricula::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON Serialization Error: {0}")]
    #[diagnostic(code(curricula::infra::json))]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    #[diagnostic(code(curricula::infra::config))]
    ConfigError(String),

    #[error("Configuration not found at '{0}'")]
    #[diagnostic(code(curricula::infra::config_missing))]
    ConfigNotFound(String),
}
