// curricula-core/src/infrastructure/config/project.rs

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use validator::Validate;

use crate::domain::project::CurriculaConfig;
use crate::domain::requirements::GroupScope;
use crate::infrastructure::error::InfrastructureError;

const CONFIG_CANDIDATES: [&str; 2] = ["curricula.yaml", "curricula.yml"];

pub const ENV_OUTPUT_PATH: &str = "CURRICULA_OUTPUT_PATH";
pub const ENV_GROUP_SCOPE: &str = "CURRICULA_GROUP_SCOPE";

/// Loads `curricula.yaml` from `project_dir`, falling back to built-in defaults when no
/// file exists, then applies environment overrides.
#[instrument(skip(project_dir))]
pub fn load_config(project_dir: &Path) -> Result<CurriculaConfig, InfrastructureError> {
    let mut config = match find_config(project_dir) {
        Some(path) => read_config(&path)?,
        None => {
            info!(dir = ?project_dir, "No configuration file found, using built-in defaults");
            CurriculaConfig::default()
        }
    };

    // Pattern 'Layering': CURRICULA_GROUP_SCOPE=catalog curricula assemble ...
    apply_overrides(&mut config, |key| std::env::var(key).ok())?;
    validate(&config)?;
    Ok(config)
}

/// Loads an explicit configuration file; a missing file is an error here.
pub fn load_config_file(path: &Path) -> Result<CurriculaConfig, InfrastructureError> {
    if !path.exists() {
        return Err(InfrastructureError::ConfigNotFound(
            path.display().to_string(),
        ));
    }
    let mut config = read_config(path)?;
    apply_overrides(&mut config, |key| std::env::var(key).ok())?;
    validate(&config)?;
    Ok(config)
}

fn find_config(root: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(|name| root.join(name))
        .find(|p| p.exists())
}

fn read_config(path: &Path) -> Result<CurriculaConfig, InfrastructureError> {
    info!(path = ?path, "Loading configuration");
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(CurriculaConfig::default());
    }
    Ok(serde_yaml::from_str(&content)?)
}

/// Applies overrides looked up through `lookup` (the process environment in production).
pub fn apply_overrides<F>(config: &mut CurriculaConfig, lookup: F) -> Result<(), InfrastructureError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup(ENV_OUTPUT_PATH) {
        info!(old = ?config.output_path, new = ?val, "Overriding output path via ENV");
        config.output_path = val;
    }
    if let Some(val) = lookup(ENV_GROUP_SCOPE) {
        let scope: GroupScope = val.parse().map_err(InfrastructureError::ConfigError)?;
        info!(old = %config.requirements.group_scope, new = %scope, "Overriding group scope via ENV");
        config.requirements.group_scope = scope;
    }
    Ok(())
}

fn validate(config: &CurriculaConfig) -> Result<(), InfrastructureError> {
    config
        .validate()
        .map_err(|e| InfrastructureError::ConfigError(e.to_string()))
}
