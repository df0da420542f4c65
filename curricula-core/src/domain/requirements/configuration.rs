// curricula-core/src/domain/requirements/configuration.rs

use crate::domain::error::DomainError;
use crate::domain::requirements::category::{CategorySpec, RequirementCategory};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use validator::{Validate, ValidationError};

/// Which rows feed the group builder once a category is detected for a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupScope {
    /// Only the program's own rows.
    #[default]
    Program,
    /// Every catalog row matching the category keywords, whatever its program.
    Catalog,
}

impl GroupScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Program => "program",
            Self::Catalog => "catalog",
        }
    }
}

impl fmt::Display for GroupScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for GroupScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "program" => Ok(Self::Program),
            "catalog" => Ok(Self::Catalog),
            _ => Err(format!("Unknown group scope: {}", s)),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Validate, Clone, Default, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct RequirementsConfig {
    #[serde(default)]
    pub group_scope: GroupScope,

    /// Keyword overrides. Categories not listed keep their built-in keywords.
    #[validate(nested)]
    #[validate(custom(function = "validate_unique_categories"))]
    #[serde(default)]
    pub categories: Vec<CategorySpec>,
}

impl RequirementsConfig {
    /// Full category table in output order, overrides applied.
    pub fn category_table(&self) -> Vec<CategorySpec> {
        RequirementCategory::ALL
            .into_iter()
            .map(|category| {
                self.categories
                    .iter()
                    .find(|spec| spec.category == category)
                    .cloned()
                    .unwrap_or_else(|| CategorySpec::builtin(category))
            })
            .collect()
    }

    pub fn override_keywords<I, S>(
        &mut self,
        category: &str,
        keywords: I,
    ) -> Result<(), DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let category: RequirementCategory = category.parse()?;
        self.categories.retain(|spec| spec.category != category);
        self.categories.push(CategorySpec::new(category, keywords));
        Ok(())
    }
}

fn validate_unique_categories(specs: &[CategorySpec]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for spec in specs {
        if !seen.insert(spec.category) {
            let mut err = ValidationError::new("duplicate_category");
            err.message = Some(format!("Category '{}' is listed twice", spec.category).into());
            return Err(err);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_default_table_is_builtin() {
        let config = RequirementsConfig::default();
        assert_eq!(config.group_scope, GroupScope::Program);
        assert_eq!(config.category_table(), CategorySpec::builtin_table());
    }

    #[test]
    fn test_overrides_replace_only_their_category() -> Result<()> {
        let mut config = RequirementsConfig::default();
        config.override_keywords("thesis_capstone", ["Capstone Course", "Senior Thesis"])?;

        let table = config.category_table();
        assert_eq!(table.len(), RequirementCategory::ALL.len());
        assert_eq!(table[3].keywords, vec!["Capstone Course", "Senior Thesis"]);
        assert_eq!(table[0], CategorySpec::builtin(RequirementCategory::PrereqToMajor));

        assert!(config.override_keywords("nope", ["x"]).is_err());
        Ok(())
    }

    #[test]
    fn test_duplicate_categories_fail_validation() {
        let config = RequirementsConfig {
            group_scope: GroupScope::Catalog,
            categories: vec![
                CategorySpec::new(RequirementCategory::OtherGradReq, ["a"]),
                CategorySpec::new(RequirementCategory::OtherGradReq, ["b"]),
            ],
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_nested_keyword_validation() {
        let config = RequirementsConfig {
            group_scope: GroupScope::Program,
            categories: vec![CategorySpec::new(
                RequirementCategory::OtherGradReq,
                Vec::<String>::new(),
            )],
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_scope_parsing() {
        assert_eq!("CATALOG".parse::<GroupScope>(), Ok(GroupScope::Catalog));
        assert!("global".parse::<GroupScope>().is_err());
    }
}
