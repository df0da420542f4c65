// curricula-core/src/domain/requirements/category.rs

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::{Validate, ValidationError};

// Declaration order is the output column order; `Ord` relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementCategory {
    PrereqToMajor,
    RequiredGenEds,
    MajorCommonCore,
    ThesisCapstone,
    RestrictedElectives,
    UnrestrictedElectives,
    OtherGradReq,
}

impl RequirementCategory {
    pub const ALL: [RequirementCategory; 7] = [
        Self::PrereqToMajor,
        Self::RequiredGenEds,
        Self::MajorCommonCore,
        Self::ThesisCapstone,
        Self::RestrictedElectives,
        Self::UnrestrictedElectives,
        Self::OtherGradReq,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PrereqToMajor => "prereq_to_major",
            Self::RequiredGenEds => "required_gen_eds",
            Self::MajorCommonCore => "major_common_core",
            Self::ThesisCapstone => "thesis_capstone",
            Self::RestrictedElectives => "restricted_electives",
            Self::UnrestrictedElectives => "unrestricted_electives",
            Self::OtherGradReq => "other_grad_req",
        }
    }

    /// Boolean presence column in the output table.
    pub fn flag_column(&self) -> &'static str {
        match self {
            Self::PrereqToMajor => "hasPrereqToMajor",
            Self::RequiredGenEds => "hasReqGenEds",
            Self::MajorCommonCore => "hasMajorCommonCore",
            Self::ThesisCapstone => "hasThesisCapstone",
            Self::RestrictedElectives => "hasMajorRestrictiveElectives",
            Self::UnrestrictedElectives => "hasMajorUnrestrictedElectives",
            Self::OtherGradReq => "hasOtherGradReq",
        }
    }

    /// Encoded group list column in the output table.
    pub fn list_column(&self) -> &'static str {
        match self {
            Self::PrereqToMajor => "prereqToMajorList",
            Self::RequiredGenEds => "reqGenEdsList",
            Self::MajorCommonCore => "majorCommonCoreList",
            Self::ThesisCapstone => "ChooseThesisCapstone",
            Self::RestrictedElectives => "majorRestrictiveElectivesList",
            Self::UnrestrictedElectives => "majorUnrestrictedElectivesList",
            Self::OtherGradReq => "otherGradReq",
        }
    }

    pub fn default_keywords(&self) -> &'static [&'static str] {
        match self {
            Self::PrereqToMajor => &["Prerequisites to the Major"],
            Self::RequiredGenEds => &["Required General Education", "General Electives"],
            Self::MajorCommonCore => &[
                "Major Common Core",
                "Common Core",
                "Emphasis Common Core",
                "Major Emphasis",
                "Major EmphasisHUMAN RESOURCE MANAGEMENT",
            ],
            Self::ThesisCapstone => &["Capstone Course"],
            Self::RestrictedElectives => &[
                "Major Restricted Electives",
                "Emphasis Restricted Electives",
                "Restricted Electives",
            ],
            Self::UnrestrictedElectives => &[
                "Major Unrestricted Electives",
                "Emphasis Unrestricted Electives",
                "Major Unrestricted",
            ],
            Self::OtherGradReq => &["Other Graduation Requirements", "Research/Methods Course(s)"],
        }
    }
}

impl fmt::Display for RequirementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RequirementCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| DomainError::UnknownCategory(s.to_string()))
    }
}

/// A requirement category and the literal, case-sensitive substrings that signal it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CategorySpec {
    pub category: RequirementCategory,

    #[validate(length(min = 1, message = "Keyword set cannot be empty"))]
    #[validate(custom(function = "validate_keywords"))]
    pub keywords: Vec<String>,
}

impl CategorySpec {
    pub fn new<I, S>(category: RequirementCategory, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category,
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    pub fn builtin(category: RequirementCategory) -> Self {
        Self::new(category, category.default_keywords().iter().copied())
    }

    /// The compiled-in table, one spec per category in output order.
    pub fn builtin_table() -> Vec<CategorySpec> {
        RequirementCategory::ALL
            .into_iter()
            .map(Self::builtin)
            .collect()
    }

    pub fn output_list_field(&self) -> &'static str {
        self.category.list_column()
    }

    /// Rejects keyword sets that cannot be matched meaningfully.
    pub fn ensure_usable(&self) -> Result<(), DomainError> {
        if self.keywords.is_empty() {
            return Err(DomainError::EmptyKeywordSet {
                category: self.category.to_string(),
            });
        }
        if self.keywords.iter().any(|k| k.is_empty()) {
            return Err(DomainError::BlankKeyword {
                category: self.category.to_string(),
            });
        }
        Ok(())
    }

    /// True when any keyword occurs in `description`.
    pub fn describes(&self, description: &str) -> bool {
        self.keywords.iter().any(|k| description.contains(k.as_str()))
    }
}

/// True iff at least one description contains at least one keyword.
pub fn matches<S: AsRef<str>>(descriptions: &[S], keywords: &[String]) -> bool {
    descriptions
        .iter()
        .any(|desc| keywords.iter().any(|k| desc.as_ref().contains(k.as_str())))
}

fn validate_keywords(keywords: &[String]) -> Result<(), ValidationError> {
    if keywords.iter().any(|k| k.is_empty()) {
        let mut err = ValidationError::new("blank_keyword");
        err.message = Some("Keywords cannot be blank".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    fn keywords(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_matches_any_keyword_in_any_description() {
        let descriptions = ["General info", "Major Common Core - Choose 6 Credits"];
        assert!(matches(&descriptions, &keywords(&["Common Core"])));
        assert!(matches(
            &descriptions,
            &keywords(&["Capstone Course", "General info"])
        ));
        assert!(!matches(&descriptions, &keywords(&["Capstone Course"])));
    }

    #[test]
    fn test_matches_is_case_sensitive_and_unanchored() {
        let descriptions = ["xxPrerequisites to the Majoryy"];
        assert!(matches(&descriptions, &keywords(&["Prerequisites to the Major"])));
        assert!(!matches(&descriptions, &keywords(&["prerequisites to the major"])));
    }

    #[test]
    fn test_matches_on_empty_inputs() {
        let none: [&str; 0] = [];
        assert!(!matches(&none, &keywords(&["Common Core"])));
        assert!(!matches(&["Common Core"], &[]));
    }

    #[test]
    fn test_keyword_is_literal_not_regex() {
        let spec = CategorySpec::builtin(RequirementCategory::OtherGradReq);
        assert!(spec.describes("Research/Methods Course(s) - Choose 3"));
        assert!(!spec.describes("Research/Methods Courses"));
    }

    #[test]
    fn test_builtin_table_covers_every_category_in_order() {
        let table = CategorySpec::builtin_table();
        let order: Vec<_> = table.iter().map(|s| s.category).collect();
        assert_eq!(order, RequirementCategory::ALL.to_vec());
        assert!(table.iter().all(|s| s.ensure_usable().is_ok()));
        assert!(table.iter().all(|s| s.validate().is_ok()));
    }

    #[test]
    fn test_output_columns() {
        let spec = CategorySpec::builtin(RequirementCategory::ThesisCapstone);
        assert_eq!(spec.output_list_field(), "ChooseThesisCapstone");
        assert_eq!(
            RequirementCategory::RestrictedElectives.flag_column(),
            "hasMajorRestrictiveElectives"
        );
    }

    #[test]
    fn test_unusable_specs_are_rejected() {
        let empty = CategorySpec::new(RequirementCategory::PrereqToMajor, Vec::<String>::new());
        assert!(matches!(
            empty.ensure_usable(),
            Err(DomainError::EmptyKeywordSet { .. })
        ));
        assert!(empty.validate().is_err());

        let blank = CategorySpec::new(RequirementCategory::PrereqToMajor, [""]);
        assert!(matches!(
            blank.ensure_usable(),
            Err(DomainError::BlankKeyword { .. })
        ));
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_category_parsing() -> Result<()> {
        assert_eq!(
            "major_common_core".parse::<RequirementCategory>()?,
            RequirementCategory::MajorCommonCore
        );
        assert!("majors".parse::<RequirementCategory>().is_err());
        Ok(())
    }
}
