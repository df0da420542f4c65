// curricula-core/src/domain/requirements/record.rs

use crate::domain::requirements::category::RequirementCategory;
use crate::domain::requirements::group::CourseGroup;
use serde::{Deserialize, Serialize};

/// Outcome of one category for one program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRequirement {
    pub category: RequirementCategory,
    pub present: bool,
    pub groups: Option<Vec<CourseGroup>>,
}

impl CategoryRequirement {
    pub fn found(category: RequirementCategory, groups: Vec<CourseGroup>) -> Self {
        Self {
            category,
            present: true,
            groups: Some(groups),
        }
    }

    pub fn absent(category: RequirementCategory) -> Self {
        Self {
            category,
            present: false,
            groups: None,
        }
    }
}

/// One output row: the requirement decomposition of a single program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramRequirementRecord {
    pub program: String,
    /// One entry per category, in output column order.
    pub requirements: Vec<CategoryRequirement>,
}

impl ProgramRequirementRecord {
    pub fn requirement(&self, category: RequirementCategory) -> Option<&CategoryRequirement> {
        self.requirements.iter().find(|r| r.category == category)
    }

    pub fn has(&self, category: RequirementCategory) -> bool {
        self.requirement(category).is_some_and(|r| r.present)
    }

    pub fn groups(&self, category: RequirementCategory) -> Option<&[CourseGroup]> {
        self.requirement(category)
            .and_then(|r| r.groups.as_deref())
    }
}
