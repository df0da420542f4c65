// curricula-core/src/domain/catalog/row.rs

use serde::{Deserialize, Serialize};

/// One line item of the academic catalog: a course inside a requirement group.
///
/// Rows are read once per run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CatalogRow {
    pub program_name: String,
    pub description: String,
    pub subject_abbreviation: String,
    pub course_number: String,
    /// Free text such as "Choose 3 Credits".
    pub group_credits: String,
    pub group_category_note: Option<String>,
}

impl CatalogRow {
    /// "SUBJ 101" identifier used inside course groups.
    pub fn subject_course(&self) -> String {
        format!("{} {}", self.subject_abbreviation, self.course_number)
    }

    /// Category note with surrounding whitespace removed; blank notes count as absent.
    pub fn note(&self) -> Option<&str> {
        self.group_category_note
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }
}

/// Builds the program identifier the way catalog exports are keyed downstream:
/// `Name (Degree)` or `Name (Degree) Emphasis`.
pub fn compose_program_name(name: &str, degree: Option<&str>, emphasis: Option<&str>) -> String {
    let Some(degree) = degree else {
        return name.to_string();
    };

    match emphasis.map(str::trim).filter(|e| !e.is_empty()) {
        Some(emphasis) => format!("{} ({}) {}", name, degree, emphasis),
        None => format!("{} ({})", name, degree),
    }
}
