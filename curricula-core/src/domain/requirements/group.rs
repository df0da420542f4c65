// curricula-core/src/domain/requirements/group.rs

use crate::domain::catalog::CatalogRow;
use crate::domain::requirements::credit::{CreditLabel, CreditLabelExtractor};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One entry of a category's group list.
///
/// `Merged` is the `[label, course, ...]` form; `Standalone` is a bare course left over
/// when unknown-credit groups are flattened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CourseGroup {
    Merged {
        label: CreditLabel,
        courses: Vec<String>,
    },
    Standalone {
        course: String,
    },
}

impl CourseGroup {
    pub fn merged<I, S>(label: CreditLabel, courses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CourseGroup::Merged {
            label,
            courses: courses.into_iter().map(Into::into).collect(),
        }
    }

    pub fn standalone(course: impl Into<String>) -> Self {
        CourseGroup::Standalone {
            course: course.into(),
        }
    }

    pub fn label(&self) -> Option<&CreditLabel> {
        match self {
            CourseGroup::Merged { label, .. } => Some(label),
            CourseGroup::Standalone { .. } => None,
        }
    }

    pub fn courses(&self) -> Vec<&str> {
        match self {
            CourseGroup::Merged { courses, .. } => courses.iter().map(String::as_str).collect(),
            CourseGroup::Standalone { course } => vec![course.as_str()],
        }
    }
}

/// Folds rows into label-keyed groups.
///
/// Rows are visited in the given order. The first row carrying a label anchors a new
/// group; later rows with an equal label append their course to it. Unknown-credit rows
/// share one anchor here and are flattened later by the normalizer.
pub fn build_groups<'r, I>(rows: I, extractor: &CreditLabelExtractor) -> Vec<CourseGroup>
where
    I: IntoIterator<Item = &'r CatalogRow>,
{
    let mut anchors: HashMap<CreditLabel, usize> = HashMap::new();
    let mut groups: Vec<(CreditLabel, Vec<String>)> = Vec::new();

    for row in rows {
        let label = extractor.extract(&row.group_credits, row.note());
        let course = row.subject_course();

        match anchors.get(&label) {
            Some(&idx) => groups[idx].1.push(course),
            None => {
                anchors.insert(label.clone(), groups.len());
                groups.push((label, vec![course]));
            }
        }
    }

    groups
        .into_iter()
        .map(|(label, courses)| CourseGroup::Merged { label, courses })
        .collect()
}
