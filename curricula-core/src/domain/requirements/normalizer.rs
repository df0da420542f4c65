// curricula-core/src/domain/requirements/normalizer.rs

use crate::domain::requirements::group::CourseGroup;
use tracing::warn;

/// Simplifies a freshly built group list, once, after grouping.
///
/// - `credits_unknown` groups lose their anchor; each course becomes a standalone entry
///   at the anchor's position.
/// - Category-note suffixes are dropped, leaving `credits_<N>`.
/// - Groups without courses are skipped.
///
/// Applying it twice gives the same result as applying it once.
pub fn normalize(groups: &[CourseGroup]) -> Vec<CourseGroup> {
    let mut out = Vec::with_capacity(groups.len());

    for group in groups {
        match group {
            CourseGroup::Merged { label, courses } if courses.is_empty() => {
                warn!(%label, "Skipping course group without courses");
            }
            CourseGroup::Merged { label, courses } if label.is_unknown() => {
                out.extend(courses.iter().cloned().map(CourseGroup::standalone));
            }
            CourseGroup::Merged { label, courses } => out.push(CourseGroup::Merged {
                label: label.without_note(),
                courses: courses.clone(),
            }),
            CourseGroup::Standalone { .. } => out.push(group.clone()),
        }
    }

    out
}
