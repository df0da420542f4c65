// curricula-core/src/application/mod.rs

pub mod assemble;
pub mod discrepancy;
pub mod renormalize;
pub mod reorder;
pub mod split;
pub mod triage;
pub mod verification;

// --- RE-EXPORTS (FACADE PATTERN) ---
// The CLI imports use cases from here without knowing the file layout.

pub use assemble::run_assembly;
pub use discrepancy::{CourseDiscrepancies, DiffRequest, diff_course_lists};
pub use renormalize::{RenormalizeSummary, renormalize_requirements_file};
pub use reorder::sort_requirements_file;
pub use split::{SplitSummary, split_catalog};
pub use triage::{ProgramTriage, triage_catalog};
pub use verification::{VerificationIssue, VerificationReport, verify_requirements_file};
