// curricula-core/src/domain/requirements/mod.rs

pub mod assembler;
pub mod category;
pub mod configuration;
pub mod credit;
pub mod encoding;
pub mod group;
pub mod normalizer;
pub mod record;

pub use assembler::{Assembly, AssemblyWarning, RequirementAssembler, assemble};
pub use category::{CategorySpec, RequirementCategory, matches};
pub use configuration::{GroupScope, RequirementsConfig};
pub use credit::{CreditLabel, CreditLabelExtractor};
pub use encoding::{decode_entries, decode_groups, decode_optional, encode_groups, encode_optional, normalize_encoded};
pub use group::{CourseGroup, build_groups};
pub use normalizer::normalize;
pub use record::{CategoryRequirement, ProgramRequirementRecord};
