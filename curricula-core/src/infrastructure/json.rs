// curricula-core/src/infrastructure/json.rs

use crate::domain::ports::RequirementSink;
use crate::domain::requirements::ProgramRequirementRecord;
use crate::error::CurriculaError;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::atomic_write;
use chrono::Utc;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
pub struct RequirementsDocument<'a> {
    pub generated_at: String,
    pub total_programs: usize,
    pub programs: &'a [ProgramRequirementRecord],
}

pub fn render_json(records: &[ProgramRequirementRecord]) -> Result<String, InfrastructureError> {
    let document = RequirementsDocument {
        generated_at: Utc::now().to_rfc3339(),
        total_programs: records.len(),
        programs: records,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Writes the records as one JSON document. Always replaces the target.
pub struct JsonRequirementSink {
    path: PathBuf,
}

impl JsonRequirementSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RequirementSink for JsonRequirementSink {
    fn write(&self, records: &[ProgramRequirementRecord]) -> Result<(), CurriculaError> {
        atomic_write(&self.path, render_json(records)?)?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::requirements::{
        CategoryRequirement, CourseGroup, CreditLabel, RequirementCategory,
    };
    use anyhow::Result;

    #[test]
    fn test_json_document_shape() -> Result<()> {
        let records = vec![ProgramRequirementRecord {
            program: "Art (BA)".into(),
            requirements: vec![
                CategoryRequirement::found(
                    RequirementCategory::ThesisCapstone,
                    vec![CourseGroup::merged(CreditLabel::credits("3"), ["ART 499"])],
                ),
                CategoryRequirement::absent(RequirementCategory::OtherGradReq),
            ],
        }];

        let value: serde_json::Value = serde_json::from_str(&render_json(&records)?)?;

        assert_eq!(value["total_programs"], 1);
        let capstone = &value["programs"][0]["requirements"][0];
        assert_eq!(capstone["category"], "thesis_capstone");
        assert_eq!(capstone["present"], true);
        assert_eq!(capstone["groups"][0]["kind"], "merged");
        assert_eq!(capstone["groups"][0]["label"], "credits_3");
        assert!(value["programs"][0]["requirements"][1]["groups"].is_null());
        Ok(())
    }
}
