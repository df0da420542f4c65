// curricula-core/src/domain/requirements/assembler.rs

use crate::domain::catalog::CatalogRow;
use crate::domain::error::DomainError;
use crate::domain::requirements::category::{CategorySpec, RequirementCategory, matches};
use crate::domain::requirements::configuration::{GroupScope, RequirementsConfig};
use crate::domain::requirements::credit::CreditLabelExtractor;
use crate::domain::requirements::group::{CourseGroup, build_groups};
use crate::domain::requirements::normalizer::normalize;
use crate::domain::requirements::record::{CategoryRequirement, ProgramRequirementRecord};
use std::collections::HashMap;
use tracing::{debug, warn};

/// A category that could not be extracted for a program. The category is reported as
/// absent in the record; the other categories are unaffected.
#[derive(Debug, Clone, PartialEq)]
pub struct AssemblyWarning {
    pub program: String,
    pub category: RequirementCategory,
    pub error: DomainError,
}

#[derive(Debug, Clone, Default)]
pub struct Assembly {
    /// One record per distinct program, in first-appearance order.
    pub records: Vec<ProgramRequirementRecord>,
    pub warnings: Vec<AssemblyWarning>,
}

impl Assembly {
    /// Number of programs in which `category` was found.
    pub fn count_present(&self, category: RequirementCategory) -> usize {
        self.records.iter().filter(|r| r.has(category)).count()
    }
}

pub struct RequirementAssembler {
    specs: Vec<CategorySpec>,
    scope: GroupScope,
    extractor: CreditLabelExtractor,
}

impl RequirementAssembler {
    pub fn new(config: &RequirementsConfig) -> Result<Self, DomainError> {
        Self::with_specs(config.category_table(), config.group_scope)
    }

    /// Specs are not checked here: an unusable spec only disables its own category.
    pub fn with_specs(specs: Vec<CategorySpec>, scope: GroupScope) -> Result<Self, DomainError> {
        Ok(Self {
            specs,
            scope,
            extractor: CreditLabelExtractor::new()?,
        })
    }

    pub fn assemble(&self, catalog: &[CatalogRow]) -> Assembly {
        let (programs, rows_by_program) = group_by_program(catalog);

        // Catalog-wide hits only depend on the category keywords, so they are computed once.
        let catalog_hits: Vec<Vec<&CatalogRow>> = match self.scope {
            GroupScope::Catalog => self
                .specs
                .iter()
                .map(|spec| {
                    catalog
                        .iter()
                        .filter(|row| spec.describes(&row.description))
                        .collect()
                })
                .collect(),
            GroupScope::Program => Vec::new(),
        };

        let mut assembly = Assembly {
            records: Vec::with_capacity(programs.len()),
            warnings: Vec::new(),
        };

        for program in programs {
            let rows = rows_by_program
                .get(program)
                .map(Vec::as_slice)
                .unwrap_or_default();
            let descriptions: Vec<&str> = rows.iter().map(|r| r.description.as_str()).collect();

            let mut requirements = Vec::with_capacity(self.specs.len());
            for (idx, spec) in self.specs.iter().enumerate() {
                let scoped: &[&CatalogRow] = match self.scope {
                    GroupScope::Program => rows,
                    GroupScope::Catalog => &catalog_hits[idx],
                };

                match self.extract_category(spec, &descriptions, scoped) {
                    Ok(Some(groups)) => {
                        requirements.push(CategoryRequirement::found(spec.category, groups))
                    }
                    Ok(None) => requirements.push(CategoryRequirement::absent(spec.category)),
                    Err(error) => {
                        warn!(program, category = %spec.category, %error, "Category extraction failed");
                        requirements.push(CategoryRequirement::absent(spec.category));
                        assembly.warnings.push(AssemblyWarning {
                            program: program.to_string(),
                            category: spec.category,
                            error,
                        });
                    }
                }
            }

            debug!(program, rows = rows.len(), "Program assembled");
            assembly.records.push(ProgramRequirementRecord {
                program: program.to_string(),
                requirements,
            });
        }

        assembly
    }

    fn extract_category(
        &self,
        spec: &CategorySpec,
        descriptions: &[&str],
        rows: &[&CatalogRow],
    ) -> Result<Option<Vec<CourseGroup>>, DomainError> {
        spec.ensure_usable()?;

        if !matches(descriptions, &spec.keywords) {
            return Ok(None);
        }

        let hits = rows
            .iter()
            .copied()
            .filter(|row| spec.describes(&row.description));
        let groups = build_groups(hits, &self.extractor);

        Ok(Some(normalize(&groups)))
    }
}

/// Convenience wrapper building a one-off assembler from `config`.
pub fn assemble(
    catalog: &[CatalogRow],
    config: &RequirementsConfig,
) -> Result<Assembly, DomainError> {
    Ok(RequirementAssembler::new(config)?.assemble(catalog))
}

fn group_by_program(catalog: &[CatalogRow]) -> (Vec<&str>, HashMap<&str, Vec<&CatalogRow>>) {
    let mut order = Vec::new();
    let mut rows: HashMap<&str, Vec<&CatalogRow>> = HashMap::new();

    for row in catalog {
        let name = row.program_name.as_str();
        rows.entry(name)
            .or_insert_with(|| {
                order.push(name);
                Vec::new()
            })
            .push(row);
    }

    (order, rows)
}
