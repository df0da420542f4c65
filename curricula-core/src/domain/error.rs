// curricula-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, Clone, PartialEq)]
pub enum DomainError {
    #[error("Category '{category}' has an empty keyword set")]
    #[diagnostic(
        code(curricula::domain::empty_keywords),
        help("Every requirement category needs at least one keyword.")
    )]
    EmptyKeywordSet { category: String },

    #[error("Category '{category}' contains a blank keyword")]
    #[diagnostic(
        code(curricula::domain::blank_keyword),
        help("A blank keyword would match every description; remove it.")
    )]
    BlankKeyword { category: String },

    #[error("Malformed group encoding: {reason}")]
    #[diagnostic(
        code(curricula::domain::group_encoding),
        help("Expected a nested list such as [['credits_3', 'ENGL 101'], 'PHIL 201'].")
    )]
    MalformedGroupEncoding { reason: String },

    #[error("Malformed credit label: '{0}'")]
    #[diagnostic(code(curricula::domain::credit_label))]
    MalformedCreditLabel(String),

    #[error("Invalid pattern: {0}")]
    #[diagnostic(code(curricula::domain::pattern))]
    InvalidPattern(String),

    #[error("Unknown requirement category: '{0}'")]
    #[diagnostic(code(curricula::domain::unknown_category))]
    UnknownCategory(String),
}

impl DomainError {
    pub(crate) fn encoding(reason: impl Into<String>) -> Self {
        DomainError::MalformedGroupEncoding {
            reason: reason.into(),
        }
    }
}
