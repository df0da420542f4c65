// curricula-core/src/domain/requirements/credit.rs

use crate::domain::error::DomainError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const LABEL_PREFIX: &str = "credits";
const UNKNOWN_TOKEN: &str = "unknown";
const CHOOSE_PATTERN: &str = r"Choose\s*([0-9]+)";

/// Canonical credit-count token heading a course group.
///
/// Rendered as `credits_<N>`, `credits_<N>_<note>` or `credits_unknown`.
/// The count is kept as the matched text, so `"Choose 03"` yields `credits_03`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum CreditLabel {
    Credits { count: String, note: Option<String> },
    Unknown,
}

impl CreditLabel {
    pub fn credits(count: impl Into<String>) -> Self {
        CreditLabel::Credits {
            count: count.into(),
            note: None,
        }
    }

    pub fn with_note(count: impl Into<String>, note: impl Into<String>) -> Self {
        CreditLabel::Credits {
            count: count.into(),
            note: Some(note.into()),
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, CreditLabel::Unknown)
    }

    /// Keeps only the `credits_<N>` part of the label.
    pub fn without_note(&self) -> CreditLabel {
        match self {
            CreditLabel::Credits { count, .. } => CreditLabel::credits(count.clone()),
            CreditLabel::Unknown => CreditLabel::Unknown,
        }
    }
}

impl fmt::Display for CreditLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreditLabel::Credits { count, note: None } => write!(f, "{}_{}", LABEL_PREFIX, count),
            CreditLabel::Credits {
                count,
                note: Some(note),
            } => write!(f, "{}_{}_{}", LABEL_PREFIX, count, note),
            CreditLabel::Unknown => write!(f, "{}_{}", LABEL_PREFIX, UNKNOWN_TOKEN),
        }
    }
}

impl FromStr for CreditLabel {
    type Err = DomainError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let rest = token
            .strip_prefix(LABEL_PREFIX)
            .and_then(|r| r.strip_prefix('_'))
            .ok_or_else(|| DomainError::MalformedCreditLabel(token.to_string()))?;

        if rest == UNKNOWN_TOKEN {
            return Ok(CreditLabel::Unknown);
        }

        let (count, note) = match rest.split_once('_') {
            Some((count, note)) => (count, Some(note.to_string())),
            None => (rest, None),
        };

        if count.is_empty() || !count.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::MalformedCreditLabel(token.to_string()));
        }

        Ok(CreditLabel::Credits {
            count: count.to_string(),
            note,
        })
    }
}

impl From<CreditLabel> for String {
    fn from(label: CreditLabel) -> Self {
        label.to_string()
    }
}

impl TryFrom<String> for CreditLabel {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Turns a free-text credit description into a [`CreditLabel`].
/// The regex is compiled once and reused for every row.
pub struct CreditLabelExtractor {
    pattern: Regex,
}

impl CreditLabelExtractor {
    pub fn new() -> Result<Self, DomainError> {
        let pattern =
            Regex::new(CHOOSE_PATTERN).map_err(|e| DomainError::InvalidPattern(e.to_string()))?;
        Ok(Self { pattern })
    }

    /// `credits_<N>` from the first "Choose <N>" in `description`, suffixed with the
    /// trimmed `note` when one is given. Anything else is `credits_unknown`.
    pub fn extract(&self, description: &str, note: Option<&str>) -> CreditLabel {
        let Some(count) = self
            .pattern
            .captures(description)
            .and_then(|caps| caps.get(1))
        else {
            return CreditLabel::Unknown;
        };

        let note = note.map(str::trim).filter(|n| !n.is_empty());
        CreditLabel::Credits {
            count: count.as_str().to_string(),
            note: note.map(str::to_string),
        }
    }
}
