//! Error types for preview formatting.

use thiserror::Error;

/// Errors raised for structural problems.
///
/// Cell-level problems never produce an error; unparseable values are
/// passed through as text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreviewError {
    /// Width, column count or options cannot produce a sensible budget.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// Records in the dataset do not share one column set.
    #[error("invalid input at record {record}: {reason}")]
    InvalidInput { record: usize, reason: String },
}

impl PreviewError {
    pub(crate) fn configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    pub(crate) fn inconsistent_columns(record: usize, missing: &[&str], extra: &[&str]) -> Self {
        let mut parts = Vec::new();
        if !missing.is_empty() {
            parts.push(format!("missing columns [{}]", missing.join(", ")));
        }
        if !extra.is_empty() {
            parts.push(format!("unexpected columns [{}]", extra.join(", ")));
        }
        Self::InvalidInput {
            record,
            reason: format!(
                "column set differs from the first record: {}",
                parts.join("; ")
            ),
        }
    }
}

/// Result type for preview operations.
pub type Result<T> = std::result::Result<T, PreviewError>;
