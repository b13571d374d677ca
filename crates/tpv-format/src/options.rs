//! Tunable constants for width allocation and header truncation.

use serde::{Deserialize, Serialize};

use crate::error::{PreviewError, Result};

/// Pixel width of one header character.
pub const DEFAULT_CHAR_WIDTH: f64 = 20.0;

/// Pixel padding amortized across the header row.
pub const DEFAULT_PADDING: f64 = 50.0;

/// Column count at which the padding term drops to zero.
pub const DEFAULT_PADDING_BREAKEVEN_COLUMNS: f64 = 10.0;

/// Marker appended to truncated headers.
pub const DEFAULT_ELLIPSIS: &str = "..";

/// Characters a header may exceed the budget by before it is truncated.
pub const DEFAULT_OVERFLOW_TOLERANCE: usize = 2;

/// Options for the preview formatter.
///
/// Every field has a default, so a partial config table deserializes:
///
/// ```toml
/// [preview]
/// char_width = 16.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewOptions {
    /// Pixels per header character.
    pub char_width: f64,

    /// Padding pixels amortized across columns.
    pub padding: f64,

    /// Column count at which padding no longer reduces the column width.
    pub padding_breakeven_columns: f64,

    /// Marker appended to truncated headers.
    pub ellipsis: String,

    /// Overflow allowed before truncating. Must cover the ellipsis length,
    /// otherwise truncated headers would be truncated again.
    pub overflow_tolerance: usize,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            char_width: DEFAULT_CHAR_WIDTH,
            padding: DEFAULT_PADDING,
            padding_breakeven_columns: DEFAULT_PADDING_BREAKEVEN_COLUMNS,
            ellipsis: DEFAULT_ELLIPSIS.to_string(),
            overflow_tolerance: DEFAULT_OVERFLOW_TOLERANCE,
        }
    }
}

impl PreviewOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_char_width(mut self, char_width: f64) -> Self {
        self.char_width = char_width;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_padding_breakeven_columns(mut self, columns: f64) -> Self {
        self.padding_breakeven_columns = columns;
        self
    }

    #[must_use]
    pub fn with_ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
        self.ellipsis = ellipsis.into();
        self
    }

    #[must_use]
    pub fn with_overflow_tolerance(mut self, tolerance: usize) -> Self {
        self.overflow_tolerance = tolerance;
        self
    }

    /// Check that the options can produce a positive budget.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::InvalidConfiguration`] for non-finite values,
    /// a non-positive character width or breakeven column count, negative
    /// padding, or a tolerance shorter than the ellipsis.
    pub fn validate(&self) -> Result<()> {
        if !self.char_width.is_finite() || self.char_width <= 0.0 {
            return Err(PreviewError::configuration(format!(
                "char_width must be a positive number, got {}",
                self.char_width
            )));
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(PreviewError::configuration(format!(
                "padding must be zero or positive, got {}",
                self.padding
            )));
        }
        if !self.padding_breakeven_columns.is_finite() || self.padding_breakeven_columns <= 0.0 {
            return Err(PreviewError::configuration(format!(
                "padding_breakeven_columns must be a positive number, got {}",
                self.padding_breakeven_columns
            )));
        }
        let ellipsis_len = self.ellipsis.chars().count();
        if self.overflow_tolerance < ellipsis_len {
            return Err(PreviewError::configuration(format!(
                "overflow_tolerance ({}) must be at least the ellipsis length ({ellipsis_len})",
                self.overflow_tolerance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(PreviewOptions::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_char_width() {
        let err = PreviewOptions::new().with_char_width(0.0).validate();
        assert!(matches!(err, Err(PreviewError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_rejects_nan_and_negative_padding() {
        assert!(PreviewOptions::new().with_padding(f64::NAN).validate().is_err());
        assert!(PreviewOptions::new().with_padding(-1.0).validate().is_err());
        assert!(PreviewOptions::new().with_padding(0.0).validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_breakeven() {
        let result = PreviewOptions::new()
            .with_padding_breakeven_columns(0.0)
            .validate();
        assert!(result.is_err());
    }

    #[test]
    fn test_tolerance_must_cover_ellipsis() {
        let options = PreviewOptions::new()
            .with_ellipsis("\u{2026}")
            .with_overflow_tolerance(1);
        assert!(options.validate().is_ok());

        let options = PreviewOptions::new()
            .with_ellipsis("...")
            .with_overflow_tolerance(2);
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let options: PreviewOptions = serde_json::from_str(r#"{"char_width": 16.0}"#).unwrap();
        assert_eq!(options.char_width, 16.0);
        assert_eq!(options.padding, DEFAULT_PADDING);
        assert_eq!(options.ellipsis, DEFAULT_ELLIPSIS);
    }
}
