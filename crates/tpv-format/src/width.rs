//! Header width allocation.
//!
//! The estimated pixel width of a header column is
//!
//! ```text
//! column_width = char_width * n - (breakeven / n - 1) * padding
//! ```
//!
//! and the per-header budget is `ceil(max_width / column_width)`. With the
//! defaults (20 px, 10 columns, 50 px) seven columns in 600 px give
//! `140 - 21.43 = 118.57` and a budget of 6 characters.
//!
//! Below the breakeven the padding term grows quickly and drives the
//! estimate to zero or below (one to three columns with the defaults), so
//! the estimate is floored at one character width.

use tracing::{debug, trace};

use crate::error::{PreviewError, Result};
use crate::options::PreviewOptions;

/// Character budget per header using the default options.
///
/// # Errors
///
/// Returns [`PreviewError::InvalidConfiguration`] when `max_width` or
/// `column_count` is zero.
pub fn compute_max_characters(column_count: usize, max_width: u32) -> Result<usize> {
    compute_max_characters_with(column_count, max_width, &PreviewOptions::default())
}

/// Character budget per header for the given options.
///
/// # Errors
///
/// Returns [`PreviewError::InvalidConfiguration`] when `max_width` or
/// `column_count` is zero, or the options are invalid.
pub fn compute_max_characters_with(
    column_count: usize,
    max_width: u32,
    options: &PreviewOptions,
) -> Result<usize> {
    options.validate()?;
    ensure_positive_width(max_width)?;
    if column_count == 0 {
        return Err(PreviewError::configuration(
            "column count must be at least 1",
        ));
    }

    let column_width = column_width(column_count, options);
    let budget = (f64::from(max_width) / column_width).ceil();
    // budget is finite and >= 1: max_width >= 1 and column_width >= char_width > 0
    let max_chars = (budget as usize).max(1);

    debug!(column_count, max_width, column_width, max_chars, "computed header budget");
    Ok(max_chars)
}

/// Estimated pixel width of one header column, floored at one character.
fn column_width(column_count: usize, options: &PreviewOptions) -> f64 {
    let n = column_count as f64;
    let raw =
        options.char_width * n - (options.padding_breakeven_columns / n - 1.0) * options.padding;
    if raw < options.char_width {
        trace!(column_count, raw, "column width floored at one character");
        options.char_width
    } else {
        raw
    }
}

pub(crate) fn ensure_positive_width(max_width: u32) -> Result<()> {
    if max_width == 0 {
        return Err(PreviewError::configuration("max width must be positive"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seven_columns_six_hundred_pixels() {
        assert_eq!(compute_max_characters(7, 600).unwrap(), 6);
    }

    #[test]
    fn test_worked_examples() {
        // (columns, expected) at 600 px
        let cases = [(4, 30), (5, 12), (6, 7), (7, 6), (8, 5), (10, 3)];
        for (columns, expected) in cases {
            assert_eq!(
                compute_max_characters(columns, 600).unwrap(),
                expected,
                "columns = {columns}"
            );
        }
    }

    #[test]
    fn test_single_column_uses_floor() {
        // 20 - (10 - 1) * 50 is negative; floor at one character width
        assert_eq!(compute_max_characters(1, 600).unwrap(), 30);
        assert_eq!(compute_max_characters(2, 600).unwrap(), 30);
        assert_eq!(compute_max_characters(3, 600).unwrap(), 30);
    }

    #[test]
    fn test_narrow_width_still_one() {
        assert_eq!(compute_max_characters(50, 1).unwrap(), 1);
        assert_eq!(compute_max_characters(1, 1).unwrap(), 1);
    }

    #[test]
    fn test_zero_width_is_rejected() {
        let err = compute_max_characters(7, 0).unwrap_err();
        assert!(matches!(err, PreviewError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_zero_columns_is_rejected() {
        let err = compute_max_characters(0, 600).unwrap_err();
        assert!(matches!(err, PreviewError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_custom_options() {
        // No padding: width is just 20 px per char times columns
        let options = PreviewOptions::new().with_padding(0.0);
        assert_eq!(compute_max_characters_with(3, 600, &options).unwrap(), 10);
    }

    #[test]
    fn test_invalid_options_are_rejected() {
        let options = PreviewOptions::new().with_char_width(-1.0);
        assert!(compute_max_characters_with(7, 600, &options).is_err());
    }
}
