//! Preview builder.
//!
//! Builds the display header and rows for a dataset:
//! 1. Validate the width and the options
//! 2. Check that every record has the first record's column set
//! 3. Compute the character budget once from the column count
//! 4. Truncate every header and normalize every cell

use tracing::debug;

use tpv_model::{Dataset, TablePreview};

use crate::error::{PreviewError, Result};
use crate::header::{truncate_header_with, truncate_headers};
use crate::normalization::normalize_record_columns;
use crate::options::PreviewOptions;
use crate::width::{compute_max_characters_with, ensure_positive_width};

/// Build a preview with the default options.
///
/// # Errors
///
/// - [`PreviewError::InvalidConfiguration`] when `max_width` is zero
/// - [`PreviewError::InvalidInput`] when records have different column sets
pub fn build_preview(data: &Dataset, max_width: u32) -> Result<TablePreview> {
    PreviewFormatter::default().build(data, max_width)
}

/// Preview formatter bound to a validated set of options.
#[derive(Debug, Clone, Default)]
pub struct PreviewFormatter {
    options: PreviewOptions,
}

impl PreviewFormatter {
    /// Create a formatter.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::InvalidConfiguration`] if the options are invalid.
    pub fn new(options: PreviewOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &PreviewOptions {
        &self.options
    }

    /// Character budget per header for this formatter's options.
    pub fn max_characters(&self, column_count: usize, max_width: u32) -> Result<usize> {
        compute_max_characters_with(column_count, max_width, &self.options)
    }

    /// Truncate one header with this formatter's options.
    pub fn truncate_header(&self, name: &str, max_chars: usize) -> String {
        truncate_header_with(name, max_chars, &self.options)
    }

    /// Build the preview for a dataset.
    ///
    /// The first record defines the column order. An empty dataset, or one
    /// whose records have no columns, yields an empty header and a budget of 0.
    ///
    /// # Errors
    ///
    /// - [`PreviewError::InvalidConfiguration`] when `max_width` is zero
    /// - [`PreviewError::InvalidInput`] when records have different column sets
    pub fn build(&self, data: &Dataset, max_width: u32) -> Result<TablePreview> {
        ensure_positive_width(max_width)?;
        let columns = uniform_columns(data)?;

        let max_characters = if columns.is_empty() {
            0
        } else {
            self.max_characters(columns.len(), max_width)?
        };

        let header = truncate_headers(columns.iter().copied(), max_characters, &self.options);
        let rows = data
            .iter()
            .map(|record| normalize_record_columns(record, &columns))
            .collect();

        debug!(
            records = data.len(),
            columns = columns.len(),
            max_width,
            max_characters,
            "built table preview"
        );

        Ok(TablePreview {
            header,
            rows,
            max_characters,
        })
    }
}

/// Column names shared by every record, in the first record's order.
fn uniform_columns(data: &Dataset) -> Result<Vec<&str>> {
    let Some(first) = data.records().first() else {
        return Ok(Vec::new());
    };

    for (index, record) in data.iter().enumerate().skip(1) {
        if !first.same_columns(record) {
            let missing: Vec<&str> = first
                .columns()
                .filter(|column| !record.contains_column(column))
                .collect();
            let extra: Vec<&str> = record
                .columns()
                .filter(|column| !first.contains_column(column))
                .collect();
            return Err(PreviewError::inconsistent_columns(index, &missing, &extra));
        }
    }

    Ok(first.columns().collect())
}
