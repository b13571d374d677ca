//! Table preview formatting.
//!
//! Turns a dataset of string-valued records and an available pixel width into
//! a compact preview: a header row truncated to a per-column character budget
//! and rows whose whole-valued numeric cells are shown as integers.
//!
//! # Overview
//!
//! - **Width allocation**: [`compute_max_characters`] derives the character
//!   budget per header from the column count and the pixel width
//! - **Header truncation**: [`truncate_header`] shortens long labels to the
//!   budget plus an ellipsis
//! - **Cell normalization**: [`normalize_cell`] turns `"60.0"` into `60` and
//!   leaves `"1.70"` alone
//! - **Preview building**: [`build_preview`] ties the three together and
//!   checks that all records share one column set
//! - **Caching**: [`PreviewCache`] memoizes a preview per
//!   `(dataset version, max width)`
//!
//! # Example
//!
//! ```
//! use tpv_format::build_preview;
//! use tpv_model::{Dataset, Record};
//!
//! let data: Dataset = vec![
//!     Record::new().with_field("favouriteAnimal", "unicorn").with_field("weight", "60.0"),
//! ]
//! .into();
//!
//! let preview = build_preview(&data, 600).unwrap();
//! assert_eq!(preview.header, vec!["favouriteAnimal", "weight"]);
//! assert_eq!(preview.rows[0].get("weight").and_then(|v| v.as_number()), Some(60));
//! ```
//!
//! # Design Principles
//!
//! - **Pure functions**: no I/O, no hidden state; recompute on every input change
//! - **Strict on structure**: zero width and ragged column sets are errors
//! - **Lenient on cells**: a cell that is not a whole number is passed through

mod cache;
mod error;
mod header;
mod options;
mod preview;
mod width;

pub mod normalization;

// Options
pub use options::{
    DEFAULT_CHAR_WIDTH, DEFAULT_ELLIPSIS, DEFAULT_OVERFLOW_TOLERANCE, DEFAULT_PADDING,
    DEFAULT_PADDING_BREAKEVEN_COLUMNS, PreviewOptions,
};

// Error type
pub use error::{PreviewError, Result};

// Width allocation and truncation
pub use header::{truncate_header, truncate_header_with, truncate_headers};
pub use width::{compute_max_characters, compute_max_characters_with};

// Cell normalization
pub use normalization::{normalize_cell, normalize_record};

// Preview building
pub use cache::{PreviewCache, PreviewKey, Versioned};
pub use preview::{PreviewFormatter, build_preview};
