//! Data model for tabular previews.
//!
//! This crate provides the plain data types shared by the formatter and its
//! front ends:
//! - [`Record`] and [`Dataset`]: the raw, string-valued input rows
//! - [`DisplayValue`] and [`DisplayRecord`]: display-ready cells
//! - [`TablePreview`]: truncated header plus normalized rows
//!
//! Column order is significant everywhere. Records keep their insertion
//! order, and the first record of a dataset defines the column order of the
//! whole preview.

mod display;
mod record;

pub use display::{DisplayRecord, DisplayValue, TablePreview};
pub use record::{Dataset, Record};
