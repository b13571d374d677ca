//! Cell normalization for display.
//!
//! - **numeric**: strict number parsing and whole-number detection
//! - **cell**: per-cell and per-record conversion to [`DisplayValue`](tpv_model::DisplayValue)

mod cell;
pub mod numeric;

pub use cell::{normalize_cell, normalize_record, normalize_record_columns};
