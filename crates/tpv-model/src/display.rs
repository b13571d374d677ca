//! Display-ready values produced by the preview formatter.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single display cell.
///
/// Whole-valued numeric cells become [`DisplayValue::Number`]; everything
/// else keeps its original text. Serialized untagged, so JSON output shows
/// `60` for a number and `"1.70"` for text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisplayValue {
    /// Whole number parsed from the source cell.
    Number(i64),
    /// Original cell text, unchanged.
    Text(String),
}

impl DisplayValue {
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(s) => Some(s),
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for DisplayValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for DisplayValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DisplayValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Display counterpart of a [`Record`](crate::Record).
///
/// Same columns in the same order; only the representation of values differs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayRecord {
    cells: IndexMap<String, DisplayValue>,
}

impl DisplayRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: DisplayValue) {
        self.cells.insert(column.into(), value);
    }

    pub fn get(&self, column: &str) -> Option<&DisplayValue> {
        self.cells.get(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &DisplayValue> {
        self.cells.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DisplayValue)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn column_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, DisplayValue)> for DisplayRecord {
    fn from_iter<I: IntoIterator<Item = (K, DisplayValue)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Output of the preview builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablePreview {
    /// Header labels, one per column, possibly truncated.
    pub header: Vec<String>,
    /// Normalized rows in source order.
    pub rows: Vec<DisplayRecord>,
    /// Character budget used for the header (0 when there are no columns).
    pub max_characters: usize,
}

impl TablePreview {
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of one column across all rows, by source column name.
    pub fn column_values(&self, column: &str) -> Vec<&DisplayValue> {
        self.rows.iter().filter_map(|row| row.get(column)).collect()
    }
}
