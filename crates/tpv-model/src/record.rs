//! Raw input rows.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One row of a dataset: column name to cell value, in column order.
///
/// Equality ignores column order; use [`Record::same_columns`] or compare
/// [`Record::columns`] when order matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, String>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with_field(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(column, value);
        self
    }

    /// Insert or replace a cell. A replaced column keeps its position.
    pub fn insert(
        &mut self,
        column: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.fields.insert(column.into(), value.into())
    }

    /// Get the value of a column.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Check whether the record has a column.
    pub fn contains_column(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }

    /// Column names in order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// `(column, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn column_count(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// True when both records carry the same set of column names,
    /// regardless of order.
    pub fn same_columns(&self, other: &Record) -> bool {
        self.fields.len() == other.fields.len()
            && self.fields.keys().all(|k| other.fields.contains_key(k))
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Ordered sequence of records for preview display.
///
/// A dataset may be empty. Uniformity of columns is not enforced here; the
/// preview builder checks it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Column names of the first record, or nothing for an empty dataset.
    pub fn columns(&self) -> Vec<&str> {
        self.records
            .first()
            .map(|record| record.columns().collect())
            .unwrap_or_default()
    }

    /// Number of columns of the first record (0 for an empty dataset).
    pub fn column_count(&self) -> usize {
        self.records.first().map_or(0, Record::column_count)
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_preserves_insertion_order() {
        let record = Record::new()
            .with_field("zeta", "1")
            .with_field("alpha", "2")
            .with_field("mid", "3");
        let columns: Vec<&str> = record.columns().collect();
        assert_eq!(columns, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_record_replace_keeps_position() {
        let mut record = Record::new().with_field("a", "1").with_field("b", "2");
        let old = record.insert("a", "9");
        assert_eq!(old.as_deref(), Some("1"));
        assert_eq!(record.columns().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(record.get("a"), Some("9"));
    }

    #[test]
    fn test_same_columns_ignores_order() {
        let a = Record::new().with_field("x", "1").with_field("y", "2");
        let b = Record::new().with_field("y", "3").with_field("x", "4");
        let c = Record::new().with_field("x", "1");
        assert!(a.same_columns(&b));
        assert!(!a.same_columns(&c));
        assert!(!c.same_columns(&a));
    }

    #[test]
    fn test_dataset_columns_from_first_record() {
        let dataset: Dataset = vec![
            Record::new().with_field("b", "1").with_field("a", "2"),
            Record::new().with_field("a", "3").with_field("b", "4"),
        ]
        .into();
        assert_eq!(dataset.columns(), vec!["b", "a"]);
        assert_eq!(dataset.column_count(), 2);
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::default();
        assert!(dataset.is_empty());
        assert!(dataset.columns().is_empty());
        assert_eq!(dataset.column_count(), 0);
    }

    #[test]
    fn test_record_json_keeps_key_order() {
        let json = r#"{"lastName":"Doe","firstName":"Jane"}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(
            record.columns().collect::<Vec<_>>(),
            vec!["lastName", "firstName"]
        );
        assert_eq!(serde_json::to_string(&record).unwrap(), json);
    }
}
