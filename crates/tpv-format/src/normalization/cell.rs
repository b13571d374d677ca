//! Per-cell display normalization.

use tpv_model::{DisplayRecord, DisplayValue, Record};

use super::numeric::parse_whole_number;

/// Normalize one cell for display.
///
/// Whole-valued numbers become [`DisplayValue::Number`] (`"60.0"` -> `60`).
/// Anything else, including fractional numbers, is returned as the original
/// text so `"1.70"` keeps its trailing zero.
pub fn normalize_cell(value: &str) -> DisplayValue {
    match parse_whole_number(value) {
        Some(n) => DisplayValue::Number(n),
        None => DisplayValue::Text(value.to_string()),
    }
}

/// Normalize every cell of a record, keeping its column order.
pub fn normalize_record(record: &Record) -> DisplayRecord {
    record
        .iter()
        .map(|(column, value)| (column, normalize_cell(value)))
        .collect()
}

/// Normalize the given columns of a record, in the given order.
///
/// Columns the record lacks are skipped.
pub fn normalize_record_columns(record: &Record, columns: &[&str]) -> DisplayRecord {
    columns
        .iter()
        .filter_map(|&column| {
            record
                .get(column)
                .map(|value| (column, normalize_cell(value)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_floats_become_numbers() {
        for (input, expected) in [("60.0", 60), ("80.0", 80), ("65.0", 65), ("90", 90)] {
            assert_eq!(normalize_cell(input), DisplayValue::Number(expected));
        }
    }

    #[test]
    fn test_fractional_floats_keep_text() {
        for input in ["1.70", "1.80", "1.74", "1.90", "1.75"] {
            assert_eq!(normalize_cell(input), DisplayValue::Text(input.to_string()));
        }
    }

    #[test]
    fn test_non_numeric_passthrough() {
        for input in ["clowns, spiders", "no", "", "  ", "NaN", "12abc"] {
            assert_eq!(normalize_cell(input), DisplayValue::Text(input.to_string()));
        }
    }

    #[test]
    fn test_normalize_record_keeps_order() {
        let record = Record::new()
            .with_field("weight", "70.0")
            .with_field("height", "1.75")
            .with_field("firstName", "Peter");
        let display = normalize_record(&record);
        assert_eq!(
            display.columns().collect::<Vec<_>>(),
            vec!["weight", "height", "firstName"]
        );
        assert_eq!(display.get("weight"), Some(&DisplayValue::Number(70)));
        assert_eq!(display.get("height"), Some(&DisplayValue::from("1.75")));
    }

    #[test]
    fn test_normalize_record_columns_reorders() {
        let record = Record::new().with_field("b", "2.0").with_field("a", "x");
        let display = normalize_record_columns(&record, &["a", "b", "c"]);
        assert_eq!(display.columns().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(display.get("b"), Some(&DisplayValue::Number(2)));
    }
}
