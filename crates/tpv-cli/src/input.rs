//! Dataset loading from CSV and JSON files.
//!
//! - CSV: the first row is the header, every following row is a record.
//!   Rows with a different field count are rejected by the reader. Header
//!   names are trimmed; cell text is kept as written. A file with a header
//!   and no data rows loads as an empty dataset, since a [`Dataset`] takes
//!   its columns from its first record.
//! - JSON: an array of flat objects. Strings are taken as they are, numbers
//!   and booleans are stringified, `null` becomes an empty cell. Nested
//!   arrays and objects are rejected.

use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use indexmap::IndexMap;
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use tpv_model::{Dataset, Record};

/// Input file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputFormat {
    /// Detect from the file extension.
    #[default]
    Auto,
    Csv,
    Json,
}

impl InputFormat {
    /// Resolve `Auto` from the file extension.
    pub fn resolve(self, path: &Path) -> Option<Self> {
        match self {
            Self::Auto => {
                let extension = path.extension()?.to_str()?.to_ascii_lowercase();
                match extension.as_str() {
                    "csv" => Some(Self::Csv),
                    "json" => Some(Self::Json),
                    _ => None,
                }
            }
            other => Some(other),
        }
    }
}

/// Errors that can occur while loading a dataset.
#[derive(Debug, Error)]
pub enum InputError {
    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Extension does not name a supported format.
    #[error("cannot detect input format of {path}; pass --format csv or --format json")]
    UnknownFormat { path: PathBuf },

    /// Failed to parse CSV.
    #[error("failed to parse CSV: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },

    /// The CSV header names a column twice.
    #[error("duplicate column '{column}' in CSV header")]
    DuplicateColumn { column: String },

    /// Failed to parse JSON.
    #[error("failed to parse JSON: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },

    /// A JSON cell holds an array or object.
    #[error("record {record}, column '{column}': nested values are not supported")]
    NestedValue { record: usize, column: String },
}

/// Load a dataset from a file.
///
/// # Errors
///
/// Returns [`InputError`] if the file is missing, unreadable, of unknown
/// format, or malformed.
pub fn load_dataset(path: &Path, format: InputFormat) -> Result<Dataset, InputError> {
    if !path.exists() {
        return Err(InputError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let format = format
        .resolve(path)
        .ok_or_else(|| InputError::UnknownFormat {
            path: path.to_path_buf(),
        })?;

    let dataset = match format {
        InputFormat::Json => {
            let content = fs::read_to_string(path).map_err(|source| InputError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
            parse_json_dataset(&content)?
        }
        _ => {
            let file = fs::File::open(path).map_err(|source| InputError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
            read_csv_dataset(file)?
        }
    };

    info!(
        path = %path.display(),
        records = dataset.len(),
        columns = dataset.column_count(),
        "loaded dataset"
    );
    Ok(dataset)
}

/// Read a CSV dataset with a header row.
pub fn read_csv_dataset<R: Read>(reader: R) -> Result<Dataset, InputError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| InputError::Csv { source })?
        .iter()
        .map(normalize_header)
        .collect();

    let mut seen = HashSet::new();
    for header in &headers {
        if !seen.insert(header.as_str()) {
            return Err(InputError::DuplicateColumn {
                column: header.clone(),
            });
        }
    }

    let mut dataset = Dataset::default();
    for row in reader.records() {
        let row = row.map_err(|source| InputError::Csv { source })?;
        let record: Record = headers
            .iter()
            .zip(row.iter())
            .map(|(header, value)| (header.as_str(), normalize_cell(value)))
            .collect();
        dataset.push(record);
    }
    Ok(dataset)
}

/// Parse a JSON array of flat objects.
pub fn parse_json_dataset(content: &str) -> Result<Dataset, InputError> {
    let rows: Vec<IndexMap<String, Value>> =
        serde_json::from_str(content).map_err(|source| InputError::Json { source })?;

    rows.into_iter()
        .enumerate()
        .map(|(index, row)| json_record(index, row))
        .collect()
}

fn json_record(index: usize, row: IndexMap<String, Value>) -> Result<Record, InputError> {
    let mut record = Record::new();
    for (column, value) in row {
        let text = match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null => String::new(),
            Value::Array(_) | Value::Object(_) => {
                return Err(InputError::NestedValue {
                    record: index,
                    column,
                });
            }
        };
        record.insert(column, text);
    }
    Ok(record)
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cell text as written, minus a byte order mark. Whitespace is kept so CSV
/// and JSON inputs carry identical text.
fn normalize_cell(raw: &str) -> String {
    raw.strip_prefix('\u{feff}').unwrap_or(raw).to_string()
}
