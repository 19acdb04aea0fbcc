//! Dataset loading.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::models::ConsultationRecord;

/// Dataset loading errors.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a JSON array of records, found {0}")]
    NotAnArray(&'static str),

    #[error("Record {index} is not a JSON object (found {found})")]
    NotAnObject { index: usize, found: &'static str },
}

pub type LoadResult<T> = Result<T, LoadError>;

/// An immutable, fully loaded collection of consultation records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<ConsultationRecord>,
}

impl Dataset {
    /// Wrap already-parsed records.
    pub fn new(records: Vec<ConsultationRecord>) -> Self {
        Self { records }
    }

    /// Load a dataset from a JSON file.
    pub fn open<P: AsRef<Path>>(path: P) -> LoadResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_reader(BufReader::new(file))?;
        tracing::info!(path = %path.display(), records = dataset.len(), "Loaded dataset");
        Ok(dataset)
    }

    /// Parse a dataset from any reader yielding a JSON document.
    pub fn from_reader<R: Read>(reader: R) -> LoadResult<Self> {
        let document: Value = serde_json::from_reader(reader)?;
        Self::from_value(document)
    }

    /// Parse a dataset from a JSON string.
    pub fn from_json_str(json: &str) -> LoadResult<Self> {
        let document: Value = serde_json::from_str(json)?;
        Self::from_value(document)
    }

    fn from_value(document: Value) -> LoadResult<Self> {
        let items = match document {
            Value::Array(items) => items,
            other => return Err(LoadError::NotAnArray(kind_of(&other))),
        };

        let records = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                if !item.is_object() {
                    return Err(LoadError::NotAnObject {
                        index,
                        found: kind_of(&item),
                    });
                }
                Ok(serde_json::from_value::<ConsultationRecord>(item)?)
            })
            .collect::<LoadResult<Vec<ConsultationRecord>>>()?;

        Ok(Self { records })
    }

    pub fn records(&self) -> &[ConsultationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConsultationRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a ConsultationRecord;
    type IntoIter = std::slice::Iter<'a, ConsultationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl From<Vec<ConsultationRecord>> for Dataset {
    fn from(records: Vec<ConsultationRecord>) -> Self {
        Self::new(records)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_str() {
        let dataset = Dataset::from_json_str(r#"[{}, {"phoneNumber": "9876543210"}]"#).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[1].phone_number(), Some("9876543210"));
    }

    #[test]
    fn test_empty_array() {
        let dataset = Dataset::from_json_str("[]").unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_rejects_non_array() {
        let err = Dataset::from_json_str(r#"{"records": []}"#).unwrap_err();
        assert!(matches!(err, LoadError::NotAnArray("an object")));
    }

    #[test]
    fn test_rejects_non_object_element() {
        let err = Dataset::from_json_str(r#"[{}, 42]"#).unwrap_err();
        assert!(matches!(err, LoadError::NotAnObject { index: 1, .. }));
    }

    #[test]
    fn test_rejects_invalid_json() {
        let err = Dataset::from_json_str("[{").unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn test_rejects_mistyped_field() {
        let err = Dataset::from_json_str(r#"[{"phoneNumber": 9876543210}]"#).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn test_open_missing_file() {
        let err = Dataset::open("/nonexistent/consultations.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
