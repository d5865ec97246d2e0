use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::Value;

use super::domain::CreditHistory;

/// Envelope keys under which a company document may nest its credit history.
const ENVELOPE_KEYS: [&str; 2] = ["creditHistory", "historial_crediticio"];

#[derive(Debug)]
pub enum HistoryImportError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for HistoryImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryImportError::Io(err) => write!(f, "failed to read credit history: {}", err),
            HistoryImportError::Json(err) => write!(f, "invalid credit history document: {}", err),
        }
    }
}

impl std::error::Error for HistoryImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HistoryImportError::Io(err) => Some(err),
            HistoryImportError::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for HistoryImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for HistoryImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Read a credit history from a JSON file.
pub fn load_history_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<CreditHistory, HistoryImportError> {
    let file = File::open(path)?;
    load_history_from_reader(BufReader::new(file))
}

/// Parse a credit history document. Accepts either the history itself or a company document
/// that nests it under `creditHistory` / `historial_crediticio`.
pub fn load_history_from_reader<R: Read>(reader: R) -> Result<CreditHistory, HistoryImportError> {
    let mut document: Value = serde_json::from_reader(reader)?;

    if let Value::Object(map) = &mut document {
        if let Some(nested) = ENVELOPE_KEYS.iter().find_map(|key| map.remove(*key)) {
            return Ok(serde_json::from_value(nested)?);
        }
    }

    Ok(serde_json::from_value(document)?)
}
