//! CSV encoding for record exports.
//!
//! Everything here is a pure function of (records, fields) → bytes; handing the bytes
//! to the user is the job of a [`crate::app::ports::DownloadPort`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::constants::{DEFAULT_EXPORT_PREFIX, UTF8_BOM};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("There are no records to export")]
    NoRecords,

    #[error("Select at least one field to export")]
    NoFields,

    #[error("CSV encoding failed: {0}")]
    Encode(String),
}

impl ExportError {
    pub fn reason(&self) -> &'static str {
        match self {
            ExportError::NoRecords => "no_records",
            ExportError::NoFields => "no_fields",
            ExportError::Encode(_) => "encode",
        }
    }
}

/// Record property exported as one column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportField {
    pub key: String,
    #[serde(default)]
    pub label: Option<String>,
}

impl ExportField {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into(), label: None }
    }

    pub fn labeled(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self { key: key.into(), label: Some(label.into()) }
    }

    /// Column header, the key when no label is set
    pub fn header(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.key)
    }
}

/// Which fields are ticked. Tied to the field list it was built for; a different list
/// resets every field to selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSelection {
    fields: Vec<ExportField>,
    selected: Vec<bool>,
}

impl FieldSelection {
    pub fn for_fields(fields: &[ExportField]) -> Self {
        Self { fields: fields.to_vec(), selected: vec![true; fields.len()] }
    }

    /// Returns true when the selection had to be reset
    pub fn sync_fields(&mut self, fields: &[ExportField]) -> bool {
        if self.fields.as_slice() == fields {
            return false;
        }
        *self = Self::for_fields(fields);
        true
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.key == key)
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.position(key).map(|i| self.selected[i]).unwrap_or(false)
    }

    /// Returns false for keys not in the field list
    pub fn set(&mut self, key: &str, on: bool) -> bool {
        match self.position(key) {
            Some(i) => {
                self.selected[i] = on;
                true
            }
            None => false,
        }
    }

    pub fn toggle(&mut self, key: &str) -> bool {
        match self.position(key) {
            Some(i) => {
                self.selected[i] = !self.selected[i];
                true
            }
            None => false,
        }
    }

    pub fn select_all(&mut self) {
        self.selected.iter_mut().for_each(|s| *s = true);
    }

    pub fn clear(&mut self) {
        self.selected.iter_mut().for_each(|s| *s = false);
    }

    /// Selected fields in field-list order
    pub fn chosen(&self) -> Vec<ExportField> {
        self.fields
            .iter()
            .zip(&self.selected)
            .filter(|(_, on)| **on)
            .map(|(f, _)| f.clone())
            .collect()
    }

    pub fn fields(&self) -> &[ExportField] {
        &self.fields
    }
}

/// Every key present on any record, in first-seen order
pub fn available_fields(records: &[Value]) -> Vec<ExportField> {
    let mut keys: Vec<String> = Vec::new();
    for record in records {
        if let Value::Object(map) = record {
            for key in map.keys() {
                if !keys.iter().any(|k| k == key) {
                    keys.push(key.clone());
                }
            }
        }
    }
    keys.into_iter().map(ExportField::new).collect()
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| cell_text(Some(item)))
            .collect::<Vec<_>>()
            .join(","),
        Some(obj @ Value::Object(_)) => obj.to_string(),
    }
}

/// Encodes `records` as a BOM-prefixed, CRLF-terminated CSV with every cell quoted.
pub fn encode_csv(records: &[Value], fields: &[ExportField]) -> Result<Vec<u8>, ExportError> {
    if records.is_empty() {
        return Err(ExportError::NoRecords);
    }
    if fields.is_empty() {
        return Err(ExportError::NoFields);
    }

    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::CRLF)
        .from_writer(UTF8_BOM.to_vec());

    writer
        .write_record(fields.iter().map(ExportField::header))
        .map_err(|e| ExportError::Encode(e.to_string()))?;
    for record in records {
        let row = fields.iter().map(|f| cell_text(record.get(&f.key)));
        writer.write_record(row).map_err(|e| ExportError::Encode(e.to_string()))?;
    }

    writer.into_inner().map_err(|e| ExportError::Encode(e.to_string()))
}

/// `{prefix}-{YYYY-MM-DD}.csv`
pub fn export_filename(prefix: &str, date: NaiveDate) -> String {
    let prefix = prefix.trim();
    let prefix = if prefix.is_empty() { DEFAULT_EXPORT_PREFIX } else { prefix };
    format!("{}-{}.csv", prefix, date.format("%Y-%m-%d"))
}
