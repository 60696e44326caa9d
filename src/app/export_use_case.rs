use std::sync::Arc;

use chrono::{Local, NaiveDate};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::app::ports::DownloadPort;
use crate::constants::CSV_MIME_TYPE;
use crate::error::{AdminError, Result};
use crate::export::{available_fields, encode_csv, export_filename, ExportField, FieldSelection};
use crate::observability::metrics;

/// Result of a successful export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReceipt {
    pub filename: String,
    pub location: String,
    pub rows: usize,
    pub columns: usize,
}

/// Encodes records to CSV and hands the bytes to a download port
pub struct ExportUseCase {
    download: Arc<dyn DownloadPort>,
    today: fn() -> NaiveDate,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl ExportUseCase {
    pub fn new(download: Arc<dyn DownloadPort>) -> Self {
        Self { download, today: local_today }
    }

    /// Fixed clock for filenames
    pub fn with_clock(download: Arc<dyn DownloadPort>, today: fn() -> NaiveDate) -> Self {
        Self { download, today }
    }

    /// The "Export" button: only the ticked fields
    pub fn export_selected(
        &self,
        records: &[Value],
        selection: &FieldSelection,
        prefix: &str,
    ) -> Result<ExportReceipt> {
        self.export_with(records, &selection.chosen(), prefix)
    }

    /// "Export All Details": ignores the selection. With no field list, every key
    /// present on the records is exported.
    pub fn export_all(
        &self,
        records: &[Value],
        fields: &[ExportField],
        prefix: &str,
    ) -> Result<ExportReceipt> {
        if fields.is_empty() {
            let derived = available_fields(records);
            return self.export_with(records, &derived, prefix);
        }
        self.export_with(records, fields, prefix)
    }

    fn export_with(
        &self,
        records: &[Value],
        fields: &[ExportField],
        prefix: &str,
    ) -> Result<ExportReceipt> {
        let bytes = match encode_csv(records, fields) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(reason = e.reason(), "Export rejected: {}", e);
                metrics::export::rejected(e.reason());
                return Err(e.into());
            }
        };
        let filename = export_filename(prefix, (self.today)());
        let location = self.download.trigger_download(&bytes, &filename, CSV_MIME_TYPE)?;
        metrics::export::written(records.len());
        info!(
            filename = %filename,
            rows = records.len(),
            columns = fields.len(),
            "Export complete"
        );
        Ok(ExportReceipt { filename, location, rows: records.len(), columns: fields.len() })
    }
}

/// Serializes typed records into the JSON objects the encoder reads
pub fn to_export_values<T: Serialize>(records: &[T]) -> Result<Vec<Value>> {
    records
        .iter()
        .map(|r| serde_json::to_value(r).map_err(AdminError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::ExportError;
    use crate::search::{EntityGroup, NormalizationRegistry};
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockDownload {
        calls: Mutex<Vec<(Vec<u8>, String, String)>>,
    }

    impl DownloadPort for MockDownload {
        fn trigger_download(
            &self,
            bytes: &[u8],
            filename: &str,
            mime_type: &str,
        ) -> Result<String> {
            self.calls
                .lock()
                .unwrap()
                .push((bytes.to_vec(), filename.to_string(), mime_type.to_string()));
            Ok(format!("mem://{}", filename))
        }
    }

    fn fixed_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    fn setup() -> (Arc<MockDownload>, ExportUseCase) {
        let download = Arc::new(MockDownload::default());
        let use_case = ExportUseCase::with_clock(download.clone(), fixed_day);
        (download, use_case)
    }

    #[test]
    fn selected_export_writes_only_ticked_fields() {
        let (download, use_case) = setup();
        let fields = vec![ExportField::new("name"), ExportField::new("email")];
        let mut selection = FieldSelection::for_fields(&fields);
        selection.set("email", false);

        let receipt = use_case
            .export_selected(&[json!({"name": "Asha", "email": "a@x.com"})], &selection, "players")
            .unwrap();
        assert_eq!(receipt.filename, "players-2026-01-15.csv");
        assert_eq!(receipt.columns, 1);

        let calls = download.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].2, "text/csv;charset=utf-8;");
        assert_eq!(&calls[0].0[3..], b"\"name\"\r\n\"Asha\"\r\n");
    }

    #[test]
    fn guards_never_reach_the_download_port() {
        let (download, use_case) = setup();
        let fields = vec![ExportField::new("name")];
        let selection = FieldSelection::for_fields(&fields);
        let err = use_case.export_selected(&[], &selection, "players").unwrap_err();
        assert!(matches!(err, AdminError::Export(ExportError::NoRecords)));

        let mut none = FieldSelection::for_fields(&fields);
        none.clear();
        let err = use_case.export_selected(&[json!({"name": "x"})], &none, "players").unwrap_err();
        assert_eq!(err.to_string(), "Select at least one field to export");

        assert!(download.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn export_all_ignores_selection() {
        let (download, use_case) = setup();
        let fields = vec![ExportField::new("a"), ExportField::new("b")];
        let receipt = use_case.export_all(&[json!({"a": 1, "b": 2})], &fields, "all").unwrap();
        assert_eq!(receipt.columns, 2);
        assert_eq!(download.calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn export_all_derives_fields_when_none_given() {
        let (_, use_case) = setup();
        let receipt = use_case
            .export_all(&[json!({"a": 1}), json!({"b": 2, "c": 3})], &[], "raw")
            .unwrap();
        assert_eq!(receipt.columns, 3);
        assert_eq!(receipt.rows, 2);
    }

    #[test]
    fn unified_records_serialize_for_export() {
        let registry = NormalizationRegistry::new();
        let record = registry
            .normalize(EntityGroup::Player, &json!({"_id": "p1", "transactionId": "tx00abcdef"}))
            .unwrap();
        let values = to_export_values(&[record]).unwrap();
        assert_eq!(values[0]["idLabel"], "DDKA-ABCDEF");
        assert_eq!(values[0]["status"], "Pending");
    }
}
