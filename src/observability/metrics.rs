//! Counters for the admin record pipeline
//!
//! Recording is a no-op unless a `metrics` recorder has been installed by the host.

use std::fmt;

use crate::search::record::EntityGroup;

/// Enum representing all metric names used in the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    FetchSuccess,
    FetchError,
    RecordsNormalized,
    ExportsWritten,
    ExportsRejected,
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::FetchSuccess => "ddka_fetch_success_total",
            MetricName::FetchError => "ddka_fetch_error_total",
            MetricName::RecordsNormalized => "ddka_records_normalized_total",
            MetricName::ExportsWritten => "ddka_exports_total",
            MetricName::ExportsRejected => "ddka_export_rejected_total",
        }
    }
}

pub mod fetch {
    use super::*;

    pub fn succeeded(group: EntityGroup, records: usize) {
        ::metrics::counter!(MetricName::FetchSuccess.as_str(), "group" => group.as_str())
            .increment(1);
        ::metrics::counter!(MetricName::RecordsNormalized.as_str(), "group" => group.as_str())
            .increment(records as u64);
    }

    pub fn failed(group: EntityGroup) {
        ::metrics::counter!(MetricName::FetchError.as_str(), "group" => group.as_str())
            .increment(1);
    }
}

pub mod export {
    use super::*;

    pub fn written(rows: usize) {
        ::metrics::counter!(MetricName::ExportsWritten.as_str()).increment(1);
        ::metrics::histogram!("ddka_export_rows").record(rows as f64);
    }

    pub fn rejected(reason: &'static str) {
        ::metrics::counter!(MetricName::ExportsRejected.as_str(), "reason" => reason).increment(1);
    }
}
