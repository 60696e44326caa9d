use async_trait::async_trait;
use serde_json::Value;

use crate::error::{HttpError, Result};

/// JSON-over-HTTP access to the admin API. Auth headers are the adapter's concern.
#[async_trait]
pub trait HttpClientPort: Send + Sync {
    async fn get_json(&self, path: &str) -> std::result::Result<Value, HttpError>;
}

/// Hands finished export bytes to the user
pub trait DownloadPort: Send + Sync {
    /// Returns where the download ended up, for display
    fn trigger_download(&self, bytes: &[u8], filename: &str, mime_type: &str) -> Result<String>;
}
