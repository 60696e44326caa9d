use thiserror::Error;

use crate::export::ExportError;

/// Failure of a single request against the admin REST API.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("request to {path} failed: {message}")]
    Transport { path: String, message: String },

    #[error("request to {path} returned HTTP {status}")]
    Status { path: String, status: u16 },

    #[error("response from {path} could not be decoded: {message}")]
    Decode { path: String, message: String },
}

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] HttpError),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load records: {0}")]
    Aggregate(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error(transparent)]
    Export(#[from] ExportError),
}

pub type Result<T> = std::result::Result<T, AdminError>;
