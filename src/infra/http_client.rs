use crate::app::ports::HttpClientPort;
use crate::config::ApiConfig;
use crate::error::{AdminError, HttpError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// reqwest-backed admin API client sending `Authorization: Bearer <token>`
pub struct ReqwestHttp {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestHttp {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = config.token.as_deref() {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| AdminError::Config(format!("invalid API token: {}", e)))?;
            headers.insert(AUTHORIZATION, value);
        }
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AdminError::Config(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { client, base_url: config.base_url.trim_end_matches('/').to_string() })
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl HttpClientPort for ReqwestHttp {
    async fn get_json(&self, path: &str) -> std::result::Result<Value, HttpError> {
        let url = self.url_for(path);
        debug!("GET {}", url);
        let resp = self.client.get(&url).send().await.map_err(|e| HttpError::Transport {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let status = resp.status();
        if !status.is_success() {
            return Err(HttpError::Status { path: path.to_string(), status: status.as_u16() });
        }
        let bytes = resp.bytes().await.map_err(|e| HttpError::Transport {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        serde_json::from_slice(&bytes).map_err(|e| HttpError::Decode {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_base_url_and_path() {
        let config = ApiConfig {
            base_url: "https://api.ddka.example/".to_string(),
            timeout_seconds: 5,
            token: Some("t0k".to_string()),
        };
        let http = ReqwestHttp::new(&config).unwrap();
        assert_eq!(http.url_for("/api/players"), "https://api.ddka.example/api/players");
        assert_eq!(http.url_for("api/admin/me"), "https://api.ddka.example/api/admin/me");
    }

    #[test]
    fn rejects_token_with_control_chars() {
        let config = ApiConfig {
            base_url: "http://localhost:5000".to_string(),
            timeout_seconds: 5,
            token: Some("bad\ntoken".to_string()),
        };
        assert!(matches!(ReqwestHttp::new(&config), Err(AdminError::Config(_))));
    }
}
