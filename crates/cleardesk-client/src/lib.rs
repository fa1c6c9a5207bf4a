//! HTTP client for the ClearDesk upload API.
//!
//! Provides a minimal client with configurable auth (Bearer token or
//! anonymous), a single-file multipart transfer with byte-level progress
//! reporting, and a batch orchestrator with bounded concurrency. The CLI
//! uses this client directly.

pub mod progress;
pub mod upload;

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

use cleardesk_core::constants::UPLOAD_TIMEOUT_SECS;

/// Authentication strategy for the API.
#[derive(Clone, Debug)]
pub enum Auth {
    /// `Authorization: Bearer {token}`
    Bearer(String),
    /// No credentials attached. Not an error at this layer; authorization
    /// failures surface as HTTP errors from the server.
    Anonymous,
}

/// HTTP client for the ClearDesk upload API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    auth: Auth,
}

impl ApiClient {
    pub fn new(base_url: String, auth: Auth) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(UPLOAD_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
        })
    }

    /// Create client from environment: CLEARDESK_API_URL (default
    /// http://localhost:3000) and CLEARDESK_API_TOKEN. A missing or empty
    /// token is not an error; the client runs anonymous.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("CLEARDESK_API_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        let auth = match std::env::var("CLEARDESK_API_TOKEN") {
            Ok(token) if !token.is_empty() => Auth::Bearer(token),
            _ => Auth::Anonymous,
        };

        Self::new(base_url, auth)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth {
            Auth::Bearer(token) => request.header("Authorization", format!("Bearer {}", token)),
            Auth::Anonymous => request,
        }
    }

    /// Raw client for custom requests. Caller must apply auth via build_url
    /// and headers.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

// Re-export the pipeline surface for convenience.
pub use progress::{NoopObserver, OutcomeEvent, ProgressEvent, UploadObserver};
pub use upload::{BatchOptions, UploadOptions};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("http://localhost:3000/".to_string(), Auth::Anonymous).unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(
            client.build_url("/upload/file"),
            "http://localhost:3000/upload/file"
        );
    }
}
