//! Error types module
//!
//! Unified error type for the upload pipeline. Every variant renders a
//! message suitable for direct display to the user; the batch orchestrator
//! converts these into per-file outcome records instead of propagating them.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// Pre-flight validation failed; no network activity took place.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// No response was received from the server.
    #[error("Network error: {0}")]
    Network(String),

    /// The transfer exceeded the per-request timeout ceiling.
    #[error("Upload timed out after {0} seconds")]
    Timeout(u64),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The server answered with a success status but an unparseable body.
    #[error("Invalid response body: {0}")]
    InvalidResponse(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl UploadError {
    /// Build a server error from a status code and an optional parsed message.
    /// Falls back to a synthesized message when the response body yielded none.
    pub fn server(status: u16, message: Option<String>) -> Self {
        UploadError::Server {
            status,
            message: message.unwrap_or_else(|| format!("Upload failed with status {}", status)),
        }
    }

    /// Get the error type name for logging and outcome records.
    pub fn error_type(&self) -> &'static str {
        match self {
            UploadError::Validation(_) => "Validation",
            UploadError::Network(_) => "Network",
            UploadError::Timeout(_) => "Timeout",
            UploadError::Server { .. } => "Server",
            UploadError::InvalidResponse(_) => "InvalidResponse",
            UploadError::Io(_) => "Io",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_message() {
        let err = UploadError::Timeout(300);
        assert_eq!(err.to_string(), "Upload timed out after 300 seconds");
    }

    #[test]
    fn test_server_error_uses_parsed_message() {
        let err = UploadError::server(422, Some("Folder quota exceeded".to_string()));
        assert_eq!(err.to_string(), "Folder quota exceeded");
    }

    #[test]
    fn test_server_error_synthesizes_message() {
        let err = UploadError::server(502, None);
        assert_eq!(err.to_string(), "Upload failed with status 502");
    }

    #[test]
    fn test_error_type_names() {
        assert_eq!(
            UploadError::Network("connection refused".to_string()).error_type(),
            "Network"
        );
        assert_eq!(UploadError::Timeout(300).error_type(), "Timeout");
    }
}
