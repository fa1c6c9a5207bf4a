use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Opaque success payload returned by the upload endpoint.
///
/// The server wraps result metadata (stored URL, identifiers, renditions) in
/// a `data` field; this type does not interpret it beyond convenience
/// accessors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadReceipt {
    pub data: JsonValue,
}

impl UploadReceipt {
    /// Stored URL from the result metadata, when the server provided one.
    pub fn url(&self) -> Option<&str> {
        self.data.get("url").and_then(|v| v.as_str())
    }
}

/// Per-file outcome in a batch, tagged success or failure.
/// `index` is the file's position in the submitted batch.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FileOutcome {
    Success {
        index: usize,
        filename: String,
        receipt: UploadReceipt,
    },
    Failure {
        index: usize,
        filename: String,
        error: String,
    },
}

impl FileOutcome {
    pub fn index(&self) -> usize {
        match self {
            FileOutcome::Success { index, .. } | FileOutcome::Failure { index, .. } => *index,
        }
    }

    pub fn filename(&self) -> &str {
        match self {
            FileOutcome::Success { filename, .. } | FileOutcome::Failure { filename, .. } => {
                filename
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FileOutcome::Success { .. })
    }

    pub fn receipt(&self) -> Option<&UploadReceipt> {
        match self {
            FileOutcome::Success { receipt, .. } => Some(receipt),
            FileOutcome::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FileOutcome::Success { .. } => None,
            FileOutcome::Failure { error, .. } => Some(error),
        }
    }
}

/// Ordered per-file outcomes of a batch. Order always matches submission
/// order, regardless of completion order within a chunk.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchResult {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchResult {
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_receipt_url() {
        let receipt = UploadReceipt {
            data: json!({ "url": "https://cdn.example.com/upload/v1/a.png" }),
        };
        assert_eq!(
            receipt.url(),
            Some("https://cdn.example.com/upload/v1/a.png")
        );

        let bare = UploadReceipt { data: json!({}) };
        assert_eq!(bare.url(), None);
    }

    #[test]
    fn test_outcome_accessors() {
        let ok = FileOutcome::Success {
            index: 0,
            filename: "a.png".to_string(),
            receipt: UploadReceipt { data: json!(null) },
        };
        assert!(ok.is_success());
        assert_eq!(ok.error(), None);
        assert_eq!(ok.filename(), "a.png");

        let failed = FileOutcome::Failure {
            index: 1,
            filename: "b.png".to_string(),
            error: "Network error: connection refused".to_string(),
        };
        assert!(!failed.is_success());
        assert!(failed.receipt().is_none());
        assert_eq!(failed.index(), 1);
    }

    #[test]
    fn test_batch_result_counts() {
        let result = BatchResult {
            outcomes: vec![
                FileOutcome::Success {
                    index: 0,
                    filename: "a.png".to_string(),
                    receipt: UploadReceipt { data: json!(null) },
                },
                FileOutcome::Failure {
                    index: 1,
                    filename: "b.png".to_string(),
                    error: "timeout".to_string(),
                },
            ],
        };
        assert_eq!(result.len(), 2);
        assert_eq!(result.succeeded(), 1);
        assert_eq!(result.failed(), 1);
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let failed = FileOutcome::Failure {
            index: 2,
            filename: "c.bin".to_string(),
            error: "too large".to_string(),
        };
        let value = serde_json::to_value(&failed).unwrap();
        assert_eq!(value["status"], "failure");
        assert_eq!(value["filename"], "c.bin");
    }
}
