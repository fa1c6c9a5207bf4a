//! ClearDesk Core Library
//!
//! This crate provides the domain models, error types, validation, and pure
//! helpers shared by the ClearDesk upload client and CLI: upload tasks and
//! their lifecycle, pre-flight file validation, byte-size formatting, media
//! category classification, and preview URL building.

pub mod constants;
pub mod error;
pub mod format;
pub mod models;
pub mod preview;
pub mod validation;

// Re-export commonly used types
pub use error::UploadError;
pub use format::format_file_size;
pub use models::{
    BatchResult, FileHandle, FileOutcome, MediaCategory, TaskStatus, UploadReceipt, UploadTask,
};
pub use preview::{thumbnail_url, PreviewUrlBuilder};
pub use validation::{FileValidator, UploadConstraints, ValidationError, ValidationReport};
