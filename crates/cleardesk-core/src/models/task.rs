use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::file::FileHandle;
use super::outcome::UploadReceipt;

/// Lifecycle state of an upload task.
///
/// Transitions are `Pending → Uploading → {Completed | Error}`, except that a
/// task failing pre-flight validation goes straight from `Pending` to `Error`.
/// `Completed` and `Error` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Uploading,
    Completed,
    Error,
}

impl TaskStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::Error)
    }
}

/// One file's journey through the upload pipeline.
///
/// `Completed` implies a receipt and no error message; `Error` implies the
/// reverse. The fields are private and transitions go through
/// [`start`](UploadTask::start) / [`complete`](UploadTask::complete) /
/// [`fail`](UploadTask::fail), so the invariant holds by construction.
#[derive(Debug, Clone)]
pub struct UploadTask {
    pub id: Uuid,
    pub file: FileHandle,
    pub category: String,
    pub folder: String,
    pub optimize: bool,
    pub created_at: DateTime<Utc>,
    status: TaskStatus,
    progress_percent: f32,
    receipt: Option<UploadReceipt>,
    error: Option<String>,
}

impl UploadTask {
    pub fn new(
        file: FileHandle,
        category: impl Into<String>,
        folder: impl Into<String>,
        optimize: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            file,
            category: category.into(),
            folder: folder.into(),
            optimize,
            created_at: Utc::now(),
            status: TaskStatus::Pending,
            progress_percent: 0.0,
            receipt: None,
            error: None,
        }
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn progress_percent(&self) -> f32 {
        self.progress_percent
    }

    pub fn receipt(&self) -> Option<&UploadReceipt> {
        self.receipt.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Mark the task as dispatched. Only valid from `Pending`; terminal
    /// states never transition again.
    pub fn start(&mut self) {
        if self.status == TaskStatus::Pending {
            self.status = TaskStatus::Uploading;
        }
    }

    /// Record transmission progress, clamped to 0–100. Ignored once the task
    /// reached a terminal state.
    pub fn set_progress(&mut self, percent: f32) {
        if !self.status.is_terminal() {
            self.progress_percent = percent.clamp(0.0, 100.0);
        }
    }

    /// Transition to `Completed` with the server's receipt.
    pub fn complete(&mut self, receipt: UploadReceipt) {
        self.status = TaskStatus::Completed;
        self.progress_percent = 100.0;
        self.receipt = Some(receipt);
        self.error = None;
    }

    /// Transition to `Error` with a display-ready message.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = TaskStatus::Error;
        self.receipt = None;
        self.error = Some(message.into());
    }
}
