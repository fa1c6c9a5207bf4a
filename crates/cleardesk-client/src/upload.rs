//! Single-file transfer and batch orchestration.
//!
//! A batch is processed in consecutive chunks sized to the configured
//! concurrency: every member of a chunk settles (success or failure) before
//! the next chunk starts, which bounds peak in-flight transfers without a
//! runtime semaphore. Failures are isolated per file: one transfer's error
//! never cancels or delays a sibling past its own chunk boundary.
//!
//! Once dispatched, a transfer runs to completion, error, or timeout; no
//! cancellation handle is exposed. There is no automatic retry anywhere in
//! this module — a failed file must be resubmitted by the caller.

use std::future::Future;
use std::sync::Arc;

use futures::future::join_all;
use serde::Deserialize;

use cleardesk_core::constants::{
    DEFAULT_CATEGORY, DEFAULT_CONCURRENCY, DEFAULT_FOLDER, UPLOAD_PATH, UPLOAD_TIMEOUT_SECS,
};
use cleardesk_core::models::{BatchResult, FileHandle, FileOutcome, UploadReceipt, UploadTask};
use cleardesk_core::validation::{FileValidator, UploadConstraints};
use cleardesk_core::UploadError;

use crate::progress::{progress_body, NoopObserver, OutcomeEvent, ProgressContext, UploadObserver};
use crate::ApiClient;

/// Options for one multipart transfer.
#[derive(Debug, Clone)]
pub struct UploadOptions {
    /// Endpoint path the multipart request is posted to.
    pub path: String,
    /// Category tag stored alongside the file.
    pub category: String,
    /// Destination folder hint on the media store.
    pub folder: String,
    /// Ask the server to derive optimized renditions.
    pub optimize: bool,
    /// Pre-flight constraints. Unrestricted by default.
    pub constraints: UploadConstraints,
}

impl Default for UploadOptions {
    fn default() -> Self {
        Self {
            path: UPLOAD_PATH.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            folder: DEFAULT_FOLDER.to_string(),
            optimize: true,
            constraints: UploadConstraints::default(),
        }
    }
}

/// Options for a batch of transfers.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub upload: UploadOptions,
    /// Peak number of in-flight transfers. Values below 1 are treated as 1.
    pub concurrency: usize,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            upload: UploadOptions::default(),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

/// Error body shape returned by the API on non-success statuses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl ApiClient {
    /// Upload one file. Validation runs first; invalid files never reach the
    /// network.
    pub async fn upload_file(
        &self,
        file: &FileHandle,
        options: &UploadOptions,
    ) -> Result<UploadReceipt, UploadError> {
        self.upload_file_with_observer(file, options, Arc::new(NoopObserver))
            .await
    }

    /// Upload one file, reporting progress and the terminal outcome through
    /// `observer`. Progress events carry `completed` 0 and `total` 1.
    pub async fn upload_file_with_observer(
        &self,
        file: &FileHandle,
        options: &UploadOptions,
        observer: Arc<dyn UploadObserver>,
    ) -> Result<UploadReceipt, UploadError> {
        let report = FileValidator::new(options.constraints.clone()).validate(file);
        if !report.is_valid() {
            return Err(UploadError::Validation(report.messages().join("; ")));
        }

        let ctx = ProgressContext {
            filename: file.name().to_string(),
            completed: 0,
            total: 1,
            observer: observer.clone(),
        };
        let result = self.transfer(file, options, ctx).await;

        observer.on_file_complete(&OutcomeEvent {
            filename: file.name().to_string(),
            success: result.is_ok(),
            error: result.as_ref().err().map(ToString::to_string),
            completed: 1,
            total: 1,
        });
        result
    }

    /// Upload a batch of files with bounded concurrency.
    ///
    /// Never fails as a whole: every failure is caught at the per-file
    /// boundary and recorded as a failure outcome. The result holds one
    /// outcome per input file, in submission order, regardless of completion
    /// order. `on_file_complete` fires exactly once per file.
    pub async fn upload_batch(
        &self,
        files: &[FileHandle],
        options: &BatchOptions,
        observer: Arc<dyn UploadObserver>,
    ) -> BatchResult {
        let total = files.len();
        let concurrency = options.concurrency.max(1);
        let validator = FileValidator::new(options.upload.constraints.clone());
        let upload_options = &options.upload;

        // Indexed task contexts, one per input, in submission order. Each
        // transfer owns its task; nothing mutable is shared within a chunk.
        let tasks: Vec<UploadTask> = files
            .iter()
            .map(|file| {
                UploadTask::new(
                    file.clone(),
                    upload_options.category.clone(),
                    upload_options.folder.clone(),
                    upload_options.optimize,
                )
            })
            .collect();

        tracing::debug!(total, concurrency, "Starting upload batch");

        let outcomes = process_in_chunks(
            tasks,
            concurrency,
            |index, task| {
                // Progress events report files settled in earlier chunks;
                // the count only advances at chunk boundaries.
                let ctx = ProgressContext {
                    filename: task.file.name().to_string(),
                    completed: index - index % concurrency,
                    total,
                    observer: observer.clone(),
                };
                let validator = &validator;
                async move {
                    self.run_task(index, task, upload_options, validator, ctx)
                        .await
                }
            },
            |chunk_start, settled| {
                for (offset, outcome) in settled.iter().enumerate() {
                    observer.on_file_complete(&OutcomeEvent {
                        filename: outcome.filename().to_string(),
                        success: outcome.is_success(),
                        error: outcome.error().map(str::to_string),
                        completed: chunk_start + offset + 1,
                        total,
                    });
                }
            },
        )
        .await;

        BatchResult { outcomes }
    }

    /// Drive one task to a terminal state and convert it into an outcome.
    /// Infallible by design: errors become failure records here.
    async fn run_task(
        &self,
        index: usize,
        mut task: UploadTask,
        options: &UploadOptions,
        validator: &FileValidator,
        ctx: ProgressContext,
    ) -> FileOutcome {
        let filename = task.file.name().to_string();

        let report = validator.validate(&task.file);
        if !report.is_valid() {
            let error = report.messages().join("; ");
            tracing::debug!(file = %filename, error = %error, "Upload rejected before dispatch");
            task.fail(error.clone());
            return FileOutcome::Failure {
                index,
                filename,
                error,
            };
        }

        task.start();
        match self.transfer(&task.file, options, ctx).await {
            Ok(receipt) => {
                task.complete(receipt.clone());
                FileOutcome::Success {
                    index,
                    filename,
                    receipt,
                }
            }
            Err(err) => {
                let error = err.to_string();
                tracing::warn!(file = %filename, kind = err.error_type(), error = %error, "Upload failed");
                task.fail(error.clone());
                FileOutcome::Failure {
                    index,
                    filename,
                    error,
                }
            }
        }
    }

    /// Raw multipart transfer. No validation, no retries.
    async fn transfer(
        &self,
        file: &FileHandle,
        options: &UploadOptions,
        ctx: ProgressContext,
    ) -> Result<UploadReceipt, UploadError> {
        let body = progress_body(file.data(), ctx);
        let part = reqwest::multipart::Part::stream_with_length(body, file.size())
            .file_name(file.name().to_string())
            .mime_str(file.content_type())
            .map_err(|e| {
                UploadError::Validation(format!(
                    "Invalid content type {}: {}",
                    file.content_type(),
                    e
                ))
            })?;
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("category", options.category.clone())
            .text("folder", options.folder.clone())
            .text("optimization", if options.optimize { "true" } else { "false" });

        let url = self.build_url(&options.path);
        tracing::debug!(file = %file.name(), url = %url, size = file.size(), "Dispatching upload");

        let response = self
            .apply_auth(self.client().post(&url).multipart(form))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .map(|b| b.message);
            return Err(UploadError::server(status.as_u16(), message));
        }

        let body = response.text().await.map_err(map_transport_error)?;
        serde_json::from_str(&body).map_err(|e| UploadError::InvalidResponse(e.to_string()))
    }
}

fn map_transport_error(err: reqwest::Error) -> UploadError {
    if err.is_timeout() {
        UploadError::Timeout(UPLOAD_TIMEOUT_SECS)
    } else {
        UploadError::Network(err.to_string())
    }
}

/// Run `items` through `run` in consecutive chunks of `chunk_size`.
///
/// All members of a chunk run concurrently and every one settles before the
/// next chunk starts, so at most `chunk_size` futures are in flight at any
/// instant. `after_chunk` is invoked once per chunk with the index of its
/// first item and its settled results. Results keep the input order.
pub(crate) async fn process_in_chunks<T, R, F, Fut, C>(
    items: Vec<T>,
    chunk_size: usize,
    run: F,
    mut after_chunk: C,
) -> Vec<R>
where
    F: Fn(usize, T) -> Fut,
    Fut: Future<Output = R>,
    C: FnMut(usize, &[R]),
{
    let chunk_size = chunk_size.max(1);
    let mut results = Vec::with_capacity(items.len());
    let mut queue = items.into_iter().enumerate();

    loop {
        let chunk: Vec<(usize, T)> = queue.by_ref().take(chunk_size).collect();
        if chunk.is_empty() {
            break;
        }

        let chunk_start = results.len();
        let settled = join_all(chunk.into_iter().map(|(index, item)| run(index, item))).await;
        after_chunk(chunk_start, &settled);
        results.extend(settled);
    }

    results
}
