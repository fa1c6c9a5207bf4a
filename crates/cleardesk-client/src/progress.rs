//! Progress and outcome events emitted by the upload pipeline.
//!
//! The pipeline holds no state of its own: callers observe transfers through
//! [`UploadObserver`] and keep whatever bookkeeping they need. Events carry
//! the same fields on the single-file and batch paths.

use bytes::Bytes;
use futures::StreamExt;
use std::sync::Arc;

/// Transmission progress of one file.
///
/// `completed` counts files that settled in earlier chunks; it does not
/// advance while the file's own chunk is still in flight. On the single-file
/// path it is 0 and `total` is 1.
#[derive(Debug, Clone)]
pub struct ProgressEvent {
    pub filename: String,
    /// Percentage of the file's bytes handed to the transport, 0–100.
    pub percent: f32,
    pub completed: usize,
    pub total: usize,
}

/// Terminal outcome notification for one file. Fired exactly once per file.
#[derive(Debug, Clone)]
pub struct OutcomeEvent {
    pub filename: String,
    pub success: bool,
    /// Display-ready message, present only on failure.
    pub error: Option<String>,
    /// Files settled so far, including this one.
    pub completed: usize,
    pub total: usize,
}

/// Observer for upload progress and per-file outcomes.
///
/// Callbacks are fire-and-forget notifications and must not block; the
/// pipeline does not wait on them.
pub trait UploadObserver: Send + Sync {
    fn on_progress(&self, _event: &ProgressEvent) {}
    fn on_file_complete(&self, _event: &OutcomeEvent) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl UploadObserver for NoopObserver {}

/// Per-transfer context: identifies the file within its batch and carries
/// the observer progress events are routed to.
#[derive(Clone)]
pub(crate) struct ProgressContext {
    pub filename: String,
    pub completed: usize,
    pub total: usize,
    pub observer: Arc<dyn UploadObserver>,
}

impl ProgressContext {
    fn emit(&self, percent: f32) {
        self.observer.on_progress(&ProgressEvent {
            filename: self.filename.clone(),
            percent,
            completed: self.completed,
            total: self.total,
        });
    }
}

/// Request-body chunk size. Small enough that progress events fire steadily
/// on typical uplinks, large enough to keep per-chunk overhead low.
const BODY_CHUNK_SIZE: usize = 64 * 1024;

/// Wrap file bytes in a chunked stream body that reports cumulative progress
/// as the transport pulls each chunk. The total length is always known here,
/// so percentages are exact. Empty payloads produce a plain body with no
/// progress events.
pub(crate) fn progress_body(data: Bytes, ctx: ProgressContext) -> reqwest::Body {
    let total = data.len();
    if total == 0 {
        return reqwest::Body::from(data);
    }

    let chunks: Vec<Bytes> = (0..total)
        .step_by(BODY_CHUNK_SIZE)
        .map(|start| data.slice(start..usize::min(start + BODY_CHUNK_SIZE, total)))
        .collect();

    let mut sent = 0usize;
    let stream = futures::stream::iter(chunks).map(move |chunk| {
        sent += chunk.len();
        ctx.emit((sent as f64 / total as f64 * 100.0) as f32);
        Ok::<Bytes, std::convert::Infallible>(chunk)
    });

    reqwest::Body::wrap_stream(stream)
}
