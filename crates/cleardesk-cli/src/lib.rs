use std::collections::HashMap;
use std::sync::Mutex;

use cleardesk_client::{OutcomeEvent, ProgressEvent, UploadObserver};

/// Render one progress line, e.g. `[2/5] report.pdf 45%`.
pub fn format_progress_line(filename: &str, percent: f32, completed: usize, total: usize) -> String {
    format!("[{}/{}] {} {:.0}%", completed, total, filename, percent)
}

/// Observer that prints upload progress to stderr.
///
/// Progress lines are throttled to roughly 10-percent steps per file so a
/// large batch does not flood the terminal; every settled file gets exactly
/// one completion line. Result JSON goes to stdout separately.
#[derive(Default)]
pub struct ConsoleObserver {
    last_percent: Mutex<HashMap<String, f32>>,
}

impl UploadObserver for ConsoleObserver {
    fn on_progress(&self, event: &ProgressEvent) {
        if let Ok(mut last) = self.last_percent.lock() {
            let prev = last.get(&event.filename).copied().unwrap_or(-10.0);
            if event.percent - prev >= 10.0 || (event.percent >= 100.0 && prev < 100.0) {
                last.insert(event.filename.clone(), event.percent);
                eprintln!(
                    "{}",
                    format_progress_line(
                        &event.filename,
                        event.percent,
                        event.completed,
                        event.total
                    )
                );
            }
        }
    }

    fn on_file_complete(&self, event: &OutcomeEvent) {
        match &event.error {
            None => eprintln!(
                "[{}/{}] {} uploaded",
                event.completed, event.total, event.filename
            ),
            Some(error) => eprintln!(
                "[{}/{}] {} failed: {}",
                event.completed, event.total, event.filename, error
            ),
        }
    }
}

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
