//! Application-wide constants.

/// Default endpoint path for single-file uploads.
pub const UPLOAD_PATH: &str = "/upload/file";

/// Default category tag attached to uploads.
pub const DEFAULT_CATEGORY: &str = "general";

/// Default destination folder on the media store.
pub const DEFAULT_FOLDER: &str = "cleardesk/uploads";

/// Per-transfer timeout ceiling in seconds. Exceeding it is a hard failure,
/// not a retry trigger.
pub const UPLOAD_TIMEOUT_SECS: u64 = 300;

/// Default number of in-flight transfers in a batch.
pub const DEFAULT_CONCURRENCY: usize = 3;

/// Path marker separating the storage root from the asset path in delivery
/// URLs. Transformation segments are inserted directly after it.
pub const UPLOAD_URL_MARKER: &str = "/upload/";
