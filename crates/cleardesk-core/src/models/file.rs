use bytes::Bytes;
use std::path::Path;

use crate::error::UploadError;

/// In-memory handle to a file queued for upload: name, MIME type, payload.
///
/// The payload is held as [`Bytes`], so clones are cheap and a handle can be
/// shared across concurrent transfers without copying the data.
#[derive(Debug, Clone)]
pub struct FileHandle {
    name: String,
    content_type: String,
    data: Bytes,
}

impl FileHandle {
    pub fn new(
        name: impl Into<String>,
        content_type: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            data: data.into(),
        }
    }

    /// Build a handle from a local file, inferring the MIME type from the
    /// filename extension.
    pub fn from_path(path: &Path) -> Result<Self, UploadError> {
        let data = std::fs::read(path)?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("file")
            .to_string();
        let content_type = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| content_type_for_extension(&e.to_ascii_lowercase()))
            .unwrap_or("application/octet-stream")
            .to_string();

        Ok(Self {
            name,
            content_type,
            data: Bytes::from(data),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    /// Payload bytes. Cheap: this clones a reference-counted handle.
    pub fn data(&self) -> Bytes {
        self.data.clone()
    }

    /// Lowercase suffix after the last `.` in the filename, if any.
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
    }
}

/// Look up the MIME type for a lowercase filename extension.
/// Unknown extensions fall back to `application/octet-stream`.
pub fn content_type_for_extension(extension: &str) -> &'static str {
    match extension {
        // Images
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        // Videos
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "avi" => "video/x-msvideo",
        "mkv" => "video/x-matroska",
        // Audio
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        "m4a" => "audio/mp4",
        "flac" => "audio/flac",
        // Documents
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "ppt" => "application/vnd.ms-powerpoint",
        "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "txt" => "text/plain",
        "csv" => "text/csv",
        // Archives
        "zip" => "application/zip",
        "tar" => "application/x-tar",
        "gz" => "application/gzip",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_size_and_data() {
        let file = FileHandle::new("report.pdf", "application/pdf", vec![0u8; 42]);
        assert_eq!(file.size(), 42);
        assert_eq!(file.data().len(), 42);
        assert_eq!(file.name(), "report.pdf");
        assert_eq!(file.content_type(), "application/pdf");
    }

    #[test]
    fn test_extension_lowercases_last_suffix() {
        let file = FileHandle::new("Archive.Tar.GZ", "application/gzip", Bytes::new());
        assert_eq!(file.extension().as_deref(), Some("gz"));
    }

    #[test]
    fn test_extension_missing() {
        let file = FileHandle::new("README", "text/plain", Bytes::new());
        assert_eq!(file.extension(), None);
    }

    #[test]
    fn test_from_path_infers_content_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.JPG");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(b"not really a jpeg").unwrap();

        let handle = FileHandle::from_path(&path).unwrap();
        assert_eq!(handle.name(), "photo.JPG");
        assert_eq!(handle.content_type(), "image/jpeg");
        assert_eq!(handle.size(), 17);
    }

    #[test]
    fn test_from_path_unknown_extension_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.xyz");
        std::fs::write(&path, b"payload").unwrap();

        let handle = FileHandle::from_path(&path).unwrap();
        assert_eq!(handle.content_type(), "application/octet-stream");
    }

    #[test]
    fn test_from_path_missing_file_is_io_error() {
        let err = FileHandle::from_path(Path::new("/nonexistent/nope.txt")).unwrap_err();
        assert_eq!(err.error_type(), "Io");
    }
}
