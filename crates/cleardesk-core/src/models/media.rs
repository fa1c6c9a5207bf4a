use serde::{Deserialize, Serialize};

/// Broad media category derived from a MIME type.
///
/// Classification is by ordered substring checks, first match wins:
/// image → video → audio → pdf → word/document → sheet/excel →
/// presentation/powerpoint → text → archive → other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaCategory {
    Image,
    Video,
    Audio,
    Pdf,
    Document,
    Spreadsheet,
    Presentation,
    Text,
    Archive,
    Other,
}

impl MediaCategory {
    /// Classify a MIME type. Unknown or empty types map to `Other`.
    pub fn from_content_type(content_type: &str) -> Self {
        let ct = content_type.to_ascii_lowercase();

        if ct.starts_with("image/") {
            MediaCategory::Image
        } else if ct.starts_with("video/") {
            MediaCategory::Video
        } else if ct.starts_with("audio/") {
            MediaCategory::Audio
        } else if ct.contains("pdf") {
            MediaCategory::Pdf
        } else if ct.contains("word") || ct.contains("document") {
            MediaCategory::Document
        } else if ct.contains("sheet") || ct.contains("excel") {
            MediaCategory::Spreadsheet
        } else if ct.contains("presentation") || ct.contains("powerpoint") {
            MediaCategory::Presentation
        } else if ct.starts_with("text/") {
            MediaCategory::Text
        } else if ct.contains("zip") || ct.contains("tar") || ct.contains("compressed") {
            MediaCategory::Archive
        } else {
            MediaCategory::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaCategory::Image => "image",
            MediaCategory::Video => "video",
            MediaCategory::Audio => "audio",
            MediaCategory::Pdf => "pdf",
            MediaCategory::Document => "document",
            MediaCategory::Spreadsheet => "spreadsheet",
            MediaCategory::Presentation => "presentation",
            MediaCategory::Text => "text",
            MediaCategory::Archive => "archive",
            MediaCategory::Other => "other",
        }
    }
}

impl std::fmt::Display for MediaCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_prefixes() {
        assert_eq!(
            MediaCategory::from_content_type("image/png"),
            MediaCategory::Image
        );
        assert_eq!(
            MediaCategory::from_content_type("video/mp4"),
            MediaCategory::Video
        );
        assert_eq!(
            MediaCategory::from_content_type("audio/mpeg"),
            MediaCategory::Audio
        );
        assert_eq!(
            MediaCategory::from_content_type("text/csv"),
            MediaCategory::Text
        );
    }

    #[test]
    fn test_classify_pdf() {
        assert_eq!(
            MediaCategory::from_content_type("application/pdf"),
            MediaCategory::Pdf
        );
    }

    #[test]
    fn test_classify_office_documents() {
        assert_eq!(
            MediaCategory::from_content_type("application/msword"),
            MediaCategory::Document
        );
        assert_eq!(
            MediaCategory::from_content_type(
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            ),
            MediaCategory::Document
        );
        assert_eq!(
            MediaCategory::from_content_type(
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            ),
            MediaCategory::Spreadsheet
        );
        assert_eq!(
            MediaCategory::from_content_type("application/vnd.ms-excel"),
            MediaCategory::Spreadsheet
        );
        assert_eq!(
            MediaCategory::from_content_type("application/vnd.ms-powerpoint"),
            MediaCategory::Presentation
        );
    }

    #[test]
    fn test_classify_archives() {
        assert_eq!(
            MediaCategory::from_content_type("application/zip"),
            MediaCategory::Archive
        );
        assert_eq!(
            MediaCategory::from_content_type("application/x-tar"),
            MediaCategory::Archive
        );
    }

    #[test]
    fn test_classify_unknown_is_other() {
        assert_eq!(
            MediaCategory::from_content_type("application/x-unknown"),
            MediaCategory::Other
        );
        assert_eq!(MediaCategory::from_content_type(""), MediaCategory::Other);
    }

    #[test]
    fn test_classify_case_insensitive() {
        assert_eq!(
            MediaCategory::from_content_type("IMAGE/PNG"),
            MediaCategory::Image
        );
        assert_eq!(
            MediaCategory::from_content_type("Application/PDF"),
            MediaCategory::Pdf
        );
    }

    #[test]
    fn test_as_str_round_trip() {
        assert_eq!(MediaCategory::Image.as_str(), "image");
        assert_eq!(MediaCategory::Other.to_string(), "other");
    }
}
