//! Pre-flight file validation.
//!
//! Validation runs before any network activity. All checks are evaluated
//! independently so a file that violates several constraints reports every
//! violation at once; callers get a report, never an error.

use crate::format::format_file_size;
use crate::models::FileHandle;

/// Constraints applied to a file before upload.
///
/// Empty allow-lists mean unrestricted; `max_size_bytes` of `None` means no
/// size limit. Supplied by the caller per invocation.
#[derive(Debug, Clone, Default)]
pub struct UploadConstraints {
    pub max_size_bytes: Option<u64>,
    pub allowed_content_types: Vec<String>,
    pub allowed_extensions: Vec<String>,
}

/// A single pre-flight violation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("File size {} exceeds the maximum of {}", format_file_size(*size), format_file_size(*max))]
    FileTooLarge { size: u64, max: u64 },

    #[error("File type {content_type} is not allowed")]
    ContentTypeNotAllowed { content_type: String },

    #[error("File extension .{extension} is not allowed")]
    ExtensionNotAllowed { extension: String },

    #[error("Filename {filename} has no extension")]
    MissingExtension { filename: String },
}

/// Outcome of validating one file: every applicable violation.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Display-ready message per violation.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// File validator
///
/// Checks a file handle against size, content-type, and extension
/// constraints without touching storage or the network.
#[derive(Debug, Clone)]
pub struct FileValidator {
    constraints: UploadConstraints,
}

impl FileValidator {
    pub fn new(constraints: UploadConstraints) -> Self {
        Self { constraints }
    }

    /// Validate a file against the constraints. Checks do not short-circuit:
    /// the report carries one entry per violated constraint.
    pub fn validate(&self, file: &FileHandle) -> ValidationReport {
        let mut errors = Vec::new();

        if let Some(max) = self.constraints.max_size_bytes {
            if file.size() > max {
                errors.push(ValidationError::FileTooLarge {
                    size: file.size(),
                    max,
                });
            }
        }

        if !self.constraints.allowed_content_types.is_empty() {
            let allowed = self
                .constraints
                .allowed_content_types
                .iter()
                .any(|ct| ct.eq_ignore_ascii_case(file.content_type()));
            if !allowed {
                errors.push(ValidationError::ContentTypeNotAllowed {
                    content_type: file.content_type().to_string(),
                });
            }
        }

        if !self.constraints.allowed_extensions.is_empty() {
            match file.extension() {
                Some(extension) => {
                    // Accept constraint entries written with or without a leading dot.
                    let allowed = self
                        .constraints
                        .allowed_extensions
                        .iter()
                        .any(|e| e.trim_start_matches('.').eq_ignore_ascii_case(&extension));
                    if !allowed {
                        errors.push(ValidationError::ExtensionNotAllowed { extension });
                    }
                }
                None => {
                    errors.push(ValidationError::MissingExtension {
                        filename: file.name().to_string(),
                    });
                }
            }
        }

        ValidationReport { errors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(size: usize) -> FileHandle {
        FileHandle::new("photo.png", "image/png", vec![0u8; size])
    }

    fn image_constraints(max: u64) -> UploadConstraints {
        UploadConstraints {
            max_size_bytes: Some(max),
            allowed_content_types: vec!["image/jpeg".to_string(), "image/png".to_string()],
            allowed_extensions: vec!["jpg".to_string(), "png".to_string()],
        }
    }

    #[test]
    fn test_valid_file_passes() {
        let validator = FileValidator::new(image_constraints(1024));
        let report = validator.validate(&png(512));
        assert!(report.is_valid());
        assert!(report.messages().is_empty());
    }

    #[test]
    fn test_unrestricted_constraints_accept_anything() {
        let validator = FileValidator::new(UploadConstraints::default());
        let file = FileHandle::new("anything.xyz", "application/x-unknown", vec![0u8; 10_000_000]);
        assert!(validator.validate(&file).is_valid());
    }

    #[test]
    fn test_oversized_file() {
        let validator = FileValidator::new(image_constraints(1024));
        let report = validator.validate(&png(2048));
        assert_eq!(report.errors.len(), 1);
        assert_eq!(
            report.messages()[0],
            "File size 2 KB exceeds the maximum of 1 KB"
        );
    }

    #[test]
    fn test_disallowed_content_type() {
        let validator = FileValidator::new(image_constraints(1024));
        let file = FileHandle::new("clip.png", "video/mp4", vec![0u8; 10]);
        let report = validator.validate(&file);
        assert_eq!(
            report.errors,
            vec![ValidationError::ContentTypeNotAllowed {
                content_type: "video/mp4".to_string()
            }]
        );
    }

    #[test]
    fn test_disallowed_extension() {
        let validator = FileValidator::new(image_constraints(1024));
        let file = FileHandle::new("photo.bmp", "image/png", vec![0u8; 10]);
        let report = validator.validate(&file);
        assert_eq!(
            report.errors,
            vec![ValidationError::ExtensionNotAllowed {
                extension: "bmp".to_string()
            }]
        );
    }

    #[test]
    fn test_all_violations_reported_together() {
        // Oversized, wrong type, and wrong extension: three entries, not one.
        let validator = FileValidator::new(image_constraints(1024));
        let file = FileHandle::new("movie.avi", "video/x-msvideo", vec![0u8; 4096]);
        let report = validator.validate(&file);
        assert_eq!(report.errors.len(), 3);
        assert!(!report.is_valid());
    }

    #[test]
    fn test_missing_extension_with_restriction() {
        let validator = FileValidator::new(image_constraints(1024));
        let file = FileHandle::new("README", "image/png", vec![0u8; 10]);
        let report = validator.validate(&file);
        assert_eq!(
            report.errors,
            vec![ValidationError::MissingExtension {
                filename: "README".to_string()
            }]
        );
    }

    #[test]
    fn test_case_insensitive_matching() {
        let validator = FileValidator::new(image_constraints(1024));
        let file = FileHandle::new("PHOTO.PNG", "IMAGE/PNG", vec![0u8; 10]);
        assert!(validator.validate(&file).is_valid());
    }

    #[test]
    fn test_extension_constraint_with_leading_dot() {
        let constraints = UploadConstraints {
            allowed_extensions: vec![".png".to_string()],
            ..Default::default()
        };
        let validator = FileValidator::new(constraints);
        assert!(validator.validate(&png(10)).is_valid());
    }

    #[test]
    fn test_size_at_limit_is_allowed() {
        let validator = FileValidator::new(image_constraints(1024));
        assert!(validator.validate(&png(1024)).is_valid());
    }
}
