use thiserror::Error;

use crate::constants::DEFAULT_MAX_FILE_SIZE_BYTES;
use crate::conversion::{ConversionDirection, FileCandidate, StagedFile};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select a {required} file ({name:?} does not match)")]
    InvalidFileType { required: &'static str, name: String },
    #[error("File is too large: {size_bytes} bytes (maximum is {max_bytes} bytes)")]
    FileTooLarge { size_bytes: u64, max_bytes: u64 },
}

#[derive(Debug, Clone)]
pub struct ValidationService {
    max_file_size_bytes: u64,
}

impl ValidationService {
    pub fn new(max_file_size_bytes: u64) -> Self {
        Self {
            max_file_size_bytes,
        }
    }

    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_bytes
    }

    /// Validates a candidate against the current direction and turns it into
    /// a staged file. The extension check runs before the size check.
    pub fn stage(
        &self,
        candidate: FileCandidate,
        direction: ConversionDirection,
    ) -> Result<StagedFile, ValidationError> {
        self.validate_extension(&candidate, direction)?;
        self.validate_size(&candidate)?;
        Ok(StagedFile::from_candidate(candidate))
    }

    pub fn validate_extension(
        &self,
        candidate: &FileCandidate,
        direction: ConversionDirection,
    ) -> Result<(), ValidationError> {
        let required = direction.required_extension();
        match candidate.extension() {
            Some(ext) if ext == required => Ok(()),
            _ => Err(ValidationError::InvalidFileType {
                required: direction.required_file_label(),
                name: candidate.name.clone(),
            }),
        }
    }

    pub fn validate_size(&self, candidate: &FileCandidate) -> Result<(), ValidationError> {
        let size_bytes = candidate.size_bytes();
        if size_bytes > self.max_file_size_bytes {
            return Err(ValidationError::FileTooLarge {
                size_bytes,
                max_bytes: self.max_file_size_bytes,
            });
        }
        Ok(())
    }
}

impl Default for ValidationService {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FILE_SIZE_BYTES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, size: usize) -> FileCandidate {
        FileCandidate::new(name, "application/octet-stream", vec![0u8; size])
    }

    #[test]
    fn test_extension_must_match_direction() {
        let validation = ValidationService::default();

        assert!(validation
            .stage(candidate("report.docx", 16), ConversionDirection::WordToPdf)
            .is_ok());
        assert!(validation
            .stage(candidate("report.pdf", 16), ConversionDirection::PdfToWord)
            .is_ok());

        let err = validation
            .stage(candidate("report.docx", 16), ConversionDirection::PdfToWord)
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFileType { .. }));

        let err = validation
            .stage(candidate("report.pdf", 16), ConversionDirection::WordToPdf)
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFileType { .. }));
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        let validation = ValidationService::default();
        assert!(validation
            .stage(candidate("Report.DOCX", 16), ConversionDirection::WordToPdf)
            .is_ok());
    }

    #[test]
    fn test_missing_extension_is_rejected() {
        let validation = ValidationService::default();
        let err = validation
            .stage(candidate("report", 16), ConversionDirection::WordToPdf)
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFileType { .. }));
    }

    #[test]
    fn test_oversized_file_is_rejected() {
        let validation = ValidationService::new(8);
        let err = validation
            .stage(candidate("report.docx", 9), ConversionDirection::WordToPdf)
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::FileTooLarge {
                size_bytes: 9,
                max_bytes: 8,
            }
        );

        // Exactly at the limit is still accepted.
        assert!(validation
            .stage(candidate("report.docx", 8), ConversionDirection::WordToPdf)
            .is_ok());
    }

    #[test]
    fn test_extension_check_takes_precedence_over_size() {
        let validation = ValidationService::new(8);
        let err = validation
            .stage(candidate("report.pdf", 64), ConversionDirection::WordToPdf)
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFileType { .. }));
    }
}
