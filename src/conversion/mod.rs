use clap::ValueEnum;

use crate::constants::{
    OUTPUT_NAME_PREFIX, PDF_EXTENSION, PDF_MIME_TYPE, WORD_EXTENSION, WORD_MIME_TYPE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConversionDirection {
    WordToPdf,
    PdfToWord,
}

impl Default for ConversionDirection {
    fn default() -> Self {
        ConversionDirection::WordToPdf
    }
}

impl ConversionDirection {
    pub fn required_extension(&self) -> &'static str {
        match self {
            ConversionDirection::WordToPdf => WORD_EXTENSION,
            ConversionDirection::PdfToWord => PDF_EXTENSION,
        }
    }

    pub fn output_extension(&self) -> &'static str {
        match self {
            ConversionDirection::WordToPdf => PDF_EXTENSION,
            ConversionDirection::PdfToWord => WORD_EXTENSION,
        }
    }

    pub fn input_mime_type(&self) -> &'static str {
        match self {
            ConversionDirection::WordToPdf => WORD_MIME_TYPE,
            ConversionDirection::PdfToWord => PDF_MIME_TYPE,
        }
    }

    pub fn output_mime_type(&self) -> &'static str {
        match self {
            ConversionDirection::WordToPdf => PDF_MIME_TYPE,
            ConversionDirection::PdfToWord => WORD_MIME_TYPE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConversionDirection::WordToPdf => "word-to-pdf",
            ConversionDirection::PdfToWord => "pdf-to-word",
        }
    }

    pub fn required_file_label(&self) -> &'static str {
        match self {
            ConversionDirection::WordToPdf => "Word (.docx)",
            ConversionDirection::PdfToWord => "PDF (.pdf)",
        }
    }

    // Output name follows the converted-<stem>.<ext> convention, where the
    // stem is the input name up to the first dot.
    pub fn suggested_output_name(&self, input_name: &str) -> String {
        let stem = match input_name.split('.').next() {
            Some(s) if !s.is_empty() => s,
            _ => "output",
        };
        format!("{}{}.{}", OUTPUT_NAME_PREFIX, stem, self.output_extension())
    }
}

impl std::fmt::Display for ConversionDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionDirection::WordToPdf => write!(f, "Word to PDF"),
            ConversionDirection::PdfToWord => write!(f, "PDF to Word"),
        }
    }
}

// A raw user selection, before any validation has run.
#[derive(Debug, Clone, PartialEq)]
pub struct FileCandidate {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl FileCandidate {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn extension(&self) -> Option<String> {
        let (_, ext) = self.name.rsplit_once('.')?;
        Some(ext.to_lowercase())
    }
}

// A validated candidate. Only the validation service builds these, so a
// staged file always matches the direction it was staged under.
#[derive(Debug, Clone, PartialEq)]
pub struct StagedFile {
    name: String,
    mime_type: String,
    bytes: Vec<u8>,
}

impl StagedFile {
    pub(crate) fn from_candidate(candidate: FileCandidate) -> Self {
        Self {
            name: candidate.name,
            mime_type: candidate.mime_type,
            bytes: candidate.bytes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn into_request(self, direction: ConversionDirection) -> ConversionRequest {
        ConversionRequest {
            file_name: self.name,
            mime_type: self.mime_type,
            direction,
            bytes: self.bytes,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub file_name: String,
    pub mime_type: String,
    pub direction: ConversionDirection,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct ConversionOutput {
    pub suggested_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

// The deliverable produced by a successful conversion. Handed to the
// delivery mechanism and not retained by the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputArtifact {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl From<ConversionOutput> for OutputArtifact {
    fn from(output: ConversionOutput) -> Self {
        Self {
            name: output.suggested_name,
            mime_type: output.mime_type,
            bytes: output.bytes,
        }
    }
}

impl OutputArtifact {
    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_extensions() {
        assert_eq!(ConversionDirection::WordToPdf.required_extension(), "docx");
        assert_eq!(ConversionDirection::WordToPdf.output_extension(), "pdf");
        assert_eq!(ConversionDirection::PdfToWord.required_extension(), "pdf");
        assert_eq!(ConversionDirection::PdfToWord.output_extension(), "docx");
    }

    #[test]
    fn test_direction_mime_types() {
        assert_eq!(
            ConversionDirection::WordToPdf.output_mime_type(),
            "application/pdf"
        );
        assert_eq!(
            ConversionDirection::PdfToWord.output_mime_type(),
            ConversionDirection::WordToPdf.input_mime_type()
        );
    }

    #[test]
    fn test_suggested_output_name() {
        assert_eq!(
            ConversionDirection::WordToPdf.suggested_output_name("report.docx"),
            "converted-report.pdf"
        );
        assert_eq!(
            ConversionDirection::PdfToWord.suggested_output_name("scan.final.pdf"),
            "converted-scan.docx"
        );
        assert_eq!(
            ConversionDirection::WordToPdf.suggested_output_name(".docx"),
            "converted-output.pdf"
        );
    }

    #[test]
    fn test_candidate_extension_is_lowercased() {
        let candidate = FileCandidate::new("Report.DOCX", "application/octet-stream", vec![1]);
        assert_eq!(candidate.extension().as_deref(), Some("docx"));

        let no_ext = FileCandidate::new("README", "application/octet-stream", vec![1]);
        assert_eq!(no_ext.extension(), None);
    }
}
