use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::constants::{PDF_EXTENSION, PDF_MIME_TYPE, WORD_EXTENSION, WORD_MIME_TYPE};
use crate::conversion::{FileCandidate, OutputArtifact};
use crate::events::{EventSender, WorkflowEvent};

#[derive(Error, Debug)]
pub enum FileError {
    #[error("File not found: {path}")]
    NotFound { path: String },
    #[error("Invalid file name: {path}")]
    InvalidName { path: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Bridges the controller to the host filesystem: reads selected files into
/// candidates and writes delivered artifacts back out.
#[derive(Clone)]
pub struct FileService {
    event_sender: EventSender,
}

impl FileService {
    pub fn new(event_sender: EventSender) -> Self {
        Self { event_sender }
    }

    pub async fn read_candidate(&self, path: &Path) -> Result<FileCandidate, FileError> {
        if !path.is_file() {
            return Err(FileError::NotFound {
                path: path.to_string_lossy().to_string(),
            });
        }

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| FileError::InvalidName {
                path: path.to_string_lossy().to_string(),
            })?
            .to_string();

        let bytes = tokio::fs::read(path).await?;
        let mime_type = detect_mime_type(&name, &bytes);

        Ok(FileCandidate::new(name, mime_type, bytes))
    }

    pub async fn deliver(
        &self,
        artifact: &OutputArtifact,
        output_dir: &Path,
    ) -> Result<PathBuf, FileError> {
        tokio::fs::create_dir_all(output_dir).await?;

        let path = self
            .ensure_unique_output_path(output_dir.join(&artifact.name))
            .await;
        tokio::fs::write(&path, &artifact.bytes).await?;

        tracing::info!(
            "Delivered {} ({} bytes) to {}",
            artifact.name,
            artifact.size_bytes(),
            path.display()
        );
        self.send_event(WorkflowEvent::ArtifactDelivered(path.clone()));

        Ok(path)
    }

    pub async fn ensure_unique_output_path(&self, path: PathBuf) -> PathBuf {
        if !path.exists() {
            return path;
        }

        let parent = path.parent().unwrap_or(Path::new(".")).to_path_buf();
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("output");
        let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

        let mut counter = 1;
        loop {
            let new_name = if extension.is_empty() {
                format!("{}_{}", stem, counter)
            } else {
                format!("{}_{}.{}", stem, counter, extension)
            };

            let new_path = parent.join(new_name);
            if !new_path.exists() {
                return new_path;
            }

            counter += 1;

            // Prevent infinite loop
            if counter > 1000 {
                return parent.join(format!("{}_{}", stem, counter));
            }
        }
    }

    fn send_event(&self, event: WorkflowEvent) {
        if let Err(e) = self.event_sender.send(event) {
            tracing::error!("Failed to send file event: {}", e);
        }
    }
}

fn detect_mime_type(name: &str, bytes: &[u8]) -> String {
    let head = &bytes[..bytes.len().min(8192)];
    if let Some(kind) = infer::get(head) {
        return kind.mime_type().to_string();
    }

    // infer could not tell; fall back to the extension.
    let extension = name.rsplit_once('.').map(|(_, ext)| ext.to_lowercase());
    match extension.as_deref() {
        Some(ext) if ext == WORD_EXTENSION => WORD_MIME_TYPE.to_string(),
        Some(ext) if ext == PDF_EXTENSION => PDF_MIME_TYPE.to_string(),
        _ => "application/octet-stream".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::create_event_channel;

    fn service() -> FileService {
        let (sender, _receiver) = create_event_channel();
        FileService::new(sender)
    }

    #[tokio::test]
    async fn test_read_candidate_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = service()
            .read_candidate(&dir.path().join("missing.docx"))
            .await
            .unwrap_err();
        assert!(matches!(err, FileError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_read_candidate_falls_back_to_extension_mime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.pdf");
        tokio::fs::write(&path, b"not really a pdf").await.unwrap();

        let candidate = service().read_candidate(&path).await.unwrap();
        assert_eq!(candidate.name, "report.pdf");
        assert_eq!(candidate.mime_type, "application/pdf");
        assert_eq!(candidate.size_bytes(), 16);
    }

    #[tokio::test]
    async fn test_deliver_writes_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = OutputArtifact {
            name: "converted-report.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            bytes: vec![1, 2, 3],
        };

        let path = service().deliver(&artifact, dir.path()).await.unwrap();
        assert_eq!(tokio::fs::read(&path).await.unwrap(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_deliver_keeps_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = OutputArtifact {
            name: "converted-report.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            bytes: vec![1],
        };

        let first = service().deliver(&artifact, dir.path()).await.unwrap();
        let second = service().deliver(&artifact, dir.path()).await.unwrap();

        assert_ne!(first, second);
        assert!(second.to_string_lossy().contains("converted-report_1"));
        assert!(first.exists() && second.exists());
    }
}
