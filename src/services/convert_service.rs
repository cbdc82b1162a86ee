use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::constants::{APP_NAME, APP_VERSION, REMOTE_TIMEOUT_SECONDS};
use crate::conversion::{ConversionOutput, ConversionRequest};

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Converter rejected the input: {message}")]
    Rejected { message: String },
    #[error("Conversion endpoint returned status {status}")]
    RemoteStatus { status: reqwest::StatusCode },
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// The conversion backend contract. Implementations receive the opaque
/// payload plus its direction and produce the converted payload with a
/// suggested output name; the workflow controller never looks inside the
/// bytes on either side.
#[async_trait]
pub trait DocumentConverter: Send + Sync {
    async fn convert(&self, request: ConversionRequest) -> Result<ConversionOutput, ConvertError>;
}

/// Echoes the input payload back under the opposite format's name and MIME
/// type, optionally after a delay. Stands in for a real backend in demos
/// and tests.
pub struct PassthroughConverter {
    delay: Duration,
}

impl PassthroughConverter {
    pub fn new() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for PassthroughConverter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentConverter for PassthroughConverter {
    async fn convert(&self, request: ConversionRequest) -> Result<ConversionOutput, ConvertError> {
        if request.bytes.is_empty() {
            return Err(ConvertError::Rejected {
                message: format!("{} is empty", request.file_name),
            });
        }

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        Ok(ConversionOutput {
            suggested_name: request.direction.suggested_output_name(&request.file_name),
            mime_type: request.direction.output_mime_type().to_string(),
            bytes: request.bytes,
        })
    }
}

/// Sends the payload to a conversion endpoint over HTTP. The endpoint
/// receives the raw bytes with the input MIME type and the direction and
/// file name as query parameters, and answers with the converted bytes.
pub struct RemoteConverter {
    client: reqwest::Client,
    endpoint: String,
}

impl RemoteConverter {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ConvertError> {
        let client = reqwest::Client::builder()
            .user_agent(format!("{}/{}", APP_NAME, APP_VERSION))
            .timeout(Duration::from_secs(REMOTE_TIMEOUT_SECONDS))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl DocumentConverter for RemoteConverter {
    async fn convert(&self, request: ConversionRequest) -> Result<ConversionOutput, ConvertError> {
        let direction = request.direction;

        tracing::debug!(
            "Sending {} ({} bytes) to {}",
            request.file_name,
            request.bytes.len(),
            self.endpoint
        );

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[
                ("direction", direction.as_str()),
                ("filename", request.file_name.as_str()),
            ])
            .header(reqwest::header::CONTENT_TYPE, request.mime_type)
            .body(request.bytes)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ConvertError::RemoteStatus {
                status: response.status(),
            });
        }

        let bytes = response.bytes().await?.to_vec();
        Ok(ConversionOutput {
            suggested_name: direction.suggested_output_name(&request.file_name),
            mime_type: direction.output_mime_type().to_string(),
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::ConversionDirection;

    fn request(name: &str, direction: ConversionDirection, bytes: Vec<u8>) -> ConversionRequest {
        ConversionRequest {
            file_name: name.to_string(),
            mime_type: direction.input_mime_type().to_string(),
            direction,
            bytes,
        }
    }

    #[tokio::test]
    async fn test_passthrough_produces_opposite_format() {
        let converter = PassthroughConverter::new();
        let output = converter
            .convert(request(
                "report.docx",
                ConversionDirection::WordToPdf,
                vec![1, 2, 3],
            ))
            .await
            .unwrap();

        assert_eq!(output.suggested_name, "converted-report.pdf");
        assert_eq!(output.mime_type, "application/pdf");
        assert_eq!(output.bytes, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_passthrough_rejects_empty_payload() {
        let converter = PassthroughConverter::new();
        let err = converter
            .convert(request(
                "empty.pdf",
                ConversionDirection::PdfToWord,
                Vec::new(),
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, ConvertError::Rejected { .. }));
    }
}
