use thiserror::Error;
use uuid::Uuid;

use crate::conversion::{ConversionDirection, FileCandidate, OutputArtifact};
use crate::events::{EventSender, WorkflowEvent};
use crate::services::{DocumentConverter, ValidationError, ValidationService};
use crate::state::WorkflowState;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    #[error(transparent)]
    Selection(#[from] ValidationError),
    #[error("Conversion failed: {message}. Please select the file again to retry.")]
    ConversionFailed { message: String },
    #[error("{operation} is not allowed while {state}")]
    InvalidOperation {
        operation: &'static str,
        state: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidFileType,
    FileTooLarge,
    ConversionFailed,
    InvalidOperation,
}

impl WorkflowError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WorkflowError::Selection(ValidationError::InvalidFileType { .. }) => {
                ErrorKind::InvalidFileType
            }
            WorkflowError::Selection(ValidationError::FileTooLarge { .. }) => {
                ErrorKind::FileTooLarge
            }
            WorkflowError::ConversionFailed { .. } => ErrorKind::ConversionFailed,
            WorkflowError::InvalidOperation { .. } => ErrorKind::InvalidOperation,
        }
    }
}

/// Mediates every direction/file/conversion transition. All mutation goes
/// through `&mut self`, so one controller instance never has more than one
/// conversion in flight.
pub struct WorkflowController {
    direction: ConversionDirection,
    state: WorkflowState,
    validation: ValidationService,
    event_sender: EventSender,
}

impl WorkflowController {
    pub fn new(
        direction: ConversionDirection,
        validation: ValidationService,
        event_sender: EventSender,
    ) -> Self {
        Self {
            direction,
            state: WorkflowState::Idle,
            validation,
            event_sender,
        }
    }

    pub fn direction(&self) -> ConversionDirection {
        self.direction
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn can_start_conversion(&self) -> bool {
        self.state.is_staged()
    }

    /// Switches direction and unconditionally drops any staged file and
    /// error; the required extension changed, so a prior selection can no
    /// longer be trusted. Rejected while a conversion is in flight.
    pub fn set_direction(&mut self, direction: ConversionDirection) -> Result<(), WorkflowError> {
        if self.state.is_converting() {
            return Err(WorkflowError::InvalidOperation {
                operation: "Changing direction",
                state: self.state.describe(),
            });
        }

        self.direction = direction;
        self.state.reset_to_idle();
        self.send_event(WorkflowEvent::DirectionChanged(direction));
        Ok(())
    }

    /// Validates a candidate against the current direction and stages it.
    /// An invalid candidate is never staged; the failure replaces whatever
    /// was staged before.
    pub fn select_file(&mut self, candidate: FileCandidate) -> Result<(), WorkflowError> {
        if self.state.is_converting() {
            return Err(WorkflowError::InvalidOperation {
                operation: "Selecting a file",
                state: self.state.describe(),
            });
        }

        match self.validation.stage(candidate, self.direction) {
            Ok(staged) => {
                self.send_event(WorkflowEvent::FileStaged {
                    name: staged.name().to_string(),
                    size_bytes: staged.size_bytes(),
                });
                self.state = WorkflowState::FileStaged(staged);
                Ok(())
            }
            Err(err) => {
                let error = WorkflowError::from(err);
                self.send_event(WorkflowEvent::SelectionRejected {
                    reason: error.to_string(),
                });
                self.state =
                    std::mem::take(&mut self.state).transition_to_failed(error.clone());
                Err(error)
            }
        }
    }

    /// Runs the staged file through the converter. Strict precondition: any
    /// call while the state is not exactly `FileStaged` is rejected with
    /// `InvalidOperation`. On success the artifact is returned for delivery
    /// and the workflow resets to idle; on failure the staged file is
    /// discarded and a retry requires a fresh selection.
    pub async fn start_conversion(
        &mut self,
        converter: &dyn DocumentConverter,
    ) -> Result<OutputArtifact, WorkflowError> {
        let Some(staged) = self.state.begin_conversion() else {
            return Err(WorkflowError::InvalidOperation {
                operation: "Starting a conversion",
                state: self.state.describe(),
            });
        };

        let attempt_id = Uuid::new_v4();
        tracing::info!(
            "Conversion {} started: {} ({})",
            attempt_id,
            staged.name(),
            self.direction
        );
        self.send_event(WorkflowEvent::ConversionStarted {
            attempt_id,
            input_name: staged.name().to_string(),
            direction: self.direction,
        });

        let request = staged.into_request(self.direction);
        match converter.convert(request).await {
            Ok(output) => {
                let artifact = OutputArtifact::from(output);
                self.state = std::mem::take(&mut self.state)
                    .transition_to_succeeded(&artifact.name);
                self.send_event(WorkflowEvent::ConversionCompleted {
                    attempt_id,
                    output_name: artifact.name.clone(),
                });
                tracing::info!("Conversion {} completed: {}", attempt_id, artifact.name);

                // Success is terminal for the attempt: hand the artifact to
                // the caller and return to idle.
                self.state.reset_to_idle();
                Ok(artifact)
            }
            Err(err) => {
                let error = WorkflowError::ConversionFailed {
                    message: err.to_string(),
                };
                // The staged file went with the request and is not
                // recovered; a failed attempt requires reselection.
                self.state =
                    std::mem::take(&mut self.state).transition_to_failed(error.clone());
                self.send_event(WorkflowEvent::ConversionFailed {
                    attempt_id,
                    error: error.to_string(),
                });
                tracing::error!("Conversion {} failed: {}", attempt_id, err);
                Err(error)
            }
        }
    }

    fn send_event(&self, event: WorkflowEvent) {
        if let Err(e) = self.event_sender.send(event) {
            tracing::error!("Failed to send workflow event: {}", e);
        }
    }
}
