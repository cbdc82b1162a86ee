use crate::controller::WorkflowError;
use crate::conversion::StagedFile;

#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowState {
    Idle,
    FileStaged(StagedFile),
    Converting {
        // The payload itself travels with the in-flight request; the state
        // keeps only the file's identity.
        file_name: String,
        size_bytes: u64,
    },
    Succeeded {
        artifact_name: String,
    },
    Failed {
        error: WorkflowError,
    },
}

impl Default for WorkflowState {
    fn default() -> Self {
        WorkflowState::Idle
    }
}

impl WorkflowState {
    pub fn is_idle(&self) -> bool {
        matches!(self, WorkflowState::Idle)
    }

    pub fn is_staged(&self) -> bool {
        matches!(self, WorkflowState::FileStaged(_))
    }

    pub fn is_converting(&self) -> bool {
        matches!(self, WorkflowState::Converting { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, WorkflowState::Failed { .. })
    }

    pub fn staged_file(&self) -> Option<&StagedFile> {
        match self {
            WorkflowState::FileStaged(file) => Some(file),
            _ => None,
        }
    }

    pub fn file_name(&self) -> Option<&str> {
        match self {
            WorkflowState::FileStaged(file) => Some(file.name()),
            WorkflowState::Converting { file_name, .. } => Some(file_name),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&WorkflowError> {
        match self {
            WorkflowState::Failed { error } => Some(error),
            _ => None,
        }
    }

    /// Moves the staged file out and leaves `Converting` in its place.
    /// Returns `None` without touching the state unless a file is staged,
    /// which is what keeps a second start-conversion from ever launching a
    /// second in-flight attempt.
    pub fn begin_conversion(&mut self) -> Option<StagedFile> {
        match std::mem::take(self) {
            WorkflowState::FileStaged(file) => {
                *self = WorkflowState::Converting {
                    file_name: file.name().to_string(),
                    size_bytes: file.size_bytes(),
                };
                Some(file)
            }
            other => {
                *self = other;
                None
            }
        }
    }

    pub fn transition_to_succeeded(self, artifact_name: &str) -> Self {
        match self {
            WorkflowState::Converting { .. } => WorkflowState::Succeeded {
                artifact_name: artifact_name.to_string(),
            },
            other => other,
        }
    }

    pub fn transition_to_failed(self, error: WorkflowError) -> Self {
        WorkflowState::Failed { error }
    }

    pub fn reset_to_idle(&mut self) {
        *self = WorkflowState::Idle;
    }

    pub fn describe(&self) -> &'static str {
        match self {
            WorkflowState::Idle => "idle",
            WorkflowState::FileStaged(_) => "a file is staged",
            WorkflowState::Converting { .. } => "a conversion is in progress",
            WorkflowState::Succeeded { .. } => "the last conversion succeeded",
            WorkflowState::Failed { .. } => "the last attempt failed",
        }
    }
}
