use std::path::PathBuf;
use uuid::Uuid;

use crate::conversion::ConversionDirection;

#[derive(Debug, Clone)]
pub enum WorkflowEvent {
    // Selection events
    DirectionChanged(ConversionDirection),
    FileStaged {
        name: String,
        size_bytes: u64,
    },
    SelectionRejected {
        reason: String,
    },

    // Conversion events
    ConversionStarted {
        attempt_id: Uuid,
        input_name: String,
        direction: ConversionDirection,
    },
    ConversionCompleted {
        attempt_id: Uuid,
        output_name: String,
    },
    ConversionFailed {
        attempt_id: Uuid,
        error: String,
    },

    // Delivery events
    ArtifactDelivered(PathBuf),
}

pub type EventSender = tokio::sync::mpsc::UnboundedSender<WorkflowEvent>;
pub type EventReceiver = tokio::sync::mpsc::UnboundedReceiver<WorkflowEvent>;

pub fn create_event_channel() -> (EventSender, EventReceiver) {
    tokio::sync::mpsc::unbounded_channel()
}
