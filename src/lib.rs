//! Word↔PDF conversion workflow. The [`WorkflowController`] owns the
//! selection/validation/conversion state machine; actual transcoding is
//! behind the [`DocumentConverter`] trait.

pub mod config;
pub mod constants;
pub mod controller;
pub mod conversion;
pub mod events;
pub mod services;
pub mod state;

pub use controller::{ErrorKind, WorkflowController, WorkflowError};
pub use conversion::{
    ConversionDirection, ConversionOutput, ConversionRequest, FileCandidate, OutputArtifact,
    StagedFile,
};
pub use events::{create_event_channel, EventReceiver, EventSender, WorkflowEvent};
pub use services::{
    ConvertError, DocumentConverter, FileService, PassthroughConverter, RemoteConverter,
    ValidationService,
};
pub use state::WorkflowState;
