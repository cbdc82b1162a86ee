pub mod convert_service;
pub mod file_service;
pub mod validation_service;

pub use convert_service::{ConvertError, DocumentConverter, PassthroughConverter, RemoteConverter};
pub use file_service::{FileError, FileService};
pub use validation_service::{ValidationError, ValidationService};
