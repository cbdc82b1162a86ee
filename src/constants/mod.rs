// App Constants
pub const APP_NAME: &str = "docshift";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// File handling
pub const WORD_EXTENSION: &str = "docx";
pub const PDF_EXTENSION: &str = "pdf";
pub const WORD_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const PDF_MIME_TYPE: &str = "application/pdf";

// Output naming: converted files are named converted-<stem>.<ext>
pub const OUTPUT_NAME_PREFIX: &str = "converted-";

// System limits
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024; // 10 MiB
pub const REMOTE_TIMEOUT_SECONDS: u64 = 30;
