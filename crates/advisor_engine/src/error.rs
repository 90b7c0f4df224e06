use thiserror::Error;

/// Errors returned to the caller of the engine's entry points.
///
/// These never escape a controller invocation with the engine in an
/// inconsistent state: the log and flags are always left retryable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A request is already in flight (single-flight discipline).
    #[error("a request is already in flight")]
    Busy,

    /// The file's declared media type is not `application/pdf`.
    #[error("only PDF files are accepted")]
    InvalidFileType,

    /// `confirm_upload` was called with nothing selected.
    #[error("no file has been selected")]
    NoPendingSelection,
}
