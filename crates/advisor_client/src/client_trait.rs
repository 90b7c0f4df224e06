use async_trait::async_trait;

use advisor_core::FileUpload;

use crate::api::models::{ChatResponse, TranscriptResponse, UploadResponse};
use crate::error::ApiError;

/// The request/response boundary to the remote advisory service.
///
/// The engine talks to this trait so tests can substitute a double for the
/// HTTP implementation.
#[async_trait]
pub trait AdvisorApi: Send + Sync {
    /// One chat turn: `POST /chat` with the message and session token.
    async fn send_chat(&self, message: &str, session_id: &str)
        -> Result<ChatResponse, ApiError>;

    /// Transcript analysis: multipart `POST /upload-transcript`.
    async fn upload_transcript(
        &self,
        file: FileUpload,
        session_id: &str,
    ) -> Result<TranscriptResponse, ApiError>;

    /// Generic staged upload: multipart `POST /upload`, no session field.
    async fn upload_file(&self, file: FileUpload) -> Result<UploadResponse, ApiError>;
}
