//! Wire types for the advisory service endpoints.

use serde::{Deserialize, Serialize};

/// Body for `POST /chat`.
#[derive(Serialize, Debug, Clone)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: String,
}

/// Success body from `/chat`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatResponse {
    pub response: String,
}

/// Success body from `/upload-transcript`.
///
/// The service attaches the matched course documents alongside the
/// response text; the engine only displays `response`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TranscriptResponse {
    pub response: String,
    #[serde(default)]
    pub courses: Option<Vec<String>>,
}

/// Success body from the generic `/upload` path.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UploadResponse {
    pub response: String,
}

/// Raw `/upload-transcript` body before success/error is decided: the
/// service reports logical failures as `{error}` even under HTTP 200.
#[derive(Deserialize, Debug)]
pub(crate) struct TranscriptBody {
    pub response: Option<String>,
    pub error: Option<String>,
    #[serde(default)]
    pub courses: Option<Vec<String>>,
}

/// Error body the service sends with non-success statuses.
#[derive(Deserialize, Debug)]
pub(crate) struct ErrorBody {
    pub error: String,
}
