use thiserror::Error;

/// Errors surfaced by the advisory service boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure (connect, timeout, body read).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success status. `detail` carries the server's `{error}` body
    /// text when one was present and parseable, otherwise it is empty.
    #[error("server returned {status}: {detail}")]
    Status { status: u16, detail: String },

    /// Success status but the body carried an explicit `{error}` field.
    #[error("{message}")]
    Service { message: String },

    /// Success status but the body was not in the expected shape.
    #[error("malformed response body: {0}")]
    MalformedResponse(String),
}

impl ApiError {
    /// The most specific service-provided failure text, if any.
    ///
    /// Callers fall back to their own generic wording when this is `None`.
    pub fn service_detail(&self) -> Option<&str> {
        match self {
            Self::Service { message } => Some(message),
            Self::Status { detail, .. } if !detail.is_empty() => Some(detail),
            _ => None,
        }
    }
}
