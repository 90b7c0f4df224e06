//! File upload payload
//!
//! Carries the file a user dropped or selected, together with its declared
//! media type. Validation checks the declared type only; the bytes are
//! passed through untouched.

use serde::{Deserialize, Serialize};

/// The only media type the transcript endpoints accept.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// A file chosen by the user for submission.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(
        file_name: impl Into<String>,
        media_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Whether the declared media type is exactly `application/pdf`.
    pub fn is_pdf(&self) -> bool {
        self.media_type == PDF_MEDIA_TYPE
    }
}
