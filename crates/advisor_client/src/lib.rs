pub mod api;
pub mod client_trait;
pub mod error;

pub use api::client::AdvisorClient;
pub use api::models::{ChatRequest, ChatResponse, TranscriptResponse, UploadResponse};
pub use client_trait::AdvisorApi;
pub use error::ApiError;
