use std::time::Duration;

use async_trait::async_trait;
use log::{error, info};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};

use advisor_core::{Config, FileUpload};

use crate::api::models::{
    ChatRequest, ChatResponse, ErrorBody, TranscriptBody, TranscriptResponse, UploadResponse,
};
use crate::client_trait::AdvisorApi;
use crate::error::ApiError;

/// Reqwest-backed client for the advisory service.
#[derive(Debug, Clone)]
pub struct AdvisorClient {
    client: Client,
    api_base: String,
}

impl AdvisorClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Pass non-success statuses back as errors, folding in the server's
    /// `{error}` body text when it parses.
    async fn check_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let detail = response
            .text()
            .await
            .ok()
            .and_then(|body| serde_json::from_str::<ErrorBody>(&body).ok())
            .map(|body| body.error)
            .unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            detail,
        })
    }

    fn file_part(file: FileUpload) -> Result<Part, ApiError> {
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.media_type)?;
        Ok(part)
    }
}

#[async_trait]
impl AdvisorApi for AdvisorClient {
    async fn send_chat(
        &self,
        message: &str,
        session_id: &str,
    ) -> Result<ChatResponse, ApiError> {
        let url = format!("{}/chat", self.api_base);
        info!("Sending chat turn for session {session_id}");

        let request = ChatRequest {
            message: message.to_string(),
            session_id: session_id.to_string(),
        };
        let response = self.client.post(&url).json(&request).send().await?;
        let response = Self::check_status(response).await.map_err(|e| {
            error!("Chat request failed: {e}");
            e
        })?;
        response
            .json::<ChatResponse>()
            .await
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))
    }

    async fn upload_transcript(
        &self,
        file: FileUpload,
        session_id: &str,
    ) -> Result<TranscriptResponse, ApiError> {
        let url = format!("{}/upload-transcript", self.api_base);
        info!(
            "Uploading transcript {:?} ({} bytes) for session {session_id}",
            file.file_name,
            file.bytes.len()
        );

        let form = Form::new()
            .part("file", Self::file_part(file)?)
            .text("session_id", session_id.to_string());
        let response = self.client.post(&url).multipart(form).send().await?;
        let response = Self::check_status(response).await.map_err(|e| {
            error!("Transcript upload failed: {e}");
            e
        })?;

        let body = response
            .json::<TranscriptBody>()
            .await
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))?;
        // The service reports parse failures as {error} even under 200.
        if let Some(message) = body.error {
            error!("Transcript upload rejected by service: {message}");
            return Err(ApiError::Service { message });
        }
        match body.response {
            Some(response) => Ok(TranscriptResponse {
                response,
                courses: body.courses,
            }),
            None => Err(ApiError::MalformedResponse(
                "missing response field".to_string(),
            )),
        }
    }

    async fn upload_file(&self, file: FileUpload) -> Result<UploadResponse, ApiError> {
        let url = format!("{}/upload", self.api_base);
        info!(
            "Uploading staged file {:?} ({} bytes)",
            file.file_name,
            file.bytes.len()
        );

        let form = Form::new().part("file", Self::file_part(file)?);
        let response = self.client.post(&url).multipart(form).send().await?;
        let response = Self::check_status(response).await.map_err(|e| {
            error!("Staged upload failed: {e}");
            e
        })?;
        response
            .json::<UploadResponse>()
            .await
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))
    }
}
