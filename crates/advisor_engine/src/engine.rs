//! AdvisorEngine - the facade presentation talks to
//!
//! Both controllers (chat turn, transcript submission) live here: they
//! share the single-flight gate, the lifecycle flags, and the append
//! contract on the conversation log.

use std::sync::Arc;

use log::{info, warn};
use tokio::sync::{broadcast, RwLock};

use advisor_client::{AdvisorApi, AdvisorClient, ApiError};
use advisor_core::{new_session_token, Config, FileUpload, Message};
use advisor_state::{LifecycleEvent, LifecycleState, RequestKind, StateMachine};

use crate::conversation::ConversationLog;
use crate::error::EngineError;
use crate::events::EngineEvent;
use crate::flags::LifecycleFlags;

/// Shown via `last_error` when a chat turn fails.
pub const CHAT_ERROR_TEXT: &str =
    "Sorry, there was an error getting the response. Please try again.";

/// Appended as the assistant entry when a chat turn fails, so every user
/// turn gets exactly one assistant-role reply.
pub const CHAT_APOLOGY_TEXT: &str =
    "I apologize, but I encountered an error. Please try asking your question again.";

/// Shown via `last_error` when a non-PDF file is submitted.
pub const PDF_ONLY_TEXT: &str = "Please upload a PDF file";

/// Fallback `last_error` for upload failures without a service-provided reason.
pub const TRANSCRIPT_ERROR_TEXT: &str = "Error processing transcript. Please try again.";

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Everything the engine mutates, behind one lock. The write guard is
/// never held across a network await.
struct EngineState {
    log: ConversationLog,
    flags: LifecycleFlags,
    machine: StateMachine,
    pending_upload: Option<FileUpload>,
}

/// The conversation and request-lifecycle engine. Clone-cheap; clones
/// share the same state.
#[derive(Clone)]
pub struct AdvisorEngine {
    state: Arc<RwLock<EngineState>>,
    api: Arc<dyn AdvisorApi>,
    session_id: Arc<str>,
    events: broadcast::Sender<EngineEvent>,
}

impl AdvisorEngine {
    /// Create an engine over an arbitrary service boundary.
    pub fn new(api: Arc<dyn AdvisorApi>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let session_id = new_session_token();
        info!("Starting advisor engine with session {session_id}");
        Self {
            state: Arc::new(RwLock::new(EngineState {
                log: ConversationLog::new(events.clone()),
                flags: LifecycleFlags::default(),
                machine: StateMachine::new(),
                pending_upload: None,
            })),
            api,
            session_id: session_id.into(),
            events,
        }
    }

    /// Create an engine backed by the HTTP client from `config`.
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Ok(Self::new(Arc::new(AdvisorClient::new(config)?)))
    }

    /// One chat turn. Empty (after trimming) input is a no-op; a turn
    /// submitted while another request is pending is rejected.
    pub async fn submit_message(&self, text: &str) -> Result<(), EngineError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(());
        }

        {
            let mut state = self.state.write().await;
            self.begin_request(&mut state, RequestKind::Chat)?;
            // Optimistic append: the user's message lands before any I/O.
            state.log.append(Message::user(text));
        }

        let result = self.api.send_chat(text, &self.session_id).await;

        let mut state = self.state.write().await;
        match result {
            Ok(reply) => {
                state.machine.handle_event(LifecycleEvent::ResponseReceived);
                state.log.append(Message::assistant(reply.response));
            }
            Err(err) => {
                warn!("Chat turn failed: {err}");
                state.machine.handle_event(LifecycleEvent::RequestFailed {
                    error: err.to_string(),
                });
                state.flags.last_error = Some(CHAT_ERROR_TEXT.to_string());
                state.log.append(Message::assistant(CHAT_APOLOGY_TEXT));
            }
        }
        self.finish_request(&mut state);
        Ok(())
    }

    /// Immediate-submit path for a dropped (or picker-chosen) file.
    pub async fn submit_dropped_file(&self, file: FileUpload) -> Result<(), EngineError> {
        {
            let mut state = self.state.write().await;
            if state.machine.state().is_pending() {
                state.machine.handle_event(LifecycleEvent::SubmissionRejected);
                return Err(EngineError::Busy);
            }
            if !file.is_pdf() {
                warn!(
                    "Rejected upload {:?}: declared type {:?}",
                    file.file_name, file.media_type
                );
                state.flags.last_error = Some(PDF_ONLY_TEXT.to_string());
                let _ = self.events.send(EngineEvent::FlagsChanged);
                return Err(EngineError::InvalidFileType);
            }
            self.begin_request(&mut state, RequestKind::TranscriptUpload)?;
            // The drop path supersedes any staged selection.
            state.pending_upload = None;
        }

        let result = self.api.upload_transcript(file, &self.session_id).await;

        let mut state = self.state.write().await;
        self.fold_upload_result(&mut state, result.map(|reply| reply.response));
        Ok(())
    }

    /// Stage a file for later confirmation. A new selection replaces any
    /// previous one; no validation and no I/O happen here.
    pub async fn select_file(&self, file: FileUpload) {
        let mut state = self.state.write().await;
        state.pending_upload = Some(file);
    }

    /// Drop the staged selection without submitting it.
    pub async fn discard_selection(&self) {
        let mut state = self.state.write().await;
        state.pending_upload = None;
    }

    /// Submit the staged selection through the generic upload path. The
    /// selection is consumed whether or not the submission goes through.
    pub async fn confirm_upload(&self) -> Result<(), EngineError> {
        let file = {
            let mut state = self.state.write().await;
            if state.machine.state().is_pending() {
                state.machine.handle_event(LifecycleEvent::SubmissionRejected);
                return Err(EngineError::Busy);
            }
            let Some(file) = state.pending_upload.take() else {
                return Err(EngineError::NoPendingSelection);
            };
            if !file.is_pdf() {
                warn!(
                    "Rejected staged upload {:?}: declared type {:?}",
                    file.file_name, file.media_type
                );
                state.flags.last_error = Some(PDF_ONLY_TEXT.to_string());
                let _ = self.events.send(EngineEvent::FlagsChanged);
                return Err(EngineError::InvalidFileType);
            }
            self.begin_request(&mut state, RequestKind::StagedUpload)?;
            file
        };

        let result = self.api.upload_file(file).await;

        let mut state = self.state.write().await;
        self.fold_upload_result(&mut state, result.map(|reply| reply.response));
        Ok(())
    }

    /// The full transcript, in insertion order.
    pub async fn snapshot(&self) -> Vec<Message> {
        self.state.read().await.log.snapshot()
    }

    /// Current busy/error flags.
    pub async fn flags(&self) -> LifecycleFlags {
        self.state.read().await.flags.clone()
    }

    /// Current lifecycle state of the request slot.
    pub async fn lifecycle_state(&self) -> LifecycleState {
        *self.state.read().await.machine.state()
    }

    /// Human-readable status line for the presentation adapter.
    pub async fn status_description(&self) -> &'static str {
        self.state.read().await.machine.state().description()
    }

    /// Name of the staged file, if one is selected.
    pub async fn pending_file_name(&self) -> Option<String> {
        self.state
            .read()
            .await
            .pending_upload
            .as_ref()
            .map(|file| file.file_name.clone())
    }

    /// The opaque per-client session token.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Subscribe to engine change notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.events.subscribe()
    }

    /// Gate and start one request cycle: single-flight, busy up, stale
    /// error cleared.
    fn begin_request(
        &self,
        state: &mut EngineState,
        kind: RequestKind,
    ) -> Result<(), EngineError> {
        if state.machine.state().is_pending() {
            state.machine.handle_event(LifecycleEvent::SubmissionRejected);
            return Err(EngineError::Busy);
        }
        state
            .machine
            .handle_event(LifecycleEvent::SubmissionStarted { kind });
        state.flags.busy = true;
        state.flags.last_error = None;
        let _ = self.events.send(EngineEvent::FlagsChanged);
        Ok(())
    }

    /// Close out the cycle; runs on every completion path so `busy` can
    /// never stay stuck.
    fn finish_request(&self, state: &mut EngineState) {
        state.flags.busy = false;
        let _ = self.events.send(EngineEvent::FlagsChanged);
    }

    /// Fold an upload completion into the log and flags. Upload failures
    /// set `last_error` only; unlike the chat path they append no
    /// assistant entry.
    fn fold_upload_result(&self, state: &mut EngineState, result: Result<String, ApiError>) {
        match result {
            Ok(text) => {
                state.machine.handle_event(LifecycleEvent::ResponseReceived);
                state.log.append(Message::assistant(text));
            }
            Err(err) => {
                warn!("Upload failed: {err}");
                let detail = err
                    .service_detail()
                    .map(str::to_string)
                    .unwrap_or_else(|| TRANSCRIPT_ERROR_TEXT.to_string());
                state.machine.handle_event(LifecycleEvent::RequestFailed {
                    error: err.to_string(),
                });
                state.flags.last_error = Some(detail);
            }
        }
        self.finish_request(state);
    }
}
