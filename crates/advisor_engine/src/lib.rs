//! advisor_engine - Conversation and request-lifecycle engine
//!
//! Owns the append-only conversation log, the per-client session token,
//! the busy/error flags, and the two asynchronous workflows that mutate
//! the log: chat turns and transcript submissions. Presentation observes
//! this state and feeds user intents in; it never mutates engine state.

pub mod conversation;
pub mod engine;
pub mod error;
pub mod events;
pub mod flags;

// Re-export commonly used types
pub use conversation::ConversationLog;
pub use engine::{
    AdvisorEngine, CHAT_APOLOGY_TEXT, CHAT_ERROR_TEXT, PDF_ONLY_TEXT, TRANSCRIPT_ERROR_TEXT,
};
pub use error::EngineError;
pub use events::EngineEvent;
pub use flags::LifecycleFlags;
