//! advisor_core - Core types for the advisor chat engine
//!
//! This crate provides the foundational types used across the engine crates:
//! - `message` - conversation message types and the seeded greeting
//! - `session` - per-client session token generation
//! - `upload` - file upload payload and media-type validation
//! - `config` - service endpoint configuration

pub mod config;
pub mod message;
pub mod session;
pub mod upload;

// Re-export commonly used types
pub use config::Config;
pub use message::{Message, Role, WELCOME_MESSAGE};
pub use session::new_session_token;
pub use upload::{FileUpload, PDF_MEDIA_TYPE};
