//! advisor_state - Request lifecycle state machine
//!
//! This crate provides the FSM that gates the engine's request lifecycle:
//! at most one request is outstanding at a time, and completions always
//! return the machine to idle.

pub mod machine;

// Re-export commonly used types
pub use machine::{LifecycleEvent, LifecycleState, RequestKind, StateMachine, StateTransition};
