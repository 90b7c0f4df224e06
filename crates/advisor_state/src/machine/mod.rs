//! State machine module
//!
//! Contains the FSM implementation for the request lifecycle.

mod events;
mod states;
mod transitions;

pub use events::LifecycleEvent;
pub use states::{LifecycleState, RequestKind};
pub use transitions::{StateMachine, StateTransition};
