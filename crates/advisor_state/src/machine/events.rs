//! Lifecycle events - Defines events that trigger state transitions

use serde::{Deserialize, Serialize};

use super::states::RequestKind;

/// Defines the events that can trigger state transitions in the FSM.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleEvent {
    /// A submission passed the gate and its request was issued.
    SubmissionStarted { kind: RequestKind },

    /// The outstanding request completed with a usable response.
    ResponseReceived,

    /// The outstanding request failed (transport, status, or service error).
    RequestFailed { error: String },

    /// A submission arrived while a request was outstanding and was turned
    /// away. Recorded for the history only; never changes the state.
    SubmissionRejected,
}

impl LifecycleEvent {
    /// Check if this event completes an outstanding request.
    pub fn is_completion(&self) -> bool {
        matches!(self, Self::ResponseReceived | Self::RequestFailed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_detection() {
        assert!(LifecycleEvent::ResponseReceived.is_completion());
        assert!(LifecycleEvent::RequestFailed {
            error: "timeout".to_string()
        }
        .is_completion());
        assert!(!LifecycleEvent::SubmissionStarted {
            kind: RequestKind::Chat
        }
        .is_completion());
        assert!(!LifecycleEvent::SubmissionRejected.is_completion());
    }
}
