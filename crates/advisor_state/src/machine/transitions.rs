//! State transitions - FSM transition logic
//!
//! Implements the state machine that handles event-driven state transitions.

use super::events::LifecycleEvent;
use super::states::LifecycleState;

/// Represents a state transition result.
#[derive(Debug, Clone)]
pub struct StateTransition {
    /// The state before the transition.
    pub from: LifecycleState,
    /// The state after the transition.
    pub to: LifecycleState,
    /// The event that triggered the transition.
    pub event: LifecycleEvent,
    /// Whether the state actually changed.
    pub changed: bool,
    /// When the event was handled (RFC 3339).
    pub at: String,
}

/// State machine for the engine's request lifecycle.
#[derive(Debug, Clone)]
pub struct StateMachine {
    /// Current state.
    current_state: LifecycleState,
    /// Transition history (limited).
    history: Vec<StateTransition>,
    /// Max history entries to keep.
    max_history: usize,
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl StateMachine {
    /// Create a new state machine in Idle state.
    pub fn new() -> Self {
        Self {
            current_state: LifecycleState::Idle,
            history: Vec::new(),
            max_history: 50,
        }
    }

    /// Get the current state.
    pub fn state(&self) -> &LifecycleState {
        &self.current_state
    }

    /// Get the transition history.
    pub fn history(&self) -> &[StateTransition] {
        &self.history
    }

    /// Handle an event and transition to a new state.
    pub fn handle_event(&mut self, event: LifecycleEvent) -> StateTransition {
        let old_state = self.current_state;
        let new_state = Self::compute_next_state(&old_state, &event);
        let changed = old_state != new_state;

        self.current_state = new_state;

        let transition = StateTransition {
            from: old_state,
            to: new_state,
            event,
            changed,
            at: chrono::Utc::now().to_rfc3339(),
        };

        self.history.push(transition.clone());
        if self.history.len() > self.max_history {
            self.history.remove(0);
        }

        transition
    }

    /// Compute the next state given current state and event.
    fn compute_next_state(state: &LifecycleState, event: &LifecycleEvent) -> LifecycleState {
        use LifecycleEvent::*;
        use LifecycleState::*;

        match (state, event) {
            (Idle, SubmissionStarted { kind }) => Pending { kind: *kind },

            (Pending { .. }, ResponseReceived) => Idle,
            (Pending { .. }, RequestFailed { .. }) => Idle,

            // Rejections and invalid pairings leave the state unchanged.
            _ => *state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::states::RequestKind;

    #[test]
    fn test_basic_flow() {
        let mut sm = StateMachine::new();
        assert_eq!(sm.state(), &LifecycleState::Idle);

        let t1 = sm.handle_event(LifecycleEvent::SubmissionStarted {
            kind: RequestKind::Chat,
        });
        assert!(t1.changed);
        assert_eq!(
            sm.state(),
            &LifecycleState::Pending {
                kind: RequestKind::Chat
            }
        );

        let t2 = sm.handle_event(LifecycleEvent::ResponseReceived);
        assert!(t2.changed);
        assert_eq!(sm.state(), &LifecycleState::Idle);
    }

    #[test]
    fn test_failure_returns_to_idle() {
        let mut sm = StateMachine::new();
        sm.handle_event(LifecycleEvent::SubmissionStarted {
            kind: RequestKind::TranscriptUpload,
        });

        let t = sm.handle_event(LifecycleEvent::RequestFailed {
            error: "server returned 500".to_string(),
        });
        assert!(t.changed);
        assert_eq!(sm.state(), &LifecycleState::Idle);
    }

    #[test]
    fn test_invalid_pairings_do_not_change_state() {
        let mut sm = StateMachine::new();

        // Completion while idle has nothing to complete.
        let t = sm.handle_event(LifecycleEvent::ResponseReceived);
        assert!(!t.changed);
        assert_eq!(sm.state(), &LifecycleState::Idle);

        // A second submission while pending is recorded but ignored.
        sm.handle_event(LifecycleEvent::SubmissionStarted {
            kind: RequestKind::Chat,
        });
        let t = sm.handle_event(LifecycleEvent::SubmissionStarted {
            kind: RequestKind::StagedUpload,
        });
        assert!(!t.changed);
        assert_eq!(
            sm.state(),
            &LifecycleState::Pending {
                kind: RequestKind::Chat
            }
        );

        let t = sm.handle_event(LifecycleEvent::SubmissionRejected);
        assert!(!t.changed);
        assert!(sm.state().is_pending());
    }

    #[test]
    fn test_history_tracking() {
        let mut sm = StateMachine::new();
        sm.handle_event(LifecycleEvent::SubmissionStarted {
            kind: RequestKind::Chat,
        });
        sm.handle_event(LifecycleEvent::ResponseReceived);

        assert_eq!(sm.history().len(), 2);
        assert!(sm.history()[0].changed);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut sm = StateMachine::new();
        for _ in 0..60 {
            sm.handle_event(LifecycleEvent::SubmissionStarted {
                kind: RequestKind::Chat,
            });
            sm.handle_event(LifecycleEvent::ResponseReceived);
        }
        assert_eq!(sm.history().len(), 50);
    }
}
