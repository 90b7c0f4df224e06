//! Lifecycle states - Defines the possible states of the request lifecycle

use serde::{Deserialize, Serialize};

/// Which kind of request is in flight.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    /// A plain chat turn against `/chat`.
    Chat,
    /// A dropped transcript against `/upload-transcript`.
    TranscriptUpload,
    /// A staged file against the generic `/upload` path.
    StagedUpload,
}

/// The lifecycle state of the engine's one request slot.
///
/// The engine enforces single-flight: new submissions are rejected while
/// the machine is `Pending`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleState {
    /// No request outstanding; submissions are accepted.
    #[default]
    Idle,

    /// One request is outstanding.
    Pending { kind: RequestKind },
}

impl LifecycleState {
    /// Check whether a request is currently outstanding.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    /// Check whether a new submission would be accepted.
    pub fn can_submit(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Get a human-readable description of the current state.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Idle => "Ready for input",
            Self::Pending {
                kind: RequestKind::Chat,
            } => "Waiting for advisor response",
            Self::Pending { .. } => "Uploading file",
        }
    }
}
