//! Engine events - notifications for presentation observers

/// Emitted after every engine state change so observers can re-render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// A message was appended to the conversation log.
    MessageAppended,
    /// The busy flag or last error changed.
    FlagsChanged,
}
