//! Lifecycle flags - transient request state observed by presentation

/// Derived, transient state: never persisted, reset by each request cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LifecycleFlags {
    /// True exactly while one request is outstanding.
    pub busy: bool,
    /// Most recent user-facing failure text, if any.
    pub last_error: Option<String>,
}
