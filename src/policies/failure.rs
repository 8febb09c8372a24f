//! # Listener failure policies.
//!
//! A listener that panics never aborts a dispatch: the rest of the snapshot
//! still runs. [`FailurePolicy`] decides what the caller sees afterwards.
//!
//! ```text
//! FailurePolicy::Report   → Err(BusError::ListenersFailed { failures, .. })
//! FailurePolicy::Isolate  → tracing::warn! per failure, Ok(count)
//! ```

/// What a dispatch returns when listeners panicked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Aggregate every failure into [`BusError::ListenersFailed`](crate::BusError::ListenersFailed) (default).
    #[default]
    Report,
    /// Log each failure and report the dispatch as successful.
    Isolate,
}
