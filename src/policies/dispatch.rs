//! # Dispatch modes.
//!
//! [`DispatchMode`] selects how [`EventBus::fire`](crate::EventBus::fire) invokes
//! the listeners of an event. Both modes are always available explicitly via
//! `fire_concurrent` / `fire_sequential`.
//!
//! ```text
//! DispatchMode::Concurrent  → one tokio task per listener, caller awaits all (join barrier)
//! DispatchMode::Sequential  → listeners run on the caller's task, in registration order
//! ```

/// How listeners of one event are invoked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DispatchMode {
    /// Fan out to one task per listener and wait for all of them (default).
    #[default]
    Concurrent,
    /// Invoke listeners one at a time, in registration order.
    Sequential,
}

impl DispatchMode {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            DispatchMode::Concurrent => "concurrent",
            DispatchMode::Sequential => "sequential",
        }
    }
}
