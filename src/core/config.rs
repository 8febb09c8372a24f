//! # Bus configuration.
//!
//! Provides [`BusConfig`], the settings an [`EventBus`](crate::EventBus) is built with.
//!
//! Config is used in two places:
//! 1. **Bus creation**: `EventBus::new(config)` / `EventBus::builder(config)`
//! 2. **Dispatch**: `EventBus::fire` reads `mode`; every dispatch reads `failure`

use crate::policies::{DispatchMode, FailurePolicy};

/// Configuration for an event bus.
///
/// ## Field semantics
/// - `mode`: dispatch strategy used by `fire()` (explicit `fire_*` calls ignore it)
/// - `failure`: how captured listener panics are surfaced
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BusConfig {
    /// Default dispatch strategy.
    pub mode: DispatchMode,

    /// Policy applied when listeners panic during a dispatch.
    pub failure: FailurePolicy,
}

impl BusConfig {
    /// Returns a copy with the given dispatch mode.
    #[must_use]
    pub fn with_mode(mut self, mode: DispatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns a copy with the given failure policy.
    #[must_use]
    pub fn with_failure(mut self, failure: FailurePolicy) -> Self {
        self.failure = failure;
        self
    }
}
