//! Dispatch and failure policies.
//!
//! This module groups the knobs that control **how** listeners are invoked
//! and **what happens** when one of them panics.
//!
//! ## Contents
//! - [`DispatchMode`]  concurrent fan-out with join, or strict sequential
//! - [`FailurePolicy`] report captured panics to the caller, or log and continue
//!
//! ## Quick wiring
//! ```text
//! BusConfig { mode: DispatchMode, failure: FailurePolicy }
//!      └─► Dispatcher uses:
//!           - mode to pick fire_concurrent / fire_sequential in fire()
//!           - failure to turn captured panics into Err or a warn! log
//! ```
//!
//! ## Defaults
//! - `DispatchMode::Concurrent`
//! - `FailurePolicy::Report`

mod dispatch;
mod failure;

pub use dispatch::DispatchMode;
pub use failure::FailurePolicy;
