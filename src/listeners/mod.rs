//! # Listeners invoked by the dispatcher.
//!
//! This module provides the [`Listener`] trait and ready-made implementations.
//!
//! ## Contents
//! - [`Listener`] async "handle an event" capability
//! - [`ListenerRef`] shared handle stored in the registry (`Arc<dyn Listener<E>>`)
//! - [`ListenerFn`] closure-backed listener
//! - `LogListener` tracing-backed listener (feature `logging`)
//!
//! ## Implementing custom listeners
//! ```no_run
//! use async_trait::async_trait;
//! use eventvisor::{Listener, NamedEvent};
//!
//! struct Audit;
//!
//! #[async_trait]
//! impl Listener<NamedEvent<String>> for Audit {
//!     async fn handle(&self, event: &NamedEvent<String>) {
//!         // write audit record...
//!         let _ = event.payload();
//!     }
//!
//!     fn name(&self) -> &str {
//!         "audit"
//!     }
//! }
//! ```

mod listener;
mod listener_fn;
#[cfg(feature = "logging")]
mod log;

pub use listener::{Listener, ListenerRef};
pub use listener_fn::ListenerFn;
#[cfg(feature = "logging")]
pub use log::LogListener;
