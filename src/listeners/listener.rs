//! # Core listener trait
//!
//! `Listener` is the extension point for reacting to events. A listener is
//! registered against an event name and invoked once per registration every
//! time an event with that name is fired.
//!
//! ## Contract
//! - `handle` receives the event by reference; the bus never mutates it.
//! - Under concurrent dispatch each invocation runs on its own tokio task,
//!   so implementations must be `Send + Sync`.
//! - A panic inside `handle` is captured and reported by the dispatcher; it
//!   does not prevent the remaining listeners from running.

use std::sync::Arc;

use async_trait::async_trait;

use crate::events::Event;

/// Shared listener handle, as stored in the registry.
pub type ListenerRef<E> = Arc<dyn Listener<E>>;

/// Contract for event listeners.
#[async_trait]
pub trait Listener<E: Event>: Send + Sync + 'static {
    /// Handles a single event.
    async fn handle(&self, event: &E);

    /// Human-readable name (for logs and failure reports).
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
