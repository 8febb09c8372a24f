//! # Tracing listener for debugging and demos.
//!
//! [`LogListener`] records every event it receives through `tracing::info!`.
//! Register it against any event name to observe traffic on that name.
//!
//! ## Output (with `tracing_subscriber::fmt`)
//! ```text
//! INFO eventvisor::listeners::log: event received event="user_created" payload=NamedEvent { .. }
//! ```

use std::fmt;

use async_trait::async_trait;

use crate::events::Event;
use crate::listeners::Listener;

/// Logs received events at `INFO` level.
///
/// Enabled via the `logging` feature.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogListener;

#[async_trait]
impl<E> Listener<E> for LogListener
where
    E: Event + fmt::Debug,
{
    async fn handle(&self, event: &E) {
        tracing::info!(event = event.name(), payload = ?event, "event received");
    }

    fn name(&self) -> &str {
        "log"
    }
}
