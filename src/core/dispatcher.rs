//! # Dispatcher - resolves and invokes the listeners of a fired event.
//!
//! ## Architecture
//! ```text
//! fire_concurrent(event)
//!     │
//!     ├─► registry.snapshot(name)          (read lock, released immediately)
//!     │
//!     ├──► task 1 ──► l1.handle(&event) ──► panic → ListenerFailure
//!     ├──► task 2 ──► l2.handle(&event)
//!     └──► task N ──► lN.handle(&event)
//!                 │
//!            join barrier (JoinSet drained)
//!                 ▼
//!     FailurePolicy ──► Ok(n) | Err(ListenersFailed)
//!
//! fire_sequential(event)
//!     ├─► registry.snapshot(name)
//!     └─► l1.handle → l2.handle → ... → lN.handle   (caller's task, registration order)
//! ```
//!
//! ## Rules
//! - **Snapshot**: the listeners invoked are exactly those registered when the call started
//! - **All or nothing lookup**: an unregistered name fails with `NoListeners` before invoking anything
//! - **Valid names only**: a blank name fails with `InvalidEvent`, as it does on registration
//! - **Join barrier**: `fire_concurrent` returns only after every spawned task has finished
//! - **Panic capture**: a panicking listener never stops the rest of the snapshot
//!
//! ## Panic handling
//! Each `handle` call is made inside the `catch_unwind` wrapper, so a listener that panics
//! before returning its future is caught the same way as one that panics while being polled.
//! `AssertUnwindSafe` is used, so a listener that panics while holding a lock on shared state
//! may leave it poisoned.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tokio::task::JoinSet;

use crate::core::config::BusConfig;
use crate::core::registry::Registry;
use crate::error::{BusError, ListenerFailure, panic_message};
use crate::events::{Event, validate_name};
use crate::listeners::ListenerRef;
use crate::policies::{DispatchMode, FailurePolicy};

/// Invokes registered listeners for fired events.
///
/// Holds a shared handle to the [`Registry`]; never mutates it.
pub struct Dispatcher<E: Event> {
    registry: Arc<Registry<E>>,
    cfg: BusConfig,
}

impl<E: Event> Dispatcher<E> {
    /// Creates a dispatcher reading from `registry`.
    pub fn new(registry: Arc<Registry<E>>, cfg: BusConfig) -> Self {
        Self { registry, cfg }
    }

    /// Dispatches with the configured [`DispatchMode`].
    pub async fn fire(&self, event: Arc<E>) -> Result<usize, BusError> {
        match self.cfg.mode {
            DispatchMode::Concurrent => self.fire_concurrent(event).await,
            DispatchMode::Sequential => self.fire_sequential(event.as_ref()).await,
        }
    }

    /// Spawns one task per listener and waits for all of them.
    ///
    /// Requires a tokio runtime. Returns the number of listeners invoked.
    pub async fn fire_concurrent(&self, event: Arc<E>) -> Result<usize, BusError> {
        let listeners = self.resolve(event.name())?;
        let total = listeners.len();
        tracing::trace!(event = event.name(), listeners = total, "fire concurrent");

        let names: Vec<String> = listeners.iter().map(|l| l.name().to_string()).collect();
        let mut set = JoinSet::new();
        for (index, listener) in listeners.into_iter().enumerate() {
            let ev = Arc::clone(&event);
            set.spawn(async move {
                let outcome = AssertUnwindSafe(async { listener.handle(ev.as_ref()).await })
                    .catch_unwind()
                    .await;
                (index, outcome.err().map(|panic| panic_message(&*panic)))
            });
        }

        let mut finished = vec![false; total];
        let mut failures = Vec::new();
        let mut aborted = None;
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((index, panic)) => {
                    finished[index] = true;
                    if let Some(message) = panic {
                        failures.push(ListenerFailure {
                            index,
                            listener: names[index].clone(),
                            message,
                        });
                    }
                }
                // The task does not say which listener it ran; unfinished slots take the blame.
                Err(join_err) if join_err.is_panic() => {
                    aborted = Some(panic_message(&*join_err.into_panic()));
                }
                Err(join_err) => aborted = Some(join_err.to_string()),
            }
        }
        if let Some(message) = aborted {
            for (index, _) in finished.iter().enumerate().filter(|(_, done)| !**done) {
                failures.push(ListenerFailure {
                    index,
                    listener: names[index].clone(),
                    message: message.clone(),
                });
            }
        }
        failures.sort_by_key(|f| f.index);

        self.settle(event.name(), total, failures)
    }

    /// Invokes listeners one at a time on the caller's task, in registration order.
    ///
    /// Returns the number of listeners invoked.
    pub async fn fire_sequential(&self, event: &E) -> Result<usize, BusError> {
        let listeners = self.resolve(event.name())?;
        let total = listeners.len();
        tracing::trace!(event = event.name(), listeners = total, "fire sequential");

        let mut failures = Vec::new();
        for (index, listener) in listeners.iter().enumerate() {
            let outcome = AssertUnwindSafe(async { listener.handle(event).await })
                .catch_unwind()
                .await;
            if let Err(panic) = outcome {
                failures.push(ListenerFailure {
                    index,
                    listener: listener.name().to_string(),
                    message: panic_message(&*panic),
                });
            }
        }

        self.settle(event.name(), total, failures)
    }

    /// Takes the listener snapshot.
    ///
    /// Fails with `InvalidEvent` for a blank name and `NoListeners` when nothing is registered.
    fn resolve(&self, name: &str) -> Result<Vec<ListenerRef<E>>, BusError> {
        validate_name(name)?;
        self.registry
            .snapshot(name)
            .ok_or_else(|| BusError::NoListeners {
                event: name.to_string(),
            })
    }

    /// Applies the failure policy to the outcome of one dispatch.
    fn settle(
        &self,
        name: &str,
        total: usize,
        failures: Vec<ListenerFailure>,
    ) -> Result<usize, BusError> {
        if failures.is_empty() {
            return Ok(total);
        }

        match self.cfg.failure {
            FailurePolicy::Report => Err(BusError::ListenersFailed {
                event: name.to_string(),
                failures,
            }),
            FailurePolicy::Isolate => {
                for f in &failures {
                    tracing::warn!(
                        event = name,
                        listener = %f.listener,
                        index = f.index,
                        error = %f.message,
                        "listener panicked"
                    );
                }
                Ok(total)
            }
        }
    }
}

impl<E: Event> std::fmt::Debug for Dispatcher<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher").field("cfg", &self.cfg).finish()
    }
}
