//! # eventvisor
//!
//! **Eventvisor** is an in-process publish/subscribe event bus for Rust.
//!
//! Producers fire named events; listeners registered against that name are
//! invoked with the event. Dispatch is either a concurrent fan-out with a
//! join barrier, or strictly sequential in registration order.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   subscribe(name, listener)                 fire*(event)
//!            │                                     │
//!            ▼                                     ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  EventBus<E> (caller-owned, no global instance)                   │
//! │  - Registry   name → [l1, l2, ... ln]   (one RwLock)              │
//! │  - Dispatcher snapshot → invoke → apply FailurePolicy             │
//! └──────────────────────────────────┬────────────────────────────────┘
//!                                    ▼
//!                      ┌───────────────────────────┐
//!                      │  snapshot (read lock)     │
//!                      └─────┬───────────────┬─────┘
//!                 Concurrent ▼               ▼ Sequential
//!            ┌──────────────────────┐   ┌──────────────────────────┐
//!            │ JoinSet: 1 task per  │   │ caller's task:           │
//!            │ listener, await all  │   │ l1 → l2 → ... → ln       │
//!            └──────────┬───────────┘   └────────────┬─────────────┘
//!                       └───────────┬────────────────┘
//!                                   ▼
//!                    panics captured per listener
//!                    Report → Err(ListenersFailed) | Isolate → warn!, Ok(n)
//! ```
//!
//! ## Features
//! | Area              | Description                                                   | Key types / traits                          |
//! |-------------------|---------------------------------------------------------------|---------------------------------------------|
//! | **Events**        | Any value with a stable name.                                 | [`Event`], [`NamedEvent`]                   |
//! | **Listeners**     | Async handlers, as trait impls or closures.                   | [`Listener`], [`ListenerFn`], [`ListenerRef`] |
//! | **Bus**           | Registration, dispatch, queries.                              | [`EventBus`], [`EventBusBuilder`]           |
//! | **Policies**      | Default dispatch mode and listener failure handling.          | [`DispatchMode`], [`FailurePolicy`]         |
//! | **Errors**        | Typed errors for every fallible operation.                    | [`BusError`], [`ListenerFailure`]           |
//! | **Configuration** | Centralize bus settings.                                      | [`BusConfig`]                               |
//!
//! ## Optional features
//! - `logging`: exports a built-in `LogListener` that records events via `tracing`.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use eventvisor::{BusConfig, BusError, EventBus, ListenerFn, NamedEvent};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), BusError> {
//!     let bus: EventBus<NamedEvent<u64>> = EventBus::new(BusConfig::default());
//!     let hits = Arc::new(AtomicUsize::new(0));
//!
//!     let counter = Arc::clone(&hits);
//!     bus.subscribe_name(
//!         "user_created",
//!         ListenerFn::arc("counter", move |_ev: &NamedEvent<u64>| {
//!             counter.fetch_add(1, Ordering::SeqCst);
//!             async {}
//!         }),
//!     )?;
//!
//!     bus.fire_concurrent(NamedEvent::new("user_created", 42_u64)).await?;
//!     bus.fire_sequential(&NamedEvent::new("user_created", 43_u64)).await?;
//!     assert_eq!(hits.load(Ordering::SeqCst), 2);
//!
//!     bus.clear_all();
//!     let err = bus.fire(NamedEvent::new("user_created", 44_u64)).await.unwrap_err();
//!     assert!(matches!(err, BusError::NoListeners { .. }));
//!     Ok(())
//! }
//! ```
mod core;
mod error;
mod events;
mod listeners;
mod policies;

// ---- Public re-exports ----

pub use self::core::{BusConfig, Dispatcher, Erased, EventBus, EventBusBuilder, Registry};
pub use error::{BusError, ListenerFailure};
pub use events::{Event, NamedEvent};
pub use listeners::{Listener, ListenerFn, ListenerRef};
pub use policies::{DispatchMode, FailurePolicy};

// Optional: expose a tracing-backed listener (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use listeners::LogListener;
