//! # Function-backed listener (`ListenerFn`)
//!
//! [`ListenerFn`] wraps a closure `F: Fn(&E) -> Fut`, producing a fresh future
//! per invocation. The future is `'static` and cannot borrow the event: copy
//! what it needs out of `&E` before building it, or keep shared state in an `Arc`.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU64, Ordering};
//! use eventvisor::{Listener, ListenerFn, ListenerRef, NamedEvent};
//!
//! let total = Arc::new(AtomicU64::new(0));
//! let sink = Arc::clone(&total);
//!
//! let l: ListenerRef<NamedEvent<u64>> = ListenerFn::arc("sum", move |ev: &NamedEvent<u64>| {
//!     let amount = *ev.payload();
//!     let sink = Arc::clone(&sink);
//!     async move {
//!         sink.fetch_add(amount, Ordering::Relaxed);
//!     }
//! });
//!
//! assert_eq!(l.name(), "sum");
//! ```

use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::events::Event;
use crate::listeners::Listener;

/// Function-backed listener implementation.
#[derive(Debug)]
pub struct ListenerFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> ListenerFn<F> {
    /// Creates a new function-backed listener.
    ///
    /// Prefer [`ListenerFn::arc`] when you immediately need a [`ListenerRef`](crate::ListenerRef).
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self { name: name.into(), f }
    }

    /// Creates the listener and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

#[async_trait]
impl<E, F, Fut> Listener<E> for ListenerFn<F>
where
    E: Event,
    F: Fn(&E) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    async fn handle(&self, event: &E) {
        (self.f)(event).await;
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::events::NamedEvent;
    use crate::listeners::ListenerRef;

    #[tokio::test]
    async fn test_closure_receives_event() {
        let seen = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&seen);

        let l: ListenerRef<NamedEvent<usize>> =
            ListenerFn::arc("adder", move |ev: &NamedEvent<usize>| {
                let n = *ev.payload();
                let sink = Arc::clone(&sink);
                async move {
                    sink.fetch_add(n, Ordering::SeqCst);
                }
            });

        l.handle(&NamedEvent::new("add", 5)).await;
        l.handle(&NamedEvent::new("add", 2)).await;

        assert_eq!(seen.load(Ordering::SeqCst), 7);
        assert_eq!(l.name(), "adder");
    }
}
