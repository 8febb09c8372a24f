//! # Events dispatched through the bus.
//!
//! An [`Event`] is any value exposing a stable string name. The name selects
//! which listeners are invoked; the value itself is passed to them unchanged.
//!
//! ## Example
//! ```rust
//! use eventvisor::{Event, NamedEvent};
//!
//! struct UserCreated {
//!     id: u64,
//! }
//!
//! impl Event for UserCreated {
//!     fn name(&self) -> &str {
//!         "user_created"
//!     }
//! }
//!
//! let ev = UserCreated { id: 7 };
//! assert_eq!(ev.name(), "user_created");
//! assert_eq!(ev.id, 7);
//!
//! let ev = NamedEvent::new("order_paid", 1250_u64);
//! assert_eq!(ev.name(), "order_paid");
//! assert_eq!(*ev.payload(), 1250);
//! ```

use std::borrow::Cow;

use crate::error::BusError;

/// Value that can be dispatched through the bus.
///
/// The bus never mutates events; listeners receive `&Self`.
pub trait Event: Send + Sync + 'static {
    /// Returns the stable name listeners are registered against.
    fn name(&self) -> &str;
}

/// Generic event: a name plus an arbitrary payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedEvent<T> {
    name: Cow<'static, str>,
    payload: T,
}

impl<T> NamedEvent<T> {
    /// Creates a new event with the given name and payload.
    pub fn new(name: impl Into<Cow<'static, str>>, payload: T) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }

    /// Returns a reference to the payload.
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Consumes the event and returns the payload.
    pub fn into_payload(self) -> T {
        self.payload
    }
}

impl<T: Send + Sync + 'static> Event for NamedEvent<T> {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Rejects names that cannot key a registry entry.
pub(crate) fn validate_name(name: &str) -> Result<(), BusError> {
    if name.trim().is_empty() {
        return Err(BusError::InvalidEvent {
            reason: "event name must not be empty".to_string(),
        });
    }
    Ok(())
}
