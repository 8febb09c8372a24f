//! Error types used by the event bus.
//!
//! All fallible operations return [`BusError`]. Each variant provides a stable
//! label ([`BusError::as_label`]) for logs/metrics and a detailed message
//! ([`BusError::as_message`]).
//!
//! Listener panics captured during a dispatch are reported as
//! [`ListenerFailure`] entries inside [`BusError::ListenersFailed`].

use std::any::Any;
use std::fmt;

use thiserror::Error;

/// A single listener that panicked while handling an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListenerFailure {
    /// Position of the listener in the dispatched snapshot (registration order).
    pub index: usize,
    /// Listener name as reported by [`Listener::name`](crate::Listener::name).
    pub listener: String,
    /// Panic payload rendered as text.
    pub message: String,
}

impl fmt::Display for ListenerFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}: {}", self.index, self.listener, self.message)
    }
}

/// # Errors produced by the event bus.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum BusError {
    /// The supplied value does not expose a usable event name.
    #[error("invalid event: {reason}")]
    InvalidEvent {
        /// Why the value was rejected.
        reason: String,
    },

    /// The supplied value does not expose a handle operation.
    #[error("invalid listener: expected {expected}")]
    InvalidListener {
        /// Type the value was expected to be.
        expected: &'static str,
    },

    /// The operation addressed an event name with no registry entry.
    #[error("event {event:?} is not registered")]
    NotFound {
        /// Event name that was looked up.
        event: String,
    },

    /// Dispatch was attempted against an event name with no registry entry.
    #[error("no listeners for event {event:?}")]
    NoListeners {
        /// Event name that was fired.
        event: String,
    },

    /// One or more listeners panicked; every other listener in the snapshot still ran.
    #[error("{} listener(s) failed for event {event:?}", .failures.len())]
    ListenersFailed {
        /// Event name that was fired.
        event: String,
        /// Failed listeners, ordered by registration index.
        failures: Vec<ListenerFailure>,
    },
}

impl BusError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use eventvisor::BusError;
    ///
    /// let err = BusError::NoListeners { event: "user_created".into() };
    /// assert_eq!(err.as_label(), "bus_no_listeners");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            BusError::InvalidEvent { .. } => "bus_invalid_event",
            BusError::InvalidListener { .. } => "bus_invalid_listener",
            BusError::NotFound { .. } => "bus_not_found",
            BusError::NoListeners { .. } => "bus_no_listeners",
            BusError::ListenersFailed { .. } => "bus_listeners_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            BusError::InvalidEvent { reason } => format!("invalid event: {reason}"),
            BusError::InvalidListener { expected } => {
                format!("invalid listener: expected {expected}")
            }
            BusError::NotFound { event } => format!("not found: {event}"),
            BusError::NoListeners { event } => format!("no listeners: {event}"),
            BusError::ListenersFailed { event, failures } => {
                let list: Vec<String> = failures.iter().map(ToString::to_string).collect();
                format!("listeners failed for {event}: [{}]", list.join(", "))
            }
        }
    }

    /// Returns the event name this error refers to, if any.
    pub fn event(&self) -> Option<&str> {
        match self {
            BusError::NotFound { event }
            | BusError::NoListeners { event }
            | BusError::ListenersFailed { event, .. } => Some(event.as_str()),
            BusError::InvalidEvent { .. } | BusError::InvalidListener { .. } => None,
        }
    }

    /// Indicates that the addressed event had no registry entry.
    ///
    /// True for both [`BusError::NotFound`] and [`BusError::NoListeners`], which
    /// describe the same condition raised from different paths.
    pub fn is_unregistered(&self) -> bool {
        matches!(
            self,
            BusError::NotFound { .. } | BusError::NoListeners { .. }
        )
    }
}

/// Renders a panic payload as text.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
