//! # Runtime capability checks at the type-erased edge.
//!
//! Inside Rust the `Event` / `Listener` capabilities are trait bounds. These
//! helpers cover the one place they cannot be: values arriving as
//! `Box<dyn Any>` (plugin hosts, script bindings, config-driven wiring).
//!
//! ```text
//! Box<dyn Any> ──► check_event::<E>()    ──► E            | InvalidEvent
//! Box<dyn Any> ──► check_listener::<E>() ──► ListenerRef<E> | InvalidListener
//! ```

use std::any::{Any, type_name};

use crate::error::BusError;
use crate::events::{Event, validate_name};
use crate::listeners::ListenerRef;

/// Type-erased value accepted by the `*_erased` bus methods.
pub type Erased = Box<dyn Any + Send + Sync>;

/// Recovers an `E` from a type-erased value and checks its name.
pub(crate) fn check_event<E: Event>(value: Erased) -> Result<E, BusError> {
    let event = value
        .downcast::<E>()
        .map_err(|_| BusError::InvalidEvent {
            reason: format!("expected {}", type_name::<E>()),
        })?;
    validate_name(event.name())?;
    Ok(*event)
}

/// Recovers a `ListenerRef<E>` from a type-erased value.
pub(crate) fn check_listener<E: Event>(value: Erased) -> Result<ListenerRef<E>, BusError> {
    value
        .downcast::<ListenerRef<E>>()
        .map(|l| *l)
        .map_err(|_| BusError::InvalidListener {
            expected: type_name::<ListenerRef<E>>(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::NamedEvent;
    use crate::listeners::ListenerFn;

    type Ev = NamedEvent<i64>;

    #[test]
    fn test_check_event() {
        let ok: Erased = Box::new(NamedEvent::new("n", 3_i64));
        assert_eq!(check_event::<Ev>(ok).unwrap().payload(), &3);

        let wrong: Erased = Box::new("not an event");
        assert!(matches!(
            check_event::<Ev>(wrong),
            Err(BusError::InvalidEvent { .. })
        ));

        let blank: Erased = Box::new(NamedEvent::new("", 0_i64));
        assert!(matches!(
            check_event::<Ev>(blank),
            Err(BusError::InvalidEvent { .. })
        ));
    }

    #[test]
    fn test_check_listener() {
        let l: ListenerRef<Ev> = ListenerFn::arc("ok", |_ev: &Ev| async {});
        let ok: Erased = Box::new(l);
        assert_eq!(check_listener::<Ev>(ok).unwrap().name(), "ok");

        // A concrete listener that was not erased as `ListenerRef<E>` is rejected.
        let concrete: Erased = Box::new(ListenerFn::new("raw", |_ev: &Ev| async {}));
        match check_listener::<Ev>(concrete) {
            Err(err) => assert_eq!(err.as_label(), "bus_invalid_listener"),
            Ok(_) => panic!("concrete listener must not pass as ListenerRef"),
        }
    }
}
