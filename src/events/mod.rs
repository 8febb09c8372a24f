//! Event capability and a ready-made payload carrier.
//!
//! ## Contents
//! - [`Event`] the "has a name" capability every dispatched value implements
//! - [`NamedEvent`] generic name + payload pair for callers without their own event type
//!
//! Names are validated once at the bus boundary (see [`validate_name`]).

mod event;

pub use event::{Event, NamedEvent};
pub(crate) use event::validate_name;
