//! Bus core: registry, dispatch and the owning bus value.
//!
//! The public entry point is [`EventBus`]; [`Registry`] and [`Dispatcher`]
//! are exposed for callers that wire the two halves themselves.
//!
//! Internal modules:
//! - [`registry`]: name → ordered listener sequence, guarded by one lock;
//! - [`dispatcher`]: snapshot + concurrent/sequential invocation, failure policy;
//! - [`bus`]: owns one registry/dispatcher pair;
//! - [`builder`]: pre-registers listeners before the bus is shared;
//! - [`boundary`]: runtime checks for type-erased inputs;
//! - [`config`]: [`BusConfig`].

mod boundary;
mod builder;
mod bus;
mod config;
mod dispatcher;
mod registry;

pub use boundary::Erased;
pub use builder::EventBusBuilder;
pub use bus::EventBus;
pub use config::BusConfig;
pub use dispatcher::Dispatcher;
pub use registry::Registry;
