use std::sync::Arc;

use super::{bus::EventBus, config::BusConfig, registry::Registry};
use crate::{error::BusError, events::Event, listeners::ListenerRef};

/// Builder for constructing an [`EventBus`] with listeners registered up front.
pub struct EventBusBuilder<E: Event> {
    cfg: BusConfig,
    listeners: Vec<(String, ListenerRef<E>)>,
}

impl<E: Event> EventBusBuilder<E> {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: BusConfig) -> Self {
        Self {
            cfg,
            listeners: Vec::new(),
        }
    }

    /// Queues `listener` for registration against `name`.
    ///
    /// Listeners are registered in the order they are added.
    pub fn with_listener(mut self, name: impl Into<String>, listener: ListenerRef<E>) -> Self {
        self.listeners.push((name.into(), listener));
        self
    }

    /// Queues several listeners for the same `name`.
    pub fn with_listeners(
        mut self,
        name: impl Into<String>,
        listeners: impl IntoIterator<Item = ListenerRef<E>>,
    ) -> Self {
        let name = name.into();
        self.listeners
            .extend(listeners.into_iter().map(|l| (name.clone(), l)));
        self
    }

    /// Builds the bus and registers every queued listener.
    ///
    /// Fails with [`BusError::InvalidEvent`] on the first blank name; no bus is returned then.
    pub fn build(self) -> Result<EventBus<E>, BusError> {
        let registry = Arc::new(Registry::new());
        for (name, listener) in self.listeners {
            registry.register(name, listener)?;
        }
        Ok(EventBus::from_registry(self.cfg, registry))
    }
}

impl<E: Event> std::fmt::Debug for EventBusBuilder<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.listeners.iter().map(|(n, _)| n.as_str()).collect();
        f.debug_struct("EventBusBuilder")
            .field("cfg", &self.cfg)
            .field("listeners", &names)
            .finish()
    }
}
