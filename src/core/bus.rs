//! # EventBus: owns the registry and dispatcher pair.
//!
//! [`EventBus`] is an explicit value: the caller constructs it, shares it
//! (`Arc<EventBus<E>>` or `&EventBus<E>`) and drops it. There is no hidden
//! process-wide instance; tests create isolated buses.
//!
//! ## Key responsibilities
//! - register listeners by event instance or by name
//! - fire events concurrently, sequentially, or with the configured default
//! - answer registry queries (names, counts, presence)
//! - validate type-erased inputs at the dynamic edge (`*_erased` methods)
//!
//! ## Example
//! ```rust
//! use eventvisor::{BusConfig, EventBus, ListenerFn, NamedEvent};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), eventvisor::BusError> {
//!     let bus: EventBus<NamedEvent<&'static str>> = EventBus::new(BusConfig::default());
//!
//!     bus.subscribe_name(
//!         "greet",
//!         ListenerFn::arc("printer", |ev: &NamedEvent<&'static str>| {
//!             println!("hello, {}", ev.payload());
//!             async {}
//!         }),
//!     )?;
//!
//!     assert_eq!(bus.fire_sequential(&NamedEvent::new("greet", "world")).await?, 1);
//!     assert_eq!(bus.fire(NamedEvent::new("greet", "again")).await?, 1);
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use crate::core::boundary::{Erased, check_event, check_listener};
use crate::core::builder::EventBusBuilder;
use crate::core::config::BusConfig;
use crate::core::dispatcher::Dispatcher;
use crate::core::registry::Registry;
use crate::error::BusError;
use crate::events::Event;
use crate::listeners::ListenerRef;

/// In-process publish/subscribe bus for events of type `E`.
pub struct EventBus<E: Event> {
    cfg: BusConfig,
    registry: Arc<Registry<E>>,
    dispatcher: Dispatcher<E>,
}

impl<E: Event> EventBus<E> {
    /// Creates an empty bus.
    pub fn new(cfg: BusConfig) -> Self {
        let registry = Arc::new(Registry::new());
        Self::from_registry(cfg, registry)
    }

    /// Returns a builder for a bus with pre-registered listeners.
    pub fn builder(cfg: BusConfig) -> EventBusBuilder<E> {
        EventBusBuilder::new(cfg)
    }

    pub(crate) fn from_registry(cfg: BusConfig, registry: Arc<Registry<E>>) -> Self {
        let dispatcher = Dispatcher::new(Arc::clone(&registry), cfg);
        Self {
            cfg,
            registry,
            dispatcher,
        }
    }

    /// Returns the configuration this bus was built with.
    pub fn config(&self) -> &BusConfig {
        &self.cfg
    }

    /// Returns the underlying registry.
    pub fn registry(&self) -> &Arc<Registry<E>> {
        &self.registry
    }

    // ---- registration ----

    /// Registers `listener` against the name of `event`.
    pub fn subscribe(&self, event: &E, listener: ListenerRef<E>) -> Result<(), BusError> {
        self.registry.register(event.name(), listener)
    }

    /// Registers `listener` against `name`.
    pub fn subscribe_name(
        &self,
        name: impl Into<String>,
        listener: ListenerRef<E>,
    ) -> Result<(), BusError> {
        self.registry.register(name, listener)
    }

    /// Registers a type-erased listener; it must hold a [`ListenerRef<E>`].
    pub fn subscribe_erased(
        &self,
        name: impl Into<String>,
        listener: Erased,
    ) -> Result<(), BusError> {
        let listener = check_listener::<E>(listener)?;
        self.registry.register(name, listener)
    }

    // ---- dispatch ----

    /// Dispatches with the configured [`DispatchMode`](crate::DispatchMode).
    pub async fn fire(&self, event: impl Into<Arc<E>>) -> Result<usize, BusError> {
        self.dispatcher.fire(event.into()).await
    }

    /// Fans out to one task per listener and waits for all of them.
    pub async fn fire_concurrent(&self, event: impl Into<Arc<E>>) -> Result<usize, BusError> {
        self.dispatcher.fire_concurrent(event.into()).await
    }

    /// Invokes listeners in registration order on the caller's task.
    pub async fn fire_sequential(&self, event: &E) -> Result<usize, BusError> {
        self.dispatcher.fire_sequential(event).await
    }

    /// Dispatches a type-erased event; it must hold an `E`.
    pub async fn fire_erased(&self, event: Erased) -> Result<usize, BusError> {
        let event = check_event::<E>(event)?;
        self.dispatcher.fire(Arc::new(event)).await
    }

    // ---- removal ----

    /// Removes every registered event.
    pub fn clear_all(&self) {
        self.registry.clear_all();
    }

    /// Removes the entry for the name of `event`.
    pub fn clear_event(&self, event: &E) -> Result<(), BusError> {
        self.registry.unregister(event.name()).map(|_| ())
    }

    /// Removes the entry for `name`.
    pub fn clear_name(&self, name: &str) -> Result<(), BusError> {
        self.registry.unregister(name).map(|_| ())
    }

    // ---- queries ----

    /// Returns all registered event names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.registry.names()
    }

    /// Returns true if listeners are registered for the name of `event`.
    pub fn contains(&self, event: &E) -> bool {
        self.registry.contains(event.name())
    }

    /// Returns true if listeners are registered for `name`.
    pub fn contains_name(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    /// Returns the number of distinct registered event names.
    pub fn count(&self) -> usize {
        self.registry.count()
    }

    /// Returns true if no event is registered.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Returns the number of listeners registered for the name of `event`.
    pub fn listener_count(&self, event: &E) -> Result<usize, BusError> {
        self.registry.listener_count(event.name())
    }

    /// Returns the number of listeners registered for `name`.
    pub fn listener_count_name(&self, name: &str) -> Result<usize, BusError> {
        self.registry.listener_count(name)
    }
}

impl<E: Event> Default for EventBus<E> {
    fn default() -> Self {
        Self::new(BusConfig::default())
    }
}

impl<E: Event> std::fmt::Debug for EventBus<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("cfg", &self.cfg)
            .field("registry", &self.registry)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::events::NamedEvent;
    use crate::listeners::{ListenerFn, ListenerRef};
    use crate::policies::DispatchMode;

    type Ev = NamedEvent<String>;

    fn journaling(
        tag: &'static str,
        journal: &Arc<Mutex<Vec<String>>>,
    ) -> ListenerRef<Ev> {
        let journal = Arc::clone(journal);
        ListenerFn::arc(tag, move |ev: &Ev| {
            journal.lock().unwrap().push(format!("{tag}:{}", ev.payload()));
            async {}
        })
    }

    fn ev(name: &'static str) -> Ev {
        NamedEvent::new(name, "ccinn".to_string())
    }

    #[tokio::test]
    async fn test_register_fire_clear_scenario() {
        let bus = EventBus::<Ev>::default();
        let journal = Arc::new(Mutex::new(Vec::new()));
        let event = ev("test_event");

        bus.subscribe(&event, journaling("A", &journal)).unwrap();
        bus.subscribe(&event, journaling("B", &journal)).unwrap();
        assert_eq!(bus.listener_count(&event).unwrap(), 2);

        assert_eq!(bus.fire_sequential(&event).await.unwrap(), 2);
        assert_eq!(*journal.lock().unwrap(), ["A:ccinn", "B:ccinn"]);

        bus.clear_all();
        assert_eq!(bus.count(), 0);

        let err = bus.fire_sequential(&event).await.unwrap_err();
        assert!(matches!(err, BusError::NoListeners { .. }));
    }

    #[tokio::test]
    async fn test_clear_event_keeps_others_dispatchable() {
        let bus = EventBus::<Ev>::default();
        let journal = Arc::new(Mutex::new(Vec::new()));
        for name in ["a", "b", "c"] {
            bus.subscribe_name(name, journaling(name, &journal)).unwrap();
        }

        bus.clear_event(&ev("b")).unwrap();
        assert_eq!(bus.count(), 2);
        assert!(!bus.contains(&ev("b")));
        assert_eq!(bus.names(), ["a", "c"]);

        assert_eq!(bus.fire_concurrent(ev("a")).await.unwrap(), 1);
        assert_eq!(bus.fire_concurrent(ev("c")).await.unwrap(), 1);
        assert!(bus.fire_concurrent(ev("b")).await.unwrap_err().is_unregistered());

        let err = bus.clear_event(&ev("b")).unwrap_err();
        assert!(matches!(err, BusError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_fire_without_listeners_fails() {
        let bus = EventBus::<Ev>::default();
        let err = bus.fire(ev("test_event")).await.unwrap_err();
        assert_eq!(err.as_label(), "bus_no_listeners");
        assert_eq!(err.event(), Some("test_event"));
    }

    #[tokio::test]
    async fn test_queries() {
        let bus = EventBus::<Ev>::default();
        assert!(bus.is_empty());
        assert!(bus.listener_count_name("x").is_err());

        let journal = Arc::new(Mutex::new(Vec::new()));
        let l = journaling("dup", &journal);
        bus.subscribe_name("x", Arc::clone(&l)).unwrap();
        bus.subscribe_name("x", l).unwrap();

        assert!(bus.contains_name("x"));
        assert_eq!(bus.listener_count_name("x").unwrap(), 2);
        assert_eq!(bus.fire(ev("x")).await.unwrap(), 2);
        assert_eq!(journal.lock().unwrap().len(), 2);

        bus.clear_name("x").unwrap();
        assert!(bus.is_empty());
    }

    #[tokio::test]
    async fn test_erased_edge() {
        let bus = EventBus::<Ev>::new(BusConfig::default().with_mode(DispatchMode::Sequential));
        let journal = Arc::new(Mutex::new(Vec::new()));

        let err = bus.subscribe_erased("e", Box::new(42_u8)).unwrap_err();
        assert!(matches!(err, BusError::InvalidListener { .. }));
        assert!(bus.is_empty());

        bus.subscribe_erased("e", Box::new(journaling("L", &journal))).unwrap();
        assert_eq!(bus.fire_erased(Box::new(ev("e"))).await.unwrap(), 1);

        let err = bus.fire_erased(Box::new("e")).await.unwrap_err();
        assert!(matches!(err, BusError::InvalidEvent { .. }));
        assert_eq!(journal.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_blank_name_is_invalid_event() {
        let bus = EventBus::<Ev>::default();
        let journal = Arc::new(Mutex::new(Vec::new()));
        let err = bus.subscribe(&ev(""), journaling("L", &journal)).unwrap_err();
        assert!(matches!(err, BusError::InvalidEvent { .. }));
        assert_eq!(bus.count(), 0);

        let err = bus.fire_sequential(&ev("")).await.unwrap_err();
        assert!(matches!(err, BusError::InvalidEvent { .. }), "got {err:?}");
        let err = bus.fire(ev(" ")).await.unwrap_err();
        assert!(matches!(err, BusError::InvalidEvent { .. }), "got {err:?}");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_shared_bus_across_tasks() {
        let bus = Arc::new(EventBus::<Ev>::default());
        let journal = Arc::new(Mutex::new(Vec::new()));

        let mut handles = Vec::new();
        for i in 0..8 {
            let bus = Arc::clone(&bus);
            let journal = Arc::clone(&journal);
            handles.push(tokio::spawn(async move {
                let name = if i % 2 == 0 { "even" } else { "odd" };
                bus.subscribe_name(name, journaling(name, &journal)).unwrap();
            }));
        }
        for h in handles {
            h.await.unwrap();
        }

        assert_eq!(bus.listener_count_name("even").unwrap(), 4);
        assert_eq!(bus.listener_count_name("odd").unwrap(), 4);
        assert_eq!(bus.fire_concurrent(ev("even")).await.unwrap(), 4);
        assert_eq!(journal.lock().unwrap().len(), 4);
    }
}
