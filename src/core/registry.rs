//! # Listener registry - event name to ordered listener sequence.
//!
//! ## Architecture
//! ```text
//! register(name, l) ──► RwLock<HashMap<String, Vec<ListenerRef<E>>>>
//!                              │      (name → [l1, l2, ... ln])
//! snapshot(name)   ◄───────────┘      clone of the Vec under the read lock
//! ```
//!
//! ## Rules
//! - An entry is created with its first listener; sequences are never stored empty
//! - Registering against an existing name appends; duplicates are kept
//! - Sequences are never reordered, only appended to or removed wholesale
//! - One lock guards the whole map; it is never held while a listener runs

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::BusError;
use crate::events::{Event, validate_name};
use crate::listeners::ListenerRef;

type Entries<E> = HashMap<String, Vec<ListenerRef<E>>>;

/// Thread-safe mapping from event name to its listeners.
pub struct Registry<E: Event> {
    entries: RwLock<Entries<E>>,
}

impl<E: Event> Registry<E> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Appends `listener` to the sequence for `name`, creating the entry if absent.
    ///
    /// Fails with [`BusError::InvalidEvent`] if `name` is blank.
    pub fn register(
        &self,
        name: impl Into<String>,
        listener: ListenerRef<E>,
    ) -> Result<(), BusError> {
        let name = name.into();
        validate_name(&name)?;

        let total = {
            let mut entries = self.write();
            let seq = entries.entry(name.clone()).or_default();
            seq.push(listener);
            seq.len()
        };

        tracing::debug!(event = %name, listeners = total, "listener registered");
        Ok(())
    }

    /// Removes the entry for `name` with all its listeners.
    ///
    /// Returns the number of listeners dropped, or [`BusError::NotFound`].
    pub fn unregister(&self, name: &str) -> Result<usize, BusError> {
        let removed = self.write().remove(name);

        match removed {
            Some(seq) => {
                tracing::debug!(event = %name, listeners = seq.len(), "event cleared");
                Ok(seq.len())
            }
            None => Err(BusError::NotFound {
                event: name.to_string(),
            }),
        }
    }

    /// Removes every entry.
    pub fn clear_all(&self) {
        let dropped = {
            let mut entries = self.write();
            let n = entries.len();
            entries.clear();
            n
        };
        tracing::debug!(events = dropped, "all events cleared");
    }

    /// Returns true if an entry exists for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.read().contains_key(name)
    }

    /// Returns the registered event names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of distinct registered event names.
    pub fn count(&self) -> usize {
        self.read().len()
    }

    /// Returns true if no event is registered.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Returns the number of listeners registered for `name`.
    pub fn listener_count(&self, name: &str) -> Result<usize, BusError> {
        self.read()
            .get(name)
            .map(Vec::len)
            .ok_or_else(|| BusError::NotFound {
                event: name.to_string(),
            })
    }

    /// Copies the listener sequence for `name` under the read lock.
    ///
    /// The returned snapshot is unaffected by later registrations.
    pub(crate) fn snapshot(&self, name: &str) -> Option<Vec<ListenerRef<E>>> {
        self.read().get(name).cloned()
    }

    // Listener code never runs under the lock, so a poisoned map is still consistent.

    fn read(&self) -> RwLockReadGuard<'_, Entries<E>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Entries<E>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E: Event> Default for Registry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Event> std::fmt::Debug for Registry<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("events", &self.names())
            .finish()
    }
}
