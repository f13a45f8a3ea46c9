//! Registry of handlers keyed by event name.
//!
//! The registry is plain data: it does no locking of its own. The
//! [`EventDispatcher`](crate::EventDispatcher) wraps it in a lock and takes
//! snapshots of it for delivery.

use herald_core::{DispatchError, Event, HandlerRef};
use std::collections::HashMap;

/// A mapping from event name to the handlers registered under it.
///
/// Each name holds its handlers in registration order, and never holds the
/// same handler twice. Names whose last handler is removed are pruned, so a
/// name is present iff it has at least one handler.
pub struct Registry<E: Event> {
    handlers: HashMap<String, Vec<HandlerRef<E>>>,
}

impl<E: Event> Registry<E> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Append `handler` to the handlers of `event_name`.
    pub fn register(
        &mut self,
        event_name: &str,
        handler: &HandlerRef<E>,
    ) -> Result<(), DispatchError> {
        if self.contains(event_name, handler) {
            return Err(DispatchError::DuplicateHandler {
                event_name: event_name.to_owned(),
            });
        }
        self.handlers
            .entry(event_name.to_owned())
            .or_default()
            .push(handler.clone());
        Ok(())
    }

    /// Remove `handler` from `event_name`.
    ///
    /// Returns `true` if an entry was removed.
    pub fn unregister(&mut self, event_name: &str, handler: &HandlerRef<E>) -> bool {
        let Some(entries) = self.handlers.get_mut(event_name) else {
            return false;
        };
        let Some(position) = entries.iter().position(|entry| entry.ptr_eq(handler)) else {
            return false;
        };
        // `remove` rather than `swap_remove`: delivery order is registration order.
        entries.remove(position);
        if entries.is_empty() {
            self.handlers.remove(event_name);
        }
        true
    }

    /// Returns `true` if `handler` is registered under `event_name`.
    pub fn contains(&self, event_name: &str, handler: &HandlerRef<E>) -> bool {
        self.get(event_name)
            .iter()
            .any(|entry| entry.ptr_eq(handler))
    }

    /// The handlers registered under `event_name`, in registration order.
    pub fn get(&self, event_name: &str) -> &[HandlerRef<E>] {
        self.handlers
            .get(event_name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Copy the handlers registered under `event_name`.
    ///
    /// The copy shares the handlers, not the list: later registrations do not
    /// affect it.
    pub fn snapshot(&self, event_name: &str) -> Vec<HandlerRef<E>> {
        self.get(event_name).to_vec()
    }

    /// Number of handlers registered under `event_name`.
    pub fn len(&self, event_name: &str) -> usize {
        self.get(event_name).len()
    }

    /// Total number of registrations across all names.
    pub fn total(&self) -> usize {
        self.handlers.values().map(Vec::len).sum()
    }

    /// Check if the registry holds no handlers.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Names that currently have at least one handler, sorted.
    pub fn event_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.handlers.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Remove every registration.
    pub fn clear(&mut self) {
        self.handlers.clear();
    }
}

impl<E: Event> Default for Registry<E> {
    fn default() -> Self {
        Self::new()
    }
}
