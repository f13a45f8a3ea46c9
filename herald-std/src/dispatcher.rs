//! The standard event dispatcher.
//!
//! [`EventDispatcher`] owns a [`Registry`] behind a reader/writer lock and fans
//! events out through a pluggable [`DeliveryStrategy`].
//!
//! # Snapshots
//!
//! A dispatch copies the handler list of the event's name under the read lock
//! and releases the lock before any handler runs. As a consequence:
//!
//! - handlers may register, unregister or dispatch from inside `handle`;
//! - a handler registered during an in-flight dispatch is not invoked by it;
//! - a handler unregistered during an in-flight dispatch is still invoked by it.

use crate::{
    config::DispatcherConfig,
    delivery::{ConcurrentDelivery, DeliveryStrategy},
    registry::Registry,
};
use herald_core::{DispatchError, DispatchReport, Dispatcher, Event, HandlerRef};
use parking_lot::RwLock;
use std::sync::Arc;

/// A thread-safe registry of handlers that dispatches events to them.
///
/// # Example
/// ```ignore
/// let dispatcher = EventDispatcher::<NamedEvent<u64>>::new();
/// let audit = HandlerRef::new(AuditHandler::default());
///
/// dispatcher.register("user.created", &audit)?;
/// let report = dispatcher.dispatch(NamedEvent::new("user.created", user_id)).await?;
/// assert_eq!(report.invoked, 1);
/// ```
pub struct EventDispatcher<E: Event, D = ConcurrentDelivery> {
    registry: RwLock<Registry<E>>,
    delivery: D,
    config: DispatcherConfig,
}

impl<E: Event> EventDispatcher<E> {
    /// Create an empty dispatcher with the default configuration and
    /// concurrent delivery.
    pub fn new() -> Self {
        Self::with_config(DispatcherConfig::default())
    }

    /// Create an empty dispatcher with the given configuration.
    pub fn with_config(config: DispatcherConfig) -> Self {
        Self {
            registry: RwLock::new(Registry::new()),
            delivery: ConcurrentDelivery,
            config,
        }
    }
}

impl<E: Event> Default for EventDispatcher<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Event, D: DeliveryStrategy> EventDispatcher<E, D> {
    /// Replace the delivery strategy, keeping registrations and configuration.
    pub fn with_delivery<S: DeliveryStrategy>(self, delivery: S) -> EventDispatcher<E, S> {
        EventDispatcher {
            registry: self.registry,
            delivery,
            config: self.config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// The active delivery strategy.
    pub fn delivery(&self) -> &D {
        &self.delivery
    }

    /// Total number of registrations across all event names.
    pub fn handler_count(&self) -> usize {
        self.registry.read().total()
    }

    /// Event names that currently have at least one handler, sorted.
    pub fn event_names(&self) -> Vec<String> {
        self.registry.read().event_names()
    }

    /// Check if no handler is registered under any name.
    pub fn is_empty(&self) -> bool {
        self.registry.read().is_empty()
    }
}

impl<E: Event, D: DeliveryStrategy> Dispatcher<E> for EventDispatcher<E, D> {
    fn register(&self, event_name: &str, handler: &HandlerRef<E>) -> Result<(), DispatchError> {
        let result = self.registry.write().register(event_name, handler);

        #[cfg(feature = "tracing")]
        {
            match &result {
                Ok(()) => {
                    tracing::debug!(event = %event_name, handler = %handler.id(), "handler registered")
                }
                Err(err) => tracing::debug!(
                    event = %event_name,
                    handler = %handler.id(),
                    %err,
                    "registration rejected"
                ),
            }
        }

        result
    }

    fn unregister(&self, event_name: &str, handler: &HandlerRef<E>) -> Result<(), DispatchError> {
        let removed = self.registry.write().unregister(event_name, handler);

        #[cfg(feature = "tracing")]
        {
            if removed {
                tracing::debug!(event = %event_name, handler = %handler.id(), "handler unregistered");
            }
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = removed;
        }

        Ok(())
    }

    fn has(&self, event_name: &str, handler: &HandlerRef<E>) -> bool {
        self.registry.read().contains(event_name, handler)
    }

    fn len(&self, event_name: &str) -> usize {
        self.registry.read().len(event_name)
    }

    fn clear(&self) {
        self.registry.write().clear();

        #[cfg(feature = "tracing")]
        {
            tracing::debug!("registry cleared");
        }
    }

    async fn dispatch(&self, event: E) -> Result<DispatchReport, DispatchError> {
        let event_name = event.name().to_owned();
        // The guard is a temporary: it is released before any handler runs.
        let handlers = self.registry.read().snapshot(&event_name);
        if handlers.is_empty() {
            return Ok(DispatchReport::empty(event_name));
        }
        let invoked = handlers.len();

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(event = %event_name, handlers = invoked, "dispatching event");
        }

        let failures = self
            .delivery
            .deliver(Arc::new(event), handlers, self.config.handler_timeout())
            .await;

        #[cfg(feature = "tracing")]
        {
            for failure in &failures {
                tracing::warn!(
                    event = %event_name,
                    handler = %failure.handler,
                    error = %failure.error,
                    "handler failed"
                );
            }
        }

        if self.config.fails_on_handler_error() && !failures.is_empty() {
            return Err(DispatchError::HandlerFailed {
                event_name,
                failures,
            });
        }

        Ok(DispatchReport {
            event_name,
            invoked,
            failures,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::SequentialDelivery;
    use herald_core::{Handler, NamedEvent};
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        time::Duration,
    };

    type TestEvent = NamedEvent<&'static str>;

    #[derive(Default)]
    struct Counter {
        calls: AtomicUsize,
    }

    impl Handler<TestEvent> for Counter {
        async fn handle(&self, _event: &TestEvent) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// Registers `late` under the dispatched name while the dispatch is in flight.
    struct LateRegistrar {
        dispatcher: Arc<EventDispatcher<TestEvent>>,
        late: HandlerRef<TestEvent>,
    }

    impl Handler<TestEvent> for LateRegistrar {
        async fn handle(&self, event: &TestEvent) {
            self.dispatcher.register(event.name(), &self.late).unwrap();
        }
    }

    /// Unregisters `victim` from the dispatched name, then dispatches `inner`.
    struct Unregistrar {
        dispatcher: Arc<EventDispatcher<TestEvent>>,
        victim: HandlerRef<TestEvent>,
        inner: &'static str,
    }

    impl Handler<TestEvent> for Unregistrar {
        async fn handle(&self, event: &TestEvent) {
            self.dispatcher.unregister(event.name(), &self.victim).unwrap();
            let nested: std::pin::Pin<
                Box<dyn std::future::Future<Output = Result<DispatchReport, DispatchError>> + Send + '_>,
            > = Box::pin(self.dispatcher.dispatch(NamedEvent::new(self.inner, "nested")));
            nested.await.unwrap();
        }
    }

    struct Stall;

    impl Handler<TestEvent> for Stall {
        async fn handle(&self, _event: &TestEvent) {
            std::future::pending::<()>().await;
        }
    }

    #[tokio::test]
    async fn test_dispatch_without_handlers_is_noop() {
        let dispatcher = EventDispatcher::<TestEvent>::new();

        let report = dispatcher.dispatch(NamedEvent::new("test", "test")).await.unwrap();

        assert_eq!(report, DispatchReport::empty("test"));
    }

    #[tokio::test]
    async fn test_dispatch_routes_by_name() {
        let dispatcher = EventDispatcher::<TestEvent>::new();
        let matching = Arc::new(Counter::default());
        let other = Arc::new(Counter::default());
        dispatcher
            .register("test", &HandlerRef::from(matching.clone()))
            .unwrap();
        dispatcher
            .register("test-2", &HandlerRef::from(other.clone()))
            .unwrap();

        let report = dispatcher.dispatch(NamedEvent::new("test", "test")).await.unwrap();

        assert_eq!(report.invoked, 1);
        assert_eq!(matching.calls.load(Ordering::SeqCst), 1);
        assert_eq!(other.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_registration_during_dispatch_waits_for_next_one() {
        let dispatcher = Arc::new(EventDispatcher::<TestEvent>::new());
        let late_counter = Arc::new(Counter::default());
        let late = HandlerRef::from(late_counter.clone());
        let registrar = HandlerRef::new(LateRegistrar {
            dispatcher: dispatcher.clone(),
            late: late.clone(),
        });
        dispatcher.register("test", &registrar).unwrap();

        let report = dispatcher.dispatch(NamedEvent::new("test", "test")).await.unwrap();

        assert_eq!(report.invoked, 1);
        assert_eq!(late_counter.calls.load(Ordering::SeqCst), 0);
        assert!(dispatcher.has("test", &late));

        dispatcher.unregister("test", &registrar).unwrap();
        dispatcher.dispatch(NamedEvent::new("test", "test")).await.unwrap();
        assert_eq!(late_counter.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unregistration_during_dispatch_and_nested_dispatch() {
        let dispatcher = Arc::new(EventDispatcher::<TestEvent>::new());
        let victim_counter = Arc::new(Counter::default());
        let inner_counter = Arc::new(Counter::default());
        let victim = HandlerRef::from(victim_counter.clone());
        let unregistrar = HandlerRef::new(Unregistrar {
            dispatcher: dispatcher.clone(),
            victim: victim.clone(),
            inner: "inner",
        });
        dispatcher.register("outer", &unregistrar).unwrap();
        dispatcher.register("outer", &victim).unwrap();
        dispatcher
            .register("inner", &HandlerRef::from(inner_counter.clone()))
            .unwrap();

        let report = dispatcher.dispatch(NamedEvent::new("outer", "test")).await.unwrap();

        assert_eq!(report.invoked, 2);
        assert!(report.is_clean());
        assert_eq!(victim_counter.calls.load(Ordering::SeqCst), 1);
        assert_eq!(inner_counter.calls.load(Ordering::SeqCst), 1);
        assert!(!dispatcher.has("outer", &victim));
        assert_eq!(dispatcher.len("outer"), 1);
    }

    #[tokio::test]
    async fn test_fail_on_handler_error() {
        let limit = Duration::from_millis(10);
        let dispatcher = EventDispatcher::<TestEvent>::with_config(
            DispatcherConfig::new()
                .with_handler_timeout(limit)
                .fail_on_handler_error(true),
        );
        let stall = HandlerRef::<TestEvent>::new(Stall);
        dispatcher.register("test", &stall).unwrap();

        let err = dispatcher
            .dispatch(NamedEvent::new("test", "test"))
            .await
            .unwrap_err();

        match err {
            DispatchError::HandlerFailed {
                event_name,
                failures,
            } => {
                assert_eq!(event_name, "test");
                assert_eq!(failures.len(), 1);
                assert_eq!(failures[0].handler, stall.id());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_with_delivery_keeps_registrations() {
        let dispatcher = EventDispatcher::<TestEvent>::new();
        let counter = Arc::new(Counter::default());
        dispatcher
            .register("test", &HandlerRef::from(counter.clone()))
            .unwrap();

        let dispatcher = dispatcher.with_delivery(SequentialDelivery);
        dispatcher.dispatch(NamedEvent::new("test", "test")).await.unwrap();

        assert_eq!(dispatcher.handler_count(), 1);
        assert_eq!(counter.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_introspection() {
        let dispatcher = EventDispatcher::<TestEvent>::new();
        assert!(dispatcher.is_empty());

        let counter = HandlerRef::new(Counter::default());
        dispatcher.register("b", &counter).unwrap();
        dispatcher.register("a", &counter).unwrap();

        assert_eq!(dispatcher.handler_count(), 2);
        assert_eq!(dispatcher.event_names(), vec!["a", "b"]);

        dispatcher.clear();
        assert!(dispatcher.is_empty());
    }
}
