//! Testing utilities for Herald.
//!
//! This module provides handlers that make it easy to observe what a
//! dispatcher delivered.
//!
//! # Features
//!
//! - [`RecordingHandler`]: Records every event it receives
//! - [`MockHandler`]: Records every event and checks call expectations
//! - [`CountingHandler`]: Counts invocations
//! - [`PanickingHandler`]: Always panics, for failure isolation tests
//! - [`SleepingHandler`]: Sleeps before completing, for barrier and timeout tests
//!
//! Every handler here shares its state between clones, so a test can keep one
//! clone for assertions and register another.

use herald_core::{Event, Handler};
use parking_lot::Mutex;
use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

// ============================================================================
// Recording Handler
// ============================================================================

/// A handler that records all events it receives.
///
/// Useful for verifying that events are being routed correctly.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingHandler::<MyEvent>::new();
/// dispatcher.register("test", &HandlerRef::new(recorder.clone()))?;
///
/// dispatcher.dispatch(event).await?;
///
/// assert_eq!(recorder.count(), 1);
/// assert_eq!(recorder.names(), vec!["test"]);
/// ```
pub struct RecordingHandler<E> {
    events: Arc<Mutex<Vec<E>>>,
}

impl<E: Clone> RecordingHandler<E> {
    /// Create a new recording handler.
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a clone of the recorded events.
    pub fn events(&self) -> Vec<E> {
        self.events.lock().clone()
    }

    /// Get the number of recorded events.
    pub fn count(&self) -> usize {
        self.events.lock().len()
    }

    /// Clear all recorded events.
    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl<E: Event + Clone> RecordingHandler<E> {
    /// Names of the recorded events, in the order they were received.
    pub fn names(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .map(|event| event.name().to_owned())
            .collect()
    }
}

impl<E: Clone> Default for RecordingHandler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for RecordingHandler<E> {
    fn clone(&self) -> Self {
        Self {
            events: self.events.clone(),
        }
    }
}

impl<E: Event + Clone> Handler<E> for RecordingHandler<E> {
    async fn handle(&self, event: &E) {
        self.events.lock().push(event.clone());
    }
}

// ============================================================================
// Mock Handler
// ============================================================================

/// A handler that records all events it receives and verifies expectations.
///
/// # Example
///
/// ```rust,ignore
/// let mock = MockHandler::<MyEvent>::new();
/// mock.expect_calls(1);
///
/// dispatcher.register("test", &HandlerRef::new(mock.clone()))?;
/// dispatcher.dispatch(event.clone()).await?;
///
/// mock.assert_expectations();
/// assert_eq!(mock.events(), vec![event]);
/// ```
pub struct MockHandler<E> {
    events: Arc<Mutex<Vec<E>>>,
    expected_calls: Arc<Mutex<Option<usize>>>,
}

impl<E: Clone> MockHandler<E> {
    /// Create a new mock with no expectations.
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            expected_calls: Arc::new(Mutex::new(None)),
        }
    }

    /// Expect the handler to be called exactly `calls` times.
    pub fn expect_calls(&self, calls: usize) {
        *self.expected_calls.lock() = Some(calls);
    }

    /// Get a clone of the recorded events.
    pub fn events(&self) -> Vec<E> {
        self.events.lock().clone()
    }

    /// Get the number of times the handler was called.
    pub fn call_count(&self) -> usize {
        self.events.lock().len()
    }

    /// Clear all recorded events.
    pub fn reset(&self) {
        self.events.lock().clear();
    }

    /// Panic unless the handler was called exactly `calls` times.
    #[track_caller]
    pub fn assert_number_of_calls(&self, calls: usize) {
        let actual = self.call_count();
        assert_eq!(
            actual, calls,
            "expected handler to be called {calls} time(s), but it was called {actual} time(s)"
        );
    }

    /// Panic unless every expectation set on this mock was met.
    #[track_caller]
    pub fn assert_expectations(&self) {
        if let Some(expected) = *self.expected_calls.lock() {
            self.assert_number_of_calls(expected);
        }
    }
}

impl<E: Clone + PartialEq + std::fmt::Debug> MockHandler<E> {
    /// Panic unless `event` is among the recorded events.
    #[track_caller]
    pub fn assert_called_with(&self, event: &E) {
        let events = self.events();
        assert!(
            events.contains(event),
            "expected handler to be called with {event:?}, recorded calls: {events:?}"
        );
    }
}

impl<E: Clone> Default for MockHandler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for MockHandler<E> {
    fn clone(&self) -> Self {
        Self {
            events: self.events.clone(),
            expected_calls: self.expected_calls.clone(),
        }
    }
}

impl<E: Event + Clone> Handler<E> for MockHandler<E> {
    async fn handle(&self, event: &E) {
        self.events.lock().push(event.clone());
    }
}

// ============================================================================
// Counting Handler
// ============================================================================

/// A handler that counts invocations.
///
/// # Example
///
/// ```rust,ignore
/// let counter = CountingHandler::new();
/// dispatcher.register("test", &HandlerRef::new(counter.clone()))?;
///
/// dispatcher.dispatch(event).await?;
///
/// assert_eq!(counter.count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct CountingHandler {
    count: Arc<AtomicUsize>,
}

impl CountingHandler {
    /// Create a new counting handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl<E: Event> Handler<E> for CountingHandler {
    async fn handle(&self, _event: &E) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

// ============================================================================
// Panicking Handler
// ============================================================================

/// A handler that panics with a fixed message on every call.
#[derive(Debug, Clone)]
pub struct PanickingHandler {
    message: &'static str,
}

impl PanickingHandler {
    /// Create a handler panicking with `message`.
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }

    /// The panic message.
    pub fn message(&self) -> &'static str {
        self.message
    }
}

impl<E: Event> Handler<E> for PanickingHandler {
    async fn handle(&self, _event: &E) {
        panic!("{}", self.message);
    }
}

// ============================================================================
// Sleeping Handler
// ============================================================================

/// A handler that sleeps for a fixed duration, then records its completion.
///
/// Requires a Tokio runtime with the time driver enabled.
#[derive(Clone)]
pub struct SleepingHandler {
    delay: Duration,
    completed: Arc<AtomicUsize>,
}

impl SleepingHandler {
    /// Create a handler that sleeps for `delay` on every call.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            completed: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Share the completion counter with another sleeping handler.
    pub fn sharing_counter(&self, delay: Duration) -> Self {
        Self {
            delay,
            completed: self.completed.clone(),
        }
    }

    /// Number of calls that ran to completion.
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }
}

impl<E: Event> Handler<E> for SleepingHandler {
    async fn handle(&self, _event: &E) {
        tokio::time::sleep(self.delay).await;
        self.completed.fetch_add(1, Ordering::SeqCst);
    }
}
