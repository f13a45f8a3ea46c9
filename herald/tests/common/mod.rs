#![allow(dead_code)]

use chrono::{DateTime, Utc};
use herald::{Event, Handler};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Test Event Types
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct TestEvent {
    pub name: String,
    pub payload: String,
    pub created_at: DateTime<Utc>,
}

impl TestEvent {
    pub fn new(name: &str, payload: &str) -> Self {
        Self {
            name: name.to_string(),
            payload: payload.to_string(),
            created_at: Utc::now(),
        }
    }
}

impl Event for TestEvent {
    type Payload = str;

    fn name(&self) -> &str {
        &self.name
    }

    fn payload(&self) -> &str {
        &self.payload
    }

    fn date_time(&self) -> DateTime<Utc> {
        self.created_at
    }
}

// ============================================================================
// Test Handlers
// ============================================================================

pub struct TestEventHandler {
    pub id: u32,
}

impl Handler<TestEvent> for TestEventHandler {
    async fn handle(&self, _event: &TestEvent) {}
}

/// Increments a shared counter after yielding once, so completion is only
/// observed if the dispatcher actually waits.
pub struct YieldingCounter {
    pub call_count: Arc<AtomicUsize>,
}

impl Handler<TestEvent> for YieldingCounter {
    async fn handle(&self, _event: &TestEvent) {
        tokio::task::yield_now().await;
        self.call_count.fetch_add(1, Ordering::SeqCst);
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
