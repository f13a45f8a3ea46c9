//! Logging wrapper for event observation.

use herald_core::{Event, Handler};

/// A handler wrapper that logs every event before delegating.
///
/// With the `tracing` feature enabled, the inner invocation runs inside an
/// `event_handle` span carrying the wrapper's name and the event name. Without
/// it, the wrapper is a transparent pass-through.
pub struct LoggingHandler<H> {
    inner: H,
    name: &'static str,
}

impl<H> LoggingHandler<H> {
    /// Wrap `inner`, logging under `name`.
    pub const fn new(inner: H, name: &'static str) -> Self {
        Self { inner, name }
    }

    /// The wrapped handler.
    pub fn inner(&self) -> &H {
        &self.inner
    }

    /// The name used in log records.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

#[cfg(feature = "tracing")]
use tracing::Instrument;

impl<E, H> Handler<E> for LoggingHandler<H>
where
    E: Event,
    H: Handler<E>,
{
    #[cfg(feature = "tracing")]
    async fn handle(&self, event: &E) {
        let span = tracing::info_span!(
            "event_handle",
            handler = %self.name,
            event = %event.name()
        );

        async move {
            tracing::info!(created_at = %event.date_time(), "handling event");
            self.inner.handle(event).await;
        }
        .instrument(span)
        .await
    }

    #[cfg(not(feature = "tracing"))]
    async fn handle(&self, event: &E) {
        self.inner.handle(event).await
    }
}
