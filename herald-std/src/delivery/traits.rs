use herald_core::{Event, HandlerFailure, HandlerRef};
use std::{future::Future, sync::Arc, time::Duration};

/// Strategy for delivering an event to a resolved set of handlers.
///
/// This abstraction allows different execution models (concurrent, spawned,
/// sequential) to be plugged into the dispatcher.
///
/// Implementations must run every handler in `handlers` exactly once and
/// resolve only after all of them have finished or failed.
pub trait DeliveryStrategy: Send + Sync + 'static {
    /// Deliver the event to the handlers.
    ///
    /// `timeout` bounds each handler invocation individually. The returned
    /// failures are in the order of `handlers`.
    fn deliver<E: Event>(
        &self,
        event: Arc<E>,
        handlers: Vec<HandlerRef<E>>,
        timeout: Option<Duration>,
    ) -> impl Future<Output = Vec<HandlerFailure>> + Send;
}
