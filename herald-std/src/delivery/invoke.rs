//! Isolated invocation of a single handler.

use futures::FutureExt;
use herald_core::{Event, HandlerError, HandlerFailure, HandlerRef};
use std::{any::Any, panic::AssertUnwindSafe, time::Duration};

/// Run `handler` on `event`, turning a panic or an overrun into an error.
///
/// A timeout requires a Tokio runtime with the time driver enabled.
pub(crate) async fn invoke<E: Event>(
    handler: &HandlerRef<E>,
    event: &E,
    timeout: Option<Duration>,
) -> Result<(), HandlerError> {
    // The call itself happens inside the guarded future so a handler that
    // panics while building its future is caught too.
    let call = AssertUnwindSafe(async { handler.handle(event).await }).catch_unwind();

    let outcome = match timeout {
        Some(limit) => tokio::time::timeout(limit, call)
            .await
            .map_err(|_| HandlerError::Timeout(limit))?,
        None => call.await,
    };

    outcome.map_err(|payload| HandlerError::Panic(panic_message(payload.as_ref())))
}

/// Extract a readable message from a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_owned()
    }
}

/// Pair each failed outcome with the handler that produced it.
pub(crate) fn collect_failures<E: Event>(
    handlers: &[HandlerRef<E>],
    outcomes: impl IntoIterator<Item = Result<(), HandlerError>>,
) -> Vec<HandlerFailure> {
    handlers
        .iter()
        .zip(outcomes)
        .filter_map(|(handler, outcome)| {
            outcome.err().map(|error| HandlerFailure {
                handler: handler.id(),
                error,
            })
        })
        .collect()
}
