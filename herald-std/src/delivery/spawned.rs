use super::{
    invoke::{collect_failures, invoke, panic_message},
    traits::DeliveryStrategy,
};
use futures::future::join_all;
use herald_core::{Event, HandlerError, HandlerFailure, HandlerRef};
use std::{sync::Arc, time::Duration};

/// A parallel delivery strategy backed by Tokio tasks.
///
/// Every handler is spawned as its own task, so on a multi-thread runtime
/// handlers run in parallel. The dispatch waits on every join handle.
///
/// Must be used from within a Tokio runtime. If the dispatch future is
/// dropped early, the spawned handlers keep running to completion.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpawnedDelivery;

impl DeliveryStrategy for SpawnedDelivery {
    async fn deliver<E: Event>(
        &self,
        event: Arc<E>,
        handlers: Vec<HandlerRef<E>>,
        timeout: Option<Duration>,
    ) -> Vec<HandlerFailure> {
        let tasks = handlers.iter().cloned().map(|handler| {
            let event = Arc::clone(&event);
            tokio::spawn(async move { invoke(&handler, &*event, timeout).await })
        });

        let outcomes = join_all(tasks).await.into_iter().map(|joined| match joined {
            Ok(outcome) => outcome,
            Err(err) if err.is_cancelled() => Err(HandlerError::Cancelled),
            Err(err) => Err(HandlerError::Panic(panic_message(err.into_panic().as_ref()))),
        });
        collect_failures(&handlers, outcomes)
    }
}
