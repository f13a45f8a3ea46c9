use super::{
    invoke::{collect_failures, invoke},
    traits::DeliveryStrategy,
};
use futures::future::join_all;
use herald_core::{Event, HandlerFailure, HandlerRef};
use std::{sync::Arc, time::Duration};

/// A concurrent delivery strategy.
///
/// Creates one future per handler and polls them all together inside the
/// dispatching task; the join over them is the completion barrier. Works on
/// any executor as long as no timeout is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConcurrentDelivery;

impl DeliveryStrategy for ConcurrentDelivery {
    async fn deliver<E: Event>(
        &self,
        event: Arc<E>,
        handlers: Vec<HandlerRef<E>>,
        timeout: Option<Duration>,
    ) -> Vec<HandlerFailure> {
        let outcomes = join_all(
            handlers
                .iter()
                .map(|handler| invoke(handler, &*event, timeout)),
        )
        .await;
        collect_failures(&handlers, outcomes)
    }
}
