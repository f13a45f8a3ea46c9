use super::{
    invoke::{collect_failures, invoke},
    traits::DeliveryStrategy,
};
use herald_core::{Event, HandlerFailure, HandlerRef};
use std::{sync::Arc, time::Duration};

/// A sequential delivery strategy.
///
/// Executes handlers one by one in registration order. A failing handler does
/// not stop the handlers after it.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialDelivery;

impl DeliveryStrategy for SequentialDelivery {
    async fn deliver<E: Event>(
        &self,
        event: Arc<E>,
        handlers: Vec<HandlerRef<E>>,
        timeout: Option<Duration>,
    ) -> Vec<HandlerFailure> {
        let mut outcomes = Vec::with_capacity(handlers.len());
        for handler in &handlers {
            outcomes.push(invoke(handler, &*event, timeout).await);
        }
        collect_failures(&handlers, outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_core::{Handler, HandlerError, NamedEvent};
    use parking_lot::Mutex;

    type TestEvent = NamedEvent<()>;

    struct OrderRecordingHandler {
        id: usize,
        order: Arc<Mutex<Vec<usize>>>,
    }

    impl Handler<TestEvent> for OrderRecordingHandler {
        async fn handle(&self, _event: &TestEvent) {
            // Yield so an interleaving strategy would have a chance to reorder.
            tokio::task::yield_now().await;
            self.order.lock().push(self.id);
        }
    }

    struct Stall;

    impl Handler<TestEvent> for Stall {
        async fn handle(&self, _event: &TestEvent) {
            std::future::pending::<()>().await;
        }
    }

    #[tokio::test]
    async fn test_registration_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let handlers: Vec<HandlerRef<TestEvent>> = (1..=4)
            .map(|id| {
                HandlerRef::new(OrderRecordingHandler {
                    id,
                    order: order.clone(),
                })
            })
            .collect();

        let failures = SequentialDelivery
            .deliver(Arc::new(NamedEvent::new("test", ())), handlers, None)
            .await;

        assert!(failures.is_empty());
        assert_eq!(*order.lock(), vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_timeout_moves_on_to_next_handler() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let stall = HandlerRef::<TestEvent>::new(Stall);
        let handlers = vec![
            stall.clone(),
            HandlerRef::new(OrderRecordingHandler {
                id: 1,
                order: order.clone(),
            }),
        ];
        let limit = Duration::from_millis(10);

        let failures = SequentialDelivery
            .deliver(Arc::new(NamedEvent::new("test", ())), handlers, Some(limit))
            .await;

        assert_eq!(*order.lock(), vec![1]);
        assert_eq!(
            failures,
            vec![HandlerFailure {
                handler: stall.id(),
                error: HandlerError::Timeout(limit),
            }]
        );
    }
}
