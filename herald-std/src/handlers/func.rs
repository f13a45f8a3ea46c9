//! Closure-backed handlers.

use herald_core::{Event, Handler};

/// A handler that runs a synchronous closure for every event.
///
/// Created with [`handler_fn`].
#[derive(Clone)]
pub struct FnHandler<F> {
    func: F,
}

/// Turn a closure into a handler.
///
/// # Example
///
/// ```rust,ignore
/// let greet = HandlerRef::new(handler_fn(|event: &NamedEvent<String>| {
///     println!("hello {}", event.payload());
/// }));
/// dispatcher.register("greet", &greet)?;
/// ```
pub fn handler_fn<F>(func: F) -> FnHandler<F> {
    FnHandler { func }
}

impl<E, F> Handler<E> for FnHandler<F>
where
    E: Event,
    F: Fn(&E) + Send + Sync + 'static,
{
    async fn handle(&self, event: &E) {
        (self.func)(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_core::{HandlerRef, NamedEvent};
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_closure_sees_payload() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let handler =
            HandlerRef::<NamedEvent<u32>>::new(handler_fn(move |event: &NamedEvent<u32>| {
                sink.lock().push(*event.payload());
            }));

        handler.handle(&NamedEvent::new("n", 7)).await;
        handler.handle(&NamedEvent::new("n", 9)).await;

        assert_eq!(*seen.lock(), vec![7, 9]);
    }
}
