//! Dispatcher core trait.

use crate::{error::DispatchError, event::Event, handler::HandlerRef, report::DispatchReport};
use std::future::Future;

/// A registry of handlers keyed by event name, able to fan an event out to
/// every handler registered under its name.
///
/// All methods take `&self`: implementations guard their registry internally
/// so a dispatcher can be shared between tasks.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot dispatch events of type `{E}`",
    label = "missing `Dispatcher` implementation",
    note = "Implement `Dispatcher<{E}>` to handle event dispatching."
)]
pub trait Dispatcher<E: Event>: Send + Sync {
    /// Register `handler` under `event_name`.
    ///
    /// Fails with [`DispatchError::DuplicateHandler`] if the same handler is
    /// already registered under that name, leaving the registry unchanged.
    fn register(&self, event_name: &str, handler: &HandlerRef<E>) -> Result<(), DispatchError>;

    /// Remove `handler` from `event_name`.
    ///
    /// Removing a handler that is not registered is a no-op.
    fn unregister(&self, event_name: &str, handler: &HandlerRef<E>) -> Result<(), DispatchError>;

    /// Returns `true` if `handler` is registered under `event_name`.
    fn has(&self, event_name: &str, handler: &HandlerRef<E>) -> bool;

    /// Number of handlers registered under `event_name`.
    fn len(&self, event_name: &str) -> usize;

    /// Remove every registration.
    fn clear(&self);

    /// Deliver `event` to every handler registered under its name and wait
    /// for all of them to finish.
    fn dispatch(
        &self,
        event: E,
    ) -> impl Future<Output = Result<DispatchReport, DispatchError>> + Send;
}
