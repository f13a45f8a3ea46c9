//! # Handlers
//!
//! A handler is the reactive end of the dispatcher: it is invoked once for
//! every dispatched event whose name it was registered under.
//!
//! # Identity
//!
//! Handlers are registered through a [`HandlerRef`], a reference-counted
//! pointer to a type-erased handler. Two handles refer to the same handler iff
//! they point at the same allocation. Two handlers built from equal field
//! values are still distinct handlers.
//!
//! ```rust,ignore
//! let audit = HandlerRef::new(AuditHandler { id: 1 });
//! let same = audit.clone();
//! let other = HandlerRef::new(AuditHandler { id: 1 });
//!
//! assert_eq!(audit.id(), same.id());
//! assert_ne!(audit.id(), other.id());
//! ```

use crate::event::Event;
use std::{fmt, future::Future, pin::Pin, sync::Arc};

/// A reactive unit invoked for every dispatched event matching its name.
///
/// Handlers are fire-and-forget: they report nothing back to the dispatcher.
/// The returned future resolving is the completion signal the dispatcher
/// waits on.
///
/// # Static vs Dynamic Dispatch
///
/// This trait uses native `async fn` for zero-cost static dispatch. The
/// dispatcher stores handlers as [`DynHandler`] trait objects, which every
/// `Handler` implements automatically.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle events of type `{E}`",
    label = "missing `Handler<{E}>` implementation",
    note = "Handlers must implement `handle` for the event type `{E}`."
)]
pub trait Handler<E: Event>: Send + Sync + 'static {
    /// Called when a matching event is dispatched.
    fn handle(&self, event: &E) -> impl Future<Output = ()> + Send;
}

/// Dynamic object-safe version of [`Handler`].
pub trait DynHandler<E: Event>: Send + Sync + 'static {
    /// Called when a matching event is dispatched (dynamic dispatch version).
    fn handle_dyn<'a>(&'a self, event: &'a E) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>>;
}

// Blanket implementation: Any type implementing Handler implements DynHandler automatically.
impl<E: Event, T: Handler<E>> DynHandler<E> for T {
    fn handle_dyn<'a>(&'a self, event: &'a E) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        Box::pin(self.handle(event))
    }
}

/// Identity token of a registered handler.
///
/// Derived from the address of the allocation behind a [`HandlerRef`]; it is
/// stable for as long as at least one handle to the handler is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlerId(usize);

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "handler@{:#x}", self.0)
    }
}

/// A shared handle to a type-erased handler.
///
/// Cloning is cheap and preserves identity.
pub struct HandlerRef<E: Event> {
    inner: Arc<dyn DynHandler<E>>,
}

impl<E: Event> HandlerRef<E> {
    /// Wrap a handler in a new handle with a fresh identity.
    pub fn new<H: Handler<E>>(handler: H) -> Self {
        Self {
            inner: Arc::new(handler),
        }
    }

    /// The identity of the referenced handler.
    pub fn id(&self) -> HandlerId {
        // Strip the vtable so only the data address is compared.
        HandlerId(Arc::as_ptr(&self.inner).cast::<()>() as usize)
    }

    /// Returns `true` if both handles refer to the same handler.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }

    /// Invoke the referenced handler.
    pub fn handle<'a>(&'a self, event: &'a E) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        self.inner.handle_dyn(event)
    }
}

impl<E: Event> Clone for HandlerRef<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E: Event> PartialEq for HandlerRef<E> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<E: Event> Eq for HandlerRef<E> {}

impl<E: Event> fmt::Debug for HandlerRef<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HandlerRef").field(&self.id()).finish()
    }
}

// Sharing an existing Arc keeps its identity, so callers can hold on to the
// concrete type and still register/unregister it.
impl<E: Event, H: Handler<E>> From<Arc<H>> for HandlerRef<E> {
    fn from(handler: Arc<H>) -> Self {
        Self { inner: handler }
    }
}
