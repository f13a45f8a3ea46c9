//! # herald - In-Process Event Dispatcher
//!
//! `herald` maps event names to ordered lists of handlers and broadcasts each
//! dispatched event to every handler registered under its name. Handlers run
//! concurrently, and a dispatch returns only once all of them have finished.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use herald::prelude::*;
//!
//! struct SendWelcomeMail;
//!
//! impl Handler<NamedEvent<String>> for SendWelcomeMail {
//!     async fn handle(&self, event: &NamedEvent<String>) {
//!         // deliver mail to event.payload()
//!     }
//! }
//!
//! let dispatcher = EventDispatcher::new();
//! let welcome = HandlerRef::new(SendWelcomeMail);
//! dispatcher.register("user.created", &welcome)?;
//!
//! let report = dispatcher
//!     .dispatch(NamedEvent::new("user.created", "ada@example.com".to_string()))
//!     .await?;
//! assert_eq!(report.invoked, 1);
//! ```
//!
//! ## Handler Identity
//!
//! A handler is identified by the allocation behind its [`HandlerRef`].
//! Registering the same `HandlerRef` (or a clone of it) twice under one name
//! fails with [`DispatchError::DuplicateHandler`]; two handlers with equal
//! fields are still two handlers.
//!
//! ## Delivery
//!
//! [`EventDispatcher`] uses [`delivery::ConcurrentDelivery`] by default. Swap
//! in [`delivery::SpawnedDelivery`] for one Tokio task per handler, or
//! [`delivery::SequentialDelivery`] for strict registration order.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Dispatcher contract
pub use herald_core::{DispatchError, DispatchReport, Dispatcher, HandlerFailure};

// Events
pub use herald_core::{Event, NamedEvent};

// Handlers
pub use herald_core::{DynHandler, Handler, HandlerError, HandlerId, HandlerRef};

pub use herald_std::{DispatcherConfig, EventDispatcher, Registry};

/// Delivery strategies for event fan-out.
pub mod delivery {
    pub use herald_std::delivery::{
        ConcurrentDelivery, DeliveryStrategy, SequentialDelivery, SpawnedDelivery,
    };
}

/// Standard handler adapters.
pub mod handlers {
    pub use herald_std::handlers::{FnHandler, LoggingHandler, handler_fn};
}

/// Testing utilities.
pub mod testing {
    pub use herald_std::testing::{
        CountingHandler, MockHandler, PanickingHandler, RecordingHandler, SleepingHandler,
    };
}

/// Prelude module - common imports for Herald.
///
/// # Usage
///
/// ```rust,ignore
/// use herald::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        DispatchError,
        DispatchReport,
        Dispatcher,
        DispatcherConfig,
        Event,
        EventDispatcher,
        Handler,
        HandlerRef,
        NamedEvent,
    };
}
