//! # herald-core
//!
//! Core traits for the Herald in-process event dispatcher.
//!
//! This crate has minimal dependencies and is designed to be imported by code
//! that only needs to describe events and handlers, without pulling in the
//! standard dispatcher from `herald-std`.
//!
//! # Building Blocks
//!
//! ## [`Event`]
//!
//! A named, timestamped value carrying a caller-defined payload. The name is
//! the routing key; everything else is passed through to handlers untouched.
//!
//! ## [`Handler`]
//!
//! A reactive unit invoked once per dispatched event whose name it was
//! registered under. Handlers are fire-and-forget: the future they return
//! resolving is their completion signal.
//!
//! ## [`HandlerRef`]
//!
//! The registration handle. Handlers are identified by the allocation a
//! `HandlerRef` points to, never by the value of their fields.
//!
//! ## [`Dispatcher`]
//!
//! The registry and fan-out contract: register, unregister, query, clear and
//! dispatch.
//!
//! # Error Types
//!
//! - [`DispatchError`] - Errors surfaced by dispatcher operations
//! - [`HandlerError`] - Why a single handler invocation did not complete

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod dispatcher;
mod error;
mod event;
mod handler;
mod report;

// Re-exports
pub use dispatcher::Dispatcher;
pub use error::{DispatchError, HandlerError};
pub use event::{Event, NamedEvent};
pub use handler::{DynHandler, Handler, HandlerId, HandlerRef};
pub use report::{DispatchReport, HandlerFailure};
