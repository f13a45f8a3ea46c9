//! Error types for Herald.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`DispatchError`] - Errors returned by dispatcher operations
//! - [`HandlerError`] - Why a single handler invocation did not complete

use crate::report::HandlerFailure;
use std::time::Duration;
use thiserror::Error;

/// Errors returned by dispatcher operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The handler is already registered under this event name.
    #[error("handler already registered for event `{event_name}`")]
    DuplicateHandler {
        /// The event name the registration was attempted for.
        event_name: String,
    },

    /// One or more handlers failed while the event was being delivered.
    ///
    /// Only returned by dispatchers configured to treat handler failures as
    /// errors; every handler has still run to completion or failure.
    #[error("{} handler(s) failed while handling event `{event_name}`", failures.len())]
    HandlerFailed {
        /// The dispatched event's name.
        event_name: String,
        /// One entry per failed handler, in registration order.
        failures: Vec<HandlerFailure>,
    },
}

/// Errors that can occur in a single handler invocation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandlerError {
    /// The handler panicked during execution.
    #[error("handler panicked: {0}")]
    Panic(String),

    /// The handler timed out.
    #[error("handler timed out after {0:?}")]
    Timeout(Duration),

    /// The handler was cancelled before it completed.
    #[error("handler was cancelled")]
    Cancelled,
}
