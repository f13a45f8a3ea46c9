//! Dispatch outcome reporting.

use crate::{error::HandlerError, handler::HandlerId};

/// A handler that did not complete normally during a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerFailure {
    /// Identity of the failed handler.
    pub handler: HandlerId,
    /// What went wrong.
    pub error: HandlerError,
}

/// Summary of a completed dispatch.
///
/// Returned once every handler registered at dispatch time has finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReport {
    /// The name the event was routed by.
    pub event_name: String,
    /// Number of handlers the event was delivered to.
    pub invoked: usize,
    /// Handlers that panicked, timed out or were cancelled.
    pub failures: Vec<HandlerFailure>,
}

impl DispatchReport {
    /// A report for an event that had no registered handlers.
    pub fn empty(event_name: impl Into<String>) -> Self {
        Self {
            event_name: event_name.into(),
            invoked: 0,
            failures: Vec::new(),
        }
    }

    /// Returns `true` if every invoked handler completed normally.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of handlers that completed normally.
    pub fn completed(&self) -> usize {
        self.invoked.saturating_sub(self.failures.len())
    }
}
