//! Dispatcher configuration.

use std::time::Duration;

/// Runtime settings of an [`EventDispatcher`](crate::EventDispatcher).
///
/// # Example
/// ```ignore
/// let config = DispatcherConfig::new()
///     .with_handler_timeout(Duration::from_secs(5))
///     .fail_on_handler_error(true);
///
/// let dispatcher = EventDispatcher::<MyEvent>::with_config(config);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatcherConfig {
    handler_timeout: Option<Duration>,
    fail_on_handler_error: bool,
}

impl DispatcherConfig {
    /// Default configuration: no timeout, handler failures only reported.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound every handler invocation by `timeout`.
    ///
    /// Requires dispatching from within a Tokio runtime with the time driver
    /// enabled.
    pub fn with_handler_timeout(mut self, timeout: Duration) -> Self {
        self.handler_timeout = Some(timeout);
        self
    }

    /// Return [`DispatchError::HandlerFailed`] from dispatch when any handler
    /// panics, times out or is cancelled, instead of only reporting it.
    ///
    /// [`DispatchError::HandlerFailed`]: herald_core::DispatchError::HandlerFailed
    pub fn fail_on_handler_error(mut self, enabled: bool) -> Self {
        self.fail_on_handler_error = enabled;
        self
    }

    /// The per-handler timeout, if any.
    pub fn handler_timeout(&self) -> Option<Duration> {
        self.handler_timeout
    }

    /// Whether handler failures turn into dispatch errors.
    pub fn fails_on_handler_error(&self) -> bool {
        self.fail_on_handler_error
    }
}
