//! # herald-std
//!
//! Standard implementations for the Herald in-process event dispatcher.
//!
//! This crate provides:
//! - **Registry**: [`Registry`], the name-to-handlers mapping
//! - **Dispatcher**: [`EventDispatcher`] and its [`DispatcherConfig`]
//! - **Delivery strategies**: concurrent, spawned and sequential fan-out
//! - **Handler adapters**: closures and logging wrappers
//! - **Testing utilities**: recording, counting and mock handlers

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use herald_core;

// Modules
pub mod config;
pub mod delivery;
pub mod dispatcher;
pub mod handlers;
pub mod registry;
pub mod testing;

pub use config::DispatcherConfig;
pub use dispatcher::EventDispatcher;
pub use registry::Registry;
