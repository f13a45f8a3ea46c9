//! Delivery strategies for event fan-out.
//!
//! A strategy receives the snapshot of handlers taken for one dispatch and
//! runs every one of them, returning only once all have finished. Strategies
//! differ in how the handlers are scheduled:
//!
//! - [`ConcurrentDelivery`] - polled together inside the dispatching task
//! - [`SpawnedDelivery`] - one Tokio task per handler
//! - [`SequentialDelivery`] - one after another, in registration order
//!
//! Every strategy isolates invocations the same way: panics are caught and an
//! optional per-handler timeout is enforced, so a failing handler never
//! prevents the others from running nor the dispatch from returning.

mod concurrent;
mod invoke;
mod sequential;
mod spawned;
mod traits;

pub use concurrent::ConcurrentDelivery;
pub use sequential::SequentialDelivery;
pub use spawned::SpawnedDelivery;
pub use traits::DeliveryStrategy;
