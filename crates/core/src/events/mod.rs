//! Domain events module.
//!
//! Provides domain event types and the sink trait for emitting events after
//! successful mutations. Hosts implement the sink to push notifications
//! (e.g. "achievement unlocked") to connected clients.

mod domain_event;
mod sink;

pub use domain_event::*;
pub use sink::*;
