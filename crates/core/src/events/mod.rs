//! Domain events module.
//!
//! Provides domain event types and the sink trait for emitting events
//! after successful account mutations. Hosts implement the sink to keep an
//! activity log or react to changes.

mod domain_event;
mod sink;

pub use domain_event::*;
pub use sink::*;
