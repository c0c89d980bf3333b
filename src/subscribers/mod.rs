//! # Event subscribers.
//!
//! The scheduler broadcasts its lifecycle onto the bus; subscribers turn
//! that stream into logging, metrics, or a bridge to the reporting side.
//!
//! ```text
//! Scheduler ── publish(Event) ──► Bus ──► listener ──► SubscriberSet
//!                                                   ┌─────────┼─────────┐
//!                                                   ▼         ▼         ▼
//!                                              [queue S1] [queue S2] [queue SN]
//!                                                   ▼         ▼         ▼
//!                                              on_event() on_event() on_event()
//! ```
//!
//! Implement [`Subscribe`] for custom sinks; a reference [`LogWriter`] that
//! forwards events to `tracing` ships behind the `logging` feature.

mod set;
mod subscribe;

#[cfg(feature = "logging")]
mod log;

pub use set::SubscriberSet;
pub use subscribe::Subscribe;

#[cfg(feature = "logging")]
pub use log::LogWriter;
