//! # Runtime events emitted by the scheduler.
//!
//! The scheduler publishes its cycle lifecycle onto a broadcast [`Bus`];
//! subscribers (logging, metrics, reporting bridges) consume the stream
//! without ever blocking the loop.

mod bus;
mod event;

pub use bus::Bus;
pub use event::{Event, EventKind};
