//! # Configuration-side data model.
//!
//! A worker acquires data through one [`Port`] (a physical or logical
//! channel) that owns named, enable-able groups of [`Tag`]s
//! ([`DataSource`]s). Ports are resolved through the [`PortStore`] seam and
//! carry a raw pipe-delimited parameter string decoded by [`Params`].
//!
//! Membership is fixed at configuration load: nothing here mutates at
//! runtime.

mod params;
mod port;
mod source;
mod store;
mod tag;
mod value;

pub use params::Params;
pub use port::Port;
pub use source::DataSource;
pub use store::{MemoryStore, PortStore};
pub use tag::Tag;
pub use value::Value;
