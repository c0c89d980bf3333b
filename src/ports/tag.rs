//! One field-device data point.

use std::time::Duration;

/// A single addressable data point on a field device.
///
/// The tag carries its identity and scheduling inputs only; the last-known
/// value lives in the worker's [`ValueCache`](crate::polling::ValueCache),
/// never on the tag itself.
#[derive(Clone, Debug)]
pub struct Tag {
    /// Stable identity, unique within the worker's configuration.
    pub id: u64,
    /// Human-readable name used in logs and events.
    pub name: String,
    /// Device address. Usually a register number; kept as text because some
    /// protocols use symbolic addresses.
    pub address: String,
    /// How often the tag should be sampled. Must be a positive multiple of
    /// the loop interval; validated when a sample plan is built.
    pub poll_rate: Duration,
}

impl Tag {
    /// Creates a new tag.
    pub fn new(id: u64, name: impl Into<String>, address: impl Into<String>, poll_rate: Duration) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            poll_rate,
        }
    }
}
