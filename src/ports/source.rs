//! A named, enable-able group of tags.

use super::tag::Tag;

/// A group of [`Tag`]s acquired together from one device or logical unit.
///
/// Disabled sources are excluded before scheduling begins; the flag is never
/// consulted again at runtime.
#[derive(Clone, Debug)]
pub struct DataSource {
    /// Human-readable name (device name, slave id, unit label).
    pub name: String,
    /// Whether the source takes part in scheduling at all.
    pub enabled: bool,
    /// Tags belonging to this source. Fixed at configuration load.
    pub tags: Vec<Tag>,
}

impl DataSource {
    /// Creates an enabled source with the given tags.
    pub fn new(name: impl Into<String>, tags: Vec<Tag>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            tags,
        }
    }

    /// Returns the same source with the enabled flag set.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}
