//! # Change detection over last-seen tag values.
//!
//! [`ValueCache`] remembers the most recent reading per tag for the lifetime
//! of one worker process. It answers [`has_changed`](ValueCache::has_changed)
//! without committing anything: recording the new value is a separate,
//! explicit step, so callers decide whether an unreported sample should
//! count as seen.
//!
//! Entries are created lazily on first observation and updated in place;
//! they are never removed while the tag stays configured. The cache is never
//! persisted — a process restart starts empty, and every tag reads as
//! changed on its first sample.

use std::collections::HashMap;

use crate::ports::{Tag, Value};

/// Last-seen values per tag, keyed by tag identity.
#[derive(Clone, Debug, Default)]
pub struct ValueCache {
    values: HashMap<u64, Value>,
}

impl ValueCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff `value` differs from the cached reading for `tag`.
    ///
    /// A tag with no cached value counts as changed. Comparison is
    /// [`Value`]'s type-sensitive equality: `Int(10)` and `Str("10")`
    /// differ.
    pub fn has_changed(&self, tag: &Tag, value: &Value) -> bool {
        match self.values.get(&tag.id) {
            Some(last) => last != value,
            None => true,
        }
    }

    /// Commits `value` as the last-seen reading for `tag`.
    pub fn record(&mut self, tag: &Tag, value: Value) {
        self.values.insert(tag.id, value);
    }

    /// Returns the cached reading for `tag`, if any.
    pub fn get(&self, tag: &Tag) -> Option<&Value> {
        self.values.get(&tag.id)
    }

    /// Number of tags with a cached reading.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when nothing has been observed yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn tag() -> Tag {
        Tag::new(1, "level", "40001", Duration::from_secs(1))
    }

    #[test]
    fn test_first_observation_counts_as_changed() {
        let cache = ValueCache::new();
        assert!(cache.has_changed(&tag(), &Value::Int(10)));
    }

    #[test]
    fn test_recorded_value_stops_reporting_change() {
        let t = tag();
        let mut cache = ValueCache::new();
        cache.record(&t, Value::Int(10));
        assert!(!cache.has_changed(&t, &Value::Int(10)));
        assert!(cache.has_changed(&t, &Value::Int(11)));
    }

    #[test]
    fn test_comparison_is_type_sensitive() {
        let t = tag();
        let mut cache = ValueCache::new();
        cache.record(&t, Value::Int(10));
        assert!(cache.has_changed(&t, &Value::Str("10".into())));
        assert!(cache.has_changed(&t, &Value::Float(10.0)));
    }

    #[test]
    fn test_check_does_not_commit() {
        let t = tag();
        let mut cache = ValueCache::new();
        cache.record(&t, Value::Int(10));

        // Checking a different value must not update the cache.
        assert!(cache.has_changed(&t, &Value::Int(12)));
        assert!(cache.has_changed(&t, &Value::Int(12)));
        assert_eq!(cache.get(&t), Some(&Value::Int(10)));
    }

    #[test]
    fn test_entries_update_in_place() {
        let t = tag();
        let mut cache = ValueCache::new();
        cache.record(&t, Value::Int(1));
        cache.record(&t, Value::Int(2));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&t), Some(&Value::Int(2)));
    }
}
