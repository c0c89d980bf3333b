//! # Sample plan: which tags are due on which cycle.
//!
//! A [`SamplePlan`] is built once at configuration time from a collection of
//! tags and the loop interval. Construction does all the fallible work —
//! cadence validation and address ordering — so that the per-cycle
//! [`due`](SamplePlan::due) query is a pure, infallible iteration.
//!
//! ## Ordering
//! Tags iterate in ascending numeric address order. Addresses that do not
//! parse as numbers sort after all numeric ones, keeping their configured
//! order — a stable, deterministic fallback. Such tags are reported with a
//! warning at construction; the ordering is never silently ambiguous.

use std::time::Duration;

use tracing::warn;

use super::cadence::Cadence;
use crate::error::ConfigError;
use crate::ports::{DataSource, Tag};

/// One tag together with its validated cadence.
#[derive(Clone, Debug)]
pub struct ScheduledTag {
    tag: Tag,
    cadence: Cadence,
}

impl ScheduledTag {
    /// The scheduled tag.
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// The tag's validated cadence.
    pub fn cadence(&self) -> Cadence {
        self.cadence
    }
}

/// Ordered set of scheduled tags for one data source.
#[derive(Clone, Debug)]
pub struct SamplePlan {
    entries: Vec<ScheduledTag>,
}

impl SamplePlan {
    /// Builds a plan from `tags` under the given loop interval.
    ///
    /// Fails if any tag polls faster than the loop or at a rate that is not
    /// a whole multiple of the interval. On success the entries are sorted
    /// by ascending numeric address, with non-numeric addresses trailing in
    /// configured order.
    pub fn new(tags: Vec<Tag>, interval: Duration) -> Result<Self, ConfigError> {
        let mut entries = Vec::with_capacity(tags.len());
        let mut unordered: Vec<String> = Vec::new();

        for (position, tag) in tags.into_iter().enumerate() {
            let cadence = Cadence::new(&tag.name, tag.poll_rate, interval)?;
            let key = match tag.address.parse::<u64>() {
                Ok(addr) => (0u8, addr, 0usize),
                Err(_) => {
                    unordered.push(tag.name.clone());
                    (1u8, 0u64, position)
                }
            };
            entries.push((key, ScheduledTag { tag, cadence }));
        }

        if !unordered.is_empty() {
            warn!(
                tags = ?unordered,
                "tag addresses are not numeric; keeping configured order for them"
            );
        }

        entries.sort_by_key(|(key, _)| *key);
        Ok(Self {
            entries: entries.into_iter().map(|(_, e)| e).collect(),
        })
    }

    /// Builds a plan for one data source's tags.
    pub fn for_source(source: &DataSource, interval: Duration) -> Result<Self, ConfigError> {
        Self::new(source.tags.clone(), interval)
    }

    /// Yields the tags due on `cycle`, in plan order.
    ///
    /// Pure: no internal mutation, safe to call every cycle.
    pub fn due(&self, cycle: u64) -> impl Iterator<Item = &Tag> {
        self.entries
            .iter()
            .filter(move |e| e.cadence.is_due(cycle))
            .map(|e| &e.tag)
    }

    /// All scheduled tags, in plan order.
    pub fn tags(&self) -> impl Iterator<Item = &Tag> {
        self.entries.iter().map(|e| &e.tag)
    }

    /// All entries with their cadences, in plan order.
    pub fn entries(&self) -> &[ScheduledTag] {
        &self.entries
    }

    /// Number of scheduled tags.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the plan schedules nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(id: u64, address: &str, poll_secs: u64) -> Tag {
        Tag::new(id, format!("tag-{id}"), address, Duration::from_secs(poll_secs))
    }

    #[test]
    fn test_numeric_addresses_sort_ascending() {
        let plan = SamplePlan::new(
            vec![tag(1, "400", 1), tag(2, "7", 1), tag(3, "40", 1)],
            Duration::from_secs(1),
        )
        .unwrap();

        let addrs: Vec<&str> = plan.tags().map(|t| t.address.as_str()).collect();
        assert_eq!(addrs, ["7", "40", "400"]);
    }

    #[test]
    fn test_non_numeric_addresses_trail_in_configured_order() {
        let plan = SamplePlan::new(
            vec![tag(1, "zeta", 1), tag(2, "12", 1), tag(3, "alpha", 1), tag(4, "3", 1)],
            Duration::from_secs(1),
        )
        .unwrap();

        let addrs: Vec<&str> = plan.tags().map(|t| t.address.as_str()).collect();
        // Numeric ascending first, then non-numeric in input order.
        assert_eq!(addrs, ["3", "12", "zeta", "alpha"]);
    }

    #[test]
    fn test_due_selection_per_cycle() {
        let plan = SamplePlan::new(
            vec![tag(1, "10", 5), tag(2, "20", 1), tag(3, "30", 2)],
            Duration::from_secs(1),
        )
        .unwrap();

        let due_at = |cycle: u64| -> Vec<&str> {
            plan.due(cycle).map(|t| t.address.as_str()).collect()
        };

        assert_eq!(due_at(1), ["20"]);
        assert_eq!(due_at(2), ["20", "30"]);
        assert_eq!(due_at(4), ["20", "30"]);
        assert_eq!(due_at(5), ["10", "20"]);
        assert_eq!(due_at(10), ["10", "20", "30"]);
    }

    #[test]
    fn test_invalid_poll_rate_fails_construction() {
        let err = SamplePlan::new(
            vec![tag(1, "10", 5), Tag::new(2, "burst", "20", Duration::from_millis(100))],
            Duration::from_secs(1),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::PollRateTooFast { .. }));
    }

    #[test]
    fn test_for_source_uses_source_tags() {
        let source = DataSource::new("plc", vec![tag(1, "5", 2), tag(2, "1", 4)]);
        let plan = SamplePlan::for_source(&source, Duration::from_secs(1)).unwrap();
        assert_eq!(plan.len(), 2);
        let addrs: Vec<&str> = plan.tags().map(|t| t.address.as_str()).collect();
        assert_eq!(addrs, ["1", "5"]);
    }
}
