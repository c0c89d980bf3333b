//! # Scheduler lifecycle events.
//!
//! [`EventKind`] classifies what happened; [`Event`] carries the metadata
//! (cycle number, tag name, reason, overrun deficit) plus a wall-clock stamp
//! and a global sequence number.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases
//! monotonically. Use `seq` to restore the exact order when events are
//! observed out of order across subscribers.

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of scheduler events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// A cycle is starting.
    ///
    /// Sets: `cycle`, `at`, `seq`.
    CycleStarting,

    /// The sample step took longer than the loop interval; the next cycle
    /// starts immediately without sleeping.
    ///
    /// Sets: `cycle`, `deficit_ms` (how far past the interval the step ran),
    /// `at`, `seq`.
    CycleOverrun,

    /// The sample step failed this cycle. The loop continues.
    ///
    /// Sets: `cycle`, `reason` (error message), `at`, `seq`.
    SampleFailed,

    /// A polled value differs from the cached one. Published by samplers,
    /// not by the scheduler itself; the reporting collaborator picks it up
    /// from here.
    ///
    /// Sets: `tag`, `cycle`, `reason` (display form of the new value), `at`,
    /// `seq`.
    TagChanged,

    /// The supervising process is no longer running; the scheduler stops.
    ///
    /// Sets: `reason` (supervisor pid), `at`, `seq`.
    SupervisorLost,

    /// A termination signal was observed; the scheduler stops cleanly.
    ///
    /// Sets: `at`, `seq`.
    ShutdownRequested,

    /// The scheduler reached its terminal state.
    ///
    /// Sets: `reason` (stop label), `cycle` (last cycle counter), `at`, `seq`.
    SchedulerStopped,
}

/// Scheduler event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the [`EventKind`]
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,

    /// Loop cycle the event belongs to, if applicable.
    pub cycle: Option<u64>,
    /// Name of the tag, if applicable.
    pub tag: Option<Arc<str>>,
    /// Human-readable reason (error message, stop label, new value).
    pub reason: Option<Arc<str>>,
    /// Overrun deficit in milliseconds (compact).
    pub deficit_ms: Option<u64>,
}

impl Event {
    /// Creates a new event of the given kind, stamped with the current time
    /// and the next global sequence number.
    pub fn now(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            cycle: None,
            tag: None,
            reason: None,
            deficit_ms: None,
        }
    }

    /// Attaches the loop cycle number.
    #[inline]
    pub fn with_cycle(mut self, cycle: u64) -> Self {
        self.cycle = Some(cycle);
        self
    }

    /// Attaches a tag name.
    #[inline]
    pub fn with_tag(mut self, tag: impl Into<Arc<str>>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Attaches an overrun deficit (stored as milliseconds).
    #[inline]
    pub fn with_deficit(mut self, d: Duration) -> Self {
        let ms = d.as_millis().min(u128::from(u64::MAX)) as u64;
        self.deficit_ms = Some(ms);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_is_monotonic() {
        let a = Event::now(EventKind::CycleStarting);
        let b = Event::now(EventKind::CycleStarting);
        assert!(b.seq > a.seq);
    }

    #[test]
    fn test_builders_set_fields() {
        let ev = Event::now(EventKind::CycleOverrun)
            .with_cycle(42)
            .with_deficit(Duration::from_millis(150))
            .with_reason("slow bus scan");

        assert_eq!(ev.cycle, Some(42));
        assert_eq!(ev.deficit_ms, Some(150));
        assert_eq!(ev.reason.as_deref(), Some("slow bus scan"));
        assert!(ev.tag.is_none());
    }
}
