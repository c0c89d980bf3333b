//! # SubscriberSet: non-blocking fan-out over multiple subscribers.
//!
//! Distributes each [`Event`] to every subscriber **without awaiting** its
//! processing.
//!
//! ## Guarantees
//! - `emit(&Event)` returns immediately.
//! - Per-subscriber FIFO (queue order).
//! - A panicking subscriber is isolated; the others keep receiving.
//!
//! ## Non-guarantees
//! - No global ordering across different subscribers (use `Event::seq`).
//! - No retries on queue overflow: events are dropped for that subscriber.

use std::sync::Arc;

use futures::FutureExt;
use tokio::sync::mpsc;
use tracing::warn;

use super::subscribe::Subscribe;
use crate::events::Event;

/// Per-subscriber channel with metadata.
struct Channel {
    name: &'static str,
    sender: mpsc::Sender<Arc<Event>>,
}

/// Composite fan-out with per-subscriber bounded queues and worker tasks.
pub struct SubscriberSet {
    channels: Vec<Channel>,
}

impl SubscriberSet {
    /// Creates the set and spawns one worker task per subscriber.
    ///
    /// Must be called within a Tokio runtime. Workers exit when the set is
    /// dropped (their queues close).
    #[must_use]
    pub fn new(subs: Vec<Arc<dyn Subscribe>>) -> Self {
        let mut channels = Vec::with_capacity(subs.len());

        for sub in subs {
            let cap = sub.queue_capacity().max(1);
            let name = sub.name();
            let (tx, mut rx) = mpsc::channel::<Arc<Event>>(cap);

            tokio::spawn(async move {
                while let Some(ev) = rx.recv().await {
                    let fut = sub.on_event(ev.as_ref());
                    if let Err(panic_err) = std::panic::AssertUnwindSafe(fut).catch_unwind().await {
                        warn!(subscriber = sub.name(), ?panic_err, "subscriber panicked");
                    }
                }
            });

            channels.push(Channel { name, sender: tx });
        }

        Self { channels }
    }

    /// Fans one event out to all subscribers (non-blocking).
    ///
    /// If a subscriber's queue is full or its worker is gone, the event is
    /// dropped for it and a warning is logged.
    pub fn emit(&self, event: &Event) {
        let ev = Arc::new(event.clone());
        for channel in &self.channels {
            match channel.sender.try_send(Arc::clone(&ev)) {
                Ok(()) => {}
                Err(mpsc::error::TrySendError::Full(_)) => {
                    warn!(subscriber = channel.name, "event dropped: queue full");
                }
                Err(mpsc::error::TrySendError::Closed(_)) => {
                    warn!(subscriber = channel.name, "event dropped: worker closed");
                }
            }
        }
    }

    /// True if there are no subscribers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Number of subscribers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.channels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventKind;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::Duration;

    struct Counter {
        seen: AtomicU64,
    }

    #[async_trait]
    impl Subscribe for Counter {
        async fn on_event(&self, _event: &Event) {
            self.seen.fetch_add(1, Ordering::Relaxed);
        }

        fn name(&self) -> &'static str {
            "counter"
        }
    }

    #[tokio::test]
    async fn test_emit_reaches_every_subscriber() {
        let a = Arc::new(Counter { seen: AtomicU64::new(0) });
        let b = Arc::new(Counter { seen: AtomicU64::new(0) });
        let set = SubscriberSet::new(vec![a.clone(), b.clone()]);
        assert_eq!(set.len(), 2);

        set.emit(&Event::now(EventKind::CycleStarting));
        set.emit(&Event::now(EventKind::CycleStarting));

        // Workers drain asynchronously.
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(a.seen.load(Ordering::Relaxed), 2);
        assert_eq!(b.seen.load(Ordering::Relaxed), 2);
    }
}
