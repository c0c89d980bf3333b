//! # Reference logging subscriber.
//!
//! [`LogWriter`] forwards scheduler events to `tracing` with the level the
//! event deserves: errors for overruns, failures and supervisor loss, info
//! for everything else. Shutdown stays quiet (info) — an interrupt is a
//! stop request, not a problem.
//!
//! Enabled via the `logging` feature. Pair it with
//! [`logs::init`](crate::logs::init) for the date-keyed file sink, or with
//! any `tracing` subscriber of your own.

use async_trait::async_trait;
use tracing::{error, info};

use super::subscribe::Subscribe;
use crate::events::{Event, EventKind};

/// Forwards events to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogWriter;

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &Event) {
        match e.kind {
            EventKind::CycleStarting => {
                info!(cycle = ?e.cycle, "cycle starting");
            }
            EventKind::CycleOverrun => {
                error!(cycle = ?e.cycle, deficit_ms = ?e.deficit_ms, "cycle overran");
            }
            EventKind::SampleFailed => {
                error!(cycle = ?e.cycle, reason = ?e.reason, "sample failed");
            }
            EventKind::TagChanged => {
                info!(
                    tag = ?e.tag,
                    cycle = ?e.cycle,
                    value = ?e.reason,
                    "value changed"
                );
            }
            EventKind::SupervisorLost => {
                error!(pid = ?e.reason, "supervisor lost");
            }
            EventKind::ShutdownRequested => {
                info!("shutdown requested");
            }
            EventKind::SchedulerStopped => {
                info!(
                    reason = ?e.reason,
                    cycle = ?e.cycle,
                    "scheduler stopped"
                );
            }
        }
    }

    fn name(&self) -> &'static str {
        "log-writer"
    }
}
