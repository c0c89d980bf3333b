//! # Scheduler: the drift-aware cycle loop.
//!
//! The [`Scheduler`] owns the event bus, the subscriber fan-out, the
//! liveness watchdog and the cycle counter. Each cycle it checks the
//! watchdog, invokes the injected [`Sampler`], measures how long the step
//! took, and sleeps whatever remains of the configured interval.
//!
//! ## States
//! ```text
//! Init ──run()──► Running ──┬── supervisor gone ──► Stopped (logged error)
//!                           ├── signal / cancel ──► Stopped (silent)
//!                           └── one-shot sampler ─► Stopped (interval = None)
//! ```
//! `Stopped` is terminal: a second `run()` returns
//! [`RuntimeError::Terminated`].
//!
//! ## Cycle timing
//! ```text
//! loop {
//!   ├─► cancelled?               → stop
//!   ├─► watchdog.is_alive()?     → stop when gone (SupervisorLost)
//!   ├─► publish CycleStarting
//!   ├─► sampler.sample(cycle)    (never pre-empted; errors logged, loop continues)
//!   ├─► elapsed = now - start
//!   ├─► elapsed < interval       → sleep(interval - elapsed), raced against
//!   │                              SIGINT/SIGTERM and the cancel token
//!   ├─► elapsed ≥ interval       → CycleOverrun (error log, no sleep)
//!   └─► cycle += 1
//! }
//! ```
//!
//! ## Rules
//! - The cycle counter starts at 1 and never resets while the process runs.
//! - Cancellation is cooperative: signals and liveness failures are observed
//!   between cycles or during the sleep, never mid-sample.
//! - No timeout is imposed on the sample step; a hanging step stalls the
//!   scheduler indefinitely.
//! - With `interval = None` the sample step owns its own endless loop: it is
//!   invoked exactly once and the scheduler never sleeps.

use std::sync::Arc;

use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use super::sampler::Sampler;
use super::shutdown::Shutdown;
use super::watchdog::Liveness;
use crate::config::Config;
use crate::error::{ConfigError, RuntimeError};
use crate::events::{Bus, Event, EventKind};
use crate::subscribers::{Subscribe, SubscriberSet};

/// Why the scheduler stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The one-shot sample step returned (`interval = None` mode).
    Finished,
    /// The supervising process disappeared.
    SupervisorLost,
    /// A termination signal arrived or the cancel token fired.
    Interrupted,
}

impl StopReason {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            StopReason::Finished => "finished",
            StopReason::SupervisorLost => "supervisor_lost",
            StopReason::Interrupted => "interrupted",
        }
    }
}

/// Lifecycle state of a [`Scheduler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerState {
    /// Constructed and validated, not yet running.
    Init,
    /// Inside `run()`.
    Running,
    /// Terminal; `run()` cannot be called again.
    Stopped,
}

/// Drives the polling loop of one worker process.
pub struct Scheduler {
    cfg: Config,
    bus: Bus,
    watchdog: Arc<dyn Liveness>,
    subscribers: Vec<Arc<dyn Subscribe>>,
    cancel: CancellationToken,
    state: SchedulerState,
    cycle: u64,
}

impl Scheduler {
    /// Creates a scheduler, validating the configuration up front.
    ///
    /// Subscribers receive every event the scheduler (or the sampler, via
    /// [`bus`](Scheduler::bus)) publishes; their workers are spawned when
    /// `run()` starts.
    pub fn new(
        cfg: Config,
        watchdog: Arc<dyn Liveness>,
        subscribers: Vec<Arc<dyn Subscribe>>,
    ) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let bus = Bus::new(cfg.bus_capacity_clamped());
        Ok(Self {
            cfg,
            bus,
            watchdog,
            subscribers,
            cancel: CancellationToken::new(),
            state: SchedulerState::Init,
            cycle: 1,
        })
    }

    /// The event bus; samplers clone it to publish [`EventKind::TagChanged`].
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Token for stopping the scheduler programmatically.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Current cycle counter (starts at 1, never resets).
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// Runs the loop until the supervisor disappears, a termination signal
    /// arrives, the cancel token fires, or — with `interval = None` — the
    /// sample step returns.
    ///
    /// The sample step is never pre-empted; it is trusted to return. Returns
    /// the [`StopReason`] once the terminal state is reached.
    pub async fn run<S>(&mut self, sampler: &mut S) -> Result<StopReason, RuntimeError>
    where
        S: Sampler + ?Sized,
    {
        if self.state == SchedulerState::Stopped {
            return Err(RuntimeError::Terminated);
        }
        self.state = SchedulerState::Running;

        let mut shutdown = Shutdown::new()?;
        self.subscriber_listener();

        let reason = match self.cfg.interval {
            Some(interval) => self.drive_cycles(interval, sampler, &mut shutdown).await,
            None => self.drive_once(sampler, &mut shutdown).await,
        };

        self.state = SchedulerState::Stopped;
        info!(reason = reason.as_label(), cycle = self.cycle, "scheduler stopped");
        self.bus.publish(
            Event::now(EventKind::SchedulerStopped)
                .with_cycle(self.cycle)
                .with_reason(reason.as_label()),
        );
        Ok(reason)
    }

    /// Subscribes to the bus and forwards events to the subscriber set
    /// (fire-and-forget; ends when the bus is dropped).
    fn subscriber_listener(&mut self) {
        if self.subscribers.is_empty() {
            return;
        }
        let set = SubscriberSet::new(std::mem::take(&mut self.subscribers));
        let mut rx = self.bus.subscribe();
        tokio::spawn(async move {
            while let Ok(ev) = rx.recv().await {
                set.emit(&ev);
            }
        });
    }

    /// The periodic mode: one sample step per cycle, sleep the remainder.
    async fn drive_cycles<S>(
        &mut self,
        interval: std::time::Duration,
        sampler: &mut S,
        shutdown: &mut Shutdown,
    ) -> StopReason
    where
        S: Sampler + ?Sized,
    {
        loop {
            if self.cancel.is_cancelled() {
                return StopReason::Interrupted;
            }
            if !self.watchdog.is_alive() {
                error!(
                    pid = ?self.watchdog.watched_pid(),
                    cycle = self.cycle,
                    "supervisor is not running; terminating"
                );
                let mut ev = Event::now(EventKind::SupervisorLost).with_cycle(self.cycle);
                if let Some(pid) = self.watchdog.watched_pid() {
                    ev = ev.with_reason(pid.to_string());
                }
                self.bus.publish(ev);
                return StopReason::SupervisorLost;
            }

            self.bus
                .publish(Event::now(EventKind::CycleStarting).with_cycle(self.cycle));

            let started = Instant::now();
            if let Err(err) = sampler.sample(self.cycle, self.cancel.child_token()).await {
                error!(cycle = self.cycle, error = %err, "sample step failed");
                self.bus.publish(
                    Event::now(EventKind::SampleFailed)
                        .with_cycle(self.cycle)
                        .with_reason(err.to_string()),
                );
            }
            let elapsed = started.elapsed();

            match interval.checked_sub(elapsed) {
                Some(remainder) if !remainder.is_zero() => {
                    tokio::select! {
                        _ = time::sleep(remainder) => {}
                        _ = shutdown.recv() => {
                            self.bus.publish(Event::now(EventKind::ShutdownRequested));
                            return StopReason::Interrupted;
                        }
                        _ = self.cancel.cancelled() => {
                            return StopReason::Interrupted;
                        }
                    }
                }
                _ => {
                    let deficit = elapsed.saturating_sub(interval);
                    error!(
                        cycle = self.cycle,
                        deficit_ms = deficit.as_millis() as u64,
                        "cycle overran the loop interval; skipping sleep"
                    );
                    self.bus.publish(
                        Event::now(EventKind::CycleOverrun)
                            .with_cycle(self.cycle)
                            .with_deficit(deficit),
                    );
                }
            }

            self.cycle += 1;
        }
    }

    /// The one-shot mode: the sample step owns its own endless loop.
    async fn drive_once<S>(&mut self, sampler: &mut S, shutdown: &mut Shutdown) -> StopReason
    where
        S: Sampler + ?Sized,
    {
        let ctx = self.cancel.child_token();
        tokio::select! {
            res = sampler.sample(self.cycle, ctx.clone()) => {
                if let Err(err) = res {
                    error!(error = %err, "sample step failed");
                    self.bus.publish(
                        Event::now(EventKind::SampleFailed)
                            .with_cycle(self.cycle)
                            .with_reason(err.to_string()),
                    );
                }
                StopReason::Finished
            }
            _ = shutdown.recv() => {
                ctx.cancel();
                self.bus.publish(Event::now(EventKind::ShutdownRequested));
                StopReason::Interrupted
            }
            _ = self.cancel.cancelled() => StopReason::Interrupted,
        }
    }
}
