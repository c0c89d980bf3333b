//! # Worker bootstrap.
//!
//! Wires one worker process together from its start-up inputs: resolve the
//! port through the [`PortStore`] seam, build the liveness watchdog from the
//! optional supervisor pid, pre-validate a [`SamplePlan`] per enabled data
//! source, and assemble the [`Scheduler`].
//!
//! Everything fallible happens here, before the first cycle: an unknown
//! port id or an invalid poll rate never reaches the loop. The process
//! entry point prints the returned [`ConfigError`] and exits non-zero.
//!
//! ## Example
//! ```no_run
//! use pollvisor::{MemoryStore, Worker, WorkerArgs};
//!
//! # fn demo(store: MemoryStore) -> Result<(), pollvisor::ConfigError> {
//! let args = WorkerArgs::new(3).with_supervisor(1742);
//! let worker = Worker::bootstrap(&store, &args, vec![])?;
//! // worker.scheduler.run(...) with a protocol-specific sampler
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use super::scheduler::Scheduler;
use super::watchdog::PidWatchdog;
use crate::config::Config;
use crate::error::ConfigError;
use crate::polling::SamplePlan;
use crate::ports::{Port, PortStore};
use crate::subscribers::Subscribe;

/// Start-up inputs of one worker process.
///
/// These arrive from the outside (command line, supervisor hand-off); the
/// crate does not care how.
#[derive(Clone, Debug)]
pub struct WorkerArgs {
    /// Identifier of the port to acquire through.
    pub port_id: u64,
    /// Pid of the supervising process, if the worker is supervised.
    pub supervisor_pid: Option<u32>,
    /// Loop interval; `None` hands the endless loop to the sample step.
    pub interval: Option<Duration>,
}

impl WorkerArgs {
    /// Creates arguments for the given port with the default interval.
    pub fn new(port_id: u64) -> Self {
        Self {
            port_id,
            supervisor_pid: None,
            interval: Config::default().interval,
        }
    }

    /// Sets the supervising process id.
    pub fn with_supervisor(mut self, pid: u32) -> Self {
        self.supervisor_pid = Some(pid);
        self
    }

    /// Sets the loop interval (`None` = sample step loops internally).
    pub fn with_interval(mut self, interval: Option<Duration>) -> Self {
        self.interval = interval;
        self
    }
}

/// A fully wired worker: port record, validated plans, ready scheduler.
pub struct Worker {
    /// The resolved port record.
    pub port: Port,
    /// One validated plan per enabled data source, in port order. Empty
    /// when `interval` is `None` (the sample step schedules itself).
    pub plans: Vec<SamplePlan>,
    /// The scheduler, validated and ready to `run()`.
    pub scheduler: Scheduler,
}

impl std::fmt::Debug for Worker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Worker")
            .field("port", &self.port)
            .field("plans", &self.plans)
            .field("scheduler", &"Scheduler { .. }")
            .finish()
    }
}

impl Worker {
    /// Resolves and validates everything a worker needs before its first
    /// cycle.
    ///
    /// Fails with [`ConfigError::PortNotFound`] when the store has no record
    /// for `args.port_id`, or with the poll-rate/interval errors of
    /// [`SamplePlan::new`](crate::polling::SamplePlan::new) when a tag
    /// cannot be scheduled deterministically.
    pub fn bootstrap(
        store: &dyn PortStore,
        args: &WorkerArgs,
        subscribers: Vec<Arc<dyn Subscribe>>,
    ) -> Result<Self, ConfigError> {
        let port = store
            .port(args.port_id)
            .ok_or(ConfigError::PortNotFound { id: args.port_id })?;

        let plans = match args.interval {
            Some(interval) => port
                .enabled_sources()
                .map(|source| SamplePlan::for_source(source, interval))
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        let cfg = Config {
            interval: args.interval,
            ..Config::default()
        };
        let watchdog = Arc::new(PidWatchdog::new(args.supervisor_pid));
        let scheduler = Scheduler::new(cfg, watchdog, subscribers)?;

        info!(
            port = port.id,
            protocol = %port.protocol,
            sources = plans.len(),
            supervised = args.supervisor_pid.is_some(),
            "worker bootstrapped"
        );
        Ok(Self {
            port,
            plans,
            scheduler,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{DataSource, MemoryStore, Tag};

    fn store_with_port() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.insert(Port {
            id: 3,
            protocol: "modbus_rtu".into(),
            address: "/dev/ttyS0".into(),
            params: "baud=9600|slave_id=2".into(),
            sources: vec![
                DataSource::new(
                    "plc-a",
                    vec![Tag::new(1, "level", "40001", Duration::from_secs(5))],
                ),
                DataSource::new(
                    "plc-b",
                    vec![Tag::new(2, "flow", "40010", Duration::from_secs(1))],
                )
                .with_enabled(false),
            ],
        });
        store
    }

    #[test]
    fn test_bootstrap_plans_enabled_sources_only() {
        let store = store_with_port();
        let worker = Worker::bootstrap(&store, &WorkerArgs::new(3), vec![]).unwrap();

        assert_eq!(worker.port.id, 3);
        assert_eq!(worker.plans.len(), 1);
        assert_eq!(worker.plans[0].len(), 1);
    }

    #[test]
    fn test_bootstrap_unknown_port_is_fatal() {
        let store = store_with_port();
        let err = Worker::bootstrap(&store, &WorkerArgs::new(99), vec![]).unwrap_err();
        assert!(matches!(err, ConfigError::PortNotFound { id: 99 }));
    }

    #[test]
    fn test_bootstrap_rejects_undividable_poll_rate() {
        let mut store = MemoryStore::new();
        store.insert(Port {
            id: 4,
            protocol: "modbus_tcp".into(),
            address: "10.0.0.5:502".into(),
            params: String::new(),
            sources: vec![DataSource::new(
                "plc",
                vec![Tag::new(1, "burst", "1", Duration::from_millis(250))],
            )],
        });

        let args = WorkerArgs::new(4).with_interval(Some(Duration::from_secs(1)));
        let err = Worker::bootstrap(&store, &args, vec![]).unwrap_err();
        assert!(matches!(err, ConfigError::PollRateTooFast { .. }));
    }

    #[test]
    fn test_bootstrap_without_interval_skips_plans() {
        let store = store_with_port();
        let args = WorkerArgs::new(3).with_interval(None);
        let worker = Worker::bootstrap(&store, &args, vec![]).unwrap();
        assert!(worker.plans.is_empty());
    }
}
