//! # pollvisor
//!
//! **Pollvisor** is the scheduling harness shared by data-acquisition
//! workers that poll field-device tags at individually configured rates,
//! detect value changes, and stop when their supervising process
//! disappears.
//!
//! It provides the drift-aware cycle loop, per-tag due-cycle computation,
//! change detection, supervisor liveness checking and parameter-string
//! parsing. Wire-level protocol decoding, persistent storage and upstream
//! reporting stay outside, behind narrow seams ([`Sampler`], [`PortStore`],
//! the event [`Bus`]).
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐      ┌───────────────┐     ┌───────────────┐
//!     │  PortStore   │──1──►│    Worker     │     │  PidWatchdog  │
//!     │ (id → Port)  │      │  (bootstrap)  │──2──│ (/proc/<pid>) │
//!     └──────────────┘      └───────┬───────┘     └───────┬───────┘
//!                                   ▼                     │
//! ┌─────────────────────────────────────────────────────┐ │
//! │  Scheduler (cycle driver)                           │◄┘
//! │  - cycle counter (starts at 1, never resets)        │
//! │  - elapsed measurement + remainder sleep            │
//! │  - SIGINT/SIGTERM → silent stop                     │
//! └───────┬─────────────────────────────────┬───────────┘
//!         │ sample(cycle, ctx)              │ publish(Event)
//!         ▼                                 ▼
//! ┌──────────────────────────┐      ┌──────────────────┐
//! │  Sampler (protocol impl) │      │  Bus (broadcast) │
//! │  - SamplePlan::due()     │      └────────┬─────────┘
//! │  - device I/O (external) │               ▼
//! │  - ValueCache::changed?  │      ┌──────────────────┐
//! │  - publish TagChanged    │      │  SubscriberSet   │
//! └──────────────────────────┘      │ LogWriter, ...   │
//!                                   └──────────────────┘
//! ```
//!
//! ### Cycle lifecycle
//! ```text
//! Worker::bootstrap(store, args)          (everything fallible happens here)
//!   ├─► PortStore::port(id)               → ConfigError::PortNotFound (fatal)
//!   ├─► SamplePlan per enabled source     → poll rates validated against interval
//!   └─► Scheduler::new(cfg, watchdog)     → interval validated
//!
//! Scheduler::run(sampler):
//!   loop {
//!     ├─► watchdog gone?  → error log, SupervisorLost, stop
//!     ├─► sampler.sample(cycle, ctx)      (errors logged, loop continues)
//!     ├─► sleep(interval − elapsed)       (raced against signals/cancel)
//!     │     overrun → error log, CycleOverrun, no sleep
//!     └─► cycle += 1
//!   }
//! ```
//!
//! ## Features
//! | Area              | Description                                            | Key types / traits                  |
//! |-------------------|--------------------------------------------------------|-------------------------------------|
//! | **Scheduling**    | Drift-aware cycle loop with overrun handling.          | [`Scheduler`], [`Config`]           |
//! | **Due selection** | Validated per-tag cadences, address-ordered plans.     | [`SamplePlan`], [`Cadence`]         |
//! | **Change detect** | Type-sensitive last-value comparison, explicit commit. | [`ValueCache`], [`Value`]           |
//! | **Liveness**      | Supervisor existence as a swappable seam.              | [`Liveness`], [`PidWatchdog`]       |
//! | **Configuration** | Pipe-delimited port parameters, typed.                 | [`Params`], [`Port`], [`PortStore`] |
//! | **Observability** | Broadcast events, non-blocking subscriber fan-out.     | [`Bus`], [`Event`], [`Subscribe`]   |
//! | **Errors**        | Setup vs sample vs runtime failures, typed.            | [`ConfigError`], [`SampleError`]    |
//!
//! ## Optional features
//! - `logging`: exports [`LogWriter`] and the [`logs`] module (date-keyed
//!   rolling file sink per protocol).
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use pollvisor::{
//!     DataSource, MemoryStore, Port, SampleError, SamplerFn, Tag, Worker, WorkerArgs,
//! };
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut store = MemoryStore::new();
//!     store.insert(Port {
//!         id: 3,
//!         protocol: "modbus_rtu".into(),
//!         address: "/dev/ttyS0".into(),
//!         params: "baud=9600|slave_id=2".into(),
//!         sources: vec![DataSource::new(
//!             "plc-a",
//!             vec![Tag::new(1, "level", "40001", Duration::from_secs(5))],
//!         )],
//!     });
//!
//!     let args = WorkerArgs::new(3).with_interval(Some(Duration::from_secs(1)));
//!     let mut worker = Worker::bootstrap(&store, &args, vec![])?;
//!
//!     let plan = worker.plans.remove(0);
//!     let mut sampler = SamplerFn::new("modbus_rtu", move |cycle, _ctx| {
//!         let due: Vec<String> = plan.due(cycle).map(|t| t.name.clone()).collect();
//!         async move {
//!             // acquire `due` from the device, compare via ValueCache, report...
//!             let _ = due;
//!             Ok::<_, SampleError>(())
//!         }
//!     });
//!
//!     // Stop immediately so the example terminates.
//!     worker.scheduler.cancellation_token().cancel();
//!     worker.scheduler.run(&mut sampler).await?;
//!     Ok(())
//! }
//! ```

mod config;
mod core;
mod error;
mod events;
mod polling;
mod ports;
mod subscribers;

// ---- Public re-exports ----

pub use config::Config;
pub use core::{
    Liveness, PidWatchdog, Sampler, SamplerFn, Scheduler, SchedulerState, StopReason, Worker,
    WorkerArgs,
};
pub use error::{ConfigError, RuntimeError, SampleError};
pub use events::{Bus, Event, EventKind};
pub use polling::{Cadence, SamplePlan, ScheduledTag, ValueCache};
pub use ports::{DataSource, MemoryStore, Params, Port, PortStore, Tag, Value};
pub use subscribers::{Subscribe, SubscriberSet};

// Optional: date-keyed file logging for workers.
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub mod logs;
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
