//! Runtime core: the cycle loop and its collaborators.
//!
//! Internal modules:
//! - [`scheduler`]: drives cycles, measures elapsed time, sleeps remainders;
//! - [`sampler`]: the injected sampling capability;
//! - [`watchdog`]: supervisor liveness checking;
//! - [`shutdown`]: cross-platform termination signal handling;
//! - [`worker`]: bootstrap wiring (port lookup → watchdog → plans → scheduler).

mod sampler;
mod scheduler;
mod shutdown;
mod watchdog;
mod worker;

pub use sampler::{Sampler, SamplerFn};
pub use scheduler::{Scheduler, SchedulerState, StopReason};
pub use watchdog::{Liveness, PidWatchdog};
pub use worker::{Worker, WorkerArgs};
