//! Error types used by the pollvisor scheduler and samplers.
//!
//! This module defines three error enums:
//!
//! - [`ConfigError`] — fatal setup-time failures (bad port, bad parameters,
//!   bad poll rates). These are raised before the first cycle runs; the
//!   process entry point decides whether to exit or restart.
//! - [`SampleError`] — failures of a single sample step. Non-fatal: the
//!   scheduler logs them and proceeds to the next cycle.
//! - [`RuntimeError`] — failures of the scheduler plumbing itself (signal
//!   registration, misuse of a stopped scheduler).
//!
//! All three provide `as_label()` for stable snake_case identifiers in
//! logs/metrics.

use std::time::Duration;
use thiserror::Error;

/// # Errors raised while configuring a worker.
///
/// Every variant is fatal at setup time: nothing is partially scheduled, and
/// the caller gets a diagnostic naming the offending port, parameter or tag.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The port lookup collaborator has no record for the requested id.
    #[error("cannot find port with id {id}")]
    PortNotFound {
        /// Identifier supplied at process start.
        id: u64,
    },

    /// A required key was absent from the port's parameter string.
    #[error("missing required parameter \"{param}\" for port {port}")]
    MissingParameter {
        /// Name of the missing key.
        param: String,
        /// Port being configured.
        port: u64,
    },

    /// The loop interval is zero (or otherwise unusable).
    #[error("loop interval must be positive, got {interval:?}")]
    InvalidInterval {
        /// The rejected interval.
        interval: Duration,
    },

    /// A tag polls faster than the loop runs (`poll_rate / interval < 1`).
    #[error("tag \"{tag}\": poll rate {poll_rate:?} is faster than the loop interval {interval:?}")]
    PollRateTooFast {
        /// Name of the offending tag.
        tag: String,
        /// Configured poll rate.
        poll_rate: Duration,
        /// Configured loop interval.
        interval: Duration,
    },

    /// A tag's poll rate is not an integer multiple of the loop interval, so
    /// its due cycles would be non-deterministic.
    #[error("tag \"{tag}\": poll rate {poll_rate:?} is not a multiple of the loop interval {interval:?}")]
    PollRateNotMultiple {
        /// Name of the offending tag.
        tag: String,
        /// Configured poll rate.
        poll_rate: Duration,
        /// Configured loop interval.
        interval: Duration,
    },
}

impl ConfigError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            ConfigError::PortNotFound { .. } => "config_port_not_found",
            ConfigError::MissingParameter { .. } => "config_missing_parameter",
            ConfigError::InvalidInterval { .. } => "config_invalid_interval",
            ConfigError::PollRateTooFast { .. } => "config_poll_rate_too_fast",
            ConfigError::PollRateNotMultiple { .. } => "config_poll_rate_not_multiple",
        }
    }
}

/// # Errors produced by a sample step.
///
/// Acquisition failures are expected operational noise for a long-lived
/// worker (a device stops answering, a frame is garbled). The scheduler
/// treats them as non-fatal: log, publish, continue.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum SampleError {
    /// The device or channel did not deliver usable readings this cycle.
    #[error("acquisition failed: {error}")]
    Acquisition {
        /// The underlying error message.
        error: String,
    },

    /// The step observed cancellation and exited early.
    #[error("sample step cancelled")]
    Canceled,
}

impl SampleError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            SampleError::Acquisition { .. } => "sample_acquisition_failed",
            SampleError::Canceled => "sample_canceled",
        }
    }
}

/// # Errors raised by the scheduler runtime itself.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// OS signal handlers could not be installed.
    #[error("failed to install signal handlers: {source}")]
    SignalSetup {
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// `run()` was called on a scheduler that already reached its terminal
    /// state.
    #[error("scheduler already stopped; the stopped state is terminal")]
    Terminated,
}

impl RuntimeError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            RuntimeError::SignalSetup { .. } => "runtime_signal_setup",
            RuntimeError::Terminated => "runtime_terminated",
        }
    }
}
