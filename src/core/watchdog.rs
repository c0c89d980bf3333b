//! # Supervisor liveness checking.
//!
//! Workers are children of a supervising process; when it disappears they
//! must stop rather than keep polling into the void. [`Liveness`] is the
//! seam the scheduler consults once per cycle, and [`PidWatchdog`] is the
//! host-process-table implementation.
//!
//! The check is a liveness *hint*, not a guarantee: the operating system
//! may reuse a process id after the supervisor exits, in which case the
//! watchdog keeps answering "alive" for an unrelated process. That false
//! positive is accepted. Deployments that need a stronger signal can
//! substitute a heartbeat-based implementation behind the same trait.

/// Answers whether the supervising process still exists.
pub trait Liveness: Send + Sync {
    /// True while the worker should keep running.
    fn is_alive(&self) -> bool;

    /// Identity being watched, for diagnostics. `None` = unsupervised.
    fn watched_pid(&self) -> Option<u32> {
        None
    }
}

/// Process-table watchdog keyed by pid.
///
/// With no pid configured, the worker is unsupervised and the watchdog
/// always answers alive.
#[derive(Clone, Copy, Debug)]
pub struct PidWatchdog {
    pid: Option<u32>,
}

impl PidWatchdog {
    /// Creates a watchdog for the given supervisor pid, if any.
    pub fn new(pid: Option<u32>) -> Self {
        Self { pid }
    }

    #[cfg(unix)]
    fn pid_exists(pid: u32) -> bool {
        std::path::Path::new(&format!("/proc/{pid}")).exists()
    }

    // Without a procfs there is no portable cheap existence check; treat
    // the supervisor as alive and rely on explicit cancellation instead.
    #[cfg(not(unix))]
    fn pid_exists(_pid: u32) -> bool {
        true
    }
}

impl Liveness for PidWatchdog {
    fn is_alive(&self) -> bool {
        match self.pid {
            None => true,
            Some(pid) => Self::pid_exists(pid),
        }
    }

    fn watched_pid(&self) -> Option<u32> {
        self.pid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupervised_is_always_alive() {
        assert!(PidWatchdog::new(None).is_alive());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_own_pid_is_alive() {
        let watchdog = PidWatchdog::new(Some(std::process::id()));
        assert!(watchdog.is_alive());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_absent_pid_is_dead() {
        // Far above the default pid_max; no live process can own it.
        let watchdog = PidWatchdog::new(Some(u32::MAX));
        assert!(!watchdog.is_alive());
    }
}
