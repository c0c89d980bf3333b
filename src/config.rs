//! # Global scheduler configuration.
//!
//! Provides [`Config`], the centralized settings for one worker's scheduler.
//!
//! ## Sentinel values
//! - `interval = None` → the sample step owns its own endless loop; the
//!   scheduler invokes it exactly once and never sleeps.
//! - `bus_capacity` is clamped to a minimum of 1 by the bus.

use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for the scheduler of one worker process.
///
/// ## Field semantics
/// - `interval`: length of every loop cycle. Fractional seconds are welcome
///   (`Duration::from_secs_f64(0.25)`). `None` hands the endless loop to the
///   sample step itself.
/// - `bus_capacity`: ring buffer size of the event broadcast channel. Slow
///   subscribers that lag further than this skip the oldest events.
#[derive(Clone, Debug)]
pub struct Config {
    /// Length of one loop cycle; `None` = the sample step loops internally.
    pub interval: Option<Duration>,
    /// Capacity of the event bus broadcast channel.
    pub bus_capacity: usize,
}

impl Config {
    /// Validates the configuration before any scheduling starts.
    ///
    /// A configured interval must be positive: a zero interval would make
    /// every due-cycle divisor a division by zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(interval) = self.interval {
            if interval.is_zero() {
                return Err(ConfigError::InvalidInterval { interval });
            }
        }
        Ok(())
    }

    /// Returns a bus capacity clamped to a minimum of 1.
    #[inline]
    pub fn bus_capacity_clamped(&self) -> usize {
        self.bus_capacity.max(1)
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `interval = 1s`
    /// - `bus_capacity = 256`
    fn default() -> Self {
        Self {
            interval: Some(Duration::from_secs(1)),
            bus_capacity: 256,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_zero_interval_rejected() {
        let cfg = Config {
            interval: Some(Duration::ZERO),
            ..Config::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidInterval { .. })
        ));
    }

    #[test]
    fn test_absent_interval_is_valid() {
        let cfg = Config {
            interval: None,
            ..Config::default()
        };
        assert!(cfg.validate().is_ok());
    }
}
