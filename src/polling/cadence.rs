//! # Due-cycle cadence of one tag.
//!
//! [`Cadence`] turns a tag's poll rate and the loop interval into the
//! divisor used by the due condition `cycle % divisor == 0`. The ratio is
//! validated once, at configuration time:
//!
//! - a ratio below 1 (tag polls faster than the loop runs) is rejected —
//!   it must not degenerate into "always due" or a division by zero;
//! - a ratio that is not an integer (within f64 tolerance) is rejected —
//!   due cycles would otherwise depend on truncation artifacts.
//!
//! With exact multiples enforced, rounding the ratio is equivalent to the
//! truncating division it replaces, but immune to representation error
//! (0.3 / 0.1 is not exactly 3.0 in binary floating point).

use std::time::Duration;

use crate::error::ConfigError;

/// Relative tolerance when checking that `poll_rate / interval` is whole.
const RATIO_TOLERANCE: f64 = 1e-9;

/// Validated due-cycle divisor of one tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cadence {
    divisor: u64,
}

impl Cadence {
    /// Computes and validates the cadence for `poll_rate` under `interval`.
    ///
    /// `tag` is used only for diagnostics.
    pub fn new(tag: &str, poll_rate: Duration, interval: Duration) -> Result<Self, ConfigError> {
        if interval.is_zero() {
            return Err(ConfigError::InvalidInterval { interval });
        }

        let ratio = poll_rate.as_secs_f64() / interval.as_secs_f64();

        // Classify on the raw ratio: anything below 1 is "faster than the
        // loop", even when it would round up to 1.
        if ratio < 1.0 - RATIO_TOLERANCE {
            return Err(ConfigError::PollRateTooFast {
                tag: tag.to_string(),
                poll_rate,
                interval,
            });
        }

        let rounded = ratio.round();
        if (ratio - rounded).abs() > RATIO_TOLERANCE * rounded {
            return Err(ConfigError::PollRateNotMultiple {
                tag: tag.to_string(),
                poll_rate,
                interval,
            });
        }

        Ok(Self {
            divisor: rounded as u64,
        })
    }

    /// True when a tag with this cadence must be sampled on `cycle`.
    ///
    /// Cycles count from 1, so a divisor of 5 is due at 5, 10, 15, …
    #[inline]
    pub fn is_due(&self, cycle: u64) -> bool {
        cycle % self.divisor == 0
    }

    /// The number of cycles between two due samples.
    #[inline]
    pub fn divisor(&self) -> u64 {
        self.divisor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_periodicity_from_cycle_one() {
        let cadence = Cadence::new("t", Duration::from_secs(5), Duration::from_secs(1)).unwrap();
        let due: Vec<u64> = (1..=16).filter(|&c| cadence.is_due(c)).collect();
        assert_eq!(due, [5, 10, 15]);
    }

    #[test]
    fn test_equal_rate_is_due_every_cycle() {
        let cadence = Cadence::new("t", Duration::from_secs(1), Duration::from_secs(1)).unwrap();
        assert!((1..=4).all(|c| cadence.is_due(c)));
    }

    #[test]
    fn test_fractional_interval_multiple() {
        // 0.3s poll rate over a 0.1s loop: exactly 3 cycles despite the
        // ratio not being exactly 3.0 in binary floating point.
        let cadence =
            Cadence::new("t", Duration::from_secs_f64(0.3), Duration::from_secs_f64(0.1)).unwrap();
        assert_eq!(cadence.divisor(), 3);
    }

    #[test]
    fn test_sub_interval_rate_rejected() {
        let err =
            Cadence::new("fast", Duration::from_millis(200), Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, ConfigError::PollRateTooFast { tag, .. } if tag == "fast"));
    }

    #[test]
    fn test_sub_interval_rate_rounding_up_is_still_too_fast() {
        // 0.7 rounds to 1 but the tag still polls faster than the loop.
        let err =
            Cadence::new("fast", Duration::from_millis(700), Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, ConfigError::PollRateTooFast { .. }));
    }

    #[test]
    fn test_non_multiple_rejected() {
        let err =
            Cadence::new("odd", Duration::from_millis(2500), Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, ConfigError::PollRateNotMultiple { tag, .. } if tag == "odd"));
    }

    #[test]
    fn test_zero_interval_rejected() {
        assert!(matches!(
            Cadence::new("t", Duration::from_secs(5), Duration::ZERO),
            Err(ConfigError::InvalidInterval { .. })
        ));
    }
}
