//! Tick interval derived from blade speed

use crate::config::ConfigError;
use crate::motor::STEPS_PER_ROTATION;

/// Interval between ticks, in whole milliseconds (never zero)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepDelay(u16);

impl StepDelay {
    /// Shortest representable interval
    pub const MIN: Self = Self(1);

    /// Compute the interval for a blade speed
    ///
    /// `1000 / (rpm * 4096 / 60)` milliseconds, truncated.
    pub fn from_rpm(rpm: f32) -> Result<Self, ConfigError> {
        if !rpm.is_finite() || rpm <= 0.0 {
            return Err(ConfigError::InvalidSpeed);
        }

        let steps_per_second = rpm * STEPS_PER_ROTATION as f32 / 60.0;
        let delay_ms = 1000.0 / steps_per_second;

        if delay_ms < 1.0 {
            return Err(ConfigError::SpeedTooHigh);
        }
        if delay_ms >= u16::MAX as f32 + 1.0 {
            return Err(ConfigError::SpeedTooLow);
        }

        Ok(Self(delay_ms as u16))
    }

    /// Build from a raw millisecond count; `None` for zero
    pub const fn from_millis(ms: u16) -> Option<Self> {
        if ms == 0 {
            None
        } else {
            Some(Self(ms))
        }
    }

    /// Interval in milliseconds
    pub const fn as_millis(self) -> u16 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_truncates() {
        // 1000 / 68.27 = 14.65
        assert_eq!(StepDelay::from_rpm(1.0).unwrap().as_millis(), 14);
        // 1000 / 34.13 = 29.30
        assert_eq!(StepDelay::from_rpm(0.5).unwrap().as_millis(), 29);
        // 1000 / 682.67 = 1.46
        assert_eq!(StepDelay::from_rpm(10.0).unwrap().as_millis(), 1);
    }

    #[test]
    fn test_rejects_non_positive_and_nan() {
        assert_eq!(StepDelay::from_rpm(0.0), Err(ConfigError::InvalidSpeed));
        assert_eq!(StepDelay::from_rpm(-3.0), Err(ConfigError::InvalidSpeed));
        assert_eq!(StepDelay::from_rpm(f32::NAN), Err(ConfigError::InvalidSpeed));
        assert_eq!(
            StepDelay::from_rpm(f32::INFINITY),
            Err(ConfigError::InvalidSpeed)
        );
    }

    #[test]
    fn test_range_limits() {
        // 1000 / 1024 < 1 ms
        assert_eq!(StepDelay::from_rpm(15.0), Err(ConfigError::SpeedTooHigh));
        assert_eq!(StepDelay::from_rpm(1.0e-6), Err(ConfigError::SpeedTooLow));
    }

    #[test]
    fn test_zero_millis_is_not_a_delay() {
        assert_eq!(StepDelay::from_millis(0), None);
        assert_eq!(StepDelay::from_millis(5).map(StepDelay::as_millis), Some(5));
    }
}
