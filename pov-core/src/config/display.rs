//! Display configuration
//!
//! Geometry of the blade and initial motion settings. Validated once when
//! the display is constructed; runtime changes go through
//! [`ConfigurationPort`](super::ConfigurationPort).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::motor::Direction;
use crate::scheduler::StepDelay;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `steps_per_pixel` must be at least 1
    ZeroStepsPerPixel,
    /// `column_offset` larger than `steps_per_pixel`
    OffsetTooLarge,
    /// Speed is not a finite positive number
    InvalidSpeed,
    /// Speed so high the tick interval truncates to 0 ms
    SpeedTooHigh,
    /// Speed so low the tick interval does not fit in 16 bits
    SpeedTooLow,
}

/// Display geometry and motion settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct DisplayConfig {
    /// Motor half-steps per image pixel
    pub steps_per_pixel: u8,
    /// Sub-steps per pixel during which an LED is lit (clamped)
    pub highlighted_steps: u8,
    /// Half-steps between the front and back LED columns
    pub column_offset: u8,
    /// Blade speed in rotations per minute
    pub rpm: f32,
    /// Blade rotation direction
    pub direction: Direction,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            steps_per_pixel: 26,
            highlighted_steps: 8,
            column_offset: 0,
            rpm: 2.0,
            direction: Direction::Clockwise,
        }
    }
}

impl DisplayConfig {
    /// Check the configuration and compute the initial tick interval
    pub fn validate(&self) -> Result<StepDelay, ConfigError> {
        if self.steps_per_pixel == 0 {
            return Err(ConfigError::ZeroStepsPerPixel);
        }
        // The back cursor may trail the front by one slot at most; that is
        // the slot the ring keeps out of the producer's reach.
        if self.column_offset > self.steps_per_pixel {
            return Err(ConfigError::OffsetTooLarge);
        }
        StepDelay::from_rpm(self.rpm)
    }

    /// Highlighted steps after clamping to `steps_per_pixel`
    pub fn clamped_highlight(&self) -> u8 {
        self.highlighted_steps.min(self.steps_per_pixel)
    }

    /// Whole buffer slots the back cursor trails the front cursor by
    ///
    /// `ceil(column_offset / steps_per_pixel)`; 0 or 1 once validated.
    pub fn back_lag(&self) -> usize {
        let spp = self.steps_per_pixel.max(1) as usize;
        (self.column_offset as usize + spp - 1) / spp
    }

    /// Initial back cursor index in a ring of `capacity` slots
    pub fn back_start(&self, capacity: usize) -> usize {
        (capacity - self.back_lag() % capacity) % capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = DisplayConfig::default();
        // 1000 / (2 * 4096 / 60) = 7.32 ms
        assert_eq!(config.validate().unwrap().as_millis(), 7);
    }

    #[test]
    fn test_zero_steps_per_pixel_rejected() {
        let config = DisplayConfig {
            steps_per_pixel: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroStepsPerPixel));
    }

    #[test]
    fn test_offset_limit() {
        let mut config = DisplayConfig {
            column_offset: 26,
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        config.column_offset = 27;
        assert_eq!(config.validate(), Err(ConfigError::OffsetTooLarge));
    }

    #[test]
    fn test_speed_errors_propagate() {
        let config = DisplayConfig {
            rpm: -1.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidSpeed));
    }

    #[test]
    fn test_back_start_for_offsets() {
        let mut config = DisplayConfig::default();
        assert_eq!(config.back_lag(), 0);
        assert_eq!(config.back_start(16), 0);

        config.column_offset = 3;
        assert_eq!(config.back_lag(), 1);
        assert_eq!(config.back_start(16), 15);

        config.column_offset = 26;
        assert_eq!(config.back_start(16), 15);
    }

    #[test]
    fn test_highlight_clamped() {
        let config = DisplayConfig {
            highlighted_steps: 200,
            ..Default::default()
        };
        assert_eq!(config.clamped_highlight(), 26);
    }
}
