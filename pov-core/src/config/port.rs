//! Runtime settings shared with the tick handler
//!
//! Every setting is a single atomic value with exactly one writer, so only
//! loads and stores are needed. The tick interval is double-buffered:
//! [`ConfigurationPort::set_speed`] publishes a pending interval and bumps a
//! request counter; the tick handler applies it after finishing a tick and
//! echoes the counter back. A tick therefore never races a half-updated
//! timer.

use portable_atomic::{AtomicI8, AtomicU16, AtomicU8, Ordering};

use super::display::{ConfigError, DisplayConfig};
use crate::motor::Direction;
use crate::scheduler::StepDelay;

/// Settings read by the tick handler
pub struct Settings {
    steps_per_pixel: u8,
    direction: AtomicI8,
    highlighted_steps: AtomicU8,
    /// Written by the tick handler only
    step_delay_ms: AtomicU16,
    pending_delay_ms: AtomicU16,
    speed_requests: AtomicU16,
    /// Written by the tick handler only
    speed_applied: AtomicU16,
}

impl Settings {
    /// Create settings from a validated configuration
    pub fn new(config: &DisplayConfig, delay: StepDelay) -> Self {
        Self {
            steps_per_pixel: config.steps_per_pixel,
            direction: AtomicI8::new(config.direction.step()),
            highlighted_steps: AtomicU8::new(config.clamped_highlight()),
            step_delay_ms: AtomicU16::new(delay.as_millis()),
            pending_delay_ms: AtomicU16::new(delay.as_millis()),
            speed_requests: AtomicU16::new(0),
            speed_applied: AtomicU16::new(0),
        }
    }

    /// Current rotation direction
    pub fn direction(&self) -> Direction {
        Direction::from_step(self.direction.load(Ordering::Relaxed)).unwrap_or_default()
    }

    /// Current (clamped) highlighted step count
    pub fn highlighted_steps(&self) -> u8 {
        self.highlighted_steps.load(Ordering::Relaxed)
    }

    /// Interval the timer is currently armed with
    pub fn step_delay(&self) -> StepDelay {
        StepDelay::from_millis(self.step_delay_ms.load(Ordering::Relaxed))
            .unwrap_or(StepDelay::MIN)
    }

    /// Take the pending interval, if any, and make it current
    ///
    /// Called by the tick handler at a tick boundary only.
    pub(crate) fn take_pending_delay(&self) -> Option<StepDelay> {
        let requests = self.speed_requests.load(Ordering::Acquire);
        if requests == self.speed_applied.load(Ordering::Relaxed) {
            return None;
        }

        let delay = StepDelay::from_millis(self.pending_delay_ms.load(Ordering::Relaxed))?;
        self.step_delay_ms.store(delay.as_millis(), Ordering::Relaxed);
        self.speed_applied.store(requests, Ordering::Release);
        Some(delay)
    }
}

/// Application-side handle for changing settings while running
pub struct ConfigurationPort<'a> {
    settings: &'a Settings,
}

impl<'a> ConfigurationPort<'a> {
    pub(crate) fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Change the rotation direction, effective from the next tick
    pub fn set_rotation_direction(&mut self, direction: Direction) {
        self.settings
            .direction
            .store(direction.step(), Ordering::Relaxed);
    }

    /// Set the lit sub-steps per pixel
    ///
    /// Requests above `steps_per_pixel` are clamped. Returns the stored value.
    pub fn set_highlighted_steps(&mut self, steps: u8) -> u8 {
        let clamped = steps.min(self.settings.steps_per_pixel);
        self.settings
            .highlighted_steps
            .store(clamped, Ordering::Relaxed);
        clamped
    }

    /// Change the blade speed
    ///
    /// The new interval is applied at the end of the next tick. On error the
    /// current timing is left untouched.
    pub fn set_speed(&mut self, rpm: f32) -> Result<StepDelay, ConfigError> {
        let delay = StepDelay::from_rpm(rpm)?;
        self.settings
            .pending_delay_ms
            .store(delay.as_millis(), Ordering::Relaxed);
        let requests = self.settings.speed_requests.load(Ordering::Relaxed);
        self.settings
            .speed_requests
            .store(requests.wrapping_add(1), Ordering::Release);
        Ok(delay)
    }

    /// Current rotation direction
    pub fn direction(&self) -> Direction {
        self.settings.direction()
    }

    /// Current highlighted step count
    pub fn highlighted_steps(&self) -> u8 {
        self.settings.highlighted_steps()
    }

    /// Interval the timer is currently running at
    pub fn step_delay(&self) -> StepDelay {
        self.settings.step_delay()
    }

    /// Check if a speed change is waiting for the next tick boundary
    pub fn speed_change_pending(&self) -> bool {
        self.settings.speed_requests.load(Ordering::Relaxed)
            != self.settings.speed_applied.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        let config = DisplayConfig::default();
        let delay = config.validate().unwrap();
        Settings::new(&config, delay)
    }

    #[test]
    fn test_highlight_clamped_at_set_time() {
        let settings = settings();
        let mut port = ConfigurationPort::new(&settings);

        assert_eq!(port.set_highlighted_steps(10), 10);
        assert_eq!(port.set_highlighted_steps(255), 26);
        assert_eq!(settings.highlighted_steps(), 26);
    }

    #[test]
    fn test_direction_change() {
        let settings = settings();
        let mut port = ConfigurationPort::new(&settings);

        port.set_rotation_direction(Direction::CounterClockwise);
        assert_eq!(settings.direction(), Direction::CounterClockwise);
        assert_eq!(port.direction(), Direction::CounterClockwise);
    }

    #[test]
    fn test_speed_is_deferred_to_tick_boundary() {
        let settings = settings();
        let mut port = ConfigurationPort::new(&settings);

        let delay = port.set_speed(1.0).unwrap();
        assert_eq!(delay.as_millis(), 14);
        assert!(port.speed_change_pending());
        assert_eq!(port.step_delay().as_millis(), 7);

        assert_eq!(settings.take_pending_delay(), Some(delay));
        assert!(!port.speed_change_pending());
        assert_eq!(port.step_delay().as_millis(), 14);
        assert_eq!(settings.take_pending_delay(), None);
    }

    #[test]
    fn test_invalid_speed_leaves_timing() {
        let settings = settings();
        let mut port = ConfigurationPort::new(&settings);

        assert_eq!(port.set_speed(0.0), Err(ConfigError::InvalidSpeed));
        assert!(!port.speed_change_pending());
        assert_eq!(port.step_delay().as_millis(), 7);
    }

    #[test]
    fn test_last_speed_wins() {
        let settings = settings();
        let mut port = ConfigurationPort::new(&settings);

        port.set_speed(1.0).unwrap();
        port.set_speed(0.5).unwrap();

        assert_eq!(
            settings.take_pending_delay().map(StepDelay::as_millis),
            Some(29)
        );
    }
}
