//! Recording test doubles
//!
//! Pins and timers that append every transition to a shared log, so tests
//! can assert on the exact order of hardware writes without real hardware.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::gpio::OutputPin;
use crate::timer::PeriodicTimer;

/// One recorded pin write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinEvent {
    /// Name given to the pin at creation
    pub pin: &'static str,
    /// Level written
    pub high: bool,
}

/// Shared, ordered log of pin writes across several pins
#[derive(Debug, Clone, Default)]
pub struct PinLog {
    events: Rc<RefCell<Vec<PinEvent>>>,
}

impl PinLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pin that records into this log
    pub fn pin(&self, name: &'static str) -> RecordingPin {
        RecordingPin {
            name,
            high: false,
            log: self.clone(),
        }
    }

    /// Snapshot of all events so far
    pub fn events(&self) -> Vec<PinEvent> {
        self.events.borrow().clone()
    }

    /// Events for a single pin, in order
    pub fn events_for(&self, name: &str) -> Vec<bool> {
        self.events
            .borrow()
            .iter()
            .filter(|e| e.pin == name)
            .map(|e| e.high)
            .collect()
    }

    /// Forget everything recorded so far
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    /// Number of events recorded
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    fn record(&self, pin: &'static str, high: bool) {
        self.events.borrow_mut().push(PinEvent { pin, high });
    }
}

/// Output pin that records its writes into a [`PinLog`]
#[derive(Debug)]
pub struct RecordingPin {
    name: &'static str,
    high: bool,
    log: PinLog,
}

impl RecordingPin {
    /// Current level of the pin
    pub fn is_high(&self) -> bool {
        self.high
    }

    /// Name given at creation
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl OutputPin for RecordingPin {
    fn set_high(&mut self) {
        self.high = true;
        self.log.record(self.name, true);
    }

    fn set_low(&mut self) {
        self.high = false;
        self.log.record(self.name, false);
    }
}

/// One recorded timer operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Timer armed with the given interval
    Armed(u16),
    /// Timer disarmed
    Disarmed,
}

/// Periodic timer that only records arm/disarm calls
///
/// Tests deliver ticks by calling the display's tick method directly.
#[derive(Debug, Clone, Default)]
pub struct MockTimer {
    events: Rc<RefCell<Vec<TimerEvent>>>,
    interval_ms: Rc<Cell<Option<u16>>>,
}

impl MockTimer {
    /// Create a disarmed timer
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded operations so far
    ///
    /// Clones share their state, so a test can keep one while the display
    /// owns the other.
    pub fn events(&self) -> Vec<TimerEvent> {
        self.events.borrow().clone()
    }

    /// Interval of the currently armed timer
    pub fn interval_ms(&self) -> Option<u16> {
        self.interval_ms.get()
    }
}

impl PeriodicTimer for MockTimer {
    fn arm(&mut self, interval_ms: u16) {
        self.interval_ms.set(Some(interval_ms));
        self.events.borrow_mut().push(TimerEvent::Armed(interval_ms));
    }

    fn disarm(&mut self) {
        self.interval_ms.set(None);
        self.events.borrow_mut().push(TimerEvent::Disarmed);
    }

    fn is_armed(&self) -> bool {
        self.interval_ms.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_keeps_write_order_across_pins() {
        let log = PinLog::new();
        let mut data = log.pin("data");
        let mut clock = log.pin("clock");

        data.set_high();
        clock.pulse();

        assert_eq!(
            log.events(),
            vec![
                PinEvent { pin: "data", high: true },
                PinEvent { pin: "clock", high: false },
                PinEvent { pin: "clock", high: true },
                PinEvent { pin: "clock", high: false },
            ]
        );
        assert_eq!(log.events_for("clock"), vec![false, true, false]);
        assert!(data.is_high());
        assert!(!clock.is_high());
    }

    #[test]
    fn test_timer_rearm_records_disarm_then_arm() {
        let mut timer = MockTimer::new();
        let observer = timer.clone();

        timer.arm(14);
        timer.rearm(7);

        assert!(observer.is_armed());
        assert_eq!(observer.interval_ms(), Some(7));
        assert_eq!(
            observer.events(),
            vec![
                TimerEvent::Armed(14),
                TimerEvent::Disarmed,
                TimerEvent::Armed(7),
            ]
        );
    }
}
