//! Periodic timer abstraction
//!
//! The display is clocked by a single periodic tick. Platforms provide the
//! tick source; the owner of the timer value is the context the tick handler
//! runs against, so no global instance pointer is needed.

/// Periodic tick source with millisecond granularity
pub trait PeriodicTimer {
    /// Start (or restart) firing every `interval_ms` milliseconds
    fn arm(&mut self, interval_ms: u16);

    /// Stop firing
    ///
    /// After this returns no further tick is delivered.
    fn disarm(&mut self);

    /// Check if the timer is currently armed
    fn is_armed(&self) -> bool;

    /// Replace the interval of an armed timer
    fn rearm(&mut self, interval_ms: u16) {
        self.disarm();
        self.arm(interval_ms);
    }
}
