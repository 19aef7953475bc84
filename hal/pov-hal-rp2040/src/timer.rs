//! Periodic tick timer
//!
//! Wraps an embassy [`Ticker`]. The tick task awaits [`TickerTimer::next`]
//! and calls the display's tick handler each time it resolves; the ticker
//! schedules against absolute deadlines, so a late tick does not shift the
//! following ones.

use embassy_time::{Duration, Ticker};
use pov_hal::PeriodicTimer;

/// Millisecond tick source
#[derive(Default)]
pub struct TickerTimer {
    ticker: Option<Ticker>,
    interval_ms: u16,
}

impl TickerTimer {
    /// Create a disarmed timer
    pub const fn new() -> Self {
        Self {
            ticker: None,
            interval_ms: 0,
        }
    }

    /// Interval of the armed timer, in milliseconds
    pub fn interval_ms(&self) -> Option<u16> {
        self.ticker.as_ref().map(|_| self.interval_ms)
    }

    /// Wait for the next tick
    ///
    /// Never resolves while the timer is disarmed.
    pub async fn next(&mut self) {
        match self.ticker.as_mut() {
            Some(ticker) => ticker.next().await,
            None => core::future::pending::<()>().await,
        }
    }
}

impl PeriodicTimer for TickerTimer {
    fn arm(&mut self, interval_ms: u16) {
        self.interval_ms = interval_ms;
        self.ticker = Some(Ticker::every(Duration::from_millis(interval_ms as u64)));
        #[cfg(feature = "defmt")]
        defmt::debug!("tick timer armed at {} ms", interval_ms);
    }

    fn disarm(&mut self) {
        self.ticker = None;
    }

    fn is_armed(&self) -> bool {
        self.ticker.is_some()
    }
}
