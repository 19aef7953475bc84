//! Display lifecycle
//!
//! [`DisplayShared`] holds everything both contexts touch: the column ring
//! and the runtime settings. Splitting it hands out one handle per role:
//!
//! ```text
//!                     DisplayShared
//!                          │ split()
//!        ┌─────────────────┼──────────────────┐
//!        ▼                 ▼                  ▼
//!  ColumnProducer   ConfigurationPort    DisplayFeed
//!  (application)      (application)          │
//!                                            ▼
//!                              PovDisplay (tick context)
//!                               leds + coils + timer
//! ```
//!
//! The tick task owns the [`PovDisplay`] and calls
//! [`PovDisplay::on_tick`] every time its timer fires.

use pov_hal::PeriodicTimer;

use crate::buffer::{ColumnBuffer, ColumnProducer, DEFAULT_CAPACITY};
use crate::config::{ConfigError, ConfigurationPort, DisplayConfig, Settings};
use crate::scheduler::{StepScheduler, TickReport};
use crate::traits::{CoilDriver, ColumnSink};

/// State shared between the application and tick contexts
pub struct DisplayShared<const N: usize = DEFAULT_CAPACITY> {
    buffer: ColumnBuffer<N>,
    settings: Settings,
    config: DisplayConfig,
}

impl<const N: usize> DisplayShared<N> {
    /// Validate `config` and allocate the column ring
    pub fn new(config: DisplayConfig) -> Result<Self, ConfigError> {
        let delay = config.validate()?;
        Ok(Self {
            buffer: ColumnBuffer::new(),
            settings: Settings::new(&config, delay),
            config,
        })
    }

    /// Configuration the display was created with
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Split into the producer, the configuration port and the tick feed
    pub fn split(
        &mut self,
    ) -> (ColumnProducer<'_, N>, ConfigurationPort<'_>, DisplayFeed<'_, N>) {
        let (producer, reader) = self.buffer.split();
        let settings = &self.settings;
        let feed = DisplayFeed {
            scheduler: StepScheduler::new(reader, settings, &self.config),
            settings,
        };
        (producer, ConfigurationPort::new(settings), feed)
    }
}

/// Tick-side handle, turned into a [`PovDisplay`] once the hardware exists
pub struct DisplayFeed<'a, const N: usize = DEFAULT_CAPACITY> {
    scheduler: StepScheduler<'a, N>,
    settings: &'a Settings,
}

/// Running display: scheduler plus the hardware it drives
///
/// Dropping it disarms the timer and releases the coils.
pub struct PovDisplay<'a, L, C, T, const N: usize = DEFAULT_CAPACITY>
where
    L: ColumnSink,
    C: CoilDriver,
    T: PeriodicTimer,
{
    scheduler: StepScheduler<'a, N>,
    settings: &'a Settings,
    leds: L,
    coils: C,
    timer: T,
}

impl<'a, L, C, T, const N: usize> PovDisplay<'a, L, C, T, N>
where
    L: ColumnSink,
    C: CoilDriver,
    T: PeriodicTimer,
{
    /// Attach the hardware; the timer is not armed yet
    pub fn new(feed: DisplayFeed<'a, N>, leds: L, coils: C, timer: T) -> Self {
        Self {
            scheduler: feed.scheduler,
            settings: feed.settings,
            leds,
            coils,
            timer,
        }
    }

    /// Arm the timer with the current interval
    pub fn start(&mut self) {
        self.timer.arm(self.settings.step_delay().as_millis());
    }

    /// Check if the timer is armed
    pub fn is_running(&self) -> bool {
        self.timer.is_armed()
    }

    /// Run one tick, then apply a pending interval change
    pub fn on_tick(&mut self) -> TickReport {
        let report = self.scheduler.tick(&mut self.leds, &mut self.coils);
        if let Some(delay) = report.new_delay {
            if self.timer.is_armed() {
                self.timer.rearm(delay.as_millis());
            }
        }
        report
    }

    /// Disarm the timer, then de-energize the coils
    pub fn stop(&mut self) {
        if self.timer.is_armed() {
            self.timer.disarm();
        }
        self.coils.release();
    }

    /// Tick handler state
    pub fn scheduler(&self) -> &StepScheduler<'a, N> {
        &self.scheduler
    }

    /// Timer driving the ticks
    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    /// LED output
    pub fn leds(&self) -> &L {
        &self.leds
    }

    /// Coil output
    pub fn coils(&self) -> &C {
        &self.coils
    }
}

impl<'a, L, C, T, const N: usize> Drop for PovDisplay<'a, L, C, T, N>
where
    L: ColumnSink,
    C: CoilDriver,
    T: PeriodicTimer,
{
    fn drop(&mut self) {
        self.stop();
    }
}
