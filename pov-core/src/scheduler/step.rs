//! Per-tick work
//!
//! Order within one tick:
//!
//! 1. Re-evaluate the front feed state against the buffer
//! 2. Compose the output byte from the front and back columns and show it
//! 3. Advance the motor phase in the configured direction
//! 4. Advance both sub-step counters
//! 5. On a front wrap, move the front cursor (or enter underrun)
//! 6. On a back wrap, move the back cursor (or enter underrun)
//!
//! The back cursor follows the front cursor instead of the buffer: on a back
//! wrap it steps onto the slot the front cursor held `column_offset` ticks
//! earlier, and it stays put while the front side is in underrun. With
//! `column_offset == steps_per_pixel` both sides wrap on the same tick, so
//! the back cursor targets the front position from before this tick's front
//! advance.
//! 7. Drive the coils if the front side is streaming
//! 8. Pick up a pending tick interval
//!
//! The LEDs are latched before the coils change. Nothing here blocks or
//! loops over the buffer, so a tick takes constant time.

use crate::buffer::{ColumnReader, DEFAULT_CAPACITY};
use crate::config::{DisplayConfig, Settings};
use crate::motor::{CoilPattern, MotorState};
use crate::render::RenderState;
use crate::state::{FeedEvent, FeedState, Side};
use crate::traits::{CoilDriver, ColumnSink};

use super::StepDelay;

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// Byte shown on the LEDs
    pub output: u8,
    /// Pattern written to the coils, `None` if they were left alone
    pub coils: Option<CoilPattern>,
    /// Front feed state after the tick
    pub front: FeedState,
    /// Back feed state after the tick
    pub back: FeedState,
    /// Front cursor moved to the next column
    pub front_advanced: bool,
    /// Back cursor moved to the next column
    pub back_advanced: bool,
    /// Interval taken from the configuration port; the timer must be
    /// rearmed with it before the next tick
    pub new_delay: Option<StepDelay>,
}

impl TickReport {
    /// Feed state of one side after the tick
    pub fn state(&self, side: Side) -> FeedState {
        match side {
            Side::Front => self.front,
            Side::Back => self.back,
        }
    }
}

/// Tick handler state
///
/// Owns the read side of the column buffer together with the motor and
/// sweep counters. All fields are touched from the tick context only.
pub struct StepScheduler<'a, const N: usize = DEFAULT_CAPACITY> {
    reader: ColumnReader<'a, N>,
    settings: &'a Settings,
    render: RenderState,
    motor: MotorState,
    front: FeedState,
    back: FeedState,
    back_lag: usize,
}

impl<'a, const N: usize> StepScheduler<'a, N> {
    /// Create a scheduler for a validated configuration
    pub fn new(
        mut reader: ColumnReader<'a, N>,
        settings: &'a Settings,
        config: &DisplayConfig,
    ) -> Self {
        let back_lag = config.back_lag();
        reader.trail_back(back_lag);
        Self {
            reader,
            settings,
            render: RenderState::new(config.steps_per_pixel, config.column_offset),
            motor: MotorState::new(),
            front: FeedState::Idle,
            back: FeedState::Idle,
            back_lag,
        }
    }

    /// Feed state of one side
    pub fn state(&self, side: Side) -> FeedState {
        match side {
            Side::Front => self.front,
            Side::Back => self.back,
        }
    }

    /// Sweep counters
    pub fn render(&self) -> &RenderState {
        &self.render
    }

    /// Motor phase
    pub fn motor(&self) -> &MotorState {
        &self.motor
    }

    /// Buffer cursors
    pub fn reader(&self) -> &ColumnReader<'a, N> {
        &self.reader
    }

    /// Run one tick
    pub fn tick<L, C>(&mut self, leds: &mut L, coils: &mut C) -> TickReport
    where
        L: ColumnSink,
        C: CoilDriver,
    {
        self.refresh_front();

        let output = self.render.compose(
            self.reader.front_column(),
            self.reader.back_column(),
            self.settings.highlighted_steps(),
        );
        leds.show(output);

        self.motor.advance(self.settings.direction());

        let wrap = self.render.advance();
        let front_before = self.reader.front();

        let mut front_advanced = false;
        if wrap.front {
            front_advanced = self.reader.advance_front();
            self.front = self.front.transition(Self::event(front_advanced));
        }

        let mut back_advanced = false;
        if wrap.back {
            let limit = if wrap.front && self.back_lag > 0 {
                front_before
            } else {
                self.reader.front()
            };
            back_advanced = !self.front.is_underrun() && self.reader.advance_back(limit);
            self.back = self.back.transition(Self::event(back_advanced));
        }

        let mut driven = None;
        if self.front.is_streaming() {
            let pattern = self.motor.pattern();
            coils.energize(pattern);
            driven = Some(pattern);
        }

        TickReport {
            output,
            coils: driven,
            front: self.front,
            back: self.back,
            front_advanced,
            back_advanced,
            new_delay: self.settings.take_pending_delay(),
        }
    }

    /// Leave idle or underrun once the producer has caught up
    fn refresh_front(&mut self) {
        let available = match self.front {
            FeedState::Idle => self.reader.has_current(),
            FeedState::Underrun => self.reader.has_next(),
            FeedState::Streaming => false,
        };
        if available {
            self.front = self.front.transition(FeedEvent::DataAvailable);
        }
    }

    fn event(advanced: bool) -> FeedEvent {
        if advanced {
            FeedEvent::DataAvailable
        } else {
            FeedEvent::Exhausted
        }
    }
}
