//! Front/back sweep counters and output composition
//!
//! The blade carries two LED columns, A and B, offset both vertically and
//! along the direction of travel:
//!
//! ```text
//!   A B
//!   O
//!     O
//!   O
//!     O
//! ```
//!
//! Column B passes a given angle `column_offset` ticks after column A, so
//! its sub-step counter runs `column_offset` ticks behind. An offset of 0
//! means both columns sit on one line.

use crate::buffer::Column;

/// Output bits driven by the front LED column
pub const FRONT_MASK: u8 = 0b1010_1010;

/// Output bits driven by the back LED column
pub const BACK_MASK: u8 = 0b0101_0101;

/// Which sub-step counters wrapped to zero on the last advance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SweepWrap {
    /// Front pixel finished
    pub front: bool,
    /// Back pixel finished
    pub back: bool,
}

/// Sub-step position of both LED columns within their current pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderState {
    steps_per_pixel: u8,
    pixel_step: u8,
    back_step: u8,
}

impl RenderState {
    /// Create the counters for a display geometry
    ///
    /// `steps_per_pixel` must be non-zero; `column_offset` is taken modulo
    /// `steps_per_pixel`.
    pub fn new(steps_per_pixel: u8, column_offset: u8) -> Self {
        let spp = steps_per_pixel.max(1) as u16;
        let back_step = ((3 * spp - column_offset as u16 % spp) % spp) as u8;
        Self {
            steps_per_pixel: spp as u8,
            pixel_step: 0,
            back_step,
        }
    }

    /// Front column sub-step (0..steps_per_pixel)
    pub fn pixel_step(&self) -> u8 {
        self.pixel_step
    }

    /// Back column sub-step (0..steps_per_pixel)
    pub fn back_step(&self) -> u8 {
        self.back_step
    }

    /// Sub-steps per pixel
    pub fn steps_per_pixel(&self) -> u8 {
        self.steps_per_pixel
    }

    /// Build the output byte for this tick
    ///
    /// Each half is lit only while its sub-step is within the highlighted
    /// range, which sets the LED duty cycle per pixel.
    pub fn compose(&self, front: Column, back: Column, highlighted_steps: u8) -> u8 {
        let mut output = 0;
        if self.pixel_step <= highlighted_steps {
            output |= front & FRONT_MASK;
        }
        if self.back_step <= highlighted_steps {
            output |= back & BACK_MASK;
        }
        output
    }

    /// Advance both counters by one sub-step
    pub fn advance(&mut self) -> SweepWrap {
        self.pixel_step = (self.pixel_step + 1) % self.steps_per_pixel;
        self.back_step = (self.back_step + 1) % self.steps_per_pixel;
        SweepWrap {
            front: self.pixel_step == 0,
            back: self.back_step == 0,
        }
    }
}
