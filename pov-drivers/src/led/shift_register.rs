//! Latched serial-in shift register (74HC595 style)
//!
//! Eight LEDs hang off the register outputs. A byte is clocked in LSB
//! first and only appears on the outputs after the latch strobe, so the
//! LEDs never show a half-shifted value.
//!
//! ```text
//!  data   ─┤ b0 ├┤ b1 ├ ... ┤ b7 ├──────────
//!  clock  ──┐‾┌───┐‾┌── ... ──┐‾┌───────────
//!  latch  ─────────────────────────┐‾┌─────
//! ```
//!
//! The output enable line is active low and held low for as long as the
//! driver exists.

use pov_core::traits::ColumnSink;
use pov_hal::OutputPin;

/// Shift register LED driver
pub struct ShiftRegister<P> {
    data: P,
    clock: P,
    latch: P,
    enable: P,
    /// Byte currently on the outputs
    shown: u8,
}

impl<P: OutputPin> ShiftRegister<P> {
    /// Take the four control pins and enable the outputs
    pub fn new(mut data: P, mut clock: P, mut latch: P, mut enable: P) -> Self {
        data.set_low();
        clock.set_low();
        latch.set_low();
        enable.set_low();
        Self {
            data,
            clock,
            latch,
            enable,
            shown: 0,
        }
    }

    /// Clock a byte in, least significant bit first
    ///
    /// The outputs do not change until [`latch`](Self::latch).
    pub fn shift_out(&mut self, byte: u8) {
        for bit in 0..8 {
            self.data.set_state((byte >> bit) & 1 == 1);
            self.clock.pulse();
        }
    }

    /// Copy the shifted byte to the outputs
    pub fn latch(&mut self) {
        self.latch.pulse();
    }

    /// Shift and latch in one go
    pub fn write(&mut self, byte: u8) {
        self.shift_out(byte);
        self.latch();
        self.shown = byte;
    }

    /// Byte last latched onto the outputs
    pub fn shown(&self) -> u8 {
        self.shown
    }

    /// Turn every LED off
    pub fn blank(&mut self) {
        self.write(0);
    }

    /// Disable the outputs and hand the pins back
    pub fn release(mut self) -> [P; 4] {
        self.enable.set_high();
        [self.data, self.clock, self.latch, self.enable]
    }
}

impl<P: OutputPin> ColumnSink for ShiftRegister<P> {
    fn show(&mut self, bits: u8) {
        self.write(bits);
    }
}
