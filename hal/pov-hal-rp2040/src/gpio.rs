//! GPIO outputs
//!
//! embassy-rp outputs implement embedded-hal with an `Infallible` error,
//! so the generic adapter from pov-hal covers them.

use embassy_rp::gpio::{Level, Output, Pin};
use embassy_rp::Peri;
use pov_hal::HalPin;

/// Display output pin on the RP2040
pub type Rp2040Output<'d> = HalPin<Output<'d>>;

/// Configure `pin` as a push-pull output, initially low
pub fn output<'d>(pin: Peri<'d, impl Pin>) -> Rp2040Output<'d> {
    HalPin::new(Output::new(pin, Level::Low))
}
