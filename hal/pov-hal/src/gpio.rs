//! GPIO pin abstractions
//!
//! Provides the digital output trait used by the LED and coil drivers,
//! plus an adapter for any infallible embedded-hal output pin.

use core::convert::Infallible;

/// Digital output pin
///
/// Writes are infallible: a tick handler has no way to recover from a
/// failed pin write, so backends that can fail are not accepted.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Drive a low→high→low pulse
    ///
    /// Used for shift register clock and latch strobes.
    fn pulse(&mut self) {
        self.set_low();
        self.set_high();
        self.set_low();
    }
}

/// Adapter from an embedded-hal 1.0 output pin
///
/// Chip HALs (embassy-rp, rp2040-hal, ...) already implement embedded-hal
/// with `Infallible` errors, so wrapping them is enough to drive the display.
#[derive(Debug)]
pub struct HalPin<P> {
    pin: P,
}

impl<P> HalPin<P>
where
    P: embedded_hal::digital::OutputPin<Error = Infallible>,
{
    /// Wrap an embedded-hal output pin
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P> OutputPin for HalPin<P>
where
    P: embedded_hal::digital::OutputPin<Error = Infallible>,
{
    fn set_high(&mut self) {
        infallible(self.pin.set_high());
    }

    fn set_low(&mut self) {
        infallible(self.pin.set_low());
    }
}

fn infallible(result: Result<(), Infallible>) {
    if let Err(never) = result {
        match never {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal embedded-hal pin that remembers its level
    struct LevelPin {
        high: bool,
        writes: u32,
    }

    impl embedded_hal::digital::ErrorType for LevelPin {
        type Error = Infallible;
    }

    impl embedded_hal::digital::OutputPin for LevelPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            self.writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            self.writes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_adapter_forwards_writes() {
        let mut pin = HalPin::new(LevelPin {
            high: false,
            writes: 0,
        });

        pin.set_high();
        assert!(pin.pin.high);

        pin.set_state(false);
        assert!(!pin.pin.high);

        assert_eq!(pin.into_inner().writes, 2);
    }

    #[test]
    fn test_pulse_ends_low() {
        let mut pin = HalPin::new(LevelPin {
            high: true,
            writes: 0,
        });

        pin.pulse();

        let inner = pin.into_inner();
        assert!(!inner.high);
        assert_eq!(inner.writes, 3);
    }
}
