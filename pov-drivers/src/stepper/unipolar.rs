//! Four-wire unipolar stepper on GPIO
//!
//! Each coil output switches one channel of a Darlington array (ULN2003 or
//! similar). The driver only writes levels; sequencing comes from the
//! phase table in pov-core.

use pov_core::motor::CoilPattern;
use pov_core::traits::CoilDriver;
use pov_hal::OutputPin;

/// Unipolar stepper coil outputs, in the order A1, A2, B1, B2
pub struct UnipolarStepper<P> {
    coils: [P; 4],
    pattern: CoilPattern,
}

impl<P: OutputPin> UnipolarStepper<P> {
    /// Take the coil pins with every coil de-energized
    pub fn new(mut coils: [P; 4]) -> Self {
        for coil in coils.iter_mut() {
            coil.set_low();
        }
        Self {
            coils,
            pattern: CoilPattern::OFF,
        }
    }

    /// Pattern currently on the coils
    pub fn pattern(&self) -> CoilPattern {
        self.pattern
    }

    /// Check if any coil is energized
    pub fn is_holding(&self) -> bool {
        self.pattern != CoilPattern::OFF
    }

    /// Hand the pins back
    pub fn into_pins(self) -> [P; 4] {
        self.coils
    }
}

impl<P: OutputPin> CoilDriver for UnipolarStepper<P> {
    fn energize(&mut self, pattern: CoilPattern) {
        for (index, coil) in self.coils.iter_mut().enumerate() {
            coil.set_state(pattern.coil(index));
        }
        self.pattern = pattern;
    }
}
