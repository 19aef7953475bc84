//! Stepper coil output trait

use crate::motor::CoilPattern;

/// Four-coil stepper output
pub trait CoilDriver {
    /// Drive all four coils to match `pattern`
    fn energize(&mut self, pattern: CoilPattern);

    /// De-energize every coil
    ///
    /// The rotor is no longer held in place afterwards.
    fn release(&mut self) {
        self.energize(CoilPattern::OFF);
    }
}
