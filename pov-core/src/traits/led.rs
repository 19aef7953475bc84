//! LED output trait

/// Destination for the byte rendered on each tick
///
/// Implementations must make the whole byte visible at once (for a shift
/// register: shift, then latch) before returning, since the coils are
/// updated right after.
pub trait ColumnSink {
    /// Put `bits` on the LEDs
    fn show(&mut self, bits: u8);
}
