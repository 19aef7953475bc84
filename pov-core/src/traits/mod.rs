//! Hardware abstraction traits
//!
//! These traits define the interface between the tick handler and the
//! drivers that own the actual pins.

pub mod coil;
pub mod led;

pub use coil::CoilDriver;
pub use led::ColumnSink;
