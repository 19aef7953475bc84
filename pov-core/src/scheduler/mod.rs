//! Tick scheduling
//!
//! [`StepScheduler`] runs once per timer tick and does all the per-tick
//! work: render, latch, step the motor, move the cursors. The tick
//! interval itself is a [`StepDelay`] derived from the blade speed.

pub mod step;
pub mod timing;

pub use step::{StepScheduler, TickReport};
pub use timing::StepDelay;
