//! Per-tick LED rendering
//!
//! Turns the columns under the two read cursors into the byte shifted onto
//! the blade, and tracks where each LED column is within its pixel.

pub mod sweep;

pub use sweep::{RenderState, SweepWrap, BACK_MASK, FRONT_MASK};
