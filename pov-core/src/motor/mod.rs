//! Stepper motor phase sequencing
//!
//! The blade is spun by a four-wire unipolar stepper driven directly from
//! GPIO, one half-step per tick.

pub mod phase;

pub use phase::{
    CoilPattern, Direction, MotorPhaseTable, MotorState, PHASE_COUNT, STEPS_PER_ROTATION,
};
