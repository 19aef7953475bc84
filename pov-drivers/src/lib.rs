//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the output traits
//! defined in pov-core, built on pov-hal pins:
//!
//! - LED column output through a latched 8-bit shift register
//! - Four-wire unipolar stepper coils

#![no_std]
#![deny(unsafe_code)]

pub mod led;
pub mod stepper;
