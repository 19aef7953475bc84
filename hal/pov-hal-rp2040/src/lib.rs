//! RP2040-specific HAL for the POV display firmware
//!
//! This crate provides RP2040 implementations of the shared `pov-hal`
//! traits:
//!
//! - Push-pull GPIO outputs for the shift register and coil lines
//! - Periodic tick timer backed by the embassy time driver

#![no_std]

pub mod gpio;
pub mod timer;

pub use gpio::{output, Rp2040Output};
pub use timer::TickerTimer;

// Re-export shared traits from pov-hal for convenience
pub use pov_hal::{OutputPin, PeriodicTimer};
