//! Spindle Hardware Abstraction Layer
//!
//! This crate defines the minimal hardware surface the display core needs:
//! digital outputs and one periodic timer. Chip-specific HALs implement it,
//! which keeps the scheduling and buffer logic platform-independent.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (pov-firmware)             │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pov-core / pov-drivers                 │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pov-hal (this crate - traits)          │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  pov-hal-     │       │  mock (std,   │
//! │    rp2040     │       │  host tests)  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output with a pulse helper
//! - [`timer::PeriodicTimer`] - Periodic tick source with millisecond interval

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]

pub mod gpio;
pub mod timer;

#[cfg(feature = "std")]
pub mod mock;

// Re-export key traits at crate root for convenience
pub use gpio::{HalPin, OutputPin};
pub use timer::PeriodicTimer;
