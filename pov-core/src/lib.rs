//! Board-agnostic core logic for the POV display firmware
//!
//! This crate contains everything that does not depend on a specific chip:
//!
//! - Column ring buffer shared between the producer and the tick handler
//! - Motor phase table and direction handling
//! - Per-tick render state (front/back sweep counters, LED on-time)
//! - Feed state machine (Idle / Streaming / Underrun per side)
//! - Step scheduler executed on every timer tick
//! - Configuration types and the configuration port
//! - Display lifecycle tying the scheduler to pins and the periodic timer

#![no_std]
#![deny(unsafe_code)]

pub mod buffer;
pub mod config;
pub mod display;
pub mod motor;
pub mod render;
pub mod scheduler;
pub mod state;
pub mod traits;

pub use display::{DisplayFeed, DisplayShared, PovDisplay};
