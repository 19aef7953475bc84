//! Inter-task communication channels
//!
//! Defines the static signals used between the tick task and the
//! application tasks. Uses embassy-sync primitives for safe async
//! communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Signal that the front cursor moved and a buffer slot was freed
///
/// Raised by the step task, awaited by the feed task when the buffer is
/// full.
pub static SPACE_AVAILABLE: Signal<CriticalSectionRawMutex, ()> = Signal::new();
