//! Configuration types
//!
//! Display geometry and motion settings, plus the port through which the
//! application changes them while the display is running.

pub mod display;
pub mod port;

pub use display::{ConfigError, DisplayConfig};
pub use port::{ConfigurationPort, Settings};
