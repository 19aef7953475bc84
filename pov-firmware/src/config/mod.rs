//! Configuration loading and parsing
//!
//! The display configuration is embedded at build time from
//! `display.toml` and parsed by a small no_std parser at boot.

pub mod toml;

pub use toml::{parse_config, FirmwareConfig, ParseError, Pattern, MAX_PATTERN_COLUMNS};
