//! Simple TOML parser for the display configuration
//!
//! This is a minimal TOML parser that handles only the subset used by
//! `display.toml`. It does NOT support the full TOML spec.
//!
//! Supported features:
//! - Key = value pairs (string, integer, float)
//! - Integers in decimal, `0x` hex or `0b` binary
//! - `[display]` and `[pattern]` section headers
//! - Single-line integer arrays: `columns = [0x81, 0x42]`
//! - Comments (# ...)
//!
//! NOT supported:
//! - Multi-line arrays or strings
//! - Inline tables
//! - Dotted keys

use heapless::Vec;

use pov_core::config::DisplayConfig;
use pov_core::motor::Direction;

/// Most columns a pattern may hold
pub const MAX_PATTERN_COLUMNS: usize = 64;

/// Column sequence fed to the display in a loop
pub type Pattern = Vec<u8, MAX_PATTERN_COLUMNS>;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Key not valid in its section
    UnknownKey,
    /// Invalid value type
    InvalidValue,
    /// Too many items (exceeded heapless capacity)
    TooManyItems,
}

/// Everything `display.toml` describes
#[derive(Debug, Clone, PartialEq)]
pub struct FirmwareConfig {
    /// Blade geometry and motion
    pub display: DisplayConfig,
    /// Columns to show
    pub pattern: Pattern,
}

impl Default for FirmwareConfig {
    fn default() -> Self {
        let mut pattern = Vec::new();
        // Diagonal cross, one LED per side lit at a time
        for column in [0x81, 0x42, 0x24, 0x18, 0x18, 0x24, 0x42, 0x81] {
            let _ = pattern.push(column);
        }
        Self {
            display: DisplayConfig::default(),
            pattern,
        }
    }
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Display,
    Pattern,
}

/// Parse `display.toml` into a [`FirmwareConfig`]
///
/// Keys that are not present keep their defaults. A `[pattern]` section
/// replaces the default pattern entirely.
pub fn parse_config(input: &str) -> Result<FirmwareConfig, ParseError> {
    let mut config = FirmwareConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        let Some((key, value)) = parse_key_value(line) else {
            return Err(ParseError::InvalidValue);
        };
        apply_value(section, key, value, &mut config)?;
    }

    Ok(config)
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "display" => Ok(Section::Display),
        "pattern" => Ok(Section::Pattern),
        _ => Err(ParseError::InvalidSection),
    }
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut FirmwareConfig,
) -> Result<(), ParseError> {
    let display = &mut config.display;
    match (section, key) {
        (Section::Display, "steps_per_pixel") => display.steps_per_pixel = parse_int(value)?,
        (Section::Display, "highlighted_steps") => display.highlighted_steps = parse_int(value)?,
        (Section::Display, "column_offset") => display.column_offset = parse_int(value)?,
        (Section::Display, "rpm") => display.rpm = parse_float(value)?,
        (Section::Display, "direction") => display.direction = parse_direction(value)?,
        (Section::Pattern, "columns") => config.pattern = parse_columns(value)?,
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

/// Split `key = value`, dropping a trailing comment
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    let value = if let Some(hash_pos) = value.find('#') {
        // Make sure # is not inside a string
        let quote_count = value[..hash_pos].matches('"').count();
        if quote_count % 2 == 0 {
            value[..hash_pos].trim()
        } else {
            value
        }
    } else {
        value
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a string value (removes quotes)
fn parse_string(value: &str) -> &str {
    if value.starts_with('"') && value.ends_with('"') && value.len() >= 2 {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Parse an 8-bit integer in decimal, hex or binary
fn parse_int(value: &str) -> Result<u8, ParseError> {
    let value = strip_underscores(value)?;
    let parsed = if let Some(hex) = value.strip_prefix("0x") {
        u8::from_str_radix(hex, 16)
    } else if let Some(bin) = value.strip_prefix("0b") {
        u8::from_str_radix(bin, 2)
    } else {
        value.parse()
    };
    parsed.map_err(|_| ParseError::InvalidValue)
}

fn parse_float(value: &str) -> Result<f32, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue)
}

fn parse_direction(value: &str) -> Result<Direction, ParseError> {
    match parse_string(value) {
        "clockwise" => Ok(Direction::Clockwise),
        "counter_clockwise" => Ok(Direction::CounterClockwise),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Parse a single-line array like `[0x81, 0x42, 0b0001_1000]`
fn parse_columns(value: &str) -> Result<Pattern, ParseError> {
    let inner = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .ok_or(ParseError::InvalidValue)?;

    let mut columns = Pattern::new();
    for item in inner.split(',') {
        let item = item.trim();
        // Trailing comma
        if item.is_empty() {
            continue;
        }
        columns
            .push(parse_int(item)?)
            .map_err(|_| ParseError::TooManyItems)?;
    }

    if columns.is_empty() {
        return Err(ParseError::InvalidValue);
    }
    Ok(columns)
}

/// Drop the `_` separators TOML allows between digits
fn strip_underscores(value: &str) -> Result<heapless::String<16>, ParseError> {
    let mut out = heapless::String::new();
    for c in value.chars().filter(|&c| c != '_') {
        out.push(c).map_err(|_| ParseError::InvalidValue)?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_radixes() {
        assert_eq!(parse_int("26"), Ok(26));
        assert_eq!(parse_int("0x81"), Ok(0x81));
        assert_eq!(parse_int("0b0001_1000"), Ok(0x18));
        assert_eq!(parse_int("256"), Err(ParseError::InvalidValue));
        assert_eq!(parse_int("0xZZ"), Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_parse_full_config() {
        let input = r#"
# Test blade
[display]
steps_per_pixel = 20
highlighted_steps = 5   # short pulses
column_offset = 3
rpm = 1.5
direction = "counter_clockwise"

[pattern]
columns = [0xFF, 0x00, 0b1010_1010,]
"#;
        let config = parse_config(input).unwrap();
        assert_eq!(config.display.steps_per_pixel, 20);
        assert_eq!(config.display.highlighted_steps, 5);
        assert_eq!(config.display.column_offset, 3);
        assert_eq!(config.display.rpm, 1.5);
        assert_eq!(config.display.direction, Direction::CounterClockwise);
        assert_eq!(config.pattern.as_slice(), &[0xFF, 0x00, 0xAA]);
    }

    #[test]
    fn test_missing_keys_keep_defaults() {
        let config = parse_config("[display]\nrpm = 3.0\n").unwrap();
        assert_eq!(config.display.steps_per_pixel, 26);
        assert_eq!(config.display.rpm, 3.0);
        assert_eq!(config.pattern, FirmwareConfig::default().pattern);
    }

    #[test]
    fn test_direction_names_match_build_check() {
        let config = parse_config("[display]\ndirection = \"counter_clockwise\"\n").unwrap();
        assert_eq!(config.display.direction, Direction::CounterClockwise);

        // build.rs reads the same file through serde's snake_case names
        for input in [
            "[display]\ndirection = \"cw\"\n",
            "[display]\ndirection = \"ccw\"\n",
            "[display]\ndirection = \"CounterClockwise\"\n",
        ] {
            assert_eq!(parse_config(input).err(), Some(ParseError::InvalidValue));
        }
    }

    #[test]
    fn test_rejects_unknown_input() {
        assert_eq!(
            parse_config("[motor]\n").err(),
            Some(ParseError::InvalidSection)
        );
        assert_eq!(
            parse_config("[display]\nspeed = 2\n").err(),
            Some(ParseError::UnknownKey)
        );
        assert_eq!(
            parse_config("[display]\ndirection = \"up\"\n").err(),
            Some(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[pattern]\ncolumns = []\n").err(),
            Some(ParseError::InvalidValue)
        );
    }
}
