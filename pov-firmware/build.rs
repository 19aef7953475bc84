//! Build script for pov-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates display.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use pov_core::config::DisplayConfig;
use serde::Deserialize;

/// Must match `config::MAX_PATTERN_COLUMNS`
const MAX_PATTERN_COLUMNS: usize = 64;

/// Layout of display.toml
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct DisplayFile {
    #[serde(default)]
    display: DisplayConfig,
    #[serde(default)]
    pattern: Option<PatternSection>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PatternSection {
    columns: Vec<u8>,
}

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate display.toml at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=display.toml");

    let config_path = Path::new("display.toml");

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read display.toml", &e.to_string()),
    };

    let file: DisplayFile = match toml::from_str(&content) {
        Ok(file) => file,
        Err(e) => fail("Invalid display.toml", &e.to_string()),
    };

    if let Err(e) = file.display.validate() {
        fail("Invalid [display] section", &format!("{:?}", e));
    }

    if let Some(pattern) = &file.pattern {
        if pattern.columns.is_empty() {
            fail("Invalid [pattern] section", "columns must not be empty");
        }
        if pattern.columns.len() > MAX_PATTERN_COLUMNS {
            fail(
                "Invalid [pattern] section",
                &format!(
                    "{} columns, at most {} supported",
                    pattern.columns.len(),
                    MAX_PATTERN_COLUMNS
                ),
            );
        }
        if !single_line_array(&content) {
            fail(
                "Invalid [pattern] section",
                "columns must be written on a single line",
            );
        }
    }

    println!("cargo:warning=display.toml validated successfully");
}

/// The firmware parser only reads single-line arrays
fn single_line_array(content: &str) -> bool {
    content
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("columns"))
        .all(|line| line.contains('[') && line.contains(']'))
}

/// Abort the build with a boxed error message
fn fail(title: &str, detail: &str) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        format_error_lines(detail)
    );
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
