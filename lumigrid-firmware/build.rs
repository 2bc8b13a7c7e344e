//! Build script for lumigrid-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates board.toml at compile time and turns it into constants

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Largest grid the firmware will accept (pixel buffer lives in RAM)
const MAX_PIXELS: u32 = 4096;

/// Baud range the RP2040 UART can generate reliably from the 125 MHz clock
const MIN_BAUDRATE: u32 = 1_200;
const MAX_BAUDRATE: u32 = 3_000_000;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BoardConfig {
    grid: GridSection,
    #[serde(default)]
    link: LinkSection,
    #[serde(default)]
    indicator: IndicatorSection,
    #[serde(default)]
    logging: LoggingSection,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GridSection {
    width: u32,
    height: u32,
    #[serde(default = "default_brightness")]
    brightness: u32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LinkSection {
    #[serde(default = "default_baudrate")]
    baudrate: u32,
    #[serde(default = "default_stale_after_ms")]
    stale_after_ms: u32,
}

impl Default for LinkSection {
    fn default() -> Self {
        Self {
            baudrate: default_baudrate(),
            stale_after_ms: default_stale_after_ms(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct IndicatorSection {
    #[serde(default)]
    active_low: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LoggingSection {
    #[serde(default = "default_stats_interval_ms")]
    stats_interval_ms: u64,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            stats_interval_ms: default_stats_interval_ms(),
        }
    }
}

fn default_brightness() -> u32 {
    20
}

fn default_baudrate() -> u32 {
    230_400
}

fn default_stale_after_ms() -> u32 {
    1_000
}

fn default_stats_interval_ms() -> u64 {
    10_000
}

fn main() {
    setup_linker();
    let config = load_config();
    validate_config(&config);
    write_config_constants(&config);
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

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    if env::var_os("CARGO_FEATURE_DEFMT").is_some() {
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read and parse board.toml
fn load_config() -> BoardConfig {
    println!("cargo:rerun-if-changed=board.toml");

    let config_path = Path::new("board.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: board.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a board.toml configuration file.          ║\n\
            ║  Please create one in the lumigrid-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read board.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid board.toml                                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    }
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

/// Check value ranges the parser cannot express
fn validate_config(config: &BoardConfig) {
    let mut errors = Vec::new();

    let grid = &config.grid;
    if grid.width == 0 || grid.height == 0 {
        errors.push("[grid] width and height must be at least 1".to_string());
    } else if grid.width.saturating_mul(grid.height) > MAX_PIXELS {
        errors.push(format!(
            "[grid] width * height must not exceed {} pixels",
            MAX_PIXELS
        ));
    }
    if grid.brightness > 255 {
        errors.push("[grid] brightness must be 0-255".to_string());
    }

    let link = &config.link;
    if !(MIN_BAUDRATE..=MAX_BAUDRATE).contains(&link.baudrate) {
        errors.push(format!(
            "[link] baudrate must be {}-{}",
            MIN_BAUDRATE, MAX_BAUDRATE
        ));
    }
    if link.stale_after_ms == 0 {
        errors.push("[link] stale_after_ms must be at least 1".to_string());
    }

    if config.logging.stats_interval_ms == 0 {
        errors.push("[logging] stats_interval_ms must be at least 1".to_string());
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid board configuration                              ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!(
        "cargo:warning=board.toml: {}x{} grid at {} baud",
        grid.width, grid.height, link.baudrate
    );
}

/// Emit `$OUT_DIR/board_config.rs` for `src/config.rs` to include
fn write_config_constants(config: &BoardConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let generated = format!(
        "/// Grid columns\n\
         pub const GRID_WIDTH: usize = {width};\n\
         /// Grid rows\n\
         pub const GRID_HEIGHT: usize = {height};\n\
         /// Link baud rate\n\
         pub const BAUDRATE: u32 = {baudrate};\n\
         /// Silence before the link is stale (ms)\n\
         pub const STALE_AFTER_MS: u32 = {stale};\n\
         /// WS2812 output brightness cap\n\
         pub const BRIGHTNESS: u8 = {brightness};\n\
         /// Liveness LED lights on a low pin\n\
         pub const INDICATOR_ACTIVE_LOW: bool = {active_low};\n\
         /// Interval between statistics log lines (ms)\n\
         pub const STATS_INTERVAL_MS: u64 = {stats};\n",
        width = config.grid.width,
        height = config.grid.height,
        baudrate = config.link.baudrate,
        stale = config.link.stale_after_ms,
        brightness = config.grid.brightness,
        active_low = config.indicator.active_low,
        stats = config.logging.stats_interval_ms,
    );

    fs::write(out_dir.join("board_config.rs"), generated).unwrap();
}
