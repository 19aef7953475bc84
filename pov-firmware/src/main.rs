//! Spindle - POV Display Firmware
//!
//! Main firmware binary for an RP2040 spinning a two-column LED blade on a
//! 28BYJ-48 stepper. One timer tick shifts a column onto the blade and
//! steps the motor by half a step.
//!
//! Wiring (Raspberry Pi Pico):
//!
//! | Signal              | GPIO |
//! |---------------------|------|
//! | Shift register data | 2    |
//! | Shift register clock| 3    |
//! | Latch               | 4    |
//! | Output enable (low) | 5    |
//! | Coil A1..B2 (ULN2003 IN1..IN4) | 6..9 |
//! | Speed button        | 14   |
//! | Direction button    | 15   |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use pov_core::config::DisplayConfig;
use pov_core::{DisplayShared, PovDisplay};
use pov_drivers::led::ShiftRegister;
use pov_drivers::stepper::UnipolarStepper;
use pov_hal_rp2040::{output, TickerTimer};

use crate::config::{parse_config, FirmwareConfig, Pattern};

mod channels;
mod config;
mod tasks;

/// Embedded display configuration (compiled into firmware)
/// Edit display.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../display.toml");

/// Executor for the step task, preempts everything else
static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

// Static cells for state shared with tasks (must live forever)
static SHARED: StaticCell<DisplayShared> = StaticCell::new();
static PATTERN: StaticCell<Pattern> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_HIGH.on_interrupt()
}

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Spindle firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();
    let shared = SHARED.init(init_display(config.display));
    let pattern = PATTERN.init(config.pattern);

    let (producer, port, feed) = shared.split();

    let leds = ShiftRegister::new(
        output(p.PIN_2),
        output(p.PIN_3),
        output(p.PIN_4),
        output(p.PIN_5),
    );
    let coils = UnipolarStepper::new([
        output(p.PIN_6),
        output(p.PIN_7),
        output(p.PIN_8),
        output(p.PIN_9),
    ]);
    let display = PovDisplay::new(feed, leds, coils, TickerTimer::new());
    info!("LED shift register and stepper initialized");

    let buttons = tasks::ControlButtons {
        direction: Input::new(p.PIN_15, Pull::Up),
        speed: Input::new(p.PIN_14, Pull::Up),
    };

    // Tick handling runs above thread mode so producer work never delays it
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let high_spawner = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    high_spawner.spawn(tasks::step_task(display)).unwrap();

    spawner
        .spawn(tasks::feed_task(producer, pattern.as_slice()))
        .unwrap();
    spawner.spawn(tasks::control_task(port, buttons)).unwrap();

    info!("All tasks spawned, display running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

/// Parse the embedded configuration, falling back to defaults
fn load_config() -> FirmwareConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!(
                "Config loaded: {} steps/pixel, offset {}, {} rpm, {} columns",
                config.display.steps_per_pixel,
                config.display.column_offset,
                config.display.rpm,
                config.pattern.len()
            );
            config
        }
        Err(e) => {
            warn!("display.toml rejected ({}), using defaults", e);
            FirmwareConfig::default()
        }
    }
}

/// Validate the display configuration, falling back to defaults
fn init_display(config: DisplayConfig) -> DisplayShared {
    match DisplayShared::new(config) {
        Ok(shared) => shared,
        Err(e) => {
            error!("Invalid display configuration ({}), using defaults", e);
            unwrap!(DisplayShared::new(DisplayConfig::default()))
        }
    }
}
