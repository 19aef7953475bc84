//! Front-panel controls
//!
//! Two momentary buttons to ground:
//! - Direction: reverses the blade
//! - Speed: cycles through the speed presets
//!
//! Changes go through the [`ConfigurationPort`]; the new speed takes
//! effect at the next tick boundary.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::Input;
use embassy_time::Timer;
use pov_core::config::ConfigurationPort;
use pov_core::scheduler::StepDelay;

/// Blade speed presets in RPM
const SPEED_PRESETS: [f32; 4] = [1.0, 2.0, 4.0, 8.0];

/// Debounce time in milliseconds
const DEBOUNCE_MS: u64 = 30;

/// Front-panel button inputs (active low, pulled up)
pub struct ControlButtons {
    /// Reverses the rotation direction
    pub direction: Input<'static>,
    /// Steps to the next speed preset
    pub speed: Input<'static>,
}

/// Control task - applies button presses to the display settings
#[embassy_executor::task]
pub async fn control_task(mut port: ConfigurationPort<'static>, mut buttons: ControlButtons) {
    info!("Control task started");

    // Start from the preset matching the configured speed, if any
    let mut preset = SPEED_PRESETS
        .iter()
        .position(|&rpm| StepDelay::from_rpm(rpm).ok() == Some(port.step_delay()))
        .unwrap_or(1);

    loop {
        let pressed = select(
            buttons.direction.wait_for_falling_edge(),
            buttons.speed.wait_for_falling_edge(),
        )
        .await;

        Timer::after_millis(DEBOUNCE_MS).await;

        match pressed {
            Either::First(()) if buttons.direction.is_low() => {
                let direction = port.direction().opposite();
                port.set_rotation_direction(direction);
                info!("Direction set to {}", direction);
                buttons.direction.wait_for_high().await;
            }
            Either::Second(()) if buttons.speed.is_low() => {
                preset = (preset + 1) % SPEED_PRESETS.len();
                let rpm = SPEED_PRESETS[preset];
                match port.set_speed(rpm) {
                    Ok(delay) => info!("Speed {} rpm, {} ms per step", rpm, delay.as_millis()),
                    Err(e) => warn!("Speed {} rpm rejected: {}", rpm, e),
                }
                buttons.speed.wait_for_high().await;
            }
            // Bounce
            _ => {}
        }
    }
}
