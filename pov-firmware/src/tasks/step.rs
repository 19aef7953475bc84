//! Display tick task
//!
//! Owns the [`PovDisplay`] and runs one tick each time the timer fires.
//! This is the only context that touches the LED and coil pins.

use defmt::*;
use pov_core::state::FeedState;
use pov_core::PovDisplay;
use pov_drivers::led::ShiftRegister;
use pov_drivers::stepper::UnipolarStepper;
use pov_hal_rp2040::{Rp2040Output, TickerTimer};

use crate::channels::SPACE_AVAILABLE;

/// Display wired to the RP2040 pins
pub type Display = PovDisplay<
    'static,
    ShiftRegister<Rp2040Output<'static>>,
    UnipolarStepper<Rp2040Output<'static>>,
    TickerTimer,
>;

/// Step task - ticks the display at the configured interval
#[embassy_executor::task]
pub async fn step_task(mut display: Display) {
    info!("Step task started");

    display.start();
    let mut front = FeedState::Idle;
    let mut back = FeedState::Idle;

    loop {
        display.timer_mut().next().await;
        let report = display.on_tick();

        if report.front_advanced {
            SPACE_AVAILABLE.signal(());
        }

        if report.front != front {
            match report.front {
                FeedState::Underrun => warn!("Front column underrun, holding motor"),
                FeedState::Streaming if front.is_underrun() => info!("Front column resumed"),
                FeedState::Streaming => info!("Front column streaming"),
                FeedState::Idle => {}
            }
            front = report.front;
        }

        if report.back != back {
            debug!("Back column {}", report.back);
            back = report.back;
        }

        if let Some(delay) = report.new_delay {
            info!("Tick interval now {} ms", delay.as_millis());
        }
    }
}
