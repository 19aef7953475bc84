//! Pin-level behavior of a full tick through the real drivers

use pov_core::config::DisplayConfig;
use pov_core::{DisplayShared, PovDisplay};
use pov_drivers::led::ShiftRegister;
use pov_drivers::stepper::UnipolarStepper;
use pov_hal::mock::{MockTimer, PinEvent, PinLog, RecordingPin, TimerEvent};

const COILS: [&str; 4] = ["a1", "a2", "b1", "b2"];

fn leds(log: &PinLog) -> ShiftRegister<RecordingPin> {
    ShiftRegister::new(log.pin("data"), log.pin("clock"), log.pin("latch"), log.pin("oe"))
}

fn coils(log: &PinLog) -> UnipolarStepper<RecordingPin> {
    UnipolarStepper::new(COILS.map(|name| log.pin(name)))
}

/// Data level sampled on every rising clock edge
fn sampled_bits(events: &[PinEvent]) -> Vec<bool> {
    let mut data = false;
    let mut clock = false;
    let mut bits = Vec::new();
    for event in events {
        match event.pin {
            "data" => data = event.high,
            "clock" => {
                if event.high && !clock {
                    bits.push(data);
                }
                clock = event.high;
            }
            _ => {}
        }
    }
    bits
}

fn last_index(events: &[PinEvent], pins: &[&str]) -> Option<usize> {
    events.iter().rposition(|e| pins.contains(&e.pin))
}

fn first_index(events: &[PinEvent], pins: &[&str]) -> Option<usize> {
    events.iter().position(|e| pins.contains(&e.pin))
}

#[test]
fn test_byte_shifted_lsb_first_then_latched() {
    let log = PinLog::new();
    let mut register = leds(&log);
    log.clear();

    register.write(0b1100_0101);
    let events = log.events();

    assert_eq!(
        sampled_bits(&events),
        [true, false, true, false, false, false, true, true]
    );
    assert_eq!(log.events_for("latch"), [false, true, false]);
    assert!(first_index(&events, &["latch"]) > last_index(&events, &["clock"]));
    assert!(log.events_for("oe").is_empty());
}

#[test]
fn test_coils_change_after_latch() {
    let log = PinLog::new();
    let mut shared = DisplayShared::<16>::new(DisplayConfig::default()).unwrap();
    let (mut producer, _port, feed) = shared.split();
    let mut display = PovDisplay::new(feed, leds(&log), coils(&log), MockTimer::new());

    producer.push(0xFF);
    producer.push(0x00);
    log.clear();

    let report = display.on_tick();
    let events = log.events();

    assert_eq!(report.output, 0xFF);
    assert_eq!(sampled_bits(&events), [true; 8]);
    assert!(first_index(&events, &COILS) > last_index(&events, &["latch"]));
    // Phase 1 of the half-step table: B1 and B2
    let coil_levels: Vec<bool> = COILS
        .iter()
        .map(|name| log.events_for(name).last().copied().unwrap_or(false))
        .collect();
    assert_eq!(coil_levels, [false, false, true, true]);
}

#[test]
fn test_underrun_leaves_coil_pins_alone() {
    let log = PinLog::new();
    let config = DisplayConfig {
        steps_per_pixel: 2,
        ..Default::default()
    };
    let mut shared = DisplayShared::<16>::new(config).unwrap();
    let (mut producer, _port, feed) = shared.split();
    let mut display = PovDisplay::new(feed, leds(&log), coils(&log), MockTimer::new());

    producer.push(0xAA);
    display.on_tick();
    display.on_tick();
    log.clear();

    for _ in 0..4 {
        assert!(display.on_tick().front.is_underrun());
    }
    let events = log.events();
    assert_eq!(first_index(&events, &COILS), None);
    // LEDs keep refreshing with the last column
    assert_eq!(log.events_for("latch").len(), 4 * 3);

    producer.push(0x55);
    log.clear();
    assert!(display.on_tick().front.is_streaming());
    assert!(first_index(&log.events(), &COILS).is_some());
}

#[test]
fn test_output_enable_held_low() {
    let log = PinLog::new();
    let mut shared = DisplayShared::<16>::new(DisplayConfig::default()).unwrap();
    let (mut producer, _port, feed) = shared.split();
    let mut display = PovDisplay::new(feed, leds(&log), coils(&log), MockTimer::new());

    while producer.push(0x3C) {}
    for _ in 0..100 {
        display.on_tick();
    }

    assert_eq!(log.events_for("oe"), [false]);
}

#[test]
fn test_teardown_disarms_before_releasing_coils() {
    let log = PinLog::new();
    let timer = MockTimer::new();
    let mut shared = DisplayShared::<16>::new(DisplayConfig::default()).unwrap();
    let (mut producer, _port, feed) = shared.split();

    {
        let mut display = PovDisplay::new(feed, leds(&log), coils(&log), timer.clone());
        display.start();
        producer.push(0x01);
        display.on_tick();
        assert!(display.coils().is_holding());
        log.clear();
    }

    assert_eq!(timer.events(), [TimerEvent::Armed(7), TimerEvent::Disarmed]);
    for name in COILS {
        assert_eq!(log.events_for(name), [false], "coil {}", name);
    }
}
