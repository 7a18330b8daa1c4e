//! Integration Tests für den TCS3200 Treiber
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen SquareWaveSensor

mod common;

use common::SquareWaveSensor;
use spectral_core::sensor::SYNC_TIMEOUT_US;
use spectral_core::{ColorFilter, FrequencyScaling, Tcs3200};

fn assert_near(measured: u32, expected: u32, tolerance: u32) {
    assert!(
        measured.abs_diff(expected) <= tolerance,
        "measured {measured} Hz, expected {expected} ± {tolerance} Hz"
    );
}

// ============================================================================
// Tests: Konfiguration
// ============================================================================

#[test]
fn test_init_selects_twenty_percent_and_clear() {
    let mut sensor = Tcs3200::new(SquareWaveSensor::new(0, 0, 0));
    sensor.init();

    let pins = sensor.into_inner();
    assert_eq!(pins.scaling_pins, Some((true, false)));
    assert_eq!(pins.filter_history, vec![(true, false)]);
}

#[test]
fn test_frequency_scaling_pin_levels() {
    let cases = [
        (FrequencyScaling::PowerDown, (false, false)),
        (FrequencyScaling::TwoPercent, (false, true)),
        (FrequencyScaling::TwentyPercent, (true, false)),
        (FrequencyScaling::Full, (true, true)),
    ];

    for (scaling, levels) in cases {
        let mut sensor = Tcs3200::new(SquareWaveSensor::new(0, 0, 0));
        sensor.set_frequency_scaling(scaling);
        assert_eq!(sensor.into_inner().scaling_pins, Some(levels));
    }
}

#[test]
fn test_filter_pin_levels() {
    let mut sensor = Tcs3200::new(SquareWaveSensor::new(0, 0, 0));
    sensor.set_filter(ColorFilter::Red);
    sensor.set_filter(ColorFilter::Green);
    sensor.set_filter(ColorFilter::Blue);
    sensor.set_filter(ColorFilter::Clear);

    assert_eq!(
        sensor.into_inner().filter_history,
        vec![(false, false), (true, true), (false, true), (true, false)]
    );
}

// ============================================================================
// Tests: Frequenzmessung
// ============================================================================

#[test]
fn test_read_frequency_1khz() {
    let mut sensor = Tcs3200::new(SquareWaveSensor::new(1000, 0, 0));
    sensor.set_filter(ColorFilter::Red);

    assert_near(sensor.read_frequency(20), 1000, 50);
}

#[test]
fn test_read_frequency_zero_gate_returns_immediately() {
    let mut sensor = Tcs3200::new(SquareWaveSensor::new(1000, 0, 0));

    assert_eq!(sensor.read_frequency(0), 0);
    assert_eq!(sensor.into_inner().elapsed_us, 0);
}

#[test]
fn test_read_frequency_without_signal_times_out() {
    let mut sensor = Tcs3200::new(SquareWaveSensor::new(0, 0, 0));

    assert_eq!(sensor.read_frequency(20), 0);

    // Synchronisation + Torzeit, nicht länger
    let elapsed = sensor.into_inner().elapsed_us;
    assert!(elapsed >= u64::from(SYNC_TIMEOUT_US) + 20_000);
    assert!(elapsed < u64::from(SYNC_TIMEOUT_US) + 21_000);
}

#[test]
fn test_read_frequency_across_timer_overflow() {
    let mut pins = SquareWaveSensor::new(1000, 0, 0);
    pins.clock_offset = u32::MAX - 15_000;
    let mut sensor = Tcs3200::new(pins);
    sensor.set_filter(ColorFilter::Red);

    assert_near(sensor.read_frequency(20), 1000, 50);
}

#[test]
fn test_read_rgb_measures_each_channel_and_restores_clear() {
    let mut sensor = Tcs3200::new(SquareWaveSensor::new(1000, 500, 250));

    let reading = sensor.read_rgb(20);

    assert_near(reading.r, 1000, 50);
    assert_near(reading.g, 500, 50);
    assert_near(reading.b, 250, 50);

    let pins = sensor.into_inner();
    assert_eq!(
        pins.filter_history,
        vec![(false, false), (true, true), (false, true), (true, false)]
    );
}
