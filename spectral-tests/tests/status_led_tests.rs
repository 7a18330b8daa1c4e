//! Integration Tests für die Status-LED
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen MockLedWriter

mod common;

use common::{FixedPots, MockLedWriter};
use rgb::RGB8;
use spectral_core::{ColorChannel, SmartLedWriter, SmartStatusLed, StatusLedError, update_intensity};

// ============================================================================
// Tests: MockLedWriter
// ============================================================================

#[test]
fn test_mock_led_writer_fail() {
    let mut mock = MockLedWriter::new();
    mock.fail_next_write = true;

    let result = mock.write(RGB8 { r: 10, g: 0, b: 0 });
    assert_eq!(result, Err(StatusLedError::WriteFailed));
    assert_eq!(mock.write_count, 0);
    assert_eq!(mock.last_color, None);
}

// ============================================================================
// Tests: SmartStatusLed
// ============================================================================

#[test]
fn test_full_intensity_is_limited_to_max_brightness() {
    let mut led = SmartStatusLed::new(MockLedWriter::new(), 32);

    led.set_output_intensity(ColorChannel::Red, u16::MAX).unwrap();

    assert_eq!(led.color(), RGB8 { r: 32, g: 0, b: 0 });
    assert_eq!(led.writer().last_color, Some(RGB8 { r: 32, g: 0, b: 0 }));
    assert_eq!(led.writer().write_count, 1);
}

#[test]
fn test_sixteen_bit_levels_collapse_to_brightness_steps() {
    let mut led = SmartStatusLed::new(MockLedWriter::new(), 32);

    led.set_output_intensity(ColorChannel::Red, 2047).unwrap();
    assert_eq!(led.color().r, 0);

    led.set_output_intensity(ColorChannel::Red, 2048).unwrap();
    assert_eq!(led.color().r, 1);

    led.set_output_intensity(ColorChannel::Red, 4000).unwrap();
    assert_eq!(led.color().r, 1);
}

#[test]
fn test_channels_are_independent() {
    let mut led = SmartStatusLed::new(MockLedWriter::new(), 255);

    led.set_output_intensity(ColorChannel::Red, u16::MAX).unwrap();
    led.set_output_intensity(ColorChannel::Blue, u16::MAX).unwrap();
    led.set_output_intensity(ColorChannel::Red, 0).unwrap();

    assert_eq!(led.color(), RGB8 { r: 0, g: 0, b: 255 });
}

#[test]
fn test_write_failure_is_reported_and_recovers() {
    let mut led = SmartStatusLed::new(
        MockLedWriter {
            fail_next_write: true,
            ..MockLedWriter::default()
        },
        255,
    );

    assert_eq!(
        led.set_output_intensity(ColorChannel::Red, u16::MAX),
        Err(StatusLedError::WriteFailed)
    );

    // Nächster Schreibvorgang enthält den zuvor gesetzten Kanal
    assert!(led.set_output_intensity(ColorChannel::Green, 0).is_ok());
    assert_eq!(led.writer().last_color, Some(RGB8 { r: 255, g: 0, b: 0 }));
    assert_eq!(led.writer().write_count, 1);
}

// ============================================================================
// Tests: update_intensity()
// ============================================================================

#[test]
fn test_update_intensity_maps_pots_to_led() {
    let mut pots = FixedPots {
        raw: [4095, 2048, 0],
    };
    let mut led = SmartStatusLed::new(MockLedWriter::new(), 32);

    let mut raws = [0u16; 3];
    for (i, channel) in ColorChannel::ALL.into_iter().enumerate() {
        raws[i] = update_intensity(&mut pots, &mut led, channel, channel).unwrap();
    }

    assert_eq!(raws, [4095, 2048, 0]);
    assert_eq!(led.color(), RGB8 { r: 31, g: 16, b: 0 });
    assert_eq!(led.writer().write_count, 3);
}

#[test]
fn test_update_intensity_clamps_out_of_range_adc() {
    let mut pots = FixedPots {
        raw: [5000, 0, 0],
    };
    let mut led = SmartStatusLed::new(MockLedWriter::new(), 32);

    let raw = update_intensity(&mut pots, &mut led, ColorChannel::Red, ColorChannel::Red).unwrap();

    assert_eq!(raw, 4095);
    assert_eq!(led.color().r, 31);
}

#[test]
fn test_update_intensity_can_cross_channels() {
    let mut pots = FixedPots {
        raw: [0, 0, 4095],
    };
    let mut led = SmartStatusLed::new(MockLedWriter::new(), 255);

    update_intensity(&mut pots, &mut led, ColorChannel::Blue, ColorChannel::Red).unwrap();

    assert_eq!(led.color(), RGB8 { r: 254, g: 0, b: 0 });
}

#[test]
fn test_update_intensity_propagates_write_error() {
    let mut pots = FixedPots { raw: [100, 0, 0] };
    let mut led = SmartStatusLed::new(
        MockLedWriter {
            fail_next_write: true,
            ..MockLedWriter::default()
        },
        32,
    );

    assert_eq!(
        update_intensity(&mut pots, &mut led, ColorChannel::Red, ColorChannel::Red),
        Err(StatusLedError::WriteFailed)
    );
}
