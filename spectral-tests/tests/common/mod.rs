//! Mocks für die Hardware-Traits aus spectral-core
//!
//! Jeder Test-Binary bindet dieses Modul ein und nutzt nur einen Teil davon.
#![allow(dead_code)]

use rgb::RGB8;
use spectral_core::{
    AnalogInputs, ColorChannel, Direction, HBridgeDriver, LcdBus, SensorPins, SmartLedWriter,
    StatusLedError,
};

// ============================================================================
// H-Brücke
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeCall {
    Direction(Direction),
    Duty(u16),
}

/// Zeichnet alle Aufrufe in Reihenfolge auf
#[derive(Default)]
pub struct RecordingBridge {
    pub calls: Vec<BridgeCall>,
}

impl RecordingBridge {
    pub fn direction(&self) -> Option<Direction> {
        self.calls.iter().rev().find_map(|call| match call {
            BridgeCall::Direction(direction) => Some(*direction),
            BridgeCall::Duty(_) => None,
        })
    }

    pub fn duty(&self) -> Option<u16> {
        self.calls.iter().rev().find_map(|call| match call {
            BridgeCall::Duty(duty) => Some(*duty),
            BridgeCall::Direction(_) => None,
        })
    }
}

impl HBridgeDriver for RecordingBridge {
    fn set_direction(&mut self, direction: Direction) {
        self.calls.push(BridgeCall::Direction(direction));
    }

    fn set_duty(&mut self, level: u16) {
        self.calls.push(BridgeCall::Duty(level));
    }
}

// ============================================================================
// Farbsensor
// ============================================================================

/// Simulierter TCS3200: Rechtecksignal mit einer Frequenz pro Filter
///
/// Die virtuelle Uhr läuft bei jedem `now_us()` um `step_us` weiter, damit
/// die Busy-Wait Schleifen terminieren.
pub struct SquareWaveSensor {
    /// Frequenzen in Hz für Rot, Grün, Blau, Clear
    pub red_hz: u32,
    pub green_hz: u32,
    pub blue_hz: u32,
    pub clear_hz: u32,
    pub step_us: u64,
    /// Startwert der Uhr (für Überlauf-Tests)
    pub clock_offset: u32,
    pub elapsed_us: u64,
    pub scaling_pins: Option<(bool, bool)>,
    pub filter_history: Vec<(bool, bool)>,
}

impl SquareWaveSensor {
    pub fn new(red_hz: u32, green_hz: u32, blue_hz: u32) -> Self {
        Self {
            red_hz,
            green_hz,
            blue_hz,
            clear_hz: red_hz + green_hz + blue_hz,
            step_us: 10,
            clock_offset: 0,
            elapsed_us: 0,
            scaling_pins: None,
            filter_history: Vec::new(),
        }
    }

    fn active_frequency(&self) -> u32 {
        match self.filter_history.last() {
            Some((false, false)) => self.red_hz,
            Some((true, true)) => self.green_hz,
            Some((false, true)) => self.blue_hz,
            _ => self.clear_hz,
        }
    }
}

impl SensorPins for SquareWaveSensor {
    fn set_scaling_pins(&mut self, s0: bool, s1: bool) {
        self.scaling_pins = Some((s0, s1));
    }

    fn set_filter_pins(&mut self, s2: bool, s3: bool) {
        self.filter_history.push((s2, s3));
    }

    fn output_is_high(&mut self) -> bool {
        let frequency = u64::from(self.active_frequency());
        if frequency == 0 {
            return false;
        }
        let period_us = 1_000_000 / frequency;
        self.elapsed_us % period_us < period_us / 2
    }

    fn now_us(&mut self) -> u32 {
        self.elapsed_us += self.step_us;
        self.clock_offset.wrapping_add(self.elapsed_us as u32)
    }

    fn delay_ms(&mut self, ms: u32) {
        self.elapsed_us += u64::from(ms) * 1000;
    }
}

// ============================================================================
// Display
// ============================================================================

/// Ein übertragenes Nibble: (RS, Wert)
pub type Nibble = (bool, u8);

/// Zeichnet die Nibbles bei jeder steigenden EN-Flanke auf
#[derive(Default)]
pub struct RecordingLcdBus {
    pub rs: bool,
    pub data: u8,
    pub nibbles: Vec<Nibble>,
    /// Summierte Wartezeit vor dem ersten Nibble
    pub delay_before_first_us: u64,
}

impl RecordingLcdBus {
    /// Fasst je zwei Nibbles zu Bytes zusammen (nach der 4-Bit Umschaltung)
    pub fn bytes_after(&self, skip_nibbles: usize) -> Vec<(bool, u8)> {
        self.nibbles[skip_nibbles..]
            .chunks(2)
            .map(|pair| (pair[0].0, (pair[0].1 << 4) | pair[1].1))
            .collect()
    }
}

impl LcdBus for RecordingLcdBus {
    fn set_register_select(&mut self, data: bool) {
        self.rs = data;
    }

    fn set_enable(&mut self, high: bool) {
        if high {
            self.nibbles.push((self.rs, self.data));
        }
    }

    fn set_data_nibble(&mut self, nibble: u8) {
        self.data = nibble;
    }

    fn delay_us(&mut self, us: u32) {
        if self.nibbles.is_empty() {
            self.delay_before_first_us += u64::from(us);
        }
    }
}

// ============================================================================
// Potentiometer & Status-LED
// ============================================================================

/// Feste ADC-Werte pro Kanal
pub struct FixedPots {
    pub raw: [u16; 3],
}

impl AnalogInputs for FixedPots {
    fn read_raw(&mut self, channel: ColorChannel) -> u16 {
        match channel {
            ColorChannel::Red => self.raw[0],
            ColorChannel::Green => self.raw[1],
            ColorChannel::Blue => self.raw[2],
        }
    }
}

#[derive(Default)]
pub struct MockLedWriter {
    pub last_color: Option<RGB8>,
    pub write_count: usize,
    pub fail_next_write: bool,
}

impl MockLedWriter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SmartLedWriter for MockLedWriter {
    fn write(&mut self, color: RGB8) -> Result<(), StatusLedError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(StatusLedError::WriteFailed);
        }

        self.last_color = Some(color);
        self.write_count += 1;
        Ok(())
    }
}
