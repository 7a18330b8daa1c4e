//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.
//!
//! # Implementierungen
//! - **Production:** esp-hal Adapter in `spectral-firmware::hal`
//! - **Testing:** Mocks in `spectral-tests`

use rgb::RGB8;

use crate::types::{ColorChannel, Direction};

/// Fehler-Typ für Status-LED Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusLedError {
    WriteFailed,
}

/// H-Brücke (L298N o.ä.): zwei Richtungseingänge und ein PWM-Eingang
pub trait HBridgeDriver {
    /// Setzt die beiden Richtungssignale (IN1/IN2)
    fn set_direction(&mut self, direction: Direction);

    /// Setzt das Tastverhältnis, `0..=u16::MAX` entspricht 0..100 %
    fn set_duty(&mut self, level: u16);
}

/// Pins und Zeitbasis für den TCS3200 Farbsensor
pub trait SensorPins {
    fn set_scaling_pins(&mut self, s0: bool, s1: bool);
    fn set_filter_pins(&mut self, s2: bool, s3: bool);

    /// Aktueller Pegel des OUT-Pins
    fn output_is_high(&mut self) -> bool;

    /// Monotone Mikrosekunden-Zeitbasis (darf überlaufen)
    fn now_us(&mut self) -> u32;

    fn delay_ms(&mut self, ms: u32);
}

/// 4-Bit Parallelbus eines HD44780 Displays (RS, EN, D4..D7)
pub trait LcdBus {
    /// `true` = Daten-Register, `false` = Kommando-Register
    fn set_register_select(&mut self, data: bool);
    fn set_enable(&mut self, high: bool);

    /// Legt die unteren 4 Bit von `nibble` an D4..D7 an
    fn set_data_nibble(&mut self, nibble: u8);

    fn delay_us(&mut self, us: u32);
}

/// Potentiometer an den ADC-Eingängen
pub trait AnalogInputs {
    /// Roher 12-Bit Wert (0..=4095)
    fn read_raw(&mut self, channel: ColorChannel) -> u16;
}

/// Taster-Eingang
pub trait PushButton {
    /// `true` solange der Taster gedrückt ist (Polarität bereits korrigiert)
    fn is_pressed(&mut self) -> bool;
}

/// Trait für SmartLED Hardware-Zugriff
///
/// Abstrahiert den Zugriff auf die RGB Status-LED (WS2812/Neopixel).
///
/// # Implementierungen
/// - **Production:** RmtLedWriter (ESP32 RMT Peripheral)
/// - **Testing:** MockLedWriter (in-memory Mock)
pub trait SmartLedWriter {
    /// Schreibt eine RGB-Farbe auf die LED
    ///
    /// # Fehlerbehandlung
    /// Gibt `StatusLedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, color: RGB8) -> Result<(), StatusLedError>;
}
