//! Momentaufnahme für das Web-Dashboard
//!
//! Wird einmal pro Tick aktualisiert. Sobald die Korrektheit den Schwellwert
//! erreicht, friert der Zustand ein und meldet genau den Schwellwert, damit
//! der Browser einen konsistenten Erfolgs-Zustand sieht.

use core::fmt::Write;

use heapless::String;

use crate::actuator::clamp_correctness;
use crate::types::ColorReading;

/// Puffergröße für `/data` JSON
pub const STATUS_JSON_CAPACITY: usize = 128;

/// Inhalt der `/data` Antwort
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StatusReport {
    pub reading: ColorReading,
    pub correctness: f32,
    pub success: bool,
}

impl StatusReport {
    /// Serialisiert als `{"r":..,"g":..,"b":..,"correctness":..,"success":..}`
    ///
    /// `correctness` wird mit genau einer Nachkommastelle ausgegeben.
    ///
    /// ```
    /// # use spectral_core::{ColorReading, StatusReport};
    /// let report = StatusReport {
    ///     reading: ColorReading::new(800, 100, 100),
    ///     correctness: 80.0,
    ///     success: false,
    /// };
    /// assert_eq!(
    ///     report.to_json().as_str(),
    ///     r#"{"r":800,"g":100,"b":100,"correctness":80.0,"success":false}"#
    /// );
    /// ```
    pub fn to_json(&self) -> String<STATUS_JSON_CAPACITY> {
        let mut json = String::new();
        // Passt immer: 3 x u32 + f32 (0..=100) + bool < 128 Bytes
        let _ = write!(
            json,
            "{{\"r\":{},\"g\":{},\"b\":{},\"correctness\":{:.1},\"success\":{}}}",
            self.reading.r, self.reading.g, self.reading.b, self.correctness, self.success
        );
        json
    }
}

/// Geteilter Zustand zwischen Spiel-Schleife und HTTP-Server
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardState {
    report: StatusReport,
    success_threshold: f32,
}

impl DashboardState {
    pub fn new(success_threshold: f32) -> Self {
        Self {
            report: StatusReport::default(),
            success_threshold,
        }
    }

    /// Übernimmt die Werte des aktuellen Ticks (nach Erfolg: ignoriert)
    pub fn update_snapshot(&mut self, reading: ColorReading, correctness: f32) {
        if self.report.success {
            return;
        }

        let correctness = clamp_correctness(correctness);
        self.report.reading = reading;

        if correctness >= self.success_threshold {
            self.report.success = true;
            self.report.correctness = self.success_threshold;
        } else {
            self.report.correctness = correctness;
        }
    }

    pub fn report(&self) -> StatusReport {
        self.report
    }

    pub fn is_success_locked(&self) -> bool {
        self.report.success
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for StatusReport {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "StatusReport {{ rgb: ({}, {}, {}), correctness: {}, success: {} }}",
            self.reading.r,
            self.reading.g,
            self.reading.b,
            self.correctness,
            self.success
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_one_decimal() {
        let report = StatusReport {
            reading: ColorReading::new(1, 2, 3),
            correctness: 33.333,
            success: true,
        };
        assert_eq!(
            report.to_json().as_str(),
            r#"{"r":1,"g":2,"b":3,"correctness":33.3,"success":true}"#
        );
    }

    #[test]
    fn test_snapshot_freezes_at_threshold() {
        let mut state = DashboardState::new(97.0);
        state.update_snapshot(ColorReading::new(900, 20, 10), 98.6);
        assert!(state.is_success_locked());
        assert_eq!(state.report().correctness, 97.0);

        state.update_snapshot(ColorReading::new(10, 10, 10), 12.0);
        assert_eq!(state.report().correctness, 97.0);
        assert_eq!(state.report().reading, ColorReading::new(900, 20, 10));
    }
}
