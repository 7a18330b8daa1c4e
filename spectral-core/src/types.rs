//! Core Types für Sensor, Motor und Anzeige
//!
//! Datenstrukturen ohne Hardware-Dependencies

use rgb::RGB;

/// Gemessene Frequenzen der drei Farbkanäle in Hz
pub type ColorReading = RGB<u32>;

/// Drehrichtung der H-Brücke
///
/// `Brake` ist sowohl der sichere Startzustand als auch der Endzustand
/// jeder abgeschlossenen Bewegung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Forward,
    Reverse,
    #[default]
    Brake,
}

impl Direction {
    /// Pegel der Richtungseingänge (IN1, IN2)
    pub const fn pin_levels(self) -> (bool, bool) {
        match self {
            Direction::Forward => (true, false),
            Direction::Reverse => (false, true),
            Direction::Brake => (false, false),
        }
    }

    /// Kurzlabel für das 16-Zeichen Display
    pub const fn label(self) -> &'static str {
        match self {
            Direction::Forward => "FWD",
            Direction::Reverse => "REV",
            Direction::Brake => "STOP",
        }
    }
}

/// Farbkanal (Potentiometer, Status-LED, Dominanz-Bewertung)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorChannel {
    Red,
    Green,
    Blue,
}

impl ColorChannel {
    pub const ALL: [ColorChannel; 3] = [ColorChannel::Red, ColorChannel::Green, ColorChannel::Blue];

    /// Liest den Wert dieses Kanals aus einer Messung
    pub fn pick(self, reading: ColorReading) -> u32 {
        match self {
            ColorChannel::Red => reading.r,
            ColorChannel::Green => reading.g,
            ColorChannel::Blue => reading.b,
        }
    }
}

/// Photodioden-Filter des TCS3200 (Auswahl über S2/S3)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorFilter {
    Red,
    Green,
    Blue,
    Clear,
}

impl ColorFilter {
    /// Pegel der Filter-Pins (S2, S3)
    pub const fn pin_levels(self) -> (bool, bool) {
        match self {
            ColorFilter::Red => (false, false),
            ColorFilter::Blue => (false, true),
            ColorFilter::Clear => (true, false),
            ColorFilter::Green => (true, true),
        }
    }
}

/// Frequenz-Skalierung des TCS3200 (Auswahl über S0/S1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrequencyScaling {
    PowerDown,
    TwoPercent,
    TwentyPercent,
    Full,
}

impl FrequencyScaling {
    /// Pegel der Skalierungs-Pins (S0, S1)
    pub const fn pin_levels(self) -> (bool, bool) {
        match self {
            FrequencyScaling::PowerDown => (false, false),
            FrequencyScaling::TwoPercent => (false, true),
            FrequencyScaling::TwentyPercent => (true, false),
            FrequencyScaling::Full => (true, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_pin_levels() {
        assert_eq!(Direction::Forward.pin_levels(), (true, false));
        assert_eq!(Direction::Reverse.pin_levels(), (false, true));
        assert_eq!(Direction::Brake.pin_levels(), (false, false));
    }

    #[test]
    fn test_direction_defaults_to_brake() {
        assert_eq!(Direction::default(), Direction::Brake);
    }

    #[test]
    fn test_channel_pick() {
        let reading = ColorReading::new(1, 2, 3);
        assert_eq!(ColorChannel::Red.pick(reading), 1);
        assert_eq!(ColorChannel::Green.pick(reading), 2);
        assert_eq!(ColorChannel::Blue.pick(reading), 3);
    }
}
