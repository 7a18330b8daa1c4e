//! TCS3200 Farbsensor (Licht → Frequenz)
//!
//! Die Frequenz am OUT-Pin wird durch Zählen steigender Flanken über eine
//! feste Torzeit bestimmt. Das ist ein bewusst begrenztes Busy-Waiting:
//! höchstens `SYNC_TIMEOUT_US` für die Synchronisation plus die Torzeit.

use crate::traits::SensorPins;
use crate::types::{ColorFilter, ColorReading, FrequencyScaling};

/// Maximale Wartezeit auf die erste steigende Flanke
pub const SYNC_TIMEOUT_US: u32 = 100_000;

/// Einschwingzeit nach jedem Filterwechsel
pub const FILTER_SETTLE_MS: u32 = 10;

pub struct Tcs3200<P: SensorPins> {
    pins: P,
}

impl<P: SensorPins> Tcs3200<P> {
    pub fn new(pins: P) -> Self {
        Self { pins }
    }

    /// Standard-Konfiguration: 20 % Skalierung, Clear-Filter
    pub fn init(&mut self) {
        self.set_frequency_scaling(FrequencyScaling::TwentyPercent);
        self.set_filter(ColorFilter::Clear);
    }

    pub fn set_frequency_scaling(&mut self, scaling: FrequencyScaling) {
        let (s0, s1) = scaling.pin_levels();
        self.pins.set_scaling_pins(s0, s1);
    }

    pub fn set_filter(&mut self, filter: ColorFilter) {
        let (s2, s3) = filter.pin_levels();
        self.pins.set_filter_pins(s2, s3);
    }

    /// Misst die Frequenz am OUT-Pin in Hz
    ///
    /// Liefert 0 bei `gate_time_ms == 0`. Kommt innerhalb von
    /// `SYNC_TIMEOUT_US` keine Flanke, wird trotzdem gezählt (best effort).
    pub fn read_frequency(&mut self, gate_time_ms: u32) -> u32 {
        if gate_time_ms == 0 {
            return 0;
        }
        let gate_time_us = gate_time_ms.saturating_mul(1000);

        // Auf die erste steigende Flanke synchronisieren
        let sync_start = self.pins.now_us();
        let mut last = self.pins.output_is_high();
        while self.pins.now_us().wrapping_sub(sync_start) < SYNC_TIMEOUT_US {
            let current = self.pins.output_is_high();
            if !last && current {
                last = current;
                break;
            }
            last = current;
        }

        // Steigende Flanken innerhalb der Torzeit zählen
        let gate_start = self.pins.now_us();
        let mut count: u32 = 0;
        while self.pins.now_us().wrapping_sub(gate_start) < gate_time_us {
            let current = self.pins.output_is_high();
            if !last && current {
                count += 1;
            }
            last = current;
        }

        (u64::from(count) * 1000 / u64::from(gate_time_ms)) as u32
    }

    /// Misst Rot, Grün und Blau nacheinander und stellt danach Clear wieder ein
    pub fn read_rgb(&mut self, gate_time_ms: u32) -> ColorReading {
        let r = self.read_filtered(ColorFilter::Red, gate_time_ms);
        let g = self.read_filtered(ColorFilter::Green, gate_time_ms);
        let b = self.read_filtered(ColorFilter::Blue, gate_time_ms);

        self.set_filter(ColorFilter::Clear);
        ColorReading::new(r, g, b)
    }

    pub fn into_inner(self) -> P {
        self.pins
    }

    fn read_filtered(&mut self, filter: ColorFilter, gate_time_ms: u32) -> u32 {
        self.set_filter(filter);
        self.pins.delay_ms(FILTER_SETTLE_MS);
        self.read_frequency(gate_time_ms)
    }
}
