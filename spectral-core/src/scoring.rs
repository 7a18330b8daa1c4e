//! Bewertungsstrategien: Farbmessung → Korrektheit in Prozent
//!
//! Beide Strategien sind zustandslose Pure Functions und austauschbar.

use crate::types::{ColorChannel, ColorReading};

/// Bewertet eine Farbmessung mit einer Korrektheit von 0..=100
pub trait CorrectnessScorer {
    fn score(&self, reading: ColorReading) -> f32;
}

/// Anteil eines Kanals am gesamten Licht
///
/// ```
/// # use spectral_core::{ColorReading, CorrectnessScorer, DominanceRatio};
/// let red = DominanceRatio::default();
/// assert_eq!(red.score(ColorReading::new(800, 100, 100)), 80.0);
/// assert_eq!(red.score(ColorReading::new(0, 0, 0)), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DominanceRatio {
    pub channel: ColorChannel,
}

impl Default for DominanceRatio {
    fn default() -> Self {
        Self {
            channel: ColorChannel::Red,
        }
    }
}

impl CorrectnessScorer for DominanceRatio {
    fn score(&self, reading: ColorReading) -> f32 {
        let total_light = u64::from(reading.r) + u64::from(reading.g) + u64::from(reading.b);

        // Absolut dunkel: keine Division durch 0
        if total_light == 0 {
            return 0.0;
        }

        (self.channel.pick(reading) as f32 * 100.0) / total_light as f32
    }
}

/// Abstand zu einer Ziel-Farbe
///
/// Mittelt den relativen Fehler `|gemessen - ziel| / ziel` über alle drei
/// Kanäle und invertiert ihn: `100 * (1 - mittlerer Fehler)`, begrenzt auf 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetDistance {
    pub target: ColorReading,
}

impl TargetDistance {
    pub const fn new(target: ColorReading) -> Self {
        Self { target }
    }
}

/// Relativer Fehler eines Kanals; Ziel 0 zählt nur exakt 0 als Treffer
fn relative_error(measured: u32, target: u32) -> f32 {
    if target == 0 {
        return if measured == 0 { 0.0 } else { 1.0 };
    }
    measured.abs_diff(target) as f32 / target as f32
}

impl CorrectnessScorer for TargetDistance {
    fn score(&self, reading: ColorReading) -> f32 {
        let avg_error = (relative_error(reading.r, self.target.r)
            + relative_error(reading.g, self.target.g)
            + relative_error(reading.b, self.target.b))
            / 3.0;

        (100.0 * (1.0 - avg_error)).clamp(0.0, 100.0)
    }
}

/// Auswahl der Bewertungsstrategie zur Compile-Zeit (siehe Firmware-Config)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scoring {
    Dominance(DominanceRatio),
    TargetDistance(TargetDistance),
}

impl CorrectnessScorer for Scoring {
    fn score(&self, reading: ColorReading) -> f32 {
        match self {
            Scoring::Dominance(strategy) => strategy.score(reading),
            Scoring::TargetDistance(strategy) => strategy.score(reading),
        }
    }
}
