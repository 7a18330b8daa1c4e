//! Pure Business Logic Functions
//!
//! Ein Polling-Tick ohne Hardware-Dependencies (testbar!)

use crate::actuator::{ActuatorEvent, MotorActuator};
use crate::dashboard::{DashboardState, StatusReport};
use crate::scoring::CorrectnessScorer;
use crate::traits::HBridgeDriver;
use crate::types::ColorReading;

/// Ergebnis eines Ticks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    pub correctness: f32,
    pub event: Option<ActuatorEvent>,
    pub report: StatusReport,
}

/// Messung → Bewertung → Motor → Dashboard
///
/// Die Hardware-Seite (Sensor lesen, Display, Pause) übernimmt der Aufrufer.
pub fn process_tick<S: CorrectnessScorer, H: HBridgeDriver>(
    reading: ColorReading,
    now_ms: u64,
    scorer: &S,
    actuator: &mut MotorActuator<H>,
    dashboard: &mut DashboardState,
) -> TickOutcome {
    let correctness = scorer.score(reading);
    let event = actuator.update(correctness, now_ms);
    dashboard.update_snapshot(reading, correctness);

    TickOutcome {
        correctness,
        event,
        report: dashboard.report(),
    }
}
