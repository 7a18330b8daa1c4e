//! Inhalt des 16x2 Displays

use core::fmt::Write;

use heapless::String;

use crate::dashboard::StatusReport;
use crate::types::Direction;

/// Eine Display-Zeile (16 Zeichen)
pub type LcdLine = String<16>;

fn line(text: &str) -> LcdLine {
    let mut line = LcdLine::new();
    for c in text.chars().take(16) {
        if line.push(c).is_err() {
            break;
        }
    }
    line
}

/// Status-Ansicht: Korrektheit und Motorzustand
///
/// ```
/// # use spectral_core::{ColorReading, Direction, StatusReport, render_status};
/// let report = StatusReport {
///     reading: ColorReading::new(800, 100, 100),
///     correctness: 80.04,
///     success: false,
/// };
/// let [top, bottom] = render_status(&report, Direction::Forward);
/// assert_eq!(top.as_str(), "Match:  80.0%");
/// assert_eq!(bottom.as_str(), "Motor: FWD");
/// ```
pub fn render_status(report: &StatusReport, direction: Direction) -> [LcdLine; 2] {
    if report.success {
        return [line("** SUCCESS! **"), line("Treasure found")];
    }

    let mut top = LcdLine::new();
    let _ = write!(top, "Match: {:5.1}%", report.correctness);
    let mut bottom = LcdLine::new();
    let _ = write!(bottom, "Motor: {}", direction.label());
    [top, bottom]
}

/// Ansicht bei gedrücktem Taster: IP-Adresse des Access Points
pub fn render_network_info(ip: &str) -> [LcdLine; 2] {
    [line("IP Address:"), line(ip)]
}
