// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;
pub mod web;

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use spectral_core::DashboardState;

// Re-exports von spectral-core
pub use spectral_core::{
    ActuatorConfig, ActuatorEvent, ColorReading, Direction, MotorActuator, StatusReport,
};

/// Dashboard-Zustand, geteilt zwischen Spiel-Schleife (schreibt pro Tick)
/// und HTTP-Server (liest pro Request)
///
/// Blocking Mutex: Zugriffe sind kurz und halten nie über ein `.await`.
pub type SharedDashboard = Mutex<CriticalSectionRawMutex, RefCell<DashboardState>>;
