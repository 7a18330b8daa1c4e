//! Spectral Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits für die Peripherie, die Zustandsautomaten
//! (Motor, Sensor, Display) und Pure Functions für die Bewertung.

#![no_std]

pub mod actuator;
pub mod analog;
pub mod button;
pub mod dashboard;
pub mod lcd;
pub mod logic;
pub mod scoring;
pub mod screen;
pub mod sensor;
pub mod status_led;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use actuator::{ActuatorConfig, ActuatorEvent, ActuatorState, MotorActuator, PWM_MAX_DUTY};
pub use analog::{ADC_MAX_VALUE, adc_to_pwm, update_intensity};
pub use button::Debouncer;
pub use dashboard::{DashboardState, StatusReport};
pub use lcd::Hd44780;
pub use logic::{TickOutcome, process_tick};
pub use scoring::{CorrectnessScorer, DominanceRatio, Scoring, TargetDistance};
pub use screen::{LcdLine, render_network_info, render_status};
pub use sensor::Tcs3200;
pub use status_led::SmartStatusLed;
pub use traits::{
    AnalogInputs, HBridgeDriver, LcdBus, PushButton, SensorPins, SmartLedWriter, StatusLedError,
};
pub use types::{ColorChannel, ColorFilter, ColorReading, Direction, FrequencyScaling};
