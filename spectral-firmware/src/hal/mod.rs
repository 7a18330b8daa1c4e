// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul implementiert die Traits aus spectral-core
// mit den esp-hal Peripherals des ESP32-C6.

pub mod button;
pub mod hbridge;
pub mod lcd_bus;
pub mod led_writer;
pub mod pots;
pub mod sensor_pins;

pub use button::ActiveLowButton;
pub use hbridge::LedcHBridge;
pub use lcd_bus::GpioLcdBus;
pub use led_writer::{DisabledLed, RmtLedWriter};
pub use pots::AdcPots;
pub use sensor_pins::GpioSensorPins;
