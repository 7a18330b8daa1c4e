// Taster gegen GND mit internem Pull-Up

use esp_hal::gpio::Input;
use spectral_core::PushButton;

/// Offen = High, gedrückt = Low; `is_pressed()` invertiert die Polarität
pub struct ActiveLowButton {
    pin: Input<'static>,
}

impl ActiveLowButton {
    /// Erwartet einen Input mit `Pull::Up`
    pub fn new(pin: Input<'static>) -> Self {
        Self { pin }
    }
}

impl PushButton for ActiveLowButton {
    fn is_pressed(&mut self) -> bool {
        self.pin.is_low()
    }
}
