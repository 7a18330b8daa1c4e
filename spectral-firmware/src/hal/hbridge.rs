// H-Brücke: zwei GPIO-Richtungseingänge + LEDC PWM für die Geschwindigkeit

use esp_hal::gpio::{Level, Output};
use esp_hal::ledc::LowSpeed;
use esp_hal::ledc::channel::{Channel, ChannelHW};
use spectral_core::{Direction, HBridgeDriver, PWM_MAX_DUTY};

/// H-Brücke (L298N: IN1, IN2, ENA)
pub struct LedcHBridge {
    in1: Output<'static>,
    in2: Output<'static>,
    enable: Channel<'static, LowSpeed>,
    max_hw_duty: u32,
}

impl LedcHBridge {
    /// `max_hw_duty` ist der größte Duty-Wert der LEDC-Timer Auflösung
    pub fn new(
        in1: Output<'static>,
        in2: Output<'static>,
        enable: Channel<'static, LowSpeed>,
        max_hw_duty: u32,
    ) -> Self {
        Self {
            in1,
            in2,
            enable,
            max_hw_duty,
        }
    }
}

impl HBridgeDriver for LedcHBridge {
    fn set_direction(&mut self, direction: Direction) {
        let (in1, in2) = direction.pin_levels();
        self.in1.set_level(Level::from(in1));
        self.in2.set_level(Level::from(in2));
    }

    fn set_duty(&mut self, level: u16) {
        // 16-Bit Duty auf die LEDC-Auflösung umrechnen
        let hw_duty = u32::from(level.min(PWM_MAX_DUTY)) * self.max_hw_duty / u32::from(PWM_MAX_DUTY);
        self.enable.set_duty_hw(hw_duty);
    }
}
