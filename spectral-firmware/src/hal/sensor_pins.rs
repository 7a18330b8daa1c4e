// TCS3200 Pins: S0..S3 als Ausgänge, OUT als Eingang

use esp_hal::delay::Delay;
use esp_hal::gpio::{Input, Level, Output};
use esp_hal::time::Instant;
use spectral_core::SensorPins;

pub struct GpioSensorPins {
    s0: Output<'static>,
    s1: Output<'static>,
    s2: Output<'static>,
    s3: Output<'static>,
    out: Input<'static>,
    delay: Delay,
}

impl GpioSensorPins {
    pub fn new(
        s0: Output<'static>,
        s1: Output<'static>,
        s2: Output<'static>,
        s3: Output<'static>,
        out: Input<'static>,
    ) -> Self {
        Self {
            s0,
            s1,
            s2,
            s3,
            out,
            delay: Delay::new(),
        }
    }
}

impl SensorPins for GpioSensorPins {
    fn set_scaling_pins(&mut self, s0: bool, s1: bool) {
        self.s0.set_level(Level::from(s0));
        self.s1.set_level(Level::from(s1));
    }

    fn set_filter_pins(&mut self, s2: bool, s3: bool) {
        self.s2.set_level(Level::from(s2));
        self.s3.set_level(Level::from(s3));
    }

    fn output_is_high(&mut self) -> bool {
        self.out.is_high()
    }

    fn now_us(&mut self) -> u32 {
        // Überlauf nach ~71 Minuten, der Zähler rechnet mit wrapping_sub
        Instant::now().duration_since_epoch().as_micros() as u32
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_millis(ms);
    }
}
