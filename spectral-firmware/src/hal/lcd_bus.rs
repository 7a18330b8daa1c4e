// HD44780 4-Bit Bus über sechs GPIO-Ausgänge

use esp_hal::delay::Delay;
use esp_hal::gpio::{Level, Output};
use spectral_core::LcdBus;

pub struct GpioLcdBus {
    rs: Output<'static>,
    en: Output<'static>,
    /// D4, D5, D6, D7
    data: [Output<'static>; 4],
    delay: Delay,
}

impl GpioLcdBus {
    pub fn new(rs: Output<'static>, en: Output<'static>, data: [Output<'static>; 4]) -> Self {
        Self {
            rs,
            en,
            data,
            delay: Delay::new(),
        }
    }
}

impl LcdBus for GpioLcdBus {
    fn set_register_select(&mut self, data: bool) {
        self.rs.set_level(Level::from(data));
    }

    fn set_enable(&mut self, high: bool) {
        self.en.set_level(Level::from(high));
    }

    fn set_data_nibble(&mut self, nibble: u8) {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            pin.set_level(Level::from((nibble >> bit) & 0x01 != 0));
        }
    }

    fn delay_us(&mut self, us: u32) {
        self.delay.delay_micros(us);
    }
}
