//! Status-LEDs auf einer RGB SmartLED
//!
//! Jeder Farbkanal der SmartLED verhält sich wie eine eigene PWM-LED mit
//! 16-Bit Helligkeit.

use rgb::RGB8;

use crate::traits::{SmartLedWriter, StatusLedError};
use crate::types::ColorChannel;

pub struct SmartStatusLed<W: SmartLedWriter> {
    writer: W,
    color: RGB8,
    max_brightness: u8,
}

impl<W: SmartLedWriter> SmartStatusLed<W> {
    /// `max_brightness` begrenzt jeden Kanal (WS2812 sind sehr hell)
    pub fn new(writer: W, max_brightness: u8) -> Self {
        Self {
            writer,
            color: RGB8::default(),
            max_brightness,
        }
    }

    /// Setzt die Helligkeit eines Kanals (0..=65535) und schreibt die LED
    ///
    /// Der 16-Bit Wert wird auf `0..=max_brightness` des 8-Bit Kanals skaliert.
    /// Bei `max_brightness = 32` bleiben damit nur 33 unterscheidbare Stufen.
    pub fn set_output_intensity(
        &mut self,
        channel: ColorChannel,
        level: u16,
    ) -> Result<(), StatusLedError> {
        let scaled = (u32::from(level) * u32::from(self.max_brightness) / u32::from(u16::MAX)) as u8;
        match channel {
            ColorChannel::Red => self.color.r = scaled,
            ColorChannel::Green => self.color.g = scaled,
            ColorChannel::Blue => self.color.b = scaled,
        }
        self.writer.write(self.color)
    }

    pub fn color(&self) -> RGB8 {
        self.color
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}
