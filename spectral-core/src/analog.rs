//! Potentiometer → LED-Helligkeit
//!
//! Der ADC liefert 12 Bit (0..=4095), die LED-Helligkeit wird mit 16 Bit
//! (0..=65535) angegeben.

use crate::status_led::SmartStatusLed;
use crate::traits::{AnalogInputs, SmartLedWriter, StatusLedError};
use crate::types::ColorChannel;

/// Maximaler Wert des 12-Bit ADC
pub const ADC_MAX_VALUE: u16 = 4095;

/// Skaliert einen 12-Bit ADC-Wert auf den 16-Bit PWM-Bereich
///
/// ```
/// # use spectral_core::adc_to_pwm;
/// assert_eq!(adc_to_pwm(0), 0);
/// assert_eq!(adc_to_pwm(2048), 32768);
/// assert_eq!(adc_to_pwm(4095), 65520);
/// ```
pub fn adc_to_pwm(raw: u16) -> u16 {
    let raw = u32::from(raw.min(ADC_MAX_VALUE));
    ((raw * (u32::from(u16::MAX) + 1)) / (u32::from(ADC_MAX_VALUE) + 1)) as u16
}

/// Liest ein Potentiometer, setzt die Helligkeit des LED-Kanals und
/// gibt den rohen ADC-Wert zurück
pub fn update_intensity<A: AnalogInputs, W: SmartLedWriter>(
    pots: &mut A,
    led: &mut SmartStatusLed<W>,
    pot: ColorChannel,
    led_channel: ColorChannel,
) -> Result<u16, StatusLedError> {
    let raw = pots.read_raw(pot).min(ADC_MAX_VALUE);
    led.set_output_intensity(led_channel, adc_to_pwm(raw))?;
    Ok(raw)
}
