// Potentiometer an ADC1 (12 Bit, 11 dB Dämpfung → 0..3.3 V)

use defmt::warn;
use esp_hal::Blocking;
use esp_hal::analog::adc::{Adc, AdcConfig, AdcPin, Attenuation};
use esp_hal::peripherals::{ADC1, GPIO0, GPIO1, GPIO2};
use spectral_core::{AnalogInputs, ColorChannel};

pub struct AdcPots {
    adc: Adc<'static, ADC1<'static>, Blocking>,
    red: AdcPin<GPIO0<'static>, ADC1<'static>>,
    green: AdcPin<GPIO1<'static>, ADC1<'static>>,
    blue: AdcPin<GPIO2<'static>, ADC1<'static>>,
}

impl AdcPots {
    pub fn new(
        adc1: ADC1<'static>,
        red: GPIO0<'static>,
        green: GPIO1<'static>,
        blue: GPIO2<'static>,
    ) -> Self {
        let mut config = AdcConfig::new();
        let red = config.enable_pin(red, Attenuation::_11dB);
        let green = config.enable_pin(green, Attenuation::_11dB);
        let blue = config.enable_pin(blue, Attenuation::_11dB);

        Self {
            adc: Adc::new(adc1, config),
            red,
            green,
            blue,
        }
    }
}

impl AnalogInputs for AdcPots {
    fn read_raw(&mut self, channel: ColorChannel) -> u16 {
        let result = match channel {
            ColorChannel::Red => nb::block!(self.adc.read_oneshot(&mut self.red)),
            ColorChannel::Green => nb::block!(self.adc.read_oneshot(&mut self.green)),
            ColorChannel::Blue => nb::block!(self.adc.read_oneshot(&mut self.blue)),
        };

        result.unwrap_or_else(|_| {
            warn!("ADC: Read failed on {}", channel);
            0
        })
    }
}
