//! ADC Driver
//!
//! Blocking joystick reads on ADC1 at 10-bit resolution.

use embassy_stm32::adc::{Adc, AdcChannel, AnyAdcChannel, Resolution, SampleTime};
use embassy_stm32::peripherals::ADC1;

use crate::controller::sampler::AnalogInput;
use crate::types::Axis;

/// ADC reading result
#[derive(Clone, Copy, Debug)]
pub struct AdcReading {
    /// Raw 10-bit ADC value (0-1023)
    raw: u16,
}

impl AdcReading {
    /// Create a new ADC reading from raw value
    #[must_use]
    pub const fn from_raw(raw: u16) -> Self {
        Self { raw }
    }

    /// Get the raw value
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.raw
    }
}

impl defmt::Format for AdcReading {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "ADC({})", self.raw);
    }
}

/// Two-axis joystick on ADC1
pub struct JoystickAdc<'d> {
    adc: Adc<'d, ADC1>,
    x: AnyAdcChannel<ADC1>,
    y: AnyAdcChannel<ADC1>,
}

impl JoystickAdc<'_> {
    /// Create and configure the joystick ADC
    #[must_use]
    pub fn new(
        adc: ADC1,
        x: impl AdcChannel<ADC1>,
        y: impl AdcChannel<ADC1>,
    ) -> Self {
        let mut adc = Adc::new(adc);
        adc.set_resolution(Resolution::BITS10);
        // Potentiometer wipers are high impedance, sample slowly
        adc.set_sample_time(SampleTime::CYCLES247_5);
        Self {
            adc,
            x: x.degrade_adc(),
            y: y.degrade_adc(),
        }
    }

    /// Read one axis
    pub fn read_axis(&mut self, axis: Axis) -> AdcReading {
        let channel = match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        };
        AdcReading::from_raw(self.adc.blocking_read(channel))
    }
}

impl AnalogInput for JoystickAdc<'_> {
    fn read(&mut self, axis: Axis) -> u16 {
        self.read_axis(axis).raw()
    }
}
