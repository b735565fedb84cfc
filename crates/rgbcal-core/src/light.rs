//! Stateful RGB light output and the seam to the PWM driver.

use crate::color::{Rgb, RgbwOutput};
use crate::mapper::ColorMapper;

/// Writes duty cycles to the physical LED channels.
///
/// Implementations translate normalized values into PWM signals and
/// clamp to whatever bounds the hardware requires.
pub trait LightDriver {
    fn write(&mut self, output: &RgbwOutput);
}

/// Driver that records every write. Useful for tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct RecordingDriver {
    pub writes: Vec<RgbwOutput>,
}

impl RecordingDriver {
    pub fn last(&self) -> Option<&RgbwOutput> {
        self.writes.last()
    }
}

impl LightDriver for RecordingDriver {
    fn write(&mut self, output: &RgbwOutput) {
        self.writes.push(*output);
    }
}

/// An RGB light remembering the duty cycles of its most recent request.
#[derive(Debug, Clone)]
pub struct CalibratedLight<'a> {
    mapper: ColorMapper<'a>,
    output: RgbwOutput,
}

impl<'a> CalibratedLight<'a> {
    pub fn new(mapper: ColorMapper<'a>) -> Self {
        Self {
            mapper,
            output: RgbwOutput::OFF,
        }
    }

    pub fn mapper(&self) -> &ColorMapper<'a> {
        &self.mapper
    }

    /// Duty cycles of the last request, or [`RgbwOutput::OFF`].
    pub fn output(&self) -> RgbwOutput {
        self.output
    }

    /// Map and store the duty cycles for `color` at `brightness`.
    ///
    /// Inputs outside `[0, 1]` are honored (they extrapolate) but logged.
    pub fn set_color(&mut self, color: Rgb, brightness: f32) -> RgbwOutput {
        if !color.is_normalized() || !(0.0..=1.0).contains(&brightness) {
            tracing::warn!("color {color} at brightness {brightness} is outside [0, 1]");
        }
        self.output = self.mapper.map(color, brightness);
        tracing::debug!("RGB {}", self.output.rgb());
        self.output
    }

    /// [`set_color`](Self::set_color), then forward the result to `driver`.
    pub fn apply(
        &mut self,
        color: Rgb,
        brightness: f32,
        driver: &mut dyn LightDriver,
    ) -> RgbwOutput {
        let output = self.set_color(color, brightness);
        driver.write(&output);
        output
    }

    /// Forget the last request. The hardware is left untouched; use
    /// [`turn_off_with`](Self::turn_off_with) to darken it too.
    pub fn turn_off(&mut self) {
        self.output = RgbwOutput::OFF;
    }

    /// [`turn_off`](Self::turn_off), then write [`RgbwOutput::OFF`] to `driver`.
    pub fn turn_off_with(&mut self, driver: &mut dyn LightDriver) {
        self.turn_off();
        driver.write(&self.output);
    }
}

impl Default for CalibratedLight<'static> {
    fn default() -> Self {
        Self::new(ColorMapper::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_light_is_off() {
        assert_eq!(CalibratedLight::default().output(), RgbwOutput::OFF);
    }

    #[test]
    fn test_set_color_stores_mapped_output() {
        let mut light = CalibratedLight::default();
        let color = Rgb::new(0.2, 0.9, 0.4);
        let out = light.set_color(color, 0.6);
        assert_eq!(out, light.mapper().map(color, 0.6));
        assert_eq!(light.output(), out);
    }

    #[test]
    fn test_apply_forwards_to_driver() {
        let mut light = CalibratedLight::default();
        let mut driver = RecordingDriver::default();
        light.apply(Rgb::new(1.0, 0.0, 0.0), 1.0, &mut driver);
        light.apply(Rgb::new(0.0, 1.0, 0.0), 0.5, &mut driver);
        assert_eq!(driver.writes.len(), 2);
        assert_eq!(driver.last(), Some(&light.output()));
    }

    #[test]
    fn test_turn_off_resets_output() {
        let mut light = CalibratedLight::default();
        light.set_color(Rgb::new(0.5, 0.5, 0.5), 1.0);
        light.turn_off();
        assert_eq!(light.output(), RgbwOutput::OFF);
    }

    #[test]
    fn test_turn_off_with_darkens_driver() {
        let mut light = CalibratedLight::default();
        let mut driver = RecordingDriver::default();
        light.apply(Rgb::new(0.0, 0.0, 1.0), 1.0, &mut driver);
        light.turn_off_with(&mut driver);
        assert_eq!(driver.writes.len(), 2);
        assert_eq!(driver.last(), Some(&RgbwOutput::OFF));
        assert_eq!(light.output(), RgbwOutput::OFF);
    }

    #[test]
    fn test_out_of_range_input_still_maps() {
        let mut light = CalibratedLight::default();
        let out = light.set_color(Rgb::new(1.2, -0.1, 0.0), 1.4);
        assert!(out.green.is_finite() && out.blue.is_finite());
    }
}
