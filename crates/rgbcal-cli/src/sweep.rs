//! Hue sweeps at a fixed saturation, for eyeballing calibration continuity.

use anyhow::bail;
use rgbcal_core::{ColorMapper, Rgb, RgbwOutput};

/// Finest hue step accepted, about 36 000 rows per sweep.
pub const MIN_STEP_DEGREES: f32 = 0.01;

/// Fully bright color at `hue` degrees whose smallest channel is `min`.
///
/// Inverse of the HSV hue formula with max = 1:
/// ```text
///   h' = hue / 60
///   x  = 1 − |h' mod 2 − 1|
///   (r, g, b) = min + (1 − min) × sector(h', x)
/// ```
pub fn color_at_hue(hue: f32, min: f32) -> Rgb {
    let h = hue.rem_euclid(360.0) / 60.0;
    let x = 1.0 - ((h % 2.0) - 1.0).abs();
    let [r, g, b] = match h as u32 {
        0 => [1.0, x, 0.0],
        1 => [x, 1.0, 0.0],
        2 => [0.0, 1.0, x],
        3 => [0.0, x, 1.0],
        4 => [x, 0.0, 1.0],
        _ => [1.0, 0.0, x],
    };
    let span = 1.0 - min;
    Rgb::new(min + span * r, min + span * g, min + span * b)
}

/// One row of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct SweepRow {
    pub hue: f32,
    pub input: Rgb,
    pub output: RgbwOutput,
}

/// Reject hue steps outside `[MIN_STEP_DEGREES, 360]` degrees, NaN included.
pub fn check_step(step: f32) -> anyhow::Result<()> {
    if !(MIN_STEP_DEGREES..=360.0).contains(&step) {
        bail!("hue step must be within [{MIN_STEP_DEGREES}, 360] degrees, got {step}");
    }
    Ok(())
}

/// Map colors around the whole hue circle, `step` degrees apart.
///
/// Steps below [`MIN_STEP_DEGREES`] are raised to it. Validate user input
/// with [`check_step`] first.
pub fn sweep(mapper: &ColorMapper<'_>, min: f32, brightness: f32, step: f32) -> Vec<SweepRow> {
    let step = step.max(MIN_STEP_DEGREES);
    let count = (360.0 / step).ceil() as usize;
    (0..count)
        .map(|i| {
            let hue = i as f32 * step;
            let input = color_at_hue(hue, min);
            SweepRow {
                hue,
                input,
                output: mapper.map(input, brightness),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgbcal_core::hue_degrees;

    const EPSILON: f32 = 1e-3;

    #[test]
    fn test_color_at_hue_primaries() {
        assert_eq!(color_at_hue(0.0, 0.0), Rgb::new(1.0, 0.0, 0.0));
        assert_eq!(color_at_hue(120.0, 0.0), Rgb::new(0.0, 1.0, 0.0));
        assert_eq!(color_at_hue(240.0, 0.0), Rgb::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_color_at_hue_inverts_hue_formula() {
        for min in [0.0, 0.3, 0.7] {
            for i in 0..72 {
                let hue = i as f32 * 5.0;
                let color = color_at_hue(hue, min);
                assert!((color.min_channel() - min).abs() < EPSILON);
                assert!(
                    (hue_degrees(color) - hue).abs() < EPSILON,
                    "hue {hue}, min {min}: got {}",
                    hue_degrees(color)
                );
            }
        }
    }

    #[test]
    fn test_sweep_covers_circle_once() {
        let mapper = ColorMapper::default();
        let rows = sweep(&mapper, 0.0, 1.0, 15.0);
        assert_eq!(rows.len(), 24);
        assert_eq!(rows[8].hue, 120.0);
        assert_eq!(rows[8].output, mapper.map(Rgb::new(0.0, 1.0, 0.0), 1.0));
    }

    #[test]
    fn test_check_step_bounds() {
        for step in [MIN_STEP_DEGREES, 1.0, 15.0, 360.0] {
            assert!(check_step(step).is_ok(), "step {step} should be accepted");
        }
        for step in [1e-30, 1e-6, 0.0, -15.0, 360.5, f32::NAN, f32::INFINITY] {
            assert!(check_step(step).is_err(), "step {step} should be rejected");
        }
    }

    #[test]
    fn test_tiny_step_is_raised_to_minimum() {
        let mapper = ColorMapper::default();
        let rows = sweep(&mapper, 0.0, 1.0, 1e-30);
        assert!((36_000..=36_001).contains(&rows.len()), "got {} rows", rows.len());
        assert_eq!(rows[1].hue, MIN_STEP_DEGREES);
    }
}
