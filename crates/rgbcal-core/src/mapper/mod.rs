//! Color calibration mapper — requested color and brightness to duty cycles.
//!
//! # Algorithm
//! The table is a grid of measurements indexed by saturation ring and hue
//! position, each cell holding a 1% and a 100% brightness sample. A request
//! is resolved by four nested linear interpolations:
//!
//! ```text
//!   level    = 7 × min(r, g, b)          → rings ⌊level⌋, ⌈level⌉ (clamped to 0..=6)
//!   position = hue(r, g, b) / 15°        → points ⌊pos⌋, ⌈pos⌉ (24 wraps to 0)
//!
//!   for each of the two rings:
//!       point = lerp(ring[⌊pos⌋], ring[⌈pos⌉], pos − ⌊pos⌋)
//!       rgb   = point.low + (brightness − 0.01) × (point.high − point.low)
//!
//!   out = lerp(rgb_low_ring, rgb_high_ring, level − ⌊level⌋)
//!   out.red = 0 if out.red < 0.01
//! ```
//!
//! Coinciding grid indices skip the corresponding interpolation, which is
//! also what the interpolated branch converges to, so the output is
//! continuous across grid lines and across the 345°/0° seam.
//!
//! # Complexity
//! O(1): at most four table cells are read. No allocation.

pub mod options;

pub use options::{BrightnessPolicy, DEFAULT_SNAP_THRESHOLD, MapperOptions, SnapPolicy};

use crate::color::{Rgb, RgbwOutput, hue_degrees};
use crate::table::{
    CalibrationCircle, CalibrationPoint, HUE_STEP_DEGREES, POSITIONS_PER_RING, RING_COUNT,
};

/// Multiplier from the smallest requested channel to the continuous ring level.
///
/// The measured rings have minimum components 0, 35, 73, 109, 145, 181 and
/// 219 of 255, which this scale places at levels ≈ 0, 1, 2, 3, 4, 5, 6.
pub const RING_LEVEL_SCALE: f32 = RING_COUNT as f32;

const LAST_RING: usize = RING_COUNT - 1;

/// Where a requested color falls on the calibration grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLocation {
    /// Continuous saturation coordinate, `7 × min(r, g, b)`, unclamped.
    pub ring_level: f32,
    pub ring_low: usize,
    pub ring_high: usize,
    /// Hue angle in degrees, `[0, 360)`.
    pub hue: f32,
    /// Continuous hue coordinate along a ring, `hue / 15`.
    pub position: f32,
    pub position_low: usize,
    pub position_high: usize,
}

impl GridLocation {
    pub fn of(color: Rgb) -> Self {
        let ring_level = RING_LEVEL_SCALE * color.min_channel();
        let hue = hue_degrees(color);
        let position = hue / HUE_STEP_DEGREES;
        Self {
            ring_level,
            ring_low: ring_index(ring_level.floor()),
            ring_high: ring_index(ring_level.ceil()),
            hue,
            position,
            position_low: position_index(position.floor()),
            position_high: position_index(position.ceil()),
        }
    }

    /// Weight of the higher ring. Only meaningful when the rings differ.
    pub fn ring_fraction(&self) -> f32 {
        self.ring_level - self.ring_low as f32
    }

    /// Weight of the higher hue position. Only meaningful when they differ.
    pub fn position_fraction(&self) -> f32 {
        self.position - self.position.floor()
    }
}

// NaN saturates to index 0 through the `as` cast.
fn ring_index(level: f32) -> usize {
    level.clamp(0.0, LAST_RING as f32) as usize
}

fn position_index(position: f32) -> usize {
    position.max(0.0) as usize % POSITIONS_PER_RING
}

/// Maps requested colors to calibrated duty cycles using a borrowed table.
///
/// Cheap to copy and `Send + Sync`; share one table across any number of
/// mappers and threads.
#[derive(Debug, Clone, Copy)]
pub struct ColorMapper<'a> {
    circle: &'a CalibrationCircle,
    options: MapperOptions,
}

impl<'a> ColorMapper<'a> {
    pub fn new(circle: &'a CalibrationCircle) -> Self {
        Self::with_options(circle, MapperOptions::default())
    }

    pub fn with_options(circle: &'a CalibrationCircle, options: MapperOptions) -> Self {
        Self { circle, options }
    }

    pub fn circle(&self) -> &'a CalibrationCircle {
        self.circle
    }

    pub fn options(&self) -> &MapperOptions {
        &self.options
    }

    /// Grid coordinates used for `color`, for diagnostics.
    pub fn locate(&self, color: Rgb) -> GridLocation {
        GridLocation::of(color)
    }

    /// Calibrated duty cycles for `color` at `brightness`.
    ///
    /// Total over its inputs: out-of-range values extrapolate rather than
    /// fail. Outputs are not clamped; clamp downstream if the hardware
    /// requires it. `white` is always zero.
    pub fn map(&self, color: Rgb, brightness: f32) -> RgbwOutput {
        let loc = GridLocation::of(color);
        let brightness = self.options.brightness.apply(brightness);

        let low_ring = self.hue_point(loc.ring_low, &loc).at_brightness(brightness);
        let rgb = if loc.ring_low == loc.ring_high {
            low_ring
        } else {
            let high_ring = self.hue_point(loc.ring_high, &loc).at_brightness(brightness);
            low_ring.lerp(high_ring, loc.ring_fraction())
        };

        let rgb = self.options.snap.apply(rgb, self.options.snap_threshold);
        RgbwOutput::from_rgb(rgb)
    }

    /// [`map`](Self::map) taking loose channel values.
    pub fn map_channels(&self, red: f32, green: f32, blue: f32, brightness: f32) -> RgbwOutput {
        self.map(Rgb::new(red, green, blue), brightness)
    }

    /// Calibration point of `ring` interpolated along the hue axis.
    fn hue_point(&self, ring: usize, loc: &GridLocation) -> CalibrationPoint {
        let a = self.circle.cell(ring, loc.position_low);
        if loc.position_low == loc.position_high {
            return *a;
        }
        let b = self.circle.cell(ring, loc.position_high);
        a.lerp(b, loc.position_fraction())
    }
}

impl Default for ColorMapper<'static> {
    /// Mapper over the built-in table with stock-firmware options.
    fn default() -> Self {
        Self::new(CalibrationCircle::builtin())
    }
}
