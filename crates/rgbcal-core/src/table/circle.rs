//! Calibration table layout: points, rings, and the full circle.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// Number of saturation rings in a circle.
pub const RING_COUNT: usize = 7;
/// Number of hue positions on each ring.
pub const POSITIONS_PER_RING: usize = 24;
/// Hue distance between two neighboring positions on a ring.
pub const HUE_STEP_DEGREES: f32 = 360.0 / POSITIONS_PER_RING as f32;

/// Brightness at which the "low" measurement was taken.
pub const LOW_BRIGHTNESS: f32 = 0.01;
/// Brightness at which the "high" measurement was taken.
pub const HIGH_BRIGHTNESS: f32 = 1.0;

/// Smallest 8-bit component of the colors each ring was measured with.
pub const RING_MIN_COMPONENTS: [u8; RING_COUNT] = [0, 35, 73, 109, 145, 181, 219];

/// Duty cycles measured for one (ring, hue position) grid cell.
///
/// `high` is not guaranteed to be above `low` on every channel; the
/// measurements carry noise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationPoint {
    /// Duty cycles at [`LOW_BRIGHTNESS`].
    pub low: Rgb,
    /// Duty cycles at [`HIGH_BRIGHTNESS`].
    pub high: Rgb,
}

impl CalibrationPoint {
    pub const fn new(low: [f32; 3], high: [f32; 3]) -> Self {
        Self {
            low: Rgb::from_array(low),
            high: Rgb::from_array(high),
        }
    }

    /// Interpolate both measurements toward `other`.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            low: self.low.lerp(other.low, t),
            high: self.high.lerp(other.high, t),
        }
    }

    /// Duty cycles at `brightness`, linear between the two measurements.
    ///
    /// ```text
    /// out = low + (brightness − 0.01) × (high − low)
    /// ```
    ///
    /// Brightness outside `[0.01, 1.0]` extrapolates along the same line.
    pub fn at_brightness(&self, brightness: f32) -> Rgb {
        self.low.lerp(self.high, brightness - LOW_BRIGHTNESS)
    }

    fn channels(&self) -> impl Iterator<Item = f32> {
        self.low.to_array().into_iter().chain(self.high.to_array())
    }
}

/// The 24 hue positions of one saturation level, starting at 0°.
pub type Ring = [CalibrationPoint; POSITIONS_PER_RING];

/// The complete measured table: 7 rings of 24 points.
///
/// Immutable once built. Share it by reference; the mapper never copies it.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationCircle {
    rings: [Ring; RING_COUNT],
}

impl CalibrationCircle {
    pub const fn from_rings(rings: [Ring; RING_COUNT]) -> Self {
        Self { rings }
    }

    /// The measured table shipped with the crate.
    pub fn builtin() -> &'static Self {
        &super::builtin::BEDSIDE_LAMP_2
    }

    pub fn rings(&self) -> &[Ring; RING_COUNT] {
        &self.rings
    }

    pub fn ring(&self, index: usize) -> Option<&Ring> {
        self.rings.get(index)
    }

    pub fn point(&self, ring: usize, position: usize) -> Option<&CalibrationPoint> {
        self.ring(ring).and_then(|r| r.get(position))
    }

    /// Grid lookup for indices already known to be in range.
    pub(crate) fn cell(&self, ring: usize, position: usize) -> &CalibrationPoint {
        &self.rings[ring][position]
    }

    /// Iterate every `(ring, position, point)` triple.
    pub fn points(&self) -> impl Iterator<Item = (usize, usize, &CalibrationPoint)> {
        self.rings.iter().enumerate().flat_map(|(r, ring)| {
            ring.iter()
                .enumerate()
                .map(move |(pos, point)| (r, pos, point))
        })
    }

    /// Every measured channel value, for bulk validation.
    pub(crate) fn values(&self) -> impl Iterator<Item = (usize, usize, f32)> {
        self.points()
            .flat_map(|(r, pos, point)| point.channels().map(move |v| (r, pos, v)))
    }
}
