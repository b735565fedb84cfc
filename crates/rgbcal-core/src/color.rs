//! Color values exchanged with the mapper and the LED driver.
//!
//! All channels are normalized to `[0.0, 1.0]` by contract. Nothing here
//! clamps: values outside the range pass through so that callers decide
//! their own bounds policy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An RGB triple of normalized channel values.
///
/// Used both for requested colors and for measured duty cycles.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }

    /// Build from an `[r, g, b]` array.
    pub const fn from_array(rgb: [f32; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }

    pub const fn to_array(self) -> [f32; 3] {
        [self.red, self.green, self.blue]
    }

    /// Build from 8-bit components, as used by Home Assistant color pickers.
    pub fn from_bytes(red: u8, green: u8, blue: u8) -> Self {
        Self::new(
            f32::from(red) / 255.0,
            f32::from(green) / 255.0,
            f32::from(blue) / 255.0,
        )
    }

    pub fn min_channel(self) -> f32 {
        self.red.min(self.green).min(self.blue)
    }

    pub fn max_channel(self) -> f32 {
        self.red.max(self.green).max(self.blue)
    }

    /// Linear interpolation toward `other`, applied per channel.
    ///
    /// `t` is not clamped, so values outside `[0, 1]` extrapolate.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            self.red + t * (other.red - self.red),
            self.green + t * (other.green - self.green),
            self.blue + t * (other.blue - self.blue),
        )
    }

    /// True when every channel lies within `[0.0, 1.0]`.
    pub fn is_normalized(self) -> bool {
        self.to_array().iter().all(|c| (0.0..=1.0).contains(c))
    }
}

impl From<[f32; 3]> for Rgb {
    fn from(rgb: [f32; 3]) -> Self {
        Self::from_array(rgb)
    }
}

impl From<Rgb> for [f32; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.to_array()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.4},{:.4},{:.4}]", self.red, self.green, self.blue)
    }
}

/// Duty cycles for the four physical output channels of the fixture.
///
/// `white` is always zero: white-channel mixing is not performed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RgbwOutput {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub white: f32,
}

impl RgbwOutput {
    /// All channels dark.
    pub const OFF: Self = Self {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
        white: 0.0,
    };

    /// Wrap calibrated RGB duty cycles, zeroing the white channel.
    pub const fn from_rgb(rgb: Rgb) -> Self {
        Self {
            red: rgb.red,
            green: rgb.green,
            blue: rgb.blue,
            white: 0.0,
        }
    }

    pub const fn rgb(&self) -> Rgb {
        Rgb::new(self.red, self.green, self.blue)
    }

    pub const fn to_array(&self) -> [f32; 4] {
        [self.red, self.green, self.blue, self.white]
    }
}

impl fmt::Display for RgbwOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.4},{:.4},{:.4},{:.4}]",
            self.red, self.green, self.blue, self.white
        )
    }
}

/// Hue angle of `color` in degrees, in `[0, 360)`.
///
/// Uses the standard HSV hue formula. A gray input (all channels equal)
/// has no defined hue and reports 0°.
///
/// ```text
///   delta = max − min
///   red   is max:  60 × (((g − b) / delta) mod 6)
///   green is max:  60 × ((b − r) / delta + 2)
///   blue  is max:  60 × ((r − g) / delta + 4)
/// ```
///
/// Negative angles are shifted by 360°.
pub fn hue_degrees(color: Rgb) -> f32 {
    let Rgb { red, green, blue } = color;
    let max = color.max_channel();
    let delta = max - color.min_channel();

    let hue = if delta == 0.0 {
        0.0
    } else if red == max {
        60.0 * (((green - blue) / delta) % 6.0)
    } else if green == max {
        60.0 * ((blue - red) / delta + 2.0)
    } else {
        60.0 * ((red - green) / delta + 4.0)
    };

    if hue < 0.0 { hue + 360.0 } else { hue }
}
