//! Policy knobs for the mapper.
//!
//! `MapperOptions::default()` reproduces the stock firmware exactly:
//! brightness extrapolates past the measured range and only the red channel
//! snaps to zero. The other variants exist for drivers that want different
//! bounds handling; they are opt-in.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::table::{HIGH_BRIGHTNESS, LOW_BRIGHTNESS};

/// Default threshold below which a channel snaps to zero.
pub const DEFAULT_SNAP_THRESHOLD: f32 = 0.01;

/// Which output channels snap to exactly zero when below the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapPolicy {
    /// Only red snaps; green and blue keep their computed values.
    #[default]
    RedOnly,
    /// Red, green and blue all snap.
    AllChannels,
    /// No snapping.
    Disabled,
}

impl SnapPolicy {
    pub fn apply(self, rgb: Rgb, threshold: f32) -> Rgb {
        let snap = |c: f32| if c < threshold { 0.0 } else { c };
        match self {
            Self::RedOnly => Rgb {
                red: snap(rgb.red),
                ..rgb
            },
            Self::AllChannels => Rgb::new(snap(rgb.red), snap(rgb.green), snap(rgb.blue)),
            Self::Disabled => rgb,
        }
    }
}

/// How a requested brightness outside the measured range is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrightnessPolicy {
    /// Follow the line through the two measurements, even past its ends.
    #[default]
    Extrapolate,
    /// Clamp to `[0.01, 1.0]` before interpolating.
    Clamp,
}

impl BrightnessPolicy {
    pub fn apply(self, brightness: f32) -> f32 {
        match self {
            Self::Extrapolate => brightness,
            Self::Clamp => brightness.clamp(LOW_BRIGHTNESS, HIGH_BRIGHTNESS),
        }
    }
}

/// Mapper configuration. Deserializes from partial JSON; absent fields
/// take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperOptions {
    /// Channels below this value snap to zero (see [`SnapPolicy`]).
    pub snap_threshold: f32,
    pub snap: SnapPolicy,
    pub brightness: BrightnessPolicy,
}

impl Default for MapperOptions {
    fn default() -> Self {
        Self {
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
            snap: SnapPolicy::RedOnly,
            brightness: BrightnessPolicy::Extrapolate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_red_only_leaves_green_and_blue() {
        let rgb = Rgb::new(0.005, 0.005, 0.005);
        let out = SnapPolicy::RedOnly.apply(rgb, DEFAULT_SNAP_THRESHOLD);
        assert_eq!(out, Rgb::new(0.0, 0.005, 0.005));
    }

    #[test]
    fn test_red_only_snaps_negative_red() {
        let out = SnapPolicy::RedOnly.apply(Rgb::new(-0.2, 0.5, 0.5), DEFAULT_SNAP_THRESHOLD);
        assert_eq!(out.red, 0.0);
    }

    #[test]
    fn test_all_channels_snaps_everything_small() {
        let rgb = Rgb::new(0.005, 0.5, 0.009);
        let out = SnapPolicy::AllChannels.apply(rgb, DEFAULT_SNAP_THRESHOLD);
        assert_eq!(out, Rgb::new(0.0, 0.5, 0.0));
    }

    #[test]
    fn test_disabled_is_passthrough() {
        let rgb = Rgb::new(0.001, 0.002, 0.003);
        assert_eq!(SnapPolicy::Disabled.apply(rgb, DEFAULT_SNAP_THRESHOLD), rgb);
    }

    #[test]
    fn test_clamp_policy_bounds_brightness() {
        assert_eq!(BrightnessPolicy::Clamp.apply(0.0), LOW_BRIGHTNESS);
        assert_eq!(BrightnessPolicy::Clamp.apply(1.5), HIGH_BRIGHTNESS);
        assert_eq!(BrightnessPolicy::Extrapolate.apply(1.5), 1.5);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let options: MapperOptions =
            serde_json::from_str(r#"{"snap":"all_channels"}"#).expect("valid options");
        assert_eq!(options.snap, SnapPolicy::AllChannels);
        assert_eq!(options.brightness, BrightnessPolicy::Extrapolate);
        assert_eq!(options.snap_threshold, DEFAULT_SNAP_THRESHOLD);
    }
}
