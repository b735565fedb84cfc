//! rgbcal Core — calibrated duty cycles for ring-calibrated RGB fixtures.
//!
//! The LED channels of a fixture respond nonlinearly, and the hue drifts at
//! low brightness. This crate reproduces the manufacturer's compensation by
//! interpolating a measured table of duty cycles over saturation ring, hue
//! position, and brightness. No hardware or framework dependencies.

pub mod color;
pub mod light;
pub mod mapper;
pub mod table;

// Re-exports for convenience.
pub use color::{Rgb, RgbwOutput, hue_degrees};
pub use light::{CalibratedLight, LightDriver, RecordingDriver};
pub use mapper::{BrightnessPolicy, ColorMapper, GridLocation, MapperOptions, SnapPolicy};
pub use table::{BEDSIDE_LAMP_2, CalibrationCircle, CalibrationPoint, TableError};
