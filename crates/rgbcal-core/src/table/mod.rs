//! Calibration table — grid layout, built-in measurements, and JSON I/O.

pub mod builtin;
pub mod circle;
pub mod error;
pub mod io;

pub use builtin::BEDSIDE_LAMP_2;
pub use circle::{
    CalibrationCircle, CalibrationPoint, HIGH_BRIGHTNESS, HUE_STEP_DEGREES, LOW_BRIGHTNESS,
    POSITIONS_PER_RING, RING_COUNT, RING_MIN_COMPONENTS, Ring,
};
pub use error::TableError;
