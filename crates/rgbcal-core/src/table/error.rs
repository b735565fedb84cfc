use std::path::PathBuf;

/// Errors raised while building a calibration table from external data.
///
/// The mapper itself never fails; every malformed table is rejected here,
/// before a [`CalibrationCircle`](super::CalibrationCircle) exists.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("failed to read calibration table {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write calibration table {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Stream failure with no file path attached, from
    /// [`from_reader`](super::CalibrationCircle::from_reader) or
    /// [`to_writer`](super::CalibrationCircle::to_writer).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed calibration table: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected {expected} rings, found {found}")]
    RingCount { expected: usize, found: usize },
    #[error("ring {ring}: expected {expected} points, found {found}")]
    PointCount {
        ring: usize,
        expected: usize,
        found: usize,
    },
    #[error("ring {ring}: labelled min component {found}, expected {expected}")]
    MinComponentMismatch { ring: usize, expected: u8, found: u8 },
    #[error("ring {ring}, position {position}: labelled {found}°, expected {expected}°")]
    HueMismatch {
        ring: usize,
        position: usize,
        expected: u16,
        found: u16,
    },
    #[error("ring {ring}, position {position}: value is not finite")]
    NonFinite { ring: usize, position: usize },
    #[error("ring {ring}, position {position}: value {value} outside [0, 1]")]
    OutOfRange {
        ring: usize,
        position: usize,
        value: f32,
    },
}
