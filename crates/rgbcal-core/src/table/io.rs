//! JSON import and export of calibration tables.
//!
//! The document mirrors the grid: a list of rings, each a list of points
//! with `low` and `high` duty-cycle triples. `min_component` and `hue` are
//! optional labels; when present they must match the ring and position.
//!
//! ```json
//! { "rings": [ { "min_component": 0, "points": [
//!     { "hue": 0, "low": [0.8998, 0.9997, 0.9997], "high": [0.0, 0.9997, 0.9997] },
//!     ...
//! ] }, ... ] }
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::circle::{
    CalibrationCircle, CalibrationPoint, HUE_STEP_DEGREES, POSITIONS_PER_RING, RING_COUNT,
    RING_MIN_COMPONENTS,
};
use super::error::TableError;

#[derive(Debug, Serialize, Deserialize)]
struct TableDocument {
    rings: Vec<RingDocument>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RingDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min_component: Option<u8>,
    points: Vec<PointDocument>,
}

#[derive(Debug, Serialize, Deserialize)]
struct PointDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hue: Option<u16>,
    low: [f32; 3],
    high: [f32; 3],
}

/// Keep I/O failures apart from malformed documents.
fn json_error(err: serde_json::Error) -> TableError {
    if err.is_io() {
        TableError::Io(err.into())
    } else {
        TableError::Json(err)
    }
}

fn position_hue(position: usize) -> u16 {
    (position as f32 * HUE_STEP_DEGREES) as u16
}

impl TableDocument {
    fn from_circle(circle: &CalibrationCircle) -> Self {
        let rings = circle
            .rings()
            .iter()
            .enumerate()
            .map(|(r, ring)| RingDocument {
                min_component: Some(RING_MIN_COMPONENTS[r]),
                points: ring
                    .iter()
                    .enumerate()
                    .map(|(pos, point)| PointDocument {
                        hue: Some(position_hue(pos)),
                        low: point.low.to_array(),
                        high: point.high.to_array(),
                    })
                    .collect(),
            })
            .collect();
        Self { rings }
    }

    fn into_circle(self) -> Result<CalibrationCircle, TableError> {
        if self.rings.len() != RING_COUNT {
            return Err(TableError::RingCount {
                expected: RING_COUNT,
                found: self.rings.len(),
            });
        }
        for (r, ring) in self.rings.iter().enumerate() {
            match ring.min_component {
                Some(found) if found != RING_MIN_COMPONENTS[r] => {
                    return Err(TableError::MinComponentMismatch {
                        ring: r,
                        expected: RING_MIN_COMPONENTS[r],
                        found,
                    });
                }
                _ => {}
            }
            if ring.points.len() != POSITIONS_PER_RING {
                return Err(TableError::PointCount {
                    ring: r,
                    expected: POSITIONS_PER_RING,
                    found: ring.points.len(),
                });
            }
            for (pos, point) in ring.points.iter().enumerate() {
                let expected = position_hue(pos);
                match point.hue {
                    Some(found) if found != expected => {
                        return Err(TableError::HueMismatch {
                            ring: r,
                            position: pos,
                            expected,
                            found,
                        });
                    }
                    _ => {}
                }
            }
        }

        // Lengths are checked above, so direct indexing cannot go out of range.
        let circle = CalibrationCircle::from_rings(std::array::from_fn(|r| {
            std::array::from_fn(|pos| {
                let point = &self.rings[r].points[pos];
                CalibrationPoint::new(point.low, point.high)
            })
        }));
        circle.validate()?;
        Ok(circle)
    }
}

impl CalibrationCircle {
    /// Check that every measured value is finite and within `[0, 1]`.
    pub fn validate(&self) -> Result<(), TableError> {
        for (ring, position, value) in self.values() {
            if !value.is_finite() {
                return Err(TableError::NonFinite { ring, position });
            }
            if !(0.0..=1.0).contains(&value) {
                return Err(TableError::OutOfRange {
                    ring,
                    position,
                    value,
                });
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON table document.
    pub fn from_json_str(json: &str) -> Result<Self, TableError> {
        let doc: TableDocument = serde_json::from_str(json)?;
        doc.into_circle()
    }

    /// Parse and validate a JSON table document from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TableError> {
        let doc: TableDocument = serde_json::from_reader(reader).map_err(json_error)?;
        doc.into_circle()
    }

    /// Load a JSON table file.
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let file = File::open(path).map_err(|source| TableError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let circle = Self::from_reader(BufReader::new(file)).map_err(|err| match err {
            TableError::Io(source) => TableError::Read {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        tracing::info!("loaded calibration table from {}", path.display());
        Ok(circle)
    }

    /// Serialize this table as pretty-printed JSON, with ring and hue labels.
    pub fn to_json_pretty(&self) -> Result<String, TableError> {
        Ok(serde_json::to_string_pretty(&TableDocument::from_circle(
            self,
        ))?)
    }

    /// Write this table as JSON to `writer`.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), TableError> {
        serde_json::to_writer_pretty(writer, &TableDocument::from_circle(self))
            .map_err(json_error)
    }

    /// Save this table to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), TableError> {
        let write_err = |source: std::io::Error| TableError::Write {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        self.to_writer(&mut writer).map_err(|err| match err {
            TableError::Io(source) => write_err(source),
            other => other,
        })?;
        writer.flush().map_err(write_err)?;
        tracing::info!("saved calibration table to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_document(rings: usize, points: usize) -> String {
        let point = r#"{"low":[0.9,0.9,0.9],"high":[0.1,0.2,0.3]}"#;
        let points = vec![point; points].join(",");
        let ring = format!(r#"{{"points":[{points}]}}"#);
        let rings = vec![ring.as_str(); rings].join(",");
        format!(r#"{{"rings":[{rings}]}}"#)
    }

    #[test]
    fn test_unlabelled_document_loads() {
        let circle = CalibrationCircle::from_json_str(&uniform_document(7, 24))
            .expect("well-formed table should load");
        let point = circle.point(3, 11).expect("cell exists");
        assert_eq!(point.high.to_array(), [0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_wrong_ring_count_is_rejected() {
        let err = CalibrationCircle::from_json_str(&uniform_document(6, 24)).unwrap_err();
        assert!(matches!(
            err,
            TableError::RingCount {
                expected: 7,
                found: 6
            }
        ));
    }

    #[test]
    fn test_wrong_point_count_is_rejected() {
        let err = CalibrationCircle::from_json_str(&uniform_document(7, 23)).unwrap_err();
        assert!(matches!(
            err,
            TableError::PointCount {
                ring: 0,
                expected: 24,
                found: 23
            }
        ));
    }

    #[test]
    fn test_out_of_range_value_is_rejected() {
        let json = uniform_document(7, 24).replacen("0.3]", "1.5]", 1);
        let err = CalibrationCircle::from_json_str(&json).unwrap_err();
        assert!(
            matches!(err, TableError::OutOfRange { ring: 0, position: 0, .. }),
            "got {err}"
        );
    }

    #[test]
    fn test_hue_label_mismatch_is_rejected() {
        let mut doc = TableDocument::from_circle(CalibrationCircle::builtin());
        doc.rings[2].points[5].hue = Some(90);
        let err = doc.into_circle().unwrap_err();
        assert!(matches!(
            err,
            TableError::HueMismatch {
                ring: 2,
                position: 5,
                expected: 75,
                found: 90
            }
        ));
    }

    #[test]
    fn test_min_component_label_mismatch_is_rejected() {
        let mut doc = TableDocument::from_circle(CalibrationCircle::builtin());
        doc.rings[0].min_component = Some(35);
        let err = doc.into_circle().unwrap_err();
        assert!(matches!(
            err,
            TableError::MinComponentMismatch {
                ring: 0,
                expected: 0,
                found: 35
            }
        ));
    }

    #[test]
    fn test_non_finite_value_is_rejected() {
        let mut doc = TableDocument::from_circle(CalibrationCircle::builtin());
        doc.rings[4].points[9].low[1] = f32::NAN;
        let err = doc.into_circle().unwrap_err();
        assert!(matches!(
            err,
            TableError::NonFinite {
                ring: 4,
                position: 9
            }
        ));
    }

    #[test]
    fn test_garbage_is_a_json_error() {
        let err = CalibrationCircle::from_json_str("{\"rings\": 3}").unwrap_err();
        assert!(matches!(err, TableError::Json(_)));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Read for BrokenPipe {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_writer_failure_is_an_io_error() {
        let err = CalibrationCircle::builtin().to_writer(BrokenPipe).unwrap_err();
        match err {
            TableError::Io(source) => assert_eq!(source.kind(), std::io::ErrorKind::BrokenPipe),
            other => panic!("expected I/O error, got {other}"),
        }
    }

    #[test]
    fn test_reader_failure_is_an_io_error() {
        let err = CalibrationCircle::from_reader(BrokenPipe).unwrap_err();
        assert!(matches!(err, TableError::Io(_)), "got {err}");
    }

    #[test]
    fn test_export_labels_rings_and_hues() {
        let json = CalibrationCircle::builtin()
            .to_json_pretty()
            .expect("builtin table serializes");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["rings"][6]["min_component"], 219);
        assert_eq!(value["rings"][0]["points"][23]["hue"], 345);
    }

    #[test]
    fn test_exported_builtin_table_reloads_identically() {
        let builtin = CalibrationCircle::builtin();
        let json = builtin.to_json_pretty().expect("serializes");
        let reloaded = CalibrationCircle::from_json_str(&json).expect("reloads");
        assert_eq!(&reloaded, builtin);
    }
}
