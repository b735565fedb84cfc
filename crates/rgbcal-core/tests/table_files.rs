use std::path::Path;

use rgbcal_core::{CalibrationCircle, ColorMapper, Rgb, TableError};

fn flat_table_json(low: [f32; 3], high: [f32; 3]) -> String {
    let point = serde_json::json!({ "low": low, "high": high });
    let ring = serde_json::json!({ "points": vec![point; 24] });
    serde_json::json!({ "rings": vec![ring; 7] }).to_string()
}

#[test]
fn saved_table_loads_back_identically() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("bs2.json");

    let builtin = CalibrationCircle::builtin();
    builtin.save(&path).expect("save table");
    let loaded = CalibrationCircle::load(&path).expect("load table");
    assert_eq!(&loaded, builtin);
}

#[test]
fn missing_file_reports_its_path() {
    let err = CalibrationCircle::load(Path::new("/nonexistent/rgbcal/table.json")).unwrap_err();
    match err {
        TableError::Read { path, .. } => assert!(path.ends_with("table.json")),
        other => panic!("expected read error, got {other}"),
    }
}

#[test]
fn truncated_file_is_rejected() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("short.json");
    let json = flat_table_json([0.9, 0.9, 0.9], [0.5, 0.5, 0.5]);
    // Drop one ring by reparsing and trimming.
    let mut value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    value["rings"]
        .as_array_mut()
        .expect("rings array")
        .pop();
    std::fs::write(&path, value.to_string()).expect("write fixture");

    let err = CalibrationCircle::load(&path).unwrap_err();
    assert!(matches!(err, TableError::RingCount { found: 6, .. }), "got {err}");
}

#[test]
fn mapper_uses_a_loaded_table() {
    let circle = CalibrationCircle::from_json_str(&flat_table_json(
        [0.8, 0.6, 0.4],
        [0.2, 0.4, 0.6],
    ))
    .expect("flat table loads");
    let mapper = ColorMapper::new(&circle);

    // Every cell is identical, so hue and saturation no longer matter.
    for color in [
        Rgb::new(1.0, 0.0, 0.0),
        Rgb::new(0.3, 0.6, 0.9),
        Rgb::new(0.9, 0.9, 0.9),
    ] {
        let out = mapper.map(color, 0.01);
        assert_eq!(out.rgb(), Rgb::new(0.8, 0.6, 0.4), "{color}");

        let out = mapper.map(color, 1.0);
        let expected = [0.8 - 0.99 * 0.6, 0.6 - 0.99 * 0.2, 0.4 + 0.99 * 0.2];
        for (actual, expected) in out.rgb().to_array().iter().zip(expected) {
            assert!((actual - expected).abs() < 1e-5, "{color}: {actual} vs {expected}");
        }
    }
}
