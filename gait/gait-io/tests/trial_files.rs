//! Reading trial files from disk.

#![allow(clippy::unwrap_used, clippy::cast_precision_loss)]

use std::fmt::Write as _;
use std::fs;

use approx::assert_relative_eq;
use gait_io::{IoError, load_angles, load_force, load_trc};
use gait_types::{BiomechanicalModel, RateSource};
use tempfile::TempDir;

/// Two runs of markers numbered 1 to 15, as exported when virtual markers
/// restart the numbering. Every cell holds `1000 * frame + column`.
fn trc_text(frames: usize) -> String {
    let mut labels = vec![String::new(), String::new()];
    for _ in 0..2 {
        for marker in 1..=15 {
            labels.extend(["X", "Y", "Z"].map(|axis| format!("{axis}{marker}")));
        }
    }
    let mut text = String::from("PathFileType\t4\t(X/Y/Z)\twalk.trc\nDataRate\n100\nFrame#\tTime\n");
    text.push_str(&labels.join("\t"));
    text.push_str("\n\n");
    for f in 0..frames {
        let _ = write!(text, "{}\t{}", f + 1, f as f64 / 100.0);
        for column in 2..labels.len() {
            let _ = write!(text, "\t{}", f * 1000 + column);
        }
        text.push('\n');
    }
    text
}

#[test]
fn trc_builds_model_markers() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("walk_dynamic.trc");
    fs::write(&path, trc_text(10)).unwrap();

    let model = BiomechanicalModel::elenhayes();
    let table = load_trc(&path, model.column_limit()).unwrap();
    assert_eq!(table.labels().len(), 87);
    assert_eq!(table.len(), 10);
    assert_relative_eq!(table.times().frame_rate().unwrap(), 100.0, epsilon = 1e-9);

    let markers = table.marker_set(&model).unwrap();
    assert_eq!(markers.validate().unwrap(), 10);
    // X14 sits at column 2 + 13 * 3, X2.1 at 2 + 15 * 3 + 3.
    assert_relative_eq!(markers.heel.left.points()[0].x, 41.0);
    assert_relative_eq!(markers.pelvis.points()[1].x, 1050.0);
    assert_relative_eq!(markers.pelvis.points()[1].z, 1052.0);
}

#[test]
fn model_columns_missing_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("walk_dynamic.trc");
    fs::write(&path, trc_text(3)).unwrap();

    let model = BiomechanicalModel::cgm23();
    let table = load_trc(&path, model.column_limit()).unwrap();
    let err = table.marker_set(&model).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn missing_files_are_reported() {
    let dir = TempDir::new().unwrap();
    let err = load_angles(dir.path().join("absent.htr")).unwrap_err();
    assert!(matches!(err, IoError::FileNotFound { .. }));
}

#[test]
fn htr_without_every_segment_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("walk.htr");
    fs::write(&path, "[R.Thigh]\n#Fr\tRx\tRy\tRz\n1\t1\t2\t3\n").unwrap();
    let err = load_angles(&path).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn force_file_without_rate_uses_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("walk_force.csv");
    fs::write(&path, "Fx,Fy,Fz,COPx,COPy\n0,0,0,0,0\n1,2,700,0.1,0.2\n").unwrap();

    let recording = load_force(&path).unwrap();
    assert_eq!(recording.len(), 2);
    let rate = recording.sample_rate(1000.0);
    assert_eq!(rate.source, RateSource::Default);
    assert_relative_eq!(rate.hz, 1000.0);
}
