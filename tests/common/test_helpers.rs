//! Helper functions for integration tests

#![allow(dead_code)]

use plotters::style::BLUE;
use space_charge_rs::synthetic::{SpectrumCurve, SyntheticIonCloud, SyntheticSpectrum};
use std::path::PathBuf;
use tempfile::TempDir;

/// Cloud of the low-density device panel
pub fn low_density_cloud() -> SyntheticIonCloud {
    SyntheticIonCloud::new(20, 0.1)
}

/// Peak of the narrow (ideal) spectrum panel
pub fn narrow_spectrum() -> SyntheticSpectrum {
    SyntheticSpectrum::new(100.0, 0.03, BLUE, "Narrow peak (high resolution)", 1.3)
}

/// Path named `file_name` inside a fresh temporary directory
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn figure_in_temp_dir(file_name: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("failed to create temporary directory");
    let path = dir.path().join(file_name);
    (dir, path)
}

/// Assert that two sampled curves match bit for bit
pub fn assert_curves_bit_identical(a: &SpectrumCurve, b: &SpectrumCurve, message: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", message);

    for (i, ((xa, ya), (xb, yb))) in a.points().zip(b.points()).enumerate() {
        assert_eq!(xa.to_bits(), xb.to_bits(), "{}: m/z differs at sample {}", message, i);
        assert_eq!(ya.to_bits(), yb.to_bits(), "{}: intensity differs at sample {}", message, i);
    }
}
