//! Common utilities for integration tests

pub mod test_helpers;

// Re-export commonly used items
pub use test_helpers::{
    assert_curves_bit_identical,
    figure_in_temp_dir,
    low_density_cloud,
    narrow_spectrum,
};
