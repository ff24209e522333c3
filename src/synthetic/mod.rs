//! Synthetic distributions
//!
//! Procedurally generated stand-ins for instrument data. Nothing here models
//! physics: both generators exist only to give the figure something to draw.
//!
//! - **ion_cloud**: seeded Gaussian point cloud for the quadrupole panels
//! - **spectrum**: Gaussian peak over a fixed m/z window, normalized to a unit maximum

pub mod ion_cloud;
pub mod spectrum;

pub use ion_cloud::{IonPositions, SyntheticIonCloud, DEFAULT_ION_SEED};
pub use spectrum::{SamplingDomain, SpectrumCurve, SyntheticSpectrum};
