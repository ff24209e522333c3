//! Synthetic ion cloud inside the quadrupole
//!
//! The cloud is a pair of coordinate arrays drawn independently from a
//! zero-mean Gaussian. It stands in for trapped ions on the device panels and
//! carries no physical meaning beyond its spread.
//!
//! # Reproducibility
//!
//! The RNG is seeded explicitly by the caller, so the same
//! `(seed, count, spread)` always yields the same points:
//!
//! ```rust
//! use space_charge_rs::synthetic::SyntheticIonCloud;
//!
//! let cloud = SyntheticIonCloud::new(20, 0.1);
//! let a = cloud.generate(42);
//! let b = cloud.generate(42);
//! assert_eq!(a, b);
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Seed used for every ion cloud of the published figure
pub const DEFAULT_ION_SEED: u64 = 42;

/// Parameters of a Gaussian ion cloud centred on the quadrupole axis
///
/// Neither field is validated: a zero `count` yields empty arrays and a
/// negative `spread` mirrors the cloud through the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyntheticIonCloud {
    /// Number of ions
    pub count: usize,

    /// Standard deviation of both coordinates
    pub spread: f64,
}

/// Cartesian ion coordinates, `x[i]` pairs with `y[i]`
#[derive(Debug, Clone, PartialEq)]
pub struct IonPositions {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl IonPositions {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate over `(x, y)` pairs
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

impl SyntheticIonCloud {
    pub fn new(count: usize, spread: f64) -> Self {
        Self { count, spread }
    }

    /// Draw the cloud from an RNG seeded with `seed`
    ///
    /// All `count` x coordinates are drawn first, then all `count` y
    /// coordinates, from the same stream.
    pub fn generate(&self, seed: u64) -> IonPositions {
        let mut rng = StdRng::seed_from_u64(seed);

        let x = self.draw_axis(&mut rng);
        let y = self.draw_axis(&mut rng);

        log::debug!(
            "Generated ion cloud: {} ions, spread {}, seed {}",
            self.count, self.spread, seed
        );

        IonPositions { x, y }
    }

    fn draw_axis<R: Rng>(&self, rng: &mut R) -> Vec<f64> {
        (0..self.count)
            .map(|_| self.spread * rng.sample::<f64, _>(StandardNormal))
            .collect()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
