//! Synthetic mass spectrum peak
//!
//! A single Gaussian peak sampled over a fixed m/z window and rescaled so that
//! its tallest sample is exactly 1.0.
//!
//! # Algorithm
//!
//! Each sample is the Gaussian probability density
//!
//! ```text
//! f(x) = exp(-0.5 · ((x - μ) / σ)²) / (σ · √(2π))
//! ```
//!
//! and the whole curve is then divided by its own maximum. This is a display
//! normalization only: the area under the curve is no longer 1.
//!
//! # Degenerate width
//!
//! `σ <= 0` is not rejected. The density divides by zero and the curve ends up
//! with non-finite samples; [`SyntheticSpectrum::sample`] reports it through
//! `log::warn!` and returns the curve unchanged.
//!
//! # Example
//!
//! ```rust
//! use space_charge_rs::synthetic::{SamplingDomain, SyntheticSpectrum};
//! use plotters::style::BLUE;
//!
//! let spectrum = SyntheticSpectrum::new(100.0, 0.03, BLUE, "Narrow peak", 1.3);
//! let curve = spectrum.sample(&SamplingDomain::default());
//! assert_eq!(curve.max_intensity(), 1.0);
//! ```

use nalgebra::DVector;
use plotters::style::RGBColor;
use std::f64::consts::PI;

// =================================================================================================
// Sampling domain
// =================================================================================================

/// Evenly spaced m/z grid, both ends included
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingDomain {
    /// First m/z value (default: 99.4)
    pub start: f64,

    /// Last m/z value (default: 100.6)
    pub end: f64,

    /// Number of samples (default: 500)
    pub points: usize,
}

impl Default for SamplingDomain {
    fn default() -> Self {
        Self {
            start: 99.4,
            end: 100.6,
            points: 500,
        }
    }
}

impl SamplingDomain {
    pub fn new(start: f64, end: f64, points: usize) -> Self {
        Self { start, end, points }
    }

    /// Distance between two consecutive samples
    pub fn step(&self) -> f64 {
        if self.points > 1 {
            (self.end - self.start) / (self.points - 1) as f64
        } else {
            0.0
        }
    }

    /// Sample positions
    ///
    /// The last position is set to `end` exactly so the grid never falls
    /// short of the window because of accumulated rounding.
    pub fn linspace(&self) -> DVector<f64> {
        let step = self.step();
        let last = self.points.saturating_sub(1);

        DVector::from_fn(self.points, |i, _| {
            if i == last && self.points > 1 {
                self.end
            } else {
                self.start + i as f64 * step
            }
        })
    }
}

// =================================================================================================
// Spectrum definition
// =================================================================================================

/// A Gaussian peak together with the display parameters of its panel
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticSpectrum {
    /// Peak centre in m/z
    pub mu: f64,

    /// Peak standard deviation in m/z
    pub sigma: f64,

    /// Line and fill colour
    pub color: RGBColor,

    /// Panel title
    pub title: String,

    /// Upper limit of the intensity axis
    pub y_limit: f64,
}

impl SyntheticSpectrum {
    pub fn new(mu: f64, sigma: f64, color: RGBColor, title: impl Into<String>, y_limit: f64) -> Self {
        Self {
            mu,
            sigma,
            color,
            title: title.into(),
            y_limit,
        }
    }

    /// Gaussian probability density at `x`
    pub fn density(&self, x: f64) -> f64 {
        let z = (x - self.mu) / self.sigma;
        (-0.5 * z * z).exp() / (self.sigma * (2.0 * PI).sqrt())
    }

    /// Sample the peak over `domain` and normalize it to a unit maximum
    pub fn sample(&self, domain: &SamplingDomain) -> SpectrumCurve {
        let mz = domain.linspace();
        let density = mz.map(|x| self.density(x));
        let peak_density = density.max();

        let intensity = density / peak_density;

        if intensity.iter().any(|v| !v.is_finite()) {
            log::warn!(
                "Spectrum '{}' (mu = {}, sigma = {}) has non-finite samples; \
                 the peak width is degenerate",
                self.title, self.mu, self.sigma
            );
        }

        SpectrumCurve {
            mu: self.mu,
            sigma: self.sigma,
            peak_density,
            mz,
            intensity,
        }
    }
}

// =================================================================================================
// Sampled curve
// =================================================================================================

/// Normalized peak ready to be plotted
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumCurve {
    mu: f64,
    sigma: f64,

    /// Largest sampled density, used as the normalization constant
    pub peak_density: f64,

    /// Sample positions (m/z)
    pub mz: DVector<f64>,

    /// Normalized intensities, same length as `mz`
    pub intensity: DVector<f64>,
}

impl SpectrumCurve {
    pub fn len(&self) -> usize {
        self.mz.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mz.is_empty()
    }

    /// Tallest normalized sample (1.0 for any finite, positive sigma)
    pub fn max_intensity(&self) -> f64 {
        self.intensity.max()
    }

    /// m/z of the tallest sample
    pub fn apex_mz(&self) -> f64 {
        self.mz[self.intensity.imax()]
    }

    /// Normalized intensity at an arbitrary m/z
    ///
    /// Uses the same normalization constant as the samples, so positions
    /// between grid points can slightly exceed 1.0 near the apex.
    pub fn evaluate_at(&self, x: f64) -> f64 {
        let z = (x - self.mu) / self.sigma;
        let density = (-0.5 * z * z).exp() / (self.sigma * (2.0 * PI).sqrt());
        density / self.peak_density
    }

    /// Width of the region where the sampled intensity is at least half the maximum
    pub fn width_at_half_maximum(&self) -> f64 {
        let half = 0.5 * self.max_intensity();
        let above: Vec<f64> = self
            .mz
            .iter()
            .zip(self.intensity.iter())
            .filter(|(_, v)| **v >= half)
            .map(|(x, _)| *x)
            .collect();

        match (above.first(), above.last()) {
            (Some(lo), Some(hi)) => hi - lo,
            _ => 0.0,
        }
    }

    /// `(m/z, intensity)` pairs in plotting order
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.mz.iter().copied().zip(self.intensity.iter().copied())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
