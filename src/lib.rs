//! space-charge-rs: the space-charge effect, illustrated
//!
//! Renders a static 2x2 figure explaining how space charge degrades a mass
//! spectrum. The data are synthetic: a seeded Gaussian ion cloud inside a
//! quadrupole and a Gaussian spectral peak. Nothing is simulated.
//!
//! # Architecture
//!
//! - **Synthetic data** ([`synthetic`]): deterministic generators that only
//!   produce numbers
//! - **Figure** ([`figure`]): panel descriptions and `plotters` renderers that
//!   only draw them
//!
//! # Quick Start
//!
//! ```rust
//! use space_charge_rs::prelude::*;
//!
//! let figure = FigureComposer::default().compose_figure();
//! assert_eq!(
//!     figure.kinds(),
//!     vec![PanelKind::Device, PanelKind::Spectrum, PanelKind::Device, PanelKind::Spectrum]
//! );
//!
//! // figure.render("space_charge_effect.png")?;
//! ```
//!
//! # Modules
//!
//! - [`synthetic`]: Ion cloud and spectrum generators
//! - [`figure`]: Styling, panels, rendering and composition

pub mod figure;
pub mod synthetic;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use space_charge_rs::prelude::*;
    //! ```
    pub use crate::figure::{Figure,
                            FigureComposer,
                            FigureStyle,
                            PanelKind,
                            PanelSpec};
    pub use crate::synthetic::{SamplingDomain,
                               SpectrumCurve,
                               SyntheticIonCloud,
                               SyntheticSpectrum};
}
