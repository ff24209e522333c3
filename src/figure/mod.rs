//! Figure rendering
//!
//! Draws the space-charge explainer with the `plotters` library.
//!
//! # Organization
//!
//! - **config**: Shared styling (`FigureStyle`)
//! - **panel**: Panel descriptions (`PanelSpec`, `PanelKind`, `GridSlot`)
//! - **annotation**: Captions, arrows and reference lines in data coordinates
//! - **device**: Quadrupole cross-section with an ion cloud
//! - **spectrum**: Normalized spectral peak
//! - **composer**: 2x2 composition and output to PNG/SVG
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use space_charge_rs::figure::FigureComposer;
//!
//! // PNG with the default style
//! FigureComposer::default().render("space_charge_effect.png")?;
//!
//! // SVG at a higher resolution
//! let mut composer = FigureComposer::default();
//! composer.style.dpi = 200;
//! composer.render("space_charge_effect.svg")?;
//! ```
//!
//! | Panel | Renderer | Generator |
//! |-------|----------|-----------|
//! | Device | `render_device_panel` | `SyntheticIonCloud` |
//! | Spectrum | `render_spectrum_panel` | `SyntheticSpectrum` |

pub mod annotation;
pub mod composer;
pub mod config;
pub mod device;
pub mod panel;
pub mod spectrum;

pub use annotation::{Annotation, TextAnchor};
pub use composer::{space_charge_panels, Figure, FigureComposer};
pub use config::FigureStyle;
pub use device::render_device_panel;
pub use panel::{ConfinementLabel, DevicePanel, GridSlot, PanelContent, PanelKind, PanelSpec};
pub use spectrum::render_spectrum_panel;
