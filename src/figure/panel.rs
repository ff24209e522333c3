//! Panel descriptions
//!
//! A [`PanelSpec`] is everything needed to draw one subplot: where it sits in
//! the grid, what it shows and what is written on top of it. Specs are built
//! once by the composer and only read afterwards.

use plotters::style::RGBColor;

use super::annotation::Annotation;
use crate::synthetic::{SyntheticIonCloud, SyntheticSpectrum};

/// What a panel draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    /// Quadrupole cross-section with an ion cloud
    Device,
    /// Normalized spectral peak
    Spectrum,
}

/// Row and column of a panel in the figure grid, both zero-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSlot {
    pub row: usize,
    pub col: usize,
}

impl GridSlot {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index in a grid with `cols` columns
    pub fn index(&self, cols: usize) -> usize {
        self.row * cols + self.col
    }
}

/// Caption written under the quadrupole, describing what dominates the ions
#[derive(Debug, Clone, PartialEq)]
pub struct ConfinementLabel {
    pub lines: Vec<String>,
    pub color: RGBColor,
}

impl ConfinementLabel {
    pub fn new(text: &str, color: RGBColor) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
            color,
        }
    }
}

/// Quadrupole panel parameters
#[derive(Debug, Clone, PartialEq)]
pub struct DevicePanel {
    pub cloud: SyntheticIonCloud,
    pub label: ConfinementLabel,
}

/// Panel payload, selecting which renderer and generator are used
#[derive(Debug, Clone, PartialEq)]
pub enum PanelContent {
    Device(DevicePanel),
    Spectrum(SyntheticSpectrum),
}

/// One subplot of the figure
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSpec {
    pub title: String,
    pub slot: GridSlot,
    pub content: PanelContent,
    pub annotations: Vec<Annotation>,
}

impl PanelSpec {
    pub fn device(title: impl Into<String>, slot: GridSlot, device: DevicePanel) -> Self {
        Self {
            title: title.into(),
            slot,
            content: PanelContent::Device(device),
            annotations: Vec::new(),
        }
    }

    /// Spectrum panel titled after the spectrum itself
    pub fn spectrum(slot: GridSlot, spectrum: SyntheticSpectrum) -> Self {
        Self {
            title: spectrum.title.clone(),
            slot,
            content: PanelContent::Spectrum(spectrum),
            annotations: Vec::new(),
        }
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn kind(&self) -> PanelKind {
        match self.content {
            PanelContent::Device(_) => PanelKind::Device,
            PanelContent::Spectrum(_) => PanelKind::Spectrum,
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
