//! Figure composition
//!
//! [`FigureComposer`] builds the four panels of the space-charge figure and
//! renders them on a 2x2 grid under a global title.
//!
//! # Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              Space-charge effect             │
//! ├──────────────────────┬───────────────────────┤
//! │ 1. device, low       │ 3. device, high       │
//! │    density (ideal)   │    density            │
//! ├──────────────────────┼───────────────────────┤
//! │ 2. narrow peak       │ 4. wide, shifted peak │
//! └──────────────────────┴───────────────────────┘
//! ```
//!
//! Panels are kept in reading order (left column first); each one carries its
//! own [`GridSlot`].
//!
//! # Example
//!
//! ```rust,ignore
//! use space_charge_rs::figure::FigureComposer;
//!
//! FigureComposer::default().render("space_charge_effect.png")?;
//! ```

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::error::Error;

use super::annotation::{Annotation, TextAnchor};
use super::config::FigureStyle;
use super::device::render_device_panel;
use super::panel::{ConfinementLabel, DevicePanel, GridSlot, PanelContent, PanelKind, PanelSpec};
use super::spectrum::render_spectrum_panel;
use crate::synthetic::{SamplingDomain, SyntheticIonCloud, SyntheticSpectrum, DEFAULT_ION_SEED};

/// Rows and columns of the panel grid
pub const GRID: (usize, usize) = (2, 2);

/// Builds and renders the space-charge figure
#[derive(Debug, Clone)]
pub struct FigureComposer {
    /// Styling shared by all panels
    pub style: FigureStyle,

    /// Seed of every ion cloud (default: 42)
    pub seed: u64,

    /// m/z window of the spectrum panels
    pub domain: SamplingDomain,
}

impl Default for FigureComposer {
    fn default() -> Self {
        Self {
            style: FigureStyle::default(),
            seed: DEFAULT_ION_SEED,
            domain: SamplingDomain::default(),
        }
    }
}

/// A composed figure, ready to render
#[derive(Debug, Clone)]
pub struct Figure {
    pub style: FigureStyle,
    pub seed: u64,
    pub domain: SamplingDomain,

    /// Panels in reading order
    pub panels: Vec<PanelSpec>,
}

impl FigureComposer {
    pub fn new(style: FigureStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Build the four panels with their captions and arrows
    pub fn compose_figure(&self) -> Figure {
        let panels = space_charge_panels(&self.style);
        log::debug!("Composed figure with {} panels", panels.len());

        Figure {
            style: self.style.clone(),
            seed: self.seed,
            domain: self.domain,
            panels,
        }
    }

    /// Compose the figure and write it to `output_path`
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file cannot be written or drawing fails.
    pub fn render(&self, output_path: &str) -> Result<(), Box<dyn Error>> {
        self.compose_figure().render(output_path)
    }
}

/// The four panels of the space-charge figure, in reading order
///
/// Left column: low ion density and the narrow peak it produces. Right column:
/// high ion density, where Coulomb repulsion expands the cloud, and the
/// widened, shifted peak.
pub fn space_charge_panels(style: &FigureStyle) -> Vec<PanelSpec> {
    let green = RGBColor(0, 128, 0);

    let low_density = PanelSpec::device(
        "Low density of ions (Ideal)",
        GridSlot::new(0, 0),
        DevicePanel {
            cloud: SyntheticIonCloud::new(20, 0.1),
            label: ConfinementLabel::new("Strong confinement (RF)\n(dominant field)", BLUE),
        },
    );

    let narrow_peak = PanelSpec::spectrum(
        GridSlot::new(1, 0),
        SyntheticSpectrum::new(100.0, 0.03, BLUE, "Narrow peak (high resolution)", 1.3),
    )
    .with_annotation(Annotation::text(
        (100.0, 1.1),
        "Negligible Coulomb\ninteraction",
        green,
        style.fs_annot_big,
        TextAnchor::Bottom,
    ));

    let high_density = PanelSpec::device(
        "High density of ions (space-charge effect)",
        GridSlot::new(0, 1),
        DevicePanel {
            cloud: SyntheticIonCloud::new(250, 0.45),
            label: ConfinementLabel::new("Internal Coulomb repulsion \n(ion cloud expansion)", RED),
        },
    )
    .with_annotation(Annotation::arrow((0.1, 0.1), (0.9, 0.9), RED, 3))
    .with_annotation(Annotation::arrow((-0.1, -0.1), (-0.9, -0.6), RED, 3))
    .with_annotation(Annotation::arrow((0.0, -0.1), (0.2, -1.0), RED, 3));

    let wide_peak = PanelSpec::spectrum(
        GridSlot::new(1, 1),
        SyntheticSpectrum::new(100.15, 0.12, RED, "Peak widening and 'mass shift'", 1.3),
    )
    .with_annotation(Annotation::reference_line(
        100.0,
        BLUE,
        0.6,
        2,
        Some("Real mass (theoretical)"),
    ))
    .with_annotation(Annotation::text(
        (99.7, 1.1),
        "Loss in resolution\nand precision",
        RED,
        style.fs_annot_big,
        TextAnchor::Bottom,
    ));

    vec![low_density, narrow_peak, high_density, wide_peak]
}

impl Figure {
    /// Panel kinds in reading order
    pub fn kinds(&self) -> Vec<PanelKind> {
        self.panels.iter().map(PanelSpec::kind).collect()
    }

    /// Write the figure to `output_path`
    ///
    /// The backend follows the extension: `.svg` produces a vector image,
    /// anything else a bitmap (PNG for `.png`).
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file cannot be written or drawing fails.
    pub fn render(&self, output_path: &str) -> Result<(), Box<dyn Error>> {
        let size = self.style.pixel_size();

        let ext = std::path::Path::new(output_path)
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("png");

        match ext {
            "svg" => {
                let root = SVGBackend::new(output_path, size).into_drawing_area();
                self.render_on(&root)?;
            }
            _ => {
                let root = BitMapBackend::new(output_path, size).into_drawing_area();
                self.render_on(&root)?;
            }
        }

        log::info!("Figure written to {} ({}x{} px)", output_path, size.0, size.1);
        Ok(())
    }

    /// Draw the figure on an existing drawing area
    pub fn render_on<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
    ) -> Result<(), Box<dyn Error>>
    where
        DB::ErrorType: 'static,
    {
        let style = &self.style;
        root.fill(&style.background)?;

        let (width, _) = root.dim_in_pixel();
        let title_height = (2.0 * style.px(style.fs_suptitle)).round() as i32;
        let (title_area, body) = root.split_vertically(title_height);

        let title_style = style
            .font(style.fs_suptitle, true)
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center));
        title_area.draw_text(&style.suptitle, &title_style, (width as i32 / 2, title_height / 2))?;

        let pad = style.panel_padding as i32;
        let cells = body.margin(0, pad, pad, pad).split_evenly(GRID);

        for panel in &self.panels {
            if panel.slot.row >= GRID.0 || panel.slot.col >= GRID.1 {
                return Err(format!(
                    "Panel '{}' at row {}, column {} is outside the {}x{} grid",
                    panel.title, panel.slot.row, panel.slot.col, GRID.0, GRID.1
                )
                .into());
            }
            let area = cells[panel.slot.index(GRID.1)].margin(pad, pad, pad, pad);

            match &panel.content {
                PanelContent::Device(device) => render_device_panel(
                    &area,
                    &panel.title,
                    device,
                    &panel.annotations,
                    style,
                    self.seed,
                )?,
                PanelContent::Spectrum(spectrum) => render_spectrum_panel(
                    &area,
                    spectrum,
                    &panel.annotations,
                    &self.domain,
                    style,
                )?,
            }
        }

        root.present()?;
        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_compose_has_four_panels_in_order() {
        let figure = FigureComposer::default().compose_figure();
        assert_eq!(
            figure.kinds(),
            vec![PanelKind::Device, PanelKind::Spectrum, PanelKind::Device, PanelKind::Spectrum]
        );
    }

    #[test]
    fn test_compose_slots_fill_grid_by_column() {
        let figure = FigureComposer::default().compose_figure();
        let slots: Vec<GridSlot> = figure.panels.iter().map(|p| p.slot).collect();
        assert_eq!(
            slots,
            vec![GridSlot::new(0, 0), GridSlot::new(1, 0), GridSlot::new(0, 1), GridSlot::new(1, 1)]
        );
    }

    #[test]
    fn test_compose_panel_parameters() {
        let figure = FigureComposer::default().compose_figure();

        match &figure.panels[0].content {
            PanelContent::Device(d) => assert_eq!(d.cloud, SyntheticIonCloud::new(20, 0.1)),
            _ => panic!("panel 1 should be a device"),
        }
        match &figure.panels[1].content {
            PanelContent::Spectrum(s) => {
                assert_eq!((s.mu, s.sigma, s.y_limit), (100.0, 0.03, 1.3));
                assert_eq!(s.color, BLUE);
            }
            _ => panic!("panel 2 should be a spectrum"),
        }
        match &figure.panels[2].content {
            PanelContent::Device(d) => assert_eq!(d.cloud, SyntheticIonCloud::new(250, 0.45)),
            _ => panic!("panel 3 should be a device"),
        }
        match &figure.panels[3].content {
            PanelContent::Spectrum(s) => {
                assert_eq!((s.mu, s.sigma, s.y_limit), (100.15, 0.12, 1.3));
                assert_eq!(s.color, RED);
            }
            _ => panic!("panel 4 should be a spectrum"),
        }
    }

    #[test]
    fn test_high_density_panel_has_three_arrows() {
        let figure = FigureComposer::default().compose_figure();
        let arrows = figure.panels[2]
            .annotations
            .iter()
            .filter(|a| matches!(a, Annotation::Arrow { .. }))
            .count();
        assert_eq!(arrows, 3);
    }

    #[test]
    fn test_only_wide_peak_has_legend() {
        let figure = FigureComposer::default().compose_figure();
        let with_legend: Vec<bool> = figure
            .panels
            .iter()
            .map(|p| p.annotations.iter().any(Annotation::has_legend_entry))
            .collect();
        assert_eq!(with_legend, vec![false, false, false, true]);
    }

    #[test]
    fn test_compose_uses_composer_seed() {
        let composer = FigureComposer {
            seed: 7,
            ..FigureComposer::default()
        };
        assert_eq!(composer.compose_figure().seed, 7);
    }

    #[test]
    fn test_render_png() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp.path().with_extension("png");

        FigureComposer::default().render(path.to_str().unwrap()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_render_svg() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp.path().with_extension("svg");

        FigureComposer::default().render(path.to_str().unwrap()).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("Space-charge effect"));
        assert!(svg.contains("Low density of ions (Ideal)"));
        assert!(svg.contains("Peak widening and"));
    }

    #[test]
    fn test_panel_outside_grid_is_an_error() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp.path().with_extension("svg");

        let mut figure = FigureComposer::default().compose_figure();
        figure.panels[0].slot = GridSlot::new(2, 0);

        assert!(figure.render(path.to_str().unwrap()).is_err());
    }
}
