//! Figure styling shared by every panel
//!
//! All sizes, colours and fonts of the figure live in [`FigureStyle`] and are
//! passed explicitly to the renderers. Font sizes are given in typographic
//! points and converted to pixels with the figure resolution, so changing
//! `dpi` scales text together with the canvas.

use plotters::prelude::*;
use plotters::style::FontDesc;

/// Styling constants for the space-charge figure
///
/// # Example
///
/// ```rust
/// use space_charge_rs::figure::FigureStyle;
///
/// let mut style = FigureStyle::default();
/// style.dpi = 200;
/// assert_eq!(style.pixel_size(), (2600, 2200));
/// ```
#[derive(Debug, Clone)]
pub struct FigureStyle {
    /// Figure width in inches (default: 13)
    pub width_in: f64,

    /// Figure height in inches (default: 11)
    pub height_in: f64,

    /// Pixels per inch (default: 100)
    pub dpi: u32,

    /// Global title above the panel grid
    pub suptitle: String,

    /// Font family for all text (default: "sans-serif")
    pub font_family: String,

    // Font sizes, in points
    pub fs_suptitle: f64,
    pub fs_title: f64,
    pub fs_label: f64,
    pub fs_annot_big: f64,
    pub fs_annot_small: f64,
    pub fs_base_annot: f64,

    /// Canvas colour (default: WHITE)
    pub background: RGBColor,

    /// Quadrupole rod fill
    pub rod_fill: RGBColor,

    /// Quadrupole rod outline
    pub rod_edge: RGBColor,

    /// Rod outline thickness in pixels
    pub rod_edge_width: u32,

    /// Colour of the "+RF" / "-RF" labels
    pub rod_label_color: RGBColor,

    /// Ion marker colour
    pub ion_color: RGBColor,

    /// Ion marker opacity
    pub ion_alpha: f64,

    /// Ion marker radius in pixels
    pub ion_radius: u32,

    /// Nominal confinement circle colour
    pub confinement_color: RGBColor,

    /// Nominal confinement circle opacity
    pub confinement_alpha: f64,

    /// Spectrum line thickness in pixels
    pub spectrum_line_width: u32,

    /// Opacity of the area under the spectrum
    pub spectrum_fill_alpha: f64,

    /// Space kept around each panel, in pixels
    pub panel_padding: u32,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            width_in: 13.0,
            height_in: 11.0,
            dpi: 100,
            suptitle: "Space-charge effect".to_string(),
            font_family: "sans-serif".to_string(),
            fs_suptitle: 20.0,
            fs_title: 16.0,
            fs_label: 13.0,
            fs_annot_big: 14.0,
            fs_annot_small: 12.0,
            fs_base_annot: 15.0,
            background: WHITE,
            rod_fill: RGBColor(0xdd, 0xdd, 0xdd),
            rod_edge: RGBColor(0x44, 0x44, 0x44),
            rod_edge_width: 2,
            rod_label_color: RGBColor(0x33, 0x33, 0x33),
            ion_color: RED,
            ion_alpha: 0.7,
            ion_radius: 4,
            confinement_color: BLUE,
            confinement_alpha: 0.4,
            spectrum_line_width: 3,
            spectrum_fill_alpha: 0.3,
            panel_padding: 20,
        }
    }
}

impl FigureStyle {
    /// Canvas size in pixels
    pub fn pixel_size(&self) -> (u32, u32) {
        let dpi = self.dpi as f64;
        (
            (self.width_in * dpi).round() as u32,
            (self.height_in * dpi).round() as u32,
        )
    }

    /// Convert a size in points to pixels
    pub fn px(&self, points: f64) -> f64 {
        points * self.dpi as f64 / 72.0
    }

    /// Font of `points` size in the configured family
    pub fn font(&self, points: f64, bold: bool) -> FontDesc<'_> {
        let style = if bold { FontStyle::Bold } else { FontStyle::Normal };
        FontDesc::new(FontFamily::from(self.font_family.as_str()), self.px(points), style)
    }

    /// Spectrum panel title size, two points below `fs_title`
    pub fn fs_spectrum_title(&self) -> f64 {
        self.fs_title - 2.0
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_figure_style_default() {
        let style = FigureStyle::default();
        assert_eq!(style.pixel_size(), (1300, 1100));
        assert_eq!(style.suptitle, "Space-charge effect");
        assert_eq!(style.fs_suptitle, 20.0);
        assert_eq!(style.fs_title, 16.0);
        assert_eq!(style.fs_label, 13.0);
        assert_eq!(style.fs_annot_big, 14.0);
        assert_eq!(style.fs_annot_small, 12.0);
        assert_eq!(style.fs_base_annot, 15.0);
    }

    #[test]
    fn test_default_colors() {
        let style = FigureStyle::default();
        assert_eq!(style.rod_fill, RGBColor(221, 221, 221));
        assert_eq!(style.rod_edge, RGBColor(68, 68, 68));
        assert_eq!(style.ion_color, RED);
        assert_eq!(style.background, WHITE);
    }

    #[test]
    fn test_points_to_pixels() {
        let mut style = FigureStyle::default();
        assert!((style.px(72.0) - 100.0).abs() < 1e-12);

        style.dpi = 144;
        assert!((style.px(72.0) - 144.0).abs() < 1e-12);
        assert_eq!(style.pixel_size(), (1872, 1584));
    }

    #[test]
    fn test_spectrum_title_is_smaller() {
        let style = FigureStyle::default();
        assert_eq!(style.fs_spectrum_title(), 14.0);
    }
}
