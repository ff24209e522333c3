//! Spectral peak panel
//!
//! Plots a [`SyntheticSpectrum`] as a filled curve over its m/z window. The
//! intensity axis has no ticks: only the peak shape and position matter.

use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;

use super::annotation::{draw_annotations, Annotation};
use super::config::FigureStyle;
use crate::synthetic::{SamplingDomain, SyntheticSpectrum};

/// Draw a spectrum panel
///
/// The peak is sampled over `domain` and normalized to a unit maximum before
/// drawing. If an annotation carries a legend label, the legend is drawn in the
/// upper-right corner.
///
/// # Errors
///
/// Returns `Err` if the backend fails to draw.
///
/// # Example
///
/// ```rust,ignore
/// let spectrum = SyntheticSpectrum::new(100.0, 0.03, BLUE, "Narrow peak", 1.3);
/// render_spectrum_panel(&area, &spectrum, &[], &SamplingDomain::default(), &style)?;
/// ```
pub fn render_spectrum_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    spectrum: &SyntheticSpectrum,
    annotations: &[Annotation],
    domain: &SamplingDomain,
    style: &FigureStyle,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let curve = spectrum.sample(domain);

    let label_px = style.px(style.fs_label);
    let mut chart = ChartBuilder::on(area)
        .caption(&spectrum.title, style.font(style.fs_spectrum_title(), false))
        .margin(10)
        .x_label_area_size((3.0 * label_px) as i32)
        .y_label_area_size((2.0 * label_px) as i32)
        .build_cartesian_2d(domain.start..domain.end, 0.0..spectrum.y_limit)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .y_labels(0)
        .x_labels(7)
        .x_label_formatter(&|x| format!("{:.1}", x))
        .x_desc("m/z")
        .y_desc("Intensity")
        .axis_desc_style(style.font(style.fs_label, true))
        .x_label_style(style.font(style.fs_annot_small, false))
        .draw()?;

    chart.draw_series(
        AreaSeries::new(curve.points(), 0.0, spectrum.color.mix(style.spectrum_fill_alpha))
            .border_style(spectrum.color.stroke_width(style.spectrum_line_width)),
    )?;

    if draw_annotations(&mut chart, annotations, style)? {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .label_font(style.font(style.fs_annot_small, false))
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    log::debug!(
        "Rendered spectrum panel '{}' (mu = {}, sigma = {}, {} samples)",
        spectrum.title, spectrum.mu, spectrum.sigma, curve.len()
    );
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
