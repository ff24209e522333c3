//! Quadrupole cross-section panel
//!
//! Four circular rods around the axis, an ion cloud in the middle and a dashed
//! circle marking where the RF field nominally holds the ions. The view is a
//! fixed square window with no axes, so every device panel is drawn at the same
//! scale and the two clouds can be compared directly.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::error::Error;

use super::annotation::{draw_annotations, Annotation, PanelChart, TextAnchor};
use super::config::FigureStyle;
use super::panel::DevicePanel;

/// Half-width of the square view, identical on both axes
pub const VIEW_LIMIT: f64 = 3.1;

/// Rod radius
pub const ROD_RADIUS: f64 = 0.8;

/// Distance from the axis to each rod centre
pub const ROD_OFFSET: f64 = 1.4;

/// Radius of the nominal confinement circle
pub const CONFINEMENT_RADIUS: f64 = 0.5;

/// Vertical position of the caption under the rods
pub const CAPTION_Y: f64 = -2.9;

/// Segments used to approximate circles drawn in data coordinates
const CIRCLE_SEGMENTS: usize = 96;

/// Rod centres with their RF polarity label, vertical pair first
pub fn rod_layout() -> [((f64, f64), &'static str); 4] {
    [
        ((0.0, ROD_OFFSET), "+RF"),
        ((0.0, -ROD_OFFSET), "+RF"),
        ((-ROD_OFFSET, 0.0), "-RF"),
        ((ROD_OFFSET, 0.0), "-RF"),
    ]
}

/// Closed polygon approximating a circle; the first point is repeated at the end
pub(crate) fn circle_points(center: (f64, f64), radius: f64, segments: usize) -> Vec<(f64, f64)> {
    (0..=segments)
        .map(|i| {
            let angle = 2.0 * std::f64::consts::PI * (i % segments) as f64 / segments as f64;
            (center.0 + radius * angle.cos(), center.1 + radius * angle.sin())
        })
        .collect()
}

/// Largest square centred in `area`
fn square_area<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>) -> DrawingArea<DB, Shift> {
    let (w, h) = area.dim_in_pixel();
    let side = w.min(h);
    let dx = ((w - side) / 2) as i32;
    let dy = ((h - side) / 2) as i32;
    area.margin(dy, dy, dx, dx)
}

/// Draw a quadrupole panel
///
/// The ion cloud is drawn from `seed`, so two renders of the same panel show
/// the same ions.
///
/// # Arguments
///
/// * `area` - Drawing area of this panel
/// * `title` - Panel title, drawn above the view
/// * `device` - Ion cloud and confinement caption
/// * `annotations` - Extra decorations in data coordinates
/// * `style` - Figure styling
/// * `seed` - RNG seed for the ion cloud
///
/// # Errors
///
/// Returns `Err` if the backend fails to draw.
pub fn render_device_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    device: &DevicePanel,
    annotations: &[Annotation],
    style: &FigureStyle,
    seed: u64,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let body = area.titled(title, style.font(style.fs_title, true))?;
    let view = square_area(&body);

    // No label areas and no mesh: the panel has no visible axes
    let mut chart = ChartBuilder::on(&view)
        .build_cartesian_2d(-VIEW_LIMIT..VIEW_LIMIT, -VIEW_LIMIT..VIEW_LIMIT)?;

    draw_rods(&mut chart, style)?;

    chart.draw_series(DashedLineSeries::new(
        circle_points((0.0, 0.0), CONFINEMENT_RADIUS, CIRCLE_SEGMENTS),
        6,
        4,
        style.confinement_color.mix(style.confinement_alpha).stroke_width(2),
    ))?;

    let positions = device.cloud.generate(seed);
    let radius = style.ion_radius as i32;
    let fill = style.ion_color.mix(style.ion_alpha).filled();

    chart.draw_series(positions.points().map(|p| Circle::new(p, radius, fill)))?;
    chart.draw_series(positions.points().map(|p| Circle::new(p, radius, WHITE.stroke_width(1))))?;

    let caption = Annotation::Text {
        at: (0.0, CAPTION_Y),
        lines: device.label.lines.clone(),
        color: device.label.color,
        font_pt: style.fs_base_annot,
        anchor: TextAnchor::Top,
        bold: true,
    };
    draw_annotations(&mut chart, std::slice::from_ref(&caption), style)?;
    draw_annotations(&mut chart, annotations, style)?;

    log::debug!("Rendered device panel '{}' with {} ions", title, positions.len());
    Ok(())
}

fn draw_rods<DB: DrawingBackend>(
    chart: &mut PanelChart<'_, DB>,
    style: &FigureStyle,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let label_style = style
        .font(style.fs_annot_small, true)
        .color(&style.rod_label_color)
        .pos(Pos::new(HPos::Center, VPos::Center));

    for (center, label) in rod_layout() {
        let outline = circle_points(center, ROD_RADIUS, CIRCLE_SEGMENTS);

        chart.draw_series(std::iter::once(Polygon::new(outline.clone(), style.rod_fill.filled())))?;
        chart.draw_series(std::iter::once(PathElement::new(
            outline,
            style.rod_edge.stroke_width(style.rod_edge_width),
        )))?;
        chart.draw_series(std::iter::once(Text::new(label, center, label_style.clone())))?;
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::panel::ConfinementLabel;
    use crate::synthetic::{SyntheticIonCloud, DEFAULT_ION_SEED};
    use approx::assert_relative_eq;
    use tempfile::NamedTempFile;

    #[test]
    fn test_rod_layout() {
        let rods = rod_layout();
        let centers: Vec<(f64, f64)> = rods.iter().map(|(c, _)| *c).collect();
        assert_eq!(centers, vec![(0.0, 1.4), (0.0, -1.4), (-1.4, 0.0), (1.4, 0.0)]);

        // Opposite rods share polarity
        assert_eq!(rods[0].1, "+RF");
        assert_eq!(rods[1].1, "+RF");
        assert_eq!(rods[2].1, "-RF");
        assert_eq!(rods[3].1, "-RF");
    }

    #[test]
    fn test_rods_fit_in_view() {
        for ((x, y), _) in rod_layout() {
            assert!(x.abs() + ROD_RADIUS < VIEW_LIMIT);
            assert!(y.abs() + ROD_RADIUS < VIEW_LIMIT);
        }
    }

    #[test]
    fn test_circle_points_are_closed_and_on_radius() {
        let points = circle_points((1.0, -2.0), 0.5, 32);
        assert_eq!(points.len(), 33);
        assert_eq!(points.first(), points.last());

        for (x, y) in points {
            assert_relative_eq!((x - 1.0).hypot(y + 2.0), 0.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_render_device_panel_svg() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp.path().with_extension("svg");
        let style = FigureStyle::default();

        let device = DevicePanel {
            cloud: SyntheticIonCloud::new(20, 0.1),
            label: ConfinementLabel::new("Strong confinement (RF)\n(dominant field)", BLUE),
        };

        {
            let root = SVGBackend::new(&path, (650, 550)).into_drawing_area();
            root.fill(&WHITE).unwrap();
            render_device_panel(&root, "Low density", &device, &[], &style, DEFAULT_ION_SEED).unwrap();
            root.present().unwrap();
        }

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("+RF"));
        assert!(svg.contains("-RF"));
        assert!(svg.contains("Low density"));
        assert!(svg.contains("(dominant field)"));
    }
}
