//! Annotations placed in data coordinates
//!
//! Captions, arrows and reference lines are plain data attached to a panel and
//! drawn by [`draw_annotations`] once the panel's chart exists, so that the
//! same coordinates are used for the artwork and for its labels.

use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::error::Error;

use super::config::FigureStyle;

/// Chart type used by every panel: two linear f64 axes
pub type PanelChart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Which edge of a text block sits on its anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Top,
    Center,
    Bottom,
}

/// A single decoration drawn on top of a panel
#[derive(Debug, Clone, PartialEq)]
pub enum Annotation {
    /// Centred, possibly multi-line text
    Text {
        at: (f64, f64),
        lines: Vec<String>,
        color: RGBColor,
        font_pt: f64,
        anchor: TextAnchor,
        bold: bool,
    },

    /// Straight arrow with a filled head at `to`
    Arrow {
        from: (f64, f64),
        to: (f64, f64),
        color: RGBColor,
        width: u32,
    },

    /// Dashed vertical line spanning the whole y range, optionally listed in the legend
    ReferenceLine {
        x: f64,
        color: RGBColor,
        alpha: f64,
        width: u32,
        label: Option<String>,
    },
}

impl Annotation {
    /// Bold text block; `text` is split on `'\n'`
    pub fn text(at: (f64, f64), text: &str, color: RGBColor, font_pt: f64, anchor: TextAnchor) -> Self {
        Annotation::Text {
            at,
            lines: text.lines().map(str::to_string).collect(),
            color,
            font_pt,
            anchor,
            bold: true,
        }
    }

    pub fn arrow(from: (f64, f64), to: (f64, f64), color: RGBColor, width: u32) -> Self {
        Annotation::Arrow { from, to, color, width }
    }

    pub fn reference_line(x: f64, color: RGBColor, alpha: f64, width: u32, label: Option<&str>) -> Self {
        Annotation::ReferenceLine {
            x,
            color,
            alpha,
            width,
            label: label.map(str::to_string),
        }
    }

    /// Whether drawing this annotation adds a legend entry
    pub fn has_legend_entry(&self) -> bool {
        matches!(self, Annotation::ReferenceLine { label: Some(_), .. })
    }
}

// =================================================================================================
// Geometry helpers
// =================================================================================================

/// Arrow head length in data units
const ARROW_HEAD_LENGTH: f64 = 0.18;

/// Half-angle of the arrow head
const ARROW_HEAD_HALF_ANGLE: f64 = 0.45;

/// Triangle `[tip, left, right]` of an arrow head ending at `to`
///
/// Returns `None` for a zero-length arrow.
pub(crate) fn arrow_head(from: (f64, f64), to: (f64, f64)) -> Option<[(f64, f64); 3]> {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let length = dx.hypot(dy);
    if length == 0.0 {
        return None;
    }

    // Unit vector pointing back from the tip
    let (bx, by) = (-dx / length, -dy / length);
    let head = ARROW_HEAD_LENGTH.min(0.5 * length);
    let (sin, cos) = ARROW_HEAD_HALF_ANGLE.sin_cos();

    let left = (
        to.0 + head * (bx * cos - by * sin),
        to.1 + head * (bx * sin + by * cos),
    );
    let right = (
        to.0 + head * (bx * cos + by * sin),
        to.1 + head * (-bx * sin + by * cos),
    );

    Some([to, left, right])
}

/// Pixel offset of each line of a text block relative to its anchor
pub(crate) fn line_offsets(n_lines: usize, line_height: f64, anchor: TextAnchor) -> Vec<i32> {
    let span = n_lines.saturating_sub(1) as f64 * line_height;
    let first = match anchor {
        TextAnchor::Top => 0.0,
        TextAnchor::Center => -0.5 * span,
        TextAnchor::Bottom => -span,
    };

    (0..n_lines)
        .map(|i| (first + i as f64 * line_height).round() as i32)
        .collect()
}

// =================================================================================================
// Drawing
// =================================================================================================

/// Draw `annotations` on `chart` in order
///
/// Returns `true` if at least one series was given a legend label, in which
/// case the caller is expected to draw the series labels.
pub fn draw_annotations<DB: DrawingBackend>(
    chart: &mut PanelChart<'_, DB>,
    annotations: &[Annotation],
    style: &FigureStyle,
) -> Result<bool, Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let mut labelled = false;

    for annotation in annotations {
        match annotation {
            Annotation::Text { at, lines, color, font_pt, anchor, bold } => {
                draw_text_block(chart, *at, lines, *color, *font_pt, *anchor, *bold, style)?;
            }
            Annotation::Arrow { from, to, color, width } => {
                draw_arrow(chart, *from, *to, *color, *width)?;
            }
            Annotation::ReferenceLine { x, color, alpha, width, label } => {
                let y_range = chart.y_range();
                let line_style = color.mix(*alpha).stroke_width(*width);

                let mut series = chart.draw_series(DashedLineSeries::new(
                    vec![(*x, y_range.start), (*x, y_range.end)],
                    8,
                    5,
                    line_style,
                ))?;

                if let Some(label) = label {
                    series.label(label.as_str()).legend(move |(lx, ly)| {
                        PathElement::new(vec![(lx, ly), (lx + 20, ly)], line_style)
                    });
                    labelled = true;
                }
            }
        }
    }

    Ok(labelled)
}

#[allow(clippy::too_many_arguments)]
fn draw_text_block<DB: DrawingBackend>(
    chart: &mut PanelChart<'_, DB>,
    at: (f64, f64),
    lines: &[String],
    color: RGBColor,
    font_pt: f64,
    anchor: TextAnchor,
    bold: bool,
    style: &FigureStyle,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let vpos = match anchor {
        TextAnchor::Top => VPos::Top,
        TextAnchor::Center => VPos::Center,
        TextAnchor::Bottom => VPos::Bottom,
    };
    let text_style = style
        .font(font_pt, bold)
        .color(&color)
        .pos(Pos::new(HPos::Center, vpos));

    let offsets = line_offsets(lines.len(), 1.2 * style.px(font_pt), anchor);

    chart.draw_series(lines.iter().zip(offsets).map(|(line, dy)| {
        EmptyElement::at(at) + Text::new(line.clone(), (0, dy), text_style.clone())
    }))?;

    Ok(())
}

fn draw_arrow<DB: DrawingBackend>(
    chart: &mut PanelChart<'_, DB>,
    from: (f64, f64),
    to: (f64, f64),
    color: RGBColor,
    width: u32,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let Some(head) = arrow_head(from, to) else {
        log::debug!("Skipping zero-length arrow at {:?}", from);
        return Ok(());
    };

    // Stop the shaft at the base of the head so the tip stays sharp
    let base = ((head[1].0 + head[2].0) / 2.0, (head[1].1 + head[2].1) / 2.0);

    chart.draw_series(std::iter::once(PathElement::new(
        vec![from, base],
        color.stroke_width(width),
    )))?;
    chart.draw_series(std::iter::once(Polygon::new(head.to_vec(), color.filled())))?;

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
