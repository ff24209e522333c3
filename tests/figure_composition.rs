//! End-to-end composition and rendering of the figure

use space_charge_rs::figure::{Annotation, FigureComposer, FigureStyle, PanelContent, PanelKind};

mod common;
use common::figure_in_temp_dir;

#[test]
fn test_figure_has_four_panels_in_reading_order() {
    let figure = FigureComposer::default().compose_figure();

    assert_eq!(figure.panels.len(), 4);
    assert_eq!(
        figure.kinds(),
        vec![PanelKind::Device, PanelKind::Spectrum, PanelKind::Device, PanelKind::Spectrum]
    );

    let ion_counts: Vec<usize> = figure
        .panels
        .iter()
        .filter_map(|p| match &p.content {
            PanelContent::Device(d) => Some(d.cloud.count),
            PanelContent::Spectrum(_) => None,
        })
        .collect();
    assert_eq!(ion_counts, vec![20, 250]);

    let sigmas: Vec<f64> = figure
        .panels
        .iter()
        .filter_map(|p| match &p.content {
            PanelContent::Spectrum(s) => Some(s.sigma),
            PanelContent::Device(_) => None,
        })
        .collect();
    assert_eq!(sigmas, vec![0.03, 0.12]);
}

#[test]
fn test_composition_is_repeatable() {
    let composer = FigureComposer::default();
    let a = composer.compose_figure();
    let b = composer.compose_figure();
    assert_eq!(a.panels, b.panels);
}

#[test]
fn test_captions_follow_font_sizes() {
    let mut style = FigureStyle::default();
    style.fs_annot_big = 20.0;
    let figure = FigureComposer::new(style).compose_figure();

    let sizes: Vec<f64> = figure
        .panels
        .iter()
        .flat_map(|p| p.annotations.iter())
        .filter_map(|a| match a {
            Annotation::Text { font_pt, .. } => Some(*font_pt),
            _ => None,
        })
        .collect();
    assert_eq!(sizes, vec![20.0, 20.0]);
}

#[test]
fn test_render_png_file() {
    let (_dir, path) = figure_in_temp_dir("space_charge_effect.png");

    FigureComposer::default().render(path.to_str().unwrap()).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn test_render_svg_file() {
    let (_dir, path) = figure_in_temp_dir("space_charge_effect.svg");

    FigureComposer::default().render(path.to_str().unwrap()).unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("width=\"1300\""));
    assert!(svg.contains("height=\"1100\""));
    for text in [
        "Space-charge effect",
        "Low density of ions (Ideal)",
        "High density of ions (space-charge effect)",
        "Narrow peak (high resolution)",
        "Strong confinement (RF)",
        "(ion cloud expansion)",
        "Negligible Coulomb",
        "Real mass (theoretical)",
    ] {
        assert!(svg.contains(text), "missing text: {text}");
    }
}

#[test]
fn test_render_into_missing_directory_fails() {
    let (_dir, base) = figure_in_temp_dir("missing");
    let path = base.join("nested").join("figure.svg");

    assert!(FigureComposer::default().render(path.to_str().unwrap()).is_err());
}
