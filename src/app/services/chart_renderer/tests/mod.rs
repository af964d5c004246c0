//! Test utilities for chart renderer testing

use crate::app::models::{ColumnDescriptor, Layer, Row, SoilZone};
use crate::app::services::chart_renderer::{ChartRenderer, RenderCommand, RenderList};
use crate::config::ChartConfig;

mod plot_data_tests;

pub const WIDTH: f64 = 900.0;
pub const HEIGHT: f64 = 700.0;

/// Plot rows [38, 690] for the default margins
pub const PLOT_TOP: f64 = 38.0;
pub const PLOT_HEIGHT: f64 = 652.0;

/// Pointer column inside the first data panel
pub const PANEL_X: f64 = 400.0;

pub fn columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("depth", "Depth", "m"),
        ColumnDescriptor::new("qc", "Cone resistance", "MPa"),
        ColumnDescriptor::new("fs", "Sleeve friction", "MPa"),
        ColumnDescriptor::new("rf", "Friction ratio", "%"),
    ]
}

pub fn sample_row(depth: f64, qc: Option<f64>, fs: Option<f64>) -> Row {
    let mut row = Row::new();
    row.set("depth", Some(-depth));
    row.set("qc", qc);
    row.set("fs", fs);
    let rf = match (qc, fs) {
        (Some(qc), Some(fs)) if qc != 0.0 => Some(fs / qc * 100.0),
        _ => None,
    };
    row.set("rf", rf);
    row
}

/// `count` samples every 0.1 m from the surface; qc cycles 1..=10 MPa
pub fn sounding_rows(count: usize) -> Vec<Row> {
    (0..count)
        .map(|i| sample_row(i as f64 * 0.1, Some(1.0 + (i % 10) as f64), Some(0.12)))
        .collect()
}

pub fn layers() -> Vec<Layer> {
    vec![
        Layer {
            start_depth: 0.0,
            end_depth: 4.0,
            zone: SoilZone::from_id(3).unwrap(),
        },
        Layer {
            start_depth: 4.0,
            end_depth: 9.9,
            zone: SoilZone::from_id(6).unwrap(),
        },
    ]
}

/// Renderer on a 900x700 surface bound to a 100-sample sounding (extent 0..11)
pub fn renderer() -> ChartRenderer<RenderList> {
    let mut renderer =
        ChartRenderer::new(RenderList::new(WIDTH, HEIGHT), ChartConfig::default()).unwrap();
    renderer.set_data(&sounding_rows(100), &columns(), &layers());
    renderer
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Pixel row of `depth` for the renderer's current viewport
pub fn pixel_of(renderer: &ChartRenderer<RenderList>, depth: f64) -> f64 {
    let (min, max) = renderer.viewport().range();
    PLOT_TOP + (depth - min) / (max - min) * PLOT_HEIGHT
}

pub fn polylines_with_color<'a>(list: &'a RenderList, color: &str) -> Vec<&'a RenderCommand> {
    list.commands
        .iter()
        .filter(|command| matches!(command, RenderCommand::Polyline { style, .. } if style.color == color))
        .collect()
}
