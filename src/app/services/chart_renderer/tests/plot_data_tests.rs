//! Tests for plotted data preparation

use super::*;
use crate::app::services::chart_renderer::PlotData;

#[test]
fn test_depth_extent_has_headroom() {
    let plot = PlotData::new(&sounding_rows(100), &columns(), &layers(), &ChartConfig::default());

    // 9.9 m deepest sample, 2% headroom, rounded up
    assert_eq!(plot.depth_extent, (0.0, 11.0));
    assert_eq!(plot.samples.len(), 100);
    assert_eq!(plot.layers.len(), 2);
}

#[test]
fn test_axis_maxima_snap_to_nice_values() {
    let plot = PlotData::new(&sounding_rows(100), &columns(), &[], &ChartConfig::default());

    let maxima: Vec<f64> = plot.parameters.iter().map(|p| p.axis_max).collect();
    assert!(approx(maxima[0], 10.0));
    assert!(approx(maxima[1], 0.15));
    assert!(approx(maxima[2], 15.0));
}

#[test]
fn test_empty_data_uses_fallbacks() {
    let plot = PlotData::new(&[], &[], &[], &ChartConfig::default());

    assert_eq!(plot.depth_extent, (0.0, 10.0));
    assert!(plot.samples.is_empty());
    assert!(plot.parameters.iter().all(|p| p.axis_max == 1.0));
    assert!(plot.nearest_sample(3.0).is_none());
}

#[test]
fn test_rows_without_depth_are_not_plotted() {
    let mut rows = sounding_rows(3);
    let mut no_depth = Row::new();
    no_depth.set("qc", Some(4.0));
    rows.push(no_depth);

    let plot = PlotData::new(&rows, &columns(), &[], &ChartConfig::default());
    assert_eq!(plot.samples.len(), 3);
}

#[test]
fn test_untracked_column_yields_no_values() {
    let columns: Vec<ColumnDescriptor> = columns().into_iter().filter(|c| c.key != "fs").collect();
    let plot = PlotData::new(&sounding_rows(10), &columns, &[], &ChartConfig::default());

    assert!(plot.samples.iter().all(|s| s.values[1].is_none()));
    assert_eq!(plot.parameters[1].axis_max, 1.0);
}

#[test]
fn test_nearest_sample_ties_go_to_first() {
    let rows = vec![
        sample_row(1.0, Some(2.0), Some(0.1)),
        sample_row(2.0, Some(3.0), Some(0.1)),
        sample_row(2.0, Some(4.0), Some(0.1)),
    ];
    let plot = PlotData::new(&rows, &columns(), &[], &ChartConfig::default());

    assert_eq!(plot.nearest_sample(1.5).unwrap().depth, 1.0);
    assert_eq!(plot.nearest_sample(2.4).unwrap().qc, Some(3.0));
    assert_eq!(plot.nearest_sample(-5.0).unwrap().depth, 1.0);
}

#[test]
fn test_column_unit_overrides_configured_unit() {
    let mut columns = columns();
    columns[1] = ColumnDescriptor::new("qc", "qc", "kPa");
    let plot = PlotData::new(&sounding_rows(5), &columns, &[], &ChartConfig::default());

    assert_eq!(plot.parameters[0].unit, "kPa");
    assert_eq!(plot.parameters[0].label, "Cone resistance");
}

#[test]
fn test_layer_lookup() {
    let plot = PlotData::new(&sounding_rows(100), &columns(), &layers(), &ChartConfig::default());
    assert_eq!(plot.layer_at(2.0).unwrap().zone.id, 3);
    assert_eq!(plot.layer_at(6.5).unwrap().zone.id, 6);
    assert!(plot.layer_at(10.5).is_none());
}
