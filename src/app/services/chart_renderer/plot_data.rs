//! Read-only plotted data derived from one sounding

use std::collections::BTreeMap;
use tracing::debug;

use super::scale::nice_max;
use crate::app::models::{ColumnDescriptor, Layer, Row};
use crate::config::{ChartConfig, ParameterConfig};
use crate::constants::{chart, keys};

/// One tracked parameter panel
#[derive(Debug, Clone, PartialEq)]
pub struct PlotParameter {
    pub key: String,
    pub label: String,
    pub unit: String,
    pub color: String,

    /// Upper bound of the value axis; the lower bound is always 0
    pub axis_max: f64,
}

/// One sample with a valid depth
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSample {
    /// Positive depth below the surface
    pub depth: f64,

    /// Values in parameter order
    pub values: Vec<Option<f64>>,

    pub qc: Option<f64>,
    pub rf: Option<f64>,
}

/// Everything the renderer needs from a sounding, computed once per `set_data`
#[derive(Debug, Clone, PartialEq)]
pub struct PlotData {
    pub parameters: Vec<PlotParameter>,
    pub samples: Vec<PlotSample>,
    pub layers: Vec<Layer>,

    /// Full depth extent `[0, max]`
    pub depth_extent: (f64, f64),
}

impl PlotData {
    pub fn new(
        rows: &[Row],
        columns: &[ColumnDescriptor],
        layers: &[Layer],
        config: &ChartConfig,
    ) -> Self {
        let present: BTreeMap<&str, &ColumnDescriptor> =
            columns.iter().map(|c| (c.key.as_str(), c)).collect();

        let samples: Vec<PlotSample> = rows
            .iter()
            .filter_map(|row| {
                let depth = row.classification_depth()?;
                Some(PlotSample {
                    depth,
                    values: config
                        .parameters
                        .iter()
                        .map(|p| present.get(p.key.as_str()).and_then(|_| row.get(&p.key)))
                        .collect(),
                    qc: row.get(keys::QC),
                    rf: row.get(keys::RF),
                })
            })
            .collect();

        let parameters = config
            .parameters
            .iter()
            .enumerate()
            .map(|(index, parameter)| {
                plot_parameter(parameter, present.get(parameter.key.as_str()), &samples, index)
            })
            .collect();

        let max_depth = samples.iter().map(|s| s.depth).fold(None, |acc: Option<f64>, d| {
            Some(acc.map_or(d, |m| m.max(d)))
        });
        let depth_extent = (0.0, depth_extent_max(max_depth, config.depth_headroom));

        debug!(
            "Plot data: {} samples, {} layers, depth extent 0..{}",
            samples.len(),
            layers.len(),
            depth_extent.1
        );

        Self {
            parameters,
            samples,
            layers: layers.to_vec(),
            depth_extent,
        }
    }

    /// Sample closest in depth; ties go to the first one encountered
    pub fn nearest_sample(&self, depth: f64) -> Option<&PlotSample> {
        let mut best: Option<(&PlotSample, f64)> = None;
        for sample in &self.samples {
            let distance = (sample.depth - depth).abs();
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((sample, distance));
            }
        }
        best.map(|(sample, _)| sample)
    }

    /// Layer covering `depth`, if any
    pub fn layer_at(&self, depth: f64) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.contains(depth))
    }
}

fn plot_parameter(
    parameter: &ParameterConfig,
    column: Option<&&ColumnDescriptor>,
    samples: &[PlotSample],
    index: usize,
) -> PlotParameter {
    let max_value = samples
        .iter()
        .filter_map(|s| s.values[index])
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);

    let unit = match column {
        Some(column) if !column.unit.is_empty() => column.unit.clone(),
        _ => parameter.unit.clone(),
    };

    PlotParameter {
        key: parameter.key.clone(),
        label: parameter.label.clone(),
        unit,
        color: parameter.color.clone(),
        axis_max: nice_max(max_value),
    }
}

/// Rounded-up bottom of the depth axis
pub fn depth_extent_max(max_depth: Option<f64>, headroom: f64) -> f64 {
    match max_depth {
        Some(depth) if depth > 0.0 => (depth * (1.0 + headroom)).ceil().max(1.0),
        Some(_) => 1.0,
        None => chart::EMPTY_DEPTH_EXTENT,
    }
}
