//! Hover readout emitted to the host

use serde::Serialize;
use std::collections::BTreeMap;

use super::plot_data::{PlotData, PlotSample};
use crate::app::models::SoilZone;
use crate::app::services::soil_classifier::classify;

/// Readout for the sample nearest the pointer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoverEvent {
    /// Depth under the pointer
    pub depth: f64,

    /// Depth of the nearest sample
    pub sample_depth: f64,

    /// Tracked parameter values at the nearest sample
    pub values: BTreeMap<String, Option<f64>>,

    /// Zone classified from the sample's qc and rf
    pub zone: Option<SoilZone>,
}

impl HoverEvent {
    pub fn new(depth: f64, sample: &PlotSample, plot: &PlotData) -> Self {
        let values = plot
            .parameters
            .iter()
            .zip(&sample.values)
            .map(|(parameter, value)| (parameter.key.clone(), *value))
            .collect();

        Self {
            depth,
            sample_depth: sample.depth,
            values,
            zone: classify(sample.qc, sample.rf),
        }
    }

    pub fn value(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied().flatten()
    }
}
