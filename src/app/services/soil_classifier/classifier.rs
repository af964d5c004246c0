//! Record-level soil classification

use tracing::info;

use super::distribution::compute_distribution;
use super::layers::{classify_dataset, merge_layers};
use crate::app::models::FormatRecord;
use crate::config::ClassifierConfig;

/// Attaches layers and a distribution to parsed records
#[derive(Debug, Clone)]
pub struct SoilClassifier {
    min_layer_thickness: f64,
}

impl SoilClassifier {
    pub fn new(config: &ClassifierConfig) -> Self {
        Self {
            min_layer_thickness: config.min_layer_thickness,
        }
    }

    /// Classify every row and store the merged layers and distribution
    pub fn classify_record(&self, record: &mut FormatRecord) {
        let points = classify_dataset(&record.data);
        record.layers = merge_layers(&points, self.min_layer_thickness);
        record.distribution = compute_distribution(&record.layers);

        info!(
            "Classified '{}': {} points, {} layers, {} zones",
            record.name,
            points.len(),
            record.layers.len(),
            record.distribution.len()
        );
    }
}

impl Default for SoilClassifier {
    fn default() -> Self {
        Self::new(&ClassifierConfig::default())
    }
}
