//! Layer merging of point classifications

use tracing::debug;

use crate::app::models::{ClassifiedPoint, Layer, Row, SoilZone};
use crate::constants::keys;

use super::robertson::classify;

/// Classify every row that has a depth (or length) value
pub fn classify_dataset(rows: &[Row]) -> Vec<ClassifiedPoint> {
    rows.iter()
        .filter_map(|row| {
            let depth = row.classification_depth()?;
            Some(ClassifiedPoint {
                depth,
                zone: classify(row.get(keys::QC), row.get(keys::RF)),
            })
        })
        .collect()
}

/// Merge classified points into contiguous layers
///
/// Runs of equal zones become provisional layers spanning first to last
/// depth. A provisional layer thinner than `min_thickness` is absorbed into
/// the preceding retained layer, whose end depth is extended; the first layer
/// is always retained.
pub fn merge_layers(points: &[ClassifiedPoint], min_thickness: f64) -> Vec<Layer> {
    let mut classified: Vec<(f64, SoilZone)> = points
        .iter()
        .filter_map(|p| p.zone.map(|zone| (p.depth, zone)))
        .collect();
    if classified.is_empty() {
        return Vec::new();
    }
    classified.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut provisional: Vec<Layer> = Vec::new();
    for (depth, zone) in classified {
        match provisional.last_mut() {
            Some(layer) if layer.zone == zone => layer.end_depth = depth,
            _ => provisional.push(Layer {
                start_depth: depth,
                end_depth: depth,
                zone,
            }),
        }
    }

    let provisional_count = provisional.len();
    let mut retained: Vec<Layer> = Vec::with_capacity(provisional_count);
    for layer in provisional {
        match retained.last_mut() {
            Some(previous) if layer.thickness() < min_thickness => {
                previous.end_depth = layer.end_depth;
            }
            _ => retained.push(layer),
        }
    }

    debug!(
        "Merged {} provisional layers into {} (min thickness {})",
        provisional_count,
        retained.len(),
        min_thickness
    );
    retained
}
