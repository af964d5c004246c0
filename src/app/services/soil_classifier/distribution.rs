//! Thickness distribution per soil zone

use std::collections::BTreeMap;

use crate::app::models::{DistributionEntry, Layer, SoilZone};

/// Thickness and percentage per zone, largest share first
pub fn compute_distribution(layers: &[Layer]) -> Vec<DistributionEntry> {
    let mut per_zone: BTreeMap<u8, (SoilZone, f64)> = BTreeMap::new();
    for layer in layers {
        let thickness = layer.thickness();
        if thickness <= 0.0 {
            continue;
        }
        per_zone
            .entry(layer.zone.id)
            .or_insert((layer.zone, 0.0))
            .1 += thickness;
    }

    let total: f64 = per_zone.values().map(|(_, thickness)| thickness).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut entries: Vec<DistributionEntry> = per_zone
        .into_values()
        .map(|(zone, thickness)| DistributionEntry {
            zone,
            thickness,
            percentage: thickness / total * 100.0,
        })
        .filter(|entry| entry.percentage > 0.0)
        .collect();
    entries.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    entries
}
