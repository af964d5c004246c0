//! Robertson soil behaviour classification
//!
//! Point classification is a fixed lookup over cone resistance (MPa) and
//! friction ratio (%). Classified points are merged into depth layers and
//! summarised as a thickness distribution per zone.
//!
//! - [`robertson`] - The zone decision table
//! - [`layers`] - Per-row classification and layer merging
//! - [`distribution`] - Thickness share per zone
//! - [`classifier`] - Record-level enrichment

pub mod classifier;
pub mod distribution;
pub mod layers;
pub mod robertson;

#[cfg(test)]
pub mod tests;

pub use classifier::SoilClassifier;
pub use distribution::compute_distribution;
pub use layers::{classify_dataset, merge_layers};
pub use robertson::{classify, zone_id};
