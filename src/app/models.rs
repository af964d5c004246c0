//! Data models for CPT processing
//!
//! This module contains the canonical sounding record produced by both parsers,
//! together with the soil classification types attached to it by the classifier.

use crate::constants::{self, QuantitySpec, keys};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

// =============================================================================
// Source Format
// =============================================================================

/// Encoding a sounding was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceFormat {
    /// GEF line-record text format
    Gef,
    /// BRO namespaced XML format
    BroXml,
}

impl SourceFormat {
    /// Detect the format from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "gef" => Some(Self::Gef),
            "xml" => Some(Self::BroXml),
            _ => None,
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gef => write!(f, "GEF"),
            Self::BroXml => write!(f, "BRO-XML"),
        }
    }
}

// =============================================================================
// Columns and Rows
// =============================================================================

/// Description of one measured or derived quantity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnDescriptor {
    /// Stable semantic key (e.g. `qc`, `fs`, `depth`)
    pub key: String,

    /// Display label
    pub label: String,

    /// Display unit
    pub unit: String,

    /// True when the parser synthesized the column instead of reading it
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub computed: bool,
}

impl ColumnDescriptor {
    /// Create a column read from the file
    pub fn new(key: impl Into<String>, label: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            unit: unit.into(),
            computed: false,
        }
    }

    /// Create a column from a known quantity
    pub fn from_quantity(spec: &QuantitySpec) -> Self {
        Self::new(spec.key, spec.label, spec.unit)
    }

    /// Create a synthesized column from a known quantity
    pub fn computed(spec: &QuantitySpec) -> Self {
        Self {
            computed: true,
            ..Self::from_quantity(spec)
        }
    }
}

/// One sample along the sounding, keyed by column key
///
/// A key mapped to `None` means the sample exists but holds no measurement.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Row {
    values: BTreeMap<String, Option<f64>>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for a key; `None` when absent or null
    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied().flatten()
    }

    /// Store a value (or an explicit null) for a key
    pub fn set(&mut self, key: impl Into<String>, value: Option<f64>) {
        self.values.insert(key.into(), value);
    }

    /// Whether the row has an entry (possibly null) for the key
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Absolute depth of the sample, from `depth` falling back to `length`
    pub fn classification_depth(&self) -> Option<f64> {
        self.get(keys::DEPTH)
            .or_else(|| self.get(keys::LENGTH))
            .map(f64::abs)
    }
}

// =============================================================================
// Header Metadata
// =============================================================================

/// Named sounding metadata; every field is optional and omitted when absent
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Header {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_regime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// Survey date in day-month-year display order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub survey_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface_elevation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_datum: Option<String>,

    /// Projected coordinate system tag and coordinates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinate_system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,

    /// Geodetic coordinates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub predrilled_depth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_depth: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_variant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_owner: Option<String>,
}

impl Header {
    /// Display name: test id, else project id, else the unknown marker
    pub fn display_name(&self) -> String {
        self.test_id
            .clone()
            .or_else(|| self.project_id.clone())
            .unwrap_or_else(|| constants::UNKNOWN_SOUNDING_NAME.to_string())
    }

    /// Populated fields as label/value pairs, in declaration order
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let text = |label: &'static str, value: &Option<String>| {
            value.as_ref().map(|v| (label, v.clone()))
        };
        let number = |label: &'static str, value: &Option<f64>| value.map(|v| (label, v.to_string()));

        [
            text("test id", &self.test_id),
            text("project id", &self.project_id),
            text("project name", &self.project_name),
            text("company", &self.company),
            text("quality regime", &self.quality_regime),
            text("quality class", &self.quality_class),
            text("standard", &self.standard),
            text("method", &self.method),
            text("survey date", &self.survey_date),
            number("surface elevation", &self.surface_elevation),
            text("vertical datum", &self.vertical_datum),
            text("coordinate system", &self.coordinate_system),
            number("x", &self.x),
            number("y", &self.y),
            number("lat", &self.lat),
            number("lon", &self.lon),
            number("predrilled depth", &self.predrilled_depth),
            number("final depth", &self.final_depth),
            text("measurement variant", &self.measurement_variant),
            text("format version", &self.format_version),
            text("file owner", &self.file_owner),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

// =============================================================================
// Soil Classification Types
// =============================================================================

/// One of the nine Robertson soil behaviour zones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SoilZone {
    pub id: u8,
    pub name: &'static str,
    pub color: &'static str,
}

impl SoilZone {
    /// Zone for an id in 1..=9
    pub fn from_id(id: u8) -> Option<Self> {
        constants::ROBERTSON_ZONE_TABLE
            .iter()
            .find(|(zone_id, _, _)| *zone_id == id)
            .map(|&(id, name, color)| Self { id, name, color })
    }
}

impl fmt::Display for SoilZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Classification of a single sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassifiedPoint {
    pub depth: f64,
    pub zone: Option<SoilZone>,
}

/// Contiguous depth interval assigned to one zone
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Layer {
    pub start_depth: f64,
    pub end_depth: f64,
    pub zone: SoilZone,
}

impl Layer {
    pub fn thickness(&self) -> f64 {
        self.end_depth - self.start_depth
    }

    pub fn contains(&self, depth: f64) -> bool {
        depth >= self.start_depth && depth <= self.end_depth
    }
}

/// Share of the sounding occupied by one zone
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistributionEntry {
    pub zone: SoilZone,
    pub thickness: f64,
    pub percentage: f64,
}

// =============================================================================
// Parse Statistics
// =============================================================================

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseStats {
    /// Data lines (GEF) or blocks (BRO) encountered
    pub total_records: usize,

    /// Rows successfully stored
    pub rows_parsed: usize,

    /// Lines or blocks dropped for being too short
    pub records_skipped: usize,

    /// Individual values stored as null (unparsable or void)
    pub values_nulled: usize,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            (self.rows_parsed as f64 / self.total_records as f64) * 100.0
        }
    }
}

// =============================================================================
// Format Record
// =============================================================================

/// Canonical representation of one parsed sounding
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormatRecord {
    pub name: String,
    pub format: SourceFormat,
    pub header: Header,

    /// Header keywords not mapped onto `header`, keyed by upper-cased keyword
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub raw_header: BTreeMap<String, String>,

    pub columns: Vec<ColumnDescriptor>,
    pub data: Vec<Row>,

    /// Attached by the classifier
    pub layers: Vec<Layer>,
    pub distribution: Vec<DistributionEntry>,

    pub stats: ParseStats,
}

impl FormatRecord {
    /// Create a record without classification results
    pub fn new(
        format: SourceFormat,
        header: Header,
        columns: Vec<ColumnDescriptor>,
        data: Vec<Row>,
    ) -> Self {
        Self {
            name: header.display_name(),
            format,
            header,
            raw_header: BTreeMap::new(),
            columns,
            data,
            layers: Vec::new(),
            distribution: Vec::new(),
            stats: ParseStats::new(),
        }
    }

    pub fn has_column(&self, key: &str) -> bool {
        self.columns.iter().any(|c| c.key == key)
    }

    pub fn column(&self, key: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Synthesize `depth = -length` when only penetration length was recorded
    pub fn derive_depth_from_length(&mut self) -> bool {
        if self.has_column(keys::DEPTH) || !self.has_column(keys::LENGTH) {
            return false;
        }
        for row in &mut self.data {
            let depth = row.get(keys::LENGTH).map(|length| -length);
            row.set(keys::DEPTH, depth);
        }
        self.columns
            .push(ColumnDescriptor::computed(&constants::DERIVED_DEPTH));
        true
    }

    /// Synthesize `rf = fs / qc * 100` when the friction ratio was not recorded
    pub fn derive_friction_ratio(&mut self) -> bool {
        if self.has_column(keys::RF) || !self.has_column(keys::QC) || !self.has_column(keys::FS) {
            return false;
        }
        for row in &mut self.data {
            let rf = match (row.get(keys::QC), row.get(keys::FS)) {
                (Some(qc), Some(fs)) if qc != 0.0 => Some(fs / qc * 100.0),
                _ => None,
            };
            row.set(keys::RF, rf);
        }
        self.columns.push(ColumnDescriptor::computed(&constants::DERIVED_RF));
        true
    }
}
