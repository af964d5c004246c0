//! Application constants for the CPT processor
//!
//! This module contains the fixed lookup tables (GEF quantity codes, the BRO
//! 25-column layout, the Robertson zone table) and the default values used
//! throughout the application.

// =============================================================================
// Column Descriptors
// =============================================================================

/// Semantic descriptor of a known measurement quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantitySpec {
    /// Stable semantic key used for row lookups
    pub key: &'static str,
    /// Display label
    pub label: &'static str,
    /// Display unit
    pub unit: &'static str,
}

const fn quantity(key: &'static str, label: &'static str, unit: &'static str) -> QuantitySpec {
    QuantitySpec { key, label, unit }
}

/// Semantic keys that the classifier and renderer rely on
pub mod keys {
    pub const LENGTH: &str = "length";
    pub const DEPTH: &str = "depth";
    pub const QC: &str = "qc";
    pub const FS: &str = "fs";
    pub const RF: &str = "rf";
}

// =============================================================================
// GEF (text format) Constants
// =============================================================================

/// Accepted spellings of the GEF end-of-header line
pub const GEF_HEADER_TERMINATORS: &[&str] = &["#EOH", "#EOH="];

/// Prefix for columns whose quantity code is missing or unknown
pub const GEF_SYNTHETIC_KEY_PREFIX: &str = "col_";

/// Name used when a sounding carries neither a test nor a project id
pub const UNKNOWN_SOUNDING_NAME: &str = "unknown";

/// Vertical datum label attached to GEF elevations
pub const GEF_VERTICAL_DATUM: &str = "NAP";

/// GEF quantity numbers (`#COLUMNINFO` fourth field) mapped to semantic columns
pub const GEF_QUANTITIES: &[(u32, QuantitySpec)] = &[
    (1, quantity("length", "Penetration length", "m")),
    (2, quantity("qc", "Cone resistance", "MPa")),
    (3, quantity("fs", "Sleeve friction", "MPa")),
    (4, quantity("rf", "Friction ratio", "%")),
    (5, quantity("u1", "Pore pressure u1", "MPa")),
    (6, quantity("u2", "Pore pressure u2", "MPa")),
    (7, quantity("u3", "Pore pressure u3", "MPa")),
    (8, quantity("incl", "Inclination (resultant)", "deg")),
    (9, quantity("incl_ns", "Inclination N-S", "deg")),
    (10, quantity("incl_ew", "Inclination E-W", "deg")),
    (11, quantity("depth", "Corrected depth", "m")),
    (12, quantity("time", "Elapsed time", "s")),
    (13, quantity("qt", "Corrected cone resistance", "MPa")),
    (14, quantity("qn", "Net cone resistance", "MPa")),
    (15, quantity("bq", "Pore ratio", "-")),
    (23, quantity("conductivity", "Electrical conductivity", "S/m")),
    (35, quantity("speed", "Penetration speed", "cm/s")),
    (39, quantity("temperature", "Temperature", "°C")),
    (40, quantity("fs_total", "Total friction", "kN")),
];

/// Look up a GEF quantity number
pub fn gef_quantity(code: u32) -> Option<&'static QuantitySpec> {
    GEF_QUANTITIES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, spec)| spec)
}

// =============================================================================
// BRO-XML (fixed schema) Constants
// =============================================================================

/// One position of the fixed BRO measurement layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BroColumn {
    pub quantity: QuantitySpec,
    /// Local name of the `parameters` child flagging this column as measured
    pub flag: &'static str,
}

const fn bro(
    key: &'static str,
    label: &'static str,
    unit: &'static str,
    flag: &'static str,
) -> BroColumn {
    BroColumn {
        quantity: quantity(key, label, unit),
        flag,
    }
}

/// Number of tokens in one BRO measurement block
pub const BRO_COLUMN_COUNT: usize = 25;

/// Value marking a missing BRO measurement
pub const BRO_NULL_SENTINEL: f64 = -999999.0;

/// Flag text meaning "column present" (compared lower-cased)
pub const BRO_FLAG_YES: &str = "ja";

/// Default separators used when the document has no encoding declaration
pub const BRO_DEFAULT_TOKEN_SEPARATOR: &str = ",";
pub const BRO_DEFAULT_BLOCK_SEPARATOR: &str = ";";

/// Default vertical datum when the document omits one
pub const BRO_DEFAULT_VERTICAL_DATUM: &str = "NAP";

/// Accepted local names of the CPT root object
pub const BRO_ROOT_ELEMENTS: &[&str] = &["CPT_O", "CPT"];

/// The fixed, ordered BRO column layout
pub const BRO_COLUMNS: [BroColumn; BRO_COLUMN_COUNT] = [
    bro("length", "Penetration length", "m", "penetrationLength"),
    bro("depth", "Depth", "m", "depth"),
    bro("time", "Elapsed time", "s", "elapsedTime"),
    bro("qc", "Cone resistance", "MPa", "coneResistance"),
    bro("qt", "Corrected cone resistance", "MPa", "correctedConeResistance"),
    bro("qn", "Net cone resistance", "MPa", "netConeResistance"),
    bro("mag_x", "Magnetic field X", "nT", "magneticFieldStrengthX"),
    bro("mag_y", "Magnetic field Y", "nT", "magneticFieldStrengthY"),
    bro("mag_z", "Magnetic field Z", "nT", "magneticFieldStrengthZ"),
    bro("mag_total", "Magnetic field total", "nT", "magneticFieldStrengthTotal"),
    bro("conductivity", "Electrical conductivity", "S/m", "electricalConductivity"),
    bro("incl_ew", "Inclination E-W", "deg", "inclinationEW"),
    bro("incl_ns", "Inclination N-S", "deg", "inclinationNS"),
    bro("incl_x", "Inclination X", "deg", "inclinationX"),
    bro("incl_y", "Inclination Y", "deg", "inclinationY"),
    bro("incl", "Inclination (resultant)", "deg", "inclinationResultant"),
    bro("mag_incl", "Magnetic inclination", "deg", "magneticInclination"),
    bro("mag_decl", "Magnetic declination", "deg", "magneticDeclination"),
    bro("fs", "Sleeve friction", "MPa", "localFriction"),
    bro("bq", "Pore ratio", "-", "poreRatio"),
    bro("temperature", "Temperature", "°C", "temperature"),
    bro("u1", "Pore pressure u1", "MPa", "porePressureU1"),
    bro("u2", "Pore pressure u2", "MPa", "porePressureU2"),
    bro("u3", "Pore pressure u3", "MPa", "porePressureU3"),
    bro("rf", "Friction ratio", "%", "frictionRatio"),
];

// =============================================================================
// Derived Columns
// =============================================================================

/// Descriptor appended when depth is synthesized from penetration length
pub const DERIVED_DEPTH: QuantitySpec = quantity("depth", "Depth", "m");

/// Descriptor appended when the friction ratio is synthesized from qc and fs
pub const DERIVED_RF: QuantitySpec = quantity("rf", "Friction ratio", "%");

// =============================================================================
// Robertson Soil Behaviour Zones
// =============================================================================

/// Zone ids, names and display colors (id order)
pub const ROBERTSON_ZONE_TABLE: [(u8, &str, &str); 9] = [
    (1, "Sensitive fine-grained", "#c0504d"),
    (2, "Organic soils / peat", "#7b5b3a"),
    (3, "Clay", "#4f81bd"),
    (4, "Silt mixtures", "#4bacc6"),
    (5, "Sand mixtures", "#9bbb59"),
    (6, "Sands", "#f2c200"),
    (7, "Gravelly sand to dense sand", "#f79646"),
    (8, "Very stiff sand to clayey sand", "#8064a2"),
    (9, "Very stiff fine-grained", "#2c4d75"),
];

/// Default minimum layer thickness in metres
pub const DEFAULT_MIN_LAYER_THICKNESS: f64 = 0.2;

/// Files read concurrently during batch loading
pub const LOAD_CONCURRENCY: usize = 8;

// =============================================================================
// Chart Defaults
// =============================================================================

pub mod chart {
    /// Default surface size in pixels
    pub const DEFAULT_WIDTH: f64 = 900.0;
    pub const DEFAULT_HEIGHT: f64 = 700.0;

    /// Fixed width of the depth label column
    pub const DEPTH_AXIS_WIDTH: f64 = 52.0;

    /// Fixed width of the soil type strip
    pub const SOIL_STRIP_WIDTH: f64 = 26.0;

    /// Horizontal gap between panels
    pub const PANEL_GAP: f64 = 6.0;

    /// Space reserved above the panels for titles and tick labels
    pub const TOP_MARGIN: f64 = 38.0;
    pub const BOTTOM_MARGIN: f64 = 10.0;

    /// Span multiplier applied per wheel step
    pub const WHEEL_ZOOM_FACTOR: f64 = 1.12;

    /// Span multiplier applied by the zoom buttons
    pub const BUTTON_ZOOM_FACTOR: f64 = 1.3;

    /// Smallest visible depth span
    pub const MIN_VIEW_SPAN: f64 = 0.5;

    /// Desired number of horizontal grid steps
    pub const TARGET_GRID_STEPS: usize = 8;

    /// Relative headroom added below the deepest sample
    pub const DEPTH_HEADROOM: f64 = 0.02;

    /// Depth extent used when a sounding has no valid depth
    pub const EMPTY_DEPTH_EXTENT: f64 = 10.0;

    /// Panels narrower than this get no tick labels
    pub const NARROW_PANEL_WIDTH: f64 = 60.0;

    /// Opacity of the soil tint drawn behind the first data panel
    pub const SOIL_UNDERLAY_ALPHA: f64 = 0.15;

    /// Opacity of the soil strip bands
    pub const SOIL_STRIP_ALPHA: f64 = 1.0;
}
