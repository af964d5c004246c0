//! Configuration management and validation.
//!
//! Provides configuration structures for soil classification and chart
//! rendering. Every field has a default, so a TOML file only needs to list
//! the values it changes.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::constants::{self, chart};
use crate::{Error, Result};

/// Soil classification settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Provisional layers thinner than this (m) are absorbed by the layer above
    pub min_layer_thickness: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            min_layer_thickness: constants::DEFAULT_MIN_LAYER_THICKNESS,
        }
    }
}

/// One plotted parameter panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterConfig {
    /// Column key plotted in this panel
    pub key: String,

    /// Panel title
    pub label: String,

    /// Unit shown next to the title
    pub unit: String,

    /// Relative share of the variable panel width
    pub weight: f64,

    /// Trace color
    pub color: String,
}

impl ParameterConfig {
    pub fn new(key: &str, label: &str, unit: &str, weight: f64, color: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            unit: unit.to_string(),
            weight,
            color: color.to_string(),
        }
    }
}

/// Chart rendering and interaction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Surface size in pixels
    pub width: f64,
    pub height: f64,

    /// Fixed-width columns
    pub depth_axis_width: f64,
    pub soil_strip_width: f64,
    pub panel_gap: f64,
    pub top_margin: f64,
    pub bottom_margin: f64,

    /// Span multiplier per wheel step
    pub wheel_zoom_factor: f64,

    /// Span multiplier for zoom in/out operations
    pub button_zoom_factor: f64,

    /// Smallest visible depth span (m)
    pub min_view_span: f64,

    /// Desired number of horizontal grid steps
    pub target_grid_steps: usize,

    /// Relative headroom below the deepest sample
    pub depth_headroom: f64,

    /// Panels narrower than this get no tick labels
    pub narrow_panel_width: f64,

    /// Plotted parameters, left to right
    pub parameters: Vec<ParameterConfig>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: chart::DEFAULT_WIDTH,
            height: chart::DEFAULT_HEIGHT,
            depth_axis_width: chart::DEPTH_AXIS_WIDTH,
            soil_strip_width: chart::SOIL_STRIP_WIDTH,
            panel_gap: chart::PANEL_GAP,
            top_margin: chart::TOP_MARGIN,
            bottom_margin: chart::BOTTOM_MARGIN,
            wheel_zoom_factor: chart::WHEEL_ZOOM_FACTOR,
            button_zoom_factor: chart::BUTTON_ZOOM_FACTOR,
            min_view_span: chart::MIN_VIEW_SPAN,
            target_grid_steps: chart::TARGET_GRID_STEPS,
            depth_headroom: chart::DEPTH_HEADROOM,
            narrow_panel_width: chart::NARROW_PANEL_WIDTH,
            parameters: vec![
                ParameterConfig::new("qc", "Cone resistance", "MPa", 1.0, "#d62728"),
                ParameterConfig::new("fs", "Sleeve friction", "MPa", 0.8, "#1f77b4"),
                ParameterConfig::new("rf", "Friction ratio", "%", 0.8, "#2ca02c"),
            ],
        }
    }
}

impl ChartConfig {
    /// Check sizes, zoom factors and panel weights
    pub fn validate(&self) -> Result<()> {
        if !(self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite())
        {
            return Err(Error::configuration(format!(
                "Chart size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.wheel_zoom_factor > 1.0 && self.button_zoom_factor > 1.0)
            || !(self.wheel_zoom_factor.is_finite() && self.button_zoom_factor.is_finite())
        {
            return Err(Error::configuration(
                "Zoom factors must be greater than 1",
            ));
        }
        if !(self.min_view_span > 0.0 && self.min_view_span.is_finite()) {
            return Err(Error::configuration("min_view_span must be positive"));
        }
        if self.target_grid_steps == 0 {
            return Err(Error::configuration("target_grid_steps must be at least 1"));
        }
        if !(self.depth_headroom >= 0.0 && self.depth_headroom.is_finite()) {
            return Err(Error::configuration(format!(
                "depth_headroom must be non-negative, got {}",
                self.depth_headroom
            )));
        }
        if self.parameters.is_empty() {
            return Err(Error::configuration(
                "At least one chart parameter is required",
            ));
        }
        if let Some(parameter) = self
            .parameters
            .iter()
            .find(|p| !(p.weight > 0.0 && p.weight.is_finite()))
        {
            return Err(Error::configuration(format!(
                "Panel weight for '{}' must be positive, got {}",
                parameter.key, parameter.weight
            )));
        }

        Ok(())
    }
}

/// Global configuration for CPT processing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub classifier: ClassifierConfig,
    pub chart: ChartConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config {}", path.display()), e)
        })?;
        let config = Self::from_toml(&content)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if !(self.classifier.min_layer_thickness >= 0.0) {
            return Err(Error::configuration(format!(
                "min_layer_thickness must be non-negative, got {}",
                self.classifier.min_layer_thickness
            )));
        }

        self.chart.validate()
    }

    /// Set the minimum layer thickness
    pub fn with_min_layer_thickness(mut self, thickness: f64) -> Self {
        self.classifier.min_layer_thickness = thickness;
        self
    }

    /// Set the chart surface size
    pub fn with_chart_size(mut self, width: f64, height: f64) -> Self {
        self.chart.width = width;
        self.chart.height = height;
        self
    }

    /// Replace the plotted parameters
    pub fn with_parameters(mut self, parameters: Vec<ParameterConfig>) -> Self {
        self.chart.parameters = parameters;
        self
    }
}
