//! Command-line argument definitions for the CPT processor
//!
//! This module defines the CLI interface using the clap derive API.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the CPT processor
///
/// Reads GEF and BRO-XML cone penetration test soundings, classifies soil
/// behaviour types and renders depth charts.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "cpt-processor",
    version,
    about = "Parse, classify and chart cone penetration test soundings",
    long_about = "Reads CPT soundings from GEF text files and BRO-XML documents into one \
                  canonical record, classifies every sample into a Robertson soil behaviour \
                  zone, merges the classification into layers and renders depth-synchronised \
                  multi-panel charts as SVG."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Show metadata, columns and soil distribution of soundings
    Inspect(InspectArgs),
    /// Print the merged soil layer table of one sounding
    Layers(LayersArgs),
    /// Render the depth chart of one sounding to SVG
    Render(RenderArgs),
}

/// Flags shared by every subcommand
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GlobalArgs {
    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings and hides progress bars.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Path to configuration file
    ///
    /// TOML file with `[classifier]` and `[chart]` sections. Defaults apply
    /// when not specified.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,
}

impl GlobalArgs {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }
        Ok(())
    }
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// Sounding files or directories to inspect
    ///
    /// Directories are searched recursively for `.gef` and `.xml` files.
    #[arg(value_name = "PATHS", required = true)]
    pub paths: Vec<PathBuf>,

    /// Output format for the report
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the report"
    )]
    pub format: ReportFormat,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Arguments for the layers command
#[derive(Debug, Clone, Parser)]
pub struct LayersArgs {
    /// Sounding file
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Output format for the layer table
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the layer table"
    )]
    pub format: OutputFormat,

    /// Minimum layer thickness in metres
    ///
    /// Thinner provisional layers are absorbed by the layer above. Overrides
    /// the configuration file.
    #[arg(
        long = "min-thickness",
        value_name = "METRES",
        help = "Minimum layer thickness in metres"
    )]
    pub min_thickness: Option<f64>,

    #[command(flatten)]
    pub global: GlobalArgs,
}

impl LayersArgs {
    pub fn validate(&self) -> Result<()> {
        self.global.validate()?;
        if let Some(thickness) = self.min_thickness {
            if !(thickness >= 0.0) {
                return Err(Error::configuration(format!(
                    "Minimum thickness must be non-negative, got {}",
                    thickness
                )));
            }
        }
        Ok(())
    }
}

/// Arguments for the render command
#[derive(Debug, Clone, Parser)]
pub struct RenderArgs {
    /// Sounding file
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Output SVG file
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: PathBuf,

    /// Chart width in pixels
    #[arg(long = "width", value_name = "PX")]
    pub width: Option<f64>,

    /// Chart height in pixels
    #[arg(long = "height", value_name = "PX")]
    pub height: Option<f64>,

    /// Top of the visible depth window (m)
    #[arg(long = "from", value_name = "DEPTH", requires = "to")]
    pub from: Option<f64>,

    /// Bottom of the visible depth window (m)
    #[arg(long = "to", value_name = "DEPTH", requires = "from")]
    pub to: Option<f64>,

    /// Draw the crosshair readout at this depth (m)
    #[arg(long = "hover-depth", value_name = "DEPTH")]
    pub hover_depth: Option<f64>,

    #[command(flatten)]
    pub global: GlobalArgs,
}

impl RenderArgs {
    pub fn validate(&self) -> Result<()> {
        self.global.validate()?;

        for (name, value) in [("width", self.width), ("height", self.height)] {
            if let Some(value) = value {
                if !(value > 0.0) {
                    return Err(Error::configuration(format!(
                        "Chart {} must be positive, got {}",
                        name, value
                    )));
                }
            }
        }

        if let (Some(from), Some(to)) = (self.from, self.to) {
            if !(from < to) {
                return Err(Error::configuration(format!(
                    "Depth window must run downwards, got {} to {}",
                    from, to
                )));
            }
        }

        if let Some(parent) = self.output.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(Error::configuration(format!(
                    "Output directory does not exist: {}",
                    parent.display()
                )));
            }
        }

        Ok(())
    }
}

/// Report formats for inspect
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// Output formats for tabular results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Option<Commands> {
        self.command.clone()
    }
}
