//! CPT Processor Library
//!
//! A Rust library for reading geotechnical Cone Penetration Test (CPT) soundings
//! and turning them into classified, plottable depth profiles.
//!
//! This library provides tools for:
//! - Parsing GEF text files and BRO-XML documents into one canonical record
//! - Classifying every sample into a Robertson soil behaviour zone
//! - Merging point classifications into contiguous layers with a distribution summary
//! - Rendering a depth-synchronised multi-panel chart with pan, zoom and hover probing
//! - Best-effort recovery of individual values while failing fast on broken structure

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod bro_xml_parser;
        pub mod chart_renderer;
        pub mod gef_parser;
        pub mod soil_classifier;
        pub mod sounding_loader;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{
    ClassifiedPoint, ColumnDescriptor, DistributionEntry, FormatRecord, Header, Layer, Row,
    SoilZone, SourceFormat,
};
pub use config::Config;

/// Result type alias for the CPT processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for CPT processing operations
///
/// Individual unreadable samples never surface here; they are stored as
/// missing values in the parsed rows.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Structurally invalid sounding file
    #[error("Format error in file '{file}': {message}")]
    Format { file: String, message: String },

    /// XML document could not be parsed
    #[error("XML error in file '{file}': {message}")]
    Xml { file: String, message: String },

    /// File extension does not map to a known sounding format
    #[error("Unsupported file format: {path}")]
    UnsupportedFormat { path: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Chart rendering error
    #[error("Render error: {message}")]
    Render { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a format error for a named file
    pub fn format(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Format {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create an XML error for a named file
    pub fn xml(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Xml {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create an unsupported format error
    pub fn unsupported_format(path: impl Into<String>) -> Self {
        Self::UnsupportedFormat { path: path.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a render error
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    /// Short stable tag describing the error family
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Io { .. } => "io",
            Self::Format { .. } => "format",
            Self::Xml { .. } => "xml",
            Self::UnsupportedFormat { .. } => "unsupported-format",
            Self::Configuration { .. } => "configuration",
            Self::Render { .. } => "render",
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration {
            message: error.to_string(),
        }
    }
}
