//! File intake for CPT soundings
//!
//! Bytes are decoded with the charset of their format (Windows-1252 for GEF,
//! UTF-8 for BRO-XML), parsed into a [`FormatRecord`] and classified. Batch
//! loading never stops at a broken file: every failure is reported with its
//! file name, error kind and message, and the remaining files still load.

use encoding_rs::{UTF_8, WINDOWS_1252};
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::app::models::{FormatRecord, SourceFormat};
use crate::app::services::bro_xml_parser::BroXmlParser;
use crate::app::services::gef_parser::GefParser;
use crate::app::services::soil_classifier::SoilClassifier;
use crate::config::ClassifierConfig;
use crate::constants::LOAD_CONCURRENCY;
use crate::{Error, Result};

/// Decode raw file bytes with the charset of `format`
pub fn decode_bytes(bytes: &[u8], format: SourceFormat) -> String {
    match format {
        SourceFormat::Gef => {
            let (text, _, had_errors) = WINDOWS_1252.decode(bytes);
            if had_errors {
                warn!("GEF content contained undecodable bytes");
            }
            text.into_owned()
        }
        SourceFormat::BroXml => {
            // `decode` strips a UTF-8 byte order mark
            let (text, _, had_errors) = UTF_8.decode(bytes);
            if had_errors {
                warn!("BRO-XML content is not valid UTF-8, replaced invalid sequences");
            }
            text.into_owned()
        }
    }
}

/// Parse decoded text with the parser for `format`
pub fn parse_text(text: &str, format: SourceFormat, file_name: &str) -> Result<FormatRecord> {
    match format {
        SourceFormat::Gef => GefParser::new(file_name).parse(text),
        SourceFormat::BroXml => BroXmlParser::new(file_name).parse(text),
    }
}

/// Attach layers and the zone distribution to a parsed record
pub fn classify_record(record: &mut FormatRecord, config: &ClassifierConfig) {
    SoilClassifier::new(config).classify_record(record);
}

/// Display name used in failure reports
fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// A file that could not be loaded
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadFailure {
    pub file: String,
    pub kind: &'static str,
    pub message: String,
}

impl LoadFailure {
    pub fn new(path: &Path, error: &Error) -> Self {
        Self {
            file: file_label(path),
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

/// Result of loading several files
#[derive(Debug, Default, Serialize)]
pub struct BatchOutcome {
    pub records: Vec<FormatRecord>,
    pub failures: Vec<LoadFailure>,
}

impl BatchOutcome {
    /// True when every file loaded
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn total(&self) -> usize {
        self.records.len() + self.failures.len()
    }
}

/// Expand directories to the sounding files they contain
///
/// Files are kept as given, whatever their extension, so unsupported inputs are
/// reported when loaded. Directory contents are filtered to `.gef` and `.xml`
/// and sorted. Missing paths are reported as failures.
pub fn expand_inputs(inputs: &[PathBuf]) -> (Vec<PathBuf>, Vec<LoadFailure>) {
    let mut files = Vec::new();
    let mut failures = Vec::new();

    for input in inputs {
        if input.is_dir() {
            let mut found: Vec<PathBuf> = WalkDir::new(input)
                .follow_links(false)
                .into_iter()
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.into_path())
                .filter(|path| path.is_file() && SourceFormat::from_path(path).is_some())
                .collect();
            found.sort();
            debug!("{}: {} sounding files", input.display(), found.len());
            files.extend(found);
        } else if input.exists() {
            files.push(input.clone());
        } else {
            let error = Error::io(
                format!("File not found: {}", input.display()),
                std::io::Error::new(std::io::ErrorKind::NotFound, "no such file or directory"),
            );
            failures.push(LoadFailure::new(input, &error));
        }
    }

    (files, failures)
}

/// Loads and classifies sounding files
#[derive(Debug, Clone, Default)]
pub struct SoundingLoader {
    classifier: SoilClassifier,
}

impl SoundingLoader {
    pub fn new(config: &ClassifierConfig) -> Self {
        Self {
            classifier: SoilClassifier::new(config),
        }
    }

    /// Decode, parse and classify in-memory content
    ///
    /// Content fetched from a remote survey service enters here as well.
    pub fn load_bytes(
        &self,
        bytes: &[u8],
        format: SourceFormat,
        file_name: &str,
    ) -> Result<FormatRecord> {
        let text = decode_bytes(bytes, format);
        let mut record = parse_text(&text, format, file_name)?;
        self.classifier.classify_record(&mut record);
        Ok(record)
    }

    /// Read, parse and classify one file
    pub async fn load_file(&self, path: &Path) -> Result<FormatRecord> {
        let format = SourceFormat::from_path(path)
            .ok_or_else(|| Error::unsupported_format(path.display().to_string()))?;

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());

        self.load_bytes(&bytes, format, &file_label(path))
    }

    /// Load every input, collecting failures instead of stopping
    pub async fn load_batch(&self, inputs: &[PathBuf], show_progress: bool) -> BatchOutcome {
        let (files, failures) = expand_inputs(inputs);
        let mut outcome = BatchOutcome {
            records: Vec::with_capacity(files.len()),
            failures,
        };

        let progress_bar = show_progress.then(|| {
            let pb = ProgressBar::new(files.len() as u64);
            if let Ok(style) = ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            {
                pb.set_style(style.progress_chars("#>-"));
            }
            pb
        });

        // `buffered` keeps results in input order
        let results: Vec<(PathBuf, Result<FormatRecord>)> = stream::iter(files)
            .map(|path| {
                let progress_bar = progress_bar.as_ref();
                async move {
                    let result = self.load_file(&path).await;
                    if let Some(pb) = progress_bar {
                        pb.set_message(file_label(&path));
                        pb.inc(1);
                    }
                    (path, result)
                }
            })
            .buffered(LOAD_CONCURRENCY)
            .collect()
            .await;

        for (path, result) in results {
            match result {
                Ok(record) => outcome.records.push(record),
                Err(error) => {
                    warn!("Failed to load {}: {}", path.display(), error);
                    outcome.failures.push(LoadFailure::new(&path, &error));
                }
            }
        }

        if let Some(pb) = progress_bar {
            pb.finish_and_clear();
        }

        info!(
            "Loaded {} of {} soundings ({} failed)",
            outcome.records.len(),
            outcome.total(),
            outcome.failures.len()
        );
        outcome
    }
}
