//! Core GEF parser implementation
//!
//! This module provides the parser orchestration: header/data splitting,
//! coordination between header and record parsing, and derived columns.

use tracing::{debug, info};

use super::header::HeaderState;
use super::record_parser::{LineSplitter, is_skippable, parse_data_line};
use crate::app::models::{FormatRecord, ParseStats, SourceFormat};
use crate::constants::GEF_HEADER_TERMINATORS;
use crate::{Error, Result};

/// GEF parser for line-record CPT files
#[derive(Debug, Clone)]
pub struct GefParser {
    file_name: String,
}

impl GefParser {
    /// Create a parser; the file name is only used for error context
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    /// Parse decoded GEF text into a record
    pub fn parse(&self, content: &str) -> Result<FormatRecord> {
        let normalized = content.replace("\r\n", "\n").replace('\r', "\n");
        let lines: Vec<&str> = normalized.split('\n').collect();

        let data_start = self.find_data_start(&lines)?;

        let mut header = HeaderState::new();
        for line in &lines[..data_start - 1] {
            header.parse_line(line);
        }

        let column_map = header.column_map();
        let splitter = LineSplitter::from_header(&header);

        let mut stats = ParseStats::new();
        let mut data = Vec::new();
        for line in &lines[data_start..] {
            if is_skippable(line) {
                continue;
            }
            stats.total_records += 1;
            match parse_data_line(line, &column_map, &splitter, &mut stats) {
                Some(row) => {
                    data.push(row);
                    stats.rows_parsed += 1;
                }
                None => stats.records_skipped += 1,
            }
        }

        debug!(
            "{}: {} rows parsed, {} short lines dropped, {} values nulled",
            self.file_name, stats.rows_parsed, stats.records_skipped, stats.values_nulled
        );

        let mut record = FormatRecord::new(
            SourceFormat::Gef,
            header.metadata(),
            column_map.descriptors(),
            data,
        );
        record.raw_header = header.fields;
        record.stats = stats;

        if record.derive_depth_from_length() {
            debug!("{}: depth derived from penetration length", self.file_name);
        }
        if record.derive_friction_ratio() {
            debug!("{}: friction ratio derived from qc and fs", self.file_name);
        }

        info!(
            "Parsed GEF sounding '{}' from {}: {} columns, {} rows",
            record.name,
            self.file_name,
            record.columns.len(),
            record.data.len()
        );

        Ok(record)
    }

    /// Index of the first line after the header terminator
    fn find_data_start(&self, lines: &[&str]) -> Result<usize> {
        lines
            .iter()
            .position(|line| GEF_HEADER_TERMINATORS.contains(&line.trim()))
            .map(|index| index + 1)
            .ok_or_else(|| Error::format(&self.file_name, "no header terminator"))
    }
}

/// Parse GEF text without a file name
pub fn parse_gef(content: &str) -> Result<FormatRecord> {
    GefParser::new("unknown").parse(content)
}
