//! Core BRO-XML parser implementation

use roxmltree::{Document, Node};
use tracing::{debug, info};

use super::metadata::{extract_header, find_descendant};
use super::values::{Separators, active_columns, parse_blocks};
use crate::app::models::{ColumnDescriptor, FormatRecord, ParseStats, SourceFormat};
use crate::constants::{BRO_COLUMNS, BRO_ROOT_ELEMENTS};
use crate::{Error, Result};

/// Longest parser diagnostic carried into an error message
const DIAGNOSTIC_EXCERPT_LEN: usize = 200;

/// BRO-XML parser for fixed-schema CPT documents
#[derive(Debug, Clone)]
pub struct BroXmlParser {
    file_name: String,
}

impl BroXmlParser {
    /// Create a parser; the file name is only used for error context
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    /// Parse XML text into a record
    pub fn parse(&self, content: &str) -> Result<FormatRecord> {
        let document = Document::parse(content).map_err(|e| {
            let diagnostic: String = e.to_string().chars().take(DIAGNOSTIC_EXCERPT_LEN).collect();
            Error::xml(&self.file_name, format!("invalid XML: {}", diagnostic))
        })?;

        let root = self.find_root(&document)?;

        let values = find_descendant(root, "cptResult")
            .and_then(|result| find_descendant(result, "values"))
            .or_else(|| find_descendant(root, "values"))
            .ok_or_else(|| Error::format(&self.file_name, "no measurement values element"))?;

        let header = extract_header(root);
        let active = active_columns(root);
        let separators = Separators::from_document(root);
        debug!(
            "{}: separators token={:?} block={:?}, {} active columns",
            self.file_name,
            separators.token,
            separators.block,
            active.iter().filter(|a| **a).count()
        );

        let mut stats = ParseStats::new();
        let data = parse_blocks(values.text().unwrap_or_default(), &separators, &mut stats);

        let columns: Vec<ColumnDescriptor> = BRO_COLUMNS
            .iter()
            .zip(active.iter())
            .filter(|(_, active)| **active)
            .map(|(column, _)| ColumnDescriptor::from_quantity(&column.quantity))
            .collect();

        let mut record = FormatRecord::new(SourceFormat::BroXml, header, columns, data);
        record.stats = stats;

        if record.derive_friction_ratio() {
            debug!("{}: friction ratio derived from qc and fs", self.file_name);
        }

        info!(
            "Parsed BRO sounding '{}' from {}: {} columns, {} rows ({} blocks dropped)",
            record.name,
            self.file_name,
            record.columns.len(),
            record.data.len(),
            record.stats.records_skipped
        );

        Ok(record)
    }

    fn find_root<'a, 'input>(&self, document: &'a Document<'input>) -> Result<Node<'a, 'input>> {
        document
            .descendants()
            .find(|n| n.is_element() && BRO_ROOT_ELEMENTS.contains(&n.tag_name().name()))
            .ok_or_else(|| Error::format(&self.file_name, "no CPT root object"))
    }
}

/// Parse BRO-XML text without a file name
pub fn parse_bro_xml(content: &str) -> Result<FormatRecord> {
    BroXmlParser::new("unknown").parse(content)
}
