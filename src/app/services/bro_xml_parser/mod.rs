//! BRO-XML parser for fixed-schema CPT documents
//!
//! BRO documents describe a CPT object in namespaced XML. Metadata is found by
//! element local name regardless of namespace prefix, and the measurements are a
//! single text payload of blocks holding exactly 25 tokens each, in the fixed
//! order of [`crate::constants::BRO_COLUMNS`].
//!
//! - [`parser`] - Document parsing, root lookup and record assembly
//! - [`metadata`] - Local-name lookups and header extraction
//! - [`values`] - Active column flags, separators and block/token parsing

pub mod metadata;
pub mod parser;
pub mod values;

#[cfg(test)]
pub mod tests;

pub use parser::{BroXmlParser, parse_bro_xml};
