//! GEF parser for line-record CPT files
//!
//! GEF files carry a `#KEYWORD= value` header terminated by `#EOH`, followed by
//! whitespace- or separator-delimited data lines. The parser is tolerant: short
//! data lines are dropped and unreadable values become nulls, but a file without
//! a header terminator is rejected.
//!
//! ## Architecture
//!
//! - [`parser`] - Parsing orchestration: terminator search, derived columns
//! - [`header`] - Keyword dispatch and metadata extraction
//! - [`column_info`] - `#COLUMNINFO` / `#COLUMNVOID` slot registration and mapping
//! - [`record_parser`] - Data line splitting and value conversion
//!
//! ## Usage
//!
//! ```rust
//! use cpt_processor::app::services::gef_parser::GefParser;
//!
//! let content = "#GEFID= 1, 1, 0\n#COLUMNINFO= 1, m, length, 1\n#COLUMNINFO= 2, MPa, qc, 2\n#EOH=\n0.02 1.5\n";
//! let record = GefParser::new("CPT-1.gef").parse(content).unwrap();
//! assert_eq!(record.data.len(), 1);
//! assert_eq!(record.data[0].get("depth"), Some(-0.02));
//! ```

pub mod column_info;
pub mod header;
pub mod parser;
pub mod record_parser;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_info::{ColumnMap, MappedColumn};
pub use header::HeaderState;
pub use parser::{GefParser, parse_gef};
