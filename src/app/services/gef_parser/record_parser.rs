//! Data line parsing for GEF files
//!
//! Each data line is split on the declared separator (any whitespace run by
//! default) and every mapped column picks up the token at its position.

use super::column_info::ColumnMap;
use super::header::HeaderState;
use crate::app::models::{ParseStats, Row};

/// Splits data lines according to the header separators
#[derive(Debug, Clone, Copy)]
pub struct LineSplitter<'a> {
    column_separator: Option<&'a str>,
    record_separator: Option<&'a str>,
}

impl<'a> LineSplitter<'a> {
    pub fn new(column_separator: Option<&'a str>, record_separator: Option<&'a str>) -> Self {
        Self {
            column_separator,
            record_separator,
        }
    }

    pub fn from_header(header: &'a HeaderState) -> Self {
        Self::new(
            header.column_separator.as_deref(),
            header.record_separator.as_deref(),
        )
    }

    /// Trimmed, non-empty tokens of a line
    pub fn tokens<'l>(&self, line: &'l str) -> Vec<&'l str> {
        let mut line = line.trim();
        if let Some(record_separator) = self.record_separator {
            line = line.strip_suffix(record_separator).unwrap_or(line);
        }

        match self.column_separator {
            Some(separator) => line
                .split(separator)
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .collect(),
            None => line.split_whitespace().collect(),
        }
    }
}

/// Whether a line carries no data (blank, comment or marker)
pub fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!')
}

/// Parse one numeric token; unparsable text and the void value become `None`
pub fn parse_value(token: &str, void_value: Option<f64>) -> Option<f64> {
    let value = token.parse::<f64>().ok().filter(|v| v.is_finite())?;
    match void_value {
        Some(void) if value == void => None,
        _ => Some(value),
    }
}

/// Parse a data line into a row; `None` when the line is too short
pub fn parse_data_line(
    line: &str,
    map: &ColumnMap,
    splitter: &LineSplitter<'_>,
    stats: &mut ParseStats,
) -> Option<Row> {
    let tokens = splitter.tokens(line);
    if tokens.len() < map.len() {
        return None;
    }

    let mut row = Row::new();
    for column in &map.columns {
        let value = tokens
            .get(column.index)
            .and_then(|token| parse_value(token, column.void_value));
        if value.is_none() {
            stats.values_nulled += 1;
        }
        row.set(column.descriptor.key.clone(), value);
    }
    Some(row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokens() {
        let splitter = LineSplitter::new(None, None);
        assert_eq!(splitter.tokens("  0.02\t1.5   0.01 "), vec!["0.02", "1.5", "0.01"]);
    }

    #[test]
    fn test_literal_separator_drops_empty_tokens() {
        let splitter = LineSplitter::new(Some(";"), Some("!"));
        assert_eq!(splitter.tokens("0.02; 1.5;;0.01;!"), vec!["0.02", "1.5", "0.01"]);
    }

    #[test]
    fn test_parse_value_void_and_garbage() {
        assert_eq!(parse_value("1.25", None), Some(1.25));
        assert_eq!(parse_value("9999.0", Some(9999.0)), None);
        assert_eq!(parse_value("9999.5", Some(9999.0)), Some(9999.5));
        assert_eq!(parse_value("n/a", None), None);
        assert_eq!(parse_value("NaN", None), None);
    }

    #[test]
    fn test_skippable_lines() {
        assert!(is_skippable(""));
        assert!(is_skippable("   "));
        assert!(is_skippable("#COMMENT= x"));
        assert!(is_skippable("! end"));
        assert!(!is_skippable("0.0 1.0"));
    }
}
