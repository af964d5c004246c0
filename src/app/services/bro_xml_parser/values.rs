//! Measurement payload parsing for BRO-XML documents

use roxmltree::Node;
use tracing::{debug, warn};

use super::metadata::{find_child, find_descendant};
use crate::app::models::{ParseStats, Row};
use crate::constants::{
    BRO_COLUMN_COUNT, BRO_COLUMNS, BRO_DEFAULT_BLOCK_SEPARATOR, BRO_DEFAULT_TOKEN_SEPARATOR,
    BRO_FLAG_YES, BRO_NULL_SENTINEL,
};

/// Token and block separators of the values payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separators {
    pub token: String,
    pub block: String,
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            token: BRO_DEFAULT_TOKEN_SEPARATOR.to_string(),
            block: BRO_DEFAULT_BLOCK_SEPARATOR.to_string(),
        }
    }
}

impl Separators {
    /// Read the separators from the encoding declaration, falling back to defaults
    pub fn from_document(root: Node<'_, '_>) -> Self {
        let defaults = Self::default();
        let Some(encoding) = find_descendant(root, "TextEncoding") else {
            return defaults;
        };

        let attribute = |name: &str| {
            encoding
                .attribute(name)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        Self {
            token: attribute("tokenSeparator").unwrap_or(defaults.token),
            block: attribute("blockSeparator").unwrap_or(defaults.block),
        }
    }
}

/// Which of the fixed columns this document flags as measured
///
/// Without a `parameters` block every column counts as active.
pub fn active_columns(root: Node<'_, '_>) -> [bool; BRO_COLUMN_COUNT] {
    let Some(parameters) = find_descendant(root, "parameters") else {
        debug!("No parameters block, treating all columns as active");
        return [true; BRO_COLUMN_COUNT];
    };

    let mut active = [false; BRO_COLUMN_COUNT];
    for (flag, column) in active.iter_mut().zip(BRO_COLUMNS.iter()) {
        *flag = find_child(parameters, column.flag)
            .and_then(|n| n.text())
            .is_some_and(|text| text.trim().to_lowercase() == BRO_FLAG_YES);
    }
    active
}

/// Parse one token; non-numeric text and the sentinel become `None`
pub fn parse_token(token: &str) -> Option<f64> {
    token
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value != BRO_NULL_SENTINEL)
}

/// Split the payload into rows; blocks with fewer than 25 tokens are dropped
pub fn parse_blocks(payload: &str, separators: &Separators, stats: &mut ParseStats) -> Vec<Row> {
    let mut rows = Vec::new();

    for block in payload.split(separators.block.as_str()) {
        let block = block.trim();
        if block.is_empty() {
            continue;
        }
        stats.total_records += 1;

        let tokens: Vec<&str> = block.split(separators.token.as_str()).collect();
        if tokens.len() < BRO_COLUMN_COUNT {
            warn!(
                "Dropping measurement block with {} of {} values",
                tokens.len(),
                BRO_COLUMN_COUNT
            );
            stats.records_skipped += 1;
            continue;
        }

        let mut row = Row::new();
        for (column, token) in BRO_COLUMNS.iter().zip(tokens.iter()) {
            let value = parse_token(token);
            if value.is_none() {
                stats.values_nulled += 1;
            }
            row.set(column.quantity.key, value);
        }
        rows.push(row);
        stats.rows_parsed += 1;
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(values: &[&str]) -> String {
        values.join(",")
    }

    #[test]
    fn test_parse_token() {
        assert_eq!(parse_token(" 1.25 "), Some(1.25));
        assert_eq!(parse_token("-999999"), None);
        assert_eq!(parse_token("-999999.0"), None);
        assert_eq!(parse_token("-999998"), Some(-999998.0));
        assert_eq!(parse_token(""), None);
        assert_eq!(parse_token("x"), None);
    }

    #[test]
    fn test_short_block_dropped() {
        let full = block(&["1"; 25]);
        let short = block(&["1"; 24]);
        let payload = format!("{};{};", full, short);

        let mut stats = ParseStats::new();
        let rows = parse_blocks(&payload, &Separators::default(), &mut stats);

        assert_eq!(rows.len(), 1);
        assert_eq!(stats.total_records, 2);
        assert_eq!(stats.records_skipped, 1);
    }

    #[test]
    fn test_custom_separators() {
        let payload = format!("{}|{}", vec!["2"; 25].join(" "), vec!["3"; 25].join(" "));
        let separators = Separators {
            token: " ".to_string(),
            block: "|".to_string(),
        };

        let mut stats = ParseStats::new();
        let rows = parse_blocks(&payload, &separators, &mut stats);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].get("qc"), Some(3.0));
    }
}
