//! GEF header keyword dispatch and metadata extraction
//!
//! Every header line of the form `#KEYWORD= value` is fed through
//! [`HeaderState::parse_line`]. Structural keywords (column declarations, void
//! values, separators) update the parser state; everything else is kept
//! verbatim under its upper-cased keyword and later mapped onto [`Header`].

use chrono::NaiveDate;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use tracing::{debug, warn};

use super::column_info::{ColumnMap, ColumnSlot, parse_column_void};
use crate::app::models::Header;
use crate::constants::GEF_VERTICAL_DATUM;

/// Accumulated header state for one forward scan
#[derive(Debug, Clone, Default)]
pub struct HeaderState {
    /// Registered column slots by 0-based index
    pub slots: BTreeMap<usize, ColumnSlot>,

    /// Void sentinels by 0-based index
    pub voids: BTreeMap<usize, f64>,

    /// Literal column separator; `None` means any whitespace run
    pub column_separator: Option<String>,

    /// Literal end-of-record marker
    pub record_separator: Option<String>,

    /// Remaining keywords, upper-cased, with their raw values
    pub fields: BTreeMap<String, String>,
}

impl HeaderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch one header line; lines that are not `#KEYWORD=value` are ignored
    pub fn parse_line(&mut self, line: &str) {
        let Some((keyword, value)) = split_keyword(line) else {
            return;
        };

        match keyword.as_str() {
            "COLUMNINFO" => {
                if let Some((index, slot)) = ColumnSlot::parse(value) {
                    self.slots.insert(index, slot);
                }
            }
            "COLUMNVOID" => match parse_column_void(value) {
                Some((index, void_value)) => {
                    self.voids.insert(index, void_value);
                }
                None => warn!("Ignoring unreadable COLUMNVOID: {}", value),
            },
            "COLUMNSEPARATOR" => self.column_separator = non_empty(value),
            "RECORDSEPARATOR" => self.record_separator = non_empty(value),
            _ => {
                self.fields
                    .entry(keyword)
                    .and_modify(|existing| {
                        existing.push('\n');
                        existing.push_str(value);
                    })
                    .or_insert_with(|| value.to_string());
            }
        }
    }

    /// Ordered column map built from the registered slots
    pub fn column_map(&self) -> ColumnMap {
        ColumnMap::build(&self.slots, &self.voids)
    }

    fn field(&self, keyword: &str) -> Option<String> {
        self.fields.get(keyword).and_then(|v| non_empty(v))
    }

    /// Map the pass-through keywords onto named metadata
    pub fn metadata(&self) -> Header {
        let mut header = Header {
            test_id: self.field("TESTID"),
            project_id: self.field("PROJECTID"),
            project_name: self.field("PROJECTNAME"),
            company: self
                .field("COMPANYID")
                .and_then(|v| v.split(',').next().and_then(non_empty)),
            measurement_variant: self.field("REPORTCODE"),
            format_version: self.field("GEFID"),
            file_owner: self.field("FILEOWNER"),
            ..Header::default()
        };

        if let Some(value) = self.fields.get("STARTDATE") {
            header.survey_date = format_start_date(value);
        }

        if let Some(elevation) = self.fields.get("ZID").and_then(|v| parse_elevation(v)) {
            header.surface_elevation = Some(elevation);
            header.vertical_datum = Some(GEF_VERTICAL_DATUM.to_string());
        }

        if let Some((system, x, y)) = self.fields.get("XYID").and_then(|v| parse_coordinates(v)) {
            header.coordinate_system = Some(system);
            header.x = Some(x);
            header.y = Some(y);
        }

        debug!("GEF metadata: {:?}", header);
        header
    }
}

/// Split `#KEYWORD= value` into the upper-cased keyword and trimmed value
pub fn split_keyword(line: &str) -> Option<(String, &str)> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"^#\s*([A-Za-z][A-Za-z0-9_]*)\s*=(.*)$").unwrap());

    let captures = re.captures(line.trim())?;
    let keyword = captures.get(1)?.as_str().to_ascii_uppercase();
    let value = captures.get(2).map_or("", |m| m.as_str().trim());
    Some((keyword, value))
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// `yyyy, mm, dd` → `dd-mm-yyyy`
pub fn format_start_date(value: &str) -> Option<String> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    if parts.len() < 3 {
        warn!("Invalid STARTDATE format: {}", value);
        return None;
    }

    let numbers = (
        parts[0].parse::<i32>(),
        parts[1].parse::<u32>(),
        parts[2].parse::<u32>(),
    );
    if let (Ok(year), Ok(month), Ok(day)) = numbers {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Some(date.format("%d-%m-%Y").to_string());
        }
    }

    // Keep unreadable dates visible in display order
    Some(format!("{}-{}-{}", parts[2], parts[1], parts[0]))
}

/// `datum, value[, accuracy]` → elevation value
pub fn parse_elevation(value: &str) -> Option<f64> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    if parts.len() < 2 {
        warn!("Invalid ZID format: {}", value);
        return None;
    }
    parts[1].parse::<f64>().ok()
}

/// `system, X, Y[, ...]` → (system tag, X, Y)
pub fn parse_coordinates(value: &str) -> Option<(String, f64, f64)> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    if parts.len() < 3 {
        warn!("Invalid XYID format: {}", value);
        return None;
    }

    match (parts[1].parse::<f64>(), parts[2].parse::<f64>()) {
        (Ok(x), Ok(y)) => Some((parts[0].to_string(), x, y)),
        _ => {
            warn!("Could not parse coordinates: {}", value);
            None
        }
    }
}
