//! Tests for GEF header keyword handling

use super::super::header::{
    HeaderState, format_start_date, parse_coordinates, parse_elevation, split_keyword,
};
use super::create_test_gef;

fn header_from(content: &str) -> HeaderState {
    let mut state = HeaderState::new();
    for line in content.lines().take_while(|l| l.trim() != "#EOH=") {
        state.parse_line(line);
    }
    state
}

#[test]
fn test_split_keyword_is_case_insensitive() {
    let (keyword, value) = split_keyword("#testid= CPT-1 ").unwrap();
    assert_eq!(keyword, "TESTID");
    assert_eq!(value, "CPT-1");

    let (keyword, value) = split_keyword("#ColumnInfo=1, m, length, 1").unwrap();
    assert_eq!(keyword, "COLUMNINFO");
    assert_eq!(value, "1, m, length, 1");
}

#[test]
fn test_split_keyword_rejects_other_lines() {
    assert!(split_keyword("0.00 1.2 3.4").is_none());
    assert!(split_keyword("# just a comment").is_none());
    assert!(split_keyword("").is_none());
}

#[test]
fn test_column_slots_and_voids() {
    let state = header_from(&create_test_gef());

    assert_eq!(state.slots.len(), 4);
    assert_eq!(state.slots[&0].quantity_code, Some(1));
    assert_eq!(state.slots[&1].name, "cone resistance");
    assert_eq!(state.voids.get(&1), Some(&9999.0));
    assert_eq!(state.voids.get(&2), Some(&9999.0));
    assert!(state.voids.get(&0).is_none());
    assert!(state.column_separator.is_none());
}

#[test]
fn test_column_map_resolves_known_codes() {
    let state = header_from(&create_test_gef());
    let map = state.column_map();

    let keys: Vec<&str> = map.columns.iter().map(|c| c.descriptor.key.as_str()).collect();
    assert_eq!(keys, vec!["length", "qc", "fs", "u2"]);
    assert_eq!(map.columns[1].descriptor.unit, "MPa");
    assert_eq!(map.columns[1].void_value, Some(9999.0));
}

#[test]
fn test_unknown_code_falls_back_to_synthetic_key() {
    let mut state = HeaderState::new();
    state.parse_line("#COLUMNINFO= 3, kPa, mystery channel, 777");
    state.parse_line("#COLUMNINFO= 5, -, untyped channel");
    let map = state.column_map();

    assert_eq!(map.columns[0].descriptor.key, "col_3");
    assert_eq!(map.columns[0].descriptor.label, "mystery channel");
    assert_eq!(map.columns[0].descriptor.unit, "kPa");
    assert_eq!(map.columns[1].descriptor.key, "col_5");
}

#[test]
fn test_short_columninfo_is_ignored() {
    let mut state = HeaderState::new();
    state.parse_line("#COLUMNINFO= 1, m");
    state.parse_line("#COLUMNINFO= 0, m, zero index, 1");
    assert!(state.slots.is_empty());
}

#[test]
fn test_other_keywords_kept_verbatim() {
    let state = header_from(&create_test_gef());
    assert_eq!(state.fields["PROJECTNAME"], "Dijkversterking Noord");
    assert_eq!(state.fields["COLUMN"], "4");
    assert!(state.fields["MEASUREMENTTEXT"].contains("cone type"));
    assert!(state.fields["MEASUREMENTTEXT"].contains("fixed horizontal level"));
    assert!(!state.fields.contains_key("COLUMNINFO"));
}

#[test]
fn test_metadata_extraction() {
    let header = header_from(&create_test_gef()).metadata();

    assert_eq!(header.test_id.as_deref(), Some("DKM-017"));
    assert_eq!(header.project_id.as_deref(), Some("CPT, 20-1042"));
    assert_eq!(header.project_name.as_deref(), Some("Dijkversterking Noord"));
    assert_eq!(header.company.as_deref(), Some("Geotest BV"));
    assert_eq!(header.survey_date.as_deref(), Some("14-06-2021"));
    assert_eq!(header.surface_elevation, Some(-1.25));
    assert_eq!(header.vertical_datum.as_deref(), Some("NAP"));
    assert_eq!(header.coordinate_system.as_deref(), Some("31000"));
    assert_eq!(header.x, Some(132456.10));
    assert_eq!(header.y, Some(456123.40));
    assert_eq!(header.format_version.as_deref(), Some("1, 1, 0"));
    assert_eq!(header.file_owner.as_deref(), Some("Wiertsema & Partners"));
    assert!(header.lat.is_none());
}

#[test]
fn test_absent_fields_are_omitted() {
    let header = HeaderState::new().metadata();
    assert!(header.fields().is_empty());
    assert!(header.surface_elevation.is_none());
    assert!(header.vertical_datum.is_none());
}

#[test]
fn test_composite_field_helpers() {
    assert_eq!(format_start_date("2019, 1, 5"), Some("05-01-2019".to_string()));
    assert_eq!(format_start_date("2019, 13, 45"), Some("45-13-2019".to_string()));
    assert_eq!(format_start_date("2019"), None);

    assert_eq!(parse_elevation("31000, 0.42"), Some(0.42));
    assert_eq!(parse_elevation("31000"), None);

    assert_eq!(
        parse_coordinates("28992, 100.5, 200.25"),
        Some(("28992".to_string(), 100.5, 200.25))
    );
    assert_eq!(parse_coordinates("28992, x, 200.25"), None);
}
