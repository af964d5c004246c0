//! Test utilities for soil classification testing

use crate::app::models::{ClassifiedPoint, Layer, Row, SoilZone};

mod layer_tests;

pub fn zone(id: u8) -> SoilZone {
    SoilZone::from_id(id).unwrap()
}

pub fn point(depth: f64, zone_id: Option<u8>) -> ClassifiedPoint {
    ClassifiedPoint {
        depth,
        zone: zone_id.map(zone),
    }
}

pub fn layer(start_depth: f64, end_depth: f64, zone_id: u8) -> Layer {
    Layer {
        start_depth,
        end_depth,
        zone: zone(zone_id),
    }
}

pub fn row(values: &[(&str, Option<f64>)]) -> Row {
    let mut row = Row::new();
    for (key, value) in values {
        row.set(*key, *value);
    }
    row
}
