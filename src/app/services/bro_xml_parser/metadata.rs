//! Metadata extraction from BRO-XML documents
//!
//! All lookups match on element local names so that documents using different
//! namespace prefixes (or none) are read the same way.

use chrono::NaiveDate;
use roxmltree::Node;
use tracing::debug;

use crate::app::models::Header;
use crate::constants::BRO_DEFAULT_VERTICAL_DATUM;

/// First descendant element (including `node` itself) with the given local name
pub fn find_descendant<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.descendants()
        .find(|n| n.is_element() && n.tag_name().name() == name)
}

/// Direct child element with the given local name
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
}

/// Trimmed, non-empty text of the first matching descendant
pub fn descendant_text(node: Node<'_, '_>, name: &str) -> Option<String> {
    find_descendant(node, name)
        .and_then(|n| n.text())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

fn descendant_number(node: Node<'_, '_>, name: &str) -> Option<f64> {
    descendant_text(node, name).and_then(|text| text.parse::<f64>().ok())
}

/// Two numbers from a whitespace-separated `pos` payload
pub fn parse_position(text: &str) -> Option<(f64, f64)> {
    let mut numbers = text.split_whitespace().map(|t| t.parse::<f64>());
    match (numbers.next(), numbers.next()) {
        (Some(Ok(first)), Some(Ok(second))) => Some((first, second)),
        _ => None,
    }
}

/// ISO date → `dd-mm-yyyy`; other text is kept as-is
fn display_date(text: &str) -> String {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map(|date| date.format("%d-%m-%Y").to_string())
        .unwrap_or_else(|_| text.to_string())
}

/// Extract header metadata below the CPT root object
pub fn extract_header(root: Node<'_, '_>) -> Header {
    let mut header = Header {
        test_id: descendant_text(root, "broId"),
        quality_regime: descendant_text(root, "qualityRegime"),
        standard: descendant_text(root, "cptStandard"),
        ..Header::default()
    };

    header.company = find_descendant(root, "deliveryAccountableParty").and_then(|party| {
        party
            .text()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
            .or_else(|| descendant_text(party, "chamberOfCommerceNumber"))
    });

    header.survey_date = find_descendant(root, "researchReportDate")
        .and_then(|node| descendant_text(node, "date"))
        .map(|date| display_date(&date));

    if let Some(location) = find_descendant(root, "standardizedLocation") {
        if let Some((lat, lon)) = descendant_text(location, "pos").and_then(|p| parse_position(&p)) {
            header.lat = Some(lat);
            header.lon = Some(lon);
        }
    }

    if let Some(location) = find_descendant(root, "deliveredLocation") {
        if let Some((x, y)) = descendant_text(location, "pos").and_then(|p| parse_position(&p)) {
            header.x = Some(x);
            header.y = Some(y);
        }
        header.coordinate_system = location
            .descendants()
            .find_map(|n| n.attribute("srsName"))
            .map(str::to_string);
    }

    if let Some(vertical) = find_descendant(root, "deliveredVerticalPosition") {
        header.surface_elevation = descendant_number(vertical, "offset");
        header.vertical_datum = Some(
            descendant_text(vertical, "verticalDatum")
                .unwrap_or_else(|| BRO_DEFAULT_VERTICAL_DATUM.to_string()),
        );
    }

    if let Some(trajectory) = find_descendant(root, "trajectory") {
        header.predrilled_depth = descendant_number(trajectory, "predrilledDepth");
        header.final_depth = descendant_number(trajectory, "finalDepth");
    }

    if let Some(survey) = find_descendant(root, "conePenetrometerSurvey") {
        header.quality_class = descendant_text(survey, "qualityClass");
        header.method = descendant_text(survey, "cptMethod");
    }

    debug!("BRO metadata: {:?}", header);
    header
}
