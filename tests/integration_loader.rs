//! Integration tests for loading GEF and BRO-XML soundings from disk
//!
//! Fixtures are written to a temporary directory so the tests cover the whole
//! path from raw bytes to a classified record.

use cpt_processor::app::services::sounding_loader::SoundingLoader;
use cpt_processor::config::ClassifierConfig;
use cpt_processor::{SourceFormat, constants};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// GEF sounding with a clay layer over sand, Windows-1252 encoded
fn gef_bytes() -> Vec<u8> {
    let mut text = String::from(
        "#GEFID= 1, 1, 0\r\n\
         #FILEOWNER= Veldwerk BV\r\n\
         #COMPANYID= Veldwerk BV, 12345678, 31\r\n\
         #PROJECTID= P-2024-17\r\n\
         #PROJECTNAME= Dijkversterking Zuid\r\n\
         #TESTID= CPT-17\r\n\
         #STARTDATE= 2024, 03, 05\r\n\
         #XYID= 31000, 132500.00, 457800.00, 0.01, 0.01\r\n\
         #ZID= 31000, 1.25, 0.01\r\n\
         #COLUMNINFO= 1, m, penetration length, 1\r\n\
         #COLUMNINFO= 2, MPa, cone resistance, 2\r\n\
         #COLUMNINFO= 3, MPa, sleeve friction, 3\r\n\
         #COLUMNVOID= 2, 9999.000\r\n\
         #COLUMNVOID= 3, 9999.000\r\n\
         #REPORTCODE= GEF-CPT-Report, 1, 1, 2\r\n\
         #EOH=\r\n",
    );
    // Clay from 0 to 3 m, sand from 3 to 6 m
    for i in 0..=60 {
        let length = i as f64 * 0.1;
        let (qc, fs) = if length < 3.0 { (0.8, 0.04) } else { (15.0, 0.12) };
        text.push_str(&format!("{:.2} {:.3} {:.4}\r\n", length, qc, fs));
    }
    // One voided sample and one short line
    text.push_str("6.10 9999.000 0.0500\r\n6.20 1.0\r\n");

    let mut bytes = text.into_bytes();
    // "Straße" in Windows-1252
    let name_position = bytes.windows(4).position(|w| w == b"Zuid").unwrap_or(0);
    bytes.splice(name_position..name_position, b"Stra\xdfe ".iter().copied());
    bytes
}

fn bro_document(blocks: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<dispatchDataResponse xmlns="http://www.broservices.nl/xsd/dscpt/1.1"
    xmlns:brocom="http://www.broservices.nl/xsd/brocommon/3.0"
    xmlns:cpt="http://www.broservices.nl/xsd/cptcommon/1.1"
    xmlns:gml="http://www.opengis.net/gml/3.2"
    xmlns:swe="http://www.opengis.net/swe/2.0">
  <dispatchDocument>
    <CPT_O gml:id="BRO_0001">
      <brocom:broId>CPT000000099999</brocom:broId>
      <brocom:deliveryAccountableParty>50200097</brocom:deliveryAccountableParty>
      <brocom:qualityRegime>IMBRO/A</brocom:qualityRegime>
      <researchReportDate><brocom:date>2021-11-30</brocom:date></researchReportDate>
      <conePenetrometerSurvey>
        <cpt:parameters>
          <cpt:penetrationLength>ja</cpt:penetrationLength>
          <cpt:depth>ja</cpt:depth>
          <cpt:coneResistance>ja</cpt:coneResistance>
          <cpt:localFriction>ja</cpt:localFriction>
          <cpt:frictionRatio>nee</cpt:frictionRatio>
        </cpt:parameters>
        <cpt:conePenetrationTest>
          <cpt:cptResult>
            <cpt:encoding>
              <swe:TextEncoding decimalSeparator="." tokenSeparator="," blockSeparator=";"/>
            </cpt:encoding>
            <cpt:values>{}</cpt:values>
          </cpt:cptResult>
        </cpt:conePenetrationTest>
      </conePenetrometerSurvey>
    </CPT_O>
  </dispatchDocument>
</dispatchDataResponse>
"#,
        blocks.join(";")
    )
}

/// 25-token block with length, depth, qc and fs filled in
fn bro_block(depth: f64, qc: &str, fs: &str) -> String {
    let mut tokens = vec!["-999999".to_string(); constants::BRO_COLUMN_COUNT];
    tokens[0] = format!("{:.2}", depth);
    tokens[1] = format!("{:.2}", depth);
    tokens[3] = qc.to_string();
    tokens[18] = fs.to_string();
    tokens.join(",")
}

fn write(dir: &Path, name: &str, bytes: &[u8]) {
    fs::write(dir.join(name), bytes).unwrap();
}

#[tokio::test]
async fn test_load_gef_end_to_end() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "CPT-17.GEF", &gef_bytes());

    let record = SoundingLoader::default()
        .load_file(&dir.path().join("CPT-17.GEF"))
        .await
        .unwrap();

    assert_eq!(record.format, SourceFormat::Gef);
    assert_eq!(record.name, "CPT-17");
    assert_eq!(record.header.project_name.as_deref(), Some("Dijkversterking Straße Zuid"));
    assert_eq!(record.header.company.as_deref(), Some("Veldwerk BV"));
    assert_eq!(record.header.survey_date.as_deref(), Some("05-03-2024"));
    assert_eq!(record.header.surface_elevation, Some(1.25));
    assert_eq!(record.header.x, Some(132500.0));

    // 61 regular samples plus the voided one; the short line is dropped
    assert_eq!(record.data.len(), 62);
    assert_eq!(record.stats.records_skipped, 1);
    assert_eq!(record.stats.values_nulled, 1);
    assert_eq!(record.data[61].get("qc"), None);

    let depth = record.column("depth").unwrap();
    assert!(depth.computed);
    assert_eq!(record.data[10].get("depth"), Some(-1.0));
    assert!(record.column("rf").unwrap().computed);

    let zones: Vec<u8> = record.layers.iter().map(|l| l.zone.id).collect();
    assert_eq!(zones.len(), 2, "expected clay over sand, got {:?}", zones);
    assert_ne!(zones[0], zones[1]);

    let total: f64 = record.distribution.iter().map(|d| d.percentage).sum();
    assert!((total - 100.0).abs() < 1e-6);
}

#[tokio::test]
async fn test_load_bro_xml_end_to_end() {
    let blocks: Vec<String> = (0..40)
        .map(|i| {
            let depth = 0.5 + i as f64 * 0.1;
            if i == 5 {
                bro_block(depth, "-999999", "0.020")
            } else {
                bro_block(depth, "1.500", "0.045")
            }
        })
        .collect();

    let dir = TempDir::new().unwrap();
    write(dir.path(), "CPT000000099999.xml", bro_document(&blocks).as_bytes());

    let record = SoundingLoader::default()
        .load_file(&dir.path().join("CPT000000099999.xml"))
        .await
        .unwrap();

    assert_eq!(record.format, SourceFormat::BroXml);
    assert_eq!(record.name, "CPT000000099999");
    assert_eq!(record.header.quality_regime.as_deref(), Some("IMBRO/A"));
    assert_eq!(record.data.len(), 40);
    assert_eq!(record.data[5].get("qc"), None);
    assert!((record.data[0].get("rf").unwrap() - 3.0).abs() < 1e-9);

    let keys: Vec<&str> = record.columns.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, vec!["length", "depth", "qc", "fs", "rf"]);

    assert_eq!(record.layers.len(), 1);
    assert_eq!(record.distribution.len(), 1);
    assert!((record.distribution[0].percentage - 100.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_batch_reports_each_failure() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "a.gef", &gef_bytes());
    write(dir.path(), "b.gef", b"#GEFID= 1, 1, 0\n#TESTID= no terminator\n");
    write(dir.path(), "c.xml", b"<CPT_O></CPT_O>");
    write(dir.path(), "readme.txt", b"not a sounding");

    let outcome = SoundingLoader::default()
        .load_batch(&[dir.path().to_path_buf()], false)
        .await;

    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].name, "CPT-17");

    let files: Vec<&str> = outcome.failures.iter().map(|f| f.file.as_str()).collect();
    assert_eq!(files, vec!["b.gef", "c.xml"]);
    assert_eq!(outcome.failures[0].kind, "format");
}

#[tokio::test]
async fn test_min_layer_thickness_controls_merging() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "CPT-17.gef", &gef_bytes());
    let path = dir.path().join("CPT-17.gef");

    let coarse = ClassifierConfig {
        min_layer_thickness: 10.0,
    };
    let record = SoundingLoader::new(&coarse).load_file(&path).await.unwrap();

    // Everything below the first layer is absorbed into it
    assert_eq!(record.layers.len(), 1);
    assert!((record.layers[0].end_depth - 6.0).abs() < 1e-9);
}
