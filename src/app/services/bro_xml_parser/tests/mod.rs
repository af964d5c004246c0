//! Test fixtures for BRO-XML parser testing


/// Build a 25-value block; positions not listed are filled with `0`
pub fn block(values: &[(usize, &str)]) -> String {
    let mut tokens = vec!["0".to_string(); 25];
    for (index, value) in values {
        tokens[*index] = value.to_string();
    }
    tokens.join(",")
}

/// Parameters block flagging the listed columns as measured
pub fn parameters(active: &[&str]) -> String {
    let flags = [
        "penetrationLength",
        "depth",
        "elapsedTime",
        "coneResistance",
        "correctedConeResistance",
        "netConeResistance",
        "magneticFieldStrengthX",
        "magneticFieldStrengthY",
        "magneticFieldStrengthZ",
        "magneticFieldStrengthTotal",
        "electricalConductivity",
        "inclinationEW",
        "inclinationNS",
        "inclinationX",
        "inclinationY",
        "inclinationResultant",
        "magneticInclination",
        "magneticDeclination",
        "localFriction",
        "poreRatio",
        "temperature",
        "porePressureU1",
        "porePressureU2",
        "porePressureU3",
        "frictionRatio",
    ];
    let body: String = flags
        .iter()
        .map(|flag| {
            let value = if active.contains(flag) { "ja" } else { "nee" };
            format!("<cptcommon:{flag}>{value}</cptcommon:{flag}>")
        })
        .collect();
    format!("<cptcommon:parameters>{body}</cptcommon:parameters>")
}

/// Wrap parameters and a values payload in a BRO dispatch document
pub fn create_test_document(parameters: &str, values: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<ns1:dispatchDataResponse xmlns:ns1="http://www.broservices.nl/xsd/dscpt/1.1"
    xmlns:ns="http://www.broservices.nl/xsd/cptcommon/1.1"
    xmlns:cptcommon="http://www.broservices.nl/xsd/cptcommon/1.1"
    xmlns:gml="http://www.opengis.net/gml/3.2"
    xmlns:swe="http://www.opengis.net/swe/2.0"
    xmlns:brocom="http://www.broservices.nl/xsd/brocommon/3.0">
  <ns1:dispatchDocument>
    <ns1:CPT_O gml:id="BRO_0001">
      <brocom:broId>CPT000000012345</brocom:broId>
      <brocom:deliveryAccountableParty>27376655</brocom:deliveryAccountableParty>
      <brocom:qualityRegime>IMBRO</brocom:qualityRegime>
      <ns1:researchReportDate><brocom:date>2019-03-07</brocom:date></ns1:researchReportDate>
      <ns1:cptStandard codeSpace="urn:bro:cpt:CPTStandard">NEN-EN-ISO22476D1</ns1:cptStandard>
      <ns1:standardizedLocation>
        <brocom:location srsName="urn:ogc:def:crs:EPSG::4258">
          <gml:pos>52.0850 5.1214</gml:pos>
        </brocom:location>
      </ns1:standardizedLocation>
      <ns1:deliveredLocation>
        <ns:location srsName="urn:ogc:def:crs:EPSG::28992">
          <gml:pos>136500.25 455800.75</gml:pos>
        </ns:location>
      </ns1:deliveredLocation>
      <ns1:deliveredVerticalPosition>
        <ns:offset uom="m">-0.84</ns:offset>
        <ns:verticalDatum codeSpace="urn:bro:cpt:VerticalDatum">NAP</ns:verticalDatum>
      </ns1:deliveredVerticalPosition>
      <ns1:conePenetrometerSurvey>
        <cptcommon:finalProcessingDate><brocom:date>2019-03-08</brocom:date></cptcommon:finalProcessingDate>
        <cptcommon:trajectory>
          <cptcommon:predrilledDepth uom="m">1.20</cptcommon:predrilledDepth>
          <cptcommon:finalDepth uom="m">24.60</cptcommon:finalDepth>
        </cptcommon:trajectory>
        <cptcommon:qualityClass codeSpace="urn:bro:cpt:QualityClass">klasse2</cptcommon:qualityClass>
        <cptcommon:cptMethod codeSpace="urn:bro:cpt:CPTMethod">elektrischContinu</cptcommon:cptMethod>
        {parameters}
        <cptcommon:conePenetrationTest>
          <cptcommon:cptResult>
            <cptcommon:encoding>
              <swe:TextEncoding decimalSeparator="." tokenSeparator="," blockSeparator=";"/>
            </cptcommon:encoding>
            <cptcommon:values>{values}</cptcommon:values>
          </cptcommon:cptResult>
        </cptcommon:conePenetrationTest>
      </ns1:conePenetrometerSurvey>
    </ns1:CPT_O>
  </ns1:dispatchDocument>
</ns1:dispatchDataResponse>
"#
    )
}
