//! Test fixtures for GEF parser testing

// Test modules
mod header_tests;

/// A small but complete GEF-CPT file
pub fn create_test_gef() -> String {
    r#"#GEFID= 1, 1, 0
#FILEOWNER= Wiertsema & Partners
#FILEDATE= 2021, 6, 14
#PROJECTID= CPT, 20-1042
#PROJECTNAME= Dijkversterking Noord
#COMPANYID= Geotest BV, 0123456, 31
#TESTID= DKM-017
#STARTDATE= 2021, 06, 14
#XYID= 31000, 132456.10, 456123.40, 0.01, 0.01
#ZID= 31000, -1.25, 0.01
#REPORTCODE= GEF-CPT-Report, 1, 1, 0
#COLUMN= 4
#COLUMNINFO= 1, m, penetration length, 1
#COLUMNINFO= 2, MPa, cone resistance, 2
#COLUMNINFO= 3, MPa, local friction, 3
#COLUMNINFO= 4, MPa, pore pressure u2, 6
#COLUMNVOID= 2, 9999.000000
#COLUMNVOID= 3, 9999.000000
#MEASUREMENTTEXT= 4, 10 cm2, cone type
#MEASUREMENTTEXT= 9, maaiveld, fixed horizontal level
#EOH=
0.00 0.512 0.0040 0.001
0.02 0.734 0.0102 0.002
0.04 9999.000000 0.0150 0.003
0.06 1.205 9999.000000 0.004
0.08 2.110
"#
    .to_string()
}

/// GEF content with a literal separator and record terminator
pub fn create_separated_gef() -> String {
    "#GEFID= 1, 1, 0\r\n#COLUMNSEPARATOR= ;\r\n#RECORDSEPARATOR= !\r\n#COLUMNINFO= 1, m, sondeertrajectlengte, 1\r\n#COLUMNINFO= 2, MPa, conusweerstand, 2\r\n#COLUMNINFO= 3, MPa, plaatselijke wrijving, 3\r\n#COLUMNINFO= 4, %, wrijvingsgetal, 4\r\n#EOH=\r\n1.00;5.0;0.05;1.0;!\r\n1.02;6.0;0.12;2.0;!\r\n"
        .to_string()
}
