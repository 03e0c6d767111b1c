//! Shared fixtures for integration tests
#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Header of a review extract, with the padded names the real sheet uses
pub const HEADER: &str = "Title,Year of publication,Region,Study setting,Funding sources,Topic area,Journal type ,Multi-site study ,Urban–Rural,Study design,-- SAMPLING & DESIGN --,-- MEASUREMENT & DATA --,-- CONTEXT & LOGISTICS --,-- ANALYSIS & GENERALIZABILITY --,-- RESEARCH CAPACITY --";

/// Six studies covering every stratifier
pub const ROWS: [&str; 6] = [
    r#"Study 1,2018,North-West,Facility-based,International,Maternal outcomes ,International,Yes,Urban,Cross-sectional,"SMALL_SAMPLE: 60 women; CONVENIENCE_SAMPLING: one clinic",RECALL_BIAS: self report,FUNDING_CONSTRAINTS: no grant,LIMITED_GENERALIZABILITY: single state,"#,
    r#"Study 2,2018,South-East,Community-based,,Immunization ,Local,No,Rural,Cohort,SMALL_SAMPLE,,"TIME_CONSTRAINTS; FUNDING_CONSTRAINTS: budget",LIMITED_GENERALIZABILITY,"#,
    r#"Study 3,2019,National,Facility-based,Not reported,Maternal outcomes ; Neonatal outcomes,International,No,Both,Cross-sectional,,RECALL_BIAS,,"LIMITED_GENERALIZABILITY: x; SMALL_SAMPLE: y",LIMITED_EXPERTISE"#,
    r#"Study 4,2020.0,North Central,Community-based,Government,Child health outcomes ,Local,yes,Urban,RCT,,,,,"#,
    r#"Study 5,n.d.,Lagos,Facility-based,International,Immunization ,International,,,Cross-sectional,CONVENIENCE_SAMPLING,"SELF_REPORT: survey; RECALL_BIAS",LOGISTICAL_ISSUES,,"#,
    r#"Study 6,2020,South-South,Facility-based,,Maternal outcomes ,Local,No,Rural,Qualitative,"SMALL_SAMPLE; CONVENIENCE_SAMPLING",,ETHICAL_CONSTRAINTS: approval delays,LIMITED_GENERALIZABILITY,"#,
];

/// Write the fixture extract into `dir` and return its path
pub fn write_extract(dir: &Path) -> PathBuf {
    write_csv(dir, "extract.csv", &ROWS)
}

/// Write a CSV with the fixture header and the given rows
pub fn write_csv(dir: &Path, name: &str, rows: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut contents = String::from(HEADER);
    contents.push('\n');
    for row in rows {
        contents.push_str(row);
        contents.push('\n');
    }
    std::fs::write(&path, contents).unwrap();
    path
}
