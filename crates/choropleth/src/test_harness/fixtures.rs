//! Small hand-made dataset: six states as lon/lat boxes, one record without
//! a region (DC) and one region without a record (PR).

use crate::config::DEFAULT_KEY_FIELD;
use crate::geometry::{decode_outline, decode_regions, Geometry};
use crate::region::{Feature, Record};
use crate::tabular::parse_records;

pub const FIXTURE_CSV: &str = "\
STATE_ABBR,POP_DENS,PER_DEM,PER_GOP
CA,251.3,61.7,26.5
TX,109.9,43.2,69.4
NY,421.0,59.0,29.0
OH,287.5,45.2,75.0
WY,6.0,26.6,100.0
FL,401.4,47.8,59.3
DC,11011.0,92.1,0.0
";

const BOXES: [(&str, [f64; 4]); 7] = [
    ("CA", [-124.4, 32.5, -114.1, 42.0]),
    ("TX", [-106.6, 25.8, -93.5, 36.5]),
    ("NY", [-79.8, 40.5, -71.9, 45.0]),
    ("OH", [-84.8, 38.4, -80.5, 42.0]),
    ("WY", [-111.1, 41.0, -104.1, 45.0]),
    ("FL", [-87.6, 24.5, -80.0, 31.0]),
    ("PR", [-67.3, 17.9, -65.2, 18.5]),
];

fn ring([x0, y0, x1, y1]: [f64; 4]) -> String {
    format!("[[[{x0},{y0}],[{x1},{y0}],[{x1},{y1}],[{x0},{y1}],[{x0},{y0}]]]")
}

pub fn fixture_regions_geojson() -> String {
    let features: Vec<String> = BOXES
        .iter()
        .map(|(code, b)| {
            format!(
                r#"{{"type":"Feature","properties":{{"{DEFAULT_KEY_FIELD}":"{code}"}},"geometry":{{"type":"Polygon","coordinates":{}}}}}"#,
                ring(*b)
            )
        })
        .collect();
    format!(
        r#"{{"type":"FeatureCollection","features":[{}]}}"#,
        features.join(",")
    )
}

pub fn fixture_outline_geojson() -> String {
    format!(
        r#"{{"type":"Feature","properties":{{}},"geometry":{{"type":"Polygon","coordinates":{}}}}}"#,
        ring([-125.0, 24.0, -66.0, 49.5])
    )
}

pub fn fixture_records() -> Vec<Record> {
    parse_records(FIXTURE_CSV, DEFAULT_KEY_FIELD).expect("fixture csv")
}

pub fn fixture_regions() -> Vec<Feature> {
    decode_regions(&fixture_regions_geojson(), DEFAULT_KEY_FIELD, None).expect("fixture regions")
}

pub fn fixture_outline() -> Geometry {
    decode_outline(&fixture_outline_geojson(), None).expect("fixture outline")
}
