//! Merge tabular records into geometric features by region code.

use std::collections::HashMap;

use crate::attributes::Attribute;
use crate::region::{Feature, Record, RegionCode};

/// Outcome of a join, for logging. Unmatched keys are not errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JoinReport {
    pub matched: usize,
    /// Features that found no record; their property bags stay empty.
    pub unmatched_features: Vec<RegionCode>,
    /// Records whose code names no feature.
    pub unmatched_records: Vec<RegionCode>,
}

/// Copies the registered attributes of each record onto the feature that
/// shares its region code.
pub struct RegionJoiner<'a> {
    attributes: &'a [Attribute],
}

impl<'a> RegionJoiner<'a> {
    pub fn new(attributes: &'a [Attribute]) -> Self {
        Self { attributes }
    }

    /// Join in place. Features are neither added nor removed and records are
    /// only read. When two records share a code the first one wins.
    pub fn join(&self, features: &mut [Feature], records: &[Record]) -> JoinReport {
        let mut by_code: HashMap<&RegionCode, &Record> = HashMap::with_capacity(records.len());
        for record in records {
            by_code.entry(record.code()).or_insert(record);
        }

        let mut report = JoinReport::default();
        for feature in features.iter_mut() {
            let Some(record) = by_code.get(&feature.code) else {
                report.unmatched_features.push(feature.code.clone());
                continue;
            };
            for &attr in self.attributes {
                feature.properties.set(attr, record.value(attr));
            }
            report.matched += 1;
        }

        let feature_codes: std::collections::HashSet<&RegionCode> =
            features.iter().map(|f| &f.code).collect();
        report.unmatched_records = records
            .iter()
            .map(Record::code)
            .filter(|code| !feature_codes.contains(code))
            .cloned()
            .collect();
        report
    }
}
