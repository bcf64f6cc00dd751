//! Region-keyed data: tabular records and geometric features.

use std::collections::BTreeMap;
use std::fmt;

use crate::attributes::Attribute;
use crate::geometry::Geometry;

/// Short key identifying one geographic unit. Comparison is exact and
/// case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegionCode(String);

impl RegionCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RegionCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for RegionCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

/// Parse a raw cell the way a browser's `parseFloat` would: skip leading
/// whitespace, read the longest numeric prefix, and return NaN when there
/// is none.
pub fn parse_float(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    if s[i..].starts_with("Infinity") {
        return if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;
    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - frac_start;
        if digits > 0 {
            i = j;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows it.
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    s[..i].parse::<f64>().unwrap_or(f64::NAN)
}

/// One row of tabular input. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    code: RegionCode,
    fields: BTreeMap<String, String>,
}

impl Record {
    pub fn new(code: impl Into<RegionCode>, fields: BTreeMap<String, String>) -> Self {
        Self {
            code: code.into(),
            fields,
        }
    }

    /// Convenience constructor from `(column, raw value)` pairs.
    pub fn from_pairs(code: impl Into<RegionCode>, pairs: &[(&str, &str)]) -> Self {
        let fields = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Self::new(code, fields)
    }

    pub fn code(&self) -> &RegionCode {
        &self.code
    }

    /// Raw cell for `attr`, if the column was present.
    pub fn raw(&self, attr: Attribute) -> Option<&str> {
        self.fields.get(attr.column()).map(String::as_str)
    }

    /// Parsed value for `attr`. A missing or non-numeric cell is NaN.
    pub fn value(&self, attr: Attribute) -> f64 {
        self.raw(attr).map_or(f64::NAN, parse_float)
    }

    pub fn field(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }
}

/// Joined attribute values of a feature. A missing key means the feature
/// had no matching record, which is different from a NaN value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyBag {
    values: BTreeMap<Attribute, f64>,
}

impl PropertyBag {
    pub fn get(&self, attr: Attribute) -> Option<f64> {
        self.values.get(&attr).copied()
    }

    pub fn set(&mut self, attr: Attribute, value: f64) {
        self.values.insert(attr, value);
    }

    pub fn contains(&self, attr: Attribute) -> bool {
        self.values.contains_key(&attr)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Attribute, f64)> + '_ {
        self.values.iter().map(|(&a, &v)| (a, v))
    }
}

/// One geometric region with its joined properties.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub code: RegionCode,
    pub name: Option<String>,
    pub geometry: Geometry,
    pub properties: PropertyBag,
}

impl Feature {
    pub fn new(code: impl Into<RegionCode>, geometry: Geometry) -> Self {
        Self {
            code: code.into(),
            name: None,
            geometry,
            properties: PropertyBag::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
