//! Region boundary geometry and its decoders.
//!
//! Geometry is opaque to the join/scale/view logic; it only has to survive
//! the trip from the input file to the map painter. Both GeoJSON feature
//! collections and TopoJSON topologies are accepted.

mod geojson;
mod topojson;

use serde_json::{Map, Value};

use crate::error::LoadError;
use crate::region::{Feature, RegionCode};

/// `[longitude, latitude]` in degrees.
pub type Position = [f64; 2];

/// One polygon: an exterior ring plus optional holes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    pub exterior: Vec<Position>,
    pub holes: Vec<Vec<Position>>,
}

impl Polygon {
    pub fn new(exterior: Vec<Position>) -> Self {
        Self {
            exterior,
            holes: Vec::new(),
        }
    }

    /// Exterior followed by holes.
    pub fn rings(&self) -> impl Iterator<Item = &[Position]> {
        std::iter::once(self.exterior.as_slice()).chain(self.holes.iter().map(Vec::as_slice))
    }
}

/// A (multi-)polygon geometry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometry {
    pub polygons: Vec<Polygon>,
}

impl Geometry {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// Axis-aligned rectangle, handy for tests and demo data.
    pub fn rect(min: Position, max: Position) -> Self {
        Self::new(vec![Polygon::new(vec![
            [min[0], min[1]],
            [max[0], min[1]],
            [max[0], max[1]],
            [min[0], max[1]],
            [min[0], min[1]],
        ])])
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.iter().all(|p| p.exterior.is_empty())
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.polygons
            .iter()
            .flat_map(|p| p.exterior.iter())
            .fold(None, |acc: Option<Bounds>, &pos| {
                Some(match acc {
                    Some(b) => b.include(pos),
                    None => Bounds { min: pos, max: pos },
                })
            })
    }

    /// Append all polygons of `other`.
    pub fn merge(&mut self, other: Geometry) {
        self.polygons.extend(other.polygons);
    }
}

/// Lon/lat bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Position,
    pub max: Position,
}

impl Bounds {
    pub fn include(self, pos: Position) -> Self {
        Self {
            min: [self.min[0].min(pos[0]), self.min[1].min(pos[1])],
            max: [self.max[0].max(pos[0]), self.max[1].max(pos[1])],
        }
    }

    pub fn union(self, other: Bounds) -> Self {
        self.include(other.min).include(other.max)
    }

    pub fn width(&self) -> f64 {
        self.max[0] - self.min[0]
    }

    pub fn height(&self) -> f64 {
        self.max[1] - self.min[1]
    }
}

/// Union of the bounds of several geometries.
pub fn layer_bounds<'a>(geometries: impl IntoIterator<Item = &'a Geometry>) -> Option<Bounds> {
    geometries
        .into_iter()
        .filter_map(Geometry::bounds)
        .reduce(Bounds::union)
}

/// A decoded feature before region keys are resolved.
pub(crate) struct RawFeature {
    pub properties: Map<String, Value>,
    pub id: Option<Value>,
    pub geometry: Geometry,
}

/// Decode the per-region layer. `object` selects the TopoJSON object and is
/// ignored for GeoJSON input.
pub fn decode_regions(
    text: &str,
    key_field: &str,
    object: Option<&str>,
) -> Result<Vec<Feature>, LoadError> {
    let raw = decode_raw(text, object)?;
    let mut features = Vec::with_capacity(raw.len());
    for (idx, item) in raw.into_iter().enumerate() {
        let Some(code) = region_key(&item, key_field) else {
            bevy::log::warn!(
                "Skipping region feature #{idx}: no '{key_field}' property or id"
            );
            continue;
        };
        let name = item
            .properties
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string);
        features.push(Feature {
            code,
            name,
            geometry: item.geometry,
            properties: Default::default(),
        });
    }
    Ok(features)
}

/// Decode the outline layer: every polygon of the input merged into one
/// geometry.
pub fn decode_outline(text: &str, object: Option<&str>) -> Result<Geometry, LoadError> {
    let mut outline = Geometry::default();
    for item in decode_raw(text, object)? {
        outline.merge(item.geometry);
    }
    Ok(outline)
}

fn decode_raw(text: &str, object: Option<&str>) -> Result<Vec<RawFeature>, LoadError> {
    let value: Value = serde_json::from_str(text)?;
    match value.get("type").and_then(Value::as_str) {
        Some("Topology") => topojson::decode(value, object),
        _ => geojson::decode(value),
    }
}

fn region_key(item: &RawFeature, key_field: &str) -> Option<RegionCode> {
    let from_props = item.properties.get(key_field).and_then(scalar_string);
    from_props
        .or_else(|| item.id.as_ref().and_then(scalar_string))
        .filter(|s| !s.is_empty())
        .map(RegionCode::from)
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Convert a JSON position (`[x, y, ...]`) into a `Position`.
pub(crate) fn position(raw: &[f64]) -> Result<Position, LoadError> {
    match raw {
        [x, y, ..] => Ok([*x, *y]),
        _ => Err(LoadError::InvalidGeometry(format!(
            "position needs two coordinates, got {}",
            raw.len()
        ))),
    }
}
