use serde::Deserialize;
use serde_json::{Map, Value};

use super::{position, Geometry, Polygon, Position, RawFeature};
use crate::error::LoadError;

#[derive(Deserialize)]
struct FeatureCollection {
    features: Vec<GeoFeature>,
}

#[derive(Deserialize)]
struct GeoFeature {
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    geometry: Option<GeoGeometry>,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum GeoGeometry {
    Polygon {
        coordinates: Vec<Vec<Vec<f64>>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Vec<f64>>>>,
    },
    #[serde(other)]
    Unsupported,
}

/// Decode a GeoJSON `FeatureCollection` or a single `Feature`.
pub(super) fn decode(value: Value) -> Result<Vec<RawFeature>, LoadError> {
    let features = match value.get("type").and_then(Value::as_str) {
        Some("Feature") => vec![serde_json::from_value::<GeoFeature>(value)?],
        _ => serde_json::from_value::<FeatureCollection>(value)?.features,
    };

    features
        .into_iter()
        .map(|f| {
            Ok(RawFeature {
                properties: f.properties.unwrap_or_default(),
                id: f.id,
                geometry: match f.geometry {
                    Some(g) => convert(g)?,
                    None => Geometry::default(),
                },
            })
        })
        .collect()
}

fn convert(geometry: GeoGeometry) -> Result<Geometry, LoadError> {
    let polygons = match geometry {
        GeoGeometry::Polygon { coordinates } => vec![polygon(&coordinates)?],
        GeoGeometry::MultiPolygon { coordinates } => coordinates
            .iter()
            .map(|rings| polygon(rings))
            .collect::<Result<_, _>>()?,
        GeoGeometry::Unsupported => Vec::new(),
    };
    Ok(Geometry::new(polygons))
}

fn polygon(rings: &[Vec<Vec<f64>>]) -> Result<Polygon, LoadError> {
    let mut converted = rings.iter().map(|ring| ring_positions(ring));
    let exterior = converted.next().transpose()?.unwrap_or_default();
    let holes = converted.collect::<Result<_, _>>()?;
    Ok(Polygon { exterior, holes })
}

fn ring_positions(ring: &[Vec<f64>]) -> Result<Vec<Position>, LoadError> {
    ring.iter().map(|p| position(p)).collect()
}
