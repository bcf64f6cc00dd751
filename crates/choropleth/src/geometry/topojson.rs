//! TopoJSON decoding: shared arcs, optional quantization transform.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use super::{position, Geometry, Polygon, Position, RawFeature};
use crate::error::LoadError;

#[derive(Deserialize)]
struct Topology {
    #[serde(default)]
    transform: Option<Transform>,
    arcs: Vec<Vec<Vec<f64>>>,
    objects: BTreeMap<String, TopoGeometry>,
}

#[derive(Deserialize, Clone, Copy)]
struct Transform {
    scale: [f64; 2],
    translate: [f64; 2],
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum TopoGeometry {
    GeometryCollection {
        geometries: Vec<TopoGeometry>,
    },
    Polygon {
        arcs: Vec<Vec<i64>>,
        #[serde(default)]
        properties: Map<String, Value>,
        #[serde(default)]
        id: Option<Value>,
    },
    MultiPolygon {
        arcs: Vec<Vec<Vec<i64>>>,
        #[serde(default)]
        properties: Map<String, Value>,
        #[serde(default)]
        id: Option<Value>,
    },
    #[serde(other)]
    Unsupported,
}

pub(super) fn decode(value: Value, object: Option<&str>) -> Result<Vec<RawFeature>, LoadError> {
    let topology: Topology = serde_json::from_value(value)?;
    let arcs = decode_arcs(&topology.arcs, topology.transform)?;

    let root = match object {
        Some(name) => topology
            .objects
            .get(name)
            .ok_or_else(|| LoadError::MissingObject(name.to_string()))?,
        None => topology
            .objects
            .values()
            .next()
            .ok_or_else(|| LoadError::MissingObject("<any>".to_string()))?,
    };

    let mut out = Vec::new();
    collect(root, &arcs, &mut out)?;
    Ok(out)
}

/// Absolute positions of every arc. Quantized topologies store deltas.
fn decode_arcs(
    raw: &[Vec<Vec<f64>>],
    transform: Option<Transform>,
) -> Result<Vec<Vec<Position>>, LoadError> {
    raw.iter()
        .map(|arc| {
            let mut x = 0.0;
            let mut y = 0.0;
            arc.iter()
                .map(|p| {
                    let [px, py] = position(p)?;
                    Ok(match transform {
                        Some(t) => {
                            x += px;
                            y += py;
                            [
                                x * t.scale[0] + t.translate[0],
                                y * t.scale[1] + t.translate[1],
                            ]
                        }
                        None => [px, py],
                    })
                })
                .collect::<Result<Vec<Position>, LoadError>>()
        })
        .collect()
}

fn collect(
    geometry: &TopoGeometry,
    arcs: &[Vec<Position>],
    out: &mut Vec<RawFeature>,
) -> Result<(), LoadError> {
    match geometry {
        TopoGeometry::GeometryCollection { geometries } => {
            for g in geometries {
                collect(g, arcs, out)?;
            }
        }
        TopoGeometry::Polygon {
            arcs: rings,
            properties,
            id,
        } => out.push(RawFeature {
            properties: properties.clone(),
            id: id.clone(),
            geometry: Geometry::new(vec![polygon(rings, arcs)?]),
        }),
        TopoGeometry::MultiPolygon {
            arcs: polygons,
            properties,
            id,
        } => out.push(RawFeature {
            properties: properties.clone(),
            id: id.clone(),
            geometry: Geometry::new(
                polygons
                    .iter()
                    .map(|rings| polygon(rings, arcs))
                    .collect::<Result<_, _>>()?,
            ),
        }),
        TopoGeometry::Unsupported => {}
    }
    Ok(())
}

fn polygon(rings: &[Vec<i64>], arcs: &[Vec<Position>]) -> Result<Polygon, LoadError> {
    let mut converted = rings.iter().map(|r| ring(r, arcs));
    let exterior = converted.next().transpose()?.unwrap_or_default();
    let holes = converted.collect::<Result<_, _>>()?;
    Ok(Polygon { exterior, holes })
}

/// Stitch a ring from arc references. A negative index `!i` walks arc `i`
/// backwards; consecutive arcs share their joining point.
fn ring(indices: &[i64], arcs: &[Vec<Position>]) -> Result<Vec<Position>, LoadError> {
    let mut points: Vec<Position> = Vec::new();
    for &index in indices {
        let (arc_idx, reversed) = if index < 0 {
            (!index, true)
        } else {
            (index, false)
        };
        let arc = usize::try_from(arc_idx)
            .ok()
            .and_then(|i| arcs.get(i))
            .ok_or_else(|| LoadError::InvalidGeometry(format!("arc index {index} out of range")))?;

        points.pop();
        if reversed {
            points.extend(arc.iter().rev());
        } else {
            points.extend(arc.iter());
        }
    }
    Ok(points)
}
