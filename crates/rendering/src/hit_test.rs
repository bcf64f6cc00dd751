//! Screen-space copy of the map geometry, used for painting and for finding
//! the region under the pointer.

use bevy::prelude::*;
use bevy_egui::egui::{Pos2, Rect};

use choropleth::config::GRATICULE_STEP_DEG;
use choropleth::geometry::{layer_bounds, Geometry};
use choropleth::region::RegionCode;
use choropleth::MapSession;

use crate::projection::{graticule, Projection};

/// Padding between the map rect and the projected outline.
const MAP_PADDING: f32 = 8.0;

/// Even-odd test against one ring.
pub fn point_in_ring(p: Pos2, ring: &[Pos2]) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (a, b) = (ring[i], ring[j]);
        if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// One polygon in screen space: exterior first, then holes.
pub type ScreenPolygon = Vec<Vec<Pos2>>;

/// Even-odd over all rings, so holes punch through.
pub fn point_in_polygon(p: Pos2, polygon: &ScreenPolygon) -> bool {
    polygon.iter().filter(|ring| point_in_ring(p, ring)).count() % 2 == 1
}

#[derive(Debug, Clone)]
pub struct ProjectedRegion {
    pub key: RegionCode,
    /// Index into `CoordinatedView::regions()`.
    pub region: usize,
    pub polygons: Vec<ScreenPolygon>,
    pub bbox: Rect,
}

impl ProjectedRegion {
    pub fn contains(&self, p: Pos2) -> bool {
        self.bbox.contains(p) && self.polygons.iter().any(|poly| point_in_polygon(p, poly))
    }
}

/// Projected layers, rebuilt when the map rect changes.
#[derive(Resource, Debug, Clone, Default)]
pub struct ProjectedMap {
    rect: Option<Rect>,
    pub regions: Vec<ProjectedRegion>,
    pub outline: Vec<ScreenPolygon>,
    pub graticule: Vec<[Pos2; 2]>,
}

fn project_geometry(projection: &Projection, geometry: &Geometry) -> Vec<ScreenPolygon> {
    geometry
        .polygons
        .iter()
        .map(|poly| poly.rings().map(|ring| projection.project_ring(ring)).collect())
        .collect()
}

impl ProjectedMap {
    pub fn is_current(&self, rect: Rect) -> bool {
        self.rect == Some(rect)
    }

    pub fn invalidate(&mut self) {
        self.rect = None;
    }

    /// Reproject everything into `rect` if it is not already.
    pub fn ensure(&mut self, session: &MapSession, rect: Rect) {
        if !self.is_current(rect) {
            self.rebuild(session, rect);
        }
    }

    pub fn rebuild(&mut self, session: &MapSession, rect: Rect) {
        let features = session.features();
        let bounds = layer_bounds(
            std::iter::once(session.outline()).chain(features.iter().map(|f| &f.geometry)),
        );
        self.rect = Some(rect);
        self.regions.clear();
        self.outline.clear();
        self.graticule.clear();
        let Some(bounds) = bounds else {
            return;
        };
        let projection = Projection::fit(bounds, rect, MAP_PADDING);

        self.outline = project_geometry(&projection, session.outline());
        self.graticule = graticule(bounds, GRATICULE_STEP_DEG)
            .into_iter()
            .map(|[a, b]| [projection.project(a), projection.project(b)])
            .collect();
        self.regions = session
            .view()
            .regions()
            .iter()
            .enumerate()
            .filter_map(|(i, region)| {
                let feature = features.get(region.feature)?;
                let polygons = project_geometry(&projection, &feature.geometry);
                let bbox = Rect::from_points(
                    &polygons.iter().flatten().flatten().copied().collect::<Vec<_>>(),
                );
                Some(ProjectedRegion {
                    key: region.key.clone(),
                    region: i,
                    polygons,
                    bbox,
                })
            })
            .collect();
    }

    /// Region under `p`; later regions are painted on top, so they win.
    pub fn region_at(&self, p: Pos2) -> Option<&ProjectedRegion> {
        self.regions.iter().rev().find(|r| r.contains(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_egui::egui::pos2;
    use choropleth::attributes::AttributeRegistry;
    use choropleth::palette::Palette;
    use choropleth::region::{Feature, Record};
    use choropleth::scale::ScaleSchedule;
    use choropleth::view::ChartLayout;
    use choropleth::MapInputs;

    fn square(x0: f32, y0: f32, x1: f32, y1: f32) -> Vec<Pos2> {
        vec![pos2(x0, y0), pos2(x1, y0), pos2(x1, y1), pos2(x0, y1)]
    }

    #[test]
    fn test_point_in_ring() {
        let ring = square(0.0, 0.0, 10.0, 10.0);
        assert!(point_in_ring(pos2(5.0, 5.0), &ring));
        assert!(!point_in_ring(pos2(15.0, 5.0), &ring));
        assert!(!point_in_ring(pos2(5.0, -1.0), &ring));
    }

    #[test]
    fn test_hole_is_outside() {
        let polygon = vec![square(0.0, 0.0, 10.0, 10.0), square(4.0, 4.0, 6.0, 6.0)];
        assert!(point_in_polygon(pos2(2.0, 2.0), &polygon));
        assert!(!point_in_polygon(pos2(5.0, 5.0), &polygon));
    }

    #[test]
    fn test_concave_ring() {
        // L shape; the notch at (2, 2) is outside.
        let ring = vec![
            pos2(0.0, 0.0),
            pos2(3.0, 0.0),
            pos2(3.0, 1.0),
            pos2(1.0, 1.0),
            pos2(1.0, 3.0),
            pos2(0.0, 3.0),
        ];
        assert!(point_in_ring(pos2(0.5, 2.5), &ring));
        assert!(!point_in_ring(pos2(2.0, 2.0), &ring));
    }

    #[test]
    fn test_region_at_finds_projected_feature() {
        let session = MapSession::build(
            MapInputs {
                records: vec![Record::from_pairs("WY", &[("POP_DENS", "6")])],
                outline: Geometry::rect([-112.0, 40.0], [-90.0, 46.0]),
                regions: vec![
                    Feature::new("WY", Geometry::rect([-111.0, 41.0], [-104.0, 45.0])),
                    Feature::new("SD", Geometry::rect([-104.0, 42.5], [-96.5, 46.0])),
                ],
            },
            AttributeRegistry::default(),
            Palette::default(),
            ScaleSchedule::default(),
            ChartLayout::default(),
        );
        let rect = Rect::from_min_max(pos2(0.0, 0.0), pos2(600.0, 300.0));
        let mut projected = ProjectedMap::default();
        projected.ensure(&session, rect);
        assert!(projected.is_current(rect));
        assert_eq!(projected.regions.len(), 2);
        assert_eq!(projected.graticule.len(), 6);

        let wy = projected.regions[0].bbox.center();
        assert_eq!(projected.region_at(wy).map(|r| r.key.as_str()), Some("WY"));
        let sd = projected.regions[1].bbox.center();
        assert_eq!(projected.region_at(sd).map(|r| r.key.as_str()), Some("SD"));
        assert!(projected.region_at(pos2(1.0, 1.0)).is_none());
    }
}
