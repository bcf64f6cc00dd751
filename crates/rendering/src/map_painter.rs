//! Paints the map panel: graticule, outline, then the regions.

use bevy_egui::egui::{self, Color32, Mesh, Painter, Shape, Stroke};

use choropleth::view::CoordinatedView;

use crate::colors::{fill_color, to_stroke};
use crate::hit_test::{ProjectedMap, ScreenPolygon};
use crate::triangulate::triangulate;

const BACKGROUND: Color32 = Color32::from_rgb(0xE6, 0xEE, 0xF5);
const GRATICULE: Stroke = Stroke {
    width: 0.5,
    color: Color32::from_rgb(0xB4, 0xBE, 0xC8),
};
const OUTLINE_FILL: Color32 = Color32::from_rgb(0xF2, 0xF2, 0xF2);
const OUTLINE_STROKE: Stroke = Stroke {
    width: 1.0,
    color: Color32::from_rgb(0x55, 0x55, 0x55),
};

/// Triangulated fill of a polygon's exterior ring.
pub fn fill_mesh(polygon: &ScreenPolygon, color: Color32) -> Mesh {
    let mut mesh = Mesh::default();
    let Some(exterior) = polygon.first() else {
        return mesh;
    };
    for p in exterior {
        mesh.colored_vertex(*p, color);
    }
    for [a, b, c] in triangulate(exterior) {
        mesh.add_triangle(a as u32, b as u32, c as u32);
    }
    mesh
}

fn paint_polygon(painter: &Painter, polygon: &ScreenPolygon, fill: Color32, stroke: Stroke) {
    // TODO: cut holes out of the fill mesh instead of ignoring them.
    painter.add(Shape::mesh(fill_mesh(polygon, fill)));
    if stroke.width > 0.0 {
        for ring in polygon {
            painter.add(Shape::closed_line(ring.clone(), stroke));
        }
    }
}

pub fn paint_map(painter: &Painter, rect: egui::Rect, projected: &ProjectedMap, view: &CoordinatedView) {
    painter.rect_filled(rect, 0.0, BACKGROUND);
    for [a, b] in &projected.graticule {
        painter.line_segment([*a, *b], GRATICULE);
    }
    for polygon in &projected.outline {
        paint_polygon(painter, polygon, OUTLINE_FILL, OUTLINE_STROKE);
    }

    // Emphasized regions last so their stroke is not covered by neighbours.
    let regions = view.regions();
    let (highlighted, normal): (Vec<_>, Vec<_>) = projected.regions.iter().partition(|r| {
        regions
            .get(r.region)
            .is_some_and(|m| m.stroke != m.original_stroke)
    });
    for projected_region in normal.into_iter().chain(highlighted) {
        let Some(region) = regions.get(projected_region.region) else {
            continue;
        };
        let fill = fill_color(region.fill);
        let stroke = to_stroke(region.stroke);
        for polygon in &projected_region.polygons {
            paint_polygon(painter, polygon, fill, stroke);
        }
    }
}
