//! Geometry-to-screen plumbing for the map and chart panels.

use bevy::prelude::*;

pub mod chart_painter;
pub mod colors;
pub mod hit_test;
pub mod map_painter;
pub mod projection;
pub mod triangulate;

use choropleth::MapState;
use hit_test::ProjectedMap;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ProjectedMap>()
            .add_systems(OnEnter(MapState::Ready), invalidate_projection);
    }
}

/// A freshly built session has new geometry; force a reprojection.
fn invalidate_projection(mut projected: ResMut<ProjectedMap>) {
    projected.invalidate();
}
