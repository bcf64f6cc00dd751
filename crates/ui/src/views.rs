//! The two coordinated panels side by side, and pointer tracking over them.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use choropleth::config::MAP_HEIGHT;
use choropleth::{MapSession, RegionCode, RegionPointer, Viewport};
use rendering::chart_painter::{bar_at, chart_size, paint_chart};
use rendering::hit_test::ProjectedMap;
use rendering::map_painter::paint_map;

const MIN_MAP_WIDTH: f32 = 320.0;

/// The key under the pointer last frame, so enter/leave fire on transitions
/// only.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct HoverTracker {
    current: Option<RegionCode>,
    last_pointer: Option<Vec2>,
}

impl HoverTracker {
    pub fn current(&self) -> Option<&RegionCode> {
        self.current.as_ref()
    }

    /// Events for moving from last frame's hover to `hovered` at `pointer`.
    /// Leaving one key for another yields a leave followed by an enter.
    pub fn transitions(&mut self, hovered: Option<RegionCode>, pointer: Vec2) -> Vec<RegionPointer> {
        let mut events = Vec::new();
        if hovered != self.current {
            if let Some(code) = self.current.take() {
                events.push(RegionPointer::Leave { code });
            }
            if let Some(code) = hovered {
                events.push(RegionPointer::Enter {
                    code: code.clone(),
                    position: pointer,
                });
                self.current = Some(code);
            }
        } else if self.current.is_some() && self.last_pointer != Some(pointer) {
            events.push(RegionPointer::Move { position: pointer });
        }
        self.last_pointer = Some(pointer);
        events
    }
}

fn to_vec2(p: egui::Pos2) -> Vec2 {
    Vec2::new(p.x, p.y)
}

pub fn views_ui(
    mut contexts: EguiContexts,
    session: Res<MapSession>,
    mut projected: ResMut<ProjectedMap>,
    mut tracker: ResMut<HoverTracker>,
    mut viewport: ResMut<Viewport>,
    mut pointer_events: EventWriter<RegionPointer>,
) {
    let ctx = contexts.ctx_mut();
    let size = ctx.screen_rect().size();
    let screen = Vec2::new(size.x, size.y);
    if viewport.0 != screen {
        viewport.0 = screen;
    }

    let view = session.view();
    let mut hovered = None;

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.horizontal_top(|ui| {
            let chart = chart_size(view);
            let spacing = ui.spacing().item_spacing.x;
            let map_width = (ui.available_width() - chart.x - spacing).max(MIN_MAP_WIDTH);

            let (map_response, map) =
                ui.allocate_painter(egui::vec2(map_width, MAP_HEIGHT), egui::Sense::hover());
            projected.ensure(&session, map_response.rect);
            paint_map(&map, map_response.rect, &projected, view);

            let (chart_response, chart_painter) = ui.allocate_painter(chart, egui::Sense::hover());
            let origin = chart_response.rect.min;
            paint_chart(&chart_painter, origin, view);

            hovered = map_response
                .hover_pos()
                .and_then(|p| projected.region_at(p).map(|r| r.key.clone()))
                .or_else(|| {
                    chart_response
                        .hover_pos()
                        .and_then(|p| bar_at(origin, view, p).map(|b| b.key.clone()))
                });
        });
    });

    let pointer = ctx.pointer_hover_pos().map(to_vec2).unwrap_or(Vec2::ZERO);
    for event in tracker.transitions(hovered, pointer) {
        pointer_events.send(event);
    }
}
