use bevy_egui::{egui, EguiContexts};

pub const FONT_HEADING: f32 = 20.0;
pub const FONT_BODY: f32 = 13.0;

pub const TEXT_HEADING: egui::Color32 = egui::Color32::from_rgb(30, 30, 40);
pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(100, 100, 110);
pub const LABEL_FILL: egui::Color32 = egui::Color32::from_rgba_premultiplied(255, 255, 255, 235);

pub fn apply_map_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();

    // Paper background so the map's grays read as "no data"
    let panel = egui::Color32::from_rgb(250, 250, 248);
    let inactive = egui::Color32::from_rgb(232, 232, 236);
    let hover = egui::Color32::from_rgb(210, 218, 240);
    let active = egui::Color32::from_rgb(68, 79, 137);

    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = active;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = active;

    style.visuals.window_fill = panel;
    style.visuals.panel_fill = panel;

    style.visuals.selection.bg_fill = hover;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, active);

    let window_rounding = egui::CornerRadius::same(6);
    let widget_rounding = egui::CornerRadius::same(4);

    style.visuals.window_corner_radius = window_rounding;
    style.visuals.widgets.noninteractive.corner_radius = widget_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    ctx.set_style(style);
}
