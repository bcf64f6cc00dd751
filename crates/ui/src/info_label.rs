//! Floating label for the highlighted region.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use choropleth::highlight::InfoLabel;
use choropleth::{LabelMeasured, MapSession};

use crate::theme;

/// Below this difference a re-measure is layout jitter, not a new size.
const SIZE_EPSILON: f32 = 0.5;

/// Whether the laid-out size differs enough from the stored one to report.
pub fn needs_remeasure(stored: Vec2, measured: Vec2) -> bool {
    (stored - measured).abs().max_element() > SIZE_EPSILON
}

fn subtitle(label: &InfoLabel, name: Option<&str>) -> String {
    match name {
        Some(name) => format!("{} ({})", name, label.region),
        None => label.region.to_string(),
    }
}

pub fn info_label_ui(
    mut contexts: EguiContexts,
    session: Res<MapSession>,
    mut measured: EventWriter<LabelMeasured>,
) {
    let Some(label) = session.highlight().label() else {
        return;
    };
    let name = session
        .features()
        .iter()
        .find(|f| f.code == label.region)
        .and_then(|f| f.name.as_deref());

    let response = egui::Area::new(egui::Id::new("info_label"))
        .fixed_pos(egui::pos2(label.position.x, label.position.y))
        .order(egui::Order::Tooltip)
        .interactable(false)
        .show(contexts.ctx_mut(), |ui| {
            egui::Frame::popup(ui.style())
                .fill(theme::LABEL_FILL)
                .inner_margin(egui::Margin::same(8))
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(label.value_text())
                            .size(theme::FONT_HEADING)
                            .strong()
                            .color(theme::TEXT_HEADING),
                    );
                    ui.label(
                        egui::RichText::new(label.attribute.label())
                            .size(theme::FONT_BODY)
                            .color(theme::TEXT_MUTED),
                    );
                    ui.label(
                        egui::RichText::new(subtitle(label, name))
                            .size(theme::FONT_BODY)
                            .color(theme::TEXT_HEADING),
                    );
                });
        });

    let size = response.response.rect.size();
    let size = Vec2::new(size.x, size.y);
    if needs_remeasure(label.size, size) {
        measured.send(LabelMeasured(size));
    }
}
