//! Attribute selection: a drop-down in the top bar plus `[` / `]` to step
//! through the registered attributes.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use choropleth::{AttributeCycled, AttributeSelected, MapSession};

use crate::theme;

/// Placeholder row at the top of the menu; never selectable.
pub const MENU_HEADING: &str = "Select Attribute";

pub fn attribute_menu_ui(
    mut contexts: EguiContexts,
    session: Res<MapSession>,
    mut selected: EventWriter<AttributeSelected>,
) {
    let expressed = session.expressed();
    let policy = session.scale().policy();

    egui::TopBottomPanel::top("attribute_menu").show(contexts.ctx_mut(), |ui| {
        ui.horizontal(|ui| {
            egui::ComboBox::from_id_salt("attribute_select")
                .selected_text(expressed.label())
                .width(220.0)
                .show_ui(ui, |ui| {
                    ui.add_enabled(false, egui::SelectableLabel::new(false, MENU_HEADING));
                    for &attribute in session.registry().attributes() {
                        if ui
                            .selectable_label(attribute == expressed, attribute.label())
                            .clicked()
                        {
                            selected.send(AttributeSelected(attribute));
                        }
                    }
                });

            ui.label(
                egui::RichText::new(format!("{} scale", policy.label()))
                    .size(theme::FONT_BODY)
                    .color(theme::TEXT_MUTED),
            );
        });
    });
}

/// `Some(true)` to step forward, `Some(false)` back. Pressing both cancels.
pub fn cycle_direction(next: bool, previous: bool) -> Option<bool> {
    match (next, previous) {
        (true, false) => Some(true),
        (false, true) => Some(false),
        _ => None,
    }
}

/// Skipped when egui has keyboard focus.
pub fn attribute_keybinds(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut cycled: EventWriter<AttributeCycled>,
) {
    if contexts.ctx_mut().wants_keyboard_input() {
        return;
    }
    let direction = cycle_direction(
        keyboard.just_pressed(KeyCode::BracketRight),
        keyboard.just_pressed(KeyCode::BracketLeft),
    );
    if let Some(forward) = direction {
        cycled.send(AttributeCycled { forward });
    }
}
