//! Overlay shown until records, outline and regions have all arrived.
//!
//! An animated dots effect shows the application has not frozen, and a
//! checklist names which inputs are still outstanding.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use choropleth::PendingInputs;

use crate::theme;

// =============================================================================
// Resources
// =============================================================================

/// Tracks the animated dots state for the loading message.
#[derive(Resource)]
pub struct LoadingAnimation {
    /// Number of dots currently shown (cycles 1 -> 2 -> 3 -> 1 ...).
    pub dots: usize,
    pub timer: Timer,
}

impl Default for LoadingAnimation {
    fn default() -> Self {
        Self {
            dots: 1,
            timer: Timer::from_seconds(0.4, TimerMode::Repeating),
        }
    }
}

impl LoadingAnimation {
    /// Advance by `delta` and return the message to show.
    pub fn advance(&mut self, delta: std::time::Duration) -> String {
        self.timer.tick(delta);
        if self.timer.just_finished() {
            self.dots = self.dots % 3 + 1;
        }
        format!("Loading map data{}", ".".repeat(self.dots))
    }
}

// =============================================================================
// Systems
// =============================================================================

/// Runs only while the map is loading.
pub fn loading_screen_ui(
    mut contexts: EguiContexts,
    pending: Res<PendingInputs>,
    time: Res<Time>,
    mut animation: ResMut<LoadingAnimation>,
) {
    let display_text = animation.advance(time.delta());

    let ctx = contexts.ctx_mut();
    let screen_rect = ctx.screen_rect();

    egui::Area::new(egui::Id::new("loading_overlay"))
        .fixed_pos(screen_rect.min)
        .order(egui::Order::Foreground)
        .interactable(true)
        .show(ctx, |ui| {
            ui.painter().rect_filled(
                screen_rect,
                egui::CornerRadius::ZERO,
                egui::Color32::from_black_alpha(120),
            );
            ui.allocate_rect(screen_rect, egui::Sense::click_and_drag());
        });

    egui::Window::new("loading_screen_window")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .default_width(260.0)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);
                ui.label(
                    egui::RichText::new(display_text)
                        .size(theme::FONT_HEADING)
                        .color(theme::TEXT_HEADING),
                );
                ui.add_space(8.0);
                for (name, arrived) in pending.status() {
                    let (mark, color) = if arrived {
                        ("✔", theme::TEXT_HEADING)
                    } else {
                        ("…", theme::TEXT_MUTED)
                    };
                    ui.label(
                        egui::RichText::new(format!("{mark} {name}"))
                            .size(theme::FONT_BODY)
                            .color(color),
                    );
                }
                ui.add_space(16.0);
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_dots_cycle() {
        let mut animation = LoadingAnimation::default();
        assert_eq!(animation.advance(Duration::from_millis(100)), "Loading map data.");
        assert_eq!(animation.advance(Duration::from_millis(300)), "Loading map data..");
        assert_eq!(animation.advance(Duration::from_millis(400)), "Loading map data...");
        assert_eq!(animation.advance(Duration::from_millis(400)), "Loading map data.");
    }
}
