//! Legend for the active color scale: class swatches for quantile, a
//! gradient for linear.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use choropleth::config::NO_DATA_FILL;
use choropleth::highlight::format_value;
use choropleth::palette::Palette;
use choropleth::scale::{ColorScale, ScalePolicy};
use choropleth::MapSession;
use rendering::colors::{fill_color, to_color32};

use crate::theme;

const SWATCH: egui::Vec2 = egui::vec2(18.0, 12.0);
const RAMP_WIDTH: f32 = 18.0;
const RAMP_HEIGHT: f32 = 120.0;

#[derive(Debug, Clone, PartialEq)]
pub enum LegendBody {
    /// One row per class, highest first.
    Classes(Vec<(egui::Color32, String)>),
    Ramp { min: f64, max: f64 },
    /// Nothing to scale: every value is missing.
    Empty,
}

/// What to draw for `scale`, independent of where.
pub fn legend_body(scale: &dyn ColorScale, palette: &Palette) -> LegendBody {
    let breaks = scale.breaks();
    match scale.policy() {
        ScalePolicy::Quantile => {
            if scale.domain().is_empty() {
                return LegendBody::Empty;
            }
            let colors = palette.colors();
            let last = colors.len().saturating_sub(1);
            let rows = colors
                .iter()
                .enumerate()
                .map(|(i, &color)| {
                    let text = match (i.checked_sub(1).and_then(|j| breaks.get(j)), breaks.get(i)) {
                        (None, Some(upper)) => format!("< {}", format_value(*upper)),
                        (Some(lower), _) if i == last => format!("≥ {}", format_value(*lower)),
                        (Some(lower), Some(upper)) => {
                            format!("{} to {}", format_value(*lower), format_value(*upper))
                        }
                        // Single-color palette: one class covers everything.
                        _ => "All values".to_string(),
                    };
                    (to_color32(color), text)
                })
                .rev()
                .collect();
            LegendBody::Classes(rows)
        }
        ScalePolicy::Linear => match breaks {
            &[min, max] => LegendBody::Ramp { min, max },
            _ => LegendBody::Empty,
        },
    }
}

fn swatch_row(ui: &mut egui::Ui, color: egui::Color32, text: &str) {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(SWATCH, egui::Sense::hover());
        ui.painter().rect_filled(rect, 0.0, color);
        ui.label(
            egui::RichText::new(text)
                .size(theme::FONT_BODY)
                .color(theme::TEXT_HEADING),
        );
    });
}

fn paint_ramp(ui: &mut egui::Ui, scale: &dyn ColorScale, min: f64, max: f64) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(RAMP_WIDTH, RAMP_HEIGHT), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let rows = RAMP_HEIGHT as usize;
    for row in 0..rows {
        // Top row is the maximum.
        let t = 1.0 - row as f64 / (rows - 1).max(1) as f64;
        let value = min + (max - min) * t;
        let y_top = rect.top() + row as f32;
        painter.rect_filled(
            egui::Rect::from_min_max(
                egui::pos2(rect.left(), y_top),
                egui::pos2(rect.right(), y_top + 1.0),
            ),
            0.0,
            fill_color(scale.color(value)),
        );
    }
}

pub fn legend_ui(mut contexts: EguiContexts, session: Res<MapSession>) {
    let scale = session.scale();
    let body = legend_body(scale, session.palette());

    let screen = contexts.ctx_mut().screen_rect();
    egui::Area::new(egui::Id::new("scale_legend"))
        .fixed_pos(egui::pos2(12.0, screen.bottom() - 12.0))
        .pivot(egui::Align2::LEFT_BOTTOM)
        .interactable(false)
        .show(contexts.ctx_mut(), |ui| {
            egui::Frame::popup(ui.style())
                .fill(theme::LABEL_FILL)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(session.expressed().label())
                            .strong()
                            .color(theme::TEXT_HEADING),
                    );
                    ui.label(
                        egui::RichText::new(format!("{} scale", scale.policy().label()))
                            .small()
                            .color(theme::TEXT_MUTED),
                    );
                    ui.add_space(4.0);

                    match &body {
                        LegendBody::Classes(rows) => {
                            for (color, text) in rows {
                                swatch_row(ui, *color, text);
                            }
                        }
                        LegendBody::Ramp { min, max } => {
                            ui.label(egui::RichText::new(format_value(*max)).small());
                            paint_ramp(ui, scale, *min, *max);
                            ui.label(egui::RichText::new(format_value(*min)).small());
                        }
                        LegendBody::Empty => {}
                    }
                    swatch_row(ui, to_color32(NO_DATA_FILL), "No data");
                });
        });
}
