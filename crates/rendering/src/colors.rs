//! Conversions from the view model's sRGB colors to egui paint types.

use bevy::color::{ColorToPacked, Srgba};
use bevy_egui::egui::{Color32, Stroke};

use choropleth::view::{display_fill, StrokeStyle};

pub fn to_color32(color: Srgba) -> Color32 {
    let [r, g, b, a] = color.to_u8_array();
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Scale output to paint color, gray when there is no data.
pub fn fill_color(fill: Option<Srgba>) -> Color32 {
    to_color32(display_fill(fill))
}

pub fn to_stroke(style: StrokeStyle) -> Stroke {
    Stroke::new(style.width, to_color32(style.color))
}
