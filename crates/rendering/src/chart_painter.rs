//! Paints the bar chart panel from the view model.
//!
//! Bar geometry in the view is chart-local (origin at the chart's top-left
//! corner); everything here is offset by the panel origin.

use bevy_egui::egui::{self, pos2, vec2, Align2, Color32, FontId, Painter, Pos2, Rect, Stroke};

use choropleth::view::{ChartBar, CoordinatedView};

use crate::colors::{fill_color, to_stroke};

const BACKGROUND: Color32 = Color32::from_rgb(0xEE, 0xEE, 0xEE);
const FRAME: Stroke = Stroke {
    width: 1.0,
    color: Color32::from_rgb(0x99, 0x99, 0x99),
};
const AXIS: Stroke = Stroke {
    width: 1.0,
    color: Color32::from_rgb(0x33, 0x33, 0x33),
};
const TEXT: Color32 = Color32::from_rgb(0x22, 0x22, 0x22);
const TICK_COUNT: usize = 10;
const TICK_LENGTH: f32 = 4.0;
/// Title baseline position, chart-local.
const TITLE_POS: egui::Vec2 = vec2(100.0, 40.0);

/// Size the chart panel needs.
pub fn chart_size(view: &CoordinatedView) -> egui::Vec2 {
    let layout = view.layout();
    vec2(layout.width, layout.height)
}

/// Inner plot area in screen space.
pub fn inner_rect(origin: Pos2, view: &CoordinatedView) -> Rect {
    let layout = view.layout();
    Rect::from_min_size(
        origin + vec2(layout.left_padding, layout.top_bottom_padding),
        vec2(layout.inner_width(), layout.inner_height()),
    )
}

pub fn bar_rect(origin: Pos2, bar: &ChartBar) -> Rect {
    Rect::from_min_size(origin + vec2(bar.x, bar.y), vec2(bar.width, bar.height))
}

/// Bar under a screen-space point.
pub fn bar_at<'a>(origin: Pos2, view: &'a CoordinatedView, p: Pos2) -> Option<&'a ChartBar> {
    let local = p - origin;
    view.bar_at(local.x, local.y)
}

/// Tick label with thousands separators and as many decimals as `step`
/// needs.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step < 1.0 {
        (-step.log10().floor()) as usize
    } else {
        0
    };
    let text = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if value < 0.0 && text.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };
    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

pub fn paint_chart(painter: &Painter, origin: Pos2, view: &CoordinatedView) {
    let inner = inner_rect(origin, view);
    painter.rect_filled(inner, 0.0, BACKGROUND);

    for bar in view.bars() {
        let rect = bar_rect(origin, bar);
        painter.rect_filled(rect, 0.0, fill_color(bar.fill));
        if bar.stroke.width > 0.0 {
            painter.rect_stroke(rect, 0.0, to_stroke(bar.stroke), egui::StrokeKind::Outside);
        }
    }

    paint_axis(painter, origin, view);
    painter.rect_stroke(inner, 0.0, FRAME, egui::StrokeKind::Inside);
    painter.text(
        origin + TITLE_POS,
        Align2::LEFT_BOTTOM,
        view.title(),
        FontId::proportional(16.0),
        TEXT,
    );
}

fn paint_axis(painter: &Painter, origin: Pos2, view: &CoordinatedView) {
    let layout = view.layout();
    let y_scale = layout.y_scale();
    let x = origin.x + layout.left_padding;
    let top = origin.y + layout.top_bottom_padding;
    let bottom = top + layout.inner_height();
    painter.line_segment([pos2(x, top), pos2(x, bottom)], AXIS);

    let ticks = y_scale.ticks(TICK_COUNT);
    let step = match ticks.as_slice() {
        [a, b, ..] => b - a,
        _ => 1.0,
    };
    for tick in ticks {
        let y = origin.y + y_scale.map(tick);
        if y < top || y > bottom {
            continue;
        }
        painter.line_segment([pos2(x - TICK_LENGTH, y), pos2(x, y)], AXIS);
        painter.text(
            pos2(x - TICK_LENGTH - 2.0, y),
            Align2::RIGHT_CENTER,
            format_tick(tick, step),
            FontId::proportional(9.0),
            TEXT,
        );
    }
}
