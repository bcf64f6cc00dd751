//! Hover emphasis shared by both panels, and the floating info label.

use bevy::log::debug;
use bevy::math::Vec2;

use crate::attributes::Attribute;
use crate::config::{
    DEFAULT_LABEL_SIZE, LABEL_BELOW_OFFSET, LABEL_POINTER_GAP, LABEL_RIGHT_MARGIN,
    LABEL_TOP_CLEARANCE,
};
use crate::region::RegionCode;
use crate::view::CoordinatedView;

/// The label shown for the highlighted region.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoLabel {
    pub region: RegionCode,
    pub attribute: Attribute,
    pub value: Option<f64>,
    /// Top-left corner in viewport pixels.
    pub position: Vec2,
    /// Last measured size, or an estimate until the UI has laid it out.
    pub size: Vec2,
}

impl InfoLabel {
    pub fn value_text(&self) -> String {
        match self.value {
            Some(v) if !v.is_nan() => format_value(v),
            _ => "No data".to_string(),
        }
    }
}

/// Up to two decimals, trailing zeros dropped.
pub fn format_value(value: f64) -> String {
    let text = format!("{value:.2}");
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

/// Where the label's top-left corner goes for `pointer`, keeping it off the
/// viewport's right and top edges.
pub fn place_label(pointer: Vec2, size: Vec2, viewport: Vec2) -> Vec2 {
    let x = if pointer.x > viewport.x - size.x - LABEL_RIGHT_MARGIN {
        pointer.x - size.x - LABEL_POINTER_GAP
    } else {
        pointer.x + LABEL_POINTER_GAP
    };
    let y = if pointer.y < LABEL_TOP_CLEARANCE {
        pointer.y + LABEL_BELOW_OFFSET
    } else {
        pointer.y - LABEL_TOP_CLEARANCE
    };
    Vec2::new(x, y)
}

/// Single-slot highlight state. At most one region is emphasized; a new
/// `enter` supersedes the current one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HighlightController {
    current: Option<InfoLabel>,
}

impl HighlightController {
    pub fn label(&self) -> Option<&InfoLabel> {
        self.current.as_ref()
    }

    pub fn active(&self) -> Option<&RegionCode> {
        self.current.as_ref().map(|l| &l.region)
    }

    /// Emphasize every element keyed `code` and open its label at `pointer`.
    pub fn enter(
        &mut self,
        view: &mut CoordinatedView,
        code: &RegionCode,
        attribute: Attribute,
        value: Option<f64>,
        pointer: Vec2,
        viewport: Vec2,
    ) {
        let size = match self.current.take() {
            Some(previous) => {
                if &previous.region != code {
                    debug!("Highlight {} superseded by {code}", previous.region);
                    view.restore(&previous.region);
                }
                previous.size
            }
            None => DEFAULT_LABEL_SIZE,
        };
        view.emphasize(code);
        self.current = Some(InfoLabel {
            region: code.clone(),
            attribute,
            value,
            position: place_label(pointer, size, viewport),
            size,
        });
    }

    /// Restore every element keyed `code`. The label is removed only if it
    /// belongs to `code`; leaving a region that was never entered is harmless.
    pub fn leave(&mut self, view: &mut CoordinatedView, code: &RegionCode) {
        view.restore(code);
        if self.active() == Some(code) {
            self.current = None;
        }
    }

    /// Reposition the open label. No-op when there is none.
    pub fn move_label(&mut self, pointer: Vec2, viewport: Vec2) {
        if let Some(label) = self.current.as_mut() {
            label.position = place_label(pointer, label.size, viewport);
        }
    }

    pub fn set_label_size(&mut self, size: Vec2) {
        if let Some(label) = self.current.as_mut() {
            label.size = size;
        }
    }

    /// Point the open label at a newly expressed attribute.
    pub fn refresh(&mut self, attribute: Attribute, value: Option<f64>) {
        if let Some(label) = self.current.as_mut() {
            label.attribute = attribute;
            label.value = value;
        }
    }
}
