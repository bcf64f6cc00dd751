use bevy::prelude::*;

use crate::attributes::Attribute;
use crate::region::RegionCode;

/// Request to express an attribute (e.g. from the selection menu).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSelected(pub Attribute);

/// Request to step through the registered attributes.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeCycled {
    pub forward: bool,
}

/// Pointer transitions over map regions and chart bars, in viewport pixels.
#[derive(Event, Debug, Clone, PartialEq)]
pub enum RegionPointer {
    Enter { code: RegionCode, position: Vec2 },
    Leave { code: RegionCode },
    Move { position: Vec2 },
}

/// The UI measured the info label.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct LabelMeasured(pub Vec2);

/// Fired once when all inputs have arrived and the session is built.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapReady;

/// Size of the window the info label must stay inside.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Viewport(pub Vec2);

impl Default for Viewport {
    fn default() -> Self {
        Self(Vec2::new(1280.0, 720.0))
    }
}
