use bevy::color::Srgba;
use bevy::math::Vec2;

use crate::view::StrokeStyle;

/// Column that holds the region code in the tabular input and the property
/// that holds it in the geometry.
pub const DEFAULT_KEY_FIELD: &str = "STATE_ABBR";

pub const MAP_HEIGHT: f32 = 500.0;

pub const CHART_WIDTH: f32 = 560.0;
pub const CHART_HEIGHT: f32 = 500.0;
pub const CHART_LEFT_PADDING: f32 = 25.0;
pub const CHART_RIGHT_PADDING: f32 = 2.0;
pub const CHART_TOP_BOTTOM_PADDING: f32 = 5.0;
/// Horizontal gap between neighbouring bars.
pub const BAR_GAP: f32 = 1.0;

/// Fixed value domain of the bar chart's vertical axis. The lower bound sits
/// below zero so negative values have room under the baseline.
pub const BAR_VALUE_DOMAIN: [f64; 2] = [-1000.0, 30000.0];

/// Graticule spacing in degrees of longitude and latitude.
pub const GRATICULE_STEP_DEG: f64 = 10.0;

/// Horizontal distance between pointer and label.
pub const LABEL_POINTER_GAP: f32 = 10.0;
/// Flip the label to the pointer's left when it would come this close to
/// the right edge.
pub const LABEL_RIGHT_MARGIN: f32 = 20.0;
/// The label sits this far above the pointer; closer to the top edge than
/// this it moves below.
pub const LABEL_TOP_CLEARANCE: f32 = 75.0;
pub const LABEL_BELOW_OFFSET: f32 = 25.0;
/// Size assumed for a label before the UI has measured it.
pub const DEFAULT_LABEL_SIZE: Vec2 = Vec2::new(140.0, 72.0);

const fn rgb8(r: u8, g: u8, b: u8) -> Srgba {
    Srgba::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
}

/// Eight-class diverging palette, red (low) to blue (high).
pub const DEFAULT_PALETTE: [Srgba; 8] = [
    rgb8(0x89, 0x44, 0x44),
    rgb8(0xCD, 0x66, 0x66),
    rgb8(0xF5, 0x7A, 0x7A),
    rgb8(0xD7, 0x9E, 0x9E),
    rgb8(0x9E, 0xAA, 0xD7),
    rgb8(0x7A, 0x8E, 0xF5),
    rgb8(0x66, 0x77, 0xCD),
    rgb8(0x44, 0x4F, 0x89),
];

/// Fill for regions and bars whose value cannot be colored.
pub const NO_DATA_FILL: Srgba = rgb8(0xCC, 0xCC, 0xCC);

/// Region outline as created.
pub const REGION_STROKE: StrokeStyle = StrokeStyle::new(Srgba::BLACK, 1.0);
/// Bars are created without a visible outline.
pub const BAR_STROKE: StrokeStyle = StrokeStyle::new(Srgba::WHITE, 0.0);
/// Emphasis applied to every element of the hovered region.
pub const HIGHLIGHT_STROKE: StrokeStyle = StrokeStyle::new(Srgba::new(0.0, 0.0, 1.0, 1.0), 2.0);
