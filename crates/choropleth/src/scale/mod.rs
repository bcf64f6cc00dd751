//! Color and position scales derived from the expressed attribute.
//!
//! Two color policies exist side by side: quantile buckets (used on first
//! load) and a min/max linear ramp (used after the attribute changes). The
//! schedule is configurable but defaults to that asymmetry.

mod linear;
mod position;
mod quantile;

use std::fmt;

use bevy::color::Srgba;
use serde::{Deserialize, Serialize};

use crate::attributes::Attribute;
use crate::palette::Palette;
use crate::region::Record;

pub use linear::LinearColorScale;
pub use position::PositionScale;
pub use quantile::QuantileScale;

/// A mapping from attribute value to fill color.
///
/// `None` means the value cannot be colored (NaN, or a scale built from no
/// usable samples); callers fall back to the no-data fill.
pub trait ColorScale: fmt::Debug + Send + Sync {
    fn color(&self, value: f64) -> Option<Srgba>;

    /// The values the scale was built from: sorted samples for quantile,
    /// `[min, max]` for linear.
    fn domain(&self) -> &[f64];

    /// Class boundaries for a legend: quantile thresholds, or `[min, max]`.
    fn breaks(&self) -> &[f64];

    fn policy(&self) -> ScalePolicy;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalePolicy {
    #[default]
    Quantile,
    Linear,
}

impl ScalePolicy {
    pub fn label(self) -> &'static str {
        match self {
            Self::Quantile => "Quantile",
            Self::Linear => "Linear",
        }
    }

    /// Build a fresh scale of this policy over `records`.
    pub fn build(
        self,
        records: &[Record],
        attribute: Attribute,
        palette: &Palette,
    ) -> Box<dyn ColorScale> {
        match self {
            Self::Quantile => Box::new(build_quantile_scale(records, attribute, palette)),
            Self::Linear => Box::new(build_linear_scale(records, attribute, palette)),
        }
    }
}

/// Which policy builds the scale at load time and which after a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleSchedule {
    pub initial: ScalePolicy,
    pub on_change: ScalePolicy,
}

impl Default for ScaleSchedule {
    fn default() -> Self {
        Self {
            initial: ScalePolicy::Quantile,
            on_change: ScalePolicy::Linear,
        }
    }
}

/// Parsed value of `attribute` for every record, NaN included.
pub fn samples(records: &[Record], attribute: Attribute) -> Vec<f64> {
    records.iter().map(|r| r.value(attribute)).collect()
}

pub fn build_quantile_scale(
    records: &[Record],
    attribute: Attribute,
    palette: &Palette,
) -> QuantileScale {
    QuantileScale::new(&samples(records, attribute), palette.colors().to_vec())
}

pub fn build_linear_scale(
    records: &[Record],
    attribute: Attribute,
    palette: &Palette,
) -> LinearColorScale {
    LinearColorScale::new(
        &samples(records, attribute),
        palette.first(),
        palette.last(),
    )
}
