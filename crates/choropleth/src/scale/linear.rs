use bevy::color::{Mix, Srgba};

use super::{ColorScale, ScalePolicy};

/// Maps `[min, max]` of the finite samples onto a two-color ramp.
///
/// Values outside the domain clamp to the end colors. A degenerate domain
/// (min == max) maps everything to the start color.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearColorScale {
    domain: Vec<f64>,
    start: Srgba,
    end: Srgba,
}

impl LinearColorScale {
    pub fn new(samples: &[f64], start: Srgba, end: Srgba) -> Self {
        let mut finite = samples.iter().copied().filter(|v| v.is_finite());
        let domain = match finite.next() {
            Some(first) => {
                let (min, max) = finite.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
                vec![min, max]
            }
            None => Vec::new(),
        };
        Self { domain, start, end }
    }

    /// Position of `value` within the domain, clamped to `[0, 1]`.
    pub fn normalize(&self, value: f64) -> Option<f32> {
        let &[min, max] = self.domain.as_slice() else {
            return None;
        };
        if value.is_nan() {
            return None;
        }
        if max <= min {
            return Some(0.0);
        }
        Some(((value - min) / (max - min)).clamp(0.0, 1.0) as f32)
    }
}

impl ColorScale for LinearColorScale {
    fn color(&self, value: f64) -> Option<Srgba> {
        self.normalize(value).map(|t| self.start.mix(&self.end, t))
    }

    fn domain(&self) -> &[f64] {
        &self.domain
    }

    fn breaks(&self) -> &[f64] {
        &self.domain
    }

    fn policy(&self) -> ScalePolicy {
        ScalePolicy::Linear
    }
}
