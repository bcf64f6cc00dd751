use bevy::color::Srgba;

use super::{ColorScale, ScalePolicy};

/// Buckets values into equal-count classes of the sorted sample domain.
///
/// With `n` output colors there are `n - 1` thresholds, the sample
/// quantiles at `k / n`. A value lands in the bucket counting how many
/// thresholds are at or below it.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantileScale {
    domain: Vec<f64>,
    range: Vec<Srgba>,
    thresholds: Vec<f64>,
}

impl QuantileScale {
    /// NaN samples are dropped; the rest are sorted ascending.
    pub fn new(samples: &[f64], range: Vec<Srgba>) -> Self {
        let mut domain: Vec<f64> = samples.iter().copied().filter(|v| !v.is_nan()).collect();
        domain.sort_by(f64::total_cmp);
        let thresholds = if domain.is_empty() {
            Vec::new()
        } else {
            let n = range.len();
            (1..n)
                .map(|k| quantile_sorted(&domain, k as f64 / n as f64))
                .collect()
        };
        Self {
            domain,
            range,
            thresholds,
        }
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Index into the range for `value`, or `None` for NaN or an empty domain.
    pub fn bucket(&self, value: f64) -> Option<usize> {
        if value.is_nan() || self.domain.is_empty() || self.range.is_empty() {
            return None;
        }
        Some(self.thresholds.partition_point(|t| *t <= value))
    }
}

impl ColorScale for QuantileScale {
    fn color(&self, value: f64) -> Option<Srgba> {
        self.bucket(value).map(|i| self.range[i])
    }

    fn domain(&self) -> &[f64] {
        &self.domain
    }

    fn breaks(&self) -> &[f64] {
        &self.thresholds
    }

    fn policy(&self) -> ScalePolicy {
        ScalePolicy::Quantile
    }
}

/// Linear-interpolated quantile of an ascending, non-empty slice.
fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let h = (sorted.len() - 1) as f64 * p;
    let lo = h.floor() as usize;
    let frac = h - lo as f64;
    match sorted.get(lo + 1) {
        Some(&hi) if frac > 0.0 => sorted[lo] + frac * (hi - sorted[lo]),
        _ => sorted[lo],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_PALETTE;

    fn scale(samples: &[f64]) -> QuantileScale {
        QuantileScale::new(samples, DEFAULT_PALETTE.to_vec())
    }

    #[test]
    fn test_quantile_sorted_interpolates() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile_sorted(&sorted, 0.0), 1.0);
        assert_eq!(quantile_sorted(&sorted, 0.5), 2.5);
        assert_eq!(quantile_sorted(&sorted, 1.0), 4.0);
    }

    #[test]
    fn test_domain_is_sorted_without_nan() {
        let s = scale(&[5.0, f64::NAN, 1.0, 3.0]);
        assert_eq!(s.domain(), &[1.0, 3.0, 5.0]);
        assert_eq!(s.thresholds().len(), 7);
    }

    #[test]
    fn test_equal_count_buckets() {
        // 16 evenly spaced samples into 8 classes: two samples per class.
        let samples: Vec<f64> = (0..16).map(f64::from).collect();
        let s = scale(&samples);
        let buckets: Vec<usize> = samples.iter().map(|v| s.bucket(*v).unwrap()).collect();
        for class in 0..8 {
            assert_eq!(buckets.iter().filter(|b| **b == class).count(), 2);
        }
    }

    #[test]
    fn test_extremes_hit_end_colors() {
        let s = scale(&[251.3, 109.9, 6.0, 1000.0, 40.0]);
        assert_eq!(s.color(6.0), Some(DEFAULT_PALETTE[0]));
        assert_eq!(s.color(1000.0), Some(DEFAULT_PALETTE[7]));
        // Out-of-domain values clamp to the end buckets.
        assert_eq!(s.color(-5.0), Some(DEFAULT_PALETTE[0]));
        assert_eq!(s.color(1e9), Some(DEFAULT_PALETTE[7]));
    }

    #[test]
    fn test_monotone_in_value() {
        let samples = [3.0, 9.0, 1.0, 27.0, 81.0, 243.0, 5.0, 17.0, 60.0];
        let s = scale(&samples);
        let mut sorted = samples;
        sorted.sort_by(f64::total_cmp);
        let buckets: Vec<usize> = sorted.iter().map(|v| s.bucket(*v).unwrap()).collect();
        assert!(buckets.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_nan_and_empty_domain_have_no_color() {
        assert_eq!(scale(&[1.0, 2.0]).color(f64::NAN), None);
        assert_eq!(scale(&[f64::NAN]).color(1.0), None);
        assert_eq!(scale(&[]).color(1.0), None);
    }

    #[test]
    fn test_single_sample() {
        let s = scale(&[42.0]);
        assert!(s.thresholds().iter().all(|t| *t == 42.0));
        assert_eq!(s.color(42.0), Some(DEFAULT_PALETTE[7]));
        assert_eq!(s.color(41.0), Some(DEFAULT_PALETTE[0]));
    }
}
