/// Linear map from a value domain to a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionScale {
    pub domain: [f64; 2],
    pub range: [f32; 2],
}

impl PositionScale {
    pub fn new(domain: [f64; 2], range: [f32; 2]) -> Self {
        Self { domain, range }
    }

    /// Unclamped; a zero-width domain maps to the range midpoint.
    pub fn map(&self, value: f64) -> f32 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        if d1 == d0 {
            return (r0 + r1) * 0.5;
        }
        let t = (value - d0) / (d1 - d0);
        r0 + (t as f32) * (r1 - r0)
    }

    /// Round tick values inside the domain, roughly `count` of them, stepped
    /// by 1, 2 or 5 times a power of ten.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = if self.domain[0] <= self.domain[1] {
            (self.domain[0], self.domain[1])
        } else {
            (self.domain[1], self.domain[0])
        };
        if count == 0 || !(hi - lo).is_finite() || hi <= lo {
            return Vec::new();
        }
        let step = tick_step(hi - lo, count);
        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    }
}

fn tick_step(span: f64, count: usize) -> f64 {
    let raw = span / count as f64;
    let power = 10f64.powf(raw.log10().floor());
    let error = raw / power;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * power
}
