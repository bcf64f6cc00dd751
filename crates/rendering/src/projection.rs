//! Fit lon/lat geometry into a screen rectangle.
//!
//! Equirectangular with longitude scaled by the cosine of the middle
//! latitude, which keeps the contiguous states from looking stretched.

use bevy_egui::egui::{pos2, Pos2, Rect};

use choropleth::geometry::{Bounds, Position};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    center: Position,
    center_px: Pos2,
    /// Longitude shrink factor.
    aspect: f64,
    /// Pixels per degree of latitude.
    scale: f64,
}

impl Projection {
    /// Largest projection of `bounds` that fits inside `rect` minus
    /// `padding` on every side, centered.
    pub fn fit(bounds: Bounds, rect: Rect, padding: f32) -> Self {
        let center = [
            (bounds.min[0] + bounds.max[0]) * 0.5,
            (bounds.min[1] + bounds.max[1]) * 0.5,
        ];
        let aspect = center[1].to_radians().cos().abs().max(0.1);
        let avail_w = f64::from((rect.width() - 2.0 * padding).max(1.0));
        let avail_h = f64::from((rect.height() - 2.0 * padding).max(1.0));
        let proj_w = bounds.width() * aspect;
        let proj_h = bounds.height();
        let scale = match (proj_w > 0.0, proj_h > 0.0) {
            (true, true) => (avail_w / proj_w).min(avail_h / proj_h),
            (true, false) => avail_w / proj_w,
            (false, true) => avail_h / proj_h,
            (false, false) => 1.0,
        };
        Self {
            center,
            center_px: rect.center(),
            aspect,
            scale,
        }
    }

    pub fn project(&self, p: Position) -> Pos2 {
        let dx = (p[0] - self.center[0]) * self.aspect * self.scale;
        let dy = (p[1] - self.center[1]) * self.scale;
        pos2(self.center_px.x + dx as f32, self.center_px.y - dy as f32)
    }

    pub fn project_ring(&self, ring: &[Position]) -> Vec<Pos2> {
        ring.iter().map(|p| self.project(*p)).collect()
    }
}

/// Meridians and parallels every `step` degrees covering `bounds`, each as a
/// two-point line in lon/lat.
pub fn graticule(bounds: Bounds, step: f64) -> Vec<[Position; 2]> {
    if step <= 0.0 {
        return Vec::new();
    }
    let lon0 = (bounds.min[0] / step).floor() * step;
    let lon1 = (bounds.max[0] / step).ceil() * step;
    let lat0 = (bounds.min[1] / step).floor() * step;
    let lat1 = (bounds.max[1] / step).ceil() * step;

    let mut lines = Vec::new();
    let mut lon = lon0;
    while lon <= lon1 + f64::EPSILON {
        lines.push([[lon, lat0], [lon, lat1]]);
        lon += step;
    }
    let mut lat = lat0;
    while lat <= lat1 + f64::EPSILON {
        lines.push([[lon0, lat], [lon1, lat]]);
        lat += step;
    }
    lines
}
