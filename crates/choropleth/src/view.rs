//! View model for the two coordinated panels.
//!
//! `CoordinatedView` holds one `MapRegion` per feature and one `ChartBar` per
//! record, each keyed by region code so the highlight logic can find every
//! element of a region across both panels. Painting is done elsewhere; this
//! module only decides fills, strokes and bar geometry.

use bevy::color::Srgba;

use crate::attributes::Attribute;
use crate::config::{
    BAR_GAP, BAR_STROKE, BAR_VALUE_DOMAIN, CHART_HEIGHT, CHART_LEFT_PADDING,
    CHART_RIGHT_PADDING, CHART_TOP_BOTTOM_PADDING, CHART_WIDTH, HIGHLIGHT_STROKE, NO_DATA_FILL,
    REGION_STROKE,
};
use crate::region::{Feature, Record, RegionCode};
use crate::scale::{ColorScale, PositionScale};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Srgba,
    pub width: f32,
}

impl StrokeStyle {
    pub const fn new(color: Srgba, width: f32) -> Self {
        Self { color, width }
    }
}

/// Fill to paint for a scale output; `None` is the no-data gray.
pub fn display_fill(fill: Option<Srgba>) -> Srgba {
    fill.unwrap_or(NO_DATA_FILL)
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapRegion {
    pub key: RegionCode,
    /// Index into the session's feature list.
    pub feature: usize,
    pub fill: Option<Srgba>,
    pub stroke: StrokeStyle,
    /// Captured at creation, read back when a highlight ends.
    pub original_stroke: StrokeStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub key: RegionCode,
    /// Index into the session's record list.
    pub record: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fill: Option<Srgba>,
    pub stroke: StrokeStyle,
    pub original_stroke: StrokeStyle,
}

impl ChartBar {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Chart geometry in chart-local pixels (origin top-left, y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f32,
    pub height: f32,
    pub left_padding: f32,
    pub right_padding: f32,
    pub top_bottom_padding: f32,
    pub value_domain: [f64; 2],
    /// Fixed y the bar heights are measured from. `None` uses the zero line.
    pub baseline: Option<f32>,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
            left_padding: CHART_LEFT_PADDING,
            right_padding: CHART_RIGHT_PADDING,
            top_bottom_padding: CHART_TOP_BOTTOM_PADDING,
            value_domain: BAR_VALUE_DOMAIN,
            baseline: None,
        }
    }
}

impl ChartLayout {
    pub fn inner_width(&self) -> f32 {
        (self.width - self.left_padding - self.right_padding).max(0.0)
    }

    pub fn inner_height(&self) -> f32 {
        (self.height - 2.0 * self.top_bottom_padding).max(0.0)
    }

    /// Vertical scale for bar values.
    pub fn y_scale(&self) -> PositionScale {
        PositionScale::new(self.value_domain, [self.height, 0.0])
    }

    /// Place bar `index` of `count` for `value`. Returns `(x, y, width, height)`.
    pub fn bar_geometry(&self, index: usize, count: usize, value: f64) -> (f32, f32, f32, f32) {
        let slot = self.inner_width() / count.max(1) as f32;
        let x = index as f32 * slot + self.left_padding;
        let width = (slot - BAR_GAP).max(0.0);

        let y_scale = self.y_scale();
        let zero = y_scale.map(0.0);
        if value.is_nan() {
            return (x, zero, width, 0.0);
        }
        let y = if value >= 0.0 { y_scale.map(value) } else { zero };
        let baseline = self.baseline.unwrap_or(zero);
        let height = (baseline - y_scale.map(value)).abs();
        (x, y, width, height)
    }
}

/// The map regions and chart bars bound to one set of features and records.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinatedView {
    regions: Vec<MapRegion>,
    bars: Vec<ChartBar>,
    layout: ChartLayout,
    title: String,
}

impl CoordinatedView {
    /// First-time binding. Bars are ordered by descending value of
    /// `expressed`; values that do not parse sort last.
    pub fn render(
        features: &[Feature],
        records: &[Record],
        expressed: Attribute,
        scale: &dyn ColorScale,
        layout: ChartLayout,
    ) -> Self {
        let regions = features
            .iter()
            .enumerate()
            .map(|(i, feature)| MapRegion {
                key: feature.code.clone(),
                feature: i,
                fill: None,
                stroke: REGION_STROKE,
                original_stroke: REGION_STROKE,
            })
            .collect();

        let mut order: Vec<usize> = (0..records.len()).collect();
        order.sort_by(|&a, &b| {
            let (va, vb) = (records[a].value(expressed), records[b].value(expressed));
            match (va.is_nan(), vb.is_nan()) {
                (false, false) => vb.total_cmp(&va),
                (a_nan, b_nan) => a_nan.cmp(&b_nan),
            }
        });
        let bars = order
            .into_iter()
            .map(|i| ChartBar {
                key: records[i].code().clone(),
                record: i,
                x: 0.0,
                y: 0.0,
                width: 0.0,
                height: 0.0,
                fill: None,
                stroke: BAR_STROKE,
                original_stroke: BAR_STROKE,
            })
            .collect();

        let mut view = Self {
            regions,
            bars,
            layout,
            title: String::new(),
        };
        view.update(features, records, expressed, scale);
        view
    }

    /// Re-apply fills, bar geometry and the title. Element order and strokes
    /// are left alone.
    pub fn update(
        &mut self,
        features: &[Feature],
        records: &[Record],
        expressed: Attribute,
        scale: &dyn ColorScale,
    ) {
        for region in &mut self.regions {
            region.fill = features
                .get(region.feature)
                .and_then(|f| f.properties.get(expressed))
                .and_then(|v| scale.color(v));
        }

        let count = self.bars.len();
        for (i, bar) in self.bars.iter_mut().enumerate() {
            let value = records
                .get(bar.record)
                .map_or(f64::NAN, |r| r.value(expressed));
            let (x, y, width, height) = self.layout.bar_geometry(i, count, value);
            bar.x = x;
            bar.y = y;
            bar.width = width;
            bar.height = height;
            bar.fill = scale.color(value);
        }

        self.title = title_for(expressed);
    }

    pub fn regions(&self) -> &[MapRegion] {
        &self.regions
    }

    pub fn bars(&self) -> &[ChartBar] {
        &self.bars
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn regions_for<'a>(&'a self, code: &'a RegionCode) -> impl Iterator<Item = &'a MapRegion> {
        self.regions.iter().filter(move |r| &r.key == code)
    }

    pub fn bars_for<'a>(&'a self, code: &'a RegionCode) -> impl Iterator<Item = &'a ChartBar> {
        self.bars.iter().filter(move |b| &b.key == code)
    }

    /// Topmost bar under a chart-local point.
    pub fn bar_at(&self, x: f32, y: f32) -> Option<&ChartBar> {
        self.bars.iter().rev().find(|b| b.contains(x, y))
    }

    /// Apply the highlight stroke to every element keyed `code`. Returns how
    /// many elements were touched.
    pub fn emphasize(&mut self, code: &RegionCode) -> usize {
        self.restyle(code, |_| HIGHLIGHT_STROKE)
    }

    /// Put every element keyed `code` back to its original stroke.
    pub fn restore(&mut self, code: &RegionCode) -> usize {
        self.restyle(code, |original| original)
    }

    fn restyle(&mut self, code: &RegionCode, style: impl Fn(StrokeStyle) -> StrokeStyle) -> usize {
        let mut touched = 0;
        for region in self.regions.iter_mut().filter(|r| &r.key == code) {
            region.stroke = style(region.original_stroke);
            touched += 1;
        }
        for bar in self.bars.iter_mut().filter(|b| &b.key == code) {
            bar.stroke = style(bar.original_stroke);
            touched += 1;
        }
        touched
    }
}

pub fn title_for(attribute: Attribute) -> String {
    format!("{} in each state", attribute.label())
}
