//! The owning controller: selection, scale, view and highlight in one place.

use bevy::log::{debug, info, warn};
use bevy::math::Vec2;
use bevy::prelude::Resource;

use crate::attributes::{Attribute, AttributeRegistry};
use crate::error::SelectionError;
use crate::geometry::Geometry;
use crate::highlight::HighlightController;
use crate::join::{JoinReport, RegionJoiner};
use crate::palette::Palette;
use crate::region::{Feature, Record, RegionCode};
use crate::scale::{ColorScale, ScaleSchedule};
use crate::view::{ChartLayout, CoordinatedView};

/// Everything needed to build a session once all inputs have arrived.
#[derive(Debug, Clone, Default)]
pub struct MapInputs {
    pub records: Vec<Record>,
    pub outline: Geometry,
    pub regions: Vec<Feature>,
}

/// A loaded, joined and rendered map. Only this type changes the expressed
/// attribute or the active scale.
#[derive(Resource, Debug)]
pub struct MapSession {
    registry: AttributeRegistry,
    palette: Palette,
    schedule: ScaleSchedule,
    scale: Box<dyn ColorScale>,
    records: Vec<Record>,
    features: Vec<Feature>,
    outline: Geometry,
    view: CoordinatedView,
    highlight: HighlightController,
    join_report: JoinReport,
}

impl MapSession {
    /// Join, build the initial scale and render both panels.
    pub fn build(
        inputs: MapInputs,
        registry: AttributeRegistry,
        palette: Palette,
        schedule: ScaleSchedule,
        layout: ChartLayout,
    ) -> Self {
        let MapInputs {
            records,
            outline,
            regions: mut features,
        } = inputs;

        let join_report = RegionJoiner::new(registry.attributes()).join(&mut features, &records);
        for code in &join_report.unmatched_features {
            debug!("Region {code} has no matching record");
        }
        for code in &join_report.unmatched_records {
            debug!("Record {code} has no matching region");
        }

        let expressed = registry.expressed();
        let scale = schedule.initial.build(&records, expressed, &palette);
        let view = CoordinatedView::render(&features, &records, expressed, scale.as_ref(), layout);

        info!(
            "Map ready: {} regions, {} records, {} joined, expressing {} ({})",
            features.len(),
            records.len(),
            join_report.matched,
            expressed.column(),
            scale.policy().label()
        );

        Self {
            registry,
            palette,
            schedule,
            scale,
            records,
            features,
            outline,
            view,
            highlight: HighlightController::default(),
            join_report,
        }
    }

    pub fn registry(&self) -> &AttributeRegistry {
        &self.registry
    }

    pub fn expressed(&self) -> Attribute {
        self.registry.expressed()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn scale(&self) -> &dyn ColorScale {
        self.scale.as_ref()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn outline(&self) -> &Geometry {
        &self.outline
    }

    pub fn view(&self) -> &CoordinatedView {
        &self.view
    }

    pub fn highlight(&self) -> &HighlightController {
        &self.highlight
    }

    pub fn join_report(&self) -> &JoinReport {
        &self.join_report
    }

    /// Express `attribute`, rebuilding the scale with the on-change policy
    /// and updating both panels in place. Returns `Ok(false)` if it was
    /// already expressed.
    pub fn select_attribute(&mut self, attribute: Attribute) -> Result<bool, SelectionError> {
        if !self.registry.select(attribute)? {
            return Ok(false);
        }
        self.scale = self
            .schedule
            .on_change
            .build(&self.records, attribute, &self.palette);
        self.view
            .update(&self.features, &self.records, attribute, self.scale.as_ref());

        let refreshed = self
            .highlight
            .active()
            .map(|code| self.label_value(code, attribute));
        if let Some(value) = refreshed {
            self.highlight.refresh(attribute, value);
        }

        info!(
            "Expressing {} ({} scale)",
            attribute.column(),
            self.scale.policy().label()
        );
        Ok(true)
    }

    /// Step to the next (or previous) registered attribute.
    pub fn cycle_attribute(&mut self, forward: bool) -> Attribute {
        let next = self.registry.neighbor(forward);
        if let Err(e) = self.select_attribute(next) {
            warn!("{e}");
        }
        self.expressed()
    }

    pub fn enter(&mut self, code: &RegionCode, pointer: Vec2, viewport: Vec2) {
        let attribute = self.expressed();
        let value = self.label_value(code, attribute);
        debug!("Enter {code}");
        self.highlight
            .enter(&mut self.view, code, attribute, value, pointer, viewport);
    }

    pub fn leave(&mut self, code: &RegionCode) {
        debug!("Leave {code}");
        self.highlight.leave(&mut self.view, code);
    }

    pub fn move_label(&mut self, pointer: Vec2, viewport: Vec2) {
        self.highlight.move_label(pointer, viewport);
    }

    pub fn set_label_size(&mut self, size: Vec2) {
        self.highlight.set_label_size(size);
    }

    /// Value shown for `code`: the joined feature property, else the
    /// record's value (for bars without a region), else nothing.
    pub fn label_value(&self, code: &RegionCode, attribute: Attribute) -> Option<f64> {
        self.features
            .iter()
            .find(|f| &f.code == code)
            .and_then(|f| f.properties.get(attribute))
            .or_else(|| {
                self.records
                    .iter()
                    .find(|r| r.code() == code)
                    .map(|r| r.value(attribute))
            })
    }
}
