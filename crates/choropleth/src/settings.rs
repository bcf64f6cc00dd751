//! Runtime settings, read from an optional JSON file.
//!
//! Every field has a default, so an empty object (or no file at all) gives
//! the stock configuration.

use std::path::{Path, PathBuf};

use bevy::log::{info, warn};
use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::attributes::{Attribute, AttributeRegistry, ALL_ATTRIBUTES};
use crate::config::{
    BAR_VALUE_DOMAIN, CHART_HEIGHT, CHART_LEFT_PADDING, CHART_RIGHT_PADDING,
    CHART_TOP_BOTTOM_PADDING, CHART_WIDTH, DEFAULT_KEY_FIELD,
};
use crate::error::LoadError;
use crate::palette::Palette;
use crate::scale::ScaleSchedule;
use crate::view::ChartLayout;

/// Environment variable naming the settings file.
pub const SETTINGS_ENV: &str = "STATEMAP_SETTINGS";
pub const DEFAULT_SETTINGS_PATH: &str = "assets/statemap.json";

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    /// Selectable attributes in menu order; the first is expressed on load.
    pub attributes: Vec<Attribute>,
    /// Hex colors, low to high. `None` uses the built-in palette.
    pub palette: Option<Vec<String>>,
    pub schedule: ScaleSchedule,
    pub chart: ChartSettings,
    /// Files to load at startup. `None` means the host sends the inputs.
    pub sources: Option<DataSources>,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            attributes: ALL_ATTRIBUTES.to_vec(),
            palette: None,
            schedule: ScaleSchedule::default(),
            chart: ChartSettings::default(),
            sources: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub width: f32,
    pub height: f32,
    pub left_padding: f32,
    pub right_padding: f32,
    pub top_bottom_padding: f32,
    pub value_domain: [f64; 2],
    pub baseline: Option<f32>,
}

impl Default for ChartSettings {
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

impl From<ChartSettings> for ChartLayout {
    fn from(c: ChartSettings) -> Self {
        ChartLayout {
            width: c.width,
            height: c.height,
            left_padding: c.left_padding,
            right_padding: c.right_padding,
            top_bottom_padding: c.top_bottom_padding,
            value_domain: c.value_domain,
            baseline: c.baseline,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSources {
    pub records: PathBuf,
    pub outline: PathBuf,
    pub regions: PathBuf,
    /// Column / property holding the region code.
    pub key_field: String,
    /// TopoJSON object names; ignored for GeoJSON.
    pub outline_object: Option<String>,
    pub regions_object: Option<String>,
}

impl Default for DataSources {
    fn default() -> Self {
        Self {
            records: PathBuf::from("assets/data/states.csv"),
            outline: PathBuf::from("assets/data/outline.geojson"),
            regions: PathBuf::from("assets/data/states.geojson"),
            key_field: DEFAULT_KEY_FIELD.to_string(),
            outline_object: None,
            regions_object: None,
        }
    }
}

impl MapSettings {
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Load from `STATEMAP_SETTINGS` or the default path. A missing default
    /// file is silent; anything unreadable is logged and the defaults used.
    pub fn load_or_default() -> Self {
        let (path, explicit) = match std::env::var(SETTINGS_ENV) {
            Ok(p) => (PathBuf::from(p), true),
            Err(_) => (PathBuf::from(DEFAULT_SETTINGS_PATH), false),
        };
        if !explicit && !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(settings) => {
                info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                warn!("Ignoring settings file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn registry(&self) -> Result<AttributeRegistry, LoadError> {
        AttributeRegistry::new(&self.attributes)
    }

    pub fn palette(&self) -> Result<Palette, LoadError> {
        match &self.palette {
            Some(hex) => Palette::from_hex(hex),
            None => Ok(Palette::default()),
        }
    }

    pub fn layout(&self) -> ChartLayout {
        self.chart.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::ScalePolicy;

    #[test]
    fn test_empty_object_gives_defaults() {
        assert_eq!(MapSettings::from_json("{}").unwrap(), MapSettings::default());
    }

    #[test]
    fn test_partial_settings() {
        let settings = MapSettings::from_json(
            r##"{
                "attributes": ["PER_GOP", "POP_DENS"],
                "palette": ["#000000", "#FFFFFF"],
                "schedule": { "on_change": "quantile" },
                "chart": { "baseline": 400.0 },
                "sources": { "key_field": "CODE", "regions_object": "states" }
            }"##,
        )
        .unwrap();
        let registry = settings.registry().unwrap();
        assert_eq!(registry.expressed(), Attribute::PercentRepublican);
        assert_eq!(registry.attributes().len(), 2);
        assert_eq!(settings.palette().unwrap().len(), 2);
        assert_eq!(settings.schedule.on_change, ScalePolicy::Quantile);
        assert_eq!(settings.layout().baseline, Some(400.0));
        assert_eq!(settings.layout().width, CHART_WIDTH);

        let sources = settings.sources.unwrap();
        assert_eq!(sources.key_field, "CODE");
        assert_eq!(sources.regions_object.as_deref(), Some("states"));
        assert_eq!(sources.records, PathBuf::from("assets/data/states.csv"));
    }

    #[test]
    fn test_unknown_attribute_is_an_error() {
        assert!(matches!(
            MapSettings::from_json(r#"{"attributes": ["GDP"]}"#),
            Err(LoadError::Json(_))
        ));
    }

    #[test]
    fn test_empty_attribute_list_fails_registry() {
        let settings = MapSettings::from_json(r#"{"attributes": []}"#).unwrap();
        assert!(matches!(settings.registry(), Err(LoadError::EmptyAttributes)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        assert!(matches!(
            MapSettings::load(Path::new("/nonexistent/statemap.json")),
            Err(LoadError::Io(_))
        ));
    }
}
