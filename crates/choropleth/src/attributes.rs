//! The selectable attribute set and the currently expressed attribute.
//!
//! `AttributeRegistry` is the single source of truth for selection state.
//! Everything that colors or sizes a region reads the expressed attribute
//! from here, and nothing else writes it.

use serde::{Deserialize, Serialize};

use crate::error::{LoadError, SelectionError};

/// One numeric field of the tabular input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Attribute {
    #[serde(rename = "POP_DENS")]
    PopulationDensity,
    #[serde(rename = "PER_DEM")]
    PercentDemocrat,
    #[serde(rename = "PER_GOP")]
    PercentRepublican,
}

/// All attributes in their default display order.
pub const ALL_ATTRIBUTES: [Attribute; 3] = [
    Attribute::PopulationDensity,
    Attribute::PercentDemocrat,
    Attribute::PercentRepublican,
];

impl Attribute {
    /// Column name in the tabular input.
    pub fn column(self) -> &'static str {
        match self {
            Self::PopulationDensity => "POP_DENS",
            Self::PercentDemocrat => "PER_DEM",
            Self::PercentRepublican => "PER_GOP",
        }
    }

    /// Human-readable label for titles and the info label.
    pub fn label(self) -> &'static str {
        match self {
            Self::PopulationDensity => "Population Density",
            Self::PercentDemocrat => "Percent Democrat Vote",
            Self::PercentRepublican => "Percent Seats Won by Republicans",
        }
    }

    pub fn from_column(column: &str) -> Option<Self> {
        ALL_ATTRIBUTES.into_iter().find(|a| a.column() == column)
    }
}

/// Ordered set of selectable attributes plus the expressed one.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeRegistry {
    attributes: Vec<Attribute>,
    expressed: Attribute,
}

impl Default for AttributeRegistry {
    fn default() -> Self {
        Self {
            attributes: ALL_ATTRIBUTES.to_vec(),
            expressed: ALL_ATTRIBUTES[0],
        }
    }
}

impl AttributeRegistry {
    /// Build a registry from an ordered attribute list. Duplicates are
    /// dropped (first occurrence wins); the first attribute is expressed.
    pub fn new(attributes: &[Attribute]) -> Result<Self, LoadError> {
        let mut ordered: Vec<Attribute> = Vec::with_capacity(attributes.len());
        for &attr in attributes {
            if !ordered.contains(&attr) {
                ordered.push(attr);
            }
        }
        let Some(&expressed) = ordered.first() else {
            return Err(LoadError::EmptyAttributes);
        };
        Ok(Self {
            attributes: ordered,
            expressed,
        })
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn expressed(&self) -> Attribute {
        self.expressed
    }

    pub fn contains(&self, attr: Attribute) -> bool {
        self.attributes.contains(&attr)
    }

    /// Express `attr`. Returns `Ok(true)` when the selection changed and
    /// `Ok(false)` when `attr` was already expressed.
    pub fn select(&mut self, attr: Attribute) -> Result<bool, SelectionError> {
        if !self.contains(attr) {
            return Err(SelectionError::Unregistered(attr));
        }
        if attr == self.expressed {
            return Ok(false);
        }
        self.expressed = attr;
        Ok(true)
    }

    /// The attribute after (or before) the expressed one, wrapping around.
    pub fn neighbor(&self, forward: bool) -> Attribute {
        let n = self.attributes.len();
        let idx = self
            .attributes
            .iter()
            .position(|&a| a == self.expressed)
            .unwrap_or(0);
        let next = if forward { (idx + 1) % n } else { (idx + n - 1) % n };
        self.attributes[next]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_expresses_first_attribute() {
        let registry = AttributeRegistry::default();
        assert_eq!(registry.expressed(), Attribute::PopulationDensity);
        assert_eq!(registry.attributes(), &ALL_ATTRIBUTES);
    }

    #[test]
    fn test_new_rejects_empty_set() {
        assert!(matches!(
            AttributeRegistry::new(&[]),
            Err(LoadError::EmptyAttributes)
        ));
    }

    #[test]
    fn test_new_drops_duplicates_keeping_order() {
        let registry = AttributeRegistry::new(&[
            Attribute::PercentDemocrat,
            Attribute::PopulationDensity,
            Attribute::PercentDemocrat,
        ])
        .unwrap();
        assert_eq!(
            registry.attributes(),
            &[Attribute::PercentDemocrat, Attribute::PopulationDensity]
        );
        assert_eq!(registry.expressed(), Attribute::PercentDemocrat);
    }

    #[test]
    fn test_select_reports_change() {
        let mut registry = AttributeRegistry::default();
        assert_eq!(registry.select(Attribute::PercentDemocrat), Ok(true));
        assert_eq!(registry.select(Attribute::PercentDemocrat), Ok(false));
        assert_eq!(registry.expressed(), Attribute::PercentDemocrat);
    }

    #[test]
    fn test_select_unregistered_leaves_selection() {
        let mut registry = AttributeRegistry::new(&[Attribute::PopulationDensity]).unwrap();
        assert_eq!(
            registry.select(Attribute::PercentRepublican),
            Err(SelectionError::Unregistered(Attribute::PercentRepublican))
        );
        assert_eq!(registry.expressed(), Attribute::PopulationDensity);
    }

    #[test]
    fn test_neighbor_wraps_both_ways() {
        let registry = AttributeRegistry::default();
        assert_eq!(registry.neighbor(true), Attribute::PercentDemocrat);
        assert_eq!(registry.neighbor(false), Attribute::PercentRepublican);
    }

    #[test]
    fn test_column_round_trip() {
        for attr in ALL_ATTRIBUTES {
            assert_eq!(Attribute::from_column(attr.column()), Some(attr));
        }
        assert_eq!(Attribute::from_column("pop_dens"), None);
    }

    #[test]
    fn test_serde_uses_column_names() {
        let json = serde_json::to_string(&Attribute::PercentRepublican).unwrap();
        assert_eq!(json, "\"PER_GOP\"");
        let back: Attribute = serde_json::from_str("\"POP_DENS\"").unwrap();
        assert_eq!(back, Attribute::PopulationDensity);
    }
}
