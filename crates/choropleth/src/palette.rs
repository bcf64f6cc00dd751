use bevy::color::Srgba;

use crate::config::DEFAULT_PALETTE;
use crate::error::LoadError;

/// Ordered, non-empty list of output colors for a color scale.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Srgba>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl Palette {
    pub fn new(colors: Vec<Srgba>) -> Result<Self, LoadError> {
        if colors.is_empty() {
            return Err(LoadError::InvalidPalette("palette is empty".to_string()));
        }
        Ok(Self { colors })
    }

    /// Parse `#RRGGBB` (or any form `Srgba::hex` accepts) entries.
    pub fn from_hex<S: AsRef<str>>(entries: &[S]) -> Result<Self, LoadError> {
        let colors = entries
            .iter()
            .map(|e| {
                let e = e.as_ref();
                Srgba::hex(e).map_err(|err| LoadError::InvalidPalette(format!("{e}: {err}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    pub fn colors(&self) -> &[Srgba] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn first(&self) -> Srgba {
        self.colors[0]
    }

    pub fn last(&self) -> Srgba {
        self.colors[self.colors.len() - 1]
    }
}
