// ---------------------------------------------------------------------------
// Error types for loading inputs and changing the expressed attribute
// ---------------------------------------------------------------------------

use std::fmt;

use crate::attributes::Attribute;

/// Errors that can occur while reading settings or decoding input data.
///
/// Bad *values* are not errors: a cell that does not parse as a number is
/// carried as NaN. These variants cover inputs that cannot be read at all.
#[derive(Debug)]
pub enum LoadError {
    /// I/O error (file not found, permission denied, etc.)
    Io(std::io::Error),
    /// JSON was malformed or did not match the expected shape.
    Json(serde_json::Error),
    /// The tabular header does not contain the named column.
    MissingColumn(String),
    /// A TopoJSON topology does not contain the requested object.
    MissingObject(String),
    /// Geometry was structurally invalid (bad arc index, short position, ...).
    InvalidGeometry(String),
    /// A palette entry is not a valid hex color, or the palette is empty.
    InvalidPalette(String),
    /// The configured attribute set is empty.
    EmptyAttributes,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "I/O error: {e}"),
            LoadError::Json(e) => write!(f, "JSON error: {e}"),
            LoadError::MissingColumn(name) => write!(f, "Missing column: {name}"),
            LoadError::MissingObject(name) => write!(f, "Missing topology object: {name}"),
            LoadError::InvalidGeometry(msg) => write!(f, "Invalid geometry: {msg}"),
            LoadError::InvalidPalette(msg) => write!(f, "Invalid palette: {msg}"),
            LoadError::EmptyAttributes => write!(f, "At least one attribute must be registered"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Json(e)
    }
}

/// A request to express an attribute that is not in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    Unregistered(Attribute),
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::Unregistered(attr) => {
                write!(f, "Attribute {} is not registered", attr.column())
            }
        }
    }
}

impl std::error::Error for SelectionError {}
