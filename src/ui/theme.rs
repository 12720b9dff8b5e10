//! Marker theme definitions.
//!
//! The map collaborator styles markers from a small token set the engine
//! supplies: an active color for the selected marker, a default color for the
//! rest, and icon geometry. Hosts can override the defaults from a TOML file:
//!
//! ```toml
//! active_color = "#FF6B35"
//! default_color = "#0F172A"
//! icon_size = [25, 41]
//! icon_anchor = [12, 41]
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Marker styling tokens passed to the map collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerTheme {
    /// Fill color of the selected marker.
    pub active_color: String,

    /// Fill color of unselected markers.
    pub default_color: String,

    /// Icon size in pixels, width then height.
    pub icon_size: [u32; 2],

    /// Icon anchor in pixels from the top-left corner.
    pub icon_anchor: [u32; 2],
}

impl Default for MarkerTheme {
    fn default() -> Self {
        Self {
            active_color: "#FF6B35".to_string(),
            default_color: "#0F172A".to_string(),
            icon_size: [25, 41],
            icon_anchor: [12, 41],
        }
    }
}

impl MarkerTheme {
    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a description of the failure when the file cannot be read or
    /// parsed; callers fall back to the default theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read theme file: {e}"))?;
        toml::from_str(&contents).map_err(|e| format!("Failed to parse theme file: {e}"))
    }
}
