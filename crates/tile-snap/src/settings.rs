//! User settings, stored as RON.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default pointer travel, in points, before a press becomes a drag.
pub const DEFAULT_DRAG_THRESHOLD: f64 = 4.0;

/// Persisted preferences for snapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Modifier that enables snapping while dragging.
    pub snap_key: String,
    /// Modifier that extends the selection to several zones.
    pub multi_zone_key: String,
    /// Travel before a press counts as a drag.
    pub drag_threshold: f64,
    /// Layout store location; the platform default when unset.
    pub layouts_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            snap_key: "Shift".to_string(),
            multi_zone_key: "Command".to_string(),
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            layouts_path: None,
        }
    }
}

impl Settings {
    /// Parse settings from RON text. Missing fields take their defaults.
    pub fn from_ron(text: &str) -> Result<Self> {
        Ok(ron::from_str(text)?)
    }

    /// Load settings from a RON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(&text)
    }
}
