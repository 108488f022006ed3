//! Saved layouts and the per-display layout selection.

use std::{
    collections::BTreeMap,
    fs,
    io::{self, ErrorKind},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tile_geom::Screen;
use tracing::{debug, info};

use crate::{
    Error, Result,
    model::{Zone, ZoneSet},
    presets::{FALLBACK_PRESET, presets},
    zones::compute_zones,
};

/// Identifier of a physical display.
pub type DisplayId = u32;

/// Name offered for new layouts.
pub const DEFAULT_LAYOUT_NAME: &str = "New Layout";

/// The user's layouts plus which one is active on each display.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LayoutStore {
    /// Layouts in menu order.
    layouts: Vec<ZoneSet>,
    /// Selected layout id per display.
    #[serde(default)]
    selected: BTreeMap<DisplayId, String>,
}

/// Tag an I/O failure with the path involved.
fn io_error(path: &Path, source: io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl LayoutStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the built-in layouts.
    pub fn with_defaults() -> Self {
        Self {
            layouts: presets(),
            selected: BTreeMap::new(),
        }
    }

    /// Parse a store from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a store from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| io_error(path, e))?;
        let store = Self::from_json(&text)?;
        debug!(path = %path.display(), layouts = store.layouts.len(), "loaded layouts");
        Ok(store)
    }

    /// Load a store from `path`, starting from the built-in layouts when the
    /// file does not exist yet.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_json(&text),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "no saved layouts; using defaults");
                Ok(Self::with_defaults())
            }
            Err(e) => Err(io_error(path, e)),
        }
    }

    /// Write the store to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
        }
        fs::write(path, self.to_json()?).map_err(|e| io_error(path, e))?;
        debug!(path = %path.display(), layouts = self.layouts.len(), "saved layouts");
        Ok(())
    }

    /// All layouts, in store order.
    pub fn layouts(&self) -> &[ZoneSet] {
        &self.layouts
    }

    /// Layout with the given id.
    pub fn layout(&self, id: &str) -> Option<&ZoneSet> {
        self.layouts.iter().find(|l| l.id == id)
    }

    /// Insert `layout`, replacing any existing layout with the same id in
    /// place.
    pub fn save_layout(&mut self, layout: ZoneSet) {
        match self.layouts.iter_mut().find(|l| l.id == layout.id) {
            Some(slot) => *slot = layout,
            None => self.layouts.push(layout),
        }
    }

    /// Remove the layout with `id`. Display selections pointing at it are
    /// left to fall back on lookup.
    pub fn delete_layout(&mut self, id: &str) -> bool {
        let before = self.layouts.len();
        self.layouts.retain(|l| l.id != id);
        self.layouts.len() != before
    }

    /// Append a copy of layout `id` under a fresh id, named "<name> (Copy)".
    /// Returns the new id.
    pub fn duplicate_layout(&mut self, id: &str) -> Result<String> {
        let source = self
            .layout(id)
            .ok_or_else(|| Error::UnknownLayout(id.to_string()))?;
        let mut copy = source.clone();
        copy.id = self.next_layout_id();
        copy.name = format!("{} (Copy)", source.name);
        let new_id = copy.id.clone();
        self.layouts.push(copy);
        Ok(new_id)
    }

    /// Smallest `layout-N` id not already in use.
    pub fn next_layout_id(&self) -> String {
        (1..)
            .map(|n: u32| format!("layout-{n}"))
            .find(|candidate| self.layout(candidate).is_none())
            .unwrap_or_default()
    }

    /// `base` if no layout uses it, else `base 2`, `base 3`, ...
    pub fn unique_layout_name(&self, base: &str) -> String {
        let taken = |name: &str| self.layouts.iter().any(|l| l.name == name);
        if !taken(base) {
            return base.to_string();
        }
        (2..)
            .map(|n: u32| format!("{base} {n}"))
            .find(|candidate| !taken(candidate))
            .unwrap_or_default()
    }

    /// Replace all layouts with the built-in set. Selections are kept.
    pub fn reset_to_defaults(&mut self) {
        self.layouts = presets();
    }

    /// Make `layout_id` the active layout on `display`.
    pub fn set_selected_layout(&mut self, display: DisplayId, layout_id: impl Into<String>) {
        self.selected.insert(display, layout_id.into());
    }

    /// The id selected for `display`, whether or not it still exists.
    pub fn selected_layout_id(&self, display: DisplayId) -> Option<&str> {
        self.selected.get(&display).map(String::as_str)
    }

    /// The layout active on `display`.
    ///
    /// Falls back to the layout named "Grid 2×2", then the first stored
    /// layout, then the built-in "Grid 2×2". Always `Some` in practice.
    pub fn selected_zone_set(&self, display: DisplayId) -> Option<ZoneSet> {
        self.selected_layout_id(display)
            .and_then(|id| self.layout(id))
            .or_else(|| self.layouts.iter().find(|l| l.name == FALLBACK_PRESET))
            .or_else(|| self.layouts.first())
            .cloned()
            .or_else(|| presets().into_iter().next())
    }

    /// Zones `set` would produce on `screen`'s work area.
    pub fn preview_zones(set: &ZoneSet, screen: &Screen) -> Vec<Zone> {
        compute_zones(set, &screen.work_area())
    }
}

/// Default location of the layout file, relative to a config directory.
pub fn default_store_path(config_dir: &Path) -> PathBuf {
    config_dir.join("zonetile").join("layouts.json")
}

#[cfg(test)]
mod tests {
    use std::{
        env, process,
        time::{SystemTime, UNIX_EPOCH},
    };

    use tile_geom::{InternalRect, Rect};

    use super::*;
    use crate::presets::{canvas_template, grid_template};

    fn unique_tmp_dir(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        let mut dir = env::temp_dir();
        dir.push(format!("zonetile-{name}-{}-{nanos}", process::id()));
        fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn save_layout_upserts() {
        let mut store = LayoutStore::new();
        store.save_layout(grid_template("a", "First"));
        store.save_layout(grid_template("b", "Second"));
        store.save_layout(canvas_template("a", "Replaced"));
        assert_eq!(store.layouts().len(), 2);
        assert_eq!(store.layouts()[0].name, "Replaced");
        assert!(store.layouts()[0].canvas_info().is_some());
    }

    #[test]
    fn delete_and_duplicate() {
        let mut store = LayoutStore::with_defaults();
        let count = store.layouts().len();
        let id = store.duplicate_layout("grid-3x3").expect("duplicate");
        assert_eq!(id, "layout-1");
        let copy = store.layout(&id).expect("copy stored");
        assert_eq!(copy.name, "Grid 3×3 (Copy)");
        assert_eq!(store.layouts().len(), count + 1);
        assert_eq!(store.next_layout_id(), "layout-2");

        assert!(store.delete_layout("grid-3x3"));
        assert!(!store.delete_layout("grid-3x3"));
        assert!(matches!(
            store.duplicate_layout("grid-3x3"),
            Err(Error::UnknownLayout(_))
        ));
    }

    #[test]
    fn unique_names_count_up() {
        let mut store = LayoutStore::new();
        assert_eq!(store.unique_layout_name(DEFAULT_LAYOUT_NAME), "New Layout");
        store.save_layout(grid_template("a", "New Layout"));
        assert_eq!(store.unique_layout_name(DEFAULT_LAYOUT_NAME), "New Layout 2");
        store.save_layout(grid_template("b", "New Layout 2"));
        assert_eq!(store.unique_layout_name(DEFAULT_LAYOUT_NAME), "New Layout 3");
    }

    #[test]
    fn selection_fallbacks() {
        let mut store = LayoutStore::with_defaults();
        assert_eq!(
            store.selected_zone_set(7).map(|s| s.id),
            Some("grid-2x2".to_string())
        );
        store.set_selected_layout(7, "columns-4");
        assert_eq!(store.selected_layout_id(7), Some("columns-4"));
        assert_eq!(
            store.selected_zone_set(7).map(|s| s.id),
            Some("columns-4".to_string())
        );

        // Deleted selection falls back to the 2x2 grid, then to the first layout.
        store.delete_layout("columns-4");
        assert_eq!(
            store.selected_zone_set(7).map(|s| s.id),
            Some("grid-2x2".to_string())
        );
        store.delete_layout("grid-2x2");
        assert_eq!(
            store.selected_zone_set(7).map(|s| s.id),
            Some("grid-3x3".to_string())
        );

        let empty = LayoutStore::new();
        assert_eq!(
            empty.selected_zone_set(1).map(|s| s.name),
            Some("Grid 2×2".to_string())
        );
    }

    #[test]
    fn reset_restores_presets() {
        let mut store = LayoutStore::new();
        store.save_layout(grid_template("x", "Mine"));
        store.set_selected_layout(1, "x");
        store.reset_to_defaults();
        assert_eq!(store.layouts(), presets().as_slice());
        assert_eq!(store.selected_layout_id(1), Some("x"));
    }

    #[test]
    fn file_round_trip() {
        let dir = unique_tmp_dir("store");
        let path = default_store_path(&dir);
        let mut store = LayoutStore::with_defaults();
        store.set_selected_layout(3, "rows-2");
        store.save(&path).expect("save");

        let loaded = LayoutStore::load(&path).expect("load");
        assert_eq!(loaded, store);
        let text = fs::read_to_string(&path).expect("read");
        assert!(text.contains("\"rowsPercents\""));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = unique_tmp_dir("missing");
        let store = LayoutStore::load_or_default(&dir.join("nope.json")).expect("defaults");
        assert_eq!(store.layouts().len(), presets().len());
        assert!(matches!(
            LayoutStore::load(&dir.join("nope.json")),
            Err(Error::Io { .. })
        ));
        fs::write(dir.join("bad.json"), "{").expect("write");
        assert!(matches!(
            LayoutStore::load(&dir.join("bad.json")),
            Err(Error::Json(_))
        ));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn preview_uses_visible_frame() {
        let screen = Screen::primary(
            Rect::new(0.0, 0.0, 1000.0, 825.0),
            Rect::new(0.0, 0.0, 1000.0, 800.0),
        );
        let set = crate::preset("Columns (2)").expect("preset");
        let zones = LayoutStore::preview_zones(&set, &screen);
        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].rect, InternalRect::new(12.0, 37.0, 482.0, 776.0));
    }
}
