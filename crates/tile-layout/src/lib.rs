//! tile-layout: layouts and the zones they produce.
//!
//! A [`ZoneSet`] is either a percentage grid with spanning cells or a freeform
//! canvas. [`compute_zones`] turns one into concrete [`Zone`] rectangles for a
//! work area in a screen's internal space. Around that core sit the editing
//! helpers used by layout editors ([`edit`], [`snap`]), the built-in
//! [`presets`], the [`best_zone`] placement heuristic and a JSON-backed
//! [`LayoutStore`].
//!
//! Geometry never errors. A layout that cannot be realised produces an empty
//! zone list, which callers treat as "nothing to show or snap to".

mod best;
mod canvas;
pub mod edit;
mod error;
mod grid;
mod model;
mod presets;
pub mod snap;
mod store;
mod zones;

#[cfg(test)]
mod property_tests;

pub use best::{OVERLAP_RATIO, best_zone, best_zone_index};
pub use canvas::calculate_canvas_zones;
pub use error::{Error, Result};
pub use grid::{
    calculate_grid_zones, distribute_columns_evenly, distribute_evenly, distribute_rows_evenly,
    even_percents, generate_grid_layout_info,
};
pub use model::{
    CanvasLayoutInfo, CanvasZone, GridLayoutInfo, Layout, PERCENT_TOTAL, Zone, ZoneId, ZoneSet,
};
pub use presets::{
    DEFAULT_SPACING, FALLBACK_PRESET, canvas_template, grid_template, preset, presets,
};
pub use store::{DEFAULT_LAYOUT_NAME, DisplayId, LayoutStore, default_store_path};
pub use zones::{compute_zones, union_of, zones_at};
