//! Built-in layouts and starting templates for new layouts.

use crate::{
    grid::distribute_evenly,
    model::{CanvasLayoutInfo, CanvasZone, GridLayoutInfo, ZoneSet},
};

/// Spacing used by built-in and newly created layouts.
pub const DEFAULT_SPACING: u32 = 12;

/// Name of the layout used when a display has no selection.
pub const FALLBACK_PRESET: &str = "Grid 2×2";

/// Reference work area for new canvas layouts.
const CANVAS_REFERENCE: (i32, i32) = (1920, 1080);

/// The built-in layouts, in menu order. Ids are stable across runs.
pub fn presets() -> Vec<ZoneSet> {
    let left_priority = GridLayoutInfo {
        rows: 1,
        columns: 2,
        rows_percents: vec![10_000],
        columns_percents: vec![6_667, 3_333],
        cell_child_map: vec![vec![0, 1]],
    };
    vec![
        ZoneSet::grid("grid-2x2", "Grid 2×2", distribute_evenly(2, 2), DEFAULT_SPACING),
        ZoneSet::grid("grid-3x3", "Grid 3×3", distribute_evenly(3, 3), DEFAULT_SPACING),
        ZoneSet::grid("columns-2", "Columns (2)", distribute_evenly(1, 2), DEFAULT_SPACING),
        ZoneSet::grid("rows-2", "Rows (2)", distribute_evenly(2, 1), DEFAULT_SPACING),
        ZoneSet::grid("focus", "Focus (stack)", distribute_evenly(1, 1), DEFAULT_SPACING),
        ZoneSet::grid(
            "left-priority-2",
            "Left Priority (2)",
            left_priority,
            DEFAULT_SPACING,
        ),
        ZoneSet::grid("grid-4x4", "Grid 4×4", distribute_evenly(4, 4), DEFAULT_SPACING),
        ZoneSet::grid("columns-4", "Columns (4)", distribute_evenly(1, 4), 8),
    ]
}

/// Look up a built-in layout by display name.
pub fn preset(name: &str) -> Option<ZoneSet> {
    presets().into_iter().find(|p| p.name == name)
}

/// A new grid layout: one row of three columns.
pub fn grid_template(id: impl Into<String>, name: impl Into<String>) -> ZoneSet {
    let grid = GridLayoutInfo {
        rows: 1,
        columns: 3,
        rows_percents: vec![10_000],
        columns_percents: vec![3_333, 3_333, 3_334],
        cell_child_map: vec![vec![0, 1, 2]],
    };
    ZoneSet::grid(id, name, grid, DEFAULT_SPACING)
}

/// A new canvas layout: one centred zone at half the reference size.
pub fn canvas_template(id: impl Into<String>, name: impl Into<String>) -> ZoneSet {
    let (rw, rh) = CANVAS_REFERENCE;
    let (w, h) = (rw / 2, rh / 2);
    let canvas = CanvasLayoutInfo {
        zones: vec![CanvasZone {
            id: 0,
            x: (rw - w) / 2,
            y: (rh - h) / 2,
            width: w,
            height: h,
        }],
        last_work_area_width: rw,
        last_work_area_height: rh,
    };
    ZoneSet::canvas(id, name, canvas, DEFAULT_SPACING)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::model::Layout;

    #[test]
    fn presets_are_balanced_and_unique() {
        let all = presets();
        assert_eq!(all.len(), 8);
        let ids: HashSet<_> = all.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids.len(), all.len());
        for p in &all {
            let grid = p.grid_info().expect("presets are grids");
            assert!(grid.is_well_formed(), "{}", p.name);
            assert!(grid.percents_balanced(), "{}", p.name);
        }
    }

    #[test]
    fn lookup_by_name() {
        let p = preset("Columns (4)").expect("preset");
        assert_eq!(p.spacing, 8);
        assert_eq!(p.grid_info().map(|g| g.columns), Some(4));
        assert!(preset("Nope").is_none());
        assert_eq!(preset(FALLBACK_PRESET).map(|p| p.id), Some("grid-2x2".into()));
    }

    #[test]
    fn templates() {
        let g = grid_template("a", "A");
        assert_eq!(
            g.grid_info().map(|g| g.columns_percents.clone()),
            Some(vec![3_333, 3_333, 3_334])
        );
        let c = canvas_template("b", "B");
        let Layout::Canvas(info) = &c.layout else {
            panic!("canvas template must be a canvas");
        };
        assert_eq!(
            info.zones[0],
            CanvasZone {
                id: 0,
                x: 480,
                y: 270,
                width: 960,
                height: 540
            }
        );
    }
}
