//! Zone computation dispatch and zone-list queries.

use tile_geom::{InternalPoint, InternalRect};

use crate::{
    canvas::calculate_canvas_zones,
    grid::calculate_grid_zones,
    model::{Layout, Zone, ZoneSet},
};

/// Zones for `set` inside `work_area`, using the engine matching its layout.
pub fn compute_zones(set: &ZoneSet, work_area: &InternalRect) -> Vec<Zone> {
    match &set.layout {
        Layout::Grid(grid) => calculate_grid_zones(work_area, grid, set.spacing),
        Layout::Canvas(canvas) => calculate_canvas_zones(work_area, canvas, set.spacing),
    }
}

/// Indices of every zone containing `p`. Boundaries are inclusive, so a point
/// on a shared edge hits both neighbours.
pub fn zones_at(zones: &[Zone], p: InternalPoint) -> Vec<usize> {
    zones
        .iter()
        .enumerate()
        .filter(|(_, z)| z.rect.contains(p))
        .map(|(i, _)| i)
        .collect()
}

/// Bounding rectangle of the zones at `indices`. Indices past the end of
/// `zones` are skipped; `None` when nothing remains.
pub fn union_of<I>(zones: &[Zone], indices: I) -> Option<InternalRect>
where
    I: IntoIterator<Item = usize>,
{
    indices
        .into_iter()
        .filter_map(|i| zones.get(i))
        .map(|z| z.rect)
        .reduce(|acc, r| acc.union(&r))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::{canvas_template, preset};

    fn row() -> Vec<Zone> {
        vec![
            Zone::new(0, InternalRect::new(0.0, 0.0, 100.0, 100.0)),
            Zone::new(1, InternalRect::new(100.0, 0.0, 100.0, 100.0)),
        ]
    }

    #[test]
    fn seam_point_hits_both_neighbours() {
        assert_eq!(zones_at(&row(), InternalPoint::new(100.0, 50.0)), vec![0, 1]);
        assert_eq!(zones_at(&row(), InternalPoint::new(150.0, 50.0)), vec![1]);
        assert!(zones_at(&row(), InternalPoint::new(250.0, 50.0)).is_empty());
    }

    #[test]
    fn union_skips_unknown_indices() {
        assert_eq!(
            union_of(&row(), [0, 1]),
            Some(InternalRect::new(0.0, 0.0, 200.0, 100.0))
        );
        assert_eq!(
            union_of(&row(), [1, 7]),
            Some(InternalRect::new(100.0, 0.0, 100.0, 100.0))
        );
        assert_eq!(union_of(&row(), [9]), None);
        assert_eq!(union_of(&row(), Vec::new()), None);
    }

    #[test]
    fn dispatches_on_layout_kind() {
        let wa = InternalRect::new(0.0, 0.0, 1920.0, 1080.0);
        let grid = preset("Grid 2×2").expect("preset");
        assert_eq!(compute_zones(&grid, &wa).len(), 4);
        let canvas = canvas_template("c", "Canvas");
        let zones = compute_zones(&canvas, &wa);
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].rect, InternalRect::new(480.0, 270.0, 960.0, 540.0));
    }
}
