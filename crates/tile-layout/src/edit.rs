//! Layout editing operations for grid and canvas layouts.
//!
//! These mutate the layout in place and report whether anything changed.
//! They do not validate the resulting grid; run it through
//! [`calculate_grid_zones`](crate::calculate_grid_zones) to find out whether
//! it still produces zones.

use tile_geom::Point;
use tracing::trace;

use crate::model::{CanvasLayoutInfo, CanvasZone, GridLayoutInfo, PERCENT_TOTAL, ZoneId};

/// Smallest share a row or column may be resized down to.
pub const MIN_DIVIDER_PERCENT: u32 = 500;

/// Default pointer distance within which a divider is hit.
pub const DIVIDER_HIT_THRESHOLD: f64 = 10.0;

/// A grid cell address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Cell {
    /// Construct a cell address.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Direction of a cell split.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitAxis {
    /// Split the cell's column into two side-by-side columns.
    Vertical,
    /// Split the cell's row into two stacked rows.
    Horizontal,
}

/// A boundary between two adjacent tracks. `Column(i)` separates columns `i`
/// and `i + 1`; `Row(i)` separates rows `i` and `i + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Divider {
    /// Vertical line between two columns.
    Column(usize),
    /// Horizontal line between two rows.
    Row(usize),
}

/// `cell` lies inside a well-formed grid.
fn cell_in_range(grid: &GridLayoutInfo, cell: Cell) -> bool {
    grid.is_well_formed() && cell.row < grid.rows && cell.col < grid.columns
}

/// Assign every listed cell to the smallest zone id among them. Cells outside
/// the grid are ignored.
pub fn merge_cells(grid: &mut GridLayoutInfo, cells: &[Cell]) -> bool {
    let cells: Vec<Cell> = cells
        .iter()
        .copied()
        .filter(|c| cell_in_range(grid, *c))
        .collect();
    let Some(target) = cells
        .iter()
        .map(|c| grid.cell_child_map[c.row][c.col])
        .min()
    else {
        return false;
    };
    for c in &cells {
        grid.cell_child_map[c.row][c.col] = target;
    }
    trace!(target, cells = cells.len(), "merged cells");
    true
}

/// Split the track containing `cell` in two.
///
/// The new track copies the ids of the old one, so other zones crossing it are
/// stretched. Only the half adjacent to `cell` becomes a fresh zone, with id
/// one past the current maximum.
pub fn split_cell(grid: &mut GridLayoutInfo, cell: Cell, axis: SplitAxis) -> bool {
    if !cell_in_range(grid, cell) {
        return false;
    }
    let fresh = grid.max_id().map_or(0, |m| m + 1);
    match axis {
        SplitAxis::Vertical => {
            let c = cell.col;
            let (first, second) = halve(grid.columns_percents[c]);
            grid.columns_percents[c] = first;
            grid.columns_percents.insert(c + 1, second);
            grid.columns += 1;
            for row in &mut grid.cell_child_map {
                let id = row[c];
                row.insert(c + 1, id);
            }
            grid.cell_child_map[cell.row][c + 1] = fresh;
        }
        SplitAxis::Horizontal => {
            let r = cell.row;
            let (first, second) = halve(grid.rows_percents[r]);
            grid.rows_percents[r] = first;
            grid.rows_percents.insert(r + 1, second);
            grid.rows += 1;
            let copy = grid.cell_child_map[r].clone();
            grid.cell_child_map.insert(r + 1, copy);
            grid.cell_child_map[r + 1][cell.col] = fresh;
        }
    }
    trace!(?cell, ?axis, fresh, "split cell");
    true
}

/// Split a percent into two parts that sum to it.
fn halve(p: u32) -> (u32, u32) {
    let first = p / 2;
    (first, p - first)
}

/// Convert a pointer displacement into a percent delta along an axis of
/// `extent` pixels, truncating toward zero.
pub fn delta_percent(delta: f64, extent: f64) -> i32 {
    if extent <= 0.0 {
        return 0;
    }
    (delta / extent * f64::from(PERCENT_TOTAL)) as i32
}

/// Move a divider by `delta` percent points. The two tracks it separates keep
/// their combined share and neither drops below [`MIN_DIVIDER_PERCENT`].
pub fn resize_divider(grid: &mut GridLayoutInfo, divider: Divider, delta: i32) -> bool {
    let percents = match divider {
        Divider::Column(_) => &mut grid.columns_percents,
        Divider::Row(_) => &mut grid.rows_percents,
    };
    let (Divider::Column(i) | Divider::Row(i)) = divider;
    if i + 1 >= percents.len() {
        return false;
    }
    let min = i64::from(MIN_DIVIDER_PERCENT);
    let combined = i64::from(percents[i]) + i64::from(percents[i + 1]);
    if combined < 2 * min {
        return false;
    }
    let mut first = i64::from(percents[i]) + i64::from(delta);
    let mut second = i64::from(percents[i + 1]) - i64::from(delta);
    if first < min {
        first = min;
        second = combined - min;
    }
    if second < min {
        second = min;
        first = combined - min;
    }
    // Both values lie in [min, combined - min] here.
    percents[i] = first as u32;
    percents[i + 1] = second as u32;
    true
}

/// Find the divider within `threshold` of `point`, for a grid drawn at
/// `width x height` with its origin at the top-left. Column dividers win over
/// row dividers.
pub fn hit_test_divider(
    point: Point,
    width: f64,
    height: f64,
    grid: &GridLayoutInfo,
    threshold: f64,
) -> Option<Divider> {
    let scale = f64::from(PERCENT_TOTAL);
    let mut x = 0.0;
    for (i, p) in grid
        .columns_percents
        .iter()
        .take(grid.columns.saturating_sub(1))
        .enumerate()
    {
        x += f64::from(*p) / scale * width;
        if (point.x - x).abs() < threshold {
            return Some(Divider::Column(i));
        }
    }
    let mut y = 0.0;
    for (i, p) in grid
        .rows_percents
        .iter()
        .take(grid.rows.saturating_sub(1))
        .enumerate()
    {
        y += f64::from(*p) / scale * height;
        if (point.y - y).abs() < threshold {
            return Some(Divider::Row(i));
        }
    }
    None
}

/// Append a quarter-size zone centred in the reference area and return its id.
pub fn add_zone(canvas: &mut CanvasLayoutInfo) -> ZoneId {
    let width = canvas.last_work_area_width / 4;
    let height = canvas.last_work_area_height / 4;
    let id = canvas.max_id().unwrap_or(0) + 1;
    canvas.zones.push(CanvasZone {
        id,
        x: (canvas.last_work_area_width - width) / 2,
        y: (canvas.last_work_area_height - height) / 2,
        width,
        height,
    });
    id
}

/// Remove the zone with `id`.
pub fn remove_zone(canvas: &mut CanvasLayoutInfo, id: ZoneId) -> bool {
    let before = canvas.zones.len();
    canvas.zones.retain(|z| z.id != id);
    canvas.zones.len() != before
}

/// Move the zone with `id` to the end of the list, above all others.
pub fn bring_to_front(canvas: &mut CanvasLayoutInfo, id: ZoneId) -> bool {
    let Some(index) = canvas.zones.iter().position(|z| z.id == id) else {
        return false;
    };
    let zone = canvas.zones.remove(index);
    canvas.zones.push(zone);
    true
}
