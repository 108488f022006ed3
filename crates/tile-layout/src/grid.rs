//! Grid zone engine and even-distribution helpers.

use std::collections::HashSet;

use tile_geom::InternalRect;
use tracing::debug;

use crate::model::{GridLayoutInfo, PERCENT_TOTAL, Zone, ZoneId};

/// Start and end pixel offset of one row or column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Span {
    /// Offset of the leading edge.
    start: i64,
    /// Offset of the trailing edge.
    end: i64,
}

/// Convert percents into pixel spans using cumulative rounding, so the final
/// boundary lands exactly on `total`.
fn spans(percents: &[u32], total: i64) -> Vec<Span> {
    let scale = i64::from(PERCENT_TOTAL);
    let mut acc: i64 = 0;
    percents
        .iter()
        .map(|p| {
            let start = acc * total / scale;
            acc += i64::from(*p);
            Span {
                start,
                end: acc * total / scale,
            }
        })
        .collect()
}

/// Every cell in rows `r0..=r1`, columns `c0..=c1` carries `id`.
fn block_is_uniform(
    map: &[Vec<ZoneId>],
    id: ZoneId,
    (r0, r1): (usize, usize),
    (c0, c1): (usize, usize),
) -> bool {
    map[r0..=r1]
        .iter()
        .all(|row| row[c0..=c1].iter().all(|cell| *cell == id))
}

/// Compute zone rectangles for a grid layout inside `work_area`.
///
/// Edges on the work-area boundary are inset by the full `spacing`, interior
/// seams by `spacing / 2` on each side. Zones are emitted in row-major order of
/// their top-left cell.
///
/// An empty result means the layout is unusable here: malformed dimensions,
/// a zone without positive extent, a non-rectangular span or a duplicated id.
pub fn calculate_grid_zones(
    work_area: &InternalRect,
    grid: &GridLayoutInfo,
    spacing: u32,
) -> Vec<Zone> {
    if !grid.is_well_formed() {
        debug!(rows = grid.rows, columns = grid.columns, "grid dimensions malformed");
        return Vec::new();
    }

    // Pixel arithmetic runs on the truncated work-area extent.
    let row_spans = spans(&grid.rows_percents, work_area.h as i64);
    let col_spans = spans(&grid.columns_percents, work_area.w as i64);
    let map = &grid.cell_child_map;
    let full = i64::from(spacing);
    let half = full / 2;
    let last_row = grid.rows - 1;
    let last_col = grid.columns - 1;

    let mut zones = Vec::new();
    let mut seen = HashSet::new();
    let mut covered = 0;
    for r in 0..grid.rows {
        for c in 0..grid.columns {
            let id = map[r][c];
            let above_differs = r == 0 || map[r - 1][c] != id;
            let left_differs = c == 0 || map[r][c - 1] != id;
            if !(above_differs && left_differs) {
                continue;
            }

            let mut max_row = r;
            while max_row < last_row && map[max_row + 1][c] == id {
                max_row += 1;
            }
            let mut max_col = c;
            while max_col < last_col && map[r][max_col + 1] == id {
                max_col += 1;
            }
            if !block_is_uniform(map, id, (r, max_row), (c, max_col)) {
                debug!(id, row = r, column = c, "zone span is not rectangular");
                return Vec::new();
            }

            let top = row_spans[r].start + if r == 0 { full } else { half };
            let bottom = row_spans[max_row].end - if max_row == last_row { full } else { half };
            let left = col_spans[c].start + if c == 0 { full } else { half };
            let right = col_spans[max_col].end - if max_col == last_col { full } else { half };

            let zone = Zone::new(
                id,
                InternalRect::new(
                    work_area.x + left as f64,
                    work_area.y + top as f64,
                    (right - left).max(0) as f64,
                    (bottom - top).max(0) as f64,
                ),
            );
            if !zone.is_valid() {
                debug!(id, rect = ?zone.rect, "grid zone has no area");
                return Vec::new();
            }
            if !seen.insert(id) {
                debug!(id, "grid zone id appears in more than one region");
                return Vec::new();
            }
            covered += (max_row - r + 1) * (max_col - c + 1);
            zones.push(zone);
        }
    }
    // Blocks are disjoint, so any shortfall is a cell left outside its zone.
    if covered != grid.rows * grid.columns {
        debug!(covered, "grid zone span is not rectangular");
        return Vec::new();
    }
    zones
}

/// Split [`PERCENT_TOTAL`] into `n` near-equal parts that sum exactly.
pub fn even_percents(n: usize) -> Vec<u32> {
    let n = n.max(1) as u64;
    let total = u64::from(PERCENT_TOTAL);
    (0..n)
        .map(|i| (total * (i + 1) / n - total * i / n) as u32)
        .collect()
}

/// An evenly divided `rows x columns` grid with one zone per cell, ids
/// assigned row-major from 0. Zero dimensions are raised to 1.
pub fn distribute_evenly(rows: usize, columns: usize) -> GridLayoutInfo {
    let rows = rows.max(1);
    let columns = columns.max(1);
    let cell_child_map = (0..rows)
        .map(|r| (0..columns).map(|c| (r * columns + c) as ZoneId).collect())
        .collect();
    GridLayoutInfo {
        rows,
        columns,
        rows_percents: even_percents(rows),
        columns_percents: even_percents(columns),
        cell_child_map,
    }
}

/// Reset row heights to an even split. Columns and the cell map are untouched.
pub fn distribute_rows_evenly(grid: &mut GridLayoutInfo) {
    grid.rows_percents = even_percents(grid.rows);
}

/// Reset column widths to an even split. Rows and the cell map are untouched.
pub fn distribute_columns_evenly(grid: &mut GridLayoutInfo) {
    grid.columns_percents = even_percents(grid.columns);
}

/// An even grid sized for roughly `zone_count` zones.
///
/// Rows are the largest `r` with `zone_count / r >= r`; columns are
/// `ceil(zone_count / rows)`. Ids run row-major and surplus trailing cells
/// repeat the last id, widening the final zone. A non-positive count yields a
/// single cell.
pub fn generate_grid_layout_info(zone_count: i32) -> GridLayoutInfo {
    if zone_count <= 0 {
        return distribute_evenly(1, 1);
    }
    let count = zone_count as usize;
    let mut rows = 1;
    while count / rows >= rows {
        rows += 1;
    }
    rows -= 1;
    let columns = count.div_ceil(rows);

    let mut info = distribute_evenly(rows, columns);
    let last = (count - 1) as ZoneId;
    for row in &mut info.cell_child_map {
        for cell in row.iter_mut() {
            *cell = (*cell).min(last);
        }
    }
    info
}
