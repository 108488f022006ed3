//! Canvas zone engine: rescale freeform zones to a work area.

use std::collections::HashSet;

use tile_geom::InternalRect;
use tracing::debug;

use crate::model::{CanvasLayoutInfo, Zone};

/// Map each canvas zone linearly from its reference size onto `work_area`.
///
/// `spacing` is accepted for symmetry with the grid engine and ignored:
/// canvas zones are placed by hand and may overlap. The result is empty when
/// the reference size is not positive, or when any zone has no area or
/// repeats an id.
pub fn calculate_canvas_zones(
    work_area: &InternalRect,
    canvas: &CanvasLayoutInfo,
    _spacing: u32,
) -> Vec<Zone> {
    if canvas.last_work_area_width <= 0 || canvas.last_work_area_height <= 0 {
        debug!(
            width = canvas.last_work_area_width,
            height = canvas.last_work_area_height,
            "canvas reference size is empty"
        );
        return Vec::new();
    }
    let sx = work_area.w / f64::from(canvas.last_work_area_width);
    let sy = work_area.h / f64::from(canvas.last_work_area_height);

    let mut seen = HashSet::new();
    let mut zones = Vec::with_capacity(canvas.zones.len());
    for cz in &canvas.zones {
        let zone = Zone::new(
            cz.id,
            InternalRect::new(
                work_area.x + f64::from(cz.x) * sx,
                work_area.y + f64::from(cz.y) * sy,
                f64::from(cz.width) * sx,
                f64::from(cz.height) * sy,
            ),
        );
        if !zone.is_valid() || !seen.insert(cz.id) {
            debug!(id = cz.id, "canvas zone rejected");
            return Vec::new();
        }
        zones.push(zone);
    }
    zones
}
