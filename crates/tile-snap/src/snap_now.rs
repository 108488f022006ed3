//! Snap the focused window into its best zone without dragging.

use tile_geom::{InternalRect, Rect};
use tile_layout::{best_zone, compute_zones};
use tracing::debug;

use crate::{
    Error, Result,
    accessor::WindowAccessor,
    display::Displays,
    provider::ZoneSetProvider,
};

/// Move the focused window into the zone that best fits it on its display.
///
/// The display is the one containing the window's centre. Returns the frame
/// that was applied, in global top-left coordinates.
pub fn snap_focused_window(
    accessor: &dyn WindowAccessor,
    displays: &dyn Displays,
    zone_sets: &dyn ZoneSetProvider,
) -> Result<Rect> {
    if !accessor.has_permission() {
        return Err(Error::Permission);
    }
    let window = accessor.focused_window().ok_or(Error::NoWindowTarget)?;
    let frame = accessor.frame(window).ok_or(Error::FrameUnavailable)?;

    let all = displays.displays();
    let center = frame.center();
    let display = all
        .iter()
        .find(|d| {
            let desktop = d.screen.global_to_desktop(center);
            d.screen.contains_desktop_point(desktop)
        })
        .copied()
        .ok_or(Error::NoScreen)?;

    let set = zone_sets
        .zone_set_for_display(display.id)
        .ok_or(Error::NoZones(display.id))?;
    let zones = compute_zones(&set, &display.screen.work_area());
    let local = InternalRect::from_global_top_left(frame, &display.screen);
    let zone = best_zone(&local, &zones).ok_or(Error::NoZones(display.id))?;

    let target = zone.rect.to_global_top_left(&display.screen);
    debug!(window, zone = zone.id, ?target, "snap now");
    if !accessor.set_frame(window, target) {
        return Err(Error::SetFrameFailed);
    }
    Ok(target)
}
