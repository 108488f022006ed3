//! Pick the zone a window most plausibly belongs in.

use tile_geom::InternalRect;

use crate::model::Zone;

/// Fraction of the window's area a zone must cover to win on overlap.
pub const OVERLAP_RATIO: f64 = 0.5;

/// Index of the best zone for `window`.
///
/// Zones covering more than half the window compete on overlap area; the
/// largest wins. When none qualifies the zone whose centre is nearest the
/// window's centre wins. Ties go to the earlier zone. `None` only when
/// `zones` is empty.
pub fn best_zone_index(window: &InternalRect, zones: &[Zone]) -> Option<usize> {
    let window_area = window.area();
    if window_area > 0.0 {
        let mut best: Option<(usize, f64)> = None;
        for (i, z) in zones.iter().enumerate() {
            let overlap = window.overlap_area(&z.rect);
            if overlap / window_area <= OVERLAP_RATIO {
                continue;
            }
            if best.is_none_or(|(_, b)| overlap > b) {
                best = Some((i, overlap));
            }
        }
        if let Some((i, _)) = best {
            return Some(i);
        }
    }

    let center = window.center();
    let mut nearest: Option<(usize, f64)> = None;
    for (i, z) in zones.iter().enumerate() {
        let d = center.distance(&z.rect.center());
        if nearest.is_none_or(|(_, b)| d < b) {
            nearest = Some((i, d));
        }
    }
    nearest.map(|(i, _)| i)
}

/// The best zone for `window`, see [`best_zone_index`].
pub fn best_zone<'a>(window: &InternalRect, zones: &'a [Zone]) -> Option<&'a Zone> {
    best_zone_index(window, zones).and_then(|i| zones.get(i))
}
