use proptest::prelude::*;
use tile_geom::InternalRect;

use crate::{
    PERCENT_TOTAL, Zone, best_zone_index, calculate_grid_zones, distribute_evenly,
    even_percents, generate_grid_layout_info,
    snap::{Axis, MagneticSnap, ResizeMode, SnapMove, SnapTrack},
};

fn rect_strategy() -> impl Strategy<Value = InternalRect> {
    (
        -2000.0f64..2000.0,
        -2000.0f64..2000.0,
        1.0f64..1500.0,
        1.0f64..1500.0,
    )
        .prop_map(|(x, y, w, h)| InternalRect::new(x, y, w, h))
}

fn mode_strategy() -> impl Strategy<Value = ResizeMode> {
    prop_oneof![
        Just(ResizeMode::BottomEdge),
        Just(ResizeMode::TopEdge),
        Just(ResizeMode::BothEdges),
    ]
}

proptest! {
    #[test]
    fn even_percents_always_sum(n in 1usize..64) {
        let p = even_percents(n);
        prop_assert_eq!(p.len(), n);
        prop_assert_eq!(p.iter().sum::<u32>(), PERCENT_TOTAL);
    }

    #[test]
    fn even_grid_tiles_work_area(
        rows in 1usize..8,
        columns in 1usize..8,
        x in -500i32..500,
        y in -500i32..500,
        w in 64i32..4000,
        h in 64i32..4000,
    ) {
        let wa = InternalRect::new(f64::from(x), f64::from(y), f64::from(w), f64::from(h));
        let zones = calculate_grid_zones(&wa, &distribute_evenly(rows, columns), 0);
        prop_assert_eq!(zones.len(), rows * columns);

        let total: f64 = zones.iter().map(|z| z.rect.area()).sum();
        prop_assert_eq!(total, wa.area());
        for (i, a) in zones.iter().enumerate() {
            prop_assert!(a.is_valid());
            prop_assert!(wa.contains(a.rect.center()));
            for b in &zones[i + 1..] {
                prop_assert_eq!(a.rect.overlap_area(&b.rect), 0.0);
            }
        }
    }

    #[test]
    fn spacing_keeps_zones_inside(
        rows in 1usize..5,
        columns in 1usize..5,
        spacing in 0u32..24,
    ) {
        let wa = InternalRect::new(0.0, 0.0, 1920.0, 1080.0);
        let zones = calculate_grid_zones(&wa, &distribute_evenly(rows, columns), spacing);
        prop_assert_eq!(zones.len(), rows * columns);
        for z in &zones {
            prop_assert!(z.rect.x >= f64::from(spacing));
            prop_assert!(z.rect.y >= f64::from(spacing));
            prop_assert!(z.rect.as_rect().max_x() <= 1920.0 - f64::from(spacing));
            prop_assert!(z.rect.as_rect().max_y() <= 1080.0 - f64::from(spacing));
        }
    }

    #[test]
    fn generated_grids_are_valid(count in 1i32..40) {
        let info = generate_grid_layout_info(count);
        prop_assert!(info.is_well_formed());
        prop_assert!(info.percents_balanced());
        let wa = InternalRect::new(0.0, 0.0, 3840.0, 2160.0);
        let zones = calculate_grid_zones(&wa, &info, 0);
        prop_assert_eq!(zones.len(), count as usize);
    }

    #[test]
    fn best_zone_exists_for_nonempty_lists(
        window in rect_strategy(),
        rects in prop::collection::vec(rect_strategy(), 1..8),
    ) {
        let zones: Vec<Zone> = rects
            .into_iter()
            .enumerate()
            .map(|(i, r)| Zone::new(i as u32, r))
            .collect();
        let best = best_zone_index(&window, &zones);
        prop_assert!(best.is_some_and(|i| i < zones.len()));
    }

    #[test]
    fn contained_window_wins(
        zone in rect_strategy(),
        others in prop::collection::vec(rect_strategy(), 0..6),
        fx in 0.0f64..0.5,
        fy in 0.0f64..0.5,
    ) {
        // Zone 0 covers the window entirely, so whichever zone wins must too.
        let window = InternalRect::new(
            zone.x + zone.w * fx,
            zone.y + zone.h * fy,
            zone.w * 0.5,
            zone.h * 0.5,
        );
        let mut zones = vec![Zone::new(0, zone)];
        zones.extend(others.into_iter().enumerate().map(|(i, r)| Zone::new(i as u32 + 1, r)));
        let best = best_zone_index(&window, &zones).expect("non-empty");
        let full = window.area();
        prop_assert!((zones[best].rect.overlap_area(&window) - full).abs() <= 1e-6 * full.max(1.0));
    }

    #[test]
    fn magnetic_position_stays_in_bounds(
        rects in prop::collection::vec(rect_strategy(), 2..6),
        mode in mode_strategy(),
        deltas in prop::collection::vec(-400i64..400, 1..20),
    ) {
        let track = SnapTrack::new(&rects, 0, Axis::X, mode, 1920).expect("index 0");
        let (min, max) = (track.min_value(), track.max_value());
        let mut m = MagneticSnap::new(track);
        for d in deltas {
            let p = m.move_by(d);
            if min <= max {
                prop_assert!(p >= min && p <= max);
            }
        }
    }
}
