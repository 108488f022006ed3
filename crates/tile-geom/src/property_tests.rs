use proptest::prelude::*;

use crate::{EPSILON, InternalPoint, InternalRect, Point, Rect, Screen};

fn screen_strategy() -> impl Strategy<Value = Screen> {
    (
        -4000.0f64..4000.0,
        -3000.0f64..3000.0,
        320.0f64..5120.0,
        240.0f64..2880.0,
        600.0f64..2880.0,
    )
        .prop_map(|(x, y, w, h, primary_height)| {
            let frame = Rect::new(x, y, w, h);
            Screen::new(frame, frame, primary_height)
        })
}

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (
        -5000.0f64..5000.0,
        -5000.0f64..5000.0,
        0.0f64..3000.0,
        0.0f64..3000.0,
    )
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

proptest! {
    #[test]
    fn bottom_left_rect_round_trips(screen in screen_strategy(), r in rect_strategy()) {
        let back = InternalRect::from_bottom_left(r, &screen).to_bottom_left(&screen);
        prop_assert!(back.approx_eq(&r, EPSILON));
    }

    #[test]
    fn global_rect_round_trips(screen in screen_strategy(), r in rect_strategy()) {
        let back = InternalRect::from_global_top_left(r, &screen).to_global_top_left(&screen);
        prop_assert!(back.approx_eq(&r, EPSILON));
    }

    #[test]
    fn point_round_trips(
        screen in screen_strategy(),
        x in -5000.0f64..5000.0,
        y in -5000.0f64..5000.0,
    ) {
        let p = Point::new(x, y);
        let bl = InternalPoint::from_bottom_left(p, &screen).to_bottom_left(&screen);
        prop_assert!(bl.distance(&p) <= EPSILON);
        let g = InternalPoint::from_global_top_left(p, &screen).to_global_top_left(&screen);
        prop_assert!(g.distance(&p) <= EPSILON);
    }

    #[test]
    fn conversions_preserve_extent(screen in screen_strategy(), r in rect_strategy()) {
        let i = InternalRect::from_bottom_left(r, &screen);
        prop_assert_eq!(i.w, r.w);
        prop_assert_eq!(i.h, r.h);
    }

    #[test]
    fn intersection_is_contained_in_both(a in rect_strategy(), b in rect_strategy()) {
        if let Some(i) = a.intersection(&b) {
            prop_assert!(i.area() > 0.0);
            prop_assert!(i.area() <= a.area() + EPSILON);
            prop_assert!(i.area() <= b.area() + EPSILON);
            prop_assert!(a.contains(i.center()));
            prop_assert!(b.contains(i.center()));
        }
    }
}
