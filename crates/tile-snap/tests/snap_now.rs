//! One-shot snapping of the focused window.

use tile_geom::{Rect, Screen};
use tile_layout::{CanvasLayoutInfo, CanvasZone, LayoutStore, ZoneSet};
use tile_snap::{
    Display, Error, StaticDisplays, snap_focused_window, test_support::MockWindowAccessor,
};

fn primary() -> Screen {
    Screen::primary(
        Rect::new(0.0, 0.0, 1000.0, 800.0),
        Rect::new(0.0, 0.0, 1000.0, 800.0),
    )
}

fn right() -> Screen {
    Screen::new(
        Rect::new(1000.0, 0.0, 1000.0, 800.0),
        Rect::new(1000.0, 0.0, 1000.0, 800.0),
        800.0,
    )
}

fn store(reference: (i32, i32)) -> LayoutStore {
    let zones = [(0, 0), (100, 0), (0, 100), (100, 100)]
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| CanvasZone {
            id: i as u32,
            x,
            y,
            width: 100,
            height: 100,
        })
        .collect();
    let set = ZoneSet::canvas(
        "quad",
        "Quad",
        CanvasLayoutInfo {
            zones,
            last_work_area_width: reference.0,
            last_work_area_height: reference.1,
        },
        0,
    );
    let mut store = LayoutStore::new();
    store.save_layout(set);
    store.set_selected_layout(1, "quad");
    store.set_selected_layout(2, "quad");
    store
}

fn displays() -> StaticDisplays {
    StaticDisplays::new(vec![Display::new(1, primary()), Display::new(2, right())])
}

fn accessor(frame: Rect) -> MockWindowAccessor {
    let a = MockWindowAccessor::new();
    a.set_windows(vec![(7, frame)]);
    a.set_focused(Some(7));
    a
}

#[test]
fn straddling_window_goes_to_nearest_zone() {
    let a = accessor(Rect::new(10.0, 10.0, 300.0, 200.0));
    let got = snap_focused_window(&a, &displays(), &store((1000, 800))).expect("snap");
    assert_eq!(got, Rect::new(100.0, 100.0, 100.0, 100.0));
    assert_eq!(a.set_frames(), vec![(7, got)]);
}

#[test]
fn window_on_secondary_display_uses_its_zones() {
    let a = accessor(Rect::new(1100.0, 10.0, 50.0, 50.0));
    let got = snap_focused_window(&a, &displays(), &store((1000, 800))).expect("snap");
    assert_eq!(got, Rect::new(1100.0, 0.0, 100.0, 100.0));
}

#[test]
fn failures_map_to_errors() {
    let ok_store = store((1000, 800));

    let a = accessor(Rect::new(10.0, 10.0, 50.0, 50.0));
    a.set_permission(false);
    assert!(matches!(
        snap_focused_window(&a, &displays(), &ok_store),
        Err(Error::Permission)
    ));
    assert!(!a.calls_contains("set_frame"));

    let a = accessor(Rect::new(10.0, 10.0, 50.0, 50.0));
    a.set_focused(None);
    assert!(matches!(
        snap_focused_window(&a, &displays(), &ok_store),
        Err(Error::NoWindowTarget)
    ));

    let a = accessor(Rect::new(10.0, 10.0, 50.0, 50.0));
    a.set_focused(Some(8));
    assert!(matches!(
        snap_focused_window(&a, &displays(), &ok_store),
        Err(Error::FrameUnavailable)
    ));

    let a = accessor(Rect::new(5000.0, 5000.0, 50.0, 50.0));
    assert!(matches!(
        snap_focused_window(&a, &displays(), &ok_store),
        Err(Error::NoScreen)
    ));

    let a = accessor(Rect::new(10.0, 10.0, 50.0, 50.0));
    assert!(matches!(
        snap_focused_window(&a, &displays(), &store((0, 0))),
        Err(Error::NoZones(1))
    ));

    let a = accessor(Rect::new(10.0, 10.0, 50.0, 50.0));
    a.set_fail_set_frame(true);
    assert!(matches!(
        snap_focused_window(&a, &displays(), &ok_store),
        Err(Error::SetFrameFailed)
    ));
}
