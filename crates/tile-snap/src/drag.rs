//! Drag-to-snap: show zones while a window is dragged with the snap key held,
//! and move the window into the highlighted zones on release.
//!
//! The controller is a three-state machine:
//!
//! - **Idle**: nothing is happening.
//! - **Armed**: the button went down with the snap key held, but neither the
//!   window nor the pointer has moved past the drag threshold yet.
//! - **Dragging**: the threshold was crossed. Zones for the display under the
//!   pointer are computed once and kept until release, even if the pointer
//!   wanders onto another display.
//!
//! Events arrive either through [`DragSnapController::handle_event`] or from a
//! channel attached with [`DragSnapController::start`]. Everything runs on the
//! caller's thread.

use std::{collections::BTreeSet, mem, sync::Arc};

use crossbeam_channel::Receiver;
use tile_geom::{InternalPoint, InternalRect, Point, Rect};
use tile_layout::{Zone, compute_zones, union_of, zones_at};
use tracing::{debug, trace, warn};

use crate::{
    Error, Result,
    accessor::{WindowAccessor, WindowId},
    display::{Display, Displays},
    input::{InputEvent, ModifierFlags},
    keys::SnapKeyConfig,
    overlay::Overlay,
    provider::ZoneSetProvider,
    settings::DEFAULT_DRAG_THRESHOLD,
};

/// Coarse controller state, for callers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No press in progress.
    Idle,
    /// Pressed with the snap key, below the drag threshold.
    Armed,
    /// Dragging with zones resolved.
    Dragging,
}

/// What handling one event did.
#[derive(Debug)]
pub enum Outcome {
    /// Nothing observable changed.
    Unchanged,
    /// A press with the snap key held armed the controller.
    Armed,
    /// The drag threshold was crossed.
    DragStarted,
    /// The highlighted zone set changed.
    HighlightChanged,
    /// The overlay was hidden or shown mid-drag.
    OverlayToggled,
    /// The drag ended without snapping.
    Ended,
    /// A window was moved to `frame` (global top-left).
    Snapped {
        /// Window that was moved.
        window: WindowId,
        /// Frame it was given.
        frame: Rect,
    },
    /// The drag ended with a selection, but the window could not be moved.
    SnapFailed(Error),
}

/// State while pressed but not yet dragging.
#[derive(Debug, Clone, Copy)]
struct Armed {
    /// Pointer location at press, desktop coordinates.
    origin: Point,
    /// Window under the pointer at press.
    window: Option<WindowId>,
    /// That window's frame at press.
    window_frame: Option<Rect>,
}

/// State for an active drag.
#[derive(Debug)]
struct DragSession {
    /// Display the drag started on.
    display: Display,
    /// Zones for that display, computed once.
    zones: Vec<Zone>,
    /// Indices into `zones`.
    highlighted: BTreeSet<usize>,
    /// Whether this session showed the overlay.
    overlay_visible: bool,
}

/// Full controller state.
#[derive(Debug)]
enum DragState {
    /// No press in progress.
    Idle,
    /// Pressed, below the threshold.
    Armed(Armed),
    /// Dragging.
    Dragging(DragSession),
}

/// Drives the overlay from pointer and modifier events and snaps windows.
pub struct DragSnapController {
    /// Window host.
    accessor: Arc<dyn WindowAccessor>,
    /// Zone overlay.
    overlay: Arc<dyn Overlay>,
    /// Display arrangement.
    displays: Arc<dyn Displays>,
    /// Layout per display.
    zone_sets: Arc<dyn ZoneSetProvider>,
    /// Snap and multi-zone keys.
    keys: SnapKeyConfig,
    /// Travel before a press becomes a drag.
    drag_threshold: f64,
    /// Current state.
    state: DragState,
    /// Modifiers from the latest event.
    modifiers: ModifierFlags,
    /// Latest pointer location, desktop coordinates.
    pointer: Point,
    /// Left button is down.
    pointer_down: bool,
    /// Attached event source.
    events: Option<Receiver<InputEvent>>,
}

impl DragSnapController {
    /// Create an idle controller with the default keys and threshold.
    pub fn new(
        accessor: Arc<dyn WindowAccessor>,
        overlay: Arc<dyn Overlay>,
        displays: Arc<dyn Displays>,
        zone_sets: Arc<dyn ZoneSetProvider>,
    ) -> Self {
        Self {
            accessor,
            overlay,
            displays,
            zone_sets,
            keys: SnapKeyConfig::default(),
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            state: DragState::Idle,
            modifiers: ModifierFlags::empty(),
            pointer: Point::default(),
            pointer_down: false,
            events: None,
        }
    }

    /// Use `keys` for the snap and multi-zone modifiers.
    pub fn with_keys(mut self, keys: SnapKeyConfig) -> Self {
        self.keys = keys;
        self
    }

    /// Pointer or window travel needed before a press becomes a drag.
    pub fn with_drag_threshold(mut self, threshold: f64) -> Self {
        self.drag_threshold = threshold.max(0.0);
        self
    }

    /// Replace the snap and multi-zone keys.
    pub fn set_keys(&mut self, keys: SnapKeyConfig) {
        self.keys = keys;
    }

    /// Current snap and multi-zone keys.
    pub fn keys(&self) -> SnapKeyConfig {
        self.keys
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        match self.state {
            DragState::Idle => Phase::Idle,
            DragState::Armed(_) => Phase::Armed,
            DragState::Dragging(_) => Phase::Dragging,
        }
    }

    /// Highlighted zone indices, ascending. Empty unless dragging.
    pub fn highlighted(&self) -> Vec<usize> {
        match &self.state {
            DragState::Dragging(s) => s.highlighted.iter().copied().collect(),
            _ => Vec::new(),
        }
    }

    /// Zones cached for the current drag.
    pub fn zones(&self) -> &[Zone] {
        match &self.state {
            DragState::Dragging(s) => &s.zones,
            _ => &[],
        }
    }

    /// Whether the overlay is currently shown by this controller.
    pub fn overlay_visible(&self) -> bool {
        matches!(&self.state, DragState::Dragging(s) if s.overlay_visible)
    }

    /// Whether an event channel is attached.
    pub fn is_running(&self) -> bool {
        self.events.is_some()
    }

    /// Attach an event source. Any previous source and session are dropped
    /// first.
    pub fn start(&mut self, events: Receiver<InputEvent>) {
        self.stop();
        self.events = Some(events);
        debug!("drag snap started");
    }

    /// Detach the event source and return to Idle, hiding the overlay if this
    /// controller showed it. Calling it again does nothing.
    pub fn stop(&mut self) {
        let was_running = self.events.take().is_some();
        let state = mem::replace(&mut self.state, DragState::Idle);
        if let DragState::Dragging(session) = state
            && session.overlay_visible
        {
            self.overlay.hide_overlay();
        }
        self.pointer_down = false;
        self.modifiers = ModifierFlags::empty();
        if was_running {
            debug!("drag snap stopped");
        }
    }

    /// Handle every event already queued on the attached channel without
    /// blocking. Returns the outcomes in order.
    pub fn pump(&mut self) -> Vec<Outcome> {
        let mut out = Vec::new();
        let Some(rx) = self.events.clone() else {
            return out;
        };
        while let Ok(ev) = rx.try_recv() {
            out.push(self.handle_event(ev));
            if self.events.is_none() {
                break;
            }
        }
        out
    }

    /// Block handling events until every sender is dropped, then stop.
    pub fn run(&mut self) {
        let Some(rx) = self.events.clone() else {
            return;
        };
        for ev in rx.iter() {
            if let Outcome::SnapFailed(e) = self.handle_event(ev) {
                warn!(error = %e, "snap failed");
            }
            if self.events.is_none() {
                return;
            }
        }
        self.stop();
    }

    /// Feed one event through the state machine.
    pub fn handle_event(&mut self, event: InputEvent) -> Outcome {
        trace!(?event, "input");
        self.modifiers = event.modifiers();
        match event {
            InputEvent::PointerDown { location, .. } => self.pointer_down_at(location),
            InputEvent::PointerDragged { location, .. } => self.pointer_dragged_to(location),
            InputEvent::PointerUp { location, .. } => self.pointer_up_at(location),
            InputEvent::FlagsChanged { .. } => self.flags_changed(),
        }
    }

    /// The snap key is down.
    fn snap_held(&self) -> bool {
        self.keys.snap.held(self.modifiers)
    }

    /// The multi-zone key is down.
    fn multi_held(&self) -> bool {
        self.keys.multi_zone.held(self.modifiers)
    }

    /// Global top-left equivalent of a desktop point.
    fn to_global(&self, p: Point) -> Point {
        let displays = self.displays.displays();
        let screen = displays
            .iter()
            .find(|d| d.screen.contains_desktop_point(p))
            .or_else(|| displays.first())
            .map(|d| d.screen);
        match screen {
            Some(s) => s.desktop_to_global(p),
            None => p,
        }
    }

    /// Enter Armed at `at`, remembering the window under it.
    fn arm(&mut self, at: Point) -> Outcome {
        let window = self.accessor.window_under_point(self.to_global(at));
        let window_frame = window.and_then(|w| self.accessor.frame(w));
        debug!(?window, x = at.x, y = at.y, "armed");
        self.state = DragState::Armed(Armed {
            origin: at,
            window,
            window_frame,
        });
        Outcome::Armed
    }

    /// Left button pressed.
    fn pointer_down_at(&mut self, location: Point) -> Outcome {
        self.pointer = location;
        self.pointer_down = true;
        // A press never shows the overlay; a stale session from a lost
        // release is discarded.
        self.end_session();
        if self.snap_held() {
            self.arm(location)
        } else {
            self.state = DragState::Idle;
            Outcome::Unchanged
        }
    }

    /// Pointer moved with the button held.
    fn pointer_dragged_to(&mut self, location: Point) -> Outcome {
        self.pointer = location;
        self.pointer_down = true;
        match &self.state {
            DragState::Idle => {
                if self.snap_held() {
                    self.arm(location)
                } else {
                    Outcome::Unchanged
                }
            }
            DragState::Armed(armed) => {
                let armed = *armed;
                if self.travel(&armed, location) > self.drag_threshold {
                    self.begin_drag(location)
                } else {
                    Outcome::Unchanged
                }
            }
            DragState::Dragging(_) => self.refresh_highlight(),
        }
    }

    /// Distance moved since the press: the window's origin when a window is
    /// tracked and readable, otherwise the pointer.
    fn travel(&self, armed: &Armed, location: Point) -> f64 {
        if let (Some(w), Some(start)) = (armed.window, armed.window_frame)
            && let Some(now) = self.accessor.frame(w)
        {
            return Point::new(start.x, start.y).distance(&Point::new(now.x, now.y));
        }
        armed.origin.distance(&location)
    }

    /// Cross the threshold: resolve the display and its zones.
    fn begin_drag(&mut self, location: Point) -> Outcome {
        let Some(display) = self.displays.display_at(location) else {
            debug!(x = location.x, y = location.y, "no display under pointer");
            return Outcome::Unchanged;
        };
        let zones = self
            .zone_sets
            .zone_set_for_display(display.id)
            .map(|set| compute_zones(&set, &display.screen.work_area()))
            .unwrap_or_default();
        let display_id = display.id;
        debug!(display = display_id, zones = zones.len(), "drag started");
        if zones.is_empty() {
            debug!(display = display_id, "layout produced no zones");
        }
        self.state = DragState::Dragging(DragSession {
            display,
            zones,
            highlighted: BTreeSet::new(),
            overlay_visible: false,
        });
        if self.snap_held() {
            self.show_overlay();
        }
        self.refresh_highlight();
        Outcome::DragStarted
    }

    /// Show the overlay for the current session if it has zones.
    fn show_overlay(&mut self) -> bool {
        let DragState::Dragging(session) = &mut self.state else {
            return false;
        };
        if session.overlay_visible || session.zones.is_empty() {
            return false;
        }
        let rects: Vec<InternalRect> = session.zones.iter().map(|z| z.rect).collect();
        self.overlay.show_overlay(&session.display.screen);
        self.overlay.update_zones(&rects, &session.display.screen);
        session.overlay_visible = true;
        true
    }

    /// Hide the overlay and drop the highlight.
    fn hide_overlay(&mut self) -> bool {
        let DragState::Dragging(session) = &mut self.state else {
            return false;
        };
        if !session.overlay_visible {
            return false;
        }
        self.overlay.hide_overlay();
        session.overlay_visible = false;
        session.highlighted.clear();
        true
    }

    /// Recompute the highlight from the pointer and modifiers.
    fn refresh_highlight(&mut self) -> Outcome {
        let multi = self.multi_held();
        let pointer = self.pointer;
        let DragState::Dragging(session) = &mut self.state else {
            return Outcome::Unchanged;
        };
        if !session.overlay_visible {
            return Outcome::Unchanged;
        }
        let p = InternalPoint::from_bottom_left(pointer, &session.display.screen);
        let hits = zones_at(&session.zones, p);
        let next = if multi {
            let mut selected = session.highlighted.clone();
            selected.extend(hits);
            expand_to_bounds(&session.zones, &selected)
        } else {
            hits.first().copied().into_iter().collect()
        };
        if next == session.highlighted {
            return Outcome::Unchanged;
        }
        session.highlighted = next;
        let indices: Vec<usize> = session.highlighted.iter().copied().collect();
        trace!(?indices, "highlight");
        self.overlay.highlight_zones(&indices);
        Outcome::HighlightChanged
    }

    /// Modifier state changed.
    fn flags_changed(&mut self) -> Outcome {
        let snap = self.snap_held();
        match &self.state {
            DragState::Idle => {
                if self.pointer_down && snap {
                    self.arm(self.pointer)
                } else {
                    Outcome::Unchanged
                }
            }
            DragState::Armed(_) => {
                if snap {
                    Outcome::Unchanged
                } else {
                    debug!("snap key released before drag");
                    self.state = DragState::Idle;
                    Outcome::Ended
                }
            }
            DragState::Dragging(session) => {
                let visible = session.overlay_visible;
                if snap && !visible {
                    if self.show_overlay() {
                        self.refresh_highlight();
                        return Outcome::OverlayToggled;
                    }
                    Outcome::Unchanged
                } else if !snap && visible {
                    self.hide_overlay();
                    Outcome::OverlayToggled
                } else {
                    // Without the multi-zone key the refresh collapses the
                    // selection to the zone under the pointer.
                    self.refresh_highlight()
                }
            }
        }
    }

    /// Left button released; snap if a selection is held.
    fn pointer_up_at(&mut self, location: Point) -> Outcome {
        self.pointer = location;
        self.pointer_down = false;
        let state = mem::replace(&mut self.state, DragState::Idle);
        let session = match state {
            DragState::Dragging(session) => session,
            DragState::Armed(_) => return Outcome::Ended,
            DragState::Idle => return Outcome::Unchanged,
        };
        if session.overlay_visible {
            self.overlay.hide_overlay();
        }
        if !self.snap_held() || session.highlighted.is_empty() {
            debug!("drag ended without selection");
            return Outcome::Ended;
        }
        match self.commit(&session, location) {
            Ok((window, frame)) => {
                debug!(window, ?frame, "snapped");
                Outcome::Snapped { window, frame }
            }
            Err(e) => {
                debug!(error = %e, "snap failed");
                Outcome::SnapFailed(e)
            }
        }
    }

    /// Move the target window onto the union of the highlighted zones.
    fn commit(&self, session: &DragSession, location: Point) -> Result<(WindowId, Rect)> {
        let Some(target) = union_of(&session.zones, session.highlighted.iter().copied()) else {
            return Err(Error::NoZones(session.display.id));
        };
        let frame = target.to_global_top_left(&session.display.screen);
        if !self.accessor.has_permission() {
            return Err(Error::Permission);
        }
        let window = self
            .accessor
            .focused_window()
            .or_else(|| {
                let p = session.display.screen.desktop_to_global(location);
                self.accessor.window_under_point(p)
            })
            .ok_or(Error::NoWindowTarget)?;
        if !self.accessor.set_frame(window, frame) {
            return Err(Error::SetFrameFailed);
        }
        Ok((window, frame))
    }

    /// Clear any session, hiding the overlay if shown.
    fn end_session(&mut self) {
        if let DragState::Dragging(session) = &self.state
            && session.overlay_visible
        {
            self.overlay.hide_overlay();
        }
        self.state = DragState::Idle;
    }
}

/// Every zone intersecting the bounding box of `selected`. Empty selections
/// stay empty.
fn expand_to_bounds(zones: &[Zone], selected: &BTreeSet<usize>) -> BTreeSet<usize> {
    let Some(bounds) = union_of(zones, selected.iter().copied()) else {
        return BTreeSet::new();
    };
    zones
        .iter()
        .enumerate()
        .filter(|(_, z)| z.rect.intersection(&bounds).is_some())
        .map(|(i, _)| i)
        .collect()
}
