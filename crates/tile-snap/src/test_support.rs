//! Recording test doubles for the host-facing traits.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use parking_lot::Mutex;
use tile_geom::{InternalRect, Point, Rect, Screen};

use crate::{
    accessor::{WindowAccessor, WindowId},
    overlay::Overlay,
};

/// In-memory window host. Windows are `(id, frame)` pairs in global
/// top-left coordinates; later entries are on top.
#[derive(Clone)]
pub struct MockWindowAccessor {
    /// Recorded call names.
    calls: Arc<Mutex<Vec<String>>>,
    /// Windows, bottom to top.
    windows: Arc<Mutex<Vec<(WindowId, Rect)>>>,
    /// Focused window.
    focused: Arc<Mutex<Option<WindowId>>>,
    /// Successful `set_frame` calls.
    set_frames: Arc<Mutex<Vec<(WindowId, Rect)>>>,
    /// Accessibility permission.
    permission: Arc<AtomicBool>,
    /// Make `set_frame` fail.
    fail_set_frame: Arc<AtomicBool>,
}

impl Default for MockWindowAccessor {
    fn default() -> Self {
        Self::new()
    }
}

impl MockWindowAccessor {
    /// No windows, permission granted.
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            windows: Arc::new(Mutex::new(Vec::new())),
            focused: Arc::new(Mutex::new(None)),
            set_frames: Arc::new(Mutex::new(Vec::new())),
            permission: Arc::new(AtomicBool::new(true)),
            fail_set_frame: Arc::new(AtomicBool::new(false)),
        }
    }
    /// Replace all windows.
    pub fn set_windows(&self, wins: Vec<(WindowId, Rect)>) {
        *self.windows.lock() = wins;
    }
    /// Move window `id` without recording a call, as a user drag would.
    pub fn move_window(&self, id: WindowId, frame: Rect) {
        if let Some(w) = self.windows.lock().iter_mut().find(|(w, _)| *w == id) {
            w.1 = frame;
        }
    }
    /// Set the focused window.
    pub fn set_focused(&self, id: Option<WindowId>) {
        *self.focused.lock() = id;
    }
    /// Grant or revoke permission.
    pub fn set_permission(&self, v: bool) {
        self.permission.store(v, Ordering::SeqCst);
    }
    /// Make subsequent `set_frame` calls fail.
    pub fn set_fail_set_frame(&self, v: bool) {
        self.fail_set_frame.store(v, Ordering::SeqCst);
    }
    /// Frames applied through `set_frame`, in order.
    pub fn set_frames(&self) -> Vec<(WindowId, Rect)> {
        self.set_frames.lock().clone()
    }
    /// Recorded call names, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
    /// Whether a call named `s` was recorded.
    pub fn calls_contains(&self, s: &str) -> bool {
        self.calls.lock().iter().any(|x| x == s)
    }
    /// Record a call.
    fn note(&self, s: &str) {
        self.calls.lock().push(s.to_string());
    }
}

impl WindowAccessor for MockWindowAccessor {
    fn focused_window(&self) -> Option<WindowId> {
        self.note("focused_window");
        *self.focused.lock()
    }
    fn window_under_point(&self, p: Point) -> Option<WindowId> {
        self.note("window_under_point");
        self.windows
            .lock()
            .iter()
            .rev()
            .find(|(_, f)| f.contains(p))
            .map(|(id, _)| *id)
    }
    fn frame(&self, id: WindowId) -> Option<Rect> {
        self.windows
            .lock()
            .iter()
            .find(|(w, _)| *w == id)
            .map(|(_, f)| *f)
    }
    fn set_frame(&self, id: WindowId, frame: Rect) -> bool {
        self.note("set_frame");
        if self.fail_set_frame.load(Ordering::SeqCst) {
            return false;
        }
        self.set_frames.lock().push((id, frame));
        self.move_window(id, frame);
        true
    }
    fn has_permission(&self) -> bool {
        self.note("has_permission");
        self.permission.load(Ordering::SeqCst)
    }
}

/// Overlay that records what it was asked to draw.
#[derive(Clone, Default)]
pub struct MockOverlay {
    /// Recorded call names.
    calls: Arc<Mutex<Vec<String>>>,
    /// Shown and not hidden since.
    visible: Arc<AtomicBool>,
    /// Last zones drawn.
    zones: Arc<Mutex<Vec<InternalRect>>>,
    /// Last highlight.
    highlighted: Arc<Mutex<Vec<usize>>>,
}

impl MockOverlay {
    /// Hidden, with nothing recorded.
    pub fn new() -> Self {
        Self::default()
    }
    /// Whether the overlay is shown.
    pub fn visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }
    /// Zones from the last `update_zones`.
    pub fn zones(&self) -> Vec<InternalRect> {
        self.zones.lock().clone()
    }
    /// Indices from the last `highlight_zones`.
    pub fn highlighted(&self) -> Vec<usize> {
        self.highlighted.lock().clone()
    }
    /// Recorded call names, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
    /// Whether a call named `s` was recorded.
    pub fn calls_contains(&self, s: &str) -> bool {
        self.calls.lock().iter().any(|x| x == s)
    }
    /// Number of recorded calls named `s`.
    pub fn count(&self, s: &str) -> usize {
        self.calls.lock().iter().filter(|x| *x == s).count()
    }
    /// Record a call.
    fn note(&self, s: &str) {
        self.calls.lock().push(s.to_string());
    }
}

impl Overlay for MockOverlay {
    fn show_overlay(&self, _screen: &Screen) {
        self.note("show");
        self.visible.store(true, Ordering::SeqCst);
    }
    fn hide_overlay(&self) {
        self.note("hide");
        self.visible.store(false, Ordering::SeqCst);
        self.highlighted.lock().clear();
    }
    fn update_zones(&self, zones: &[InternalRect], _screen: &Screen) {
        self.note("update_zones");
        *self.zones.lock() = zones.to_vec();
    }
    fn highlight_zones(&self, indices: &[usize]) {
        self.note("highlight");
        *self.highlighted.lock() = indices.to_vec();
    }
}
