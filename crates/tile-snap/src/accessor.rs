//! Access to the host's windows.

use tile_geom::{Point, Rect};

/// Opaque identifier for a host window.
pub type WindowId = u32;

/// Reads and writes window frames on the host.
///
/// Every point and rectangle here is in global top-left coordinates: origin
/// at the top-left of the primary screen, y growing downward. Calls are
/// synchronous and are never retried by callers.
pub trait WindowAccessor: Send + Sync {
    /// The window that currently has keyboard focus.
    fn focused_window(&self) -> Option<WindowId>;
    /// The topmost window under `p`.
    fn window_under_point(&self, p: Point) -> Option<WindowId>;
    /// Current frame of `id`.
    fn frame(&self, id: WindowId) -> Option<Rect>;
    /// Move and resize `id`. Returns `false` if the host refused.
    fn set_frame(&self, id: WindowId, frame: Rect) -> bool;
    /// Whether the process may control other applications' windows.
    fn has_permission(&self) -> bool;
}
