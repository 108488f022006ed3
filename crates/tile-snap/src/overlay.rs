//! The zone overlay shown while dragging.

use tile_geom::{InternalRect, Screen};

/// Draws zones over a screen.
///
/// Calls are notifications: the controller never reads anything back, and
/// an implementation may coalesce or drop them.
pub trait Overlay: Send + Sync {
    /// Show the overlay covering `screen`.
    fn show_overlay(&self, screen: &Screen);
    /// Hide the overlay if shown.
    fn hide_overlay(&self);
    /// Replace the zones drawn on `screen`. Rectangles are in that screen's
    /// internal space.
    fn update_zones(&self, zones: &[InternalRect], screen: &Screen);
    /// Highlight the zones at `indices` (positions in the last
    /// [`update_zones`](Overlay::update_zones) list); empty clears.
    fn highlight_zones(&self, indices: &[usize]);
}
