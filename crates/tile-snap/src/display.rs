//! Enumeration of the host's displays.

use serde::{Deserialize, Serialize};
use tile_geom::{Point, Screen};
use tile_layout::DisplayId;

/// A physical display and its geometry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Display {
    /// Stable identifier used to look up the display's selected layout.
    pub id: DisplayId,
    /// Frame and visible frame in bottom-left desktop coordinates.
    pub screen: Screen,
}

impl Display {
    /// Describe a display.
    pub const fn new(id: DisplayId, screen: Screen) -> Self {
        Self { id, screen }
    }
}

/// Source of the current display arrangement.
pub trait Displays: Send + Sync {
    /// All displays; the first entry is the primary screen.
    fn displays(&self) -> Vec<Display>;

    /// The display whose frame contains the bottom-left desktop point `p`.
    /// Edges are inclusive; on a shared edge the earlier display wins.
    fn display_at(&self, p: Point) -> Option<Display> {
        self.displays()
            .into_iter()
            .find(|d| d.screen.contains_desktop_point(p))
    }
}

/// A fixed display arrangement.
#[derive(Clone, Debug, Default)]
pub struct StaticDisplays {
    /// Displays in lookup order.
    displays: Vec<Display>,
}

impl StaticDisplays {
    /// Displays in lookup order; the first is the primary.
    pub fn new(displays: Vec<Display>) -> Self {
        Self { displays }
    }

    /// A single primary display with the given id.
    pub fn single(id: DisplayId, screen: Screen) -> Self {
        Self::new(vec![Display::new(id, screen)])
    }
}

impl Displays for StaticDisplays {
    fn displays(&self) -> Vec<Display> {
        self.displays.clone()
    }
}

#[cfg(test)]
mod tests {
    use tile_geom::Rect;

    use super::*;

    #[test]
    fn display_at_prefers_first_on_shared_edge() {
        let primary = Screen::primary(
            Rect::new(0.0, 0.0, 1000.0, 800.0),
            Rect::new(0.0, 0.0, 1000.0, 780.0),
        );
        let right = Screen::new(
            Rect::new(1000.0, 0.0, 1000.0, 800.0),
            Rect::new(1000.0, 0.0, 1000.0, 800.0),
            800.0,
        );
        let d = StaticDisplays::new(vec![Display::new(1, primary), Display::new(2, right)]);
        assert_eq!(d.display_at(Point::new(1000.0, 10.0)).map(|d| d.id), Some(1));
        assert_eq!(d.display_at(Point::new(1500.0, 10.0)).map(|d| d.id), Some(2));
        assert!(d.display_at(Point::new(-1.0, 10.0)).is_none());
    }
}
