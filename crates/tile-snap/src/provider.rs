//! Which layout applies to a display.

use parking_lot::RwLock;
use tile_layout::{DisplayId, LayoutStore, ZoneSet};

/// Resolves the active layout for a display.
pub trait ZoneSetProvider: Send + Sync {
    /// The layout selected for `display`, if any.
    fn zone_set_for_display(&self, display: DisplayId) -> Option<ZoneSet>;
}

impl ZoneSetProvider for LayoutStore {
    fn zone_set_for_display(&self, display: DisplayId) -> Option<ZoneSet> {
        self.selected_zone_set(display)
    }
}

/// A store shared with an editor that may change it between drags.
impl ZoneSetProvider for RwLock<LayoutStore> {
    fn zone_set_for_display(&self, display: DisplayId) -> Option<ZoneSet> {
        self.read().selected_zone_set(display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_store_sees_updates() {
        let store = RwLock::new(LayoutStore::with_defaults());
        assert_eq!(
            store.zone_set_for_display(1).map(|s| s.id),
            Some("grid-2x2".to_string())
        );
        store.write().set_selected_layout(1, "rows-2");
        assert_eq!(
            store.zone_set_for_display(1).map(|s| s.id),
            Some("rows-2".to_string())
        );
    }
}
