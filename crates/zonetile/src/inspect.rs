//! Read-only commands: list layouts, compute zones, pick a best zone.

use std::path::Path;

use tile_geom::InternalRect;
use tile_layout::{LayoutStore, Zone, ZoneSet, best_zone, preset};
use tracing::debug;

use crate::{
    cli::{BestArgs, PresetsArgs, ScreenArgs, ZonesArgs},
    error::{Error, Result},
};

/// Display id used for the single screen described on the command line.
pub const CLI_DISPLAY: u32 = 1;

/// Open the layout store at `path`, or the built-in layouts when no path is
/// given. A path that does not exist yet also yields the built-ins.
pub fn open_store(path: Option<&Path>) -> Result<LayoutStore> {
    match path {
        Some(p) => Ok(LayoutStore::load_or_default(p)?),
        None => Ok(LayoutStore::with_defaults()),
    }
}

/// Find a layout by id, then by name, then among the presets by name.
pub fn resolve_layout(store: &LayoutStore, which: Option<&str>) -> Result<ZoneSet> {
    let Some(which) = which else {
        return store
            .selected_zone_set(CLI_DISPLAY)
            .ok_or_else(|| Error::UnknownLayout(String::new()));
    };
    store
        .layout(which)
        .or_else(|| store.layouts().iter().find(|l| l.name == which))
        .cloned()
        .or_else(|| preset(which))
        .ok_or_else(|| Error::UnknownLayout(which.to_string()))
}

/// Zones `set` produces on the requested screen.
fn zones_for(set: &ZoneSet, screen: &ScreenArgs) -> Vec<Zone> {
    let screen = screen.screen();
    let zones = LayoutStore::preview_zones(set, &screen);
    debug!(layout = %set.id, zones = zones.len(), "computed zones");
    zones
}

/// `(x, y, w, h)`.
fn fmt_rect(r: &InternalRect) -> String {
    format!("({}, {}, {}, {})", r.x, r.y, r.w, r.h)
}

/// `presets`: one line per built-in layout, or the whole set as JSON.
pub fn presets(args: &PresetsArgs) -> Result<()> {
    let all = tile_layout::presets();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&all)?);
        return Ok(());
    }
    for set in &all {
        println!("{:<18} {:<20} {:<6} spacing={}", set.id, set.name, set.layout.kind(), set.spacing);
    }
    Ok(())
}

/// `layouts`: the store's layouts, marking the one selected for display 1.
pub fn layouts(store: &LayoutStore) -> Result<()> {
    let selected = store.selected_zone_set(CLI_DISPLAY).map(|s| s.id);
    for set in store.layouts() {
        let mark = if selected.as_deref() == Some(set.id.as_str()) {
            "*"
        } else {
            " "
        };
        println!("{mark} {:<18} {:<20} {}", set.id, set.name, set.layout.kind());
    }
    Ok(())
}

/// `zones`: each zone in internal and global coordinates.
pub fn zones(store: &LayoutStore, args: &ZonesArgs) -> Result<()> {
    let set = resolve_layout(store, args.layout.as_deref())?;
    let screen = args.screen.screen();
    let zones = zones_for(&set, &args.screen);
    if zones.is_empty() {
        println!("{}: no zones", set.name);
        return Ok(());
    }
    println!("{} ({} zones)", set.name, zones.len());
    for z in &zones {
        let g = z.rect.to_global_top_left(&screen);
        println!(
            "  zone {:>2}  internal {}  global ({}, {}, {}, {})",
            z.id,
            fmt_rect(&z.rect),
            g.x,
            g.y,
            g.w,
            g.h
        );
    }
    Ok(())
}

/// `best`: the zone a window would snap to.
pub fn best(store: &LayoutStore, args: &BestArgs) -> Result<()> {
    let set = resolve_layout(store, args.layout.as_deref())?;
    let screen = args.screen.screen();
    let zones = zones_for(&set, &args.screen);
    let window = InternalRect::from_global_top_left(args.window, &screen);
    match best_zone(&window, &zones) {
        Some(z) => {
            let g = z.rect.to_global_top_left(&screen);
            println!("zone {} -> ({}, {}, {}, {})", z.id, g.x, g.y, g.w, g.h);
        }
        None => println!("{}: no zones", set.name),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layouts_resolve_by_id_name_or_preset() {
        let store = LayoutStore::new();
        assert_eq!(
            resolve_layout(&store, Some("Rows (2)")).expect("preset").id,
            "rows-2"
        );
        assert!(matches!(
            resolve_layout(&store, Some("nope")),
            Err(Error::UnknownLayout(_))
        ));

        let store = LayoutStore::with_defaults();
        assert_eq!(
            resolve_layout(&store, Some("grid-3x3")).expect("id").name,
            "Grid 3×3"
        );
        assert_eq!(resolve_layout(&store, None).expect("selected").id, "grid-2x2");
    }

    #[test]
    fn missing_store_file_uses_builtins() {
        let store = open_store(Some(Path::new("/nonexistent/zonetile/layouts.json")))
            .expect("defaults");
        assert_eq!(store.layouts().len(), tile_layout::presets().len());
    }
}
