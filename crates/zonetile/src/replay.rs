//! Replay a scripted drag session against recording doubles.

use std::{fs, sync::Arc};

use serde::Deserialize;
use tile_geom::Rect;
use tile_layout::LayoutStore;
use tile_snap::{
    Display, DragSnapController, InputEvent, Outcome, Settings, SnapKeyConfig, StaticDisplays,
    WindowId,
    test_support::{MockOverlay, MockWindowAccessor},
};
use tracing::info;

use crate::{
    cli::ReplayArgs,
    error::{Error, Result},
    inspect::CLI_DISPLAY,
};

/// One scripted action.
#[derive(Debug, Clone, Deserialize)]
pub enum Step {
    /// Feed an input event to the controller.
    Event(InputEvent),
    /// Move a window as the host would while the user drags it.
    MoveWindow(WindowId, Rect),
}

/// A replay script.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    /// Displays, primary first. Empty means the screen from the command line.
    #[serde(default)]
    pub displays: Vec<Display>,
    /// Window with keyboard focus.
    #[serde(default)]
    pub focused: Option<WindowId>,
    /// Windows in global top-left coordinates, bottom-most first.
    #[serde(default)]
    pub windows: Vec<(WindowId, Rect)>,
    /// Actions in order.
    pub steps: Vec<Step>,
}

impl Script {
    /// Parse a script from RON text.
    pub fn from_ron(text: &str) -> Result<Self> {
        Ok(ron::from_str(text)?)
    }
}

/// What a replay did.
#[derive(Debug)]
pub struct Report {
    /// Controller outcome for each `Event` step.
    pub outcomes: Vec<Outcome>,
    /// Frames applied to windows, in order.
    pub set_frames: Vec<(WindowId, Rect)>,
    /// Calls made on the overlay, in order.
    pub overlay_calls: Vec<String>,
}

/// Run `script` through a fresh controller.
pub fn replay(script: &Script, store: LayoutStore, settings: &Settings, fallback: Display) -> Report {
    let accessor = MockWindowAccessor::new();
    accessor.set_windows(script.windows.clone());
    accessor.set_focused(script.focused);
    let overlay = MockOverlay::new();
    let displays = if script.displays.is_empty() {
        StaticDisplays::new(vec![fallback])
    } else {
        StaticDisplays::new(script.displays.clone())
    };

    let mut ctl = DragSnapController::new(
        Arc::new(accessor.clone()),
        Arc::new(overlay.clone()),
        Arc::new(displays),
        Arc::new(store),
    )
    .with_keys(SnapKeyConfig::from_settings(settings))
    .with_drag_threshold(settings.drag_threshold);

    let mut outcomes = Vec::new();
    for step in &script.steps {
        match *step {
            Step::Event(ev) => outcomes.push(ctl.handle_event(ev)),
            Step::MoveWindow(id, frame) => accessor.move_window(id, frame),
        }
    }
    ctl.stop();

    Report {
        outcomes,
        set_frames: accessor.set_frames(),
        overlay_calls: overlay.calls(),
    }
}

/// `replay`: run a script file and print what happened.
pub fn run(store: LayoutStore, settings: &Settings, args: &ReplayArgs) -> Result<()> {
    let text = fs::read_to_string(&args.script).map_err(|source| Error::Read {
        path: args.script.clone(),
        source,
    })?;
    let script = Script::from_ron(&text)?;
    info!(steps = script.steps.len(), "replaying");
    let fallback = Display::new(CLI_DISPLAY, args.screen.screen());
    let report = replay(&script, store, settings, fallback);

    for (i, outcome) in report.outcomes.iter().enumerate() {
        println!("{i:>3}: {outcome:?}");
    }
    println!("overlay: {}", report.overlay_calls.join(" "));
    if report.set_frames.is_empty() {
        println!("no window moved");
    }
    for (id, f) in &report.set_frames {
        println!("window {id} -> ({}, {}, {}, {})", f.x, f.y, f.w, f.h);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tile_geom::Screen;

    use super::*;

    const DRAG: &str = include_str!("../scripts/drag.ron");

    fn fallback() -> Display {
        Display::new(
            CLI_DISPLAY,
            Screen::primary(
                Rect::new(0.0, 0.0, 1000.0, 800.0),
                Rect::new(0.0, 0.0, 1000.0, 800.0),
            ),
        )
    }

    #[test]
    fn bundled_script_snaps_across_top_row() {
        let script = Script::from_ron(DRAG).expect("script parses");
        let report = replay(
            &script,
            LayoutStore::with_defaults(),
            &Settings::default(),
            fallback(),
        );
        assert_eq!(report.outcomes.len(), 4);
        assert!(matches!(report.outcomes[0], Outcome::Armed));
        assert!(matches!(report.outcomes[1], Outcome::DragStarted));
        assert_eq!(
            report.set_frames,
            vec![(1, Rect::new(12.0, 12.0, 976.0, 382.0))]
        );
        assert_eq!(report.overlay_calls.first().map(String::as_str), Some("show"));
        assert_eq!(report.overlay_calls.last().map(String::as_str), Some("hide"));
    }

    #[test]
    fn other_snap_key_ignores_script() {
        let script = Script::from_ron(DRAG).expect("script parses");
        let settings = Settings {
            snap_key: "Control".into(),
            ..Settings::default()
        };
        let report = replay(&script, LayoutStore::with_defaults(), &settings, fallback());
        assert!(report.set_frames.is_empty());
        assert!(report.overlay_calls.is_empty());
    }

    #[test]
    fn unknown_script_fields_are_rejected() {
        assert!(matches!(
            Script::from_ron("(steps: [], extra: 1)"),
            Err(Error::Script(_))
        ));
    }
}
