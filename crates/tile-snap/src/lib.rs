//! tile-snap: drag windows into layout zones.
//!
//! The host supplies four collaborators: a [`WindowAccessor`] that reads and
//! moves windows, an [`Overlay`] that draws zones, a [`Displays`] source and a
//! [`ZoneSetProvider`] naming each display's layout. [`DragSnapController`]
//! consumes [`InputEvent`]s and drives them; [`snap_focused_window`] does a
//! one-shot snap of the focused window.
//!
//! Coordinates follow the host: input events carry bottom-left desktop
//! points, window frames are global top-left, and zones live in each screen's
//! internal space (see [`tile_geom`]).

mod accessor;
mod display;
mod drag;
mod error;
mod input;
mod keys;
mod overlay;
mod provider;
mod settings;
mod snap_now;

/// Recording doubles for the host traits, for tests and replay.
pub mod test_support;

pub use accessor::{WindowAccessor, WindowId};
pub use display::{Display, Displays, StaticDisplays};
pub use drag::{DragSnapController, Outcome, Phase};
pub use error::{Error, Result};
pub use input::{InputEvent, ModifierFlags};
pub use keys::{ModifierKey, SnapKeyConfig};
pub use overlay::Overlay;
pub use provider::ZoneSetProvider;
pub use settings::{DEFAULT_DRAG_THRESHOLD, Settings};
pub use snap_now::snap_focused_window;
