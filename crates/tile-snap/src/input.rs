//! Pointer and modifier events fed to the drag controller.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use tile_geom::Point;

bitflags! {
    /// Modifier keys held during an event. Bit values match the host's
    /// event flag mask so raw flags can be passed straight through.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct ModifierFlags: u64 {
        /// Shift.
        const SHIFT = 1 << 17;
        /// Control.
        const CONTROL = 1 << 18;
        /// Option.
        const OPTION = 1 << 19;
        /// Command.
        const COMMAND = 1 << 20;
    }
}

/// A global input event. Locations are bottom-left desktop coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Left button pressed.
    PointerDown {
        /// Pointer location.
        location: Point,
        /// Modifiers held at the time.
        modifiers: ModifierFlags,
    },
    /// Pointer moved with the left button held.
    PointerDragged {
        /// Pointer location.
        location: Point,
        /// Modifiers held at the time.
        modifiers: ModifierFlags,
    },
    /// Left button released.
    PointerUp {
        /// Pointer location.
        location: Point,
        /// Modifiers held at the time.
        modifiers: ModifierFlags,
    },
    /// Modifier state changed without pointer movement.
    FlagsChanged {
        /// Modifiers now held.
        modifiers: ModifierFlags,
    },
}

impl InputEvent {
    /// Modifiers carried by the event.
    pub fn modifiers(&self) -> ModifierFlags {
        match *self {
            Self::PointerDown { modifiers, .. }
            | Self::PointerDragged { modifiers, .. }
            | Self::PointerUp { modifiers, .. }
            | Self::FlagsChanged { modifiers } => modifiers,
        }
    }

    /// Pointer location, if the event has one.
    pub fn location(&self) -> Option<Point> {
        match *self {
            Self::PointerDown { location, .. }
            | Self::PointerDragged { location, .. }
            | Self::PointerUp { location, .. } => Some(location),
            Self::FlagsChanged { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_round_trip_through_ron() {
        let ev = InputEvent::PointerDragged {
            location: Point::new(10.0, 20.0),
            modifiers: ModifierFlags::SHIFT | ModifierFlags::COMMAND,
        };
        let text = ron::to_string(&ev).expect("serialize");
        let back: InputEvent = ron::from_str(&text).expect("parse");
        assert_eq!(back, ev);
        assert_eq!(back.location(), Some(Point::new(10.0, 20.0)));
        assert!(back.modifiers().contains(ModifierFlags::COMMAND));
    }

    #[test]
    fn flags_keep_host_bits() {
        assert_eq!(ModifierFlags::SHIFT.bits(), 0x2_0000);
        assert_eq!(ModifierFlags::COMMAND.bits(), 0x10_0000);
        let raw = ModifierFlags::from_bits_truncate(0x10_0000 | 0x100);
        assert_eq!(raw, ModifierFlags::COMMAND);
    }
}
