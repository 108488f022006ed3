//! Which modifier keys drive snapping.

use std::fmt;

use crate::{Settings, input::ModifierFlags};

/// A configurable modifier key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierKey {
    /// Command (⌘).
    Command,
    /// Shift.
    Shift,
    /// Option (⌥).
    Option,
    /// Control.
    Control,
}

impl ModifierKey {
    /// Parse a persisted key name. Matching ignores case; anything
    /// unrecognised means Shift.
    pub fn from_persisted(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "command" => Self::Command,
            "option" => Self::Option,
            "control" => Self::Control,
            _ => Self::Shift,
        }
    }

    /// Canonical persisted name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Command => "Command",
            Self::Shift => "Shift",
            Self::Option => "Option",
            Self::Control => "Control",
        }
    }

    /// The flag this key sets in [`ModifierFlags`].
    pub fn flags(self) -> ModifierFlags {
        match self {
            Self::Command => ModifierFlags::COMMAND,
            Self::Shift => ModifierFlags::SHIFT,
            Self::Option => ModifierFlags::OPTION,
            Self::Control => ModifierFlags::CONTROL,
        }
    }

    /// Whether this key is held in `flags`.
    pub fn held(self, flags: ModifierFlags) -> bool {
        flags.contains(self.flags())
    }
}

impl fmt::Display for ModifierKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The snap and multi-zone modifier pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapKeyConfig {
    /// Held while dragging to show zones and snap on release.
    pub snap: ModifierKey,
    /// Additionally held to select several zones.
    pub multi_zone: ModifierKey,
}

impl Default for SnapKeyConfig {
    fn default() -> Self {
        Self {
            snap: ModifierKey::Shift,
            multi_zone: ModifierKey::Command,
        }
    }
}

impl SnapKeyConfig {
    /// Keys named in `settings`.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            snap: ModifierKey::from_persisted(&settings.snap_key),
            multi_zone: ModifierKey::from_persisted(&settings.multi_zone_key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persisted_names_ignore_case() {
        assert_eq!(ModifierKey::from_persisted("COMMAND"), ModifierKey::Command);
        assert_eq!(ModifierKey::from_persisted("option"), ModifierKey::Option);
        assert_eq!(ModifierKey::from_persisted("Control"), ModifierKey::Control);
        assert_eq!(ModifierKey::from_persisted("shift"), ModifierKey::Shift);
    }

    #[test]
    fn unknown_names_mean_shift() {
        assert_eq!(ModifierKey::from_persisted("Hyper"), ModifierKey::Shift);
        assert_eq!(ModifierKey::from_persisted(""), ModifierKey::Shift);
    }

    #[test]
    fn config_from_settings() {
        let s = Settings {
            snap_key: "option".into(),
            multi_zone_key: "bogus".into(),
            ..Settings::default()
        };
        let keys = SnapKeyConfig::from_settings(&s);
        assert_eq!(keys.snap, ModifierKey::Option);
        assert_eq!(keys.multi_zone, ModifierKey::Shift);
        assert_eq!(SnapKeyConfig::from_settings(&Settings::default()), SnapKeyConfig::default());
        assert!(keys.snap.held(ModifierFlags::OPTION | ModifierFlags::SHIFT));
        assert!(!keys.snap.held(ModifierFlags::SHIFT));
    }
}
