use std::{io, path::PathBuf, result::Result as StdResult};

use ron::error::SpannedError;
use thiserror::Error;

/// Errors surfaced by snap operations and settings loading.
///
/// A failed snap never leaves partial state behind: the window is either moved
/// to the target frame or left untouched.
#[derive(Error, Debug)]
pub enum Error {
    /// The window accessor reports that accessibility permission is missing.
    #[error("Accessibility permission missing")]
    Permission,

    /// Neither a focused window nor a window under the pointer was found.
    #[error("No window to snap")]
    NoWindowTarget,

    /// The window's current frame could not be read.
    #[error("Window frame unavailable")]
    FrameUnavailable,

    /// No display contains the point or window in question.
    #[error("No display at location")]
    NoScreen,

    /// The display's layout produced no zones.
    #[error("Layout produced no zones for display {0}")]
    NoZones(u32),

    /// The accessor refused to set the window frame.
    #[error("Setting the window frame failed")]
    SetFrameFailed,

    /// Reading the settings file failed.
    #[error("settings I/O error at {path}: {source}")]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// The settings file is not valid RON.
    #[error("invalid settings: {0}")]
    Ron(#[from] SpannedError),
}

/// Result alias for snapping operations.
pub type Result<T> = StdResult<T, Error>;
