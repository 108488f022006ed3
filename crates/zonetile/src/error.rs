//! Error handling for the zonetile binary.

use std::{io, path::PathBuf, result};

use ron::error::SpannedError;
use thiserror::Error;

/// Convenient result type for zonetile commands.
pub type Result<T> = result::Result<T, Error>;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum Error {
    /// Layout model, engine or store failure.
    #[error("Layout error: {0}")]
    Layout(#[from] tile_layout::Error),
    /// Settings or snapping failure.
    #[error("Snap error: {0}")]
    Snap(#[from] tile_snap::Error),
    /// Failed to read a file named on the command line.
    #[error("Cannot read {path}: {source}")]
    Read {
        /// File being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
    /// A replay script is not valid RON.
    #[error("Invalid replay script: {0}")]
    Script(#[from] SpannedError),
    /// JSON output could not be produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// No layout matched the requested id or name.
    #[error("No layout named {0:?}")]
    UnknownLayout(String),
}
