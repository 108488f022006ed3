use std::{io, path::PathBuf, result::Result as StdResult};

use thiserror::Error;

/// Errors raised by layout storage and decoding.
///
/// Zone geometry never fails with an error; invalid layouts produce an empty
/// zone list instead.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading or writing the layout file failed.
    #[error("layout store I/O error at {path}: {source}")]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The layout file is not valid JSON for a list of zone sets.
    #[error("invalid layout JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A zone set's `type` names a payload that is absent.
    #[error("zone set {id:?} has type {kind} but no {kind} payload")]
    MissingPayload {
        /// Offending zone set id.
        id: String,
        /// Declared layout type.
        kind: &'static str,
    },

    /// No layout with the given id exists in the store.
    #[error("unknown layout id {0:?}")]
    UnknownLayout(String),
}

/// Result alias for layout operations.
pub type Result<T> = StdResult<T, Error>;
