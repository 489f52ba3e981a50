//! # Error Module - Failure Kinds for the Simulator
//!
//! All recoverable failures funnel into [`SimError`]. Initialisation
//! errors (bad configuration, unreadable input files, malformed tables)
//! abort before any simulation step runs; the binary prints the error on
//! a single line prefixed with `Error:` and exits with a non-zero status.
//!
//! Runtime invariant violations (an individual outside the box, an index
//! outside its population range) are programmer errors and are checked
//! with `debug_assert!` at the call sites rather than surfaced here.

use std::path::PathBuf;
use thiserror::Error;

/// Error type covering every failure the simulator can report.
#[derive(Debug, Error)]
pub enum SimError {
    /// Missing or unusable configuration, detected before the run starts.
    #[error("{0}")]
    Config(String),

    /// A required file could not be opened or created.
    #[error("cannot open {}: {source}", path.display())]
    Resource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed numeric input that the lenient scanner cannot tolerate,
    /// such as a table cell landing outside the declared shape.
    #[error("{0}")]
    Format(String),

    /// I/O failure while reading a source or streaming observations.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
