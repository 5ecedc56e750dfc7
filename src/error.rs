//! Error type for malformed search inputs.
//!
//! Only structurally malformed inputs are reported: window bounds that do not describe a
//! sub-range of the base slice, output buffers that do not line up with the keys, and backend
//! names that do not parse. An unsorted range or an ill-behaved comparator is not an error, the
//! result is merely unspecified.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// `[first, last)` is not a valid window into a slice of length `len`.
    InvalidBounds {
        /// Requested start of the window.
        first: usize,
        /// Requested end of the window.
        last: usize,
        /// Length of the slice the window was taken from.
        len: usize,
    },

    /// A batched search was handed an output buffer that is not exactly one slot per key.
    LengthMismatch {
        /// Number of keys.
        keys: usize,
        /// Number of output slots.
        out: usize,
    },

    /// Backend name that does not match any known backend.
    UnknownBackend(String),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidBounds { first, last, len } => {
                write!(
                    f,
                    "Invalid bounds: [{first}, {last}) is not a window into a slice of length {len}"
                )
            }
            Self::LengthMismatch { keys, out } => {
                write!(f, "Length mismatch: {keys} keys but {out} output slots")
            }
            Self::UnknownBackend(name) => write!(
                f,
                "Unknown backend: '{name}' (expected sequential, multi_threaded or accelerator)"
            ),
        }
    }
}

impl Error for SearchError {}
