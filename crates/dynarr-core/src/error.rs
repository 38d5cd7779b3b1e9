//! Error types for dynarr containers.
//!
//! Only recoverable failures live here. Contract violations (indexing past
//! the live range, popping an empty array) panic instead.

use std::error::Error;
use std::fmt;

/// Errors reported by fallible buffer and array operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// Checked access at an index outside the live range.
    OutOfRange {
        /// The requested index.
        index: usize,
        /// Number of live elements at the time of the access.
        len: usize,
    },
    /// A backing buffer of the requested size could not be allocated.
    ///
    /// Also returned when the capacity arithmetic itself overflows.
    BadAlloc {
        /// Number of slots requested.
        requested: usize,
    },
}

impl ArrayError {
    /// Returns `true` for [`ArrayError::OutOfRange`].
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    /// Returns `true` for [`ArrayError::BadAlloc`].
    pub fn is_bad_alloc(&self) -> bool {
        matches!(self, Self::BadAlloc { .. })
    }
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::BadAlloc { requested } => {
                write!(f, "failed to allocate buffer of {requested} slots")
            }
        }
    }
}

impl Error for ArrayError {}
