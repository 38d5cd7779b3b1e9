//! dynarr: a growable array over one owned allocation, with explicit
//! capacity control.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the dynarr sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use dynarr::prelude::*;
//!
//! let mut arr = DynamicArray::new();
//! arr.push_back(1).unwrap();
//! arr.push_back(2).unwrap();
//! arr.push_back(3).unwrap();
//!
//! arr.insert(1, 9).unwrap();
//! assert_eq!(arr, [1, 9, 2, 3]);
//!
//! arr.erase(2);
//! arr.resize(5).unwrap();
//! assert_eq!(arr, dynarr![1, 9, 3, 0, 0]);
//!
//! // Checked access reports instead of panicking.
//! assert!(matches!(arr.at(5), Err(ArrayError::OutOfRange { index: 5, len: 5 })));
//!
//! // Reserve on construction.
//! let pre: DynamicArray<u8> = DynamicArray::with_capacity(reserve(64)).unwrap();
//! assert_eq!((pre.len(), pre.capacity()), (0, 64));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `dynarr-core` | `ArrayError`, `CapacityRequest`, growth policy |
//! | [`buffer`] | `dynarr-buffer` | `Buffer`, the owned slot storage |
//! | [`array`] | `dynarr-array` | `DynamicArray` and its iterators |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Errors, capacity requests and growth policy (`dynarr-core`).
pub use dynarr_core as types;

/// Owned slot storage backing every array (`dynarr-buffer`).
pub use dynarr_buffer as buffer;

/// The growable array itself (`dynarr-array`).
pub use dynarr_array as array;

pub use dynarr_array::dynarr;

/// Common imports for typical dynarr usage.
///
/// ```rust
/// use dynarr::prelude::*;
/// ```
pub mod prelude {
    pub use dynarr_array::{dynarr, DynamicArray};
    pub use dynarr_core::{reserve, ArrayError, CapacityRequest};
}
