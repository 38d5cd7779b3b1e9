//! A growable array over a single owned [`Buffer`](dynarr_buffer::Buffer).
//!
//! [`DynamicArray`] keeps a live prefix `[0, len)` of its buffer and grows
//! by doubling when an append or insert finds it full. Growth allocates the
//! new buffer before touching any state, so a failed allocation
//! ([`ArrayError::BadAlloc`]) leaves the array exactly as it was.
//!
//! # Layout
//!
//! ```text
//! DynamicArray<T>
//! ├── Buffer<T>   capacity slots, all initialised
//! │   ├── [0, len)          live elements
//! │   └── [len, capacity)   stale or default values, never exposed
//! └── len
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
mod impls;
pub mod iter;
mod macros;

pub use array::DynamicArray;
pub use dynarr_core::{reserve, ArrayError, CapacityRequest};
pub use iter::IntoIter;
