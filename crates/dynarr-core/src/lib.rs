//! Core types for the dynarr workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the buffer and the array: the error taxonomy,
//! the capacity request used to reserve on construction, and the growth
//! policy arithmetic.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod capacity;
pub mod error;
pub mod growth;

pub use capacity::{reserve, CapacityRequest};
pub use error::ArrayError;
pub use growth::{grown_capacity, resized_capacity, GROWTH_FACTOR, MIN_GROWN_CAPACITY};
