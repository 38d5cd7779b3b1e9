//! Test fixtures for dynarr development.
//!
//! Element types that record how the container treats them:
//!
//! - [`CloneCounter`] / [`Tracked`] — counts clones, so tests can tell a
//!   move-based reallocation from a copying one.
//! - [`DropCounter`] / [`DropTracked`] — counts drops, so tests can check
//!   that a buffer releases each slot exactly once.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{ascending, CloneCounter, DropCounter, DropTracked, Tracked};
