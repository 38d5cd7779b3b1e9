//! Owned slot storage for dynarr.
//!
//! A [`Buffer`] is one contiguous heap allocation of default-constructed
//! slots, owned by exactly one value at a time. It knows nothing about
//! which slots are live; that bookkeeping belongs to the array built on
//! top of it.
//!
//! All storage is `Box<[T]>` with every slot initialised. No
//! `MaybeUninit`, no `unsafe`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;

pub use buffer::Buffer;
