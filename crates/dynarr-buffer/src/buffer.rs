//! Single-owner contiguous slot storage.
//!
//! A [`Buffer`] is a fixed-length `Box<[T]>` whose slots are all
//! initialised (default-constructed or cloned) at allocation time. It never
//! grows in place: a larger buffer is a new allocation, and the old one is
//! released when its owner drops it or swaps it away.

use std::fmt;

use dynarr_core::ArrayError;
use log::{debug, trace};

/// A fixed-size, exclusively owned run of `T` slots.
///
/// Every slot always holds a valid `T`. Which slots are meaningful is up
/// to the owner; the buffer itself only allocates, exposes, swaps and
/// frees.
pub struct Buffer<T> {
    /// Backing storage. Length is the slot count and never changes.
    slots: Box<[T]>,
}

impl<T> Buffer<T> {
    /// Create a buffer with zero slots. Does not allocate.
    pub fn new() -> Self {
        Self {
            slots: Box::default(),
        }
    }

    /// Adopt the elements of `vec`, one slot per element.
    ///
    /// Any spare capacity of the vector is released.
    pub fn from_vec(vec: Vec<T>) -> Self {
        Self {
            slots: vec.into_boxed_slice(),
        }
    }

    /// Number of slots in the buffer.
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Shared view of every slot, starting at slot 0.
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// Mutable view of every slot, starting at slot 0.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }

    /// Exchange storage with `other` in O(1). Never fails.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.slots, &mut other.slots);
    }

    /// Heap footprint of the slots in bytes.
    pub fn memory_bytes(&self) -> usize {
        std::mem::size_of_val(&*self.slots)
    }

    /// Release the slots as a `Vec<T>` of the same length.
    pub fn into_vec(self) -> Vec<T> {
        self.slots.into_vec()
    }

    /// Reserve storage for exactly `len` elements, reporting refusal as
    /// [`ArrayError::BadAlloc`].
    fn try_storage(len: usize) -> Result<Vec<T>, ArrayError> {
        let mut storage = Vec::new();
        if let Err(err) = storage.try_reserve_exact(len) {
            debug!("buffer allocation of {len} slots refused: {err}");
            return Err(ArrayError::BadAlloc { requested: len });
        }
        trace!(
            "allocated buffer of {len} slots ({} bytes)",
            len.saturating_mul(std::mem::size_of::<T>())
        );
        Ok(storage)
    }
}

impl<T: Default> Buffer<T> {
    /// Allocate `len` default-constructed slots.
    ///
    /// Returns [`ArrayError::BadAlloc`] if the allocation cannot be
    /// satisfied, including when `len * size_of::<T>()` overflows.
    pub fn allocate(len: usize) -> Result<Self, ArrayError> {
        let mut storage = Self::try_storage(len)?;
        storage.resize_with(len, T::default);
        Ok(Self::from_vec(storage))
    }
}

impl<T: Clone> Buffer<T> {
    /// Allocate `len` slots, each a clone of `value`.
    pub fn filled(len: usize, value: &T) -> Result<Self, ArrayError> {
        let mut storage = Self::try_storage(len)?;
        storage.resize(len, value.clone());
        Ok(Self::from_vec(storage))
    }

    /// Allocate one slot per element of `items`, cloned in order.
    pub fn from_slice(items: &[T]) -> Result<Self, ArrayError> {
        let mut storage = Self::try_storage(items.len())?;
        storage.extend_from_slice(items);
        Ok(Self::from_vec(storage))
    }
}

impl<T> Default for Buffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Buffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("size", &self.size())
            .field("slots", &self.slots)
            .finish()
    }
}
