//! Growth policy for dynamic arrays.
//!
//! The policy is fixed: a full array doubles, an empty one grows to a
//! single slot, and `resize` past capacity takes whichever is larger of the
//! requested length and double the current capacity.

use crate::error::ArrayError;

/// Multiplier applied to the current capacity when an append or insert
/// finds the array full.
pub const GROWTH_FACTOR: usize = 2;

/// Capacity an empty array grows to on its first append.
pub const MIN_GROWN_CAPACITY: usize = 1;

/// Capacity to grow to when an array of `capacity` slots is full.
///
/// Returns `max(MIN_GROWN_CAPACITY, GROWTH_FACTOR * capacity)`, saturating
/// at `usize::MAX`. Fails with [`ArrayError::BadAlloc`] when no larger
/// capacity exists.
pub fn grown_capacity(capacity: usize) -> Result<usize, ArrayError> {
    if capacity == usize::MAX {
        return Err(ArrayError::BadAlloc {
            requested: capacity,
        });
    }
    Ok(capacity
        .saturating_mul(GROWTH_FACTOR)
        .max(MIN_GROWN_CAPACITY))
}

/// Capacity to reserve when a resize to `required` elements overflows
/// `capacity`.
///
/// Returns `max(required, GROWTH_FACTOR * capacity)`, saturating at
/// `usize::MAX` so the allocator reports the failure instead of wrapping.
pub fn resized_capacity(capacity: usize, required: usize) -> usize {
    required.max(capacity.saturating_mul(GROWTH_FACTOR))
}
