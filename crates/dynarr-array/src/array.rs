//! The [`DynamicArray`] container.

use std::mem;

use dynarr_buffer::Buffer;
use dynarr_core::{grown_capacity, resized_capacity, ArrayError, CapacityRequest};
use log::trace;

/// A growable, contiguous sequence backed by one owned [`Buffer`].
///
/// The buffer's slot count is the array's capacity. Slots past `len()` keep
/// whatever value they last held (or their default) and are never exposed.
///
/// Operations that may allocate return `Result<_, ArrayError>`; on
/// [`ArrayError::BadAlloc`] nothing about the array has changed. Index
/// preconditions (`insert` past `len`, `erase` at or past `len`, `pop_back`
/// on empty) are contract violations and panic.
pub struct DynamicArray<T> {
    buffer: Buffer<T>,
    /// Number of live elements. Always `<= buffer.size()`.
    size: usize,
}

impl<T> DynamicArray<T> {
    /// Create an empty array. Does not allocate.
    pub fn new() -> Self {
        Self {
            buffer: Buffer::new(),
            size: 0,
        }
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.size()
    }

    /// Returns `true` if there are no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buffer.as_slice()[..self.size]
    }

    /// The live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buffer.as_mut_slice()[..self.size]
    }

    /// Checked access to the element at `index`.
    ///
    /// Fails with [`ArrayError::OutOfRange`] when `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        let len = self.size;
        self.as_slice()
            .get(index)
            .ok_or(ArrayError::OutOfRange { index, len })
    }

    /// Checked mutable access to the element at `index`.
    ///
    /// Fails with [`ArrayError::OutOfRange`] when `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        let len = self.size;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(ArrayError::OutOfRange { index, len })
    }

    /// Iterate over the live elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterate mutably over the live elements.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Forget every live element. Capacity and slot contents are kept, to
    /// be overwritten by later appends.
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Remove the last element from the live range.
    ///
    /// The value stays in its slot until overwritten.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn pop_back(&mut self) {
        assert!(!self.is_empty(), "pop_back on an empty DynamicArray");
        self.size -= 1;
    }

    /// Remove the element at `index`, shifting everything after it one slot
    /// to the left.
    ///
    /// Returns the index of the element that now occupies `index`, which is
    /// `len()` when the last element was removed. The removed value moves
    /// to the first stale slot.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn erase(&mut self, index: usize) -> usize {
        assert!(
            index < self.size,
            "erase index {index} out of range for length {}",
            self.size
        );
        self.buffer.as_mut_slice()[index..self.size].rotate_left(1);
        self.size -= 1;
        index
    }

    /// Exchange contents with `other` in O(1). Never fails.
    pub fn swap(&mut self, other: &mut Self) {
        self.buffer.swap(&mut other.buffer);
        mem::swap(&mut self.size, &mut other.size);
    }

    /// Move the contents out, leaving `self` empty with no allocation.
    pub fn take(&mut self) -> Self {
        let mut taken = Self::new();
        self.swap(&mut taken);
        taken
    }

    /// Move-assign from `source`, leaving it empty.
    ///
    /// The previous contents of `self` are released.
    pub fn assign_take(&mut self, source: &mut Self) {
        let mut incoming = source.take();
        self.swap(&mut incoming);
    }

    /// Consume the array, keeping only the live elements.
    pub(crate) fn into_live_vec(self) -> Vec<T> {
        let mut slots = self.buffer.into_vec();
        slots.truncate(self.size);
        slots
    }

    /// Adopt every element of `vec` as live; capacity equals `vec.len()`.
    pub(crate) fn from_live_vec(vec: Vec<T>) -> Self {
        let size = vec.len();
        Self {
            buffer: Buffer::from_vec(vec),
            size,
        }
    }
}

impl<T: Default> DynamicArray<T> {
    /// Create an empty array with exactly `request.capacity()` slots.
    pub fn with_capacity(request: CapacityRequest) -> Result<Self, ArrayError> {
        let mut array = Self::new();
        array.reserve(request.capacity())?;
        Ok(array)
    }

    /// Create an array of `len` default-constructed elements.
    ///
    /// Length and capacity are both `len`.
    pub fn with_len(len: usize) -> Result<Self, ArrayError> {
        Ok(Self {
            buffer: Buffer::allocate(len)?,
            size: len,
        })
    }

    /// Make room for at least `new_capacity` elements.
    ///
    /// When `new_capacity` exceeds the current capacity, a buffer of exactly
    /// `new_capacity` slots is allocated and the live elements are moved
    /// into it in order. Never shrinks; never changes `len()` or the live
    /// values.
    pub fn reserve(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        let capacity = self.capacity();
        if new_capacity <= capacity {
            return Ok(());
        }

        let mut grown = Buffer::allocate(new_capacity)?;
        let live = self.size;
        grown.as_mut_slice()[..live].swap_with_slice(&mut self.buffer.as_mut_slice()[..live]);
        self.buffer.swap(&mut grown);
        trace!("reallocated DynamicArray: capacity {capacity} -> {new_capacity}, {live} live");
        Ok(())
    }

    /// Set the length to `new_len`.
    ///
    /// Growing past capacity reserves `max(new_len, 2 * capacity)` first.
    /// Newly exposed elements are reset to `T::default()`; shrinking only
    /// moves the end of the live range.
    pub fn resize(&mut self, new_len: usize) -> Result<(), ArrayError> {
        let capacity = self.capacity();
        if new_len > capacity {
            self.reserve(resized_capacity(capacity, new_len))?;
        }
        if new_len > self.size {
            self.buffer.as_mut_slice()[self.size..new_len].fill_with(T::default);
        }
        self.size = new_len;
        Ok(())
    }

    /// Append `value`, doubling capacity (or growing to one slot) when full.
    pub fn push_back(&mut self, value: T) -> Result<(), ArrayError> {
        self.grow_if_full()?;
        self.buffer.as_mut_slice()[self.size] = value;
        self.size += 1;
        Ok(())
    }

    /// Insert `value` at `index`, shifting the elements at and after it one
    /// slot to the right. `index == len()` appends.
    ///
    /// Returns the index of the inserted element.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<usize, ArrayError> {
        assert!(
            index <= self.size,
            "insert index {index} out of range for length {}",
            self.size
        );
        self.grow_if_full()?;
        let slots = self.buffer.as_mut_slice();
        slots[index..=self.size].rotate_right(1);
        slots[index] = value;
        self.size += 1;
        Ok(index)
    }

    fn grow_if_full(&mut self) -> Result<(), ArrayError> {
        if self.size == self.capacity() {
            self.reserve(grown_capacity(self.capacity())?)?;
        }
        Ok(())
    }
}

impl<T: Clone> DynamicArray<T> {
    /// Create an array of `len` clones of `value`.
    ///
    /// Length and capacity are both `len`.
    pub fn filled(len: usize, value: T) -> Result<Self, ArrayError> {
        Ok(Self {
            buffer: Buffer::filled(len, &value)?,
            size: len,
        })
    }

    /// Create an array holding clones of `items`, in order.
    ///
    /// Length and capacity are both `items.len()`.
    pub fn from_slice(items: &[T]) -> Result<Self, ArrayError> {
        Ok(Self {
            buffer: Buffer::from_slice(items)?,
            size: items.len(),
        })
    }

    /// Deep copy of the live elements into a buffer of exactly `len()`
    /// slots. Spare capacity is not carried over.
    pub fn try_clone(&self) -> Result<Self, ArrayError> {
        Self::from_slice(self.as_slice())
    }

    /// Copy-assign from `source`.
    ///
    /// The copy is built before `self` is touched, so on
    /// [`ArrayError::BadAlloc`] `self` keeps its previous contents.
    pub fn try_assign_from(&mut self, source: &Self) -> Result<(), ArrayError> {
        let mut copy = source.try_clone()?;
        self.swap(&mut copy);
        Ok(())
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    /// Same semantics as [`DynamicArray::try_clone`]; allocation failure
    /// goes to the global allocation error handler.
    fn clone(&self) -> Self {
        Self::from_live_vec(self.as_slice().to_vec())
    }

    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dynarr_core::reserve;
    use dynarr_test_utils::{CloneCounter, DropCounter, DropTracked};

    #[test]
    fn new_array_is_empty_without_allocation() {
        let arr: DynamicArray<i32> = DynamicArray::new();
        assert_eq!(arr.len(), 0);
        assert_eq!(arr.capacity(), 0);
        assert!(arr.is_empty());
    }

    #[test]
    fn with_capacity_reserves_without_length() {
        let arr: DynamicArray<i32> = DynamicArray::with_capacity(reserve(10)).unwrap();
        assert_eq!(arr.len(), 0);
        assert_eq!(arr.capacity(), 10);
    }

    #[test]
    fn with_len_default_constructs() {
        let arr: DynamicArray<String> = DynamicArray::with_len(3).unwrap();
        assert_eq!(arr.len(), 3);
        assert_eq!(arr.capacity(), 3);
        assert!(arr.iter().all(String::is_empty));
    }

    #[test]
    fn filled_clones_value() {
        let arr = DynamicArray::filled(4, 7u8).unwrap();
        assert_eq!(arr.as_slice(), [7, 7, 7, 7]);
        assert_eq!(arr.capacity(), 4);
    }

    #[test]
    fn from_slice_sets_len_and_capacity() {
        let arr = DynamicArray::from_slice(&[1, 2, 3]).unwrap();
        assert_eq!(arr.as_slice(), [1, 2, 3]);
        assert_eq!(arr.len(), 3);
        assert_eq!(arr.capacity(), 3);
    }

    #[test]
    fn at_checks_bounds() {
        let arr = DynamicArray::from_slice(&[10, 20]).unwrap();
        assert_eq!(arr.at(1), Ok(&20));
        assert_eq!(
            arr.at(2),
            Err(ArrayError::OutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn at_ignores_stale_slots() {
        let mut arr = DynamicArray::from_slice(&[1, 2, 3]).unwrap();
        arr.pop_back();
        assert_eq!(arr.capacity(), 3);
        assert!(arr.at(2).unwrap_err().is_out_of_range());
    }

    #[test]
    fn at_mut_writes_through() {
        let mut arr = DynamicArray::from_slice(&[1, 2]).unwrap();
        *arr.at_mut(0).unwrap() = 5;
        assert_eq!(arr.as_slice(), [5, 2]);
        assert!(arr.at_mut(9).is_err());
    }

    #[test]
    fn push_back_doubles_capacity() {
        let mut arr = DynamicArray::new();
        let mut capacities = Vec::new();
        for i in 0..9 {
            arr.push_back(i).unwrap();
            capacities.push(arr.capacity());
        }
        assert_eq!(capacities, [1, 2, 4, 4, 8, 8, 8, 8, 16]);
        assert_eq!(arr.as_slice(), [0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn push_back_reuses_cleared_slots() {
        let mut arr = DynamicArray::from_slice(&[1, 2, 3]).unwrap();
        arr.clear();
        assert!(arr.is_empty());
        assert_eq!(arr.capacity(), 3);
        arr.push_back(9).unwrap();
        assert_eq!(arr.as_slice(), [9]);
        assert_eq!(arr.capacity(), 3);
    }

    #[test]
    fn pop_back_shrinks_len_only() {
        let mut arr = DynamicArray::from_slice(&[1, 2, 3]).unwrap();
        arr.pop_back();
        assert_eq!(arr.as_slice(), [1, 2]);
        assert_eq!(arr.capacity(), 3);
    }

    #[test]
    #[should_panic(expected = "pop_back on an empty DynamicArray")]
    fn pop_back_on_empty_panics() {
        let mut arr: DynamicArray<i32> = DynamicArray::new();
        arr.pop_back();
    }

    #[test]
    fn reserve_grows_to_exact_request() {
        let mut arr = DynamicArray::from_slice(&[1, 2]).unwrap();
        arr.reserve(7).unwrap();
        assert_eq!(arr.capacity(), 7);
        assert_eq!(arr.as_slice(), [1, 2]);
    }

    #[test]
    fn reserve_never_shrinks() {
        let mut arr: DynamicArray<i32> = DynamicArray::with_capacity(reserve(8)).unwrap();
        arr.reserve(2).unwrap();
        assert_eq!(arr.capacity(), 8);
    }

    #[test]
    fn reserve_moves_instead_of_cloning() {
        let counter = CloneCounter::new();
        let mut arr = DynamicArray::new();
        for i in 0..20 {
            arr.push_back(counter.track(i)).unwrap();
        }
        arr.reserve(100).unwrap();
        assert_eq!(counter.clones(), 0);
        assert_eq!(arr.len(), 20);
        assert_eq!(arr[19].value, 19);
    }

    #[test]
    fn failed_reserve_leaves_array_untouched() {
        let mut arr = DynamicArray::from_slice(&[1u64, 2, 3]).unwrap();
        let err = arr.reserve(usize::MAX).unwrap_err();
        assert_eq!(
            err,
            ArrayError::BadAlloc {
                requested: usize::MAX
            }
        );
        assert_eq!(arr.as_slice(), [1, 2, 3]);
        assert_eq!(arr.capacity(), 3);
    }

    #[test]
    fn failed_resize_leaves_array_untouched() {
        let mut arr = DynamicArray::from_slice(&[4u64, 5]).unwrap();
        assert!(arr.resize(usize::MAX).unwrap_err().is_bad_alloc());
        assert_eq!(arr.as_slice(), [4, 5]);
        assert_eq!(arr.capacity(), 2);
    }

    #[test]
    fn resize_within_capacity_resets_exposed_slots() {
        let mut arr = DynamicArray::from_slice(&[1, 2, 3, 4]).unwrap();
        arr.resize(1).unwrap();
        assert_eq!(arr.as_slice(), [1]);
        arr.resize(3).unwrap();
        assert_eq!(arr.as_slice(), [1, 0, 0]);
        assert_eq!(arr.capacity(), 4);
    }

    #[test]
    fn resize_past_capacity_takes_larger_of_double_and_request() {
        let mut arr = DynamicArray::from_slice(&[1, 2, 3]).unwrap();
        arr.resize(4).unwrap();
        assert_eq!(arr.capacity(), 6);
        arr.resize(20).unwrap();
        assert_eq!(arr.capacity(), 20);
        assert_eq!(arr.len(), 20);
    }

    #[test]
    fn insert_shifts_right() {
        let mut arr = DynamicArray::from_slice(&[1, 2, 3]).unwrap();
        assert_eq!(arr.insert(1, 9).unwrap(), 1);
        assert_eq!(arr.as_slice(), [1, 9, 2, 3]);
        assert_eq!(arr.capacity(), 6);
    }

    #[test]
    fn insert_at_end_appends() {
        let mut arr = DynamicArray::from_slice(&[1, 2]).unwrap();
        arr.reserve(4).unwrap();
        assert_eq!(arr.insert(2, 3).unwrap(), 2);
        assert_eq!(arr.as_slice(), [1, 2, 3]);
        assert_eq!(arr.capacity(), 4);
    }

    #[test]
    fn insert_into_empty_grows_to_one() {
        let mut arr = DynamicArray::new();
        arr.insert(0, 'a').unwrap();
        assert_eq!(arr.as_slice(), ['a']);
        assert_eq!(arr.capacity(), 1);
    }

    #[test]
    #[should_panic(expected = "insert index 3 out of range for length 2")]
    fn insert_past_end_panics() {
        let mut arr = DynamicArray::from_slice(&[1, 2]).unwrap();
        let _ = arr.insert(3, 0);
    }

    #[test]
    fn erase_shifts_left_and_returns_position() {
        let mut arr = DynamicArray::from_slice(&[1, 9, 2, 3]).unwrap();
        assert_eq!(arr.erase(2), 2);
        assert_eq!(arr.as_slice(), [1, 9, 3]);
        assert_eq!(arr.erase(2), 2);
        assert_eq!(arr.len(), 2);
        assert_eq!(arr.capacity(), 4);
    }

    #[test]
    #[should_panic(expected = "erase index 2 out of range for length 2")]
    fn erase_at_end_panics() {
        let mut arr = DynamicArray::from_slice(&[1, 2]).unwrap();
        arr.erase(2);
    }

    #[test]
    fn swap_exchanges_everything() {
        let mut a = DynamicArray::from_slice(&[1, 2, 3]).unwrap();
        let mut b = DynamicArray::with_capacity(reserve(10)).unwrap();
        b.push_back(7).unwrap();
        a.swap(&mut b);
        assert_eq!(a.as_slice(), [7]);
        assert_eq!(a.capacity(), 10);
        assert_eq!(b.as_slice(), [1, 2, 3]);
        assert_eq!(b.capacity(), 3);
    }

    #[test]
    fn take_leaves_source_empty() {
        let mut src = DynamicArray::from_slice(&[1, 2]).unwrap();
        let dst = src.take();
        assert_eq!(dst.as_slice(), [1, 2]);
        assert_eq!(src.len(), 0);
        assert_eq!(src.capacity(), 0);
    }

    #[test]
    fn assign_take_releases_previous_contents() {
        let drops = DropCounter::new();
        let mut dst: DynamicArray<DropTracked> = DynamicArray::new();
        dst.push_back(drops.track()).unwrap();
        let mut src = DynamicArray::new();
        src.push_back(DropTracked::default()).unwrap();
        dst.assign_take(&mut src);
        assert_eq!(drops.drops(), 1);
        assert_eq!(dst.len(), 1);
        assert!(src.is_empty());
        assert_eq!(src.capacity(), 0);
    }

    #[test]
    fn clone_discards_spare_capacity() {
        let mut arr = DynamicArray::with_capacity(reserve(16)).unwrap();
        arr.push_back(1).unwrap();
        arr.push_back(2).unwrap();
        let copy = arr.clone();
        assert_eq!(copy.as_slice(), [1, 2]);
        assert_eq!(copy.capacity(), 2);
        let copy = arr.try_clone().unwrap();
        assert_eq!(copy.capacity(), 2);
    }

    #[test]
    fn clone_is_independent() {
        let original = DynamicArray::from_slice(&[1, 2, 3]).unwrap();
        let mut copy = original.clone();
        copy[0] = 100;
        copy.push_back(4).unwrap();
        assert_eq!(original.as_slice(), [1, 2, 3]);
        assert_eq!(copy.as_slice(), [100, 2, 3, 4]);
    }

    #[test]
    fn clone_copies_live_elements_only() {
        let counter = CloneCounter::new();
        let mut arr = DynamicArray::new();
        for i in 0..3 {
            arr.push_back(counter.track(i)).unwrap();
        }
        arr.pop_back();
        counter.reset();
        let _copy = arr.clone();
        assert_eq!(counter.clones(), 2);
    }

    #[test]
    fn assignment_replaces_contents() {
        let source = DynamicArray::from_slice(&[5, 6]).unwrap();
        let mut target = DynamicArray::from_slice(&[1, 2, 3, 4]).unwrap();
        target.try_assign_from(&source).unwrap();
        assert_eq!(target.as_slice(), [5, 6]);
        assert_eq!(target.capacity(), 2);

        let mut other = DynamicArray::new();
        other.clone_from(&source);
        assert_eq!(other.as_slice(), [5, 6]);
    }
}
