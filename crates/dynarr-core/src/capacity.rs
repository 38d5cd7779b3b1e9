//! Capacity hints for reserve-on-construct.

/// A requested capacity, used to construct an empty array with room for
/// at least this many elements.
///
/// Carries no behavior of its own. It exists so that "reserve N slots"
/// and "create N default elements" are distinct constructors rather than
/// two meanings of the same `usize` argument.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CapacityRequest {
    capacity: usize,
}

impl CapacityRequest {
    /// Request room for `capacity` elements.
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// The requested number of slots.
    pub const fn capacity(self) -> usize {
        self.capacity
    }
}

/// Shorthand for [`CapacityRequest::new`].
///
/// ```
/// use dynarr_core::reserve;
///
/// assert_eq!(reserve(16).capacity(), 16);
/// ```
pub const fn reserve(capacity: usize) -> CapacityRequest {
    CapacityRequest::new(capacity)
}
