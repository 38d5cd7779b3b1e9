//! The `dynarr!` literal macro.

/// Build a [`DynamicArray`](crate::DynamicArray) from a literal list, the
/// way `vec!` builds a `Vec`.
///
/// Length and capacity both equal the number of elements.
///
/// ```
/// use dynarr_array::dynarr;
///
/// let empty: dynarr_array::DynamicArray<i32> = dynarr![];
/// assert!(empty.is_empty());
///
/// let listed = dynarr![1, 9, 3];
/// assert_eq!(listed, [1, 9, 3]);
/// assert_eq!(listed.capacity(), 3);
///
/// let repeated = dynarr![7; 3];
/// assert_eq!(repeated, [7, 7, 7]);
/// ```
#[macro_export]
macro_rules! dynarr {
    () => {
        $crate::DynamicArray::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::DynamicArray::from(::std::vec![$elem; $n])
    };
    ($($x:expr),+ $(,)?) => {
        $crate::DynamicArray::from([$($x),+])
    };
}
