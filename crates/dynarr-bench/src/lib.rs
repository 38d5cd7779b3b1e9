//! Benchmark workloads for the dynarr containers.
//!
//! Provides deterministic inputs shared by the Criterion benches:
//!
//! - [`ascending_array`]: a tightly sized array of `0..len`
//! - [`scattered_positions`]: reproducible insert/erase positions via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynarr_array::DynamicArray;

/// Sizes used by the scaling benches.
pub const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

/// Build an array holding `0..len`, with capacity exactly `len`.
pub fn ascending_array(len: usize) -> DynamicArray<u64> {
    (0..len as u64).collect()
}

/// Generate `n` deterministic positions for an array that starts at
/// `initial_len` elements and grows by one per insert.
///
/// Position `i` is valid for an array of `initial_len + i` elements, so the
/// sequence can drive `insert` directly (and, reversed, `erase`).
pub fn scattered_positions(initial_len: usize, n: usize, seed: u64) -> Vec<usize> {
    (0..n)
        .map(|i| {
            let bound = (initial_len + i + 1) as u64;
            let hash = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add((i as u64).wrapping_mul(1442695040888963407));
            (hash % bound) as usize
        })
        .collect()
}
