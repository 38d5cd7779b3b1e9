//! Instrumented element types.
//!
//! Both counters share their tally through an `Arc<AtomicUsize>`, so the
//! elements stay `Send` and can be cloned into containers freely.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared tally of [`Tracked::clone`] calls.
#[derive(Clone, Debug, Default)]
pub struct CloneCounter {
    clones: Arc<AtomicUsize>,
}

impl CloneCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `value` in an element that reports its clones here.
    pub fn track(&self, value: i64) -> Tracked {
        Tracked {
            value,
            clones: Some(Arc::clone(&self.clones)),
        }
    }

    /// How many tracked elements have been cloned so far.
    pub fn clones(&self) -> usize {
        self.clones.load(Ordering::Relaxed)
    }

    /// Reset the tally.
    pub fn reset(&self) {
        self.clones.store(0, Ordering::Relaxed);
    }
}

/// An `i64` payload that counts its clones.
///
/// `Default` produces an untracked zero, which is what a freshly allocated
/// slot holds. Equality and ordering look at the payload only.
#[derive(Default)]
pub struct Tracked {
    pub value: i64,
    clones: Option<Arc<AtomicUsize>>,
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        if let Some(clones) = &self.clones {
            clones.fetch_add(1, Ordering::Relaxed);
        }
        Self {
            value: self.value,
            clones: self.clones.clone(),
        }
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Tracked {}

impl PartialOrd for Tracked {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tracked {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl fmt::Debug for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tracked({})", self.value)
    }
}

/// Shared tally of [`DropTracked`] drops.
#[derive(Clone, Debug, Default)]
pub struct DropCounter {
    drops: Arc<AtomicUsize>,
}

impl DropCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an element that reports its drop here.
    pub fn track(&self) -> DropTracked {
        DropTracked {
            drops: Some(Arc::clone(&self.drops)),
        }
    }

    /// How many tracked elements have been dropped so far.
    pub fn drops(&self) -> usize {
        self.drops.load(Ordering::Relaxed)
    }
}

/// An element that increments its [`DropCounter`] when dropped.
///
/// `Default` produces an untracked element whose drop is not counted.
#[derive(Debug, Default)]
pub struct DropTracked {
    drops: Option<Arc<AtomicUsize>>,
}

impl Drop for DropTracked {
    fn drop(&mut self) {
        if let Some(drops) = &self.drops {
            drops.fetch_add(1, Ordering::Relaxed);
        }
    }
}

/// `[0, 1, .., n - 1]` as `i64`, the usual payload for ordering checks.
pub fn ascending(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}
