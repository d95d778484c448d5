//! Stable handles to map entries.
//!
//! A [`Handle`] names one entry by identity, not by position. It pairs the
//! entry's slab slot with a stamp drawn when the entry was created. Stamps
//! are unique across every map in the process, so a handle only resolves
//! in the map that issued it, and only while its entry is alive.

use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};

/// Source of entry stamps. Zero is never handed out.
static NEXT_STAMP: AtomicU64 = AtomicU64::new(1);

/// Draws a fresh, process-wide unique stamp.
#[inline]
pub(crate) fn next_stamp() -> u64 {
    NEXT_STAMP.fetch_add(1, Ordering::Relaxed)
}

/// Opaque, copyable reference to one entry of an [`OrderedMap`].
///
/// Handles survive insertions, removals of other entries, sorting and
/// repositioning. They stop resolving once their entry is removed, and
/// they never resolve in a different map (including a clone of the
/// issuing map).
///
/// # Example
///
/// ```
/// use nexus_ordered_map::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// let b = map.set("b", 2);
/// map.set("a", 1);
///
/// map.sort_keys();
/// assert_eq!(map.index_of(b), Some(1));
/// assert_eq!(map.resolve(b), Some((&"b", &2)));
///
/// map.erase(&"b");
/// assert_eq!(map.resolve(b), None);
/// ```
///
/// [`OrderedMap`]: crate::OrderedMap
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    pub(crate) slot: usize,
    pub(crate) stamp: u64,
}

impl Handle {
    #[inline]
    pub(crate) const fn new(slot: usize, stamp: u64) -> Self {
        Self { slot, stamp }
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({}@{})", self.slot, self.stamp)
    }
}
