//! Insertion-ordered map with stable entry handles.
//!
//! [`OrderedMap`] maps unique keys to values and iterates in the order keys
//! were first inserted, or in whatever order a later sort or move put them.
//!
//! # Design
//!
//! The map is two structures kept in lockstep:
//!
//! ```text
//! Slab<Node>            - owns entries, links them head -> tail
//! BTreeMap<K, slot>     - finds an entry's slot by key
//! ```
//!
//! Entries never change slot while alive. That gives:
//! - **Stable handles**: a [`Handle`] keeps naming its entry across inserts,
//!   removals of other entries, sorts and merges
//! - **O(1) removal and repositioning** once the slot is known
//! - **Cheap sorts**: sorting rewrites links, never moves entries
//!
//! # Quick Start
//!
//! ```
//! use nexus_ordered_map::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! map.set("c", 3);
//! map.set("a", 1);
//! map.set("b", 2);
//!
//! assert_eq!(map.to_keys(), vec!["c", "a", "b"]);
//!
//! // handles survive reordering
//! let a = map.find(&"a").unwrap();
//! map.sort_keys();
//! assert_eq!(map.index_of(a), Some(0));
//!
//! // erase hands back the next entry
//! let next = map.erase(&"a");
//! assert_eq!(next, map.find(&"b"));
//! ```
//!
//! # Handles
//!
//! A handle is a slot plus a stamp drawn when its entry was created. Stamps
//! are unique across the process, so a handle from another map (including
//! a clone of this one) or for a removed entry never resolves. Operations
//! addressed by handle report that as [`InvalidHandle`] or `None`; the map
//! is never touched.
//!
//! # Complexity
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `set`, `find`, `get`, `erase` | O(log n) |
//! | `erase_handle`, `move_to_front/back`, `resolve` | O(1) amortized |
//! | `at`, `index_of` | O(n) |
//! | `sort_by` | O(n log n) |
//! | `merge` | O(m log(n + m)) |

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cursor;
pub mod entry;
pub mod error;
pub mod handle;
pub mod iter;
mod list;
pub mod map;

pub use cursor::{Cursor, CursorMut};
pub use entry::{Entry, OccupiedEntry, VacantEntry};
pub use error::InvalidHandle;
pub use handle::Handle;
pub use iter::{Drain, Handles, IntoIter, Iter, IterMut, Keys, Values, ValuesMut};
pub use map::OrderedMap;
