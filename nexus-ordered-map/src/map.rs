//! Insertion-ordered map: an entry list plus a key index.
//!
//! # Structure
//!
//! ```text
//! index (BTreeMap)        list (Slab, linked head -> tail)
//!   "a" -> 0              head -> [0] a:1 <-> [2] c:3 <-> [1] b:2 <- tail
//!   "b" -> 1
//!   "c" -> 2
//! ```
//!
//! The list owns every entry and decides iteration order. The index maps
//! each key to the slab slot of its node. Slots never change while a node
//! is alive, so reordering (sort, reverse, move-to-front/back) only touches
//! links and leaves both the index and outstanding [`Handle`]s valid.
//!
//! # Invariants
//!
//! Before and after every public method:
//!
//! - every index entry points at an occupied slot holding the same key,
//!   and every occupied slot is reachable from exactly one index entry;
//! - every occupied slot is linked, so `list.len() == index.len()`.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::mem;
use std::ops::Index;

use tracing::{debug, trace};

use crate::cursor::{Cursor, CursorMut};
use crate::entry::{Entry, OccupiedEntry, VacantEntry};
use crate::iter::{Drain, Handles, IntoIter, Iter, IterMut, Keys, Values, ValuesMut};
use crate::list::{List, NONE, Node};
use crate::{Handle, InvalidHandle};

/// A map that remembers insertion order.
///
/// Lookup by key goes through an ordered index (`O(log n)`); positional
/// access walks the entry list (`O(n)`). Updating an existing key keeps
/// its position. Order only changes through explicit reordering:
/// [`sort_by`](Self::sort_by), [`reverse`](Self::reverse),
/// [`move_to_front`](Self::move_to_front) and
/// [`move_to_back`](Self::move_to_back).
///
/// Keys need `Ord` for the index and `Clone` for insertion, since one copy
/// lives in the entry list and one in the index.
///
/// The map is not internally synchronized. Share it behind one lock.
///
/// # Example
///
/// ```
/// use nexus_ordered_map::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// map.set("a", 1);
/// map.set("b", 2);
/// map.set("c", 3);
///
/// // update in place
/// map.set("c", 5);
/// assert_eq!(map.to_vec(), vec![("a", 1), ("b", 2), ("c", 5)]);
///
/// // positional access follows current order
/// let second = map.at(1).unwrap();
/// assert_eq!(map.resolve(second), Some((&"b", &2)));
///
/// // erase returns the entry that followed
/// let next = map.erase(&"b").unwrap();
/// assert_eq!(map.resolve(next), Some((&"c", &5)));
/// ```
pub struct OrderedMap<K, V> {
    pub(crate) list: List<K, V>,
    pub(crate) index: BTreeMap<K, usize>,
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Base impl - no key bounds (size, order, handles, iteration)
// =============================================================================

impl<K, V> OrderedMap<K, V> {
    /// Creates an empty map.
    #[inline]
    pub fn new() -> Self {
        Self {
            list: List::new(),
            index: BTreeMap::new(),
        }
    }

    /// Creates an empty map with room for `capacity` entries before the
    /// entry list reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            list: List::with_capacity(capacity),
            index: BTreeMap::new(),
        }
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the map has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns how many entries fit before the entry list reallocates.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.list.capacity()
    }

    /// Reserves room for at least `additional` more entries.
    pub fn reserve(&mut self, additional: usize) {
        self.list.reserve(additional);
        trace!(len = self.len(), capacity = self.capacity(), "reserved ordered map capacity");
    }

    /// Releases spare capacity. Entries keep their slots, so handles stay
    /// valid.
    pub fn shrink_to_fit(&mut self) {
        self.list.shrink_to_fit();
        trace!(len = self.len(), capacity = self.capacity(), "shrank ordered map");
    }

    /// Removes every entry. Outstanding handles stop resolving.
    pub fn clear(&mut self) {
        let len = self.len();
        self.list.clear();
        self.index.clear();
        trace!(len, "cleared ordered map");
    }

    // ========================================================================
    // Handles
    // ========================================================================

    /// Returns the handle of the entry at `position` in current order, or
    /// `None` if `position >= len()`.
    ///
    /// This walks the list from the nearer end. For repeated positional
    /// access, iterate instead.
    #[inline]
    pub fn at(&self, position: usize) -> Option<Handle> {
        self.list.nth(position).map(|slot| self.list.handle(slot))
    }

    /// Returns the current position of the entry behind `handle`.
    ///
    /// `O(n)`: walks from the front. Returns `None` for stale or foreign
    /// handles.
    pub fn index_of(&self, handle: Handle) -> Option<usize> {
        self.list
            .resolve(handle)
            .map(|slot| self.list.position(slot))
    }

    /// Returns the entry behind `handle`, if it is still alive.
    #[inline]
    pub fn resolve(&self, handle: Handle) -> Option<(&K, &V)> {
        let node = self.list.node(self.list.resolve(handle)?);
        Some((&node.key, &node.value))
    }

    /// Returns the entry behind `handle` with a mutable value.
    #[inline]
    pub fn resolve_mut(&mut self, handle: Handle) -> Option<(&K, &mut V)> {
        let slot = self.list.resolve(handle)?;
        let node = self.list.node_mut(slot);
        Some((&node.key, &mut node.value))
    }

    /// Returns `true` if `handle` refers to a live entry of this map.
    #[inline]
    pub fn contains_handle(&self, handle: Handle) -> bool {
        self.list.resolve(handle).is_some()
    }

    /// Handle of the first entry.
    #[inline]
    pub fn front_handle(&self) -> Option<Handle> {
        self.list.handle_at(self.list.head())
    }

    /// Handle of the last entry.
    #[inline]
    pub fn back_handle(&self) -> Option<Handle> {
        self.list.handle_at(self.list.tail())
    }

    /// Handle of the entry after `handle`.
    ///
    /// Returns `None` at the end of the map or for an invalid handle.
    #[inline]
    pub fn next_handle(&self, handle: Handle) -> Option<Handle> {
        let slot = self.list.resolve(handle)?;
        self.list.handle_at(self.list.next(slot))
    }

    /// Handle of the entry before `handle`.
    ///
    /// Returns `None` at the front of the map or for an invalid handle.
    #[inline]
    pub fn prev_handle(&self, handle: Handle) -> Option<Handle> {
        let slot = self.list.resolve(handle)?;
        self.list.handle_at(self.list.prev(slot))
    }

    fn checked_slot(&self, handle: Handle) -> Result<usize, InvalidHandle> {
        self.list.resolve(handle).ok_or_else(|| {
            debug!(
                slot = handle.slot,
                stamp = handle.stamp,
                "rejected stale or foreign handle"
            );
            InvalidHandle::new(handle)
        })
    }

    // ========================================================================
    // Front / back
    // ========================================================================

    /// Returns the first entry.
    #[inline]
    pub fn front(&self) -> Option<(&K, &V)> {
        self.front_handle().and_then(|h| self.resolve(h))
    }

    /// Returns the first entry with a mutable value.
    #[inline]
    pub fn front_mut(&mut self) -> Option<(&K, &mut V)> {
        let handle = self.front_handle()?;
        self.resolve_mut(handle)
    }

    /// Returns the last entry.
    #[inline]
    pub fn back(&self) -> Option<(&K, &V)> {
        self.back_handle().and_then(|h| self.resolve(h))
    }

    /// Returns the last entry with a mutable value.
    #[inline]
    pub fn back_mut(&mut self) -> Option<(&K, &mut V)> {
        let handle = self.back_handle()?;
        self.resolve_mut(handle)
    }

    // ========================================================================
    // Reordering
    // ========================================================================

    /// Sorts entries with a comparator over `(key, value)` pairs.
    ///
    /// The sort is stable. Only positions change: every key still maps to
    /// the same value, and every handle still names the same entry.
    ///
    /// # Example
    ///
    /// ```
    /// use nexus_ordered_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([("c", 1), ("b", 2), ("a", 3)]);
    /// let a = map.find(&"a").unwrap();
    ///
    /// map.sort_by(|(k1, _), (k2, _)| k1.cmp(k2));
    ///
    /// assert_eq!(map.to_keys(), vec!["a", "b", "c"]);
    /// assert_eq!(map.resolve(a), Some((&"a", &3)));
    /// assert_eq!(map.index_of(a), Some(0));
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut((&K, &V), (&K, &V)) -> Ordering,
    {
        let mut order: Vec<usize> = self.list.slots().collect();
        let nodes = self.list.nodes();
        order.sort_by(|&a, &b| {
            let (a, b) = (&nodes[a], &nodes[b]);
            compare((&a.key, &a.value), (&b.key, &b.value))
        });
        self.list.relink(&order);
        trace!(len = order.len(), "sorted ordered map");
    }

    /// Sorts entries by a key extracted from each `(key, value)` pair.
    ///
    /// Stable, like [`sort_by`](Self::sort_by).
    pub fn sort_by_key<T, F>(&mut self, mut f: F)
    where
        T: Ord,
        F: FnMut(&K, &V) -> T,
    {
        self.sort_by(|(k1, v1), (k2, v2)| f(k1, v1).cmp(&f(k2, v2)));
    }

    /// Reverses the order of all entries.
    pub fn reverse(&mut self) {
        self.list.reverse();
        trace!(len = self.len(), "reversed ordered map");
    }

    /// Moves the entry behind `handle` to the front in `O(1)`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHandle`] if `handle` is stale or foreign.
    pub fn move_to_front(&mut self, handle: Handle) -> Result<(), InvalidHandle> {
        let slot = self.checked_slot(handle)?;
        self.list.move_to_front(slot);
        Ok(())
    }

    /// Moves the entry behind `handle` to the back in `O(1)`.
    ///
    /// Useful for LRU-style recency tracking.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHandle`] if `handle` is stale or foreign.
    pub fn move_to_back(&mut self, handle: Handle) -> Result<(), InvalidHandle> {
        let slot = self.checked_slot(handle)?;
        self.list.move_to_back(slot);
        Ok(())
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Iterator over `(&K, &V)` in map order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.list)
    }

    /// Iterator over `(&K, &mut V)` in map order.
    ///
    /// Creating the iterator walks the whole slab once, so it costs `O(n)`
    /// up front even if only the first item is taken. For a single entry
    /// use [`get_mut`](Self::get_mut), [`front_mut`](Self::front_mut) or
    /// [`cursor_front_mut`](Self::cursor_front_mut).
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut::new(&mut self.list)
    }

    /// Iterator over keys in map order.
    #[inline]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Iterator over values in map order.
    #[inline]
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Iterator over mutable values in map order.
    ///
    /// Same up-front cost as [`iter_mut`](Self::iter_mut).
    #[inline]
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            inner: self.iter_mut(),
        }
    }

    /// Iterator over entry handles in map order.
    #[inline]
    pub fn handles(&self) -> Handles<'_, K, V> {
        Handles::new(&self.list)
    }

    /// Removes every entry, yielding them in map order.
    ///
    /// The map is empty as soon as this returns, even if the iterator is
    /// leaked. Entries not consumed are dropped with the iterator.
    pub fn drain(&mut self) -> Drain<'_, K, V> {
        self.index.clear();
        let list = mem::take(&mut self.list);
        Drain::new(list, &mut self.list)
    }

    /// Read-only cursor at the first entry.
    #[inline]
    pub fn cursor_front(&self) -> Cursor<'_, K, V> {
        Cursor::new(&self.list, self.list.head())
    }

    /// Read-only cursor at the last entry.
    #[inline]
    pub fn cursor_back(&self) -> Cursor<'_, K, V> {
        Cursor::new(&self.list, self.list.tail())
    }

    /// Mutable cursor at the first entry.
    ///
    /// See [`CursorMut`] for the erase-and-continue pattern.
    #[inline]
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, K, V> {
        let head = self.list.head();
        CursorMut::new(self, head)
    }

    /// Mutable cursor at the last entry.
    #[inline]
    pub fn cursor_back_mut(&mut self) -> CursorMut<'_, K, V> {
        let tail = self.list.tail();
        CursorMut::new(self, tail)
    }

    /// Mutable cursor at the entry behind `handle`, or `None` if the
    /// handle is stale or foreign.
    pub fn cursor_at_mut(&mut self, handle: Handle) -> Option<CursorMut<'_, K, V>> {
        let slot = self.list.resolve(handle)?;
        Some(CursorMut::new(self, slot))
    }
}

// =============================================================================
// Keyed impl - lookup and removal
// =============================================================================

impl<K: Ord, V> OrderedMap<K, V> {
    /// Returns the handle of the entry for `key`.
    #[inline]
    pub fn find<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.index.get(key).map(|&slot| self.list.handle(slot))
    }

    /// Returns a reference to the value for `key`.
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.index.get(key).map(|&slot| &self.list.node(slot).value)
    }

    /// Returns a mutable reference to the value for `key`.
    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let slot = *self.index.get(key)?;
        Some(&mut self.list.node_mut(slot).value)
    }

    /// Returns the stored key and value for `key`.
    #[inline]
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node = self.list.node(*self.index.get(key)?);
        Some((&node.key, &node.value))
    }

    /// Returns `true` if the map has an entry for `key`.
    #[inline]
    pub fn has<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Returns the number of entries for `key`: always 0 or 1.
    #[inline]
    pub fn count<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        usize::from(self.has(key))
    }

    /// Removes the entry for `key` and returns the handle of the entry that
    /// followed it.
    ///
    /// Returns `None` if the removed entry was last, or if `key` was absent
    /// (in which case the map is unchanged).
    pub fn erase<Q>(&mut self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let slot = self.index.remove(key)?;
        let next = self.list.next(slot);
        self.list.remove(slot);
        self.list.handle_at(next)
    }

    /// Removes the entry behind `handle` and returns the handle of the
    /// entry that followed it (`None` if it was last).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHandle`] and leaves the map untouched if `handle`
    /// is stale or was issued by another map.
    ///
    /// # Example
    ///
    /// ```
    /// use nexus_ordered_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::from([("a", 1), ("b", 2), ("c", 3)]);
    ///
    /// // erase every odd value, continuing from the returned handle
    /// let mut cur = map.front_handle();
    /// while let Some(h) = cur {
    ///     let odd = map.resolve(h).is_some_and(|(_, v)| v % 2 == 1);
    ///     cur = if odd {
    ///         map.erase_handle(h).unwrap()
    ///     } else {
    ///         map.next_handle(h)
    ///     };
    /// }
    /// assert_eq!(map.to_keys(), vec!["b"]);
    /// ```
    pub fn erase_handle(&mut self, handle: Handle) -> Result<Option<Handle>, InvalidHandle> {
        let slot = self.checked_slot(handle)?;
        let next = self.list.next(slot);
        self.remove_slot(slot);
        Ok(self.list.handle_at(next))
    }

    /// Removes the entry for `key`, returning its value.
    #[inline]
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes the entry for `key`, returning the stored key and value.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let slot = self.index.remove(key)?;
        let node = self.list.remove(slot);
        Some((node.key, node.value))
    }

    /// Removes and returns the first entry.
    pub fn pop_front(&mut self) -> Option<(K, V)> {
        let node = self.list.pop_front()?;
        self.index.remove(&node.key);
        Some((node.key, node.value))
    }

    /// Removes and returns the last entry.
    pub fn pop_back(&mut self) -> Option<(K, V)> {
        let node = self.list.pop_back()?;
        self.index.remove(&node.key);
        Some((node.key, node.value))
    }

    /// Keeps only the entries for which `keep` returns `true`, preserving
    /// their order.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let before = self.len();
        let mut slot = self.list.head();
        while slot != NONE {
            let node = self.list.node_mut(slot);
            let next = node.next;
            if !keep(&node.key, &mut node.value) {
                self.remove_slot(slot);
            }
            slot = next;
        }
        trace!(len = self.len(), removed = before - self.len(), "retained ordered map");
    }

    /// Sorts entries by key, ascending.
    pub fn sort_keys(&mut self) {
        self.sort_by(|(k1, _), (k2, _)| k1.cmp(k2));
    }

    /// Unlinks and frees the node at `slot`, dropping its index entry.
    pub(crate) fn remove_slot(&mut self, slot: usize) -> Node<K, V> {
        let node = self.list.remove(slot);
        let indexed = self.index.remove(&node.key);
        debug_assert_eq!(indexed, Some(slot), "key index out of sync with entry list");
        node
    }
}

// =============================================================================
// Insert impl - needs a second copy of the key for the index
// =============================================================================

impl<K: Ord + Clone, V> OrderedMap<K, V> {
    /// Sets the value for `key` and returns the entry's handle.
    ///
    /// A new key is appended at the back. An existing key has its value
    /// overwritten in place and keeps its position.
    pub fn set(&mut self, key: K, value: V) -> Handle {
        match self.index.get(&key) {
            Some(&slot) => {
                self.list.node_mut(slot).value = value;
                self.list.handle(slot)
            }
            None => {
                let slot = self.push_slot(key, value);
                self.list.handle(slot)
            }
        }
    }

    /// Like [`set`](Self::set), but builds the value with `make`.
    ///
    /// On update the old value is dropped and replaced by a freshly built
    /// one. Position is kept either way.
    pub fn emplace<F>(&mut self, key: K, make: F) -> Handle
    where
        F: FnOnce() -> V,
    {
        self.set(key, make())
    }

    /// Gets the entry for `key` for in-place manipulation.
    ///
    /// # Example
    ///
    /// ```
    /// use nexus_ordered_map::OrderedMap;
    ///
    /// let mut words: OrderedMap<&str, usize> = OrderedMap::new();
    /// for word in ["b", "a", "b", "c", "b"] {
    ///     *words.entry(word).or_default() += 1;
    /// }
    /// assert_eq!(words.to_vec(), vec![("b", 3), ("a", 1), ("c", 1)]);
    /// ```
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V> {
        match self.index.get(&key) {
            Some(&slot) => Entry::Occupied(OccupiedEntry::new(self, slot)),
            None => Entry::Vacant(VacantEntry::new(self, key)),
        }
    }

    /// Moves every entry of `other` into `self`, leaving `other` empty.
    ///
    /// Entries are applied in `other`'s order with [`set`](Self::set):
    /// keys already in `self` take `other`'s value but keep their position;
    /// new keys are appended in `other`'s relative order.
    ///
    /// # Example
    ///
    /// ```
    /// use nexus_ordered_map::OrderedMap;
    ///
    /// let mut m1 = OrderedMap::from([("a", 1), ("b", 2)]);
    /// let mut m2 = OrderedMap::from([("b", 99), ("c", 3)]);
    ///
    /// m1.merge(&mut m2);
    ///
    /// assert_eq!(m1.to_vec(), vec![("a", 1), ("b", 99), ("c", 3)]);
    /// assert!(m2.is_empty());
    /// ```
    pub fn merge(&mut self, other: &mut Self) {
        let incoming = other.len();
        for (key, value) in other.drain() {
            self.set(key, value);
        }
        trace!(incoming, len = self.len(), "merged ordered map");
    }

    /// Appends a node for a key known to be absent.
    pub(crate) fn push_slot(&mut self, key: K, value: V) -> usize {
        debug_assert!(!self.index.contains_key(&key), "duplicate key pushed");
        let slot = self.list.push_back(key.clone(), value);
        self.index.insert(key, slot);
        slot
    }
}

// =============================================================================
// Snapshots
// =============================================================================

impl<K: Clone, V> OrderedMap<K, V> {
    /// Copies the keys into a new `Vec`, in map order.
    pub fn to_keys(&self) -> Vec<K> {
        self.keys().cloned().collect()
    }
}

impl<K, V: Clone> OrderedMap<K, V> {
    /// Copies the values into a new `Vec`, in map order.
    pub fn to_values(&self) -> Vec<V> {
        self.values().cloned().collect()
    }
}

impl<K: Clone, V: Clone> OrderedMap<K, V> {
    /// Copies every entry into a new `Vec`, in map order.
    pub fn to_vec(&self) -> Vec<(K, V)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

// =============================================================================
// Trait impls
// =============================================================================

impl<K: Ord + Clone, V: Clone> Clone for OrderedMap<K, V> {
    /// Rebuilds the entry list and index from scratch. Handles issued by
    /// `self` do not resolve in the clone.
    fn clone(&self) -> Self {
        let mut map = Self::with_capacity(self.len());
        for (key, value) in self {
            map.push_slot(key.clone(), value.clone());
        }
        map
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.reserve(source.len());
        for (key, value) in source {
            self.push_slot(key.clone(), value.clone());
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Equality is order-sensitive: same entries in the same order.
impl<K: PartialEq, V: PartialEq> PartialEq for OrderedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for OrderedMap<K, V> {}

impl<K: Ord + Clone, V> Extend<(K, V)> for OrderedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K: Ord + Clone, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = Self::with_capacity(iter.size_hint().0);
        map.extend(iter);
        map
    }
}

impl<K: Ord + Clone, V, const N: usize> From<[(K, V); N]> for OrderedMap<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, Q, V> Index<&Q> for OrderedMap<K, V>
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if `key` is not in the map.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> IntoIter<K, V> {
        IntoIter { list: self.list }
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut OrderedMap<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> IterMut<'a, K, V> {
        self.iter_mut()
    }
}
