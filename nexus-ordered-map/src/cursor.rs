//! Cursors for position-aware traversal.
//!
//! A cursor points at one entry (or past either end, "exhausted") and moves
//! one step at a time. [`CursorMut`] can remove the current entry and keep
//! going, which is the sweep pattern handles support through
//! [`OrderedMap::erase_handle`] but without re-resolving each step:
//!
//! ```
//! use nexus_ordered_map::OrderedMap;
//!
//! let mut map: OrderedMap<u32, u32> = (0..6).map(|i| (i, i)).collect();
//!
//! let mut cursor = map.cursor_front_mut();
//! while let Some((_, value)) = cursor.current_mut() {
//!     if *value % 2 == 0 {
//!         cursor.remove_current(); // advances to the next entry
//!     } else {
//!         *value *= 10;
//!         cursor.move_next();
//!     }
//! }
//!
//! assert_eq!(map.to_vec(), vec![(1, 10), (3, 30), (5, 50)]);
//! ```

use crate::list::{List, NONE};
use crate::{Handle, OrderedMap};

/// Read-only cursor over an [`OrderedMap`].
///
/// Built by [`OrderedMap::cursor_front`] and [`OrderedMap::cursor_back`].
pub struct Cursor<'a, K, V> {
    list: &'a List<K, V>,
    current: usize,
}

impl<K, V> Clone for Cursor<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            current: self.current,
        }
    }
}

impl<'a, K, V> Cursor<'a, K, V> {
    pub(crate) fn new(list: &'a List<K, V>, current: usize) -> Self {
        Self { list, current }
    }

    /// Returns the current entry, or `None` if exhausted.
    pub fn current(&self) -> Option<(&'a K, &'a V)> {
        entry_at(self.list, self.current)
    }

    /// Returns the current entry's handle, or `None` if exhausted.
    pub fn handle(&self) -> Option<Handle> {
        self.list.handle_at(self.current)
    }

    /// Returns `true` once the cursor has moved past either end.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.current == NONE
    }

    /// Steps toward the back. Past the last entry the cursor is exhausted
    /// and stays so.
    pub fn move_next(&mut self) {
        if self.current != NONE {
            self.current = self.list.next(self.current);
        }
    }

    /// Steps toward the front. Past the first entry the cursor is
    /// exhausted and stays so.
    pub fn move_prev(&mut self) {
        if self.current != NONE {
            self.current = self.list.prev(self.current);
        }
    }

    /// Returns the entry after the current one without moving.
    pub fn peek_next(&self) -> Option<(&'a K, &'a V)> {
        if self.current == NONE {
            return None;
        }
        entry_at(self.list, self.list.next(self.current))
    }

    /// Returns the entry before the current one without moving.
    pub fn peek_prev(&self) -> Option<(&'a K, &'a V)> {
        if self.current == NONE {
            return None;
        }
        entry_at(self.list, self.list.prev(self.current))
    }
}

/// Cursor that can modify values and remove entries.
///
/// Built by [`OrderedMap::cursor_front_mut`], [`OrderedMap::cursor_back_mut`]
/// and [`OrderedMap::cursor_at_mut`].
pub struct CursorMut<'a, K, V> {
    map: &'a mut OrderedMap<K, V>,
    current: usize,
}

impl<'a, K, V> CursorMut<'a, K, V> {
    pub(crate) fn new(map: &'a mut OrderedMap<K, V>, current: usize) -> Self {
        Self { map, current }
    }

    /// Returns the current entry, or `None` if exhausted.
    pub fn current(&self) -> Option<(&K, &V)> {
        entry_at(&self.map.list, self.current)
    }

    /// Returns the current entry with a mutable value.
    pub fn current_mut(&mut self) -> Option<(&K, &mut V)> {
        if self.current == NONE {
            return None;
        }
        let node = self.map.list.node_mut(self.current);
        Some((&node.key, &mut node.value))
    }

    /// Returns the current entry's handle, or `None` if exhausted.
    pub fn handle(&self) -> Option<Handle> {
        self.map.list.handle_at(self.current)
    }

    /// Returns `true` once the cursor has moved past either end.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.current == NONE
    }

    /// Steps toward the back.
    pub fn move_next(&mut self) {
        if self.current != NONE {
            self.current = self.map.list.next(self.current);
        }
    }

    /// Steps toward the front.
    pub fn move_prev(&mut self) {
        if self.current != NONE {
            self.current = self.map.list.prev(self.current);
        }
    }

    /// Returns the entry after the current one without moving.
    pub fn peek_next(&self) -> Option<(&K, &V)> {
        if self.current == NONE {
            return None;
        }
        entry_at(&self.map.list, self.map.list.next(self.current))
    }

    /// Returns the entry before the current one without moving.
    pub fn peek_prev(&self) -> Option<(&K, &V)> {
        if self.current == NONE {
            return None;
        }
        entry_at(&self.map.list, self.map.list.prev(self.current))
    }
}

impl<K: Ord, V> CursorMut<'_, K, V> {
    /// Removes the current entry and advances to the one after it.
    ///
    /// Returns `None` (removing nothing) if the cursor is exhausted.
    pub fn remove_current(&mut self) -> Option<(K, V)> {
        if self.current == NONE {
            return None;
        }
        let slot = self.current;
        self.current = self.map.list.next(slot);
        let node = self.map.remove_slot(slot);
        Some((node.key, node.value))
    }
}

fn entry_at<K, V>(list: &List<K, V>, slot: usize) -> Option<(&K, &V)> {
    if slot == NONE {
        return None;
    }
    let node = list.node(slot);
    Some((&node.key, &node.value))
}

#[cfg(test)]
mod tests {
    use crate::OrderedMap;

    fn abcd() -> OrderedMap<&'static str, u32> {
        OrderedMap::from([("a", 1), ("b", 2), ("c", 3), ("d", 4)])
    }

    #[test]
    fn walk_forward_and_back() {
        let map = abcd();
        let mut cursor = map.cursor_front();

        assert_eq!(cursor.current(), Some((&"a", &1)));
        assert_eq!(cursor.peek_prev(), None);
        assert_eq!(cursor.peek_next(), Some((&"b", &2)));

        cursor.move_next();
        cursor.move_next();
        assert_eq!(cursor.current(), Some((&"c", &3)));
        assert_eq!(cursor.handle(), map.find(&"c"));

        cursor.move_prev();
        assert_eq!(cursor.current(), Some((&"b", &2)));
    }

    #[test]
    fn exhausted_at_either_end() {
        let map = abcd();

        let mut back = map.cursor_back();
        assert_eq!(back.current(), Some((&"d", &4)));
        back.move_next();
        assert!(back.is_exhausted());
        assert_eq!(back.current(), None);
        assert_eq!(back.handle(), None);
        back.move_prev();
        assert!(back.is_exhausted());

        let mut front = map.cursor_front();
        front.move_prev();
        assert!(front.is_exhausted());
        assert_eq!(front.peek_next(), None);
    }

    #[test]
    fn empty_map_cursor_is_exhausted() {
        let mut map: OrderedMap<u32, u32> = OrderedMap::new();
        assert!(map.cursor_front().is_exhausted());
        let mut cursor = map.cursor_back_mut();
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.remove_current(), None);
    }

    #[test]
    fn remove_current_advances() {
        let mut map = abcd();
        let mut cursor = map.cursor_front_mut();

        cursor.move_next();
        assert_eq!(cursor.remove_current(), Some(("b", 2)));
        assert_eq!(cursor.current(), Some((&"c", &3)));
        assert_eq!(cursor.peek_prev(), Some((&"a", &1)));

        cursor.move_next();
        assert_eq!(cursor.remove_current(), Some(("d", 4)));
        assert!(cursor.is_exhausted());

        assert_eq!(map.to_vec(), vec![("a", 1), ("c", 3)]);
        assert!(map.find(&"b").is_none());
    }

    #[test]
    fn cursor_at_handle() {
        let mut map = abcd();
        let c = map.find(&"c").unwrap();

        let mut cursor = map.cursor_at_mut(c).unwrap();
        if let Some((_, v)) = cursor.current_mut() {
            *v = 30;
        }
        assert_eq!(cursor.peek_next(), Some((&"d", &4)));
        cursor.move_prev();
        let b = cursor.handle();
        assert_eq!(b, map.find(&"b"));
        assert_eq!(map.get(&"c"), Some(&30));

        map.erase(&"c");
        assert!(map.cursor_at_mut(c).is_none());
    }
}
