//! Entry API for in-place insert-or-update.

use std::mem;

use crate::{Handle, OrderedMap};

/// A view into a single entry of an [`OrderedMap`], occupied or vacant.
///
/// Built by [`OrderedMap::entry`].
pub enum Entry<'a, K, V> {
    /// The key is present.
    Occupied(OccupiedEntry<'a, K, V>),
    /// The key is absent. Inserting appends at the back.
    Vacant(VacantEntry<'a, K, V>),
}

/// An entry whose key is present.
pub struct OccupiedEntry<'a, K, V> {
    map: &'a mut OrderedMap<K, V>,
    slot: usize,
}

/// An entry whose key is absent.
pub struct VacantEntry<'a, K, V> {
    map: &'a mut OrderedMap<K, V>,
    key: K,
}

impl<'a, K, V> Entry<'a, K, V> {
    /// Returns a reference to the entry's key.
    pub fn key(&self) -> &K {
        match self {
            Entry::Occupied(e) => e.key(),
            Entry::Vacant(e) => e.key(),
        }
    }

    /// Returns the handle of an occupied entry, or `None` if vacant.
    pub fn handle(&self) -> Option<Handle> {
        match self {
            Entry::Occupied(e) => Some(e.handle()),
            Entry::Vacant(_) => None,
        }
    }

    /// Modifies an existing entry before any insertion.
    pub fn and_modify<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        if let Entry::Occupied(ref mut e) = self {
            f(e.get_mut());
        }
        self
    }
}

impl<'a, K: Ord + Clone, V> Entry<'a, K, V> {
    /// Ensures a value is present by inserting `default` if vacant.
    pub fn or_insert(self, default: V) -> &'a mut V {
        self.or_insert_with(|| default)
    }

    /// Ensures a value is present by inserting the result of `f` if vacant.
    pub fn or_insert_with<F: FnOnce() -> V>(self, f: F) -> &'a mut V {
        match self {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => e.insert(f()),
        }
    }

    /// Ensures a value is present by inserting `V::default()` if vacant.
    pub fn or_default(self) -> &'a mut V
    where
        V: Default,
    {
        self.or_insert_with(V::default)
    }

    /// Returns the entry's handle, inserting `default` first if vacant.
    pub fn or_insert_handle(self, default: V) -> Handle {
        match self {
            Entry::Occupied(e) => e.handle(),
            Entry::Vacant(e) => e.insert_handle(default),
        }
    }
}

impl<'a, K, V> OccupiedEntry<'a, K, V> {
    pub(crate) fn new(map: &'a mut OrderedMap<K, V>, slot: usize) -> Self {
        Self { map, slot }
    }

    /// Returns the stored key.
    #[inline]
    pub fn key(&self) -> &K {
        &self.map.list.node(self.slot).key
    }

    /// Returns the entry's handle.
    #[inline]
    pub fn handle(&self) -> Handle {
        self.map.list.handle(self.slot)
    }

    /// Gets a reference to the value.
    #[inline]
    pub fn get(&self) -> &V {
        &self.map.list.node(self.slot).value
    }

    /// Gets a mutable reference to the value.
    #[inline]
    pub fn get_mut(&mut self) -> &mut V {
        &mut self.map.list.node_mut(self.slot).value
    }

    /// Converts into a mutable reference bound to the map's borrow.
    pub fn into_mut(self) -> &'a mut V {
        let map = self.map;
        &mut map.list.node_mut(self.slot).value
    }

    /// Replaces the value in place, returning the old one. Position is
    /// unchanged.
    pub fn insert(&mut self, value: V) -> V {
        mem::replace(self.get_mut(), value)
    }
}

impl<K: Ord, V> OccupiedEntry<'_, K, V> {
    /// Removes the entry and returns its value.
    pub fn remove(self) -> V {
        self.remove_entry().1
    }

    /// Removes the entry and returns the stored key and value.
    pub fn remove_entry(self) -> (K, V) {
        let node = self.map.remove_slot(self.slot);
        (node.key, node.value)
    }
}

impl<'a, K, V> VacantEntry<'a, K, V> {
    pub(crate) fn new(map: &'a mut OrderedMap<K, V>, key: K) -> Self {
        Self { map, key }
    }

    /// Returns the key that would be inserted.
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Takes back ownership of the key.
    pub fn into_key(self) -> K {
        self.key
    }
}

impl<'a, K: Ord + Clone, V> VacantEntry<'a, K, V> {
    /// Appends the entry at the back and returns its value.
    pub fn insert(self, value: V) -> &'a mut V {
        let map = self.map;
        let slot = map.push_slot(self.key, value);
        &mut map.list.node_mut(slot).value
    }

    /// Appends the entry at the back and returns its handle.
    pub fn insert_handle(self, value: V) -> Handle {
        let slot = self.map.push_slot(self.key, value);
        self.map.list.handle(slot)
    }
}
