//! Iterators over an [`OrderedMap`](crate::OrderedMap).
//!
//! All iterators walk the entry list in its current order and are
//! double-ended, so `.rev()` gives reverse traversal.

use core::iter::FusedIterator;
use core::mem;

use slab::Slab;

use crate::Handle;
use crate::list::{List, Node, Span};

// =============================================================================
// Iter
// =============================================================================

/// Iterator over `(&K, &V)` in map order.
pub struct Iter<'a, K, V> {
    nodes: &'a Slab<Node<K, V>>,
    span: Span,
}

impl<'a, K, V> Iter<'a, K, V> {
    #[inline]
    pub(crate) fn new(list: &'a List<K, V>) -> Self {
        Self {
            nodes: list.nodes(),
            span: list.span(),
        }
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            span: self.span,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.span.next(self.nodes)?;
        let node = &self.nodes[slot];
        Some((&node.key, &node.value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.span.remaining(), Some(self.span.remaining()))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let slot = self.span.next_back(self.nodes)?;
        let node = &self.nodes[slot];
        Some((&node.key, &node.value))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

// =============================================================================
// IterMut
// =============================================================================

/// Iterator over `(&K, &mut V)` in map order.
///
/// Creating one costs a pass over the slab: each node's exclusive borrow
/// is taken up front, indexed by slot, and handed out as the links are
/// followed. Every node is yielded at most once. The slot table is sized
/// by the highest occupied slot, not by capacity.
pub struct IterMut<'a, K, V> {
    slots: Vec<Option<&'a mut Node<K, V>>>,
    span: Span,
}

impl<'a, K, V> IterMut<'a, K, V> {
    pub(crate) fn new(list: &'a mut List<K, V>) -> Self {
        let span = list.span();
        let mut slots: Vec<Option<&'a mut Node<K, V>>> = Vec::with_capacity(list.len());
        for (slot, node) in list.nodes_mut().iter_mut() {
            if slots.len() <= slot {
                slots.resize_with(slot + 1, || None);
            }
            slots[slot] = Some(node);
        }
        Self { slots, span }
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.span.front()?;
        let node = self.slots[slot].take()?;
        self.span.advance(node.next);
        Some((&node.key, &mut node.value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.span.remaining(), Some(self.span.remaining()))
    }
}

impl<K, V> DoubleEndedIterator for IterMut<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let slot = self.span.back()?;
        let node = self.slots[slot].take()?;
        self.span.advance_back(node.prev);
        Some((&node.key, &mut node.value))
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}
impl<K, V> FusedIterator for IterMut<'_, K, V> {}

// =============================================================================
// Keys / Values / ValuesMut
// =============================================================================

/// Iterator over keys in map order.
pub struct Keys<'a, K, V> {
    pub(crate) inner: Iter<'a, K, V>,
}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(k, _)| k)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}
impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// Iterator over values in map order.
pub struct Values<'a, K, V> {
    pub(crate) inner: Iter<'a, K, V>,
}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, v)| v)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
impl<K, V> FusedIterator for Values<'_, K, V> {}

/// Iterator over mutable values in map order.
pub struct ValuesMut<'a, K, V> {
    pub(crate) inner: IterMut<'a, K, V>,
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    #[inline]
    fn next(&mut self) -> Option<&'a mut V> {
        self.inner.next().map(|(_, v)| v)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for ValuesMut<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for ValuesMut<'_, K, V> {}
impl<K, V> FusedIterator for ValuesMut<'_, K, V> {}

// =============================================================================
// Handles
// =============================================================================

/// Iterator over entry handles in map order.
///
/// Useful when the map is about to be modified: collect the handles first,
/// then act on them.
pub struct Handles<'a, K, V> {
    nodes: &'a Slab<Node<K, V>>,
    span: Span,
}

impl<'a, K, V> Handles<'a, K, V> {
    #[inline]
    pub(crate) fn new(list: &'a List<K, V>) -> Self {
        Self {
            nodes: list.nodes(),
            span: list.span(),
        }
    }
}

impl<K, V> Clone for Handles<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            span: self.span,
        }
    }
}

impl<K, V> Iterator for Handles<'_, K, V> {
    type Item = Handle;

    #[inline]
    fn next(&mut self) -> Option<Handle> {
        let slot = self.span.next(self.nodes)?;
        Some(Handle::new(slot, self.nodes[slot].stamp))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.span.remaining(), Some(self.span.remaining()))
    }
}

impl<K, V> DoubleEndedIterator for Handles<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Handle> {
        let slot = self.span.next_back(self.nodes)?;
        Some(Handle::new(slot, self.nodes[slot].stamp))
    }
}

impl<K, V> ExactSizeIterator for Handles<'_, K, V> {}
impl<K, V> FusedIterator for Handles<'_, K, V> {}

// =============================================================================
// IntoIter / Drain
// =============================================================================

/// Owning iterator over `(K, V)` in map order.
pub struct IntoIter<K, V> {
    pub(crate) list: List<K, V>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<(K, V)> {
        self.list.pop_front().map(|node| (node.key, node.value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<(K, V)> {
        self.list.pop_back().map(|node| (node.key, node.value))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}

/// Removes and yields every entry in map order.
///
/// Owns the entries taken out of the map, so the map is already empty
/// while this exists. On drop, the emptied list is handed back so its
/// allocation is reused.
pub struct Drain<'a, K, V> {
    list: List<K, V>,
    home: &'a mut List<K, V>,
}

impl<'a, K, V> Drain<'a, K, V> {
    pub(crate) fn new(list: List<K, V>, home: &'a mut List<K, V>) -> Self {
        debug_assert!(home.is_empty(), "drain target still holds entries");
        Self { list, home }
    }
}

impl<K, V> Iterator for Drain<'_, K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<(K, V)> {
        self.list.pop_front().map(|node| (node.key, node.value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<K, V> DoubleEndedIterator for Drain<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<(K, V)> {
        self.list.pop_back().map(|node| (node.key, node.value))
    }
}

impl<K, V> ExactSizeIterator for Drain<'_, K, V> {}
impl<K, V> FusedIterator for Drain<'_, K, V> {}

impl<K, V> Drop for Drain<'_, K, V> {
    fn drop(&mut self) {
        self.list.clear();
        mem::swap(self.home, &mut self.list);
    }
}
