//! Doubly-linked entry sequence over slab storage.
//!
//! Nodes live in a [`slab::Slab`]; the list only tracks head and tail.
//! Links are slab slots, with [`NONE`] as the "no link" sentinel. A node
//! never changes slot while it is alive, which is what lets handles and
//! the key index survive reordering: sorting rewrites links, not slots.
//!
//! Every occupied slot is linked, so the list length is the slab length.

use slab::Slab;

use crate::Handle;
use crate::handle::next_stamp;

/// Sentinel slot meaning "no node".
pub(crate) const NONE: usize = usize::MAX;

/// One entry of the sequence, with its links.
#[derive(Debug)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) stamp: u64,
    pub(crate) prev: usize,
    pub(crate) next: usize,
}

/// The ordered sequence half of an `OrderedMap`.
#[derive(Debug)]
pub(crate) struct List<K, V> {
    nodes: Slab<Node<K, V>>,
    head: usize,
    tail: usize,
}

impl<K, V> Default for List<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> List<K, V> {
    pub(crate) fn new() -> Self {
        Self::with_capacity(0)
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: NONE,
            tail: NONE,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    /// Releases spare capacity. Occupied slots never move.
    pub(crate) fn shrink_to_fit(&mut self) {
        self.nodes.shrink_to_fit();
    }

    #[inline]
    pub(crate) fn head(&self) -> usize {
        self.head
    }

    #[inline]
    pub(crate) fn tail(&self) -> usize {
        self.tail
    }

    #[inline]
    pub(crate) fn nodes(&self) -> &Slab<Node<K, V>> {
        &self.nodes
    }

    #[inline]
    pub(crate) fn nodes_mut(&mut self) -> &mut Slab<Node<K, V>> {
        &mut self.nodes
    }

    /// Returns the node at `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is vacant. Callers only pass slots taken from the
    /// index or from links.
    #[inline]
    pub(crate) fn node(&self, slot: usize) -> &Node<K, V> {
        &self.nodes[slot]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, slot: usize) -> &mut Node<K, V> {
        &mut self.nodes[slot]
    }

    /// Returns the handle for the live node at `slot`.
    #[inline]
    pub(crate) fn handle(&self, slot: usize) -> Handle {
        Handle::new(slot, self.nodes[slot].stamp)
    }

    /// Like [`handle`](Self::handle), but maps the sentinel to `None`.
    #[inline]
    pub(crate) fn handle_at(&self, slot: usize) -> Option<Handle> {
        if slot == NONE {
            None
        } else {
            Some(self.handle(slot))
        }
    }

    /// Maps a handle back to its slot if the handle is still live here.
    #[inline]
    pub(crate) fn resolve(&self, handle: Handle) -> Option<usize> {
        match self.nodes.get(handle.slot) {
            Some(node) if node.stamp == handle.stamp => Some(handle.slot),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn next(&self, slot: usize) -> usize {
        self.nodes[slot].next
    }

    #[inline]
    pub(crate) fn prev(&self, slot: usize) -> usize {
        self.nodes[slot].prev
    }

    // ========================================================================
    // Insert / remove
    // ========================================================================

    /// Allocates a node at the back and returns its slot.
    pub(crate) fn push_back(&mut self, key: K, value: V) -> usize {
        let slot = self.nodes.insert(Node {
            key,
            value,
            stamp: next_stamp(),
            prev: NONE,
            next: NONE,
        });
        self.link_back(slot);
        slot
    }

    /// Unlinks and deallocates the node at `slot`.
    pub(crate) fn remove(&mut self, slot: usize) -> Node<K, V> {
        self.unlink(slot);
        self.nodes.remove(slot)
    }

    pub(crate) fn pop_front(&mut self) -> Option<Node<K, V>> {
        if self.head == NONE {
            return None;
        }
        Some(self.remove(self.head))
    }

    pub(crate) fn pop_back(&mut self) -> Option<Node<K, V>> {
        if self.tail == NONE {
            return None;
        }
        Some(self.remove(self.tail))
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.head = NONE;
        self.tail = NONE;
    }

    // ========================================================================
    // Link operations (no alloc/dealloc)
    // ========================================================================

    fn link_back(&mut self, slot: usize) {
        let tail = self.tail;
        let node = &mut self.nodes[slot];
        node.prev = tail;
        node.next = NONE;

        if tail != NONE {
            self.nodes[tail].next = slot;
        } else {
            self.head = slot;
        }
        self.tail = slot;
    }

    fn link_front(&mut self, slot: usize) {
        let head = self.head;
        let node = &mut self.nodes[slot];
        node.next = head;
        node.prev = NONE;

        if head != NONE {
            self.nodes[head].prev = slot;
        } else {
            self.tail = slot;
        }
        self.head = slot;
    }

    /// Detaches the node at `slot` from its neighbours. The node stays in
    /// the slab with cleared links.
    fn unlink(&mut self, slot: usize) {
        let node = &mut self.nodes[slot];
        let (prev, next) = (node.prev, node.next);
        node.prev = NONE;
        node.next = NONE;

        if prev != NONE {
            self.nodes[prev].next = next;
        } else {
            self.head = next;
        }

        if next != NONE {
            self.nodes[next].prev = prev;
        } else {
            self.tail = prev;
        }
    }

    pub(crate) fn move_to_back(&mut self, slot: usize) {
        if self.tail == slot {
            return;
        }
        self.unlink(slot);
        self.link_back(slot);
    }

    pub(crate) fn move_to_front(&mut self, slot: usize) {
        if self.head == slot {
            return;
        }
        self.unlink(slot);
        self.link_front(slot);
    }

    /// Rewrites every link so the list follows `order`.
    ///
    /// `order` must be a permutation of the occupied slots.
    pub(crate) fn relink(&mut self, order: &[usize]) {
        debug_assert_eq!(order.len(), self.len(), "relink order is not a permutation");

        let mut prev = NONE;
        for &slot in order {
            self.nodes[slot].prev = prev;
            if prev != NONE {
                self.nodes[prev].next = slot;
            } else {
                self.head = slot;
            }
            prev = slot;
        }

        if prev != NONE {
            self.nodes[prev].next = NONE;
        } else {
            self.head = NONE;
        }
        self.tail = prev;
    }

    /// Reverses the order in place by swapping every node's links.
    pub(crate) fn reverse(&mut self) {
        for (_, node) in self.nodes.iter_mut() {
            core::mem::swap(&mut node.prev, &mut node.next);
        }
        core::mem::swap(&mut self.head, &mut self.tail);
    }

    // ========================================================================
    // Positional access
    // ========================================================================

    /// Slot of the node at `position`, walking from the nearer end.
    pub(crate) fn nth(&self, position: usize) -> Option<usize> {
        let len = self.len();
        if position >= len {
            return None;
        }

        if position <= len / 2 {
            let mut slot = self.head;
            for _ in 0..position {
                slot = self.nodes[slot].next;
            }
            Some(slot)
        } else {
            let mut slot = self.tail;
            for _ in 0..(len - 1 - position) {
                slot = self.nodes[slot].prev;
            }
            Some(slot)
        }
    }

    /// Position of the node at `slot`, counted from the head.
    pub(crate) fn position(&self, slot: usize) -> usize {
        let mut position = 0;
        let mut curr = self.head;
        while curr != slot {
            debug_assert_ne!(curr, NONE, "slot is not linked into this list");
            curr = self.nodes[curr].next;
            position += 1;
        }
        position
    }

    /// Span covering the whole list, front to back.
    #[inline]
    pub(crate) fn span(&self) -> Span {
        Span {
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }

    /// Iterator over occupied slots in list order.
    #[inline]
    pub(crate) fn slots(&self) -> Slots<'_, K, V> {
        Slots {
            nodes: &self.nodes,
            span: self.span(),
        }
    }

    /// Walks both directions and checks every link against the slab.
    #[cfg(test)]
    pub(crate) fn assert_links(&self) {
        let forward: Vec<usize> = self.slots().collect();
        let mut backward: Vec<usize> = self.slots().rev().collect();
        backward.reverse();

        assert_eq!(forward.len(), self.len());
        assert_eq!(forward, backward);

        let mut prev = NONE;
        let mut curr = self.head;
        let mut count = 0;
        while curr != NONE {
            let node = &self.nodes[curr];
            assert_eq!(node.prev, prev, "broken prev link at slot {curr}");
            prev = curr;
            curr = node.next;
            count += 1;
        }
        assert_eq!(prev, self.tail);
        assert_eq!(count, self.len());
    }
}

// =============================================================================
// Span
// =============================================================================

/// A double-ended range of the list, tracked by its end slots and length.
///
/// Iterators pair a span with whatever borrow of the slab they hold.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Span {
    front: usize,
    back: usize,
    remaining: usize,
}

impl Span {
    #[inline]
    pub(crate) fn remaining(&self) -> usize {
        self.remaining
    }

    #[inline]
    pub(crate) fn next<K, V>(&mut self, nodes: &Slab<Node<K, V>>) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.front;
        self.front = nodes[slot].next;
        self.remaining -= 1;
        Some(slot)
    }

    #[inline]
    pub(crate) fn next_back<K, V>(&mut self, nodes: &Slab<Node<K, V>>) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.back;
        self.back = nodes[slot].prev;
        self.remaining -= 1;
        Some(slot)
    }

    /// Same as [`next`](Self::next), for callers that can only read the
    /// link they are about to follow.
    #[inline]
    pub(crate) fn advance(&mut self, next: usize) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.front;
        self.front = next;
        self.remaining -= 1;
        Some(slot)
    }

    #[inline]
    pub(crate) fn advance_back(&mut self, prev: usize) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.back;
        self.back = prev;
        self.remaining -= 1;
        Some(slot)
    }

    #[inline]
    pub(crate) fn front(&self) -> Option<usize> {
        (self.remaining > 0).then_some(self.front)
    }

    #[inline]
    pub(crate) fn back(&self) -> Option<usize> {
        (self.remaining > 0).then_some(self.back)
    }
}

/// Occupied slots in list order.
pub(crate) struct Slots<'a, K, V> {
    nodes: &'a Slab<Node<K, V>>,
    span: Span,
}

impl<K, V> Iterator for Slots<'_, K, V> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        self.span.next(self.nodes)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.span.remaining(), Some(self.span.remaining()))
    }
}

impl<K, V> DoubleEndedIterator for Slots<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<usize> {
        self.span.next_back(self.nodes)
    }
}
