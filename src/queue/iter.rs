use crate::library::Track;

use super::arena::{Arena, NodeId, Order};

/// Bidirectional traversal over the active order of a
/// [`PlayQueue`](super::PlayQueue).
///
/// Yields `&Track` from the first real node to the last; never yields the
/// sentinels. Iterating is read-only and does not touch queue state.
pub struct Iter<'a> {
    arena: &'a Arena,
    order: Order,
    front: NodeId,
    back: NodeId,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(super) fn new(
        arena: &'a Arena,
        order: Order,
        head: NodeId,
        tail: NodeId,
        len: usize,
    ) -> Self {
        Self {
            arena,
            order,
            front: arena.next(order, head).expect("head unlinked"),
            back: arena.prev(order, tail).expect("tail unlinked"),
            remaining: len,
        }
    }

    fn track_of(&self, id: NodeId) -> &'a Track {
        self.arena
            .node(id)
            .track
            .as_ref()
            .expect("sentinel in traversal")
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Track;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let id = self.front;
        self.front = self.arena.next(self.order, id).expect("chain broken");
        Some(self.track_of(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let id = self.back;
        self.back = self.arena.prev(self.order, id).expect("chain broken");
        Some(self.track_of(id))
    }
}

impl ExactSizeIterator for Iter<'_> {}
