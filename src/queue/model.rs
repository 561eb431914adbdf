use std::fmt;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::debug;

use crate::error::{Error, Result};
use crate::library::Track;

use super::arena::{Arena, NodeId, Order};
use super::iter::Iter;
use super::shuffle::regenerate;
use super::types::RepeatMode;

/// A playback queue maintaining two independent orders over one set of
/// tracks.
///
/// Tracks are appended with [`enqueue`](Self::enqueue) or pushed into the
/// "play next" sub-queue with [`enqueue_next`](Self::enqueue_next). All
/// positional operations (indices, navigation, traversal) follow the
/// *active* order: the linear insertion order, or the shuffled order while
/// [`set_shuffled`](Self::set_shuffled) is on. Removal and moves always
/// update both orders, so disabling shuffle restores exactly the linear
/// order the listener built.
///
/// Two positions survive every mutation: the currently playing track, and
/// the sub-queue boundary marking the end of the contiguous "play next" run
/// that should be heard before the rest of the queue resumes.
pub struct PlayQueue {
    arena: Arena,
    head: NodeId,
    tail: NodeId,
    len: usize,
    shuffled: bool,
    current: Option<NodeId>,
    sub_queue_tail: Option<NodeId>,
    rng: SmallRng,
}

impl PlayQueue {
    /// Create an empty queue with an OS-seeded shuffle source.
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_os_rng())
    }

    /// Create an empty queue whose shuffle order is deterministic under
    /// `seed`. Two queues built from the same seed and the same call
    /// sequence shuffle identically.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    fn with_rng(rng: SmallRng) -> Self {
        let mut arena = Arena::new();
        let head = arena.insert(None);
        let tail = arena.insert(None);
        for order in Order::BOTH {
            arena.link(order, head, tail);
        }
        Self {
            arena,
            head,
            tail,
            len: 0,
            shuffled: false,
            current: None,
            sub_queue_tail: None,
            rng,
        }
    }

    /// The order positional operations currently follow.
    fn active(&self) -> Order {
        if self.shuffled {
            Order::Shuffled
        } else {
            Order::Linear
        }
    }

    /// Append `track` at the end of the queue, in both orders.
    ///
    /// The first track ever added also seeds the sub-queue boundary.
    pub fn enqueue(&mut self, track: Track) {
        debug!(id = track.id, "enqueue");
        let node = self.arena.insert(Some(track));
        for order in Order::BOTH {
            let last = self.arena.prev(order, self.tail).expect("tail unlinked");
            self.arena.link(order, last, node);
            self.arena.link(order, node, self.tail);
        }
        if self.len == 0 {
            self.sub_queue_tail = Some(node);
        }
        self.len += 1;
    }

    /// Insert `track` directly after the sub-queue boundary ("play next")
    /// and advance the boundary onto it.
    ///
    /// On an empty queue this is identical to [`enqueue`](Self::enqueue).
    /// When the boundary was cleared by removals at the front, the run
    /// starts over at the head of the queue.
    pub fn enqueue_next(&mut self, track: Track) {
        if self.is_empty() {
            self.enqueue(track);
            return;
        }
        debug!(id = track.id, "enqueue_next");
        let node = self.arena.insert(Some(track));
        let after = self.sub_queue_tail.unwrap_or(self.head);
        for order in Order::BOTH {
            let succ = self.arena.next(order, after).expect("boundary unlinked");
            self.arena.link(order, after, node);
            self.arena.link(order, node, succ);
        }
        self.sub_queue_tail = Some(node);
        self.len += 1;
    }

    /// Remove and return the track at `index` in the active order.
    ///
    /// The node is unlinked from both orders, so a track removed while
    /// shuffled disappears from the linear order too. The current track and
    /// the sub-queue boundary retreat to the removed node's active-order
    /// predecessor when they pointed at it, or clear when that predecessor
    /// is the head of the queue.
    pub fn remove(&mut self, index: usize) -> Result<Track> {
        let node = self.node_at(index)?;
        let prev = self
            .arena
            .prev(self.active(), node)
            .expect("node unlinked");

        for order in Order::BOTH {
            let p = self.arena.prev(order, node).expect("node unlinked");
            let n = self.arena.next(order, node).expect("node unlinked");
            self.arena.link(order, p, n);
        }

        if self.sub_queue_tail == Some(node) {
            self.sub_queue_tail = (prev != self.head).then_some(prev);
        }
        if self.current == Some(node) {
            self.current = (prev != self.head).then_some(prev);
        }

        self.len -= 1;
        let track = self
            .arena
            .remove(node)
            .expect("sentinel in track position");
        debug!(id = track.id, index, "removed track");
        Ok(track)
    }

    /// Move the track at `from` to sit at `to` in the active order.
    ///
    /// Moving forward places it right after the node originally at `to`;
    /// moving backward places it right before. The same relative splice is
    /// applied to both orders. The currently playing track cannot be moved.
    pub fn move_track(&mut self, from: usize, to: usize) -> Result<()> {
        if from == to {
            return Ok(());
        }
        if from >= self.len {
            return Err(Error::OutOfRange {
                index: from,
                len: self.len,
            });
        }
        if to >= self.len {
            return Err(Error::OutOfRange {
                index: to,
                len: self.len,
            });
        }

        // One walk of the active order resolves both nodes.
        let active = self.active();
        let mut src = None;
        let mut dst = None;
        let mut node = self
            .arena
            .next(active, self.head)
            .expect("head unlinked");
        for i in 0..=from.max(to) {
            if i == from {
                src = Some(node);
            } else if i == to {
                dst = Some(node);
            }
            node = self.arena.next(active, node).expect("chain shorter than len");
        }
        let src = src.expect("source index not reached");
        let dst = dst.expect("target index not reached");

        if self.current == Some(src) {
            return Err(Error::CurrentTrackPinned);
        }

        if self.sub_queue_tail == Some(src) {
            let prev = self.arena.prev(active, src).expect("node unlinked");
            self.sub_queue_tail = (prev != self.head).then_some(prev);
        }

        for order in Order::BOTH {
            let p = self.arena.prev(order, src).expect("node unlinked");
            let n = self.arena.next(order, src).expect("node unlinked");
            self.arena.link(order, p, n);

            if from < to {
                let succ = self.arena.next(order, dst).expect("target unlinked");
                self.arena.link(order, dst, src);
                self.arena.link(order, src, succ);
            } else {
                let pred = self.arena.prev(order, dst).expect("target unlinked");
                self.arena.link(order, pred, src);
                self.arena.link(order, src, dst);
            }
        }

        debug!(from, to, "moved track");
        Ok(())
    }

    /// Switch the active order.
    ///
    /// Turning shuffle on rebuilds the shuffled link-set around the current
    /// track and the sub-queue block (see [`enqueue_next`](Self::enqueue_next)).
    /// Turning it off is a flag flip: the linear order was never disturbed.
    pub fn set_shuffled(&mut self, shuffled: bool) {
        if shuffled && !self.shuffled {
            regenerate(
                &mut self.arena,
                self.head,
                self.tail,
                self.current,
                self.sub_queue_tail,
                &mut self.rng,
            );
        }
        self.shuffled = shuffled;
    }

    pub fn is_shuffled(&self) -> bool {
        self.shuffled
    }

    /// Advance the current track one step along the active order.
    ///
    /// Returns `false` without changing anything when no track is current or
    /// the current track is the last one. The repeat mode is accepted for
    /// the player's benefit; wraparound on repeat-all is the player's job,
    /// never the queue's.
    pub fn next_track(&mut self, _repeat: RepeatMode) -> bool {
        let Some(current) = self.current else {
            return false;
        };
        let next = self
            .arena
            .next(self.active(), current)
            .expect("current unlinked");
        if next == self.tail {
            return false;
        }
        self.current = Some(next);
        true
    }

    /// Step the current track back along the active order.
    ///
    /// Returns `false` without changing anything when no track is current or
    /// the current track is the first one.
    pub fn prev_track(&mut self) -> bool {
        let Some(current) = self.current else {
            return false;
        };
        let prev = self
            .arena
            .prev(self.active(), current)
            .expect("current unlinked");
        if prev == self.head {
            return false;
        }
        self.current = Some(prev);
        true
    }

    /// Mark the track at `index` in the active order as currently playing.
    pub fn set_current(&mut self, index: usize) -> Result<()> {
        let node = self.node_at(index)?;
        self.current = Some(node);
        Ok(())
    }

    /// The currently playing track, if any.
    pub fn current(&self) -> Option<&Track> {
        self.current.map(|id| self.track(id))
    }

    /// The last track of the "play next" run, if any.
    pub fn sub_queue_boundary(&self) -> Option<&Track> {
        self.sub_queue_tail.map(|id| self.track(id))
    }

    /// Track at `index` in the active order, or `None` when out of range.
    pub fn track_at(&self, index: usize) -> Option<&Track> {
        let node = self.node_at(index).ok()?;
        Some(self.track(node))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every track and reset to a fresh empty queue.
    pub fn clear(&mut self) {
        debug!(len = self.len, "clearing queue");
        self.arena.clear();
        self.head = self.arena.insert(None);
        self.tail = self.arena.insert(None);
        for order in Order::BOTH {
            self.arena.link(order, self.head, self.tail);
        }
        self.current = None;
        self.sub_queue_tail = None;
        self.len = 0;
    }

    /// Lazy, restartable, bidirectional traversal of the active order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.arena, self.active(), self.head, self.tail, self.len)
    }

    /// A point-in-time copy of the active order.
    pub fn snapshot(&self) -> Vec<Track> {
        self.iter().cloned().collect()
    }

    /// Resolve `index` in the active order to a node id.
    fn node_at(&self, index: usize) -> Result<NodeId> {
        if index >= self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }
        let active = self.active();
        let mut node = self
            .arena
            .next(active, self.head)
            .expect("head unlinked");
        for _ in 0..index {
            node = self.arena.next(active, node).expect("chain shorter than len");
        }
        Ok(node)
    }

    fn track(&self, id: NodeId) -> &Track {
        self.arena
            .node(id)
            .track
            .as_ref()
            .expect("sentinel in track position")
    }
}

impl Default for PlayQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlayQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Queue: [")?;
        for (i, track) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", track.id)?;
        }
        write!(f, "]")?;
        match self.current() {
            Some(track) => write!(f, " current: {}", track.id)?,
            None => write!(f, " current: none")?,
        }
        match self.sub_queue_boundary() {
            Some(track) => write!(f, " sub_queue_tail: {}", track.id),
            None => write!(f, " sub_queue_tail: none"),
        }
    }
}
