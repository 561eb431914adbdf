//! Shuffled-order regeneration.
//!
//! Walks the linear order once, splits it into three runs around the
//! current track and the sub-queue boundary, permutes the outer runs and
//! rebuilds the shuffled link-set in a single pass. Only the permutations
//! are random; the run boundaries are fixed:
//!
//! 1. tracks before the current one (permuted)
//! 2. the sub-queue block: after the current track, up to and including the
//!    boundary (kept in original relative order)
//! 3. everything after the block (permuted)
//!
//! The current track sits between runs 1 and 2 and belongs to neither.
//! Without a current track there is no pivot: run 1 extends through the
//! boundary and run 2 is empty. The linear link-set is never touched.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::trace;

use super::arena::{Arena, NodeId, Order};

pub(super) fn regenerate(
    arena: &mut Arena,
    head: NodeId,
    tail: NodeId,
    current: Option<NodeId>,
    sub_queue_tail: Option<NodeId>,
    rng: &mut impl Rng,
) {
    let mut before: Vec<NodeId> = Vec::new();
    let mut sub_queue: Vec<NodeId> = Vec::new();
    let mut after: Vec<NodeId> = Vec::new();

    // 0 = before the pivot, 1 = inside the sub-queue block, 2 = past it
    let mut segment = 0;
    let mut node = arena.next(Order::Linear, head).expect("head unlinked");
    while node != tail {
        if Some(node) == current {
            // The block only exists when the boundary still lies ahead.
            let boundary_ahead =
                segment == 0 && sub_queue_tail.is_some() && sub_queue_tail != current;
            segment = if boundary_ahead { 1 } else { 2 };
        } else {
            match segment {
                0 => before.push(node),
                1 => sub_queue.push(node),
                _ => after.push(node),
            }
            if Some(node) == sub_queue_tail {
                segment = 2;
            }
        }
        node = arena.next(Order::Linear, node).expect("chain broken");
    }

    before.shuffle(rng);
    after.shuffle(rng);

    trace!(
        before = before.len(),
        sub_queue = sub_queue.len(),
        after = after.len(),
        "rebuilding shuffled order"
    );

    // head -> permuted(before) -> current -> sub-queue block -> permuted(after) -> tail
    let mut last = head;
    let chain = before
        .iter()
        .chain(current.iter())
        .chain(sub_queue.iter())
        .chain(after.iter());
    for &node in chain {
        arena.link(Order::Shuffled, last, node);
        last = node;
    }
    arena.link(Order::Shuffled, last, tail);
}
