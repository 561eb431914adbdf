//! Track model used by the queue.
//!
//! The queue treats tracks as opaque payloads: it stores them, hands
//! references back out, and never interprets metadata. The numeric `id` is
//! the identity the surrounding player uses to tell tracks apart.

mod model;

pub use model::*;
