//! The dual-order playback queue.
//!
//! [`PlayQueue`] keeps every track linked into two independent orders at
//! once: the linear order tracks were added in, and a shuffled order that is
//! regenerated when shuffle turns on. Removal and reordering are applied to
//! both link-sets, so switching shuffle off never loses the original
//! ordering.

mod arena;
mod iter;
mod model;
mod shuffle;
mod types;

pub use iter::Iter;
pub use model::PlayQueue;
pub use types::RepeatMode;
