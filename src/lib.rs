//! segue: a playback queue that keeps two orders over one set of tracks.
//!
//! The central type is [`PlayQueue`]. Every track in it is linked into two
//! independent orders at once: the linear order tracks were added in, and a
//! shuffled order regenerated on demand. Positional operations (remove, move,
//! jump, traverse) follow whichever order is active, while structural
//! mutations are applied to both, so turning shuffle off always restores
//! exactly the order the listener built.
//!
//! The queue also tracks the currently playing position and a "play next"
//! sub-queue boundary, both of which survive mutation and order switches.

mod error;
mod library;
mod queue;

pub use error::{Error, Result};
pub use library::Track;
pub use queue::{Iter, PlayQueue, RepeatMode};
