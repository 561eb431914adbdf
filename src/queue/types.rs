//! Small public types shared with the player layer.

use serde::{Deserialize, Serialize};

/// Repeat behavior requested by the player.
///
/// The queue accepts this on [`next_track`](crate::PlayQueue::next_track)
/// but never wraps around on its own: when `next_track` reports the end of
/// the queue and repeat-all is active, restarting from the top is the
/// player's call (via [`set_current`](crate::PlayQueue::set_current)).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepeatMode {
    /// Stop at the end of the queue.
    Off,
    /// Repeat the current track when it ends.
    RepeatOne,
    /// Wrap around to the start of the queue.
    RepeatAll,
}

impl Default for RepeatMode {
    fn default() -> Self {
        Self::Off
    }
}
