use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A single track as the queue sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Identity used by the player (and tests) to tell tracks apart.
    pub id: u64,
    pub path: PathBuf,
    pub title: String,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub duration: Option<Duration>,
    pub display: String,
}

impl Track {
    /// Create a track from an id and title; metadata can be filled in later.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        let title = title.into();
        let display = title.clone();
        Self {
            id,
            path: PathBuf::new(),
            title,
            artist: None,
            album: None,
            duration: None,
            display,
        }
    }

    /// Set the artist and refresh `display`.
    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self.refresh_display();
        self
    }

    /// Rebuild `display` from the current metadata.
    pub fn refresh_display(&mut self) {
        self.display = make_display(&self.title, self.artist.as_deref());
    }
}

fn make_display(title: &str, artist: Option<&str>) -> String {
    match artist {
        Some(a) if !a.trim().is_empty() => format!("{} - {}", a.trim(), title),
        _ => title.to_string(),
    }
}
