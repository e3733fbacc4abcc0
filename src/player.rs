//! Now-playing surface
//!
//! Tracks which item is loaded and whether it is playing. There is no
//! audio engine behind it; the state only drives the play/pause icons and
//! the bottom bar.

use serde::Serialize;

use crate::catalog::{ArtistRecord, ArtistTrack, ChartEntry, EntryId};

/// Identifies a playable item across the chart and artist profiles
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum TrackKey {
    Chart { id: EntryId },
    Artist { artist: String, track: u32 },
}

/// What the bottom bar shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayingTrack {
    pub key: TrackKey,
    pub title: String,
    pub artist: String,
    pub album: String,
}

impl PlayingTrack {
    pub fn from_chart(entry: &ChartEntry) -> Self {
        Self {
            key: TrackKey::Chart { id: entry.id },
            title: entry.title.clone(),
            artist: entry.artist.clone(),
            album: entry.album.clone(),
        }
    }

    pub fn from_artist(artist: &ArtistRecord, track: &ArtistTrack) -> Self {
        Self {
            key: TrackKey::Artist {
                artist: artist.name.clone(),
                track: track.id,
            },
            title: track.title.clone(),
            artist: artist.name.clone(),
            album: track.album.clone(),
        }
    }
}

/// Loaded track plus play/pause flag
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NowPlaying {
    current: Option<PlayingTrack>,
    playing: bool,
}

impl NowPlaying {
    /// Progress bar fill while playing, in percent
    pub const PLAYING_PROGRESS: u8 = 45;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&PlayingTrack> {
        self.current.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether this key is loaded and playing
    pub fn is_playing_key(&self, key: &TrackKey) -> bool {
        self.playing && self.current.as_ref().is_some_and(|t| &t.key == key)
    }

    /// Play button on a list row: same track toggles, another one replaces
    pub fn toggle(&mut self, track: PlayingTrack) {
        if self.current.as_ref().is_some_and(|t| t.key == track.key) {
            self.playing = !self.playing;
        } else {
            tracing::debug!(title = %track.title, artist = %track.artist, "Now playing");
            self.current = Some(track);
            self.playing = true;
        }
    }

    /// Play/pause button on the bar; no-op when nothing is loaded
    pub fn toggle_playback(&mut self) -> bool {
        if self.current.is_some() {
            self.playing = !self.playing;
        }
        self.playing
    }

    pub fn progress_percent(&self) -> u8 {
        if self.playing {
            Self::PLAYING_PROGRESS
        } else {
            0
        }
    }
}
