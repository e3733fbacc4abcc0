//! Artist profile overlay state
//!
//! At most one profile is open at a time; opening another artist replaces
//! the current one. Only artists present in the [`Catalog`] can be opened.

use serde::Serialize;

use crate::catalog::{ArtistRecord, Catalog};
use crate::player::PlayingTrack;

/// Tabs of the profile overlay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileTab {
    #[default]
    Tracks,
    Albums,
    About,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 3] = [ProfileTab::Tracks, ProfileTab::Albums, ProfileTab::About];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileTab::Tracks => "TRACKS",
            ProfileTab::Albums => "ALBUMS",
            ProfileTab::About => "ABOUT",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileOverlay {
    open: Option<String>,
    tab: ProfileTab,
}

impl ProfileOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the profile for `name`
    ///
    /// Returns `None` and leaves the overlay unchanged when the catalog has
    /// no such artist.
    pub fn open<'c>(&mut self, catalog: &'c Catalog, name: &str) -> Option<&'c ArtistRecord> {
        let Some(record) = catalog.artist(name) else {
            tracing::debug!(artist = %name, "No profile for artist");
            return None;
        };
        self.open = Some(record.name.clone());
        self.tab = ProfileTab::default();
        Some(record)
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Name of the open artist
    pub fn artist_name(&self) -> Option<&str> {
        self.open.as_deref()
    }

    /// Record of the open artist
    pub fn current<'c>(&self, catalog: &'c Catalog) -> Option<&'c ArtistRecord> {
        self.open.as_deref().and_then(|name| catalog.artist(name))
    }

    pub fn tab(&self) -> ProfileTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: ProfileTab) {
        self.tab = tab;
    }

    /// Resolve a track of the open artist for the now-playing surface
    pub fn play(&self, catalog: &Catalog, track_id: u32) -> Option<PlayingTrack> {
        let artist = self.current(catalog)?;
        let track = artist.track(track_id)?;
        Some(PlayingTrack::from_artist(artist, track))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed;
    use crate::player::TrackKey;

    #[test]
    fn test_open_present_artist() {
        let catalog = Catalog::seeded();
        let mut overlay = ProfileOverlay::new();

        let record = overlay.open(&catalog, "Dead Radio").unwrap();
        let source = seed::artist_records()
            .into_iter()
            .find(|r| r.name == "Dead Radio")
            .unwrap();

        assert_eq!(record.tracks, source.tracks);
        assert_eq!(record.albums, source.albums);
        assert!(overlay.is_open());
        assert_eq!(overlay.artist_name(), Some("Dead Radio"));
    }

    #[test]
    fn test_open_absent_artist_is_noop() {
        let catalog = Catalog::seeded();
        let mut overlay = ProfileOverlay::new();

        assert!(overlay.open(&catalog, "Savage Youth").is_none());
        assert!(!overlay.is_open());

        overlay.open(&catalog, "The Void");
        assert!(overlay.open(&catalog, "Unknown").is_none());
        assert_eq!(overlay.artist_name(), Some("The Void"));
    }

    #[test]
    fn test_single_overlay() {
        let catalog = Catalog::seeded();
        let mut overlay = ProfileOverlay::new();

        overlay.open(&catalog, "The Void");
        overlay.select_tab(ProfileTab::About);
        overlay.open(&catalog, "Iron Rust");

        assert_eq!(overlay.artist_name(), Some("Iron Rust"));
        assert_eq!(overlay.tab(), ProfileTab::Tracks);

        overlay.close();
        assert!(overlay.current(&catalog).is_none());
    }

    #[test]
    fn test_play_track_from_profile() {
        let catalog = Catalog::seeded();
        let mut overlay = ProfileOverlay::new();
        assert!(overlay.play(&catalog, 1).is_none());

        overlay.open(&catalog, "Black Highway");
        let track = overlay.play(&catalog, 2).unwrap();
        assert_eq!(track.title, "Gasoline Prayer");
        assert_eq!(track.artist, "Black Highway");
        assert_eq!(
            track.key,
            TrackKey::Artist {
                artist: "Black Highway".to_string(),
                track: 2
            }
        );

        assert!(overlay.play(&catalog, 99).is_none());
    }
}
