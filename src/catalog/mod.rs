//! Artist Catalog
//!
//! Read-only reference data for the showcase:
//!
//! - **types**: chart and artist data structures
//! - **seed**: compiled-in chart, featured artists and artist profiles
//!
//! The [`Catalog`] is built once and shared by reference; lookups are by
//! exact artist name.

pub mod seed;
pub mod types;

use std::collections::BTreeMap;

pub use types::{
    format_count, AlbumRecord, ArtistRecord, ArtistTrack, ChartEntry, EntryId, FeaturedArtist,
    Trend, VisualTheme,
};

/// Static artist data keyed by artist name
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    artists: BTreeMap<String, ArtistRecord>,
    featured: Vec<FeaturedArtist>,
}

impl Catalog {
    /// Build a catalog from explicit records
    pub fn new(records: Vec<ArtistRecord>, featured: Vec<FeaturedArtist>) -> Self {
        let artists = records
            .into_iter()
            .map(|record| (record.name.clone(), record))
            .collect();
        Self { artists, featured }
    }

    /// Catalog populated from the compiled-in showcase data
    pub fn seeded() -> Self {
        Self::new(seed::artist_records(), seed::featured_artists())
    }

    /// Look up an artist by exact name
    pub fn artist(&self, name: &str) -> Option<&ArtistRecord> {
        self.artists.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.artists.contains_key(name)
    }

    /// Artists in name order
    pub fn artists(&self) -> impl Iterator<Item = &ArtistRecord> {
        self.artists.values()
    }

    pub fn featured(&self) -> &[FeaturedArtist] {
        &self.featured
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_present_artist() {
        let catalog = Catalog::seeded();
        let artist = catalog.artist("The Void").unwrap();

        assert_eq!(artist.genre, "Alternative Rock");
        assert_eq!(artist.tracks, seed::artist_records()[0].tracks);
        assert_eq!(artist.albums, seed::artist_records()[0].albums);
    }

    #[test]
    fn test_lookup_absent_artist() {
        let catalog = Catalog::seeded();
        assert!(catalog.artist("Nobody").is_none());
        // Present in the chart but without a profile
        assert!(!catalog.contains("Savage Youth"));
    }

    #[test]
    fn test_lookup_is_exact() {
        let catalog = Catalog::seeded();
        assert!(catalog.artist("the void").is_none());
    }

    #[test]
    fn test_featured_order_preserved() {
        let catalog = Catalog::seeded();
        let names: Vec<_> = catalog.featured().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["The Void", "Dead Radio", "Black Highway", "Iron Rust"]);
        assert_eq!(catalog.len(), 4);
    }
}
