//! Core data types for the chart and the artist catalog
//!
//! - `ChartEntry`: one ranked row of the live chart
//! - `EntryId`: unique chart entry identifier
//! - `Trend`: movement indicator shown next to the rank
//! - `ArtistRecord`, `ArtistTrack`, `AlbumRecord`: profile reference data
//! - `FeaturedArtist`: a card in the landing page grid

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a chart entry
///
/// Seeded entries use small sequential ids; synthesized entries use
/// millisecond timestamps (see [`crate::chart::EntryIdGenerator`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub i64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Chart movement since the last update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Same,
}

impl Trend {
    /// Short glyph for text renderers
    pub fn symbol(&self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
            Trend::Same => "–",
        }
    }
}

/// A single row of the live chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEntry {
    pub id: EntryId,
    pub title: String,
    pub artist: String,
    pub album: String,
    /// Number of plays (never negative)
    pub plays: u64,
    /// 1-based position as assigned when the entry was created
    pub rank: u32,
    pub trend: Trend,
}

impl ChartEntry {
    pub fn new(
        id: i64,
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
        plays: u64,
        rank: u32,
        trend: Trend,
    ) -> Self {
        Self {
            id: EntryId(id),
            title: title.into(),
            artist: artist.into(),
            album: album.into(),
            plays,
            rank,
            trend,
        }
    }
}

/// Two-stop gradient used for artist photos and album covers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualTheme {
    pub from: String,
    pub to: String,
}

impl VisualTheme {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// CSS `linear-gradient` at the given angle
    pub fn css_gradient(&self, angle_deg: u16) -> String {
        format!(
            "linear-gradient({}deg, {} 0%, {} 100%)",
            angle_deg, self.from, self.to
        )
    }
}

/// A track listed on an artist profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistTrack {
    pub id: u32,
    pub title: String,
    pub album: String,
    pub plays: u64,
    /// Display duration, `m:ss`
    pub duration: String,
}

/// An album listed on an artist profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumRecord {
    pub id: u32,
    pub title: String,
    pub year: u16,
    pub track_count: u32,
    pub plays: u64,
    pub cover: VisualTheme,
}

/// Static profile data for one artist, keyed by `name`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistRecord {
    pub name: String,
    pub genre: String,
    pub bio: String,
    pub total_plays: u64,
    pub followers: u64,
    pub theme: VisualTheme,
    pub tracks: Vec<ArtistTrack>,
    pub albums: Vec<AlbumRecord>,
}

impl ArtistRecord {
    pub fn track(&self, id: u32) -> Option<&ArtistTrack> {
        self.tracks.iter().find(|t| t.id == id)
    }
}

/// Card in the featured artists grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedArtist {
    pub name: String,
    pub genre: String,
    pub track_count: u32,
}

/// Format a count with thousands separators: `45320` → `"45,320"`
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(45320), "45,320");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_trend_serialization() {
        let json = serde_json::to_string(&Trend::Up).unwrap();
        assert_eq!(json, "\"up\"");
        let trend: Trend = serde_json::from_str("\"same\"").unwrap();
        assert_eq!(trend, Trend::Same);
    }

    #[test]
    fn test_entry_id_is_transparent() {
        let entry = ChartEntry::new(7, "Rage Machine", "Steel Echo", "Industrial", 27500, 7, Trend::Up);
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["trend"], "up");
    }

    #[test]
    fn test_css_gradient() {
        let theme = VisualTheme::new("#DC2626", "#18181B");
        assert_eq!(
            theme.css_gradient(135),
            "linear-gradient(135deg, #DC2626 0%, #18181B 100%)"
        );
    }
}
