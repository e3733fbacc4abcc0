//! Compiled-in showcase data
//!
//! The landing page and artist profiles are populated from these tables.
//! Nothing here is ever mutated; the chart copies the seed into its own
//! [`crate::chart::ChartStore`].

use super::types::*;

/// Chart entries present at load
pub fn seed_chart() -> Vec<ChartEntry> {
    vec![
        ChartEntry::new(1, "Broken Dreams", "The Void", "Dark Echoes", 45320, 1, Trend::Up),
        ChartEntry::new(2, "Electric Storm", "Dead Radio", "Frequency", 42150, 2, Trend::Same),
        ChartEntry::new(3, "Night Rider", "Black Highway", "Midnight Run", 38900, 3, Trend::Up),
        ChartEntry::new(4, "Rebel Soul", "Iron Rust", "Underground", 35670, 4, Trend::Down),
        ChartEntry::new(5, "Neon Lights", "The Anarchists", "City Burn", 32400, 5, Trend::Up),
        ChartEntry::new(6, "Shadow Walker", "Crimson Age", "Lost Generation", 29800, 6, Trend::Same),
        ChartEntry::new(7, "Rage Machine", "Steel Echo", "Industrial", 27500, 7, Trend::Up),
        ChartEntry::new(8, "Wild Heart", "Savage Youth", "Revolution", 25100, 8, Trend::Down),
    ]
}

/// Cards shown in the featured artists grid
pub fn featured_artists() -> Vec<FeaturedArtist> {
    [
        ("The Void", "Alternative Rock", 12),
        ("Dead Radio", "Indie Rock", 8),
        ("Black Highway", "Hard Rock", 15),
        ("Iron Rust", "Grunge", 10),
    ]
    .into_iter()
    .map(|(name, genre, track_count)| FeaturedArtist {
        name: name.to_string(),
        genre: genre.to_string(),
        track_count,
    })
    .collect()
}

fn track(id: u32, title: &str, album: &str, plays: u64, duration: &str) -> ArtistTrack {
    ArtistTrack {
        id,
        title: title.to_string(),
        album: album.to_string(),
        plays,
        duration: duration.to_string(),
    }
}

fn album(id: u32, title: &str, year: u16, track_count: u32, plays: u64, from: &str, to: &str) -> AlbumRecord {
    AlbumRecord {
        id,
        title: title.to_string(),
        year,
        track_count,
        plays,
        cover: VisualTheme::new(from, to),
    }
}

/// Full profile records for the featured artists
pub fn artist_records() -> Vec<ArtistRecord> {
    vec![
        ArtistRecord {
            name: "The Void".to_string(),
            genre: "Alternative Rock".to_string(),
            bio: "Four friends from a rehearsal basement who turned feedback and \
                  heartbreak into the loudest record of the season."
                .to_string(),
            total_plays: 184_250,
            followers: 12_480,
            theme: VisualTheme::new("#DC2626", "#18181B"),
            tracks: vec![
                track(1, "Broken Dreams", "Dark Echoes", 45320, "3:47"),
                track(2, "Hollow Sky", "Dark Echoes", 31200, "4:12"),
                track(3, "Static Veins", "Dark Echoes", 22840, "3:21"),
                track(4, "Last Signal", "Silent Years", 18930, "5:02"),
                track(5, "Paper Crowns", "Silent Years", 12400, "2:58"),
            ],
            albums: vec![
                album(1, "Dark Echoes", 2024, 9, 128_400, "#DC2626", "#0A0A0A"),
                album(2, "Silent Years", 2023, 7, 55_850, "#7F1D1D", "#18181B"),
            ],
        },
        ArtistRecord {
            name: "Dead Radio".to_string(),
            genre: "Indie Rock".to_string(),
            bio: "A trio chasing lost frequencies: jangling guitars, broken \
                  transmitters and choruses built for late night drives."
                .to_string(),
            total_plays: 97_600,
            followers: 7_315,
            theme: VisualTheme::new("#2563EB", "#18181B"),
            tracks: vec![
                track(1, "Electric Storm", "Frequency", 42150, "3:33"),
                track(2, "White Noise", "Frequency", 20110, "4:05"),
                track(3, "Off Air", "Frequency", 14870, "3:12"),
            ],
            albums: vec![album(1, "Frequency", 2024, 8, 97_600, "#2563EB", "#0A0A0A")],
        },
        ArtistRecord {
            name: "Black Highway".to_string(),
            genre: "Hard Rock".to_string(),
            bio: "Road-worn riffs and engine roar. Black Highway plays every \
                  show like it is the last stop before the border."
                .to_string(),
            total_plays: 151_020,
            followers: 10_904,
            theme: VisualTheme::new("#F59E0B", "#18181B"),
            tracks: vec![
                track(1, "Night Rider", "Midnight Run", 38900, "4:21"),
                track(2, "Gasoline Prayer", "Midnight Run", 27350, "3:55"),
                track(3, "Chrome Horizon", "Midnight Run", 21480, "4:40"),
                track(4, "Exit 66", "Asphalt", 16290, "3:18"),
            ],
            albums: vec![
                album(1, "Midnight Run", 2024, 10, 104_730, "#F59E0B", "#0A0A0A"),
                album(2, "Asphalt", 2022, 5, 46_290, "#B45309", "#18181B"),
            ],
        },
        ArtistRecord {
            name: "Iron Rust".to_string(),
            genre: "Grunge".to_string(),
            bio: "Fuzz pedals, flannel and a garage that never sleeps. Iron \
                  Rust write songs about the city that forgot them."
                .to_string(),
            total_plays: 88_940,
            followers: 6_022,
            theme: VisualTheme::new("#A16207", "#18181B"),
            tracks: vec![
                track(1, "Rebel Soul", "Underground", 35670, "3:59"),
                track(2, "Concrete Bloom", "Underground", 19820, "4:33"),
                track(3, "Corroded", "Underground", 13450, "2:47"),
            ],
            albums: vec![album(1, "Underground", 2024, 10, 88_940, "#A16207", "#0A0A0A")],
        },
    ]
}
