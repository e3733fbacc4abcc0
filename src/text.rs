//! Plain-text renderers for terminal output

use std::fmt::Write;

use crate::catalog::{format_count, ArtistRecord, ChartEntry, FeaturedArtist};
use crate::chart::ChartStore;
use crate::player::NowPlaying;

/// Chart table; rows flagged by `is_new` get a `NEW` badge
pub fn chart_table(entries: &[ChartEntry], is_new: impl Fn(&ChartEntry) -> bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4}  {:<2} {:<28} {:<20} {:<22} {:>10}",
        "#", "", "TITLE", "ARTIST", "ALBUM", "PLAYS"
    );
    for entry in entries {
        let badge = if is_new(entry) { " NEW" } else { "" };
        let _ = writeln!(
            out,
            "{:>4}  {:<2} {:<28} {:<20} {:<22} {:>10}{}",
            entry.rank,
            entry.trend.symbol(),
            truncate(&entry.title, 28),
            truncate(&entry.artist, 20),
            truncate(&entry.album, 22),
            format_count(entry.plays),
            badge
        );
    }
    out
}

/// Chart table straight from a store
pub fn chart_store_table(store: &ChartStore) -> String {
    chart_table(store.entries(), |e| store.is_new(e.id))
}

pub fn featured_list(featured: &[FeaturedArtist]) -> String {
    let mut out = String::new();
    for artist in featured {
        let _ = writeln!(
            out,
            "{:<20} {:<18} {:>3} tracks",
            artist.name, artist.genre, artist.track_count
        );
    }
    out
}

/// Profile page: header, tracks, albums, bio
pub fn artist_profile(record: &ArtistRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", record.name);
    let _ = writeln!(
        out,
        "{} • {} followers • {} plays",
        record.genre,
        format_count(record.followers),
        format_count(record.total_plays)
    );
    let _ = writeln!(out, "\nTRACKS");
    for (index, track) in record.tracks.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {:<24} {:<18} {:>8} plays  {:>5}",
            index + 1,
            truncate(&track.title, 24),
            truncate(&track.album, 18),
            format_count(track.plays),
            track.duration
        );
    }
    let _ = writeln!(out, "\nALBUMS");
    for album in &record.albums {
        let _ = writeln!(
            out,
            "     {:<24} {} • {} tracks • {} plays",
            truncate(&album.title, 24),
            album.year,
            album.track_count,
            format_count(album.plays)
        );
    }
    let _ = writeln!(out, "\nABOUT\n{}", record.bio);
    out
}

/// One-line now-playing bar
pub fn now_playing_bar(player: &NowPlaying) -> String {
    match player.current() {
        Some(track) => format!(
            "{} {} - {} [{}%]",
            if player.is_playing() { "▶" } else { "⏸" },
            track.artist,
            track.title,
            player.progress_percent()
        ),
        None => "Nothing playing".to_string(),
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        value.to_string()
    } else {
        let mut cut: String = value.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}
