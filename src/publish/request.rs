//! Chart entry templates built from finished submissions

use rand::Rng;
use std::ops::RangeInclusive;

use crate::wizard::Submission;

/// Everything needed to synthesize a chart entry except id and rank,
/// which the chart assigns when the entry is staged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRequest {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub plays: u64,
}

impl PublishRequest {
    /// Album column value for singles
    pub const SINGLE_LABEL: &'static str = "Single";

    pub fn from_submission<H>(submission: &Submission<H>, plays: u64) -> Self {
        let album = match submission {
            Submission::Single { .. } => Self::SINGLE_LABEL.to_string(),
            Submission::Album { tracks, .. } => album_label(tracks.len()),
        };

        Self {
            title: submission.headline().to_string(),
            artist: submission.artist().to_string(),
            album,
            plays: plays.max(1),
        }
    }

    /// Build a request with a play count drawn from `plays`
    pub fn with_random_plays<H>(submission: &Submission<H>, plays: RangeInclusive<u64>) -> Self {
        let plays = if plays.is_empty() {
            *plays.start()
        } else {
            rand::thread_rng().gen_range(plays)
        };
        Self::from_submission(submission, plays)
    }
}

/// Album column value for album releases: `Album · 12 tracks`
fn album_label(track_count: usize) -> String {
    if track_count == 1 {
        "Album · 1 track".to_string()
    } else {
        format!("Album · {} tracks", track_count)
    }
}
