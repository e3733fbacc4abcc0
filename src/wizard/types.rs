//! Upload wizard data types
//!
//! `Submission` is a closed variant: a single carries exactly one track and
//! a title, an album carries 1..=25 tracks and an album name. Fields that
//! do not apply to a variant do not exist on it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What the user is uploading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadType {
    Single,
    Album,
}

impl UploadType {
    /// Track cap for a single
    pub const SINGLE_MAX_TRACKS: usize = 1;
    /// Track cap for an album
    pub const ALBUM_MAX_TRACKS: usize = 25;

    /// Maximum number of audio files a selection may hold
    pub fn max_tracks(&self) -> usize {
        match self {
            UploadType::Single => Self::SINGLE_MAX_TRACKS,
            UploadType::Album => Self::ALBUM_MAX_TRACKS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UploadType::Single => "single",
            UploadType::Album => "album",
        }
    }
}

impl fmt::Display for UploadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wizard screens in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    Type,
    Files,
    Info,
    Photo,
    Video,
    Credits,
    Success,
}

impl WizardStep {
    pub const ALL: [WizardStep; 7] = [
        WizardStep::Type,
        WizardStep::Files,
        WizardStep::Info,
        WizardStep::Photo,
        WizardStep::Video,
        WizardStep::Credits,
        WizardStep::Success,
    ];

    /// Adjacent step forward, `None` on the terminal step
    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Type => Some(WizardStep::Files),
            WizardStep::Files => Some(WizardStep::Info),
            WizardStep::Info => Some(WizardStep::Photo),
            WizardStep::Photo => Some(WizardStep::Video),
            WizardStep::Video => Some(WizardStep::Credits),
            WizardStep::Credits => Some(WizardStep::Success),
            WizardStep::Success => None,
        }
    }

    /// Adjacent step backward; there is no way back from `Type` or `Success`
    pub fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Type | WizardStep::Success => None,
            WizardStep::Files => Some(WizardStep::Type),
            WizardStep::Info => Some(WizardStep::Files),
            WizardStep::Photo => Some(WizardStep::Info),
            WizardStep::Video => Some(WizardStep::Photo),
            WizardStep::Credits => Some(WizardStep::Video),
        }
    }

    /// Zero-based position, used by progress indicators
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Steps the user may skip without entering anything
    pub fn is_optional(&self) -> bool {
        matches!(
            self,
            WizardStep::Photo | WizardStep::Video | WizardStep::Credits
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WizardStep::Type => "type",
            WizardStep::Files => "files",
            WizardStep::Info => "info",
            WizardStep::Photo => "photo",
            WizardStep::Video => "video",
            WizardStep::Credits => "credits",
            WizardStep::Success => "success",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A selected file: the platform handle plus the name shown to the user
///
/// `H` is whatever the host uses to reach the bytes (`PathBuf` natively,
/// `web_sys::File` in the browser). The handle is never serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileRef<H = ()> {
    #[serde(skip)]
    pub handle: H,
    pub name: String,
}

impl<H> FileRef<H> {
    pub fn new(handle: H, name: impl Into<String>) -> Self {
        Self {
            handle,
            name: name.into(),
        }
    }
}

impl FileRef<()> {
    /// File reference without a backing handle
    pub fn named(name: impl Into<String>) -> Self {
        Self::new((), name)
    }
}

/// Optional details collected after the required fields
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = ""))]
pub struct ReleaseExtras<H = ()> {
    pub photo: Option<FileRef<H>>,
    pub video_url: String,
    pub music_author: String,
    pub lyrics_author: String,
    pub release_date: Option<NaiveDate>,
}

impl<H> Default for ReleaseExtras<H> {
    fn default() -> Self {
        Self {
            photo: None,
            video_url: String::new(),
            music_author: String::new(),
            lyrics_author: String::new(),
            release_date: None,
        }
    }
}

/// A finished upload, handed to the publication pipeline
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase", bound(serialize = ""))]
pub enum Submission<H = ()> {
    Single {
        artist: String,
        title: String,
        track: FileRef<H>,
        extras: ReleaseExtras<H>,
    },
    Album {
        artist: String,
        album: String,
        tracks: Vec<FileRef<H>>,
        extras: ReleaseExtras<H>,
    },
}

impl<H> Submission<H> {
    pub fn upload_type(&self) -> UploadType {
        match self {
            Submission::Single { .. } => UploadType::Single,
            Submission::Album { .. } => UploadType::Album,
        }
    }

    pub fn artist(&self) -> &str {
        match self {
            Submission::Single { artist, .. } | Submission::Album { artist, .. } => artist,
        }
    }

    /// Track title for a single, album name for an album
    pub fn headline(&self) -> &str {
        match self {
            Submission::Single { title, .. } => title,
            Submission::Album { album, .. } => album,
        }
    }

    pub fn tracks(&self) -> &[FileRef<H>] {
        match self {
            Submission::Single { track, .. } => std::slice::from_ref(track),
            Submission::Album { tracks, .. } => tracks,
        }
    }

    pub fn extras(&self) -> &ReleaseExtras<H> {
        match self {
            Submission::Single { extras, .. } | Submission::Album { extras, .. } => extras,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_caps() {
        assert_eq!(UploadType::Single.max_tracks(), 1);
        assert_eq!(UploadType::Album.max_tracks(), 25);
    }

    #[test]
    fn test_steps_are_adjacent() {
        for pair in WizardStep::ALL.windows(2) {
            assert_eq!(pair[0].next(), Some(pair[1]));
            assert_eq!(pair[1].index(), pair[0].index() + 1);
        }
        assert_eq!(WizardStep::Success.next(), None);
    }

    #[test]
    fn test_back_chain() {
        assert_eq!(WizardStep::Type.previous(), None);
        assert_eq!(WizardStep::Files.previous(), Some(WizardStep::Type));
        assert_eq!(WizardStep::Info.previous(), Some(WizardStep::Files));
        assert_eq!(WizardStep::Photo.previous(), Some(WizardStep::Info));
        assert_eq!(WizardStep::Video.previous(), Some(WizardStep::Photo));
        assert_eq!(WizardStep::Credits.previous(), Some(WizardStep::Video));
        assert_eq!(WizardStep::Success.previous(), None);
    }

    #[test]
    fn test_submission_serialization_omits_handles() {
        let submission = Submission::Single {
            artist: "Test Band".to_string(),
            title: "Test Song".to_string(),
            track: FileRef::new(std::path::PathBuf::from("/tmp/demo.mp3"), "demo.mp3"),
            extras: ReleaseExtras::default(),
        };

        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(value["type"], "single");
        assert_eq!(value["track"]["name"], "demo.mp3");
        assert!(value["track"].get("handle").is_none());
        assert!(value["extras"]["photo"].is_null());
    }

    #[test]
    fn test_single_tracks_slice() {
        let submission: Submission = Submission::Single {
            artist: "A".to_string(),
            title: "T".to_string(),
            track: FileRef::named("one.mp3"),
            extras: ReleaseExtras::default(),
        };
        assert_eq!(submission.tracks().len(), 1);
        assert_eq!(submission.headline(), "T");
        assert_eq!(submission.upload_type(), UploadType::Single);
    }
}
