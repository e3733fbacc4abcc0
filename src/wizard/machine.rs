//! Upload Wizard State Machine
//!
//! Linear step sequence with one gate per step:
//!
//! ```text
//! type → files → info → photo → video → credits → success
//!        (≥1)    (req.)  (opt.)  (opt.)   (opt.)
//! ```
//!
//! Forward and back moves are strictly adjacent. Reaching `success`
//! freezes the draft, builds the [`Submission`] and hands it to the
//! completion callback. `close` resets everything from any step.

use chrono::NaiveDate;
use std::fmt;

use super::error::{WizardError, WizardResult};
use super::types::{FileRef, ReleaseExtras, Submission, UploadType, WizardStep};

type CompleteCallback<H> = Box<dyn FnMut(&Submission<H>)>;
type CloseCallback = Box<dyn FnMut()>;

/// Multi-step upload dialog state
pub struct UploadWizard<H = ()> {
    step: WizardStep,
    upload_type: Option<UploadType>,
    tracks: Vec<FileRef<H>>,
    artist_name: String,
    album_name: String,
    track_title: String,
    photo: Option<FileRef<H>>,
    video_url: String,
    music_author: String,
    lyrics_author: String,
    release_date: Option<NaiveDate>,
    submission: Option<Submission<H>>,
    on_complete: Option<CompleteCallback<H>>,
    on_close: Option<CloseCallback>,
}

impl<H: Clone> UploadWizard<H> {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Type,
            upload_type: None,
            tracks: Vec::new(),
            artist_name: String::new(),
            album_name: String::new(),
            track_title: String::new(),
            photo: None,
            video_url: String::new(),
            music_author: String::new(),
            lyrics_author: String::new(),
            release_date: None,
            submission: None,
            on_complete: None,
            on_close: None,
        }
    }

    /// Register the handler that receives the finished submission
    pub fn with_on_complete(mut self, f: impl FnMut(&Submission<H>) + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }

    /// Register the handler told to hide the dialog after `close`
    pub fn with_on_close(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_close = Some(Box::new(f));
        self
    }

    // ----- accessors -----

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn upload_type(&self) -> Option<UploadType> {
        self.upload_type
    }

    pub fn tracks(&self) -> &[FileRef<H>] {
        &self.tracks
    }

    pub fn artist_name(&self) -> &str {
        &self.artist_name
    }

    pub fn album_name(&self) -> &str {
        &self.album_name
    }

    pub fn track_title(&self) -> &str {
        &self.track_title
    }

    pub fn photo(&self) -> Option<&FileRef<H>> {
        self.photo.as_ref()
    }

    pub fn video_url(&self) -> &str {
        &self.video_url
    }

    pub fn music_author(&self) -> &str {
        &self.music_author
    }

    pub fn lyrics_author(&self) -> &str {
        &self.lyrics_author
    }

    pub fn release_date(&self) -> Option<NaiveDate> {
        self.release_date
    }

    /// The finished submission, once `success` was reached
    pub fn submission(&self) -> Option<&Submission<H>> {
        self.submission.as_ref()
    }

    /// Cap for the current type, `None` before a type was chosen
    pub fn max_tracks(&self) -> Option<usize> {
        self.upload_type.map(|t| t.max_tracks())
    }

    /// Dialog header for the current step
    pub fn step_title(&self) -> &'static str {
        match (self.step, self.upload_type) {
            (WizardStep::Type, _) => "UPLOAD MUSIC",
            (WizardStep::Files, Some(UploadType::Album)) => "SELECT TRACKS FOR THE ALBUM",
            (WizardStep::Files, _) => "SELECT A TRACK",
            (WizardStep::Info, _) => "RELEASE INFO",
            (WizardStep::Photo, _) => "ARTIST PHOTO",
            (WizardStep::Video, _) => "VIDEO",
            (WizardStep::Credits, _) => "CREDITS AND DATE",
            (WizardStep::Success, _) => "DONE!",
        }
    }

    // ----- type step -----

    /// Choose single or album and move to `files`
    ///
    /// Choosing a different type after coming back from `files` drops the
    /// held files so the new cap always holds.
    pub fn select_type(&mut self, upload_type: UploadType) -> WizardResult<()> {
        self.expect_step(WizardStep::Type)?;

        if self.upload_type.is_some_and(|current| current != upload_type) {
            self.tracks.clear();
        }
        self.upload_type = Some(upload_type);
        self.move_to(WizardStep::Files);
        Ok(())
    }

    // ----- files step -----

    /// Replace the held files with a new selection
    ///
    /// A selection over the cap is rejected whole and the held list is
    /// left untouched. An empty selection (dialog cancelled) is ignored.
    pub fn select_files(&mut self, batch: Vec<FileRef<H>>) -> WizardResult<usize> {
        self.expect_step(WizardStep::Files)?;
        let max = self.max_tracks().ok_or(WizardError::TypeNotSelected)?;

        if batch.is_empty() {
            return Ok(self.tracks.len());
        }

        if batch.len() > max {
            tracing::warn!(selected = batch.len(), max, "Rejected file selection over the cap");
            return Err(WizardError::TooManyFiles {
                max,
                selected: batch.len(),
            });
        }

        self.tracks = batch;
        tracing::debug!(count = self.tracks.len(), "Files selected");
        Ok(self.tracks.len())
    }

    /// Remove one held file by position
    pub fn remove_file(&mut self, index: usize) -> WizardResult<FileRef<H>> {
        self.expect_step(WizardStep::Files)?;
        if index >= self.tracks.len() {
            return Err(WizardError::NoSuchFile(index));
        }
        Ok(self.tracks.remove(index))
    }

    // ----- field edits -----

    pub fn set_artist_name(&mut self, value: impl Into<String>) -> WizardResult<()> {
        self.ensure_editable()?;
        self.artist_name = value.into();
        Ok(())
    }

    pub fn set_album_name(&mut self, value: impl Into<String>) -> WizardResult<()> {
        self.ensure_editable()?;
        self.album_name = value.into();
        Ok(())
    }

    pub fn set_track_title(&mut self, value: impl Into<String>) -> WizardResult<()> {
        self.ensure_editable()?;
        self.track_title = value.into();
        Ok(())
    }

    /// Attach the artist photo, replacing any previous one
    pub fn set_photo(&mut self, photo: FileRef<H>) -> WizardResult<()> {
        self.ensure_editable()?;
        self.photo = Some(photo);
        Ok(())
    }

    pub fn clear_photo(&mut self) -> WizardResult<Option<FileRef<H>>> {
        self.ensure_editable()?;
        Ok(self.photo.take())
    }

    pub fn set_video_url(&mut self, value: impl Into<String>) -> WizardResult<()> {
        self.ensure_editable()?;
        self.video_url = value.into();
        Ok(())
    }

    pub fn set_music_author(&mut self, value: impl Into<String>) -> WizardResult<()> {
        self.ensure_editable()?;
        self.music_author = value.into();
        Ok(())
    }

    pub fn set_lyrics_author(&mut self, value: impl Into<String>) -> WizardResult<()> {
        self.ensure_editable()?;
        self.lyrics_author = value.into();
        Ok(())
    }

    /// Set the release date from `YYYY-MM-DD`; blank input clears it
    pub fn set_release_date(&mut self, value: &str) -> WizardResult<()> {
        self.ensure_editable()?;
        let value = value.trim();
        if value.is_empty() {
            self.release_date = None;
            return Ok(());
        }
        let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map_err(|_| WizardError::InvalidReleaseDate(value.to_string()))?;
        self.release_date = Some(date);
        Ok(())
    }

    // ----- navigation -----

    /// Whether `next` would succeed from the current step
    pub fn can_advance(&self) -> bool {
        self.check_gate().is_ok()
    }

    /// Advance one step; from `credits` this completes the upload
    pub fn next(&mut self) -> WizardResult<WizardStep> {
        self.check_gate()?;
        let target = self.step.next().ok_or(WizardError::Finished)?;

        if target == WizardStep::Success {
            let submission = self.build_submission()?;
            tracing::info!(
                upload_type = %submission.upload_type(),
                artist = %submission.artist(),
                tracks = submission.tracks().len(),
                "Upload completed"
            );
            if let Some(on_complete) = self.on_complete.as_mut() {
                on_complete(&submission);
            }
            self.submission = Some(submission);
        }

        self.move_to(target);
        Ok(target)
    }

    /// Go back exactly one step
    pub fn back(&mut self) -> WizardResult<WizardStep> {
        let target = self
            .step
            .previous()
            .ok_or(WizardError::NoPreviousStep(self.step))?;
        self.move_to(target);
        Ok(target)
    }

    /// Reset to the initial state and tell the host to hide the dialog
    pub fn close(&mut self) {
        self.reset();
        if let Some(on_close) = self.on_close.as_mut() {
            on_close();
        }
    }

    /// Clear all collected data, keeping the registered callbacks
    pub fn reset(&mut self) {
        self.step = WizardStep::Type;
        self.upload_type = None;
        self.tracks.clear();
        self.artist_name.clear();
        self.album_name.clear();
        self.track_title.clear();
        self.photo = None;
        self.video_url.clear();
        self.music_author.clear();
        self.lyrics_author.clear();
        self.release_date = None;
        self.submission = None;
    }

    // ----- internals -----

    fn check_gate(&self) -> WizardResult<()> {
        match self.step {
            WizardStep::Type => self.upload_type.map(|_| ()).ok_or(WizardError::TypeNotSelected),
            WizardStep::Files => {
                if self.tracks.is_empty() {
                    Err(WizardError::NoFiles)
                } else {
                    Ok(())
                }
            }
            WizardStep::Info => self.validate_info(),
            WizardStep::Photo | WizardStep::Video | WizardStep::Credits => Ok(()),
            WizardStep::Success => Err(WizardError::Finished),
        }
    }

    fn validate_info(&self) -> WizardResult<()> {
        if is_blank(&self.artist_name) {
            return Err(WizardError::MissingArtist);
        }
        match self.upload_type {
            Some(UploadType::Single) if is_blank(&self.track_title) => {
                Err(WizardError::MissingTrackTitle)
            }
            Some(UploadType::Album) if is_blank(&self.album_name) => {
                Err(WizardError::MissingAlbumName)
            }
            Some(_) => Ok(()),
            None => Err(WizardError::TypeNotSelected),
        }
    }

    fn build_submission(&self) -> WizardResult<Submission<H>> {
        let extras = ReleaseExtras {
            photo: self.photo.clone(),
            video_url: self.video_url.clone(),
            music_author: self.music_author.clone(),
            lyrics_author: self.lyrics_author.clone(),
            release_date: self.release_date,
        };

        match self.upload_type {
            Some(UploadType::Single) => {
                let track = self.tracks.first().cloned().ok_or(WizardError::NoFiles)?;
                Ok(Submission::Single {
                    artist: self.artist_name.clone(),
                    title: self.track_title.clone(),
                    track,
                    extras,
                })
            }
            Some(UploadType::Album) => {
                if self.tracks.is_empty() {
                    return Err(WizardError::NoFiles);
                }
                Ok(Submission::Album {
                    artist: self.artist_name.clone(),
                    album: self.album_name.clone(),
                    tracks: self.tracks.clone(),
                    extras,
                })
            }
            None => Err(WizardError::TypeNotSelected),
        }
    }

    fn expect_step(&self, expected: WizardStep) -> WizardResult<()> {
        if self.step == expected {
            Ok(())
        } else {
            Err(WizardError::WrongStep {
                expected,
                actual: self.step,
            })
        }
    }

    fn ensure_editable(&self) -> WizardResult<()> {
        if self.step == WizardStep::Success {
            Err(WizardError::Finished)
        } else {
            Ok(())
        }
    }

    fn move_to(&mut self, target: WizardStep) {
        tracing::debug!(from = %self.step, to = %target, "Wizard step");
        self.step = target;
    }
}

impl<H: Clone> Default for UploadWizard<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: fmt::Debug> fmt::Debug for UploadWizard<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadWizard")
            .field("step", &self.step)
            .field("upload_type", &self.upload_type)
            .field("tracks", &self.tracks)
            .field("artist_name", &self.artist_name)
            .field("album_name", &self.album_name)
            .field("track_title", &self.track_title)
            .field("photo", &self.photo)
            .field("video_url", &self.video_url)
            .field("music_author", &self.music_author)
            .field("lyrics_author", &self.lyrics_author)
            .field("release_date", &self.release_date)
            .field("submission", &self.submission)
            .finish_non_exhaustive()
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn files(names: &[&str]) -> Vec<FileRef> {
        names.iter().map(|n| FileRef::named(*n)).collect()
    }

    fn numbered(count: usize) -> Vec<FileRef> {
        (1..=count).map(|i| FileRef::named(format!("track{:02}.mp3", i))).collect()
    }

    fn wizard_at_info(upload_type: UploadType) -> UploadWizard {
        let mut wizard = UploadWizard::new();
        wizard.select_type(upload_type).unwrap();
        wizard.select_files(files(&["a.mp3"])).unwrap();
        wizard.next().unwrap();
        wizard
    }

    #[test]
    fn test_select_type_moves_to_files() {
        let mut wizard: UploadWizard = UploadWizard::new();
        assert_eq!(wizard.step(), WizardStep::Type);
        assert!(!wizard.can_advance());

        wizard.select_type(UploadType::Single).unwrap();
        assert_eq!(wizard.step(), WizardStep::Files);
        assert_eq!(wizard.upload_type(), Some(UploadType::Single));
    }

    #[test]
    fn test_single_accepts_one_file() {
        let mut wizard: UploadWizard = UploadWizard::new();
        wizard.select_type(UploadType::Single).unwrap();

        assert_eq!(wizard.select_files(files(&["demo.mp3"])).unwrap(), 1);

        let err = wizard
            .select_files(files(&["one.mp3", "two.mp3"]))
            .unwrap_err();
        assert_eq!(err, WizardError::TooManyFiles { max: 1, selected: 2 });
        assert_eq!(err.to_string(), "Maximum 1 track");

        let names: Vec<_> = wizard.tracks().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["demo.mp3"]);
    }

    #[test]
    fn test_album_accepts_up_to_25() {
        let mut wizard: UploadWizard = UploadWizard::new();
        wizard.select_type(UploadType::Album).unwrap();

        for count in [1, 12, 25] {
            assert_eq!(wizard.select_files(numbered(count)).unwrap(), count);
        }

        let err = wizard.select_files(numbered(26)).unwrap_err();
        assert_eq!(err, WizardError::TooManyFiles { max: 25, selected: 26 });
        assert_eq!(wizard.tracks().len(), 25);
        assert_eq!(wizard.tracks()[24].name, "track25.mp3");
    }

    #[test]
    fn test_rejected_selection_on_empty_list() {
        let mut wizard: UploadWizard = UploadWizard::new();
        wizard.select_type(UploadType::Album).unwrap();

        assert!(wizard.select_files(numbered(26)).is_err());
        assert!(wizard.tracks().is_empty());
        assert_eq!(wizard.next().unwrap_err(), WizardError::NoFiles);
    }

    #[test]
    fn test_empty_selection_keeps_list() {
        let mut wizard: UploadWizard = UploadWizard::new();
        wizard.select_type(UploadType::Album).unwrap();
        wizard.select_files(numbered(3)).unwrap();

        assert_eq!(wizard.select_files(Vec::new()).unwrap(), 3);
        assert_eq!(wizard.tracks().len(), 3);
    }

    #[test]
    fn test_remove_file() {
        let mut wizard: UploadWizard = UploadWizard::new();
        wizard.select_type(UploadType::Album).unwrap();
        wizard.select_files(files(&["a.mp3", "b.mp3", "c.mp3"])).unwrap();

        let removed = wizard.remove_file(1).unwrap();
        assert_eq!(removed.name, "b.mp3");
        let names: Vec<_> = wizard.tracks().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["a.mp3", "c.mp3"]);

        assert_eq!(wizard.remove_file(5).unwrap_err(), WizardError::NoSuchFile(5));

        wizard.remove_file(0).unwrap();
        wizard.remove_file(0).unwrap();
        assert!(!wizard.can_advance());
    }

    #[test]
    fn test_files_only_on_files_step() {
        let mut wizard: UploadWizard = UploadWizard::new();
        let err = wizard.select_files(files(&["a.mp3"])).unwrap_err();
        assert_eq!(
            err,
            WizardError::WrongStep {
                expected: WizardStep::Files,
                actual: WizardStep::Type
            }
        );
    }

    #[test]
    fn test_info_requires_artist() {
        for upload_type in [UploadType::Single, UploadType::Album] {
            let mut wizard = wizard_at_info(upload_type);
            wizard.set_track_title("Song").unwrap();
            wizard.set_album_name("Record").unwrap();

            assert_eq!(wizard.next().unwrap_err(), WizardError::MissingArtist);
            wizard.set_artist_name("   ").unwrap();
            assert_eq!(wizard.next().unwrap_err(), WizardError::MissingArtist);
            assert_eq!(wizard.step(), WizardStep::Info);
        }
    }

    #[test]
    fn test_info_single_requires_title() {
        let mut wizard = wizard_at_info(UploadType::Single);
        wizard.set_artist_name("Test Band").unwrap();
        wizard.set_album_name("Ignored").unwrap();
        assert_eq!(wizard.next().unwrap_err(), WizardError::MissingTrackTitle);

        wizard.set_track_title("Test Song").unwrap();
        assert_eq!(wizard.next().unwrap(), WizardStep::Photo);
    }

    #[test]
    fn test_info_album_requires_album_name() {
        let mut wizard = wizard_at_info(UploadType::Album);
        wizard.set_artist_name("Test Band").unwrap();
        wizard.set_track_title("Ignored").unwrap();
        assert_eq!(wizard.next().unwrap_err(), WizardError::MissingAlbumName);

        wizard.set_album_name("Test Album").unwrap();
        assert_eq!(wizard.next().unwrap(), WizardStep::Photo);
    }

    #[test]
    fn test_back_moves_one_step() {
        let mut wizard = wizard_at_info(UploadType::Single);
        wizard.set_artist_name("Test Band").unwrap();
        wizard.set_track_title("Test Song").unwrap();
        wizard.next().unwrap();
        wizard.next().unwrap();
        wizard.next().unwrap();
        assert_eq!(wizard.step(), WizardStep::Credits);

        let expected = [
            WizardStep::Video,
            WizardStep::Photo,
            WizardStep::Info,
            WizardStep::Files,
            WizardStep::Type,
        ];
        for step in expected {
            assert_eq!(wizard.back().unwrap(), step);
        }
        assert_eq!(
            wizard.back().unwrap_err(),
            WizardError::NoPreviousStep(WizardStep::Type)
        );
        // Data survives back navigation
        assert_eq!(wizard.artist_name(), "Test Band");
        assert_eq!(wizard.tracks().len(), 1);
    }

    #[test]
    fn test_switching_type_clears_files() {
        let mut wizard: UploadWizard = UploadWizard::new();
        wizard.select_type(UploadType::Album).unwrap();
        wizard.select_files(numbered(5)).unwrap();
        wizard.back().unwrap();

        wizard.select_type(UploadType::Album).unwrap();
        assert_eq!(wizard.tracks().len(), 5);
        wizard.back().unwrap();

        wizard.select_type(UploadType::Single).unwrap();
        assert!(wizard.tracks().is_empty());
    }

    #[test]
    fn test_release_date_parsing() {
        let mut wizard = wizard_at_info(UploadType::Single);
        wizard.set_release_date("2024-03-15").unwrap();
        assert_eq!(wizard.release_date(), NaiveDate::from_ymd_opt(2024, 3, 15));

        let err = wizard.set_release_date("15.03.2024").unwrap_err();
        assert_eq!(err, WizardError::InvalidReleaseDate("15.03.2024".to_string()));
        assert_eq!(wizard.release_date(), NaiveDate::from_ymd_opt(2024, 3, 15));

        wizard.set_release_date("").unwrap();
        assert_eq!(wizard.release_date(), None);
    }

    #[test]
    fn test_photo_replace_and_clear() {
        let mut wizard = wizard_at_info(UploadType::Single);
        wizard.set_photo(FileRef::named("one.jpg")).unwrap();
        wizard.set_photo(FileRef::named("two.jpg")).unwrap();
        assert_eq!(wizard.photo().unwrap().name, "two.jpg");

        let cleared = wizard.clear_photo().unwrap();
        assert_eq!(cleared.unwrap().name, "two.jpg");
        assert!(wizard.photo().is_none());
    }

    #[test]
    fn test_single_scenario_produces_submission() {
        let received: Rc<RefCell<Vec<Submission>>> = Rc::default();
        let sink = received.clone();

        let mut wizard = UploadWizard::new().with_on_complete(move |s: &Submission| {
            sink.borrow_mut().push(s.clone());
        });

        wizard.select_type(UploadType::Single).unwrap();
        wizard.select_files(files(&["demo.mp3"])).unwrap();
        wizard.next().unwrap();
        wizard.set_artist_name("Test Band").unwrap();
        wizard.set_track_title("Test Song").unwrap();
        assert_eq!(wizard.next().unwrap(), WizardStep::Photo);
        assert_eq!(wizard.next().unwrap(), WizardStep::Video);
        assert_eq!(wizard.next().unwrap(), WizardStep::Credits);
        assert_eq!(wizard.next().unwrap(), WizardStep::Success);

        let expected = Submission::Single {
            artist: "Test Band".to_string(),
            title: "Test Song".to_string(),
            track: FileRef::named("demo.mp3"),
            extras: ReleaseExtras {
                photo: None,
                video_url: String::new(),
                music_author: String::new(),
                lyrics_author: String::new(),
                release_date: None,
            },
        };

        assert_eq!(wizard.submission(), Some(&expected));
        assert_eq!(*received.borrow(), vec![expected]);
    }

    #[test]
    fn test_album_submission_carries_all_tracks() {
        let mut wizard: UploadWizard = UploadWizard::new();
        wizard.select_type(UploadType::Album).unwrap();
        wizard.select_files(numbered(4)).unwrap();
        wizard.next().unwrap();
        wizard.set_artist_name("Test Band").unwrap();
        wizard.set_album_name("Test Album").unwrap();
        wizard.next().unwrap();
        wizard.next().unwrap();
        wizard.set_video_url("https://video.example/live").unwrap();
        wizard.next().unwrap();
        wizard.set_music_author("Composer").unwrap();
        wizard.set_lyrics_author("Lyricist").unwrap();
        wizard.next().unwrap();

        match wizard.submission().unwrap() {
            Submission::Album { artist, album, tracks, extras } => {
                assert_eq!(artist, "Test Band");
                assert_eq!(album, "Test Album");
                assert_eq!(tracks.len(), 4);
                assert_eq!(extras.video_url, "https://video.example/live");
                assert_eq!(extras.music_author, "Composer");
                assert_eq!(extras.lyrics_author, "Lyricist");
            }
            other => panic!("expected album, got {:?}", other),
        }
    }

    #[test]
    fn test_success_is_read_only() {
        let mut wizard = wizard_at_info(UploadType::Single);
        wizard.set_artist_name("Test Band").unwrap();
        wizard.set_track_title("Test Song").unwrap();
        for _ in 0..4 {
            wizard.next().unwrap();
        }
        assert_eq!(wizard.step(), WizardStep::Success);

        assert_eq!(wizard.set_artist_name("Other").unwrap_err(), WizardError::Finished);
        assert_eq!(wizard.next().unwrap_err(), WizardError::Finished);
        assert_eq!(
            wizard.back().unwrap_err(),
            WizardError::NoPreviousStep(WizardStep::Success)
        );
        assert_eq!(wizard.artist_name(), "Test Band");
    }

    #[test]
    fn test_close_resets_and_notifies() {
        let closed = Rc::new(RefCell::new(0));
        let counter = closed.clone();

        let mut wizard = UploadWizard::new().with_on_close(move || *counter.borrow_mut() += 1);
        wizard.select_type(UploadType::Single).unwrap();
        wizard.select_files(files(&["demo.mp3"])).unwrap();
        wizard.next().unwrap();
        wizard.set_artist_name("Test Band").unwrap();
        wizard.set_track_title("Test Song").unwrap();
        for _ in 0..4 {
            wizard.next().unwrap();
        }

        wizard.close();

        assert_eq!(*closed.borrow(), 1);
        assert_eq!(wizard.step(), WizardStep::Type);
        assert_eq!(wizard.upload_type(), None);
        assert!(wizard.tracks().is_empty());
        assert!(wizard.artist_name().is_empty());
        assert!(wizard.submission().is_none());
    }

    #[test]
    fn test_step_titles() {
        let mut wizard: UploadWizard = UploadWizard::new();
        assert_eq!(wizard.step_title(), "UPLOAD MUSIC");
        wizard.select_type(UploadType::Album).unwrap();
        assert_eq!(wizard.step_title(), "SELECT TRACKS FOR THE ALBUM");
    }
}
