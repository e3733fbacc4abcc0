//! Application State
//!
//! Owned container for everything the page needs: catalog, chart,
//! now-playing, profile overlay and the publication simulator.
//! Cloning is cheap; all clones share the same state.

use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

use crate::catalog::{ArtistRecord, Catalog, EntryId};
use crate::chart::{ChartStore, SharedChart};
use crate::config::Config;
use crate::player::{NowPlaying, PlayingTrack};
use crate::profile::{ProfileOverlay, ProfileTab};
use crate::publish::{PublicationSimulator, PublishHandle};
use crate::wizard::UploadWizard;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Static artist data
    pub catalog: Arc<Catalog>,
    /// Chart consumed by renderers
    pub chart: SharedChart,
    /// Turns finished uploads into chart entries
    pub publisher: Arc<PublicationSimulator>,
    /// Bottom bar state
    pub player: Arc<RwLock<NowPlaying>>,
    /// Artist profile overlay
    pub profile: Arc<RwLock<ProfileOverlay>>,
    /// Loaded configuration
    pub config: Arc<Config>,
    publications: Arc<Mutex<Vec<PublishHandle>>>,
}

impl AppState {
    /// State seeded with the compiled-in showcase data
    pub fn new(config: Config) -> Self {
        Self::with_data(Catalog::seeded(), ChartStore::seeded(), config)
    }

    pub fn with_data(catalog: Catalog, chart: ChartStore, config: Config) -> Self {
        let chart = SharedChart::new(chart);
        let publisher = PublicationSimulator::new(chart.clone(), config.publication.clone());

        Self {
            catalog: Arc::new(catalog),
            chart,
            publisher: Arc::new(publisher),
            player: Arc::new(RwLock::new(NowPlaying::new())),
            profile: Arc::new(RwLock::new(ProfileOverlay::new())),
            config: Arc::new(config),
            publications: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Open the profile overlay; `None` when the artist has no profile
    pub async fn open_artist(&self, name: &str) -> Option<ArtistRecord> {
        self.profile
            .write()
            .await
            .open(&self.catalog, name)
            .cloned()
    }

    pub async fn close_artist(&self) {
        self.profile.write().await.close();
    }

    pub async fn select_profile_tab(&self, tab: ProfileTab) {
        self.profile.write().await.select_tab(tab);
    }

    /// Play button on a chart row
    pub async fn play_chart_entry(&self, id: EntryId) -> Option<PlayingTrack> {
        let track = self
            .chart
            .read(|chart| chart.get(id).map(PlayingTrack::from_chart))
            .await?;
        let mut player = self.player.write().await;
        player.toggle(track);
        player.current().cloned()
    }

    /// "Play this track" from the open profile, forwarded to the player
    pub async fn play_profile_track(&self, track_id: u32) -> Option<PlayingTrack> {
        let track = self.profile.read().await.play(&self.catalog, track_id)?;
        let mut player = self.player.write().await;
        player.toggle(track);
        player.current().cloned()
    }

    /// Play/pause on the bottom bar
    pub async fn toggle_playback(&self) -> bool {
        self.player.write().await.toggle_playback()
    }

    /// A fresh upload wizard whose completion feeds the publisher
    ///
    /// Must be driven from within the tokio runtime.
    pub fn upload_wizard<H: Clone + 'static>(&self) -> UploadWizard<H> {
        let publisher = self.publisher.clone();
        let publications = self.publications.clone();

        UploadWizard::new().with_on_complete(move |submission| {
            let handle = publisher.publish(submission);
            publications
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .push(handle);
        })
    }

    /// Take the handles of publications started by upload wizards
    pub fn take_publications(&self) -> Vec<PublishHandle> {
        std::mem::take(
            &mut *self
                .publications
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner()),
        )
    }

    /// Cancel pending publications; the page is going away
    pub fn shutdown(&self) {
        self.publisher.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Trend;
    use crate::publish::PublishOutcome;
    use crate::wizard::{FileRef, UploadType};

    #[tokio::test(start_paused = true)]
    async fn test_upload_flows_into_chart() {
        let state = AppState::new(Config::default());
        let mut wizard = state.upload_wizard::<()>();

        wizard.select_type(UploadType::Single).unwrap();
        wizard.select_files(vec![FileRef::named("demo.mp3")]).unwrap();
        wizard.next().unwrap();
        wizard.set_artist_name("Test Band").unwrap();
        wizard.set_track_title("Test Song").unwrap();
        for _ in 0..4 {
            wizard.next().unwrap();
        }
        wizard.close();

        let handles = state.take_publications();
        assert_eq!(handles.len(), 1);
        assert!(state.take_publications().is_empty());

        for handle in handles {
            assert!(matches!(handle.wait().await, PublishOutcome::Published(_)));
        }

        let entries = state.chart.snapshot().await;
        let entry = entries.last().unwrap();
        assert_eq!(entries.len(), 9);
        assert_eq!(entry.artist, "Test Band");
        assert_eq!(entry.title, "Test Song");
        assert_eq!(entry.trend, Trend::Up);
        assert!(entry.plays > 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_drops_pending_uploads() {
        let state = AppState::new(Config::default());
        let mut wizard = state.upload_wizard::<()>();

        wizard.select_type(UploadType::Album).unwrap();
        wizard
            .select_files(vec![FileRef::named("a.mp3"), FileRef::named("b.mp3")])
            .unwrap();
        wizard.next().unwrap();
        wizard.set_artist_name("Test Band").unwrap();
        wizard.set_album_name("Test Album").unwrap();
        for _ in 0..4 {
            wizard.next().unwrap();
        }

        state.shutdown();
        for handle in state.take_publications() {
            assert_eq!(handle.wait().await, PublishOutcome::Cancelled);
        }
        assert_eq!(state.chart.len().await, 8);
    }

    #[tokio::test]
    async fn test_profile_play_forwards_to_player() {
        let state = AppState::new(Config::default());

        assert!(state.open_artist("Savage Youth").await.is_none());
        assert!(state.play_profile_track(1).await.is_none());

        let record = state.open_artist("The Void").await.unwrap();
        assert_eq!(record.tracks.len(), 5);

        let playing = state.play_profile_track(2).await.unwrap();
        assert_eq!(playing.title, "Hollow Sky");
        assert!(state.player.read().await.is_playing());

        state.close_artist().await;
        assert!(!state.profile.read().await.is_open());
        // Player keeps going after the overlay closes
        assert!(state.player.read().await.is_playing());
    }

    #[tokio::test]
    async fn test_chart_play_toggles() {
        let state = AppState::new(Config::default());

        let playing = state.play_chart_entry(EntryId(3)).await.unwrap();
        assert_eq!(playing.title, "Night Rider");
        assert!(state.player.read().await.is_playing());

        state.play_chart_entry(EntryId(3)).await;
        assert!(!state.player.read().await.is_playing());

        assert!(state.toggle_playback().await);
        assert!(state.play_chart_entry(EntryId(404)).await.is_none());
    }
}
