//! Global Application State
//!
//! Reactive state management using Leptos signals. The chart, player and
//! profile overlay are the plain `rockchart` containers wrapped in signals.

use leptos::*;
use std::rc::Rc;

use rockchart::{Catalog, ChartStore, NowPlaying, ProfileOverlay, PublicationConfig};

use super::publisher::Publisher;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Static artist data
    pub catalog: Rc<Catalog>,
    /// Live chart
    pub chart: RwSignal<ChartStore>,
    /// Bottom bar
    pub player: RwSignal<NowPlaying>,
    /// Artist profile overlay
    pub profile: RwSignal<ProfileOverlay>,
    /// Upload dialog visibility; one dialog at a time
    pub upload_open: RwSignal<bool>,
    /// Schedules finished uploads onto the chart
    pub publisher: Publisher,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let chart = create_rw_signal(ChartStore::seeded());

    let state = GlobalState {
        catalog: Rc::new(Catalog::seeded()),
        chart,
        player: create_rw_signal(NowPlaying::new()),
        profile: create_rw_signal(ProfileOverlay::new()),
        upload_open: create_rw_signal(false),
        publisher: Publisher::new(chart, PublicationConfig::default()),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    // Drop scheduled publications when the page goes away
    let publisher = state.publisher.clone();
    on_cleanup(move || publisher.cancel_all());

    provide_context(state);
}

impl GlobalState {
    /// Open the profile overlay; artists without a profile are ignored
    pub fn open_artist(&self, name: &str) {
        let catalog = self.catalog.clone();
        self.profile.update(|profile| {
            profile.open(&catalog, name);
        });
    }

    pub fn close_artist(&self) {
        self.profile.update(|profile| profile.close());
    }

    /// "Play this track" from the open profile
    pub fn play_profile_track(&self, track_id: u32) {
        let catalog = self.catalog.clone();
        let track = self
            .profile
            .with_untracked(|profile| profile.play(&catalog, track_id));
        if let Some(track) = track {
            self.player.update(|player| player.toggle(track));
        }
    }

    pub fn open_upload(&self) {
        self.upload_open.set(true);
    }

    pub fn close_upload(&self) {
        self.upload_open.set(false);
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.try_set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.try_set(None);
        })
        .forget();
    }

    pub fn clear_error(&self) {
        self.error.set(None);
    }
}
