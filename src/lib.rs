//! # Rockchart
//!
//! The Sound of Rock - an underground music chart showcase: live chart,
//! featured artists, artist profiles, a now-playing bar and a multi-step
//! upload wizard whose submissions appear on the chart after a simulated
//! moderation delay.
//!
//! ## Modules
//!
//! - [`catalog`]: Static chart and artist reference data
//! - [`chart`]: Owned chart state container
//! - [`wizard`]: Upload wizard state machine
//! - [`publish`]: Delayed, cancellable publication of finished uploads
//! - [`player`]: Now-playing surface
//! - [`profile`]: Artist profile overlay
//! - [`config`]: TOML configuration with environment overrides
//! - [`text`]: Plain-text renderers for the terminal
//!
//! The core (everything except the tokio-driven pieces) builds without the
//! `runtime` feature so the web frontend can share it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rockchart::{AppState, Config, FileRef, UploadType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let state = AppState::new(Config::default());
//!
//!     let mut wizard = state.upload_wizard::<()>();
//!     wizard.select_type(UploadType::Single)?;
//!     wizard.select_files(vec![FileRef::named("demo.mp3")])?;
//!     wizard.next()?;
//!     wizard.set_artist_name("Test Band")?;
//!     wizard.set_track_title("Test Song")?;
//!     while wizard.submission().is_none() {
//!         wizard.next()?;
//!     }
//!
//!     for handle in state.take_publications() {
//!         handle.wait().await;
//!     }
//!     println!("{} entries on the chart", state.chart.len().await);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod chart;
pub mod config;
pub mod player;
pub mod profile;
pub mod publish;
pub mod text;
pub mod wizard;

#[cfg(feature = "runtime")]
pub mod logging;
#[cfg(feature = "runtime")]
pub mod state;

// Re-export top-level types for convenience
pub use catalog::{
    format_count, AlbumRecord, ArtistRecord, ArtistTrack, Catalog, ChartEntry, EntryId,
    FeaturedArtist, Trend, VisualTheme,
};

pub use chart::{ChartStore, EntryIdGenerator};

pub use config::{Config, ConfigError, LoggingConfig, PublicationConfig};

pub use player::{NowPlaying, PlayingTrack, TrackKey};

pub use profile::{ProfileOverlay, ProfileTab};

pub use publish::PublishRequest;

pub use wizard::{
    FileRef, ReleaseExtras, Submission, UploadType, UploadWizard, WizardError, WizardResult,
    WizardStep,
};

#[cfg(feature = "runtime")]
pub use chart::{ChartEvent, SharedChart};

#[cfg(feature = "runtime")]
pub use publish::{PublicationSimulator, PublishHandle, PublishOutcome};

#[cfg(feature = "runtime")]
pub use state::AppState;
