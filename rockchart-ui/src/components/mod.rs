//! UI Components
//!
//! Leptos components for the landing page and its overlays.

pub mod artist_grid;
pub mod artist_profile;
pub mod chart_list;
pub mod header;
pub mod now_playing;
pub mod toast;
pub mod upload_dialog;

pub use artist_grid::ArtistGrid;
pub use artist_profile::ArtistProfile;
pub use chart_list::ChartList;
pub use header::Header;
pub use now_playing::NowPlayingBar;
pub use toast::Toast;
pub use upload_dialog::UploadDialog;
