//! Rockchart demo
//!
//! Scripted session against the in-process showcase: browse the chart,
//! open a profile, play a track, upload a single and an album, and watch
//! both land on the chart.

use rockchart::logging::init_logging;
use rockchart::text;
use rockchart::{AppState, ChartEvent, Config, FileRef, ProfileTab, UploadType, WizardResult};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_default();
    init_logging(&config.logging);

    tracing::info!("Rockchart v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Uploads appear after {:?}",
        config.publication.time_to_display()
    );

    let state = AppState::new(config);
    let mut events = state.chart.subscribe();

    println!("THE SOUND OF ROCK\n");
    println!("{}", state.chart.read(text::chart_store_table).await);
    println!("FEATURED ARTISTS");
    println!("{}", text::featured_list(state.catalog.featured()));

    demo_profile(&state).await;

    upload_single(&state)?;
    upload_album(&state)?;

    // Print chart changes as the publications progress
    let watcher = tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            match event {
                ChartEvent::Revealed { entry } => {
                    println!("NEW  #{} {} - {}", entry.rank, entry.artist, entry.title)
                }
                ChartEvent::MarkerCleared { id } => tracing::debug!(%id, "Marker cleared"),
                other => tracing::debug!(?other, "Chart event"),
            }
        }
    });

    for handle in state.take_publications() {
        let outcome = handle.wait().await;
        tracing::info!(?outcome, "Publication finished");
    }

    println!("\n{}", state.chart.read(text::chart_store_table).await);

    tracing::info!("Shutting down...");
    state.shutdown();
    watcher.abort();

    tracing::info!("Rockchart shutdown complete");
    Ok(())
}

async fn demo_profile(state: &AppState) {
    let Some(record) = state.open_artist("The Void").await else {
        tracing::warn!("Showcase artist missing from catalog");
        return;
    };
    println!("{}", text::artist_profile(&record));

    state.select_profile_tab(ProfileTab::Albums).await;
    if let Some(track) = record.tracks.first() {
        state.play_profile_track(track.id).await;
    }
    state.close_artist().await;

    println!("{}\n", text::now_playing_bar(&*state.player.read().await));
}

fn upload_single(state: &AppState) -> WizardResult<()> {
    let mut wizard = state.upload_wizard::<()>();

    wizard.select_type(UploadType::Single)?;
    wizard.select_files(vec![FileRef::named("demo.mp3")])?;
    wizard.next()?;
    wizard.set_artist_name("Test Band")?;
    wizard.set_track_title("Test Song")?;
    wizard.next()?;
    // No photo
    wizard.next()?;
    wizard.set_video_url("https://youtube.com/watch?v=demo")?;
    wizard.next()?;
    wizard.set_music_author("Test Band")?;
    wizard.set_release_date("2025-01-15")?;
    wizard.next()?;
    wizard.close();
    Ok(())
}

fn upload_album(state: &AppState) -> WizardResult<()> {
    let mut wizard = state.upload_wizard::<()>();

    wizard.select_type(UploadType::Album)?;
    wizard.select_files(
        ["Intro.mp3", "Static.mp3", "Outro.mp3"]
            .into_iter()
            .map(FileRef::named)
            .collect(),
    )?;
    wizard.next()?;
    wizard.set_artist_name("Savage Youth")?;
    wizard.set_album_name("Basement Tapes")?;
    while wizard.submission().is_none() {
        wizard.next()?;
    }
    wizard.close();
    Ok(())
}
