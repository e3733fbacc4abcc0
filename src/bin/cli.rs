//! Rockchart CLI
//!
//! Command-line interface for the showcase:
//! - Print the chart and the featured artists
//! - Show an artist profile
//! - Upload a single or an album and wait for it to reach the chart
//! - Generate a default config file

use anyhow::{bail, ensure, Context};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use rockchart::logging::init_logging;
use rockchart::text;
use rockchart::{AppState, ChartEntry, ChartEvent, Config, FileRef, UploadType, UploadWizard};

#[derive(Parser)]
#[command(name = "rockchart")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "The Sound of Rock - underground music chart")]
#[command(long_about = "Browse the underground rock chart, look up artists and upload new releases.\nUploads go through moderation and show up on the chart a few seconds later.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: user config dir, /etc/rockchart, ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the current chart
    Chart,

    /// List featured artists
    Artists,

    /// Show an artist profile
    Artist {
        /// Artist name, e.g. "The Void"
        name: String,
    },

    /// Upload a release
    Upload {
        #[command(subcommand)]
        release: Release,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum Release {
    /// Upload a single track
    Single {
        #[arg(long)]
        artist: String,
        /// Track title
        #[arg(long)]
        title: String,
        /// Audio file
        #[arg(long)]
        file: PathBuf,
        #[command(flatten)]
        extras: ExtrasArgs,
    },

    /// Upload an album
    Album {
        #[arg(long)]
        artist: String,
        /// Album name
        #[arg(long)]
        album: String,
        /// Audio files, in track order (repeat the flag, up to 25)
        #[arg(long = "file", required = true)]
        files: Vec<PathBuf>,
        #[command(flatten)]
        extras: ExtrasArgs,
    },
}

#[derive(Args)]
pub struct ExtrasArgs {
    /// Cover photo
    #[arg(long)]
    photo: Option<PathBuf>,
    /// Music video URL
    #[arg(long)]
    video: Option<String>,
    #[arg(long)]
    music_author: Option<String>,
    #[arg(long)]
    lyrics_author: Option<String>,
    /// Release date (YYYY-MM-DD)
    #[arg(long)]
    release_date: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => Config::load_default(),
    };
    init_logging(&config.logging);

    match cli.command {
        Commands::Chart => {
            let state = AppState::new(config);
            match cli.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&state.chart.snapshot().await)?)
                }
                OutputFormat::Table => print!("{}", state.chart.read(text::chart_store_table).await),
            }
        }

        Commands::Artists => {
            let state = AppState::new(config);
            let featured = state.catalog.featured();
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(featured)?),
                OutputFormat::Table => print!("{}", text::featured_list(featured)),
            }
        }

        Commands::Artist { name } => {
            let state = AppState::new(config);
            let Some(record) = state.open_artist(&name).await else {
                bail!("No profile for artist: {}", name);
            };
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&record)?),
                OutputFormat::Table => print!("{}", text::artist_profile(&record)),
            }
        }

        Commands::Upload { release } => {
            let state = AppState::new(config);
            let entry = upload(&state, release).await?;
            state.shutdown();

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entry)?),
                OutputFormat::Table => {
                    println!(
                        "Published {} - {} at #{} ({})",
                        entry.artist, entry.title, entry.rank, entry.album
                    );
                    print!("{}", state.chart.read(text::chart_store_table).await);
                }
            }
        }

        Commands::Config { output } => {
            let config = rockchart::config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

/// Run the wizard for `release` and wait until the entry is on the chart
async fn upload(state: &AppState, release: Release) -> anyhow::Result<ChartEntry> {
    let mut events = state.chart.subscribe();
    let mut wizard = state.upload_wizard::<PathBuf>();

    let extras = match release {
        Release::Single {
            artist,
            title,
            file,
            extras,
        } => {
            wizard.select_type(UploadType::Single)?;
            wizard.select_files(vec![existing_file(&file)?])?;
            wizard.next()?;
            wizard.set_artist_name(artist)?;
            wizard.set_track_title(title)?;
            extras
        }
        Release::Album {
            artist,
            album,
            files,
            extras,
        } => {
            wizard.select_type(UploadType::Album)?;
            let files = files
                .iter()
                .map(|path| existing_file(path))
                .collect::<anyhow::Result<Vec<_>>>()?;
            wizard.select_files(files)?;
            wizard.next()?;
            wizard.set_artist_name(artist)?;
            wizard.set_album_name(album)?;
            extras
        }
    };

    apply_extras(&mut wizard, extras)?;
    while wizard.submission().is_none() {
        wizard.next()?;
    }
    wizard.close();

    tracing::info!(
        "Upload received, appears on the chart in {:?}",
        state.config.publication.time_to_display()
    );

    let mut staged = None;
    loop {
        match events.recv().await.context("Chart closed before publication")? {
            ChartEvent::Staged { id } if staged.is_none() => staged = Some(id),
            ChartEvent::Revealed { entry } if Some(entry.id) == staged => return Ok(entry),
            ChartEvent::Abandoned { id } if Some(id) == staged => bail!("Publication cancelled"),
            _ => {}
        }
    }
}

fn apply_extras(wizard: &mut UploadWizard<PathBuf>, extras: ExtrasArgs) -> anyhow::Result<()> {
    if let Some(photo) = extras.photo {
        wizard.set_photo(existing_file(&photo)?)?;
    }
    if let Some(url) = extras.video {
        wizard.set_video_url(url)?;
    }
    if let Some(author) = extras.music_author {
        wizard.set_music_author(author)?;
    }
    if let Some(author) = extras.lyrics_author {
        wizard.set_lyrics_author(author)?;
    }
    if let Some(date) = extras.release_date {
        wizard.set_release_date(&date)?;
    }
    Ok(())
}

fn existing_file(path: &Path) -> anyhow::Result<FileRef<PathBuf>> {
    ensure!(path.is_file(), "Not a file: {:?}", path);
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .with_context(|| format!("No file name in {:?}", path))?;
    Ok(FileRef::new(path.to_path_buf(), name))
}
