//! Artist Profile Overlay
//!
//! Full-screen profile for the artist selected on the chart or in the
//! featured grid. Tabs: tracks, albums, about.

use leptos::*;

use rockchart::{format_count, AlbumRecord, ArtistRecord, ArtistTrack, ProfileTab, TrackKey};

use crate::state::global::GlobalState;

#[component]
pub fn ArtistProfile() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let profile = state.profile;

    // Tab switches must not rebuild the whole overlay
    let open = create_memo(move |_| profile.with(|p| p.artist_name().map(str::to_string)));

    move || {
        let record = state.catalog.artist(&open.get()?)?.clone();
        Some(view! { <ProfileView record=record /> })
    }
}

#[component]
fn ProfileView(record: ArtistRecord) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let profile = state.profile;

    let close_state = state.clone();
    let on_close = move |_| close_state.close_artist();

    let tab = move || profile.with(|p| p.tab());
    let tracks = record.tracks.clone();
    let albums = record.albums.clone();
    let bio = record.bio.clone();
    let about = About {
        genre: record.genre.clone(),
        followers: record.followers,
        total_plays: record.total_plays,
        albums: record.albums.len(),
    };
    let artist_name = record.name.clone();

    view! {
        <div class="fixed inset-0 z-50 bg-black/80 overflow-y-auto">
            <div class="max-w-5xl mx-auto my-8 bg-[#18181B] border border-[#DC2626] rounded">
                <div class="relative h-64" style:background=record.theme.css_gradient(135)>
                    <button
                        on:click=on_close
                        class="absolute top-4 right-4 w-10 h-10 rounded-full bg-black/50 hover:bg-[#DC2626] text-white"
                    >
                        "✕"
                    </button>
                    <div class="absolute bottom-6 left-6">
                        <h2 class="text-6xl font-bold text-white tracking-wide">{record.name.clone()}</h2>
                        <p class="text-xl text-white/80">{record.genre.clone()}</p>
                    </div>
                </div>

                <div class="flex gap-8 px-6 py-4 border-b border-[#52525B]">
                    <Stat label="PLAYS" value=format_count(record.total_plays) />
                    <Stat label="FOLLOWERS" value=format_count(record.followers) />
                    <Stat label="TRACKS" value=record.tracks.len().to_string() />
                    <Stat label="ALBUMS" value=record.albums.len().to_string() />
                </div>

                <div class="flex gap-2 px-6 pt-4">
                    {ProfileTab::ALL
                        .into_iter()
                        .map(|t| view! { <TabButton tab=t /> })
                        .collect_view()}
                </div>

                <div class="p-6">
                    {move || match tab() {
                        ProfileTab::Tracks => tracks
                            .iter()
                            .enumerate()
                            .map(|(index, track)| view! {
                                <TrackRow artist=artist_name.clone() index=index + 1 track=track.clone() />
                            })
                            .collect_view(),
                        ProfileTab::Albums => view! {
                            <div class="grid grid-cols-2 md:grid-cols-3 gap-6">
                                {albums.iter().cloned().map(|album| view! { <AlbumCard album=album /> }).collect_view()}
                            </div>
                        }
                        .into_view(),
                        ProfileTab::About => view! {
                            <div class="space-y-6">
                                <p class="text-gray-300 text-lg leading-relaxed">{bio.clone()}</p>
                                <dl class="grid grid-cols-2 gap-4">
                                    <AboutFact label="Genre" value=about.genre.clone() />
                                    <AboutFact label="Followers" value=format_count(about.followers) />
                                    <AboutFact label="Total plays" value=format_count(about.total_plays) />
                                    <AboutFact label="Albums" value=about.albums.to_string() />
                                </dl>
                            </div>
                        }
                        .into_view(),
                    }}
                </div>
            </div>
        </div>
    }
}

struct About {
    genre: String,
    followers: u64,
    total_plays: u64,
    albums: usize,
}

#[component]
fn AboutFact(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="bg-[#0A0A0A] border border-[#52525B] rounded p-4">
            <dt class="text-gray-500 text-sm">{label}</dt>
            <dd class="text-white text-xl font-bold">{value}</dd>
        </div>
    }
}

#[component]
fn Stat(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div>
            <div class="text-2xl font-bold text-white">{value}</div>
            <div class="text-gray-500 text-sm">{label}</div>
        </div>
    }
}

#[component]
fn TabButton(tab: ProfileTab) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let profile = state.profile;

    view! {
        <button
            on:click=move |_| profile.update(|p| p.select_tab(tab))
            class=move || {
                let base = "px-6 py-2 font-bold rounded-t transition-colors";
                if profile.with(|p| p.tab()) == tab {
                    format!("{} bg-[#DC2626] text-white", base)
                } else {
                    format!("{} text-gray-400 hover:text-white", base)
                }
            }
        >
            {tab.label()}
        </button>
    }
}

#[component]
fn TrackRow(artist: String, index: usize, track: ArtistTrack) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let player = state.player;
    let key = TrackKey::Artist {
        artist,
        track: track.id,
    };
    let track_id = track.id;

    view! {
        <div class="flex items-center gap-4 py-3 border-b border-[#52525B]/30 hover:bg-[#0A0A0A] px-2 rounded">
            <span class="text-gray-500 w-6 text-right">{index}</span>
            <button
                on:click=move |_| state.play_profile_track(track_id)
                class="w-10 h-10 rounded-full bg-[#DC2626] hover:scale-110 transition-transform"
            >
                {move || if player.with(|p| p.is_playing_key(&key)) { "⏸" } else { "▶" }}
            </button>
            <div class="flex-1 min-w-0">
                <div class="text-white font-bold truncate">{track.title}</div>
                <div class="text-gray-500 text-sm truncate">{track.album}</div>
            </div>
            <span class="text-gray-400 w-24 text-right">{format_count(track.plays)}</span>
            <span class="text-gray-500 w-12 text-right">{track.duration}</span>
        </div>
    }
}

#[component]
fn AlbumCard(album: AlbumRecord) -> impl IntoView {
    view! {
        <div class="group">
            <div
                class="aspect-square rounded mb-3 group-hover:scale-105 transition-transform"
                style:background=album.cover.css_gradient(135)
            />
            <h4 class="text-white font-bold">{album.title}</h4>
            <p class="text-gray-500 text-sm">
                {format!("{} • {} tracks • {} plays", album.year, album.track_count, format_count(album.plays))}
            </p>
        </div>
    }
}
