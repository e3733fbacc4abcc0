//! Chart Component
//!
//! The live chart. Rows revealed by the publication scheduler carry a
//! NEW badge until their marker clears.

use leptos::*;

use rockchart::{format_count, ChartEntry, PlayingTrack, TrackKey, Trend};

use crate::state::global::GlobalState;

#[component]
pub fn ChartList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let chart = state.chart;

    view! {
        <section id="chart" class="relative py-16">
            <div class="container mx-auto px-4">
                <div class="mb-12">
                    <h2 class="text-6xl font-bold text-white mb-2 tracking-wide">"THE SOUND OF ROCK"</h2>
                    <p class="text-[#DC2626] text-xl tracking-wider">"CHART OF THE WEEK"</p>
                </div>

                <div class="space-y-3">
                    {move || {
                        chart.with(|chart| {
                            chart
                                .entries()
                                .iter()
                                .map(|entry| {
                                    let is_new = chart.is_new(entry.id);
                                    view! { <ChartRow entry=entry.clone() is_new=is_new /> }
                                })
                                .collect_view()
                        })
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ChartRow(entry: ChartEntry, is_new: bool) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let player = state.player;
    let key = TrackKey::Chart { id: entry.id };

    let playing = move || player.with(|p| p.is_playing_key(&key));
    let track = PlayingTrack::from_chart(&entry);
    let on_play = move |_| {
        let track = track.clone();
        player.update(|p| p.toggle(track));
    };

    let artist = entry.artist.clone();
    let profile_state = state.clone();
    let on_artist = move |_| profile_state.open_artist(&artist);

    let trend_class = match entry.trend {
        Trend::Up => "text-green-500",
        Trend::Down => "text-red-500",
        Trend::Same => "text-gray-500",
    };

    let row_class = if is_new {
        "flex items-center gap-6 bg-[#18181B] border border-[#DC2626] p-4 rounded transition-all"
    } else {
        "flex items-center gap-6 bg-[#18181B] border border-[#52525B]/30 hover:border-[#DC2626]/50 p-4 rounded transition-all"
    };

    view! {
        <div class=row_class>
            <div class="text-4xl font-bold text-[#DC2626] w-16 text-center">{entry.rank}</div>
            <span class=format!("text-xl {}", trend_class)>{entry.trend.symbol()}</span>

            <button
                on:click=on_play
                class="w-12 h-12 rounded-full bg-[#DC2626] hover:scale-110 transition-transform flex items-center justify-center"
            >
                {move || if playing() { "⏸" } else { "▶" }}
            </button>

            <div class="flex-1 min-w-0">
                <div class="flex items-center gap-3">
                    <h3 class="text-xl font-bold text-white truncate">{entry.title.clone()}</h3>
                    {is_new.then(|| view! {
                        <span class="bg-[#DC2626] text-white text-xs font-bold px-2 py-1 rounded animate-pulse">"NEW"</span>
                    })}
                </div>
                <p class="text-gray-400 truncate">
                    <button on:click=on_artist class="hover:text-[#DC2626] transition-colors">
                        {entry.artist.clone()}
                    </button>
                    {format!(" • {}", entry.album)}
                </p>
            </div>

            <div class="text-right w-32">
                <div class="text-white font-bold">{format_count(entry.plays)}</div>
                <div class="text-gray-500 text-sm">"plays"</div>
            </div>
        </div>
    }
}
