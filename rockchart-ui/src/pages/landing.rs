//! Landing Page
//!
//! Hero, live chart and featured artists.

use leptos::*;

use rockchart::PlayingTrack;

use crate::components::{ArtistGrid, ChartList};
use crate::state::global::GlobalState;

#[component]
pub fn Landing() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let chart = state.chart;
    let player = state.player;

    // Start the chart from the top
    let play_top = move |_| {
        let top = chart.with(|c| c.entries().first().map(PlayingTrack::from_chart));
        if let Some(track) = top {
            player.update(|p| p.toggle(track));
        }
    };

    view! {
        <div class="space-y-8">
            <section class="relative py-24 overflow-hidden">
                <div
                    class="absolute inset-0 opacity-30"
                    style="background: linear-gradient(135deg, #DC2626 0%, #18181B 50%, #000000 100%)"
                />
                <div class="container mx-auto px-4 relative z-10">
                    <div class="max-w-4xl mx-auto text-center">
                        <span class="inline-block mb-6 bg-[#DC2626] text-white text-lg px-6 py-2 rounded">
                            "🎸 LIVE NOW"
                        </span>
                        <h2 class="text-7xl font-bold text-white mb-6 tracking-wide">
                            "YOUNG ROCKERS"<br />"TAKE OVER THE AIR"
                        </h2>
                        <p class="text-xl text-gray-300 mb-12 max-w-2xl mx-auto">
                            "Listen to the best tracks from independent rock bands. \
                             Vote for your favourite artists. Climb The Sound of Rock chart."
                        </p>
                        <div class="flex gap-4 justify-center">
                            <button
                                on:click=play_top
                                class="bg-[#DC2626] hover:bg-[#DC2626]/80 text-white font-bold text-lg px-8 py-4 rounded"
                            >
                                "▶ PLAY THE CHART"
                            </button>
                            <button
                                on:click=move |_| state.open_upload()
                                class="border border-white text-white hover:bg-white hover:text-black font-bold text-lg px-8 py-4 rounded"
                            >
                                "⬆ UPLOAD MUSIC"
                            </button>
                        </div>
                    </div>
                </div>
            </section>

            <ChartList />
            <ArtistGrid />
        </div>
    }
}
