//! Now Playing Bar
//!
//! Fixed bottom bar; hidden until something has been played.

use leptos::*;

use crate::state::global::GlobalState;

#[component]
pub fn NowPlayingBar() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let player = state.player;

    move || {
        let current = player.with(|p| p.current().cloned())?;

        Some(view! {
            <div class="fixed bottom-0 left-0 right-0 bg-[#18181B] border-t border-[#DC2626] py-4 px-4 z-40">
                <div class="container mx-auto flex items-center gap-6">
                    <div class="w-14 h-14 rounded bg-gradient-to-br from-[#DC2626] to-[#18181B] flex items-center justify-center">
                        "🎵"
                    </div>
                    <div class="min-w-0 w-64">
                        <div class="text-white font-bold truncate">{current.title}</div>
                        <div class="text-gray-400 text-sm truncate">{current.artist}</div>
                    </div>

                    <button
                        on:click=move |_| {
                            player.update(|p| {
                                p.toggle_playback();
                            })
                        }
                        class="w-12 h-12 rounded-full bg-[#DC2626] hover:scale-110 transition-transform flex items-center justify-center"
                    >
                        {move || if player.with(|p| p.is_playing()) { "⏸" } else { "▶" }}
                    </button>

                    <div class="flex-1 h-1 bg-[#52525B] rounded overflow-hidden">
                        <div
                            class="h-full bg-[#DC2626] transition-all"
                            style:width=move || format!("{}%", player.with(|p| p.progress_percent()))
                        />
                    </div>
                    <div class="hidden md:block text-gray-500 text-sm w-40 truncate">{current.album}</div>
                </div>
            </div>
        })
    }
}
