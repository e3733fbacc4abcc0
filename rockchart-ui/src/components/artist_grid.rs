//! Featured Artists Component

use leptos::*;

use rockchart::FeaturedArtist;

use crate::state::global::GlobalState;

#[component]
pub fn ArtistGrid() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let featured = state.catalog.featured().to_vec();

    view! {
        <section id="artists" class="relative py-16 bg-[#18181B]/50">
            <div class="container mx-auto px-4">
                <h2 class="text-5xl font-bold text-white mb-12 tracking-wide">"FEATURED ARTISTS"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {featured
                        .into_iter()
                        .map(|artist| view! { <ArtistCard artist=artist /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ArtistCard(artist: FeaturedArtist) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Cards only open a profile when the catalog has one
    let has_profile = state.catalog.contains(&artist.name);
    let name = artist.name.clone();
    let on_click = move |_| state.open_artist(&name);
    let card_class = if has_profile {
        "bg-[#0A0A0A] border border-[#52525B] hover:border-[#DC2626] p-6 rounded cursor-pointer group transition-all"
    } else {
        "bg-[#0A0A0A] border border-[#52525B] p-6 rounded"
    };

    view! {
        <div on:click=on_click class=card_class>
            <div class="w-full aspect-square mb-4 rounded bg-gradient-to-br from-[#DC2626] to-[#18181B] flex items-center justify-center text-6xl group-hover:scale-105 transition-transform">
                "🎸"
            </div>
            <h3 class="text-2xl font-bold text-white mb-1">{artist.name}</h3>
            <p class="text-[#DC2626] mb-2">{artist.genre}</p>
            <p class="text-gray-500 text-sm">{format!("{} tracks", artist.track_count)}</p>
        </div>
    }
}
