//! Header Component
//!
//! Brand, section anchors and the upload button.

use leptos::*;

use crate::state::global::GlobalState;

#[component]
pub fn Header() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <header class="relative border-b border-[#DC2626]/20 bg-[#18181B]/80 backdrop-blur-sm">
            <div class="container mx-auto px-4 py-6">
                <div class="flex items-center justify-between">
                    <div>
                        <h1 class="text-5xl font-bold tracking-wider text-white mb-1">
                            "THE SOUND OF ROCK"
                        </h1>
                        <p class="text-[#DC2626] text-sm tracking-widest">"UNDERGROUND MUSIC PLATFORM"</p>
                    </div>
                    <nav class="flex gap-6 items-center">
                        <NavLink href="#chart" label="CHART" />
                        <NavLink href="#artists" label="ARTISTS" />
                        <button
                            on:click=move |_| state.open_upload()
                            class="bg-[#DC2626] hover:bg-[#DC2626]/80 text-white font-bold px-4 py-2 rounded"
                        >
                            "UPLOAD TRACK"
                        </button>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a href=href class="text-white hover:text-[#DC2626] transition-colors font-medium">
            {label}
        </a>
    }
}
