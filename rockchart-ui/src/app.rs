//! App Root Component
//!
//! Main application component with global providers and overlays.

use leptos::*;

use crate::components::{ArtistProfile, Header, NowPlayingBar, Toast, UploadDialog};
use crate::pages::Landing;
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="min-h-screen bg-[#0A0A0A] text-white flex flex-col">
            <Header />

            <main class="flex-1 pb-24">
                <Landing />
            </main>

            <Footer />

            // Overlays
            <ArtistProfile />
            {move || state.upload_open.get().then(|| view! { <UploadDialog /> })}

            <NowPlayingBar />
            <Toast />
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-[#DC2626]/20 bg-[#18181B] py-8 mb-20">
            <div class="container mx-auto px-4 text-center">
                <p class="text-2xl font-bold tracking-wider">"THE SOUND OF ROCK"</p>
                <p class="text-gray-500 text-sm mt-2">"Underground music platform"</p>
            </div>
        </footer>
    }
}
