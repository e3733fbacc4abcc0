//! Upload Dialog Component
//!
//! Modal wrapper around the upload wizard. The wizard lives in a signal;
//! every button and input maps to one wizard operation, and errors surface
//! as toasts. Finished uploads go to the publication scheduler.

use leptos::*;
use web_sys::{File, HtmlInputElement};

use rockchart::{FileRef, UploadType, UploadWizard, WizardResult, WizardStep};

use crate::state::global::GlobalState;

type Wizard = UploadWizard<File>;

/// Upload modal; mounted while `upload_open` is set
#[component]
pub fn UploadDialog() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let complete_state = state.clone();
    let close_state = state.clone();
    let wizard = WizardHandle {
        wizard: create_rw_signal(
            Wizard::new()
                .with_on_complete(move |submission| {
                    complete_state.publisher.publish(submission);
                    complete_state.show_success(&format!("\"{}\" sent for review", submission.headline()));
                })
                .with_on_close(move || close_state.close_upload()),
        ),
        state: store_value(state),
    };

    // Closing unmounts this component; let the wizard update finish first
    let close = move || batch(move || wizard.wizard.update(|w| w.close()));

    // Typing must not rebuild the current step
    let step = create_memo(move |_| wizard.with(|w| w.step()));

    view! {
        <div class="fixed inset-0 z-50 bg-black/80 flex items-center justify-center" on:click=move |_| close()>
            <div
                class="bg-[#18181B] border border-[#DC2626] text-white max-w-2xl w-full max-h-[90vh] overflow-y-auto rounded p-6"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="flex items-start justify-between">
                    <h2 class="text-3xl font-bold text-[#DC2626]">{move || wizard.with(|w| w.step_title())}</h2>
                    <button on:click=move |_| close() class="text-gray-400 hover:text-white text-xl">"✕"</button>
                </div>

                <StepIndicator wizard=wizard />

                <div class="mt-6">
                    {move || match step.get() {
                        WizardStep::Type => view! { <TypeStep wizard=wizard /> }.into_view(),
                        WizardStep::Files => view! { <FilesStep wizard=wizard /> }.into_view(),
                        WizardStep::Info => view! { <InfoStep wizard=wizard /> }.into_view(),
                        WizardStep::Photo => view! { <PhotoStep wizard=wizard /> }.into_view(),
                        WizardStep::Video => view! { <VideoStep wizard=wizard /> }.into_view(),
                        WizardStep::Credits => view! { <CreditsStep wizard=wizard /> }.into_view(),
                        WizardStep::Success => view! { <SuccessStep wizard=wizard on_close=close /> }.into_view(),
                    }}
                </div>
            </div>
        </div>
    }
}

/// Wizard signal plus the state that reports its errors
#[derive(Clone, Copy)]
struct WizardHandle {
    wizard: RwSignal<Wizard>,
    state: StoredValue<GlobalState>,
}

impl WizardHandle {
    fn with<R>(self, f: impl FnOnce(&Wizard) -> R) -> R {
        self.wizard.with(f)
    }

    fn with_untracked<R>(self, f: impl FnOnce(&Wizard) -> R) -> R {
        self.wizard.with_untracked(f)
    }

    /// Run a wizard operation; failures become an error toast
    fn apply<T>(self, op: impl FnOnce(&mut Wizard) -> WizardResult<T>) {
        if let Some(Err(e)) = self.wizard.try_update(op) {
            self.state.with_value(|state| state.show_error(&e.to_string()));
        }
    }
}

/// Files picked in an `<input type="file">`, as wizard file references
fn picked_files(ev: &web_sys::Event) -> Vec<FileRef<File>> {
    let input = event_target::<HtmlInputElement>(ev);
    let files = input
        .files()
        .map(|list| {
            (0..list.length())
                .filter_map(|i| list.get(i))
                .map(|file| {
                    let name = file.name();
                    FileRef::new(file, name)
                })
                .collect()
        })
        .unwrap_or_default();
    // Allow picking the same file again
    input.set_value("");
    files
}

#[component]
fn StepIndicator(wizard: WizardHandle) -> impl IntoView {
    let current = move || wizard.with(|w| w.step().index());

    view! {
        <div class="flex gap-2 mt-4">
            {WizardStep::ALL[..WizardStep::ALL.len() - 1]
                .iter()
                .map(|s| {
                    let index = s.index();
                    view! {
                        <div class=move || {
                            if index <= current() {
                                "h-1 flex-1 rounded bg-[#DC2626]"
                            } else {
                                "h-1 flex-1 rounded bg-[#52525B]"
                            }
                        } />
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn NavButtons(wizard: WizardHandle, #[prop(default = "NEXT")] next_label: &'static str) -> impl IntoView {
    view! {
        <div class="flex gap-4 mt-6">
            <button
                on:click=move |_| wizard.apply(|w| w.back())
                class="flex-1 border border-[#52525B] text-white hover:bg-[#52525B] rounded py-3"
            >
                "BACK"
            </button>
            <button
                on:click=move |_| wizard.apply(|w| w.next())
                disabled=move || !wizard.with(|w| w.can_advance())
                class="flex-1 bg-[#DC2626] hover:bg-[#DC2626]/80 text-white font-bold rounded py-3 disabled:opacity-50"
            >
                {next_label}
            </button>
        </div>
    }
}

#[component]
fn TypeStep(wizard: WizardHandle) -> impl IntoView {
    let choose = move |upload_type: UploadType| wizard.apply(|w| w.select_type(upload_type));

    view! {
        <div class="grid grid-cols-2 gap-6">
            <TypeCard icon="🎵" title="SINGLE TRACK" hint="Upload a single song" on_click=move || choose(UploadType::Single) />
            <TypeCard icon="💿" title="ALBUM" hint="From 1 to 25 tracks" on_click=move || choose(UploadType::Album) />
        </div>
    }
}

#[component]
fn TypeCard(
    icon: &'static str,
    title: &'static str,
    hint: &'static str,
    on_click: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <div
            on:click=move |_| on_click()
            class="bg-[#0A0A0A] border border-[#52525B] hover:border-[#DC2626] transition-all cursor-pointer p-8 text-center rounded group"
        >
            <div class="mb-6 flex justify-center">
                <div class="w-24 h-24 rounded-full bg-gradient-to-br from-[#DC2626] to-[#18181B] flex items-center justify-center text-5xl group-hover:scale-110 transition-transform">
                    {icon}
                </div>
            </div>
            <h3 class="text-2xl font-bold text-white mb-3">{title}</h3>
            <p class="text-gray-400">{hint}</p>
        </div>
    }
}

#[component]
fn FilesStep(wizard: WizardHandle) -> impl IntoView {
    let is_album = wizard.with_untracked(|w| w.upload_type() == Some(UploadType::Album));
    let tracks = move || {
        wizard.with(|w| w.tracks().iter().map(|t| t.name.clone()).collect::<Vec<_>>())
    };

    view! {
        <div class="space-y-6">
            <label class="block border-2 border-dashed border-[#52525B] hover:border-[#DC2626] rounded p-12 text-center transition-colors cursor-pointer">
                <div class="text-6xl text-[#DC2626] mb-4">"⬆"</div>
                <p class="text-xl text-white mb-2">
                    {if is_album { "Drop your album tracks here" } else { "Drop your track here" }}
                </p>
                <p class="text-gray-400 mb-6">"MP3, WAV, FLAC up to 50MB"</p>
                <input
                    type="file"
                    accept="audio/*"
                    multiple=is_album
                    class="hidden"
                    on:change=move |ev| {
                        let files = picked_files(&ev);
                        wizard.apply(|w| w.select_files(files));
                    }
                />
                <span class="bg-[#DC2626] hover:bg-[#DC2626]/80 text-white font-bold px-4 py-2 rounded">"CHOOSE FILES"</span>
            </label>

            {move || {
                let names = tracks();
                (!names.is_empty()).then(|| view! {
                    <div class="space-y-3">
                        <h4 class="text-lg font-bold text-white">{format!("Selected files ({}):", names.len())}</h4>
                        {names
                            .into_iter()
                            .enumerate()
                            .map(|(index, name)| view! {
                                <div class="flex items-center gap-3 bg-[#0A0A0A] p-4 rounded border border-[#52525B]">
                                    <span class="text-[#DC2626]">"🎵"</span>
                                    <span class="text-white flex-1">{name}</span>
                                    <button
                                        on:click=move |_| wizard.apply(|w| w.remove_file(index))
                                        class="text-gray-400 hover:text-[#DC2626]"
                                    >
                                        "✕"
                                    </button>
                                </div>
                            })
                            .collect_view()}
                    </div>
                })
            }}

            <NavButtons wizard=wizard />
        </div>
    }
}

#[component]
fn TextField(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: impl Fn(String) + 'static,
) -> impl IntoView {
    view! {
        <div>
            <label class="text-white text-lg mb-2 block">{label}</label>
            <input
                id=id
                type="text"
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| on_input(event_target_value(&ev))
                class="w-full bg-[#0A0A0A] border border-[#52525B] focus:border-[#DC2626] focus:outline-none text-white text-lg p-4 rounded"
            />
        </div>
    }
}

#[component]
fn InfoStep(wizard: WizardHandle) -> impl IntoView {
    let is_album = wizard.with_untracked(|w| w.upload_type() == Some(UploadType::Album));

    view! {
        <div class="space-y-4">
            <TextField
                id="artist"
                label="Artist / band name *"
                placeholder="Enter a name"
                value=Signal::derive(move || wizard.with(|w| w.artist_name().to_string()))
                on_input=move |v| wizard.apply(|w| w.set_artist_name(v))
            />
            {if is_album {
                view! {
                    <TextField
                        id="album"
                        label="Album name *"
                        placeholder="Enter the album name"
                        value=Signal::derive(move || wizard.with(|w| w.album_name().to_string()))
                        on_input=move |v| wizard.apply(|w| w.set_album_name(v))
                    />
                }
                .into_view()
            } else {
                view! {
                    <TextField
                        id="track"
                        label="Track title *"
                        placeholder="Enter the track title"
                        value=Signal::derive(move || wizard.with(|w| w.track_title().to_string()))
                        on_input=move |v| wizard.apply(|w| w.set_track_title(v))
                    />
                }
                .into_view()
            }}
            <NavButtons wizard=wizard />
        </div>
    }
}

#[component]
fn PhotoStep(wizard: WizardHandle) -> impl IntoView {
    let photo = move || wizard.with(|w| w.photo().map(|p| p.name.clone()));

    view! {
        <div class="space-y-6">
            <div class="border-2 border-dashed border-[#52525B] hover:border-[#DC2626] rounded p-12 text-center transition-colors">
                {move || match photo() {
                    Some(name) => view! {
                        <div class="space-y-4">
                            <div class="text-6xl text-green-500">"✓"</div>
                            <p class="text-white text-lg">{format!("Photo uploaded: {}", name)}</p>
                            <button
                                on:click=move |_| wizard.apply(|w| w.clear_photo())
                                class="border border-[#DC2626] text-[#DC2626] hover:bg-[#DC2626] hover:text-white px-4 py-2 rounded"
                            >
                                "REMOVE"
                            </button>
                        </div>
                    }
                    .into_view(),
                    None => view! {
                        <label class="block cursor-pointer">
                            <div class="text-6xl text-[#DC2626] mb-4">"🖼"</div>
                            <p class="text-xl text-white mb-2">"Upload a photo of the artist or band"</p>
                            <p class="text-gray-400 mb-6">"JPG, PNG up to 10MB"</p>
                            <input
                                type="file"
                                accept="image/*"
                                class="hidden"
                                on:change=move |ev| {
                                    if let Some(file) = picked_files(&ev).into_iter().next() {
                                        wizard.apply(|w| w.set_photo(file));
                                    }
                                }
                            />
                            <span class="bg-[#DC2626] hover:bg-[#DC2626]/80 text-white font-bold px-4 py-2 rounded">"CHOOSE PHOTO"</span>
                        </label>
                    }
                    .into_view(),
                }}
            </div>
            <p class="text-gray-400 text-sm text-center">"* This step can be skipped"</p>
            <NavButtons wizard=wizard />
        </div>
    }
}

#[component]
fn VideoStep(wizard: WizardHandle) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div>
                <label class="text-white text-lg mb-2 block">"Music video link"</label>
                <textarea
                    id="video"
                    placeholder="Paste a YouTube, Vimeo or other link"
                    prop:value=move || wizard.with(|w| w.video_url().to_string())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        wizard.apply(|w| w.set_video_url(value));
                    }
                    class="w-full bg-[#0A0A0A] border border-[#52525B] text-white text-lg p-4 min-h-[120px] rounded"
                />
                <p class="text-gray-400 text-sm mt-2">"* Optional"</p>
            </div>
            <NavButtons wizard=wizard />
        </div>
    }
}

#[component]
fn CreditsStep(wizard: WizardHandle) -> impl IntoView {
    let release_date = move || {
        wizard.with(|w| {
            w.release_date()
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="space-y-4">
            <TextField
                id="music-author"
                label="Music by"
                placeholder="Composer name"
                value=Signal::derive(move || wizard.with(|w| w.music_author().to_string()))
                on_input=move |v| wizard.apply(|w| w.set_music_author(v))
            />
            <TextField
                id="lyrics-author"
                label="Lyrics by"
                placeholder="Lyricist name"
                value=Signal::derive(move || wizard.with(|w| w.lyrics_author().to_string()))
                on_input=move |v| wizard.apply(|w| w.set_lyrics_author(v))
            />
            <div>
                <label class="text-white text-lg mb-2 block">"Release date"</label>
                <input
                    id="release-date"
                    type="date"
                    prop:value=release_date
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        wizard.apply(|w| w.set_release_date(&value));
                    }
                    class="w-full bg-[#0A0A0A] border border-[#52525B] text-white text-lg p-4 rounded"
                />
            </div>
            <NavButtons wizard=wizard next_label="PUBLISH" />
        </div>
    }
}

#[component]
fn SuccessStep(wizard: WizardHandle, on_close: impl Fn() + 'static) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let seconds = state.publisher.config().time_to_display().as_secs();

    let (headline, artist) = wizard.with_untracked(|w| {
        w.submission()
            .map(|s| (s.headline().to_string(), s.artist().to_string()))
            .unwrap_or_default()
    });

    view! {
        <div class="text-center space-y-6 py-8">
            <div class="text-8xl text-green-500">"✓"</div>
            <h3 class="text-3xl font-bold text-white">{format!("\"{}\" uploaded!", headline)}</h3>
            <p class="text-gray-300 text-lg">{format!("by {}", artist)}</p>
            <p class="text-gray-400">
                {format!("Your release is under review and appears on the chart in about {} seconds.", seconds)}
            </p>
            <button
                on:click=move |_| on_close()
                class="bg-[#DC2626] hover:bg-[#DC2626]/80 text-white font-bold text-lg px-12 py-4 rounded"
            >
                "CLOSE"
            </button>
        </div>
    }
}
