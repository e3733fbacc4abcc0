//! The Sound of Rock
//!
//! Underground rock chart showcase built with Leptos (WASM).
//!
//! # Features
//!
//! - Live chart with play buttons and "new" badges
//! - Featured artists with full profile overlays
//! - Multi-step upload wizard for singles and albums
//! - Simulated moderation: uploads land on the chart a few seconds later
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! All chart, wizard and player logic comes from the `rockchart` crate;
//! this crate only wires it to signals and the DOM.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
