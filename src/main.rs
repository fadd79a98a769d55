//! Global Statistics Dashboard
//!
//! Live world-indicator dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Featured indicator grid with smooth value transitions
//! - Category pages with text search
//! - Per-indicator detail view
//! - Fixed-cadence polling of the indicators API
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles
//! to WebAssembly. It polls a REST API for indicator snapshots; every
//! value change is smoothed by the frame-driven animator in [`anim`].

use leptos::*;

mod anim;
mod api;
mod app;
mod components;
mod format;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
