//! Error Banner Component
//!
//! Shows the global fetch-error channel. Data already on screen stays
//! up while the banner is visible.

use leptos::*;

use crate::state::global::GlobalState;

/// Banner bound to the global error signal
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        {move || {
            state.error.get().map(|msg| view! {
                <div class="mb-6 rounded-2xl border border-red-500/30 bg-red-500/10 p-4 text-sm">
                    "Error: " <span class="font-mono">{msg}</span>
                </div>
            })
        }}
    }
}
