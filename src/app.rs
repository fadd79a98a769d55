//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::Nav;
use crate::pages::{Category, Home, IndicatorDetail};
use crate::state::global::{provide_global_state, GlobalState};
use crate::state::poll::init_polling;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    // Start the background poll that feeds the dashboard
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    init_polling(state);

    view! {
        <Router>
            <div class="min-h-screen bg-[#0b0f14] text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-6 py-10 pb-24">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/category/:category" view=Category />
                        <Route path="/indicator/:id" view=IndicatorDetail />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Footer with refresh status
                <Footer />
            </div>
        </Router>
    }
}

/// Footer component showing refresh status
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let error = state.error;
    let last_updated = state.last_updated;
    let loading = state.loading;

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-[#0b0f14]/85 border-t border-white/10 py-3 px-4 backdrop-blur">
            <div class="container mx-auto flex items-center justify-between text-sm">
                // Live/offline status
                <div class="flex items-center space-x-2">
                    {move || {
                        if error.get().is_none() {
                            view! {
                                <span class="flex items-center space-x-1 text-emerald-400">
                                    <span class="w-2 h-2 bg-emerald-400 rounded-full animate-pulse" />
                                    <span>"Live"</span>
                                </span>
                            }.into_view()
                        } else {
                            view! {
                                <span class="flex items-center space-x-1 text-red-400">
                                    <span class="w-2 h-2 bg-red-400 rounded-full" />
                                    <span>"Offline"</span>
                                </span>
                            }.into_view()
                        }
                    }}
                </div>

                // Last refresh time
                <div class="text-white/40">
                    {move || {
                        last_updated.get()
                            .and_then(|ts| chrono::DateTime::from_timestamp_millis(ts))
                            .map(|dt| format!("Updated: {}", dt.format("%H:%M:%S")))
                            .unwrap_or_else(|| "Not updated yet".to_string())
                    }}
                </div>

                // Loading indicator
                {move || {
                    if loading.get() {
                        view! {
                            <div class="flex items-center space-x-2 text-white/60">
                                <div class="loading-spinner w-4 h-4" />
                                <span>"Loading..."</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-white/60 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 rounded-2xl border border-white/10 bg-white/5 hover:bg-white/10 font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
