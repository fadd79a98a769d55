//! Home Page
//!
//! Featured indicator grid with live badge and category shortcuts.

use leptos::*;
use leptos_router::*;

use crate::components::{CardSkeleton, ErrorBanner, IndicatorCard};
use crate::state::global::GlobalState;

/// Indicators pinned to the home grid, in display order.
const PINNED_IDS: &[&str] = &[
    "population_world",
    "gdp_world_current_usd",
    "population_brazil_worldbank",
    "gdp_brazil_current_usd",
    "selic_bcb_daily",
    "ipca_bcb_monthly",
    "usd_brl_bcb",
    "electricity_access_world_percent",
];

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let indicators = state.indicators;
    let loading = state.loading;

    // Pinned ids present in the current snapshot, in pinned order.
    let featured = create_memo(move |_| {
        let items = indicators.get();
        PINNED_IDS
            .iter()
            .filter(|id| items.iter().any(|it| &it.id == *id))
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
    });

    view! {
        <div>
            // Page header with live badge
            <header class="mb-10 flex items-start justify-between gap-6">
                <div>
                    <div class="inline-flex items-center gap-2 rounded-full border border-white/10 bg-white/5 px-3 py-1 text-xs text-white/70">
                        <span class="h-2 w-2 rounded-full bg-emerald-400 animate-pulse" />
                        "LIVE"
                    </div>

                    <h1 class="mt-4 text-3xl font-bold tracking-tight">"Global Statistics"</h1>
                    <p class="mt-2 text-sm text-white/55">"Live world indicators, refreshed every few seconds"</p>
                </div>

                <div class="flex gap-2">
                    <CategoryShortcut category="Economia" />
                    <CategoryShortcut category="Brasil" />
                    <CategoryShortcut category="Energia" />
                </div>
            </header>

            <ErrorBanner />

            // Featured grid
            {move || {
                if loading.get() {
                    view! {
                        <div class="grid gap-6 md:grid-cols-2">
                            <CardSkeleton />
                            <CardSkeleton />
                            <CardSkeleton />
                            <CardSkeleton />
                        </div>
                    }.into_view()
                } else {
                    view! {
                        <div class="grid gap-6 md:grid-cols-2">
                            <For
                                each=move || featured.get()
                                key=|id| id.clone()
                                children=move |id: String| view! { <IndicatorCard id=id /> }
                            />
                        </div>
                    }.into_view()
                }
            }}

            <footer class="mt-10 text-xs text-white/35">
                {move || format!("Total loaded: {} indicators.", indicators.get().len())}
            </footer>
        </div>
    }
}

/// Shortcut link into a category page
#[component]
fn CategoryShortcut(category: &'static str) -> impl IntoView {
    view! {
        <A
            href=format!("/category/{}", category)
            class="rounded-2xl border border-white/10 bg-white/5 px-4 py-2 text-sm text-white/80 hover:bg-white/10"
        >
            {category} " →"
        </A>
    }
}
