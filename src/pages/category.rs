//! Category Page
//!
//! Indicator listing for one category with free-text search.

use leptos::*;
use leptos_router::*;

use crate::components::{ErrorBanner, IndicatorRow, ListSkeleton};
use crate::state::global::{filter_category, GlobalState};

/// Category listing page component
#[component]
pub fn Category() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let indicators = state.indicators;
    let loading = state.loading;
    let params = use_params_map();

    let category = move || {
        params.with(|p| p.get("category").cloned().unwrap_or_default())
    };

    let (query, set_query) = create_signal(String::new());

    // Ids matching the category and query, sorted by title.
    let matching_ids = create_memo(move |_| {
        let items = indicators.get();
        filter_category(&items, &category(), &query.get())
            .into_iter()
            .map(|it| it.id.clone())
            .collect::<Vec<_>>()
    });

    view! {
        <div>
            <header class="mb-6 flex items-center justify-between gap-6">
                <div>
                    <A href="/" class="text-sm text-white/70 hover:text-white">"← Back"</A>
                    <h1 class="mt-1 text-2xl font-bold">{category}</h1>
                    <p class="text-xs text-white/60">
                        {move || format!("{} indicator(s)", matching_ids.get().len())}
                    </p>
                </div>

                <input
                    prop:value=query
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                    placeholder="Search this category…"
                    class="w-full max-w-sm rounded-xl border border-white/10 bg-white/5 px-3 py-2 text-sm outline-none focus:border-white/30"
                />
            </header>

            <ErrorBanner />

            {move || {
                if loading.get() {
                    view! { <ListSkeleton count=6 /> }.into_view()
                } else {
                    view! {
                        <div class="rounded-2xl border border-white/10 overflow-hidden">
                            <div class="grid grid-cols-12 bg-white/5 px-4 py-3 text-xs uppercase tracking-wide text-white/60">
                                <div class="col-span-7">"Indicator"</div>
                                <div class="col-span-3 text-right">"Value"</div>
                                <div class="col-span-2 text-right">"Source"</div>
                            </div>

                            <For
                                each=move || matching_ids.get()
                                key=|id| id.clone()
                                children=move |id: String| view! { <IndicatorRow id=id /> }
                            />

                            {move || {
                                if matching_ids.get().is_empty() {
                                    view! {
                                        <div class="px-4 py-10 text-center text-white/60">
                                            "Nothing found."
                                        </div>
                                    }.into_view()
                                } else {
                                    view! {}.into_view()
                                }
                            }}
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}
