//! Indicator Card Components
//!
//! Featured card (home grid) and compact row (category tables) for a
//! single indicator. Both take an id and read the live snapshot from
//! context, so a poll refresh updates them in place and the animated
//! value keeps its transition state.

use leptos::*;
use leptos_router::*;

use crate::components::AnimatedNumber;
use crate::state::global::GlobalState;

/// Featured indicator card for the dashboard grid
#[component]
pub fn IndicatorCard(
    /// Indicator id to track
    #[prop(into)]
    id: String,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let lookup_id = id.clone();
    let indicator = create_memo(move |_| state.indicator(&lookup_id));
    let value = create_memo(move |_| indicator.get().and_then(|it| it.value));
    let has_value = create_memo(move |_| value.get().is_some());

    view! {
        <A
            href=format!("/indicator/{}", id)
            class="block rounded-3xl border border-white/10 bg-white/5 p-7 hover:bg-white/10 transition"
        >
            <div class="flex items-center justify-between gap-4">
                <div class=move || {
                    let category = indicator.get().map(|it| it.category).unwrap_or_default();
                    format!(
                        "inline-flex items-center rounded-full border px-3 py-1 text-xs uppercase tracking-wide {}",
                        chip_color(&category)
                    )
                }>
                    {move || indicator.get().map(|it| it.category).unwrap_or_default()}
                </div>
                <div class="text-xs text-white/45">
                    {move || indicator.get().map(|it| it.source).unwrap_or_default()}
                </div>
            </div>

            <div class="mt-4 text-lg font-semibold leading-snug">
                {move || indicator.get().map(|it| it.title).unwrap_or_default()}
            </div>

            <div class="mt-6 text-5xl font-mono font-bold tracking-tight">
                <Show
                    when=move || has_value.get()
                    fallback=|| view! { <span class="text-white/40">"—"</span> }
                >
                    <AnimatedNumber value=Signal::derive(move || value.get().unwrap_or(0.0)) />
                </Show>
            </div>

            <div class="mt-2 text-sm text-white/45">
                {move || indicator.get().map(|it| it.unit).unwrap_or_default()}
            </div>

            <div class="mt-5 text-xs text-white/30 font-mono">
                {move || indicator.get().map(|it| format!("id: {}", it.id)).unwrap_or_default()}
            </div>
        </A>
    }
}

/// Table row for the category listing
#[component]
pub fn IndicatorRow(
    #[prop(into)]
    id: String,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let lookup_id = id.clone();
    let indicator = create_memo(move |_| state.indicator(&lookup_id));
    let value = create_memo(move |_| indicator.get().and_then(|it| it.value));
    let has_value = create_memo(move |_| value.get().is_some());

    view! {
        <A
            href=format!("/indicator/{}", id)
            class="grid grid-cols-12 px-4 py-3 border-t border-white/10 hover:bg-white/5 transition"
        >
            <div class="col-span-7">
                <div class="text-sm font-medium">
                    {move || indicator.get().map(|it| it.title).unwrap_or_default()}
                </div>
                <div class="text-xs text-white/50 font-mono">
                    {move || indicator.get().map(|it| format!("id: {}", it.id)).unwrap_or_default()}
                </div>
                {move || {
                    indicator.get().and_then(|it| it.note).map(|note| view! {
                        <div class="text-xs text-white/50">{note}</div>
                    })
                }}
            </div>

            <div class="col-span-3 text-right">
                <div class="text-lg font-mono">
                    <Show
                        when=move || has_value.get()
                        fallback=|| view! { <span class="text-white/50">"—"</span> }
                    >
                        <AnimatedNumber value=Signal::derive(move || value.get().unwrap_or(0.0)) />
                    </Show>
                </div>
                <div class="text-xs text-white/50">
                    {move || indicator.get().map(|it| it.unit).unwrap_or_default()}
                </div>
            </div>

            <div class="col-span-2 text-right">
                <div class="text-xs text-white/70">
                    {move || indicator.get().map(|it| it.source).unwrap_or_default()}
                </div>
            </div>
        </A>
    }
}

/// Chip accent classes per category
fn chip_color(category: &str) -> &'static str {
    let c = category.to_lowercase();
    if c.contains("econom") {
        "bg-emerald-500/15 text-emerald-200 border-emerald-400/20"
    } else if c.contains("brasil") {
        "bg-yellow-500/15 text-yellow-100 border-yellow-400/20"
    } else if c.contains("energia") {
        "bg-sky-500/15 text-sky-200 border-sky-400/20"
    } else {
        "bg-white/10 text-white/70 border-white/10"
    }
}
