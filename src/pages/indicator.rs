//! Indicator Detail Page
//!
//! Single-indicator view with its own poll loop, so deep links work
//! before the global snapshot has arrived. The interval is cancelled
//! when the page unmounts.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{AnimatedNumber, Loading};
use crate::state::global::Indicator;
use crate::state::poll::POLL_INTERVAL_MS;

/// Indicator detail page component
#[component]
pub fn IndicatorDetail() -> impl IntoView {
    let params = use_params_map();

    let id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());

    let (data, set_data) = create_signal(None::<Indicator>);
    let (error, set_error) = create_signal(None::<String>);

    let load = move || {
        let id = id();
        if id.is_empty() {
            return;
        }
        spawn_local(async move {
            match api::fetch_indicator(&id).await {
                Ok(it) => {
                    set_error.set(None);
                    set_data.set(Some(it));
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch indicator: {}", e).into(),
                    );
                    set_error.set(Some(e));
                }
            }
        });
    };

    // Re-fetch when the route param changes (navigation between
    // indicators reuses this component). `load` reads the param
    // synchronously, so the effect tracks it.
    create_effect(move |_| {
        load();
    });

    let interval = gloo_timers::callback::Interval::new(POLL_INTERVAL_MS, load);
    on_cleanup(move || drop(interval));

    // Field-level memos keep the card (and the animated number inside
    // it) mounted across polls; only changed text nodes re-render.
    let loaded = create_memo(move |_| data.get().is_some());
    let value = create_memo(move |_| data.get().and_then(|it| it.value));
    let has_value = create_memo(move |_| value.get().is_some());
    let title = create_memo(move |_| data.get().map(|it| it.title).unwrap_or_default());
    let subtitle = create_memo(move |_| {
        data.get()
            .map(|it| format!("{} • {}", it.category, it.source))
            .unwrap_or_default()
    });
    let unit = create_memo(move |_| data.get().map(|it| it.unit).unwrap_or_default());
    let meta_id = create_memo(move |_| data.get().map(|it| it.id).unwrap_or_default());
    let as_of = create_memo(move |_| {
        data.get()
            .and_then(|it| it.as_of)
            .unwrap_or_else(|| "—".to_string())
    });

    view! {
        <div class="mx-auto max-w-4xl">
            <A href="/" class="text-sm text-white/70 hover:text-white">"← Back"</A>

            {move || {
                if let Some(msg) = error.get() {
                    view! {
                        <div class="mt-6 rounded-2xl border border-red-500/30 bg-red-500/10 p-4 text-sm">
                            "Could not load " <span class="font-mono">{id()}</span>
                            ": " <span class="font-mono">{msg}</span>
                        </div>
                    }.into_view()
                } else if data.get().is_none() {
                    view! { <Loading /> }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            <Show when=move || loaded.get() fallback=|| ()>
                <h1 class="mt-4 text-3xl font-bold">{title}</h1>
                <p class="mt-2 text-white/60">{subtitle}</p>

                <div class="mt-8 rounded-3xl border border-white/10 bg-white/5 p-8">
                    <div class="text-6xl font-mono font-bold">
                        <Show
                            when=move || has_value.get()
                            fallback=|| view! { <span class="text-white/40">"—"</span> }
                        >
                            <AnimatedNumber value=Signal::derive(move || value.get().unwrap_or(0.0)) />
                        </Show>
                    </div>
                    <div class="mt-2 text-white/60">{unit}</div>

                    <div class="mt-6 text-xs text-white/40 font-mono space-y-1">
                        <div>"id: " {meta_id}</div>
                        <div>"as_of: " {as_of}</div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
