//! Loading Component
//!
//! Loading spinners and skeleton states.

use leptos::*;

/// Full-page loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Skeleton loader for the featured card grid
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="rounded-3xl border border-white/10 bg-white/5 p-7 animate-pulse">
            <div class="h-4 bg-white/10 rounded w-1/3 mb-6" />
            <div class="h-10 bg-white/10 rounded w-1/2 mb-3" />
            <div class="h-4 bg-white/10 rounded w-2/3" />
        </div>
    }
}

/// Skeleton loader for list items
#[component]
pub fn ListSkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="space-y-3 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-white/5 rounded h-12" />
            }).collect_view()}
        </div>
    }
}
