//! Navigation Component
//!
//! Header navigation bar with brand and category links.

use leptos::*;
use leptos_router::*;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="border-b border-white/10 bg-white/5">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🌍"</span>
                        <span class="text-xl font-bold text-white">"Global Statistics"</span>
                    </A>

                    // Category links
                    <div class="flex items-center space-x-1">
                        <NavLink href="/category/Economia" label="Economia" />
                        <NavLink href="/category/Brasil" label="Brasil" />
                        <NavLink href="/category/Energia" label="Energia" />
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-white/70 hover:text-white hover:bg-white/10 transition-colors"
            active_class="bg-white/10 text-white"
        >
            {label}
        </A>
    }
}
