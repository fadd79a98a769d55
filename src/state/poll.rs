//! Polling Loop
//!
//! Fixed-cadence refresh of the indicator snapshot. Independent of the
//! animation clock: each refresh just writes new target values into the
//! global state and the animated numbers ease over on their own.

use leptos::*;

use crate::api;

use super::global::GlobalState;

/// Refresh cadence in milliseconds, matching the upstream deployment.
pub const POLL_INTERVAL_MS: u32 = 3_000;

/// Start the background poll (call once from the app root).
///
/// The interval is forgotten on purpose: it lives as long as the app.
/// Per-page fetch loops (indicator detail) manage their own intervals
/// and cancel them on cleanup instead.
pub fn init_polling(state: GlobalState) {
    refresh(state.clone());

    gloo_timers::callback::Interval::new(POLL_INTERVAL_MS, move || {
        refresh(state.clone());
    })
    .forget();
}

/// Fetch one snapshot and apply it to the global state.
fn refresh(state: GlobalState) {
    spawn_local(async move {
        match api::fetch_indicators().await {
            Ok(items) => {
                state.apply_snapshot(items);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to fetch indicators: {}", e).into());
                state.apply_fetch_error(e);
            }
        }
    });
}
