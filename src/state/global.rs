//! Global Application State
//!
//! Reactive state management using Leptos signals. Holds the latest
//! best-effort snapshot of indicators from the API; fetch failures land
//! in the error signal and never disturb the values already on screen.

use leptos::*;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Latest indicator snapshot from the API
    pub indicators: RwSignal<Vec<Indicator>>,
    /// Whether the first load is still in flight
    pub loading: RwSignal<bool>,
    /// Error channel for fetch failures (separate from the data path)
    pub error: RwSignal<Option<String>>,
    /// Timestamp (ms) of the last successful refresh
    pub last_updated: RwSignal<Option<i64>>,
}

/// Indicator definition and current value from the API
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Indicator {
    pub id: String,
    pub title: String,
    /// `None` means the source has no data yet; rendered as a dash.
    #[serde(default)]
    pub value: Option<f64>,
    pub unit: String,
    pub category: String,
    pub source: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub as_of: Option<String>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        indicators: create_rw_signal(Vec::new()),
        loading: create_rw_signal(true),
        error: create_rw_signal(None),
        last_updated: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Look up an indicator by id in the current snapshot
    pub fn indicator(&self, id: &str) -> Option<Indicator> {
        self.indicators
            .get()
            .into_iter()
            .find(|it| it.id == id)
    }

    /// Record a successful refresh
    pub fn apply_snapshot(&self, items: Vec<Indicator>) {
        self.indicators.set(items);
        self.error.set(None);
        self.last_updated
            .set(Some(chrono::Utc::now().timestamp_millis()));
        self.loading.set(false);
    }

    /// Record a failed refresh; stale values stay on screen
    pub fn apply_fetch_error(&self, message: String) {
        self.error.set(Some(message));
        self.loading.set(false);
    }
}

/// Distinct categories in display order, first occurrence wins
pub fn categories(items: &[Indicator]) -> Vec<String> {
    let mut seen = Vec::new();
    for it in items {
        if !seen.contains(&it.category) {
            seen.push(it.category.clone());
        }
    }
    seen
}

/// Filter a snapshot down to one category plus a free-text query over
/// title, id, and source, sorted by title
pub fn filter_category<'a>(
    items: &'a [Indicator],
    category: &str,
    query: &str,
) -> Vec<&'a Indicator> {
    let q = query.trim().to_lowercase();

    let mut matched: Vec<&Indicator> = items
        .iter()
        .filter(|it| it.category == category)
        .filter(|it| {
            if q.is_empty() {
                return true;
            }
            it.title.to_lowercase().contains(&q)
                || it.id.to_lowercase().contains(&q)
                || it.source.to_lowercase().contains(&q)
        })
        .collect();

    matched.sort_by(|a, b| a.title.cmp(&b.title));
    matched
}
