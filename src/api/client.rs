//! HTTP API Client
//!
//! Thin wrapper over the indicators REST API. Best-effort: every call
//! returns `Result<_, String>` and the caller routes failures to the
//! error channel; there is no retry or caching on this side.

use gloo_net::http::Request;

use crate::state::global::Indicator;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Get the API base URL, preferring a local-storage override.
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item("globalstats_api_url").ok().flatten());

    normalize_base(&stored.unwrap_or_else(|| DEFAULT_API_BASE.to_string()))
}

/// Trailing slashes would double up when joining paths.
fn normalize_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

#[derive(Debug, serde::Deserialize)]
pub struct IndicatorsResponse {
    pub items: Vec<Indicator>,
}

/// Fetch the current snapshot of all indicators
pub async fn fetch_indicators() -> Result<Vec<Indicator>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/indicators", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let result: IndicatorsResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.items)
}

/// Fetch a single indicator by id
pub async fn fetch_indicator(id: &str) -> Result<Indicator, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/indicators/{}", api_base, id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_trailing_slashes() {
        assert_eq!(normalize_base("http://127.0.0.1:8000/"), "http://127.0.0.1:8000");
        assert_eq!(normalize_base("http://127.0.0.1:8000//"), "http://127.0.0.1:8000");
    }

    #[test]
    fn test_normalize_keeps_clean_base() {
        assert_eq!(normalize_base(DEFAULT_API_BASE), DEFAULT_API_BASE);
    }
}
