//! HTTP API Client
//!
//! Functions for communicating with the indicators REST API.

pub mod client;

pub use client::{fetch_indicator, fetch_indicators, get_api_base};
