//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod animated_number;
pub mod error_banner;
pub mod indicator_card;
pub mod loading;
pub mod nav;

pub use animated_number::AnimatedNumber;
pub use error_banner::ErrorBanner;
pub use indicator_card::{IndicatorCard, IndicatorRow};
pub use loading::{CardSkeleton, ListSkeleton, Loading};
pub use nav::Nav;
