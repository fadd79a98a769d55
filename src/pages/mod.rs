//! Pages
//!
//! Top-level page components for each route.

pub mod category;
pub mod home;
pub mod indicator;

pub use category::Category;
pub use home::Home;
pub use indicator::IndicatorDetail;
