//! State Management
//!
//! Global application state and the polling loop that refreshes it.

pub mod global;
pub mod poll;

pub use global::{provide_global_state, GlobalState, Indicator};
pub use poll::init_polling;
