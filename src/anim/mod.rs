//! Value-Transition Animator
//!
//! Turns discrete target-value updates into a smooth, interruptible
//! easing transition synchronized to the host's frame cadence.
//!
//! The pieces are layered so the interesting logic stays testable
//! outside a browser:
//!
//! - [`transition`] is a pure state machine driven by caller-supplied
//!   timestamps.
//! - [`frame`] is the narrow scheduling seam (`requestAnimationFrame`
//!   in production, a manual queue in tests).
//! - [`animator`] wires the two together and enforces the
//!   one-pending-callback / cancel-on-teardown discipline.

pub mod animator;
pub mod easing;
pub mod frame;
pub mod transition;

pub use animator::NumberAnimation;
pub use easing::ease_out_cubic;
pub use frame::{BrowserFrames, FrameScheduler};
pub use transition::{Transition, DEFAULT_DURATION_MS};
