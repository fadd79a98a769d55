//! Frame-callback scheduling seam.
//!
//! The easing logic only needs "call me on the next frame" and "cancel
//! that", so the host primitive is kept behind a narrow trait. In the
//! browser this is `requestAnimationFrame`; tests drive a manual queue
//! with a fake clock.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Host capability for scheduling a single frame callback.
///
/// Callbacks receive the host's frame-clock timestamp in milliseconds,
/// from the same monotonic clock as [`FrameScheduler::now`].
pub trait FrameScheduler {
    type Handle;

    /// Current frame-clock time in milliseconds.
    fn now(&self) -> f64;

    /// Schedule `callback` for the next frame.
    fn schedule(&self, callback: Box<dyn FnOnce(f64)>) -> Self::Handle;

    /// Cancel a previously scheduled callback. Cancelling a handle that
    /// already fired is a no-op.
    fn cancel(&self, handle: Self::Handle);
}

/// `requestAnimationFrame`-backed scheduler.
///
/// Holds the live closure for the one outstanding callback so it is
/// freed on cancellation instead of leaking; each animator instance
/// owns its own `BrowserFrames`, matching the at-most-one-pending
/// invariant of the animator.
#[derive(Default)]
pub struct BrowserFrames {
    slot: std::cell::RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl BrowserFrames {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameScheduler for BrowserFrames {
    type Handle = i32;

    fn now(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0)
    }

    fn schedule(&self, callback: Box<dyn FnOnce(f64)>) -> i32 {
        let mut callback = Some(callback);
        let closure = Closure::wrap(Box::new(move |t: f64| {
            if let Some(cb) = callback.take() {
                cb(t);
            }
        }) as Box<dyn FnMut(f64)>);

        let function: &js_sys::Function = closure.as_ref().unchecked_ref();
        let handle = web_sys::window().map(|w| w.request_animation_frame(function));

        // Replacing the slot drops the previous closure; the animator
        // cancels before rescheduling, so it can no longer fire.
        *self.slot.borrow_mut() = Some(closure);

        match handle {
            Some(Ok(id)) => id,
            _ => {
                web_sys::console::error_1(&"requestAnimationFrame unavailable".into());
                -1
            }
        }
    }

    fn cancel(&self, handle: i32) {
        if handle < 0 {
            return;
        }
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(handle);
        }
        self.slot.borrow_mut().take();
    }
}
