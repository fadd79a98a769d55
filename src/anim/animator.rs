//! Frame-driven number animation.
//!
//! `NumberAnimation` composes a [`Transition`] with a [`FrameScheduler`]
//! and enforces the lifecycle discipline: at most one pending frame
//! callback per instance, cancel before rescheduling, cancel on
//! teardown. Each frame's display value is pushed through a
//! caller-supplied sink (in the UI, a Leptos write signal).

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::frame::FrameScheduler;
use super::transition::Transition;

/// A single animated numeric value.
pub struct NumberAnimation<S: FrameScheduler + 'static> {
    inner: Rc<RefCell<Inner<S>>>,
}

struct Inner<S: FrameScheduler> {
    scheduler: S,
    transition: Transition,
    pending: Option<S::Handle>,
    sink: Rc<dyn Fn(f64)>,
}

impl<S: FrameScheduler + 'static> NumberAnimation<S> {
    /// Seed the animation; the initial value is shown without animating.
    pub fn new(
        scheduler: S,
        initial: f64,
        duration_ms: f64,
        sink: impl Fn(f64) + 'static,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                scheduler,
                transition: Transition::new(initial, duration_ms),
                pending: None,
                sink: Rc::new(sink),
            })),
        }
    }

    /// The value currently on screen.
    pub fn display(&self) -> f64 {
        self.inner.borrow().transition.display()
    }

    /// Point the animation at a new target value.
    ///
    /// An unchanged target schedules nothing. Otherwise the in-flight
    /// transition (if any) is superseded: its pending callback is
    /// cancelled before the replacement is scheduled, and the new curve
    /// starts from the value currently on screen.
    pub fn set_target(&self, target: f64) {
        let mut inner = self.inner.borrow_mut();
        let now = inner.scheduler.now();
        let needs_frame = inner.transition.retarget(target, now);

        if let Some(handle) = inner.pending.take() {
            inner.scheduler.cancel(handle);
        }
        if needs_frame {
            let weak = Rc::downgrade(&self.inner);
            let handle = inner
                .scheduler
                .schedule(Box::new(move |t| on_frame(weak, t)));
            inner.pending = Some(handle);
        }
    }

    /// Cancel any pending frame callback. Called on teardown; safe to
    /// call at any time.
    pub fn cancel(&self) {
        let mut inner = self.inner.borrow_mut();
        if let Some(handle) = inner.pending.take() {
            inner.scheduler.cancel(handle);
        }
    }
}

impl<S: FrameScheduler + 'static> Drop for NumberAnimation<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn on_frame<S: FrameScheduler + 'static>(weak: Weak<RefCell<Inner<S>>>, now: f64) {
    // A callback that outlives its animation finds nothing to mutate.
    let Some(inner_rc) = weak.upgrade() else {
        return;
    };

    let (sink, display) = {
        let mut inner = inner_rc.borrow_mut();
        inner.pending = None;

        let more = inner.transition.tick(now);
        if more {
            let weak = Rc::downgrade(&inner_rc);
            let handle = inner
                .scheduler
                .schedule(Box::new(move |t| on_frame(weak, t)));
            inner.pending = Some(handle);
        }

        (Rc::clone(&inner.sink), inner.transition.display())
    };

    // Sink runs outside the borrow so reactive consumers can read the
    // animation state again.
    sink(display);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::frame::manual::ManualFrames;
    use std::cell::Cell;

    fn recording_sink() -> (Rc<RefCell<Vec<f64>>>, impl Fn(f64) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink_seen = Rc::clone(&seen);
        (seen, move |v| sink_seen.borrow_mut().push(v))
    }

    #[test]
    fn test_initial_value_schedules_nothing() {
        let frames = ManualFrames::new();
        let anim = NumberAnimation::new(frames.clone(), 42.0, 350.0, |_| {});
        assert_eq!(anim.display(), 42.0);
        assert_eq!(frames.pending(), 0);
    }

    #[test]
    fn test_equal_target_never_schedules() {
        let frames = ManualFrames::new();
        let (seen, sink) = recording_sink();
        let anim = NumberAnimation::new(frames.clone(), 100.0, 350.0, sink);

        anim.set_target(100.0);
        assert_eq!(frames.pending(), 0);
        assert_eq!(anim.display(), 100.0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_converges_through_frames() {
        let frames = ManualFrames::new();
        let (seen, sink) = recording_sink();
        let anim = NumberAnimation::new(frames.clone(), 0.0, 350.0, sink);

        anim.set_target(100.0);
        assert_eq!(frames.pending(), 1);

        for _ in 0..40 {
            frames.step(16.0);
            if frames.pending() == 0 {
                break;
            }
        }

        assert_eq!(anim.display(), 100.0);
        assert_eq!(*seen.borrow().last().unwrap(), 100.0);
        assert_eq!(frames.pending(), 0);
    }

    #[test]
    fn test_at_most_one_pending_callback() {
        let frames = ManualFrames::new();
        let anim = NumberAnimation::new(frames.clone(), 0.0, 350.0, |_| {});

        // Retarget repeatedly, with and without frames in between.
        anim.set_target(100.0);
        anim.set_target(200.0);
        frames.step(16.0);
        anim.set_target(50.0);
        frames.step(16.0);
        frames.step(16.0);
        anim.set_target(300.0);

        assert_eq!(frames.max_pending_seen(), 1);
    }

    #[test]
    fn test_retarget_cancels_previous_callback() {
        let frames = ManualFrames::new();
        let anim = NumberAnimation::new(frames.clone(), 0.0, 350.0, |_| {});

        anim.set_target(100.0);
        anim.set_target(200.0);
        assert_eq!(frames.pending(), 1);

        // Run to completion; only the second target matters.
        for _ in 0..40 {
            frames.step(16.0);
            if frames.pending() == 0 {
                break;
            }
        }
        assert_eq!(anim.display(), 200.0);
    }

    #[test]
    fn test_interruption_resumes_from_screen_value() {
        let frames = ManualFrames::new();
        let anim = NumberAnimation::new(frames.clone(), 0.0, 350.0, |_| {});

        anim.set_target(100.0);
        // Half the duration elapses.
        for _ in 0..11 {
            frames.step(16.0);
        }
        let on_screen = anim.display();
        assert!(on_screen > 0.0 && on_screen < 100.0);

        anim.set_target(50.0);
        for _ in 0..40 {
            frames.step(16.0);
            if frames.pending() == 0 {
                break;
            }
        }
        assert_eq!(anim.display(), 50.0);
    }

    #[test]
    fn test_equal_target_mid_flight_cancels_pending() {
        let frames = ManualFrames::new();
        let anim = NumberAnimation::new(frames.clone(), 0.0, 350.0, |_| {});

        anim.set_target(100.0);
        frames.step(100.0);
        let on_screen = anim.display();

        // Fresh data matches the screen: the in-flight transition is
        // abandoned and its callback cancelled.
        anim.set_target(on_screen);
        assert_eq!(frames.pending(), 0);
        assert_eq!(anim.display(), on_screen);
    }

    #[test]
    fn test_explicit_cancel_clears_pending() {
        let frames = ManualFrames::new();
        let anim = NumberAnimation::new(frames.clone(), 0.0, 350.0, |_| {});

        anim.set_target(100.0);
        assert_eq!(frames.pending(), 1);
        anim.cancel();
        assert_eq!(frames.pending(), 0);
    }

    #[test]
    fn test_drop_cancels_pending() {
        let frames = ManualFrames::new();
        let anim = NumberAnimation::new(frames.clone(), 0.0, 350.0, |_| {});

        anim.set_target(100.0);
        assert_eq!(frames.pending(), 1);
        drop(anim);
        assert_eq!(frames.pending(), 0);
    }

    #[test]
    fn test_stale_callback_after_teardown_is_inert() {
        let frames = ManualFrames::new();
        let calls = Rc::new(Cell::new(0u32));
        let calls_sink = Rc::clone(&calls);
        let anim =
            NumberAnimation::new(frames.clone(), 0.0, 350.0, move |_| {
                calls_sink.set(calls_sink.get() + 1);
            });

        anim.set_target(100.0);

        // Host still holds the callback when the owner goes away.
        let stale = frames.drain();
        drop(anim);

        frames.advance(16.0);
        for callback in stale {
            callback(16.0);
        }
        assert_eq!(calls.get(), 0);
        assert_eq!(frames.pending(), 0);
    }

    #[test]
    fn test_stalled_host_jumps_to_target_on_resume() {
        let frames = ManualFrames::new();
        let anim = NumberAnimation::new(frames.clone(), 0.0, 350.0, |_| {});

        anim.set_target(100.0);
        // No frames for a long time (backgrounded tab), then one frame.
        frames.step(60_000.0);
        assert_eq!(anim.display(), 100.0);
        assert_eq!(frames.pending(), 0);
    }
}
