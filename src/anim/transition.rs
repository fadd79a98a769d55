//! Pure transition state machine.
//!
//! `Transition` knows nothing about frame scheduling; it is driven by
//! monotonic timestamps (milliseconds, matching the browser's frame
//! clock) supplied by the caller. That keeps every timing edge case
//! testable without a browser.

use super::easing::ease_out_cubic;

/// Default wall-clock length of a transition, in milliseconds.
pub const DEFAULT_DURATION_MS: f64 = 350.0;

/// A bounded-duration interpolation from a source value to a target.
///
/// Invariants:
/// - `display()` is always finite once constructed.
/// - An equal target never starts a transition.
/// - A started transition reaches `target.round()` exactly once its
///   duration has elapsed, even if it was superseded mid-flight (the
///   superseding transition restarts from the value on screen, not
///   from the abandoned target).
#[derive(Debug, Clone)]
pub struct Transition {
    /// The value currently shown; rounded on every tick.
    display: f64,
    /// Display value at the moment the current transition began.
    source: f64,
    /// Most recently requested value to converge to.
    target: f64,
    /// Frame-clock time at which the current transition began.
    started_at: f64,
    duration_ms: f64,
    active: bool,
}

impl Transition {
    /// Seed with an initial value; no animation on first render.
    pub fn new(initial: f64, duration_ms: f64) -> Self {
        let initial = initial.round();
        Self {
            display: initial,
            source: initial,
            target: initial,
            started_at: 0.0,
            duration_ms: duration_ms.max(1.0),
            active: false,
        }
    }

    /// The value to render right now.
    pub fn display(&self) -> f64 {
        self.display
    }

    /// The value this transition is converging to.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Display value at the start of the current transition.
    pub fn source(&self) -> f64 {
        self.source
    }

    /// Whether a transition is in flight.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Point the transition at a new target.
    ///
    /// A target equal to the current display value settles immediately:
    /// the authoritative value already matches what is on screen, so any
    /// in-flight transition is abandoned and no frame is needed. Anything
    /// else restarts the easing curve from the value on screen at this
    /// instant. Returns whether a frame callback should be scheduled.
    pub fn retarget(&mut self, target: f64, now: f64) -> bool {
        if target == self.display {
            self.source = self.display;
            self.target = target;
            self.active = false;
            return false;
        }

        self.source = self.display;
        self.target = target;
        self.started_at = now;
        self.active = true;
        true
    }

    /// Advance to `now`, updating the display value.
    ///
    /// Progress is a function of absolute elapsed time, not tick count,
    /// so any callback frequency or jitter is handled; a tick arriving
    /// long after `duration_ms` (paused host) lands at the target in one
    /// jump. Returns whether another frame is needed.
    pub fn tick(&mut self, now: f64) -> bool {
        if !self.active {
            return false;
        }

        let elapsed = now - self.started_at;
        let p = (elapsed / self.duration_ms).clamp(0.0, 1.0);
        let eased = ease_out_cubic(p);

        self.display = (self.source + (self.target - self.source) * eased).round();

        if p < 1.0 {
            true
        } else {
            self.active = false;
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive_to_completion(t: &mut Transition, start: f64, step: f64) -> Vec<f64> {
        let mut samples = Vec::new();
        let mut now = start;
        // Bounded loop so a broken state machine can't hang the test.
        for _ in 0..1000 {
            let more = t.tick(now);
            samples.push(t.display());
            if !more {
                break;
            }
            now += step;
        }
        samples
    }

    #[test]
    fn test_initial_value_shown_without_animation() {
        let t = Transition::new(42.0, DEFAULT_DURATION_MS);
        assert_eq!(t.display(), 42.0);
        assert!(!t.is_active());
    }

    #[test]
    fn test_equal_target_is_a_noop() {
        let mut t = Transition::new(100.0, DEFAULT_DURATION_MS);
        assert!(!t.retarget(100.0, 0.0));
        assert!(!t.is_active());
        assert_eq!(t.display(), 100.0);
    }

    #[test]
    fn test_converges_exactly_after_duration() {
        let mut t = Transition::new(0.0, 350.0);
        assert!(t.retarget(100.0, 0.0));

        let samples = drive_to_completion(&mut t, 16.0, 16.0);
        assert_eq!(*samples.last().unwrap(), 100.0);
        assert!(!t.is_active());
    }

    #[test]
    fn test_progress_is_monotonic_and_bounded() {
        let mut t = Transition::new(0.0, 350.0);
        t.retarget(100.0, 0.0);

        let samples = drive_to_completion(&mut t, 10.0, 10.0);
        let mut prev = 0.0;
        for (i, v) in samples.iter().enumerate() {
            assert!(*v >= prev, "display regressed at sample {}", i);
            assert!((0.0..=100.0).contains(v), "display out of bounds: {}", v);
            prev = *v;
        }
    }

    #[test]
    fn test_descending_transition_is_bounded() {
        let mut t = Transition::new(100.0, 350.0);
        t.retarget(20.0, 0.0);

        let samples = drive_to_completion(&mut t, 10.0, 10.0);
        let mut prev = 100.0;
        for v in &samples {
            assert!(*v <= prev);
            assert!((20.0..=100.0).contains(v));
            prev = *v;
        }
        assert_eq!(*samples.last().unwrap(), 20.0);
    }

    #[test]
    fn test_interruption_restarts_from_displayed_value() {
        let mut t = Transition::new(0.0, 350.0);
        t.retarget(100.0, 0.0);

        // Halfway through: eased = 1 - 0.5^3 = 0.875.
        t.tick(175.0);
        let on_screen = t.display();
        assert_eq!(on_screen, 88.0);

        // Redirect mid-flight; the new curve starts from the value on
        // screen, not from 0 or the abandoned 100.
        assert!(t.retarget(50.0, 175.0));
        assert_eq!(t.source(), on_screen);
        assert_eq!(t.target(), 50.0);

        let mut now = 175.0;
        loop {
            now += 16.0;
            if !t.tick(now) {
                break;
            }
        }
        assert_eq!(t.display(), 50.0);
    }

    #[test]
    fn test_late_tick_jumps_to_target() {
        // Host scheduler paused for far longer than the duration:
        // progress clamps to 1 and the display lands on the target.
        let mut t = Transition::new(0.0, 350.0);
        t.retarget(100.0, 0.0);

        let more = t.tick(60_000.0);
        assert!(!more);
        assert_eq!(t.display(), 100.0);
    }

    #[test]
    fn test_equal_target_mid_flight_settles() {
        let mut t = Transition::new(0.0, 350.0);
        t.retarget(100.0, 0.0);
        t.tick(175.0);
        let on_screen = t.display();

        // Fresh data says the value is exactly what's on screen.
        assert!(!t.retarget(on_screen, 175.0));
        assert!(!t.is_active());
        assert_eq!(t.display(), on_screen);
    }

    #[test]
    fn test_fractional_targets_render_rounded() {
        let mut t = Transition::new(0.0, 350.0);
        t.retarget(2.6, 0.0);
        t.tick(350.0);
        assert_eq!(t.display(), 3.0);
    }

    #[test]
    fn test_scenario_rapid_redirect() {
        // durationMs=350, targets: 0 (init), 100 at t=0, 50 at t=100.
        let mut t = Transition::new(0.0, 350.0);
        assert_eq!(t.display(), 0.0);

        t.retarget(100.0, 0.0);
        let mut now: f64 = 0.0;
        while now < 100.0 {
            now += 16.0;
            t.tick(now.min(100.0));
        }

        t.retarget(50.0, 100.0);
        // 350ms after the second change the value has settled at 50.
        t.tick(450.0);
        assert_eq!(t.display(), 50.0);
        assert!(!t.is_active());
    }

    #[test]
    fn test_display_stays_finite() {
        let mut t = Transition::new(0.0, 350.0);
        t.retarget(8_090_123_221.0, 0.0);
        let mut now = 0.0;
        for _ in 0..30 {
            now += 16.0;
            t.tick(now);
            assert!(t.display().is_finite());
        }
    }
}
