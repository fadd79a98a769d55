//! Easing curves for value transitions.

/// Cubic ease-out: fast start, decelerating toward the end.
///
/// Input is clamped to `[0, 1]`; output is `1 - (1 - p)^3`, which is
/// monotonically increasing with `f(0) = 0` and `f(1) = 1`.
#[inline]
pub fn ease_out_cubic(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
    }

    #[test]
    fn test_clamps_out_of_range_input() {
        assert_eq!(ease_out_cubic(-3.0), 0.0);
        assert_eq!(ease_out_cubic(7.5), 1.0);
    }

    #[test]
    fn test_monotonically_increasing() {
        let mut prev = ease_out_cubic(0.0);
        for i in 1..=100 {
            let next = ease_out_cubic(i as f64 / 100.0);
            assert!(next >= prev, "curve decreased at step {}", i);
            prev = next;
        }
    }

    #[test]
    fn test_decelerates() {
        // The first half of the curve covers more ground than the second.
        let first_half = ease_out_cubic(0.5) - ease_out_cubic(0.0);
        let second_half = ease_out_cubic(1.0) - ease_out_cubic(0.5);
        assert!(first_half > second_half);
    }

    #[test]
    fn test_known_midpoint() {
        // 1 - (1 - 0.5)^3 = 0.875
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    }
}
