//! Interpolation helpers for frame-driven animations.

/// Clamp a normalized progress value to `[0, 1]`. NaN maps to 0.
#[inline]
pub fn clamp01(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

/// Linear interpolation of scalars.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Cubic ease-out: `1 - (1 - p)^3`. Input is clamped first, so the result
/// is monotonic over the whole real line and pinned to 0 and 1 at the ends.
#[inline]
pub fn ease_out_cubic(p: f64) -> f64 {
    let inv = 1.0 - clamp01(p);
    1.0 - inv * inv * inv
}

/// Normalized progress of an animation that started at `start` and lasts
/// `duration`, in the same time unit.
#[inline]
pub fn progress(start: f64, now: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return 1.0;
    }
    clamp01((now - start) / duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_endpoints_are_exact() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(-3.0), 0.0);
        assert_eq!(ease_out_cubic(7.0), 1.0);
    }

    #[test]
    fn ease_is_front_loaded() {
        // Half the time covers seven eighths of the distance.
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    }

    #[test]
    fn progress_clamps_and_handles_zero_duration() {
        assert_eq!(progress(100.0, 50.0, 2000.0), 0.0);
        assert_eq!(progress(100.0, 1100.0, 2000.0), 0.5);
        assert_eq!(progress(100.0, 9000.0, 2000.0), 1.0);
        assert_eq!(progress(0.0, 0.0, 0.0), 1.0);
    }

    #[test]
    fn lerp_matches_endpoints() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.25), 3.0);
    }
}
