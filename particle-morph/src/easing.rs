use serde::Deserialize;

pub fn linear(t: f32) -> f32 {
    t
}

pub fn ease_in(t: f32) -> f32 {
    t * t
}

pub fn ease_out(t: f32) -> f32 {
    t * (2.0 - t)
}

/// Quadratic ease-in-out. Equivalent to `1 - (-2t + 2)² / 2` on the upper half.
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// Curve applied to raw morph progress before interpolating positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => linear(t),
            Self::EaseIn => ease_in(t),
            Self::EaseOut => ease_out(t),
            Self::EaseInOut => ease_in_out(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_boundaries(f: impl Fn(f32) -> f32) {
        assert!(f(0.0).abs() < 1e-6, "f(0) = {}, expected 0", f(0.0));
        assert!((f(1.0) - 1.0).abs() < 1e-6, "f(1) = {}, expected 1", f(1.0));
    }

    fn assert_monotonic(f: impl Fn(f32) -> f32) {
        let mut prev = f(0.0);

        for i in 1..=100 {
            let t = i as f32 / 100.0;
            let val = f(t);
            assert!(val >= prev - 1e-6, "non-monotonic at t={t}: {prev} > {val}");
            prev = val;
        }
    }

    #[test]
    fn linear_is_identity() {
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!((linear(t) - t).abs() < 1e-6);
        }
    }

    #[test]
    fn builtin_boundaries() {
        assert_boundaries(ease_in);
        assert_boundaries(ease_out);
        assert_boundaries(ease_in_out);
    }

    #[test]
    fn builtin_monotonic() {
        assert_monotonic(ease_in);
        assert_monotonic(ease_out);
        assert_monotonic(ease_in_out);
    }

    #[test]
    fn ease_in_out_midpoint() {
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn ease_in_out_matches_closed_form() {
        for i in 0..=100 {
            let t = i as f32 / 100.0;
            let expected = if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
            };
            assert!((ease_in_out(t) - expected).abs() < 1e-5, "at t={t}");
        }
    }

    #[test]
    fn enum_clamps_out_of_range_progress() {
        assert_eq!(Easing::EaseInOut.apply(1.5), 1.0);
        assert_eq!(Easing::Linear.apply(-0.2), 0.0);
    }
}
