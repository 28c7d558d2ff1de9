/// `src[i] = src[i] * (1 - t) + dst[i] * t` for every component.
///
/// Slices must have the same length.
pub fn lerp_in_place(src: &mut [f32], dst: &[f32], t: f32) {
    debug_assert_eq!(src.len(), dst.len(), "buffers must have the same length");

    let keep = 1.0 - t;

    for (s, d) in src.iter_mut().zip(dst) {
        *s = *s * keep + *d * t;
    }
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> Vec<f32> {
        vec![1.0, -2.0, 3.5, 0.0, 10.0, -0.25]
    }

    fn target() -> Vec<f32> {
        vec![-4.0, 8.0, 0.5, 2.0, -1.0, 7.75]
    }

    #[test]
    fn at_zero_matches_source() {
        let mut buf = source();
        lerp_in_place(&mut buf, &target(), 0.0);
        assert_eq!(buf, source());
    }

    #[test]
    fn at_one_matches_target() {
        let mut buf = source();
        lerp_in_place(&mut buf, &target(), 1.0);
        assert_eq!(buf, target());
    }

    #[test]
    fn pointwise_linear() {
        let src = source();
        let dst = target();

        for i in 0..=10 {
            let t = i as f32 / 10.0;
            let mut buf = src.clone();
            lerp_in_place(&mut buf, &dst, t);

            for (k, value) in buf.iter().enumerate() {
                let expected = src[k] * (1.0 - t) + dst[k] * t;
                assert_eq!(*value, expected, "component {k} at t={t}");
            }
        }
    }

    #[test]
    fn scalar_lerp_midpoint() {
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
    }
}
