//! Per-frame noise displacement, applied in place.
//!
//! `blob` is cumulative: it nudges whatever positions the previous frame left.
//! `ripple` is absolute: it rebuilds each point from its direction every frame.

use glam::Vec3;

use crate::noise_field::NoiseField;
use crate::point_set::PointSet;
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlobParams {
    pub frequency: f32,
    pub amplitude: f32,
    pub scale: f32,
    /// Radius the falloff is measured against.
    pub nominal_radius: f32,
}

impl BlobParams {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            frequency: settings.blob_frequency,
            amplitude: settings.blob_amplitude,
            scale: settings.blob_scale,
            nominal_radius: settings.sphere_radius,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleParams {
    pub radius: f32,
    pub scale: f32,
    /// Per-axis multipliers on the ripple clock.
    pub rates: Vec3,
}

impl RippleParams {
    pub const DEFAULT_RATES: Vec3 = Vec3::new(0.03, 0.04, 0.05);

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            radius: settings.glow_size,
            scale: settings.glow_scale,
            rates: Self::DEFAULT_RATES,
        }
    }
}

/// Pushes every point by `noise(p * frequency + (0, 0, time)) * amp` on all three axes.
///
/// `amp` shrinks linearly as the point's distance from the origin strays from
/// the nominal radius. A zero amplitude leaves positions untouched.
pub fn blob<N: NoiseField + ?Sized>(set: &mut PointSet, time: f32, params: &BlobParams, noise: &N) {
    let base = params.amplitude * params.scale;

    if base == 0.0 {
        return;
    }

    let radius = params.nominal_radius;

    for chunk in set.positions_mut().chunks_exact_mut(3) {
        let p = Vec3::from_slice(chunk);
        let falloff = 1.0 - (p.length() - radius).abs() / radius;
        let amplitude = base * falloff;

        let sample_at = p * params.frequency + Vec3::new(0.0, 0.0, time);
        let offset = noise.sample(sample_at) * amplitude;

        (p + Vec3::splat(offset)).write_to_slice(chunk);
    }
}

/// Rebuilds every point as `dir * (radius + noise(dir + time * rates) * scale)`.
///
/// Points at the origin have no direction and are skipped.
pub fn ripple<N: NoiseField + ?Sized>(set: &mut PointSet, time: f32, params: &RippleParams, noise: &N) {
    let drift = params.rates * time;

    for chunk in set.positions_mut().chunks_exact_mut(3) {
        let p = Vec3::from_slice(chunk);
        let length = p.length();

        if length == 0.0 || !length.is_finite() {
            continue;
        }

        let dir = p / length;
        let reach = params.radius + noise.sample(dir + drift) * params.scale;

        (dir * reach).write_to_slice(chunk);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::noise_field::{ConstantField, SimplexField};

    fn set(points: &[Vec3]) -> PointSet {
        PointSet::from_points(points, Rgb::new(1.0, 0.0, 0.0), Rgb::new(0.0, 0.0, 1.0))
    }

    fn blob_params(amplitude: f32) -> BlobParams {
        BlobParams {
            frequency: 0.3,
            amplitude,
            scale: 0.9,
            nominal_radius: 1.2,
        }
    }

    fn ripple_params() -> RippleParams {
        RippleParams {
            radius: 0.9,
            scale: 0.3,
            rates: RippleParams::DEFAULT_RATES,
        }
    }

    #[test]
    fn zero_amplitude_blob_is_noop() {
        let points = [Vec3::new(1.2, 0.0, 0.0), Vec3::new(-0.3, 0.7, 0.1), Vec3::ZERO];
        let mut s = set(&points);
        let before: Vec<u32> = s.positions().iter().map(|v| v.to_bits()).collect();

        blob(&mut s, 12.5, &blob_params(0.0), &SimplexField::new(3));

        let after: Vec<u32> = s.positions().iter().map(|v| v.to_bits()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn blob_offset_is_uniform_across_axes() {
        let mut s = set(&[Vec3::new(1.2, 0.0, 0.0)]);
        blob(&mut s, 0.0, &blob_params(1.0), &ConstantField(0.5));

        // On the nominal radius the falloff is 1, so every axis moves by 0.5 * 0.9.
        let p = s.point(0);
        assert!((p.x - (1.2 + 0.45)).abs() < 1e-6);
        assert!((p.y - 0.45).abs() < 1e-6);
        assert!((p.z - 0.45).abs() < 1e-6);
    }

    #[test]
    fn blob_falloff_shrinks_off_radius() {
        let mut on = set(&[Vec3::new(1.2, 0.0, 0.0)]);
        let mut off = set(&[Vec3::new(0.6, 0.0, 0.0)]);
        let noise = ConstantField(1.0);

        blob(&mut on, 0.0, &blob_params(0.1), &noise);
        blob(&mut off, 0.0, &blob_params(0.1), &noise);

        let on_shift = on.point(0).y;
        let off_shift = off.point(0).y;
        assert!((off_shift - on_shift * 0.5).abs() < 1e-6);
    }

    #[test]
    fn blob_accumulates_across_frames() {
        let mut s = set(&[Vec3::new(1.2, 0.0, 0.0)]);
        let noise = ConstantField(1.0);

        blob(&mut s, 0.0, &blob_params(0.01), &noise);
        let first = s.point(0).y;
        blob(&mut s, 0.0, &blob_params(0.01), &noise);
        let second = s.point(0).y;

        assert!(second > first);
    }

    #[test]
    fn ripple_with_zero_noise_lands_on_radius() {
        let mut s = set(&[
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::new(3.0, 4.0, 0.0),
            Vec3::new(-0.1, 0.2, 0.05),
        ]);

        ripple(&mut s, 40.0, &ripple_params(), &ConstantField(0.0));

        assert_eq!(s.point(0), Vec3::new(0.0, 0.9, 0.0));
        for p in s.iter_points() {
            assert!((p.length() - 0.9).abs() < 1e-6, "{p} not on radius");
        }
    }

    #[test]
    fn ripple_is_absolute_each_frame() {
        let mut s = set(&[Vec3::new(0.0, 0.0, 5.0)]);
        let noise = ConstantField(0.5);

        ripple(&mut s, 1.0, &ripple_params(), &noise);
        let once = s.point(0);
        ripple(&mut s, 1.0, &ripple_params(), &noise);

        assert!((s.point(0) - once).length() < 1e-6);
        assert!((once.z - (0.9 + 0.15)).abs() < 1e-6);
    }

    #[test]
    fn ripple_skips_origin() {
        let mut s = set(&[Vec3::ZERO, Vec3::X]);
        ripple(&mut s, 0.0, &ripple_params(), &ConstantField(1.0));

        assert_eq!(s.point(0), Vec3::ZERO);
        assert!(s.positions().iter().all(|v| v.is_finite()));
    }
}
