//! Surface point lattices for each solid.
//!
//! Every lattice is walked in a fixed order, so output is reproducible bit for
//! bit. Raw lattices differ in size per shape; [`sample`] resamples them to one
//! canonical count so any two shapes can be interpolated index by index.

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use tracing::{debug, warn};

use crate::color::Rgb;
use crate::point_set::PointSet;
use crate::shape::ShapeDescriptor;

/// Samples `shape`, resamples to `point_count` points and applies the gradient `a -> b`.
pub fn sample(shape: &ShapeDescriptor, point_count: usize, a: Rgb, b: Rgb) -> PointSet {
    let raw = raw_points(shape);
    let points = canonicalize(&raw, point_count);

    debug!(
        shape = shape.kind().name(),
        raw = raw.len(),
        canonical = points.len(),
        "sampled shape"
    );

    PointSet::from_points(&points, a, b)
}

/// Samples `shape` at its native lattice size, without canonicalization.
pub fn sample_native(shape: &ShapeDescriptor, a: Rgb, b: Rgb) -> PointSet {
    PointSet::from_points(&raw_points(shape), a, b)
}

/// The shape's native lattice, before canonicalization.
pub fn raw_points(shape: &ShapeDescriptor) -> Vec<Vec3> {
    match *shape {
        ShapeDescriptor::Sphere {
            radius,
            width_segments,
            height_segments,
        } => sphere(positive(radius, "sphere radius"), width_segments, height_segments),
        ShapeDescriptor::Cube {
            edge,
            width_segments,
            height_segments,
            depth_segments,
        } => cube(
            positive(edge, "cube edge"),
            width_segments,
            height_segments,
            depth_segments,
        ),
        ShapeDescriptor::Cone {
            radius,
            height,
            radial_segments,
            height_segments,
        } => cone(
            positive(radius, "cone radius"),
            positive(height, "cone height"),
            radial_segments,
            height_segments,
        ),
        ShapeDescriptor::Cylinder {
            radius,
            height,
            radial_segments,
            height_segments,
        } => cylinder(
            positive(radius, "cylinder radius"),
            positive(height, "cylinder height"),
            radial_segments,
            height_segments,
        ),
        ShapeDescriptor::Torus {
            ring_radius,
            tube_radius,
            radial_segments,
            tubular_segments,
        } => torus(
            positive(ring_radius, "torus ring radius"),
            positive(tube_radius, "torus tube radius"),
            radial_segments,
            tubular_segments,
        ),
        ShapeDescriptor::Pyramid {
            base,
            height,
            subdivisions,
        } => pyramid(
            positive(base, "pyramid base"),
            positive(height, "pyramid height"),
            subdivisions,
        ),
    }
}

/// Resamples by ordinal stride: output `i` is raw point `floor(i * raw / n)`.
///
/// Shrinking drops points evenly, growing repeats them evenly. Order is kept.
pub fn canonicalize(raw: &[Vec3], n: usize) -> Vec<Vec3> {
    if raw.len() == n || raw.is_empty() {
        return raw.to_vec();
    }

    let len = raw.len() as u64;

    (0..n as u64)
        .map(|i| raw[(i * len / n as u64) as usize])
        .collect()
}

fn positive(value: f32, what: &str) -> f32 {
    if value > 0.0 && value.is_finite() {
        value
    } else {
        warn!("{what} must be > 0.0, clamping to 0.001");
        0.001
    }
}

/// Latitude-major UV lattice, seam column duplicated: `(h + 1) × (w + 1)` points.
fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Vec<Vec3> {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut points = Vec::with_capacity(((ws + 1) * (hs + 1)) as usize);

    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        let phi = v * PI;

        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let theta = u * TAU;

            points.push(Vec3::new(
                -radius * theta.cos() * phi.sin(),
                radius * phi.cos(),
                radius * theta.sin() * phi.sin(),
            ));
        }
    }

    points
}

/// Six face grids: ±X (depth × height), ±Y (width × depth), ±Z (width × height).
fn cube(edge: f32, width_segments: u32, height_segments: u32, depth_segments: u32) -> Vec<Vec3> {
    let half = edge / 2.0;
    let ws = width_segments.max(1);
    let hs = height_segments.max(1);
    let ds = depth_segments.max(1);

    let faces = [
        (Vec3::X, Vec3::Z, Vec3::Y, ds, hs),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y, ds, hs),
        (Vec3::Y, Vec3::X, Vec3::Z, ws, ds),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z, ws, ds),
        (Vec3::Z, Vec3::X, Vec3::Y, ws, hs),
        (Vec3::NEG_Z, Vec3::X, Vec3::Y, ws, hs),
    ];

    let mut points = Vec::new();

    for (normal, u_axis, v_axis, us, vs) in faces {
        for iv in 0..=vs {
            let v = -half + edge * iv as f32 / vs as f32;

            for iu in 0..=us {
                let u = -half + edge * iu as f32 / us as f32;
                points.push(normal * half + u_axis * u + v_axis * v);
            }
        }
    }

    points
}

/// One ring at height `y` with `radial + 1` points (seam duplicated).
fn ring(points: &mut Vec<Vec3>, radius: f32, y: f32, radial: u32) {
    for j in 0..=radial {
        let theta = j as f32 / radial as f32 * TAU;
        points.push(Vec3::new(radius * theta.sin(), y, radius * theta.cos()));
    }
}

/// Concentric rings of growing radius filling a disk at height `y`.
fn cap_disk(points: &mut Vec<Vec3>, radius: f32, y: f32, radial: u32) {
    let rings = (radial / 2).max(1);

    for i in 0..=rings {
        ring(points, i as f32 / rings as f32 * radius, y, radial);
    }
}

fn cone(radius: f32, height: f32, radial_segments: u32, height_segments: u32) -> Vec<Vec3> {
    let radial = radial_segments.max(3);
    let hs = height_segments.max(1);
    let mut points = Vec::new();

    for i in 0..=hs {
        let f = i as f32 / hs as f32;
        ring(&mut points, radius * (1.0 - f), f * height - height / 2.0, radial);
    }

    cap_disk(&mut points, radius, -height / 2.0, radial);
    points
}

fn cylinder(radius: f32, height: f32, radial_segments: u32, height_segments: u32) -> Vec<Vec3> {
    let radial = radial_segments.max(3);
    let hs = height_segments.max(1);
    let mut points = Vec::new();

    for i in 0..=hs {
        let y = i as f32 / hs as f32 * height - height / 2.0;
        ring(&mut points, radius, y, radial);
    }

    cap_disk(&mut points, radius, -height / 2.0, radial);
    cap_disk(&mut points, radius, height / 2.0, radial);
    points
}

/// `(radial + 1) × (tubular + 1)` points; the ring lies in the XY plane.
fn torus(ring_radius: f32, tube_radius: f32, radial_segments: u32, tubular_segments: u32) -> Vec<Vec3> {
    let rs = radial_segments.max(3);
    let ts = tubular_segments.max(3);
    let mut points = Vec::with_capacity(((rs + 1) * (ts + 1)) as usize);

    for j in 0..=rs {
        let v = j as f32 / rs as f32 * TAU;
        let reach = ring_radius + tube_radius * v.cos();

        for i in 0..=ts {
            let u = i as f32 / ts as f32 * TAU;
            points.push(Vec3::new(reach * u.cos(), reach * u.sin(), tube_radius * v.sin()));
        }
    }

    points
}

/// Barycentric lattice over each face: `(s + 1)(s + 2) / 2` points per triangle.
fn pyramid(base: f32, height: f32, subdivisions: u32) -> Vec<Vec3> {
    let b = base / 2.0;
    let h = height / 2.0;
    let s = subdivisions.max(1);

    let corners = [
        Vec3::new(-b, -h, -b),
        Vec3::new(b, -h, -b),
        Vec3::new(b, -h, b),
        Vec3::new(-b, -h, b),
        Vec3::new(0.0, h, 0.0),
    ];

    let faces: [[usize; 3]; 6] = [
        [0, 1, 2],
        [0, 2, 3],
        [0, 4, 1],
        [1, 4, 2],
        [2, 4, 3],
        [3, 4, 0],
    ];

    let per_face = ((s + 1) * (s + 2) / 2) as usize;
    let mut points = Vec::with_capacity(per_face * faces.len());

    for [i0, i1, i2] in faces {
        let (v1, v2, v3) = (corners[i0], corners[i1], corners[i2]);

        for j in 0..=s {
            for k in 0..=s - j {
                let jt = j as f32 / s as f32;
                let kt = k as f32 / s as f32;
                let t1 = (s - j - k) as f32 / s as f32;
                points.push(v1 * t1 + v2 * jt + v3 * kt);
            }
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::shape::ShapeKind;

    fn descriptor(kind: ShapeKind) -> ShapeDescriptor {
        ShapeDescriptor::for_kind(kind, &Settings::default())
    }

    fn pink() -> Rgb {
        Rgb::from_u8(0xFF, 0x0D, 0x92)
    }

    fn blue() -> Rgb {
        Rgb::from_u8(0x0D, 0x92, 0xF4)
    }

    #[test]
    fn raw_lattice_sizes() {
        let expected = [
            (ShapeKind::Sphere, 65 * 65),
            (ShapeKind::Cube, 2 * (33 * 33 + 15 * 33 + 15 * 33)),
            (ShapeKind::Cone, 31 * 65 + 33 * 65),
            (ShapeKind::Cylinder, 65 * 65 + 2 * 33 * 65),
            (ShapeKind::Torus, 65 * 65),
            (ShapeKind::Pyramid, 6 * 231),
        ];

        for (kind, count) in expected {
            assert_eq!(raw_points(&descriptor(kind)).len(), count, "{}", kind.name());
        }
    }

    #[test]
    fn every_shape_canonicalizes_to_the_same_count() {
        for kind in ShapeKind::ALL {
            let set = sample(&descriptor(kind), 4225, pink(), blue());

            assert_eq!(set.len(), 4225, "{}", kind.name());
            assert_eq!(set.positions().len(), set.colors().len());
            assert_eq!(set.positions().len() % 3, 0);
        }
    }

    #[test]
    fn sampling_is_deterministic() {
        for kind in ShapeKind::ALL {
            let a = sample(&descriptor(kind), 4225, pink(), blue());
            let b = sample(&descriptor(kind), 4225, pink(), blue());

            let bits = |s: &PointSet| -> Vec<u32> {
                s.positions().iter().chain(s.colors()).map(|v| v.to_bits()).collect()
            };
            assert_eq!(bits(&a), bits(&b), "{}", kind.name());
        }
    }

    #[test]
    fn sphere_points_lie_on_radius() {
        for p in raw_points(&ShapeDescriptor::sphere(1.2)) {
            assert!((p.length() - 1.2).abs() < 1e-5, "{p} off the surface");
        }
    }

    #[test]
    fn cube_points_lie_on_faces() {
        let edge = 1.2 * std::f32::consts::SQRT_2;
        let half = edge / 2.0;

        for p in raw_points(&descriptor(ShapeKind::Cube)) {
            let max = p.abs().max_element();
            assert!((max - half).abs() < 1e-5, "{p} not on a face");
        }
    }

    #[test]
    fn cylinder_caps_stay_inside_radius() {
        for p in raw_points(&descriptor(ShapeKind::Cylinder)) {
            let radial = (p.x * p.x + p.z * p.z).sqrt();
            assert!(radial <= 1.2 + 1e-5);
            assert!(p.y.abs() <= 1.2 * 1.1 / 2.0 + 1e-5);
        }
    }

    #[test]
    fn cone_narrows_toward_apex() {
        let points = raw_points(&descriptor(ShapeKind::Cone));
        let apex = points[30 * 65];
        assert!(apex.x.abs() < 1e-6 && apex.z.abs() < 1e-6);
        assert!((apex.y - 1.2 * 1.7 / 2.0).abs() < 1e-5);
    }

    #[test]
    fn torus_points_sit_on_tube() {
        for p in raw_points(&descriptor(ShapeKind::Torus)) {
            let ring_dist = (p.x * p.x + p.y * p.y).sqrt() - 0.9;
            let tube = (ring_dist * ring_dist + p.z * p.z).sqrt();
            assert!((tube - 0.36).abs() < 1e-4, "{p} off the tube");
        }
    }

    #[test]
    fn pyramid_lattice_includes_corners() {
        let points = raw_points(&descriptor(ShapeKind::Pyramid));
        let apex = Vec3::new(0.0, 1.2, 0.0);
        assert!(points.iter().any(|p| p.distance(apex) < 1e-6));
        assert!(points.iter().all(|p| p.y >= -1.2 - 1e-6 && p.y <= 1.2 + 1e-6));
    }

    #[test]
    fn canonicalize_keeps_order_and_endpoints() {
        let raw: Vec<Vec3> = (0..10).map(|i| Vec3::splat(i as f32)).collect();

        let shrunk = canonicalize(&raw, 5);
        assert_eq!(shrunk, vec![raw[0], raw[2], raw[4], raw[6], raw[8]]);

        let grown = canonicalize(&raw, 20);
        assert_eq!(grown.len(), 20);
        assert_eq!(grown[0], raw[0]);
        assert_eq!(grown[1], raw[0]);
        assert_eq!(grown[19], raw[9]);
        assert!(grown.windows(2).all(|w| w[0].x <= w[1].x));
    }

    #[test]
    fn color_is_a_sequence_gradient() {
        let set = sample(&ShapeDescriptor::sphere(1.0), 100, pink(), blue());
        let first = &set.colors()[0..3];
        assert_eq!(first, &pink().to_array());

        let last = &set.colors()[297..300];
        let expected = crate::color::lerp(pink(), blue(), 99.0 / 100.0).to_array();
        assert_eq!(last, &expected);
    }
}
