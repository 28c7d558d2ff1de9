//! Deterministic 3D noise sources for the deformers.

use glam::Vec3;
use noise::{NoiseFn, Simplex};

/// Scalar field in roughly `[-1, 1]`. Identical input must give identical output.
pub trait NoiseField {
    fn sample(&self, p: Vec3) -> f32;
}

/// Simplex noise from the `noise` crate, seeded once per session.
pub struct SimplexField {
    simplex: Simplex,
    seed: u32,
}

impl SimplexField {
    pub fn new(seed: u32) -> Self {
        Self {
            simplex: Simplex::new(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl NoiseField for SimplexField {
    fn sample(&self, p: Vec3) -> f32 {
        self.simplex.get([p.x as f64, p.y as f64, p.z as f64]) as f32
    }
}

/// Returns the same value everywhere.
#[derive(Debug, Clone, Copy)]
pub struct ConstantField(pub f32);

impl NoiseField for ConstantField {
    fn sample(&self, _p: Vec3) -> f32 {
        self.0
    }
}
