use glam::Vec3;

use crate::color::{self, Rgb};
use crate::error::{Error, Result};
use crate::interpolate;

/// N points with a parallel RGB color per point, both stored flat (`3N` floats).
///
/// The point count is fixed at construction. Accessors hand out slices so
/// callers can mutate in place but never resize.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    positions: Vec<f32>,
    colors: Vec<f32>,
}

impl PointSet {
    /// Builds a set from points, coloring them with a sequence gradient `a -> b`.
    pub fn from_points(points: &[Vec3], a: Rgb, b: Rgb) -> Self {
        let mut positions = Vec::with_capacity(points.len() * 3);

        for p in points {
            positions.extend_from_slice(&p.to_array());
        }

        let mut colors = vec![0.0; positions.len()];
        color::fill_gradient(&mut colors, a, b);

        Self { positions, colors }
    }

    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn positions_mut(&mut self) -> &mut [f32] {
        &mut self.positions
    }

    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    pub fn colors_mut(&mut self) -> &mut [f32] {
        &mut self.colors
    }

    pub fn point(&self, index: usize) -> Vec3 {
        Vec3::from_slice(&self.positions[index * 3..index * 3 + 3])
    }

    pub fn iter_points(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.positions.chunks_exact(3).map(Vec3::from_slice)
    }

    /// Overwrites positions and colors with `other`'s, reusing this buffer.
    pub fn copy_from(&mut self, other: &PointSet) -> Result<()> {
        self.ensure_same_len(other)?;
        self.positions.copy_from_slice(&other.positions);
        self.colors.copy_from_slice(&other.colors);
        Ok(())
    }

    /// Moves every position toward `target`'s corresponding position by `t`, in place.
    pub fn lerp_toward(&mut self, target: &PointSet, t: f32) -> Result<()> {
        self.ensure_same_len(target)?;
        interpolate::lerp_in_place(&mut self.positions, &target.positions, t);
        Ok(())
    }

    pub fn ensure_same_len(&self, other: &PointSet) -> Result<()> {
        if self.len() != other.len() {
            return Err(Error::PointCountMismatch {
                expected: self.len(),
                found: other.len(),
            });
        }

        Ok(())
    }
}
