use tracing::debug;

use crate::error::{Error, Result};
use crate::point_set::PointSet;
use crate::sampler;
use crate::settings::Settings;
use crate::shape::{ShapeDescriptor, ShapeKind};

/// Every shape sampled once at startup, all at the same point count.
///
/// Morphs copy out of these pristine sets instead of sampling mid-animation.
pub struct ShapeLibrary {
    sets: Vec<PointSet>,
}

impl ShapeLibrary {
    pub fn build(settings: &Settings) -> Result<Self> {
        let sets: Vec<PointSet> = ShapeKind::ALL
            .iter()
            .map(|&kind| {
                let descriptor = ShapeDescriptor::for_kind(kind, settings);
                sampler::sample(&descriptor, settings.point_count, settings.color1, settings.color2)
            })
            .collect();

        let library = Self { sets };
        library.ensure_uniform()?;

        debug!(
            shapes = library.sets.len(),
            points = library.point_count(),
            "built shape library"
        );

        Ok(library)
    }

    pub fn get(&self, kind: ShapeKind) -> &PointSet {
        &self.sets[slot(kind)]
    }

    pub fn point_count(&self) -> usize {
        self.sets.first().map_or(0, PointSet::len)
    }

    fn ensure_uniform(&self) -> Result<()> {
        let Some(first) = self.sets.first() else {
            return Ok(());
        };

        for set in &self.sets[1..] {
            first.ensure_same_len(set)?;
        }

        if first.is_empty() {
            return Err(Error::PointCountMismatch {
                expected: 1,
                found: 0,
            });
        }

        Ok(())
    }
}

fn slot(kind: ShapeKind) -> usize {
    match kind {
        ShapeKind::Sphere => 0,
        ShapeKind::Cube => 1,
        ShapeKind::Cone => 2,
        ShapeKind::Cylinder => 3,
        ShapeKind::Torus => 4,
        ShapeKind::Pyramid => 5,
    }
}
