use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Sphere,
    Cube,
    Cone,
    Cylinder,
    Torus,
    Pyramid,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Sphere,
        ShapeKind::Cube,
        ShapeKind::Cone,
        ShapeKind::Cylinder,
        ShapeKind::Torus,
        ShapeKind::Pyramid,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Sphere => "sphere",
            Self::Cube => "cube",
            Self::Cone => "cone",
            Self::Cylinder => "cylinder",
            Self::Torus => "torus",
            Self::Pyramid => "pyramid",
        }
    }
}

/// Order in which the animation visits shapes. Wraps around.
pub const SHAPE_CYCLE: [ShapeKind; 10] = [
    ShapeKind::Sphere,
    ShapeKind::Cube,
    ShapeKind::Sphere,
    ShapeKind::Cone,
    ShapeKind::Sphere,
    ShapeKind::Sphere,
    ShapeKind::Cylinder,
    ShapeKind::Sphere,
    ShapeKind::Torus,
    ShapeKind::Pyramid,
];

const SPHERE_SEGMENTS: u32 = 64;
const CUBE_SEGMENTS: (u32, u32, u32) = (14, 32, 32);
const CONE_SEGMENTS: (u32, u32) = (64, 30);
const CYLINDER_SEGMENTS: (u32, u32) = (64, 64);
const TORUS_SEGMENTS: (u32, u32) = (64, 64);
const PYRAMID_SUBDIVISIONS: u32 = 20;

/// A solid with concrete sizing, ready to be sampled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeDescriptor {
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Cube {
        edge: f32,
        width_segments: u32,
        height_segments: u32,
        depth_segments: u32,
    },
    /// Apex up, closed base. Cap rings are `radial_segments / 2`.
    Cone {
        radius: f32,
        height: f32,
        radial_segments: u32,
        height_segments: u32,
    },
    /// Closed at both ends. Cap rings are `radial_segments / 2`.
    Cylinder {
        radius: f32,
        height: f32,
        radial_segments: u32,
        height_segments: u32,
    },
    Torus {
        ring_radius: f32,
        tube_radius: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    /// Square base, apex up; six triangular faces (base split in two).
    Pyramid {
        base: f32,
        height: f32,
        subdivisions: u32,
    },
}

impl ShapeDescriptor {
    pub fn sphere(radius: f32) -> Self {
        Self::Sphere {
            radius,
            width_segments: SPHERE_SEGMENTS,
            height_segments: SPHERE_SEGMENTS,
        }
    }

    /// Sizes `kind` from the shared base radius and the configured ratios.
    pub fn for_kind(kind: ShapeKind, settings: &Settings) -> Self {
        let r = settings.sphere_radius;
        let ratios = &settings.ratios;

        match kind {
            ShapeKind::Sphere => Self::sphere(r),
            ShapeKind::Cube => Self::Cube {
                edge: r * ratios.cube_edge,
                width_segments: CUBE_SEGMENTS.0,
                height_segments: CUBE_SEGMENTS.1,
                depth_segments: CUBE_SEGMENTS.2,
            },
            ShapeKind::Cone => Self::Cone {
                radius: r,
                height: r * ratios.cone_height,
                radial_segments: CONE_SEGMENTS.0,
                height_segments: CONE_SEGMENTS.1,
            },
            ShapeKind::Cylinder => Self::Cylinder {
                radius: r,
                height: r * ratios.cylinder_height,
                radial_segments: CYLINDER_SEGMENTS.0,
                height_segments: CYLINDER_SEGMENTS.1,
            },
            ShapeKind::Torus => Self::Torus {
                ring_radius: r * ratios.torus_ring,
                tube_radius: r * ratios.torus_tube,
                radial_segments: TORUS_SEGMENTS.0,
                tubular_segments: TORUS_SEGMENTS.1,
            },
            ShapeKind::Pyramid => Self::Pyramid {
                base: r * ratios.pyramid_base,
                height: r * ratios.pyramid_height,
                subdivisions: PYRAMID_SUBDIVISIONS,
            },
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Sphere { .. } => ShapeKind::Sphere,
            Self::Cube { .. } => ShapeKind::Cube,
            Self::Cone { .. } => ShapeKind::Cone,
            Self::Cylinder { .. } => ShapeKind::Cylinder,
            Self::Torus { .. } => ShapeKind::Torus,
            Self::Pyramid { .. } => ShapeKind::Pyramid,
        }
    }
}
