//! Point-cloud shape morphing: sampling, eased interpolation and noise deformation.

pub mod color;
pub mod deform;
pub mod easing;
pub mod error;
pub mod interpolate;
pub mod library;
pub mod morph;
pub mod noise_field;
pub mod oscillator;
pub mod point_set;
pub mod renderer;
pub mod sampler;
pub mod schedule;
pub mod session;
pub mod settings;
pub mod shape;

pub use error::{ConfigError, Error, Result};
pub use point_set::PointSet;
pub use renderer::{Layer, PointCloud, Renderer};
pub use session::AnimationSession;
pub use settings::Settings;
