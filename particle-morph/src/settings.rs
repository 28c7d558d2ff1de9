//! Immutable animation settings, loadable from TOML.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::info;

use crate::color::Rgb;
use crate::easing::Easing;
use crate::error::ConfigError;

/// Size ratios relative to `Settings::sphere_radius`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShapeRatios {
    pub cube_edge: f32,
    pub cone_height: f32,
    pub cylinder_height: f32,
    pub torus_ring: f32,
    pub torus_tube: f32,
    pub pyramid_base: f32,
    pub pyramid_height: f32,
}

impl Default for ShapeRatios {
    fn default() -> Self {
        Self {
            cube_edge: std::f32::consts::SQRT_2,
            cone_height: 1.7,
            cylinder_height: 1.1,
            torus_ring: 0.75,
            torus_tube: 0.3,
            pyramid_base: 1.5,
            pyramid_height: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Dwell on every shape after the first.
    pub shape_time_ms: u64,
    /// Dwell on the very first shape.
    pub initial_shape_time_ms: u64,
    /// Radians added to each Euler axis per frame.
    pub rotation_speed: f32,
    pub sphere_radius: f32,
    pub point_size: f32,
    pub color1: Rgb,
    pub color2: Rgb,
    pub blob_frequency: f32,
    pub blob_amplitude: f32,
    pub blob_scale: f32,
    /// Raw progress added per morph tick.
    pub morph_step_size: f32,
    pub easing: Easing,
    pub glow_size: f32,
    pub glow_scale: f32,
    pub glow_color1: Rgb,
    pub glow_color2: Rgb,
    pub color_change_speed: f32,
    /// Every shape is resampled to this many points.
    pub point_count: usize,
    pub noise_seed: Option<u32>,
    pub ratios: ShapeRatios,
}

impl Default for Settings {
    fn default() -> Self {
        let pink = Rgb::from_u8(0xFF, 0x0D, 0x92);
        let blue = Rgb::from_u8(0x0D, 0x92, 0xF4);

        Self {
            shape_time_ms: 6000,
            initial_shape_time_ms: 3500,
            rotation_speed: 0.0,
            sphere_radius: 1.2,
            point_size: 0.03,
            color1: pink,
            color2: blue,
            blob_frequency: 0.3,
            blob_amplitude: 0.001,
            blob_scale: 0.9,
            morph_step_size: 0.01,
            easing: Easing::EaseInOut,
            glow_size: 0.9,
            glow_scale: 0.3,
            glow_color1: pink,
            glow_color2: blue,
            color_change_speed: 0.05,
            point_count: 65 * 65,
            noise_seed: None,
            ratios: ShapeRatios::default(),
        }
    }
}

impl Settings {
    pub fn shape_time(&self) -> Duration {
        Duration::from_millis(self.shape_time_ms)
    }

    pub fn initial_shape_time(&self) -> Duration {
        Duration::from_millis(self.initial_shape_time_ms)
    }

    /// Run all validations, collecting every violation into one error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors: Vec<String> = Vec::new();

        validate_positive(&mut errors, "sphere_radius", self.sphere_radius);
        validate_positive(&mut errors, "point_size", self.point_size);
        validate_positive(&mut errors, "glow_size", self.glow_size);
        validate_range(&mut errors, "morph_step_size", self.morph_step_size, f32::MIN_POSITIVE, 1.0);
        validate_range(&mut errors, "color_change_speed", self.color_change_speed, 0.0, 1.0);
        validate_range(&mut errors, "blob_amplitude", self.blob_amplitude, 0.0, f32::MAX);
        validate_range(&mut errors, "glow_scale", self.glow_scale, 0.0, f32::MAX);
        validate_finite(&mut errors, "blob_frequency", self.blob_frequency);
        validate_finite(&mut errors, "blob_scale", self.blob_scale);
        validate_finite(&mut errors, "rotation_speed", self.rotation_speed);

        validate_positive(&mut errors, "ratios.cube_edge", self.ratios.cube_edge);
        validate_positive(&mut errors, "ratios.cone_height", self.ratios.cone_height);
        validate_positive(&mut errors, "ratios.cylinder_height", self.ratios.cylinder_height);
        validate_positive(&mut errors, "ratios.torus_ring", self.ratios.torus_ring);
        validate_positive(&mut errors, "ratios.torus_tube", self.ratios.torus_tube);
        validate_positive(&mut errors, "ratios.pyramid_base", self.ratios.pyramid_base);
        validate_positive(&mut errors, "ratios.pyramid_height", self.ratios.pyramid_height);

        if self.point_count == 0 {
            errors.push("point_count must be at least 1".into());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors.join("; ")))
        }
    }
}

fn validate_positive(errors: &mut Vec<String>, name: &str, value: f32) {
    if !(value.is_finite() && value > 0.0) {
        errors.push(format!("{name} must be > 0, got {value}"));
    }
}

fn validate_range(errors: &mut Vec<String>, name: &str, value: f32, min: f32, max: f32) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} must be in [{min}, {max}], got {value}"));
    }
}

fn validate_finite(errors: &mut Vec<String>, name: &str, value: f32) {
    if !value.is_finite() {
        errors.push(format!("{name} must be finite, got {value}"));
    }
}

/// Parses and validates settings from a TOML string. Missing keys take defaults.
pub fn from_toml_str(content: &str) -> Result<Settings, ConfigError> {
    let settings: Settings = toml::from_str(content)?;
    settings.validate()?;
    Ok(settings)
}

/// Loads settings from a TOML file. Invalid settings are rejected.
pub fn load_from_path(path: &Path) -> Result<Settings, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let settings = from_toml_str(&content)?;
    info!("loaded settings from {}", path.display());
    Ok(settings)
}
