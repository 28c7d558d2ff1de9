use std::time::Duration;

use glam::Vec3;
use tracing::info;

use crate::color;
use crate::deform::{self, BlobParams, RippleParams};
use crate::error::Result;
use crate::library::ShapeLibrary;
use crate::morph::{MorphController, MorphEvent};
use crate::noise_field::{NoiseField, SimplexField};
use crate::oscillator::ColorOscillator;
use crate::point_set::PointSet;
use crate::renderer::{Layer, PointCloud, Renderer};
use crate::sampler;
use crate::settings::Settings;
use crate::shape::{SHAPE_CYCLE, ShapeDescriptor};

/// Ripple clock units per elapsed millisecond.
const RIPPLE_CLOCK_RATE: f32 = 0.02;

/// All animation state for one run, driven by a single frame tick.
///
/// Per tick: morph step, blob deform of the current shape, rotation,
/// color oscillation, ripple deform of the glow shell.
pub struct AnimationSession {
    settings: Settings,
    noise: Box<dyn NoiseField>,
    morph: MorphController,
    glow: PointSet,
    oscillator: ColorOscillator,
    blob: BlobParams,
    ripple: RippleParams,
    rotation: Vec3,
    started_at: Duration,
    frames: u64,
}

impl AnimationSession {
    /// Starts a session with simplex noise seeded from `seed`.
    pub fn new(settings: Settings, seed: u32, now: Duration) -> Result<Self> {
        Self::with_noise(settings, Box::new(SimplexField::new(seed)), now)
    }

    /// Starts a session with a caller-supplied noise field.
    pub fn with_noise(settings: Settings, noise: Box<dyn NoiseField>, now: Duration) -> Result<Self> {
        settings.validate()?;

        let library = ShapeLibrary::build(&settings)?;
        let points = library.point_count();
        let morph = MorphController::new(library, &SHAPE_CYCLE, &settings, now)?;

        let glow = sampler::sample_native(
            &ShapeDescriptor::sphere(settings.glow_size),
            settings.glow_color1,
            settings.glow_color2,
        );

        info!(points, glow_points = glow.len(), "animation session started");

        Ok(Self {
            oscillator: ColorOscillator::new(settings.color_change_speed),
            blob: BlobParams::from_settings(&settings),
            ripple: RippleParams::from_settings(&settings),
            settings,
            noise,
            morph,
            glow,
            rotation: Vec3::ZERO,
            started_at: now,
            frames: 0,
        })
    }

    /// Advances one display frame. `now` must be monotonic.
    pub fn on_frame_tick(&mut self, now: Duration) -> Result<Option<MorphEvent>> {
        let event = self.morph.tick(now)?;
        let elapsed = now.saturating_sub(self.started_at);

        deform::blob(
            self.morph.current_mut(),
            elapsed.as_secs_f32(),
            &self.blob,
            self.noise.as_ref(),
        );

        self.rotation += Vec3::splat(self.settings.rotation_speed);

        self.oscillator.tick();
        let glow_color = self
            .oscillator
            .color(self.settings.glow_color1, self.settings.glow_color2);
        color::fill_flat(self.glow.colors_mut(), glow_color);

        let ripple_clock = elapsed.as_secs_f32() * 1000.0 * RIPPLE_CLOCK_RATE;
        deform::ripple(&mut self.glow, ripple_clock, &self.ripple, self.noise.as_ref());

        self.frames += 1;
        Ok(event)
    }

    /// Submits the glow shell, then the shape, then presents.
    pub fn render<R: Renderer>(&self, renderer: &mut R) -> Result<(), R::Error> {
        renderer.submit(PointCloud {
            layer: Layer::Glow,
            positions: self.glow.positions(),
            colors: self.glow.colors(),
            point_size: self.settings.point_size,
        })?;

        let current = self.drawable();
        renderer.submit(PointCloud {
            layer: Layer::Shape,
            positions: current.positions(),
            colors: current.colors(),
            point_size: self.settings.point_size,
        })?;

        renderer.present_frame()
    }

    pub fn drawable(&self) -> &PointSet {
        self.morph.current()
    }

    pub fn glow_drawable(&self) -> &PointSet {
        &self.glow
    }

    /// Accumulated Euler rotation (radians) for the shape.
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn morph(&self) -> &MorphController {
        &self.morph
    }

    pub fn oscillator(&self) -> &ColorOscillator {
        &self.oscillator
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
