use std::io;

use glam::{EulerRot, Mat3, Vec3};
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

use particle_morph::color::Rgb;
use particle_morph::{Layer, PointCloud, Renderer};

const GLOW_INTENSITY: f32 = 0.6;
const SHAPE_SYMBOL: &str = "•";
const GLOW_SYMBOL: &str = "·";

/// Perspective camera on the +Z axis looking at the origin.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub distance: f32,
    pub fov_y: f32,
    pub near: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            distance: 2.7,
            fov_y: 75f32.to_radians(),
            near: 0.1,
        }
    }
}

impl Camera {
    /// Normalized device x/y in `[-1, 1]` plus view depth, or `None` behind the near plane.
    fn project(&self, p: Vec3) -> Option<Splat> {
        let depth = self.distance - p.z;

        if depth <= self.near {
            return None;
        }

        let focal = 1.0 / (self.fov_y / 2.0).tan();

        Some(Splat {
            x: p.x * focal / depth,
            y: p.y * focal / depth,
            depth,
            color: (0, 0, 0),
        })
    }
}

#[derive(Debug, Clone, Copy)]
struct Splat {
    x: f32,
    y: f32,
    depth: f32,
    color: (u8, u8, u8),
}

/// Draws submitted point clouds into a ratatui terminal as colored glyphs.
///
/// Projected points are kept in buffers that are cleared, not reallocated,
/// between frames.
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    camera: Camera,
    rotation: Mat3,
    glow: Vec<Splat>,
    shape: Vec<Splat>,
    depth: Vec<f32>,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(terminal: Terminal<B>, camera: Camera) -> Self {
        Self {
            terminal,
            camera,
            rotation: Mat3::IDENTITY,
            glow: Vec::new(),
            shape: Vec::new(),
            depth: Vec::new(),
        }
    }

    /// Euler rotation applied to the shape layer only.
    pub fn set_rotation(&mut self, euler: Vec3) {
        self.rotation = Mat3::from_euler(EulerRot::XYZ, euler.x, euler.y, euler.z);
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    type Error = io::Error;

    fn submit(&mut self, cloud: PointCloud<'_>) -> io::Result<()> {
        let (splats, rotation, intensity) = match cloud.layer {
            Layer::Shape => (&mut self.shape, self.rotation, 1.0),
            Layer::Glow => (&mut self.glow, Mat3::IDENTITY, GLOW_INTENSITY),
        };

        splats.clear();

        for (p, c) in cloud.positions.chunks_exact(3).zip(cloud.colors.chunks_exact(3)) {
            let world = rotation * Vec3::from_slice(p);

            if let Some(mut splat) = self.camera.project(world) {
                splat.color = Rgb::new(c[0] * intensity, c[1] * intensity, c[2] * intensity).to_u8();
                splats.push(splat);
            }
        }

        Ok(())
    }

    fn present_frame(&mut self) -> io::Result<()> {
        let view = PointCloudView {
            glow: &self.glow,
            shape: &self.shape,
            depth: &mut self.depth,
        };

        self.terminal.draw(|f| f.render_widget(view, f.area()))?;
        Ok(())
    }
}

struct PointCloudView<'a> {
    glow: &'a [Splat],
    shape: &'a [Splat],
    depth: &'a mut Vec<f32>,
}

impl Widget for PointCloudView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let Self { glow, shape, depth } = self;
        depth.resize(area.width as usize * area.height as usize, f32::INFINITY);

        // Glow first; shape points always paint over it.
        paint(glow, GLOW_SYMBOL, area, buf, depth.as_mut_slice());
        paint(shape, SHAPE_SYMBOL, area, buf, depth.as_mut_slice());
    }
}

/// Nearest point per cell wins. Cells are about twice as tall as wide.
fn paint(splats: &[Splat], symbol: &str, area: Rect, buf: &mut Buffer, depth: &mut [f32]) {
    depth.fill(f32::INFINITY);

    let half_rows = (area.height as f32 / 2.0).min(area.width as f32 / 4.0);
    let cx = area.x as f32 + area.width as f32 / 2.0;
    let cy = area.y as f32 + area.height as f32 / 2.0;

    for s in splats {
        let col = (cx + s.x * half_rows * 2.0).floor();
        let row = (cy - s.y * half_rows).floor();

        if col < area.x as f32 || row < area.y as f32 {
            continue;
        }

        let (x, y) = (col as u16, row as u16);

        if x >= area.right() || y >= area.bottom() {
            continue;
        }

        let slot = (y - area.y) as usize * area.width as usize + (x - area.x) as usize;

        if s.depth >= depth[slot] {
            continue;
        }

        depth[slot] = s.depth;

        let (r, g, b) = s.color;
        let cell = &mut buf[(x, y)];
        cell.set_symbol(symbol);
        cell.set_style(Style::new().fg(Color::Rgb(r, g, b)));
    }
}
