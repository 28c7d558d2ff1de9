use crate::color::{self, Rgb};

/// Ping-pong scalar in `[0, 1]`, advanced once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorOscillator {
    progress: f32,
    direction: f32,
    speed: f32,
}

impl ColorOscillator {
    pub fn new(speed: f32) -> Self {
        Self {
            progress: 0.0,
            direction: 1.0,
            speed,
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// `+1.0` while rising, `-1.0` while falling.
    pub fn direction(&self) -> f32 {
        self.direction
    }

    /// Advances by `speed` in the current direction. On reaching or crossing a
    /// bound, progress is clamped and the direction flips.
    pub fn tick(&mut self) -> f32 {
        self.progress += self.speed * self.direction;

        if self.progress >= 1.0 || self.progress <= 0.0 {
            self.progress = self.progress.clamp(0.0, 1.0);
            self.direction = if self.progress >= 1.0 { -1.0 } else { 1.0 };
        }

        self.progress
    }

    /// Blend of `a` and `b` at the current progress.
    pub fn color(&self, a: Rgb, b: Rgb) -> Rgb {
        color::lerp(a, b, self.progress)
    }
}
