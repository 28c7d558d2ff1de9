/// Which part of the scene a point cloud belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Shape,
    Glow,
}

/// One submission: flat `3N` positions and `3N` RGB colors in `[0, 1]`.
#[derive(Debug, Clone, Copy)]
pub struct PointCloud<'a> {
    pub layer: Layer,
    pub positions: &'a [f32],
    pub colors: &'a [f32],
    pub point_size: f32,
}

/// Whatever draws the frame. The session submits every layer, then presents.
pub trait Renderer {
    type Error;

    fn submit(&mut self, cloud: PointCloud<'_>) -> Result<(), Self::Error>;

    fn present_frame(&mut self) -> Result<(), Self::Error>;
}
