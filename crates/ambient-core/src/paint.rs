use crate::color::Rgba;
use glam::Vec2;

/// Drawing primitives the particle field needs, in logical pixels.
///
/// The web front-end implements this on a 2D canvas context; tests use a
/// recorder.
pub trait Painter {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
}

/// Discards every draw call, so a field can be framed headlessly.
#[derive(Default, Debug, Clone, Copy)]
pub struct NullPainter;

impl Painter for NullPainter {
    fn clear(&mut self, _width: f32, _height: f32) {}
    fn fill_disc(&mut self, _center: Vec2, _radius: f32, _color: Rgba) {}
    fn stroke_line(&mut self, _from: Vec2, _to: Vec2, _width: f32, _color: Rgba) {}
}
