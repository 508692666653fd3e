// src/draw/surface.rs
//
// Drawing surface capability used by the turtle renderer.
// Coordinates are canvas-style: origin at top-left, y growing downward,
// one unit per pixel. The renderer handles the model-space conversion.

use crate::models::Vec2D;

pub trait DrawSurface {
    /// Opaque raster capture the backend can cheaply re-apply.
    type Snapshot;

    fn width(&self) -> f32;
    fn height(&self) -> f32;

    fn clear(&mut self);
    fn draw_line(&mut self, from: Vec2D, to: Vec2D);
    fn draw_filled_polygon(&mut self, points: &[Vec2D]);

    /// Capture everything drawn so far, marker excluded by protocol.
    fn capture_snapshot(&self) -> Self::Snapshot;
    fn restore_snapshot(&mut self, snapshot: &Self::Snapshot);
}
