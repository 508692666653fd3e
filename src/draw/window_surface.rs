// src/draw/window_surface.rs
//
// nannou-backed drawing surface. nannou's Draw is immediate mode, so
// committed ops are retained in a RecordingSurface and replayed into
// the frame every time present is called. Snapshot restore then just
// swaps the op list, which is what makes the marker erase cheap.

use nannou::prelude::*;

use crate::draw::recording::{RecordingSurface, SurfaceOp};
use crate::draw::DrawSurface;
use crate::models::Vec2D;

const PATH_WEIGHT: f32 = 2.0;
const MARKER_WEIGHT: f32 = 1.0;

pub struct WindowSurface {
    ops: RecordingSurface,
}

impl WindowSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            ops: RecordingSurface::new(width, height),
        }
    }

    // canvas coordinates (top-left origin, y down) to nannou's centered frame
    fn to_window(&self, point: Vec2D) -> Point2 {
        pt2(
            point.x - self.ops.width() / 2.0,
            self.ops.height() / 2.0 - point.y,
        )
    }

    /// Replay every committed op into the current frame.
    pub fn present(&self, draw: &Draw) {
        for op in self.ops.ops() {
            match op {
                SurfaceOp::Line { from, to } => {
                    draw.line()
                        .start(self.to_window(*from))
                        .end(self.to_window(*to))
                        .stroke_weight(PATH_WEIGHT)
                        .color(BLACK)
                        .caps_round();
                }
                SurfaceOp::Polygon { points } => {
                    let window_points: Vec<Point2> =
                        points.iter().map(|p| self.to_window(*p)).collect();
                    // stroke options must precede points(): that call
                    // finalizes the builder and drops the stroke methods
                    draw.polygon()
                        .stroke(WHITE)
                        .stroke_weight(MARKER_WEIGHT)
                        .points(window_points)
                        .color(BLACK);
                }
            }
        }
    }
}

impl DrawSurface for WindowSurface {
    type Snapshot = Vec<SurfaceOp>;

    fn width(&self) -> f32 {
        self.ops.width()
    }

    fn height(&self) -> f32 {
        self.ops.height()
    }

    fn clear(&mut self) {
        self.ops.clear();
    }

    fn draw_line(&mut self, from: Vec2D, to: Vec2D) {
        self.ops.draw_line(from, to);
    }

    fn draw_filled_polygon(&mut self, points: &[Vec2D]) {
        self.ops.draw_filled_polygon(points);
    }

    fn capture_snapshot(&self) -> Vec<SurfaceOp> {
        self.ops.capture_snapshot()
    }

    fn restore_snapshot(&mut self, snapshot: &Vec<SurfaceOp>) {
        self.ops.restore_snapshot(snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_window_centers_and_flips_y() {
        let surface = WindowSurface::new(200.0, 200.0);

        // canvas center lands on the window origin
        assert_eq!(surface.to_window(Vec2D::new(100.0, 100.0)), pt2(0.0, 0.0));
        // canvas top-left is the window's upper-left quadrant corner
        assert_eq!(
            surface.to_window(Vec2D::new(0.0, 0.0)),
            pt2(-100.0, 100.0)
        );
        assert_eq!(
            surface.to_window(Vec2D::new(200.0, 200.0)),
            pt2(100.0, -100.0)
        );
    }

    #[test]
    fn test_snapshot_round_trip_through_window() {
        let mut surface = WindowSurface::new(200.0, 200.0);
        surface.draw_line(Vec2D::new(0.0, 0.0), Vec2D::new(10.0, 10.0));
        let snapshot = surface.capture_snapshot();

        surface.draw_filled_polygon(&[Vec2D::new(1.0, 1.0), Vec2D::new(2.0, 2.0)]);
        surface.restore_snapshot(&snapshot);
        assert_eq!(surface.capture_snapshot(), snapshot);
    }
}
