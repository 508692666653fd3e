// src/draw/recording.rs
//
// Retained-operation surface. Draw calls append SurfaceOps; snapshots
// are plain clones of the op list, so restore is a cheap swap. Doubles
// as the test backend and as the op store the window surface replays.

use crate::draw::DrawSurface;
use crate::models::Vec2D;

// SurfaceOp is a single drawing operation in canvas coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Line { from: Vec2D, to: Vec2D },
    Polygon { points: Vec<Vec2D> },
}

#[derive(Debug)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }
}

impl DrawSurface for RecordingSurface {
    type Snapshot = Vec<SurfaceOp>;

    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self) {
        self.ops.clear();
    }

    fn draw_line(&mut self, from: Vec2D, to: Vec2D) {
        // a zero-length stroke leaves no mark; skipping it keeps the
        // op list from growing while the turtle idles
        if from == to {
            return;
        }
        self.ops.push(SurfaceOp::Line { from, to });
    }

    fn draw_filled_polygon(&mut self, points: &[Vec2D]) {
        self.ops.push(SurfaceOp::Polygon {
            points: points.to_vec(),
        });
    }

    fn capture_snapshot(&self) -> Vec<SurfaceOp> {
        self.ops.clone()
    }

    fn restore_snapshot(&mut self, snapshot: &Vec<SurfaceOp>) {
        self.ops = snapshot.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ops_accumulate_in_order() {
        let mut surface = RecordingSurface::new(200.0, 200.0);
        surface.draw_line(Vec2D::new(0.0, 0.0), Vec2D::new(10.0, 0.0));
        surface.draw_filled_polygon(&[
            Vec2D::new(0.0, 0.0),
            Vec2D::new(5.0, 5.0),
            Vec2D::new(0.0, 5.0),
        ]);

        assert_eq!(surface.ops().len(), 2);
        assert!(matches!(surface.ops()[0], SurfaceOp::Line { .. }));
        assert!(matches!(surface.ops()[1], SurfaceOp::Polygon { .. }));
    }

    #[test]
    fn test_zero_length_line_is_discarded() {
        let mut surface = RecordingSurface::new(200.0, 200.0);
        surface.draw_line(Vec2D::new(3.0, 3.0), Vec2D::new(3.0, 3.0));
        assert!(surface.ops().is_empty());
    }

    #[test]
    fn test_snapshot_restore_round_trip() {
        let mut surface = RecordingSurface::new(200.0, 200.0);
        surface.draw_line(Vec2D::new(0.0, 0.0), Vec2D::new(10.0, 0.0));
        let snapshot = surface.capture_snapshot();

        surface.draw_filled_polygon(&[Vec2D::new(1.0, 1.0), Vec2D::new(2.0, 2.0)]);
        assert_eq!(surface.ops().len(), 2);

        surface.restore_snapshot(&snapshot);
        assert_eq!(surface.ops().len(), 1);
        assert_eq!(surface.ops(), snapshot.as_slice());
    }

    #[test]
    fn test_clear_empties_surface() {
        let mut surface = RecordingSurface::new(200.0, 200.0);
        surface.draw_line(Vec2D::new(0.0, 0.0), Vec2D::new(10.0, 0.0));
        surface.clear();
        assert!(surface.ops().is_empty());
    }
}
