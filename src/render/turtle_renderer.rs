// src/render/turtle_renderer.rs
//
// Consumes turtle frames one tick at a time and paints them onto a
// DrawSurface. Path segments get baked into a raster snapshot held
// here; the marker is drawn after the capture, so the next restore
// erases it without touching the path.

use crate::draw::DrawSurface;
use crate::models::Vec2D;
use crate::views::Turtle;

const MARKER_SIZE: f32 = 12.0;

pub struct TurtleRenderer<S: DrawSurface> {
    surface: S,
    snapshot: Option<S::Snapshot>,
    marker_offsets: [Vec2D; 3],
}

impl<S: DrawSurface> TurtleRenderer<S> {
    pub fn new(surface: S) -> Self {
        // chevron marker: two wings plus a shallower tail notch, all
        // behind the origin so the pose point itself stays the tip
        let marker_offsets = [
            Vec2D::new(0.0, MARKER_SIZE).rotate(150.0),
            Vec2D::new(0.0, MARKER_SIZE * 0.7).rotate(180.0),
            Vec2D::new(0.0, MARKER_SIZE).rotate(210.0),
        ];
        Self {
            surface,
            snapshot: None,
            marker_offsets,
        }
    }

    /// One render tick.
    ///
    /// Restores the baked path, strokes the segment covered by this
    /// frame, captures the raster again, then lays the marker on top.
    pub fn draw_frame(&mut self, turtle: &mut Turtle) {
        let (previous, current) = turtle.advance_frame();

        if let Some(snapshot) = &self.snapshot {
            self.surface.restore_snapshot(snapshot);
        }

        let from = self.to_screen(previous.position);
        let to = self.to_screen(current.position);
        self.surface.draw_line(from, to);

        // capture before the marker goes down
        self.snapshot = Some(self.surface.capture_snapshot());

        // tip first, then the wings: the pose point is a vertex itself
        let mut marker = vec![self.to_screen(current.position)];
        marker.extend(
            self.marker_offsets
                .iter()
                .map(|offset| self.to_screen(current.position.add(offset.rotate(-current.bearing)))),
        );
        self.surface.draw_filled_polygon(&marker);
    }

    /// Full reset: home the turtle, wipe the raster, forget the snapshot.
    pub fn reset(&mut self, turtle: &mut Turtle) {
        turtle.reset();
        self.snapshot = None;
        self.surface.clear();
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    // model space (center origin, y up) to canvas space (top-left, y down)
    fn to_screen(&self, position: Vec2D) -> Vec2D {
        Vec2D::new(
            self.surface.width() / 2.0 + position.x,
            self.surface.height() / 2.0 - position.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{RecordingSurface, SurfaceOp};

    const EPSILON: f32 = 1e-3;

    fn test_renderer() -> TurtleRenderer<RecordingSurface> {
        TurtleRenderer::new(RecordingSurface::new(200.0, 200.0))
    }

    fn polygon_count(ops: &[SurfaceOp]) -> usize {
        ops.iter()
            .filter(|op| matches!(op, SurfaceOp::Polygon { .. }))
            .count()
    }

    #[test]
    fn test_fresh_turtle_tick_draws_marker_only() {
        let mut renderer = test_renderer();
        let mut turtle = Turtle::new();

        renderer.draw_frame(&mut turtle);

        // no segment to stroke yet, just the marker at the surface center
        let ops = renderer.surface().ops();
        assert_eq!(ops.len(), 1);
        match &ops[0] {
            SurfaceOp::Polygon { points } => {
                // tip at the pose point, then the three chevron offsets
                assert_eq!(points.len(), 4);
                assert!((points[0].x - 100.0).abs() < EPSILON);
                assert!((points[0].y - 100.0).abs() < EPSILON);
                // north-facing wings sit just below the tip on canvas
                assert!((points[1].x - 94.0).abs() < EPSILON);
                assert!((points[1].y - 110.392).abs() < EPSILON);
                assert!((points[2].x - 100.0).abs() < EPSILON);
                assert!((points[2].y - 108.4).abs() < EPSILON);
                assert!((points[3].x - 106.0).abs() < EPSILON);
                assert!((points[3].y - 110.392).abs() < EPSILON);
            }
            other => panic!("expected marker polygon, got {:?}", other),
        }
    }

    #[test]
    fn test_drained_move_bakes_segments_marker_stays_single() {
        let mut renderer = test_renderer();
        let mut turtle = Turtle::new();
        turtle.move_by(12.0);

        // 5 queued frames drain in 4 ticks
        for _ in 0..4 {
            renderer.draw_frame(&mut turtle);
            // the previous marker is always restored away, never baked
            assert_eq!(polygon_count(renderer.surface().ops()), 1);
        }
        assert!(!turtle.is_animating());

        let ops = renderer.surface().ops();
        assert_eq!(ops.len(), 4);
        for op in &ops[..3] {
            assert!(matches!(op, SurfaceOp::Line { .. }));
        }
        assert!(matches!(ops[3], SurfaceOp::Polygon { .. }));

        // first stroked segment heads up the canvas from center
        if let SurfaceOp::Line { from, to } = &ops[0] {
            assert!((from.x - 100.0).abs() < EPSILON);
            assert!((from.y - 100.0).abs() < EPSILON);
            assert!((to.x - 100.0).abs() < EPSILON);
            assert!((to.y - 96.0).abs() < EPSILON);
        }
        // last segment ends on the exact destination
        if let SurfaceOp::Line { to, .. } = &ops[2] {
            assert!((to.y - 88.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_marker_tip_tracks_the_pose() {
        let mut renderer = test_renderer();
        let mut turtle = Turtle::new();
        turtle.set_pos(10.0, 20.0);
        renderer.draw_frame(&mut turtle);

        // the first marker vertex is the screen-mapped pose point
        let ops = renderer.surface().ops();
        match ops.last().unwrap() {
            SurfaceOp::Polygon { points } => {
                assert_eq!(points.len(), 4);
                assert!((points[0].x - 110.0).abs() < EPSILON);
                assert!((points[0].y - 80.0).abs() < EPSILON);
            }
            other => panic!("expected marker polygon, got {:?}", other),
        }
    }

    #[test]
    fn test_idle_ticks_are_idempotent() {
        let mut renderer = test_renderer();
        let mut turtle = Turtle::new();
        turtle.move_by(12.0);
        for _ in 0..4 {
            renderer.draw_frame(&mut turtle);
        }

        let settled = renderer.surface().ops().to_vec();
        for _ in 0..3 {
            renderer.draw_frame(&mut turtle);
            assert_eq!(renderer.surface().ops(), settled.as_slice());
            assert_eq!(turtle.pending_frames(), 1);
        }
    }

    #[test]
    fn test_turn_redraws_marker_without_stroking() {
        let mut renderer = test_renderer();
        let mut turtle = Turtle::new();
        turtle.turn(40.0);

        // rotation frames change bearing only: no line ops ever appear
        for _ in 0..5 {
            renderer.draw_frame(&mut turtle);
            let ops = renderer.surface().ops();
            assert_eq!(ops.len(), 1);
            assert!(matches!(ops[0], SurfaceOp::Polygon { .. }));
        }
        assert!(!turtle.is_animating());
    }

    #[test]
    fn test_reset_clears_surface_and_homes_turtle() {
        let mut renderer = test_renderer();
        let mut turtle = Turtle::new();
        turtle.move_by(12.0);
        for _ in 0..4 {
            renderer.draw_frame(&mut turtle);
        }

        renderer.reset(&mut turtle);
        assert!(renderer.surface().ops().is_empty());
        assert_eq!(turtle.pending_frames(), 1);
        assert!(turtle.history().headings.is_empty());

        // first tick after reset starts from a blank raster
        renderer.draw_frame(&mut turtle);
        assert_eq!(renderer.surface().ops().len(), 1);
        assert_eq!(polygon_count(renderer.surface().ops()), 1);
    }
}
