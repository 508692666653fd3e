// src/animation/interpolator.rs
//
// Frame interpolation for turtle commands.
// Every command is expanded into its full frame sequence up front;
// the caller enqueues the result in one shot so playback order can
// never interleave between commands.

use crate::models::{TurtleState, Vec2D};

// degrees swept per rotation frame
pub const TURN_STEP_DEGREES: f32 = 10.0;
// units travelled per movement frame
pub const MOVE_STEP_UNITS: f32 = 4.0;

/// Wrap a bearing into [0, 360). Handles negative inputs.
pub fn normalize_bearing(degrees: f32) -> f32 {
    ((degrees % 360.0) + 360.0) % 360.0
}

/// Resolve the shorter sweep between two bearings.
///
/// Returns (from, to) with one endpoint pushed up by a full turn when
/// wrapping through north is strictly shorter. On an exact 180 tie no
/// wrap is applied, so the sweep direction follows the raw ordering.
pub fn angular_path(from: f32, to: f32) -> (f32, f32) {
    let mut from_adj = normalize_bearing(from);
    let mut to_adj = normalize_bearing(to);

    if to_adj < from_adj {
        let wrapped = to_adj + 360.0;
        if wrapped - from_adj < from_adj - to_adj {
            to_adj = wrapped;
        }
    } else {
        let wrapped = from_adj + 360.0;
        if wrapped - to_adj < to_adj - from_adj {
            from_adj = wrapped;
        }
    }

    (from_adj, to_adj)
}

/// Expand a rotation to `target` into animation frames.
///
/// The sweep advances TURN_STEP_DEGREES per frame along the shorter
/// direction and always ends on the exact normalized target. A rotation
/// with no net change still yields that single final frame.
pub fn bearing_steps(start: TurtleState, target: f32) -> Vec<TurtleState> {
    let (from_adj, to_adj) = angular_path(start.bearing, target);
    let distance = to_adj - from_adj;

    let mut frames = Vec::new();
    if distance != 0.0 {
        let step = TURN_STEP_DEGREES / distance.abs();
        let mut scale = 0.0;
        while scale < 1.0 {
            let bearing = normalize_bearing(from_adj + distance * scale);
            frames.push(TurtleState::new(start.position, bearing));
            scale += step;
        }
    }
    frames.push(TurtleState::new(start.position, normalize_bearing(to_adj)));
    frames
}

/// Expand a straight run of `length` units into animation frames.
///
/// The delta points along the current bearing (negative lengths walk it
/// backward), so the per-frame step size is taken from the magnitude.
/// The final frame lands on the exact destination; a zero-length run
/// yields just that frame.
pub fn travel_steps(start: TurtleState, length: f32) -> Vec<TurtleState> {
    let delta = Vec2D::new(0.0, length).rotate(-start.bearing);
    let destination = start.position.add(delta);

    let mut frames = Vec::new();
    if length != 0.0 {
        let step = MOVE_STEP_UNITS / length.abs();
        let mut scale = 0.0;
        while scale < 1.0 {
            let position = start.position.add(delta.scale(scale));
            frames.push(TurtleState::new(position, start.bearing));
            scale += step;
        }
    }
    frames.push(TurtleState::new(destination, start.bearing));
    frames
}
