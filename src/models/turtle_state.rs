// src/models/turtle_state.rs
//
// A single animation frame of the turtle: where it is and which way
// it faces. The frame queue in views::turtle is a sequence of these.

use crate::models::Vec2D;

/// Bearing is in degrees, clockwise from north (up), normalized to [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurtleState {
    pub position: Vec2D,
    pub bearing: f32,
}

impl TurtleState {
    pub fn new(position: Vec2D, bearing: f32) -> Self {
        Self { position, bearing }
    }
}

impl Default for TurtleState {
    // home pose: surface center, facing north
    fn default() -> Self {
        Self {
            position: Vec2D::new(0.0, 0.0),
            bearing: 0.0,
        }
    }
}
