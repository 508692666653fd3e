// src/views/turtle.rs
//
// The turtle engine: owns the pending frame queue and the per-heading
// distance history. Commands expand into full frame sequences through
// animation::interpolator and enqueue them in one shot, so the renderer
// never observes a half-issued command. Frames drain one per tick
// through advance_frame.

use crate::animation::{bearing_steps, travel_steps};
use crate::models::{TurtleState, Vec2D};
use std::collections::{BTreeMap, VecDeque};

/// Snapshot of accumulated travel, headings ascending and
/// lengths index-aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryReport {
    pub headings: Vec<i32>,
    pub lengths: Vec<f32>,
}

#[derive(Debug)]
pub struct Turtle {
    // never empty: always holds at least the current pose
    state_queue: VecDeque<TurtleState>,
    history: BTreeMap<i32, f32>,
}

impl Turtle {
    pub fn new() -> Self {
        let mut state_queue = VecDeque::new();
        state_queue.push_back(TurtleState::default());
        Self {
            state_queue,
            history: BTreeMap::new(),
        }
    }

    /************************ commands ************************/

    pub fn turn(&mut self, degrees: f32) -> &mut Self {
        let target = self.latest().bearing + degrees;
        self.set_bearing(target)
    }

    pub fn set_bearing(&mut self, degrees: f32) -> &mut Self {
        let frames = bearing_steps(self.latest(), degrees);
        self.state_queue.extend(frames);
        self
    }

    pub fn move_by(&mut self, length: f32) -> &mut Self {
        let start = self.latest();
        let frames = travel_steps(start, length);
        self.state_queue.extend(frames);

        // distance is banked against the heading in effect during the
        // move, bucketed to whole degrees; backward runs count the same
        let heading = start.bearing as i32;
        *self.history.entry(heading).or_insert(0.0) += length.abs();
        self
    }

    /// Jump to (x, y) with no interpolation and no history entry.
    pub fn set_pos(&mut self, x: f32, y: f32) -> &mut Self {
        let bearing = self.latest().bearing;
        self.state_queue
            .push_back(TurtleState::new(Vec2D::new(x, y), bearing));
        self
    }

    // compass-style aliases
    pub fn left(&mut self, degrees: f32) -> &mut Self {
        self.turn(-degrees)
    }

    pub fn right(&mut self, degrees: f32) -> &mut Self {
        self.turn(degrees)
    }

    pub fn forward(&mut self, length: f32) -> &mut Self {
        self.move_by(length)
    }

    pub fn backward(&mut self, length: f32) -> &mut Self {
        self.move_by(-length)
    }

    /************************ frame consumption ************************/

    /// Pop the next frame pair for rendering.
    ///
    /// Returns (previous, current). With more than one pending frame the
    /// front is consumed and the new front becomes current; with a single
    /// frame it serves as both, so an idle turtle still redraws in place.
    pub fn advance_frame(&mut self) -> (TurtleState, TurtleState) {
        if self.state_queue.len() > 1 {
            let previous = self
                .state_queue
                .pop_front()
                .expect("frame queue must never be empty");
            let current = *self
                .state_queue
                .front()
                .expect("frame queue must never be empty");
            (previous, current)
        } else {
            let current = *self
                .state_queue
                .front()
                .expect("frame queue must never be empty");
            (current, current)
        }
    }

    /************************ queries ************************/

    pub fn position(&self) -> Vec2D {
        self.latest().position
    }

    pub fn bearing(&self) -> f32 {
        self.latest().bearing
    }

    pub fn is_animating(&self) -> bool {
        self.state_queue.len() > 1
    }

    pub fn pending_frames(&self) -> usize {
        self.state_queue.len()
    }

    pub fn history(&self) -> HistoryReport {
        HistoryReport {
            headings: self.history.keys().copied().collect(),
            lengths: self.history.values().copied().collect(),
        }
    }

    // the pose commands chain from: the most recently enqueued frame
    fn latest(&self) -> TurtleState {
        *self
            .state_queue
            .back()
            .expect("frame queue must never be empty")
    }

    /************************ lifecycle ************************/

    /// Drop pending animation and history, back to the home pose.
    /// The renderer owns the surface half of a full reset.
    pub fn reset(&mut self) {
        self.state_queue.clear();
        self.state_queue.push_back(TurtleState::default());
        self.history.clear();
    }
}

impl Default for Turtle {
    fn default() -> Self {
        Self::new()
    }
}
