// src/animation/ticker.rs
//
// Fixed-interval tick source driven by wall-clock frame deltas.
// The render loop runs at whatever rate nannou gives us; the turtle
// queue must drain at its own steady rate, so elapsed time is banked
// here and paid out as whole ticks.

// longest backlog honored after a stall, in ticks
const MAX_CATCHUP_TICKS: u32 = 5;

#[derive(Debug)]
pub struct Ticker {
    interval: f32,
    accumulator: f32,
}

impl Ticker {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            accumulator: 0.0,
        }
    }

    /// Bank `dt` seconds and return how many ticks fell due.
    ///
    /// A non-positive interval means every call ticks once. After a long
    /// stall the backlog is dropped rather than fast-forwarded.
    pub fn due_ticks(&mut self, dt: f32) -> u32 {
        if self.interval <= 0.0 {
            return 1;
        }

        self.accumulator += dt;
        let mut due = 0;
        while self.accumulator >= self.interval && due < MAX_CATCHUP_TICKS {
            self.accumulator -= self.interval;
            due += 1;
        }
        if due == MAX_CATCHUP_TICKS && self.accumulator >= self.interval {
            self.accumulator = 0.0;
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_accumulate_across_frames() {
        let mut ticker = Ticker::new(0.25);
        assert_eq!(ticker.due_ticks(0.125), 0);
        assert_eq!(ticker.due_ticks(0.125), 1);
        assert_eq!(ticker.due_ticks(0.125), 0);
    }

    #[test]
    fn test_large_delta_yields_multiple_ticks() {
        let mut ticker = Ticker::new(0.25);
        assert_eq!(ticker.due_ticks(0.625), 2);
        // remainder carried into the next frame
        assert_eq!(ticker.due_ticks(0.125), 1);
    }

    #[test]
    fn test_stall_drops_backlog() {
        let mut ticker = Ticker::new(0.25);
        assert_eq!(ticker.due_ticks(10.0), MAX_CATCHUP_TICKS);
        // accumulator was cleared, normal cadence resumes
        assert_eq!(ticker.due_ticks(0.125), 0);
        assert_eq!(ticker.due_ticks(0.125), 1);
    }

    #[test]
    fn test_zero_interval_ticks_every_frame() {
        let mut ticker = Ticker::new(0.0);
        assert_eq!(ticker.due_ticks(0.0), 1);
        assert_eq!(ticker.due_ticks(1.0), 1);
    }
}
