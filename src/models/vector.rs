// src/models/vector.rs
//
// Immutable 2D vector used for turtle positions and marker geometry.
// Every operation returns a new value; bearing-style rotation helpers
// live in animation::interpolator, this type only knows plain plane math.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2D {
    pub x: f32,
    pub y: f32,
}

impl Vec2D {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn add(self, other: Vec2D) -> Vec2D {
        Vec2D::new(self.x + other.x, self.y + other.y)
    }

    pub fn scale(self, s: f32) -> Vec2D {
        Vec2D::new(self.x * s, self.y * s)
    }

    /// Rotate by `degrees`, positive = counter-clockwise.
    pub fn rotate(self, degrees: f32) -> Vec2D {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Vec2D::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

impl Default for Vec2D {
    fn default() -> Self {
        Vec2D::new(0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn assert_close(a: Vec2D, b: Vec2D) {
        assert!(
            (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON,
            "expected {:?} ~ {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_add_and_scale() {
        let v = Vec2D::new(1.0, 2.0).add(Vec2D::new(3.0, -1.0));
        assert_eq!(v, Vec2D::new(4.0, 1.0));

        let v = Vec2D::new(4.0, 1.0).scale(0.5);
        assert_eq!(v, Vec2D::new(2.0, 0.5));

        // scaling by zero collapses to the origin
        assert_eq!(Vec2D::new(9.0, -9.0).scale(0.0), Vec2D::new(0.0, 0.0));
    }

    #[test]
    fn test_rotate_quarter_turn() {
        // counter-clockwise: +X goes to +Y
        assert_close(Vec2D::new(1.0, 0.0).rotate(90.0), Vec2D::new(0.0, 1.0));
        assert_close(Vec2D::new(0.0, 1.0).rotate(90.0), Vec2D::new(-1.0, 0.0));
        assert_close(Vec2D::new(0.0, 1.0).rotate(-90.0), Vec2D::new(1.0, 0.0));
    }

    #[test]
    fn test_rotate_round_trip_is_identity() {
        let v = Vec2D::new(3.5, -7.25);
        for degrees in [0.0, 10.0, 45.0, 90.0, 137.5, 180.0, 270.0, 359.0] {
            assert_close(v.rotate(degrees).rotate(-degrees), v);
        }
    }

    #[test]
    fn test_rotate_full_turn() {
        let v = Vec2D::new(-2.0, 5.0);
        assert_close(v.rotate(360.0), v);
    }
}
