// 2D vector math for the play field (y axis points up)

use std::ops::{Add, Mul};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2::new(0.0, 0.0);
    pub const UP: Vector2 = Vector2::new(0.0, 1.0);
    pub const DOWN: Vector2 = Vector2::new(0.0, -1.0);
    pub const LEFT: Vector2 = Vector2::new(-1.0, 0.0);
    pub const RIGHT: Vector2 = Vector2::new(1.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Same vector with the horizontal component negated
    pub fn flip_x(self) -> Self {
        Self::new(-self.x, self.y)
    }

    /// Same vector with the vertical component negated
    pub fn flip_y(self) -> Self {
        Self::new(self.x, -self.y)
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Vector2;

    fn mul(self, scalar: f32) -> Vector2 {
        Vector2::new(self.x * scalar, self.y * scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_component_wise() {
        let sum = Vector2::new(1.5, -2.0) + Vector2::new(0.5, 4.0);
        assert_eq!(sum, Vector2::new(2.0, 2.0));
    }

    #[test]
    fn test_scale() {
        assert_eq!(Vector2::LEFT * 7.0, Vector2::new(-7.0, 0.0));
        assert_eq!(Vector2::new(2.0, -3.0) * 0.5, Vector2::new(1.0, -1.5));
    }

    #[test]
    fn test_flips_leave_original_untouched() {
        let v = Vector2::new(3.0, -4.0);

        assert_eq!(v.flip_x(), Vector2::new(-3.0, -4.0));
        assert_eq!(v.flip_y(), Vector2::new(3.0, 4.0));
        assert_eq!(v, Vector2::new(3.0, -4.0));
    }
}
