//! Minimal 2D vector math for symbol geometry.
//!
//! Coordinates follow the screen convention: x grows right, y grows down.
//! Positive rotation is therefore clockwise on screen.

use serde::{Deserialize, Serialize};

/// Floating point type used throughout the engine.
pub type Real = f64;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: Real,
    pub y: Real,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: Real, y: Real) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> Real {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction, or None for the zero vector.
    pub fn normalized(self) -> Option<Vec2> {
        let len = self.length();
        if len > 0.0 {
            Some(Vec2::new(self.x / len, self.y / len))
        } else {
            None
        }
    }

    /// Rotate about the origin by `angle` radians (clockwise on screen).
    pub fn rotated(self, angle: Real) -> Vec2 {
        let (s, c) = angle.sin_cos();
        Vec2::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    pub fn lerp(self, other: Vec2, t: Real) -> Vec2 {
        self + (other - self) * t
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<Real> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: Real) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl std::ops::Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

/// Degrees to radians, used at the rotation seam where documents store
/// rotation in whole degrees.
pub fn deg_to_rad(deg: Real) -> Real {
    deg.to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_preserves_length() {
        let v = Vec2::new(3.0, 4.0);
        for deg in [0.0, 90.0, 180.0, 270.0, 37.5] {
            let r = v.rotated(deg_to_rad(deg));
            assert!((r.length() - 5.0).abs() < 1e-12);
        }
    }

    #[test]
    fn quarter_turn_is_clockwise_on_screen() {
        // +x rotated 90 degrees maps to +y (downward on screen).
        let r = Vec2::new(1.0, 0.0).rotated(deg_to_rad(90.0));
        assert!((r.x).abs() < 1e-12);
        assert!((r.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn normalized_zero_is_none() {
        assert!(Vec2::ZERO.normalized().is_none());
    }
}
