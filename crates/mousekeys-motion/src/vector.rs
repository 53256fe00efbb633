//! Two-axis value type.

use core::ops::Add;

use serde::{Deserialize, Serialize};

/// A velocity or displacement on two independent axes.
///
/// Components are expected to be finite; NaN and infinity are caller errors.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    /// Horizontal component
    pub x: f32,
    /// Vertical component
    pub y: f32,
}

impl Vector2 {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a vector from its components.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns `true` when both axes are exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl Add for Vector2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert!(Vector2::ZERO.is_zero());
        assert!(Vector2::default().is_zero());
        assert!(Vector2::new(-0.0, 0.0).is_zero());
        assert!(!Vector2::new(0.0, 1e-9).is_zero());
        assert!(!Vector2::new(-1.0, 0.0).is_zero());
    }

    #[test]
    fn test_add() {
        let a = Vector2::new(1.5, -2.0);
        let b = Vector2::new(0.5, 4.0);
        assert_eq!(a + b, Vector2::new(2.0, 2.0));
        assert_eq!(a + Vector2::ZERO, a);
    }

    #[test]
    fn test_serde_shape() -> Result<(), serde_json::Error> {
        let v: Vector2 = serde_json::from_str(r#"{"x": 300.0, "y": -10.5}"#)?;
        assert_eq!(v, Vector2::new(300.0, -10.5));
        Ok(())
    }
}
