use serde::{Deserialize, Serialize};
use std::fmt;

/// A width/height pair in points.
///
/// Components may be negative: layout code uses a negative budget to signal
/// that no space is left at all. Equality is tolerant to [`Size::EPSILON`] so
/// that a measured size compares equal to the space it was measured against.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Tolerance used for every boundary comparison in the layout engine.
    pub const EPSILON: f32 = 0.001;

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// True when either dimension is below zero beyond the tolerance.
    pub fn is_negative(&self) -> bool {
        self.width < -Self::EPSILON || self.height < -Self::EPSILON
    }

    /// True when `self` fits inside `space` in both dimensions, within tolerance.
    pub fn fits_within(&self, space: Size) -> bool {
        self.width <= space.width + Self::EPSILON && self.height <= space.height + Self::EPSILON
    }
}

impl PartialEq for Size {
    fn eq(&self, other: &Self) -> bool {
        (self.width - other.width).abs() < Self::EPSILON
            && (self.height - other.height).abs() < Self::EPSILON
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} x {:.2}", self.width, self.height)
    }
}

/// An offset in the drawing surface's current coordinate frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn translate(&self, other: Position) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// The offset that undoes `self`.
    pub fn reverse(&self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_equality_tolerates_epsilon() {
        assert_eq!(Size::new(10.0, 20.0), Size::new(10.0005, 19.9995));
        assert_ne!(Size::new(10.0, 20.0), Size::new(10.01, 20.0));
    }

    #[test]
    fn negative_detection_ignores_rounding_noise() {
        assert!(!Size::new(-0.0001, 5.0).is_negative());
        assert!(Size::new(5.0, -0.5).is_negative());
        assert!(Size::new(-3.0, 5.0).is_negative());
    }

    #[test]
    fn fits_within_uses_tolerance() {
        let space = Size::new(100.0, 90.0);
        assert!(Size::new(100.0005, 90.0).fits_within(space));
        assert!(!Size::new(100.1, 10.0).fits_within(space));
        assert!(!Size::new(10.0, 90.5).fits_within(space));
    }

    #[test]
    fn reverse_undoes_translation() {
        let origin = Position::new(3.0, 4.0);
        let offset = Position::new(10.0, -2.5);
        assert_eq!(origin.translate(offset).translate(offset.reverse()), origin);
    }
}
