//! Toolkit-independent geometry.

use serde::{Deserialize, Serialize};

/// A point in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A width/height pair in points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// A view frame: origin plus size, in the parent's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Rect {
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Convenience constructor from raw components.
    pub const fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(Point::new(x, y), Size::new(width, height))
    }

    /// Returns true if the rect encloses no area.
    pub fn is_empty(&self) -> bool {
        self.size.width <= 0.0 || self.size.height <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_xywh_matches_new() {
        let a = Rect::from_xywh(1.0, 2.0, 3.0, 4.0);
        let b = Rect::new(Point::new(1.0, 2.0), Size::new(3.0, 4.0));
        assert_eq!(a, b);
    }

    #[test]
    fn test_default_rect_is_empty() {
        assert!(Rect::default().is_empty());
        assert!(!Rect::from_xywh(0.0, 0.0, 10.0, 10.0).is_empty());
    }
}
