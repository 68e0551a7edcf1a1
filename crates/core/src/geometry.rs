//! Geometric types for selection rectangles in virtual-screen coordinates.

/// A point in virtual-screen coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle with a top-left origin and non-negative extents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Builds the normalized rectangle spanned by two corner points.
    ///
    /// A drag can run in any direction; the origin is always the
    /// component-wise minimum of the two corners and the extents their
    /// absolute differences.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: a.x.abs_diff(b.x),
            height: a.y.abs_diff(b.y),
        }
    }

    /// Whether both extents are strictly positive.
    ///
    /// A zero-area rectangle is a click without a drag and never reaches
    /// the capture engine.
    pub fn has_area(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_corners_normalizes_a_reversed_drag() {
        let rect = Rect::from_corners(Point::new(100, 100), Point::new(50, 300));
        assert_eq!(
            rect,
            Rect {
                x: 50,
                y: 100,
                width: 50,
                height: 200
            }
        );
        assert!(rect.has_area());
    }

    #[test]
    fn origin_is_the_componentwise_minimum() {
        let pairs = [
            (Point::new(0, 0), Point::new(10, 10)),
            (Point::new(10, 0), Point::new(0, 10)),
            (Point::new(-5, 7), Point::new(3, -2)),
            (Point::new(4, 4), Point::new(4, 4)),
        ];
        for (a, b) in pairs {
            let rect = Rect::from_corners(a, b);
            assert_eq!(rect.x, a.x.min(b.x));
            assert_eq!(rect.y, a.y.min(b.y));
            // Order of the corners must not matter.
            assert_eq!(rect, Rect::from_corners(b, a));
        }
    }

    #[test]
    fn click_without_movement_has_no_area() {
        let rect = Rect::from_corners(Point::new(10, 10), Point::new(10, 10));
        assert_eq!(rect.width, 0);
        assert_eq!(rect.height, 0);
        assert!(!rect.has_area());
    }

    #[test]
    fn degenerate_selections_have_no_area() {
        assert!(!Rect::from_corners(Point::new(0, 0), Point::new(0, 10)).has_area());
        assert!(!Rect::from_corners(Point::new(0, 0), Point::new(10, 0)).has_area());
        assert!(Rect::from_corners(Point::new(0, 0), Point::new(1, 1)).has_area());
    }
}
