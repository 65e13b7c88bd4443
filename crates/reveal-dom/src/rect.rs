//! Axis-aligned rectangles in document coordinates.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle. `x`/`y` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (`x + width`).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Area of the rectangle. Degenerate rectangles have zero area.
    pub fn area(&self) -> f64 {
        (self.width.max(0.0)) * (self.height.max(0.0))
    }

    /// Translate vertically by `dy`.
    pub fn translated_y(&self, dy: f64) -> Self {
        Self {
            y: self.y + dy,
            ..*self
        }
    }

    /// Grow the rectangle by `margin` on every side.
    ///
    /// Negative margins shrink it; width/height are clamped at zero.
    pub fn expanded(&self, margin: f64) -> Self {
        Self {
            x: self.x - margin,
            y: self.y - margin,
            width: (self.width + 2.0 * margin).max(0.0),
            height: (self.height + 2.0 * margin).max(0.0),
        }
    }

    /// Overlapping region with `other`, if any area overlaps.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right > x && bottom > y {
            Some(Rect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }

    /// True when `other` lies entirely inside this rectangle (edges allowed).
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges_and_area() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.bottom(), 70.0);
        assert_eq!(r.area(), 5000.0);
    }

    #[test]
    fn test_rect_intersection() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 50.0, 100.0, 100.0);

        let overlap = a.intersection(&b).unwrap();
        assert_eq!(overlap, Rect::new(50.0, 50.0, 50.0, 50.0));

        // Disjoint rectangles do not intersect
        let c = Rect::new(200.0, 200.0, 10.0, 10.0);
        assert!(a.intersection(&c).is_none());

        // Edge-touching rectangles have no overlapping area
        let d = Rect::new(100.0, 0.0, 10.0, 10.0);
        assert!(a.intersection(&d).is_none());
    }

    #[test]
    fn test_rect_contains() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(outer.contains(&Rect::new(10.0, 10.0, 20.0, 20.0)));
        assert!(outer.contains(&outer));
        assert!(!outer.contains(&Rect::new(90.0, 90.0, 20.0, 20.0)));
    }

    #[test]
    fn test_rect_expanded() {
        let r = Rect::new(10.0, 10.0, 20.0, 20.0).expanded(5.0);
        assert_eq!(r, Rect::new(5.0, 5.0, 30.0, 30.0));

        // Shrinking past zero clamps
        let collapsed = Rect::new(0.0, 0.0, 4.0, 4.0).expanded(-10.0);
        assert_eq!(collapsed.width, 0.0);
        assert_eq!(collapsed.height, 0.0);
    }
}
