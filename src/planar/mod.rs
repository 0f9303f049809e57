//! 2D shapes and their overlap tests.
//!
//! The planar counterparts of the volume tests: circles and axis-aligned
//! rectangles. As in 3D, touching counts as overlapping.

mod circle;
mod rect;

pub use circle::Circle;
pub use rect::Rect;

use num_traits::Float;

/// Overlap test between two planar shapes.
pub trait Overlaps<Rhs: ?Sized = Self> {
    /// Returns `true` if `self` and `other` touch or overlap.
    fn overlaps(&self, other: &Rhs) -> bool;
}

/// Returns `true` if the circles touch or overlap.
#[inline]
pub fn overlaps_circle_circle<F: Float>(a: &Circle<F>, b: &Circle<F>) -> bool {
    let reach = a.radius() + b.radius();
    a.center().distance_squared(b.center()) <= reach * reach
}

/// Returns `true` if the rectangles touch or overlap.
#[inline]
pub fn overlaps_rect_rect<F: Float>(a: &Rect<F>, b: &Rect<F>) -> bool {
    let (a_min, a_max) = (a.min(), a.max());
    let (b_min, b_max) = (b.min(), b.max());
    a_min.x <= b_max.x && b_min.x <= a_max.x && a_min.y <= b_max.y && b_min.y <= a_max.y
}

/// Returns `true` if the rectangle and circle touch or overlap.
#[inline]
pub fn overlaps_rect_circle<F: Float>(rect: &Rect<F>, circle: &Circle<F>) -> bool {
    let closest = rect.closest_point(circle.center());
    circle.contains_point(closest)
}

/// Argument-order twin of [`overlaps_rect_circle`].
#[inline]
pub fn overlaps_circle_rect<F: Float>(circle: &Circle<F>, rect: &Rect<F>) -> bool {
    overlaps_rect_circle(rect, circle)
}

impl<F: Float> Overlaps for Circle<F> {
    fn overlaps(&self, other: &Self) -> bool {
        overlaps_circle_circle(self, other)
    }
}

impl<F: Float> Overlaps for Rect<F> {
    fn overlaps(&self, other: &Self) -> bool {
        overlaps_rect_rect(self, other)
    }
}

impl<F: Float> Overlaps<Circle<F>> for Rect<F> {
    fn overlaps(&self, circle: &Circle<F>) -> bool {
        overlaps_rect_circle(self, circle)
    }
}

impl<F: Float> Overlaps<Rect<F>> for Circle<F> {
    fn overlaps(&self, rect: &Rect<F>) -> bool {
        overlaps_circle_rect(self, rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{Point2, Vec2};

    fn circles() -> (Circle<f64>, Circle<f64>, Circle<f64>) {
        (
            Circle::new(Point2::new(0.0, 0.0), 1.0).unwrap(),
            Circle::new(Point2::new(0.0, 0.0), 2.0).unwrap(),
            Circle::new(Point2::new(-2.1, 0.0), 1.0).unwrap(),
        )
    }

    fn rects() -> (Rect<f64>, Rect<f64>, Rect<f64>) {
        (
            Rect::new(Point2::new(0.0, 0.0), Vec2::new(2.0, 2.0)),
            Rect::new(Point2::new(0.0, 0.0), Vec2::new(4.0, 4.0)),
            Rect::new(Point2::new(-2.1, 0.0), Vec2::new(2.0, 2.0)),
        )
    }

    #[test]
    fn test_circle_circle() {
        let (mid, mid_big, left) = circles();

        assert!(overlaps_circle_circle(&mid, &mid_big));
        assert!(overlaps_circle_circle(&mid_big, &mid));
        assert!(!overlaps_circle_circle(&mid, &left));
        assert!(!overlaps_circle_circle(&left, &mid));
        assert!(overlaps_circle_circle(&mid_big, &left));
        assert!(overlaps_circle_circle(&left, &mid_big));
    }

    #[test]
    fn test_circle_circle_touching() {
        let a = Circle::new(Point2::new(0.0, 0.0), 1.0).unwrap();
        let b = Circle::new(Point2::new(2.0, 0.0), 1.0).unwrap();
        let c = Circle::new(Point2::new(2.0001, 0.0), 1.0).unwrap();

        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_rect_rect() {
        let (mid, mid_big, left) = rects();

        assert!(overlaps_rect_rect(&mid, &mid_big));
        assert!(overlaps_rect_rect(&mid_big, &mid));
        assert!(!overlaps_rect_rect(&mid, &left));
        assert!(!overlaps_rect_rect(&left, &mid));
        assert!(overlaps_rect_rect(&mid_big, &left));
        assert!(overlaps_rect_rect(&left, &mid_big));
    }

    #[test]
    fn test_rect_rect_shared_edge() {
        let a = Rect::new(Point2::new(0.0, 0.0), Vec2::new(2.0, 2.0));
        let b = Rect::new(Point2::new(2.0, 0.0), Vec2::new(2.0, 2.0));
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_rect_circle() {
        let (r_mid, r_mid_big, r_left) = rects();
        let (c_mid, c_mid_big, c_left) = circles();

        let cases = [
            (&r_mid, &c_mid, true),
            (&r_mid, &c_mid_big, true),
            (&r_mid, &c_left, false),
            (&r_mid_big, &c_mid, true),
            (&r_mid_big, &c_mid_big, true),
            (&r_mid_big, &c_left, true),
            (&r_left, &c_mid, false),
            (&r_left, &c_mid_big, true),
            (&r_left, &c_left, true),
        ];

        for (rect, circle, expected) in cases {
            assert_eq!(overlaps_rect_circle(rect, circle), expected, "{} vs {}", rect, circle);
            assert_eq!(overlaps_circle_rect(circle, rect), expected, "{} vs {}", circle, rect);
            assert_eq!(rect.overlaps(circle), circle.overlaps(rect));
        }
    }

    #[test]
    fn test_rect_circle_near_corner() {
        // Circle diagonally off the corner (1, 1), distance sqrt(0.5) ~ 0.707
        let rect = Rect::new(Point2::new(0.0, 0.0), Vec2::new(2.0, 2.0));
        let near = Circle::new(Point2::new(1.5, 1.5), 0.71).unwrap();
        let far = Circle::new(Point2::new(1.5, 1.5), 0.7).unwrap();

        assert!(rect.overlaps(&near));
        assert!(!rect.overlaps(&far));
    }
}
