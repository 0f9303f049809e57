//! Axis-aligned 2D rectangle.

use crate::primitives::{Point2, Vec2};
use num_traits::Float;
use std::fmt;

/// An axis-aligned rectangle stored as its center and full dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<F> {
    /// Center of the rectangle.
    pub center: Point2<F>,
    /// Full width and height.
    pub dimensions: Vec2<F>,
}

impl<F: Float> Rect<F> {
    /// Creates a rectangle. Negative dimensions are made positive.
    #[inline]
    pub fn new(center: Point2<F>, dimensions: Vec2<F>) -> Self {
        Self {
            center,
            dimensions: dimensions.abs(),
        }
    }

    /// Creates a rectangle from two opposite corners, in any order.
    pub fn from_corners(a: Point2<F>, b: Point2<F>) -> Self {
        let two = F::one() + F::one();
        Self::new(
            Point2::new((a.x + b.x) / two, (a.y + b.y) / two),
            b - a,
        )
    }

    /// Returns half the width and height.
    #[inline]
    pub fn half_dimensions(&self) -> Vec2<F> {
        self.dimensions / (F::one() + F::one())
    }

    /// Returns the lower-left corner.
    #[inline]
    pub fn min(&self) -> Point2<F> {
        self.center - self.half_dimensions()
    }

    /// Returns the upper-right corner.
    #[inline]
    pub fn max(&self) -> Point2<F> {
        self.center + self.half_dimensions()
    }

    /// Returns the area of the rectangle.
    #[inline]
    pub fn area(&self) -> F {
        self.dimensions.x * self.dimensions.y
    }

    /// Checks if a point is inside the rectangle (including boundary).
    #[inline]
    pub fn contains_point(&self, point: Point2<F>) -> bool {
        let (min, max) = (self.min(), self.max());
        min.x <= point.x && point.x <= max.x && min.y <= point.y && point.y <= max.y
    }

    /// Returns the point of the rectangle closest to `point`.
    #[inline]
    pub fn closest_point(&self, point: Point2<F>) -> Point2<F> {
        point.clamp(self.min(), self.max())
    }
}

impl<F: fmt::Display> fmt::Display for Rect<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect {{ center: {}, dimensions: {} }}",
            self.center, self.dimensions
        )
    }
}
