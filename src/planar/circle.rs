//! 2D circle with a validated radius.

use crate::bounds::validate_radius;
use crate::error::GeomError;
use crate::primitives::Point2;
use num_traits::Float;
use std::fmt;

/// A 2D circle defined by center and radius.
///
/// Like [`Sphere`](crate::bounds::Sphere), the radius is always strictly
/// positive.
///
/// # Example
///
/// ```
/// use intersectum::planar::Circle;
/// use intersectum::Point2;
///
/// let circle = Circle::new(Point2::new(1.0, 1.0), 1.0).unwrap();
/// assert!(circle.contains_point(Point2::new(2.0, 1.0)));
/// assert!(Circle::new(Point2::new(0.0, 0.0), -1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle<F> {
    center: Point2<F>,
    radius: F,
}

impl<F: Float> Circle<F> {
    /// Creates a circle, rejecting a radius that is not strictly positive.
    pub fn new(center: Point2<F>, radius: F) -> Result<Self, GeomError> {
        Ok(Self {
            center,
            radius: validate_radius(radius)?,
        })
    }

    /// Returns the center of the circle.
    #[inline]
    pub fn center(&self) -> Point2<F> {
        self.center
    }

    /// Returns the radius of the circle.
    #[inline]
    pub fn radius(&self) -> F {
        self.radius
    }

    /// Moves the circle.
    #[inline]
    pub fn set_center(&mut self, center: Point2<F>) {
        self.center = center;
    }

    /// Changes the radius. On error the circle is left unchanged.
    pub fn set_radius(&mut self, radius: F) -> Result<(), GeomError> {
        self.radius = validate_radius(radius)?;
        Ok(())
    }

    /// Returns the area of the circle.
    #[inline]
    pub fn area(&self) -> F {
        F::from(std::f64::consts::PI).unwrap_or_else(F::nan) * self.radius * self.radius
    }

    /// Returns the circumference of the circle.
    #[inline]
    pub fn circumference(&self) -> F {
        F::from(std::f64::consts::TAU).unwrap_or_else(F::nan) * self.radius
    }

    /// Checks if a point is inside the circle (including boundary).
    #[inline]
    pub fn contains_point(&self, point: Point2<F>) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }
}

impl<F: fmt::Display> fmt::Display for Circle<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle {{ center: {}, radius: {} }}", self.center, self.radius)
    }
}
