//! Bounding sphere.

use crate::error::GeomError;
use crate::primitives::Point3;
use num_traits::Float;
use std::fmt;

/// A sphere defined by center and radius.
///
/// The radius is always positive: construction and [`Sphere::set_radius`]
/// reject zero, negative and NaN radii, so predicates never see a
/// degenerate sphere.
///
/// # Example
///
/// ```
/// use intersectum::bounds::Sphere;
/// use intersectum::Point3;
///
/// let sphere = Sphere::new(Point3::new(0.0, 0.0, 0.0), 5.0).unwrap();
/// assert_eq!(sphere.radius(), 5.0);
/// assert!(Sphere::new(Point3::new(0.0, 0.0, 0.0), 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere<F> {
    center: Point3<F>,
    radius: F,
}

impl<F: Float> Sphere<F> {
    /// Creates a sphere, rejecting a radius that is not strictly positive.
    pub fn new(center: Point3<F>, radius: F) -> Result<Self, GeomError> {
        Ok(Self {
            center,
            radius: validate_radius(radius)?,
        })
    }

    /// Returns the center of the sphere.
    #[inline]
    pub fn center(&self) -> Point3<F> {
        self.center
    }

    /// Returns the radius of the sphere.
    #[inline]
    pub fn radius(&self) -> F {
        self.radius
    }

    /// Moves the sphere.
    #[inline]
    pub fn set_center(&mut self, center: Point3<F>) {
        self.center = center;
    }

    /// Changes the radius.
    ///
    /// On error the sphere is left unchanged.
    pub fn set_radius(&mut self, radius: F) -> Result<(), GeomError> {
        self.radius = validate_radius(radius)?;
        Ok(())
    }

    /// Returns the point of the solid sphere closest to `point`.
    ///
    /// Points inside or on the sphere are returned unchanged; points outside
    /// are projected onto the surface.
    pub fn closest_point(&self, point: Point3<F>) -> Point3<F> {
        let offset = point - self.center;
        if offset.magnitude_squared() <= self.radius * self.radius {
            return point;
        }
        self.center + offset * (self.radius / offset.magnitude())
    }

    /// Squared distance from `point` to the solid sphere, zero inside.
    #[inline]
    pub fn distance_squared_to_point(&self, point: Point3<F>) -> F {
        point.distance_squared(self.closest_point(point))
    }
}

/// NaN fails the `>` comparison and is rejected along with zero and negatives.
pub(crate) fn validate_radius<F: Float>(radius: F) -> Result<F, GeomError> {
    if radius > F::zero() {
        Ok(radius)
    } else {
        Err(GeomError::NonPositiveRadius {
            radius: radius.to_f64().unwrap_or(f64::NAN),
        })
    }
}

impl<F: fmt::Display> fmt::Display for Sphere<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sphere {{ center: {}, radius: {} }}", self.center, self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::bounds::Aabb3;

    #[test]
    fn test_new() {
        let s: Sphere<f64> = Sphere::new(Point3::new(1.0, 2.0, 3.0), 4.0).unwrap();
        assert_eq!(s.center(), Point3::new(1.0, 2.0, 3.0));
        assert_eq!(s.radius(), 4.0);
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        let c: Point3<f64> = Point3::origin();
        assert_eq!(
            Sphere::new(c, 0.0),
            Err(GeomError::NonPositiveRadius { radius: 0.0 })
        );
        assert_eq!(
            Sphere::new(c, -2.0),
            Err(GeomError::NonPositiveRadius { radius: -2.0 })
        );
        assert!(Sphere::new(c, f64::NAN).is_err());
    }

    #[test]
    fn test_set_radius() {
        let mut s: Sphere<f32> = Sphere::new(Point3::origin(), 1.0).unwrap();
        s.set_radius(5.0).unwrap();
        assert_eq!(s.radius(), 5.0);

        // Failed mutation leaves the sphere untouched
        assert!(s.set_radius(-1.0).is_err());
        assert_eq!(s.radius(), 5.0);
    }

    #[test]
    fn test_set_center() {
        let mut s: Sphere<f64> = Sphere::new(Point3::origin(), 1.0).unwrap();
        s.set_center(Point3::new(-1.0, 0.0, 2.0));
        assert_eq!(s.center(), Point3::new(-1.0, 0.0, 2.0));
    }

    #[test]
    fn test_closest_point() {
        let s: Sphere<f64> = Sphere::new(Point3::new(1.0, 1.0, 1.0), 2.0).unwrap();

        let p = s.closest_point(Point3::new(1.0, 11.0, 1.0));
        assert_relative_eq!(p.y, 3.0, epsilon = 1e-12);

        // Inside and surface points are their own closest point
        let inside = Point3::new(1.0, 1.0, 1.5);
        assert_eq!(s.closest_point(inside), inside);
        assert_eq!(s.closest_point(s.center()), s.center());
        assert_eq!(s.closest_point(Point3::new(3.0, 1.0, 1.0)), Point3::new(3.0, 1.0, 1.0));
    }

    #[test]
    fn test_closest_point_matches_aabb_for_inside_points() {
        let s: Sphere<f64> = Sphere::new(Point3::origin(), 2.0).unwrap();
        let aabb = Aabb3::new(Point3::new(-2.0, -2.0, -2.0), Point3::new(2.0, 2.0, 2.0));
        let p = Point3::new(0.5, 0.0, 0.0);

        assert_eq!(s.closest_point(p), aabb.closest_point(p));
        assert_eq!(s.distance_squared_to_point(p), 0.0);
        assert_relative_eq!(
            s.distance_squared_to_point(Point3::new(5.0, 0.0, 0.0)),
            9.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_display() {
        let s: Sphere<f64> = Sphere::new(Point3::origin(), 0.5).unwrap();
        assert_eq!(s.to_string(), "Sphere { center: (0, 0, 0), radius: 0.5 }");
    }
}
