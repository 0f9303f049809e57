//! Infinite plane in 3D space.

use crate::error::GeomError;
use crate::primitives::{Point3, Vec3};
use num_traits::Float;
use std::fmt;

/// A plane `normal · x = distance`.
///
/// The normal is expected to be unit length. The positive half-space is the
/// side the normal points to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane<F> {
    /// Unit normal of the plane.
    pub normal: Vec3<F>,
    /// Signed distance of the plane from the origin along `normal`.
    pub distance: F,
}

impl<F: Float> Plane<F> {
    /// Creates a plane from a unit normal and signed distance.
    ///
    /// Does not normalize `normal`.
    #[inline]
    pub fn new(normal: Vec3<F>, distance: F) -> Self {
        Self { normal, distance }
    }

    /// Creates a plane from a unit normal and any point on the plane.
    #[inline]
    pub fn from_point_normal(point: Point3<F>, normal: Vec3<F>) -> Self {
        Self {
            normal,
            distance: normal.dot(point.to_vec()),
        }
    }

    /// Creates the plane through three points.
    ///
    /// The normal follows the right-hand rule for `a → b → c`.
    ///
    /// # Errors
    ///
    /// Returns [`GeomError::DegenerateInput`] if the points are coincident or
    /// collinear.
    pub fn from_points(a: Point3<F>, b: Point3<F>, c: Point3<F>) -> Result<Self, GeomError> {
        let normal = (b - a)
            .cross(c - a)
            .normalize()
            .ok_or(GeomError::DegenerateInput)?;
        Ok(Self::from_point_normal(a, normal))
    }

    /// Signed distance from `point` to the plane.
    ///
    /// Positive in front of the plane (on the normal's side), negative behind.
    #[inline]
    pub fn signed_distance(self, point: Point3<F>) -> F {
        self.normal.dot(point.to_vec()) - self.distance
    }

    /// Projects `point` onto the plane.
    #[inline]
    pub fn closest_point(self, point: Point3<F>) -> Point3<F> {
        point - self.normal * self.signed_distance(point)
    }

    /// Returns the same plane with the normal reversed.
    #[inline]
    pub fn flipped(self) -> Self {
        Self {
            normal: -self.normal,
            distance: -self.distance,
        }
    }
}

impl<F: fmt::Display> fmt::Display for Plane<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Plane {{ normal: {}, distance: {} }}",
            self.normal, self.distance
        )
    }
}
