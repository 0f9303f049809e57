//! Axis-aligned bounding box.

use crate::primitives::{Point3, Vec3};
use num_traits::Float;
use std::fmt;

/// A 3D axis-aligned bounding box.
///
/// Defined by minimum and maximum corners. Every predicate in this crate
/// assumes `min[i] <= max[i]` on all three axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb3<F> {
    /// Minimum corner (smallest x, y and z values).
    pub min: Point3<F>,
    /// Maximum corner (largest x, y and z values).
    pub max: Point3<F>,
}

impl<F: Float> Aabb3<F> {
    /// Creates a new AABB from min and max corners.
    ///
    /// Does not validate that min <= max.
    #[inline]
    pub fn new(min: Point3<F>, max: Point3<F>) -> Self {
        Self { min, max }
    }

    /// Creates an AABB from two arbitrary corners.
    ///
    /// Correctly handles corners in any orientation.
    #[inline]
    pub fn from_corners(a: Point3<F>, b: Point3<F>) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Creates an AABB from its center and half-extents.
    ///
    /// Negative half-extents are folded to their absolute value.
    #[inline]
    pub fn from_center_half_extents(center: Point3<F>, half_extents: Vec3<F>) -> Self {
        let h = half_extents.abs();
        Self {
            min: center - h,
            max: center + h,
        }
    }

    /// Creates an AABB from an iterator of points.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point3<F>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;

        Some(iter.fold(Self::new(first, first), |aabb, p| Self {
            min: aabb.min.min(p),
            max: aabb.max.max(p),
        }))
    }

    /// Returns the center point of the AABB.
    #[inline]
    pub fn center(self) -> Point3<F> {
        self.min.midpoint(self.max)
    }

    /// Returns the full size along each axis.
    #[inline]
    pub fn extents(self) -> Vec3<F> {
        self.max - self.min
    }

    /// Returns half the size along each axis.
    #[inline]
    pub fn half_extents(self) -> Vec3<F> {
        self.extents() / (F::one() + F::one())
    }

    /// Returns the volume of the AABB.
    #[inline]
    pub fn volume(self) -> F {
        let e = self.extents();
        e.x * e.y * e.z
    }

    /// Returns the eight corners of the box.
    ///
    /// Bit `i` of the corner index selects `max` (set) or `min` (clear) on axis `i`.
    pub fn corners(self) -> [Point3<F>; 8] {
        let mut corners = [self.min; 8];
        for (i, corner) in corners.iter_mut().enumerate() {
            *corner = Point3::new(
                if i & 1 != 0 { self.max.x } else { self.min.x },
                if i & 2 != 0 { self.max.y } else { self.min.y },
                if i & 4 != 0 { self.max.z } else { self.min.z },
            );
        }
        corners
    }

    /// Returns the point of the box closest to `p`.
    ///
    /// Returns `p` itself when it lies inside the box.
    #[inline]
    pub fn closest_point(self, p: Point3<F>) -> Point3<F> {
        p.clamp(self.min, self.max)
    }

    /// Returns the squared distance from a point to this AABB.
    ///
    /// Returns 0 if the point is inside the AABB.
    #[inline]
    pub fn distance_squared_to_point(self, p: Point3<F>) -> F {
        p.distance_squared(self.closest_point(p))
    }
}

impl<F: fmt::Display> fmt::Display for Aabb3<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Aabb3 {{ min: {}, max: {} }}", self.min, self.max)
    }
}
