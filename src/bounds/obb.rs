//! Oriented bounding box.
//!
//! An OBB provides a tighter fit than an AABB for rotated or elongated shapes.
//! It is stored as a center, three orthonormal axes and one half-extent per
//! axis.
//!
//! # Example
//!
//! ```
//! use intersectum::bounds::{Aabb3, Obb3};
//! use intersectum::Point3;
//!
//! let aabb = Aabb3::new(Point3::new(1.0, 1.0, 1.0), Point3::new(3.0, 3.0, 3.0));
//! let obb = Obb3::from(aabb);
//! assert_eq!(obb.center, Point3::new(2.0, 2.0, 2.0));
//! assert_eq!(obb.volume(), 8.0);
//! ```

use super::Aabb3;
use crate::primitives::{Point3, Vec3};
use num_traits::Float;
use std::fmt;

/// A 3D oriented bounding box.
///
/// The axes must be unit length and mutually orthogonal, and the
/// half-extents positive. Neither is checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obb3<F> {
    /// Center of the OBB.
    pub center: Point3<F>,
    /// Local x, y and z axes in world space.
    pub axes: [Vec3<F>; 3],
    /// Half-size along each local axis, indexed like `axes`.
    pub half_extents: Vec3<F>,
}

impl<F: Float> Obb3<F> {
    /// Creates a new OBB with the given parameters.
    #[inline]
    pub fn new(center: Point3<F>, axes: [Vec3<F>; 3], half_extents: Vec3<F>) -> Self {
        Self {
            center,
            axes,
            half_extents,
        }
    }

    /// Creates an OBB whose axes are the world axes.
    #[inline]
    pub fn axis_aligned(center: Point3<F>, half_extents: Vec3<F>) -> Self {
        Self {
            center,
            axes: [Vec3::unit_x(), Vec3::unit_y(), Vec3::unit_z()],
            half_extents,
        }
    }

    /// Returns the volume of the OBB.
    #[inline]
    pub fn volume(self) -> F {
        let full = self.half_extents * (F::one() + F::one());
        full.x * full.y * full.z
    }

    /// Expresses `p` in the box's local frame (coordinates along each axis,
    /// relative to the center).
    #[inline]
    pub fn to_local(self, p: Point3<F>) -> Vec3<F> {
        let d = p - self.center;
        Vec3::new(
            d.dot(self.axes[0]),
            d.dot(self.axes[1]),
            d.dot(self.axes[2]),
        )
    }

    /// Maps local coordinates back into world space.
    #[inline]
    pub fn to_world(self, local: Vec3<F>) -> Point3<F> {
        self.center + self.axes[0] * local.x + self.axes[1] * local.y + self.axes[2] * local.z
    }

    /// Radius of the box projected onto `axis`.
    ///
    /// Computes `Σ |axes[k] · axis| * half_extents[k]`. The result scales with
    /// the length of `axis`, so it is comparable with `d · axis` for any
    /// offset `d` without normalizing.
    #[inline]
    pub fn projected_radius(self, axis: Vec3<F>) -> F {
        self.axes[0].dot(axis).abs() * self.half_extents.x
            + self.axes[1].dot(axis).abs() * self.half_extents.y
            + self.axes[2].dot(axis).abs() * self.half_extents.z
    }

    /// Returns the eight corners of the box.
    ///
    /// Bit `i` of the corner index selects the positive (set) or negative
    /// (clear) side of local axis `i`.
    pub fn corners(self) -> [Point3<F>; 8] {
        let h = self.half_extents;
        let mut corners = [self.center; 8];
        for (i, corner) in corners.iter_mut().enumerate() {
            let local = Vec3::new(
                if i & 1 != 0 { h.x } else { -h.x },
                if i & 2 != 0 { h.y } else { -h.y },
                if i & 4 != 0 { h.z } else { -h.z },
            );
            *corner = self.to_world(local);
        }
        corners
    }

    /// Returns the point of the box closest to `p`.
    ///
    /// Returns `p` itself (up to rounding) when it lies inside the box.
    pub fn closest_point(self, p: Point3<F>) -> Point3<F> {
        let local = self.to_local(p);
        let h = self.half_extents;
        let clamped = Vec3::new(
            local.x.max(-h.x).min(h.x),
            local.y.max(-h.y).min(h.y),
            local.z.max(-h.z).min(h.z),
        );
        self.to_world(clamped)
    }

    /// Returns the squared distance from a point to this OBB.
    ///
    /// Returns 0 if the point is inside.
    pub fn distance_squared_to_point(self, p: Point3<F>) -> F {
        let local = self.to_local(p);
        let h = self.half_extents;
        let dx = (local.x.abs() - h.x).max(F::zero());
        let dy = (local.y.abs() - h.y).max(F::zero());
        let dz = (local.z.abs() - h.z).max(F::zero());
        dx * dx + dy * dy + dz * dz
    }
}

impl<F: Float> From<Aabb3<F>> for Obb3<F> {
    fn from(aabb: Aabb3<F>) -> Self {
        Self::axis_aligned(aabb.center(), aabb.half_extents())
    }
}

impl<F: fmt::Display> fmt::Display for Obb3<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Obb3 {{ center: {}, axes: [{}, {}, {}], half_extents: {} }}",
            self.center, self.axes[0], self.axes[1], self.axes[2], self.half_extents
        )
    }
}
