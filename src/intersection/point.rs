//! Point containment tests.
//!
//! All tests are closed: a point on the boundary counts as inside.

use crate::bounds::{Aabb3, Obb3, Sphere};
use crate::primitives::Point3;
use num_traits::Float;

/// Returns `true` if `point` lies inside or on the boundary of `aabb`.
#[inline]
pub fn point_inside_aabb<F: Float>(aabb: &Aabb3<F>, point: Point3<F>) -> bool {
    (0..3).all(|i| aabb.min[i] <= point[i] && point[i] <= aabb.max[i])
}

/// Returns `true` if `point` lies inside or on the boundary of `obb`.
///
/// The offset from the center is projected onto each box axis and compared
/// against the half-extent of that axis.
#[inline]
pub fn point_inside_obb<F: Float>(obb: &Obb3<F>, point: Point3<F>) -> bool {
    let local = obb.to_local(point);
    (0..3).all(|k| local[k].abs() <= obb.half_extents[k])
}

/// Returns `true` if `point` lies inside or on the surface of `sphere`.
///
/// Compares squared distances, so no square root is taken and a point
/// exactly on the surface is classified exactly.
#[inline]
pub fn point_inside_sphere<F: Float>(sphere: &Sphere<F>, point: Point3<F>) -> bool {
    let r = sphere.radius();
    sphere.center().distance_squared(point) <= r * r
}
