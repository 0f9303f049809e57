//! Volume vs. volume overlap tests.
//!
//! Every test is symmetric in its arguments and treats touching volumes as
//! intersecting.

use crate::bounds::{Aabb3, Obb3, Sphere};
use crate::primitives::Vec3;
use num_traits::Float;

/// Cross-product axes shorter than this are skipped by the OBB test.
///
/// Box axes are unit length, so the length of `a × b` is the sine of the
/// angle between them. Below this threshold the two source axes are parallel
/// for all practical purposes and their cross product carries no direction.
pub const DEGENERATE_AXIS_EPSILON: f64 = 1e-6;

/// Returns `true` if the two boxes overlap on every axis.
#[inline]
pub fn intersects_aabb_aabb<F: Float>(a: &Aabb3<F>, b: &Aabb3<F>) -> bool {
    (0..3).all(|i| a.min[i] <= b.max[i] && b.min[i] <= a.max[i])
}

/// Returns `true` if the two spheres overlap.
///
/// Compares the squared center distance against the squared radius sum.
#[inline]
pub fn intersects_sphere_sphere<F: Float>(a: &Sphere<F>, b: &Sphere<F>) -> bool {
    let r = a.radius() + b.radius();
    a.center().distance_squared(b.center()) <= r * r
}

/// Returns `true` if the two oriented boxes overlap.
///
/// Separating axis test over the 15 candidate axes of two boxes: the three
/// face normals of each box and the nine cross products of one box's axes
/// with the other's. Cross products of near-parallel axes (see
/// [`DEGENERATE_AXIS_EPSILON`]) are skipped.
pub fn intersects_obb_obb<F: Float>(a: &Obb3<F>, b: &Obb3<F>) -> bool {
    !separated_by_face_axes(a, b) && !cross_axes(a, b).any(|axis| separated_along(a, b, axis))
}

/// Returns `true` if the box and the sphere overlap.
///
/// Finds the point of the box closest to the sphere center and checks it
/// against the radius.
#[inline]
pub fn intersects_aabb_sphere<F: Float>(aabb: &Aabb3<F>, sphere: &Sphere<F>) -> bool {
    let r = sphere.radius();
    aabb.distance_squared_to_point(sphere.center()) <= r * r
}

/// Returns `true` if the oriented box and the sphere overlap.
#[inline]
pub fn intersects_obb_sphere<F: Float>(obb: &Obb3<F>, sphere: &Sphere<F>) -> bool {
    let r = sphere.radius();
    obb.distance_squared_to_point(sphere.center()) <= r * r
}

/// Returns `true` if the axis-aligned box and the oriented box overlap.
#[inline]
pub fn intersects_aabb_obb<F: Float>(aabb: &Aabb3<F>, obb: &Obb3<F>) -> bool {
    intersects_obb_obb(&Obb3::from(*aabb), obb)
}

/// Returns `true` if the projections of `a` and `b` onto `axis` are disjoint.
///
/// Works with an unnormalized axis: both sides of the comparison scale with
/// its length.
#[inline]
fn separated_along<F: Float>(a: &Obb3<F>, b: &Obb3<F>, axis: Vec3<F>) -> bool {
    let distance = (b.center - a.center).dot(axis).abs();
    distance > a.projected_radius(axis) + b.projected_radius(axis)
}

fn separated_by_face_axes<F: Float>(a: &Obb3<F>, b: &Obb3<F>) -> bool {
    a.axes
        .iter()
        .chain(b.axes.iter())
        .any(|&axis| separated_along(a, b, axis))
}

/// Edge-edge candidate axes with the degenerate ones filtered out.
fn cross_axes<'a, F: Float>(
    a: &'a Obb3<F>,
    b: &'a Obb3<F>,
) -> impl Iterator<Item = Vec3<F>> + 'a {
    let threshold = F::from(DEGENERATE_AXIS_EPSILON * DEGENERATE_AXIS_EPSILON)
        .unwrap_or_else(F::epsilon);
    a.axes
        .iter()
        .flat_map(move |&ea| b.axes.iter().map(move |&eb| ea.cross(eb)))
        .filter(move |axis| axis.magnitude_squared() >= threshold)
}
