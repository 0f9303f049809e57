//! Plane vs. volume tests and half-space classification.
//!
//! A volume intersects a plane when it touches or crosses it. The half-space
//! tests [`above_plane`] and [`below_plane`] are inclusive: a sphere that
//! straddles the plane is both above and below it. Use [`classify_sphere`]
//! when an exclusive answer is needed.

use crate::bounds::{Aabb3, Obb3, Plane, Sphere};
use num_traits::Float;

/// Which side of a plane a volume lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneSide {
    /// Entirely in the positive half-space, not touching the plane.
    Front,
    /// Entirely in the negative half-space, not touching the plane.
    Back,
    /// Touching or crossing the plane.
    Straddling,
}

/// Returns `true` if the box touches or crosses the plane.
///
/// Projects the box's half-extents onto the plane normal and compares the
/// resulting radius with the signed distance of the box center.
#[inline]
pub fn intersects_plane_aabb<F: Float>(plane: &Plane<F>, aabb: &Aabb3<F>) -> bool {
    let radius = aabb.half_extents().dot(plane.normal.abs());
    plane.signed_distance(aabb.center()).abs() <= radius
}

/// Returns `true` if the oriented box touches or crosses the plane.
#[inline]
pub fn intersects_plane_obb<F: Float>(plane: &Plane<F>, obb: &Obb3<F>) -> bool {
    let radius = obb.projected_radius(plane.normal);
    plane.signed_distance(obb.center).abs() <= radius
}

/// Returns `true` if the sphere touches or crosses the plane.
#[inline]
pub fn intersects_plane_sphere<F: Float>(plane: &Plane<F>, sphere: &Sphere<F>) -> bool {
    plane.signed_distance(sphere.center()).abs() <= sphere.radius()
}

/// Argument-order twin of [`intersects_plane_sphere`].
#[inline]
pub fn intersects_sphere_plane<F: Float>(sphere: &Sphere<F>, plane: &Plane<F>) -> bool {
    intersects_plane_sphere(plane, sphere)
}

/// Returns `true` if the sphere intersects the plane or lies in its positive
/// half-space.
#[inline]
pub fn above_plane<F: Float>(plane: &Plane<F>, sphere: &Sphere<F>) -> bool {
    plane.signed_distance(sphere.center()) >= -sphere.radius()
}

/// Returns `true` if the sphere intersects the plane or lies in its negative
/// half-space.
#[inline]
pub fn below_plane<F: Float>(plane: &Plane<F>, sphere: &Sphere<F>) -> bool {
    plane.signed_distance(sphere.center()) <= sphere.radius()
}

/// Classifies a sphere against a plane with mutually exclusive outcomes.
///
/// `Front` iff `above_plane && !below_plane`, `Back` iff
/// `below_plane && !above_plane`, otherwise `Straddling`.
pub fn classify_sphere<F: Float>(plane: &Plane<F>, sphere: &Sphere<F>) -> PlaneSide {
    let d = plane.signed_distance(sphere.center());
    let r = sphere.radius();
    if d > r {
        PlaneSide::Front
    } else if d < -r {
        PlaneSide::Back
    } else {
        PlaneSide::Straddling
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{Point3, Vec3};
    use std::f64::consts::FRAC_1_SQRT_2;

    fn xz_plane() -> Plane<f64> {
        Plane::new(Vec3::unit_y(), 0.0)
    }

    fn sphere(x: f64, y: f64, z: f64, r: f64) -> Sphere<f64> {
        Sphere::new(Point3::new(x, y, z), r).unwrap()
    }

    #[test]
    fn test_plane_aabb() {
        let p1 = Plane::from_point_normal(Point3::new(0.0, 0.5, 0.0), Vec3::unit_y());
        let p2 = Plane::from_point_normal(Point3::new(0.0, 1.5, 0.0), Vec3::unit_y());
        let aabb: Aabb3<f32> = Aabb3::new(Point3::new(1.0, 1.0, 1.0), Point3::new(3.0, 3.0, 3.0));

        assert!(!intersects_plane_aabb(&p1, &aabb));
        assert!(intersects_plane_aabb(&p2, &aabb));
    }

    #[test]
    fn test_plane_aabb_touching() {
        let aabb: Aabb3<f64> = Aabb3::new(Point3::new(1.0, 1.0, 1.0), Point3::new(3.0, 3.0, 3.0));
        assert!(intersects_plane_aabb(&Plane::new(Vec3::unit_y(), 1.0), &aabb));
        assert!(intersects_plane_aabb(&Plane::new(Vec3::unit_y(), 3.0), &aabb));
        assert!(!intersects_plane_aabb(&Plane::new(Vec3::unit_y(), 3.001), &aabb));
    }

    #[test]
    fn test_plane_aabb_oblique() {
        // The corner (1, 1, 1) of the unit box lies on x + y + z = 3
        let n = Vec3::new(1.0, 1.0, 1.0).normalize().unwrap();
        let aabb: Aabb3<f64> = Aabb3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));

        let touching = Plane::from_point_normal(Point3::new(0.999, 1.0, 1.0), n);
        let missing = Plane::from_point_normal(Point3::new(1.001, 1.0, 1.0), n);
        assert!(intersects_plane_aabb(&touching, &aabb));
        assert!(!intersects_plane_aabb(&missing, &aabb));
    }

    #[test]
    fn test_plane_obb() {
        let p1 = Plane::from_point_normal(Point3::new(0.0, 0.5, 0.0), Vec3::unit_y());
        let p2 = Plane::from_point_normal(Point3::new(0.0, 1.5, 0.0), Vec3::unit_y());
        let obb: Obb3<f32> =
            Aabb3::new(Point3::new(1.0, 1.0, 1.0), Point3::new(3.0, 3.0, 3.0)).into();

        assert!(!intersects_plane_obb(&p1, &obb));
        assert!(intersects_plane_obb(&p2, &obb));
    }

    #[test]
    fn test_plane_obb_rotated() {
        // Unit-half-extent cube rotated 45 degrees about z reaches sqrt(2) in y
        let c = FRAC_1_SQRT_2;
        let obb: Obb3<f64> = Obb3::new(
            Point3::origin(),
            [Vec3::new(c, c, 0.0), Vec3::new(-c, c, 0.0), Vec3::unit_z()],
            Vec3::new(1.0, 1.0, 1.0),
        );

        assert!(intersects_plane_obb(&Plane::new(Vec3::unit_y(), 1.4), &obb));
        assert!(!intersects_plane_obb(&Plane::new(Vec3::unit_y(), 1.42), &obb));
        assert!(!intersects_plane_obb(&Plane::new(Vec3::unit_y(), -1.42), &obb));
    }

    #[test]
    fn test_sphere_above_plane() {
        let plane = xz_plane();
        let s = sphere(0.0, 3.0, 0.0, 1.0);

        assert!(above_plane(&plane, &s));
        assert!(!below_plane(&plane, &s));
        assert!(!intersects_plane_sphere(&plane, &s));
        assert!(!intersects_sphere_plane(&s, &plane));
        assert_eq!(classify_sphere(&plane, &s), PlaneSide::Front);
    }

    #[test]
    fn test_sphere_below_plane() {
        let plane = xz_plane();
        let s = sphere(2.0, -3.0, 1.0, 1.0);

        assert!(!above_plane(&plane, &s));
        assert!(below_plane(&plane, &s));
        assert!(!intersects_plane_sphere(&plane, &s));
        assert_eq!(classify_sphere(&plane, &s), PlaneSide::Back);
    }

    #[test]
    fn test_sphere_straddling_plane() {
        let plane = xz_plane();
        let s = sphere(0.0, 0.5, 0.0, 1.0);

        assert!(above_plane(&plane, &s));
        assert!(below_plane(&plane, &s));
        assert!(intersects_plane_sphere(&plane, &s));
        assert!(intersects_sphere_plane(&s, &plane));
        assert_eq!(classify_sphere(&plane, &s), PlaneSide::Straddling);
    }

    #[test]
    fn test_sphere_touching_plane() {
        let plane = xz_plane();
        let resting = sphere(0.0, 1.0, 0.0, 1.0);

        assert!(intersects_plane_sphere(&plane, &resting));
        assert!(above_plane(&plane, &resting));
        assert!(below_plane(&plane, &resting));
        assert_eq!(classify_sphere(&plane, &resting), PlaneSide::Straddling);
    }

    #[test]
    fn test_offset_plane() {
        // Plane y = 2; sphere at y = 0.5 lies entirely below it
        let plane: Plane<f64> = Plane::new(Vec3::unit_y(), 2.0);
        let s = sphere(0.0, 0.5, 0.0, 1.0);

        assert!(!intersects_plane_sphere(&plane, &s));
        assert!(!above_plane(&plane, &s));
        assert!(below_plane(&plane, &s));
    }

    #[test]
    fn test_flipped_plane_swaps_sides() {
        let plane = xz_plane();
        let s = sphere(0.0, 3.0, 0.0, 1.0);

        assert_eq!(above_plane(&plane, &s), below_plane(&plane.flipped(), &s));
        assert_eq!(classify_sphere(&plane.flipped(), &s), PlaneSide::Back);
    }
}
