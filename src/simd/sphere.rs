//! SIMD sphere batches.
//!
//! Four `f32` spheres stored in structure-of-arrays form so that a plane can
//! be tested against all of them at once.

use wide::{f32x4, CmpGe, CmpLe};

use crate::bounds::{Plane, Sphere};
use crate::primitives::Point3;

/// A batch of 4 3D points using SIMD.
#[derive(Clone, Copy, Debug)]
pub struct Point3x4 {
    pub x: f32x4,
    pub y: f32x4,
    pub z: f32x4,
}

impl Point3x4 {
    /// Creates a new batch of points.
    #[inline]
    pub fn new(x: f32x4, y: f32x4, z: f32x4) -> Self {
        Self { x, y, z }
    }

    /// Creates a batch from 4 individual points.
    #[inline]
    pub fn from_points(
        p0: Point3<f32>,
        p1: Point3<f32>,
        p2: Point3<f32>,
        p3: Point3<f32>,
    ) -> Self {
        Self {
            x: f32x4::new([p0.x, p1.x, p2.x, p3.x]),
            y: f32x4::new([p0.y, p1.y, p2.y, p3.y]),
            z: f32x4::new([p0.z, p1.z, p2.z, p3.z]),
        }
    }

    /// Signed distance of each point to `plane`.
    #[inline]
    pub fn signed_distances(self, plane: &Plane<f32>) -> f32x4 {
        let nx = f32x4::splat(plane.normal.x);
        let ny = f32x4::splat(plane.normal.y);
        let nz = f32x4::splat(plane.normal.z);
        nx * self.x + ny * self.y + nz * self.z - f32x4::splat(plane.distance)
    }

    /// Extracts the 4 points as an array.
    #[inline]
    pub fn to_array(self) -> [Point3<f32>; 4] {
        let x = self.x.to_array();
        let y = self.y.to_array();
        let z = self.z.to_array();
        [
            Point3::new(x[0], y[0], z[0]),
            Point3::new(x[1], y[1], z[1]),
            Point3::new(x[2], y[2], z[2]),
            Point3::new(x[3], y[3], z[3]),
        ]
    }
}

/// A batch of 4 spheres using SIMD.
#[derive(Clone, Copy, Debug)]
pub struct Sphere3x4 {
    pub centers: Point3x4,
    pub radii: f32x4,
}

impl Sphere3x4 {
    /// Creates a batch from 4 individual spheres.
    #[inline]
    pub fn from_spheres(
        s0: Sphere<f32>,
        s1: Sphere<f32>,
        s2: Sphere<f32>,
        s3: Sphere<f32>,
    ) -> Self {
        Self {
            centers: Point3x4::from_points(s0.center(), s1.center(), s2.center(), s3.center()),
            radii: f32x4::new([s0.radius(), s1.radius(), s2.radius(), s3.radius()]),
        }
    }

    /// Creates a batch from the first 4 spheres of a slice.
    ///
    /// # Panics
    ///
    /// Panics if the slice has fewer than 4 elements.
    #[inline]
    pub fn from_slice(spheres: &[Sphere<f32>]) -> Self {
        Self::from_spheres(spheres[0], spheres[1], spheres[2], spheres[3])
    }

    /// Signed distance of each sphere center to `plane`.
    #[inline]
    pub fn signed_distances(self, plane: &Plane<f32>) -> f32x4 {
        self.centers.signed_distances(plane)
    }

    /// Lane mask (bit `j` for sphere `j`) of the spheres above or touching `plane`.
    #[inline]
    pub fn above_mask(self, plane: &Plane<f32>) -> i32 {
        self.signed_distances(plane).cmp_ge(-self.radii).move_mask()
    }

    /// Lane mask of the spheres below or touching `plane`.
    #[inline]
    pub fn below_mask(self, plane: &Plane<f32>) -> i32 {
        self.signed_distances(plane).cmp_le(self.radii).move_mask()
    }

    /// Lane mask of the spheres touching or crossing `plane`.
    #[inline]
    pub fn intersecting_mask(self, plane: &Plane<f32>) -> i32 {
        self.signed_distances(plane).abs().cmp_le(self.radii).move_mask()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Vec3;

    fn sphere(x: f32, y: f32, z: f32, r: f32) -> Sphere<f32> {
        Sphere::new(Point3::new(x, y, z), r).unwrap()
    }

    #[test]
    fn test_point_batch_round_trip_order() {
        let pts = [
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(4.0, 5.0, 6.0),
            Point3::new(7.0, 8.0, 9.0),
            Point3::new(-1.0, -2.0, -3.0),
        ];
        let batch = Point3x4::from_points(pts[0], pts[1], pts[2], pts[3]);
        assert_eq!(batch.to_array(), pts);
    }

    #[test]
    fn test_signed_distances() {
        let plane = Plane::new(Vec3::unit_y(), 1.0);
        let batch = Sphere3x4::from_spheres(
            sphere(0.0, 3.0, 0.0, 1.0),
            sphere(5.0, 1.0, 0.0, 1.0),
            sphere(0.0, -2.0, 9.0, 1.0),
            sphere(0.0, 1.5, 0.0, 1.0),
        );
        assert_eq!(batch.signed_distances(&plane).to_array(), [2.0, 0.0, -3.0, 0.5]);
    }

    #[test]
    fn test_masks() {
        let plane = Plane::new(Vec3::unit_y(), 0.0);
        let batch = Sphere3x4::from_spheres(
            sphere(0.0, 3.0, 0.0, 1.0),  // Front
            sphere(0.0, -3.0, 0.0, 1.0), // Back
            sphere(0.0, 0.5, 0.0, 1.0),  // Straddling
            sphere(0.0, -1.0, 0.0, 1.0), // Touching from below
        );

        assert_eq!(batch.above_mask(&plane), 0b1101);
        assert_eq!(batch.below_mask(&plane), 0b1110);
        assert_eq!(batch.intersecting_mask(&plane), 0b1100);
    }
}
