//! Intersection and containment predicates.
//!
//! Every predicate is a pure function of its arguments: nothing is mutated,
//! allocated or cached, and every test runs in constant time. Inputs are
//! assumed well formed (ordered AABB corners, unit plane normals,
//! orthonormal OBB axes); this is not re-checked here.
//!
//! The predicates are available three ways:
//!
//! - free functions named after the pair they test, e.g.
//!   [`intersects_plane_obb`];
//! - the [`Intersects`] and [`ContainsPoint`] traits, implemented for every
//!   supported pair in both argument orders;
//! - the closed [`Volume`] enum, which dispatches on the pair of shape kinds.
//!
//! # Example
//!
//! ```
//! use intersectum::bounds::{Aabb3, Plane, Sphere};
//! use intersectum::intersection::{above_plane, Intersects, Volume};
//! use intersectum::{Point3, Vec3};
//!
//! let ground = Plane::new(Vec3::unit_y(), 0.0);
//! let ball = Sphere::new(Point3::new(0.0, 3.0, 0.0), 1.0).unwrap();
//! assert!(above_plane(&ground, &ball));
//! assert!(!ground.intersects(&ball));
//!
//! let crate_box = Volume::from(Aabb3::new(
//!     Point3::new(-1.0, 1.5, -1.0),
//!     Point3::new(1.0, 2.5, 1.0),
//! ));
//! assert!(crate_box.intersects(&Volume::from(ball)));
//! ```

mod plane;
mod point;
mod volume;

pub use plane::{
    above_plane, below_plane, classify_sphere, intersects_plane_aabb, intersects_plane_obb,
    intersects_plane_sphere, intersects_sphere_plane, PlaneSide,
};
pub use point::{point_inside_aabb, point_inside_obb, point_inside_sphere};
pub use volume::{
    intersects_aabb_aabb, intersects_aabb_obb, intersects_aabb_sphere, intersects_obb_obb,
    intersects_obb_sphere, intersects_sphere_sphere, DEGENERATE_AXIS_EPSILON,
};

use crate::bounds::{Aabb3, Obb3, Plane, Sphere};
use crate::primitives::Point3;
use num_traits::Float;

/// Overlap test between `Self` and `Rhs`.
///
/// Touching counts as intersecting. Implementations are symmetric:
/// `a.intersects(&b) == b.intersects(&a)` whenever both orders exist.
pub trait Intersects<Rhs: ?Sized = Self> {
    /// Returns `true` if `self` and `other` touch or overlap.
    fn intersects(&self, other: &Rhs) -> bool;
}

/// Closed point containment test.
pub trait ContainsPoint<F> {
    /// Returns `true` if `point` is inside or on the boundary of `self`.
    fn contains_point(&self, point: Point3<F>) -> bool;
}

/// A bounding volume of one of the supported kinds.
///
/// The set of kinds is closed, so pair tests dispatch with a `match` rather
/// than through trait objects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Volume<F> {
    /// Axis-aligned box.
    Aabb(Aabb3<F>),
    /// Oriented box.
    Obb(Obb3<F>),
    /// Sphere.
    Sphere(Sphere<F>),
}

impl<F: Float> From<Aabb3<F>> for Volume<F> {
    fn from(aabb: Aabb3<F>) -> Self {
        Volume::Aabb(aabb)
    }
}

impl<F: Float> From<Obb3<F>> for Volume<F> {
    fn from(obb: Obb3<F>) -> Self {
        Volume::Obb(obb)
    }
}

impl<F: Float> From<Sphere<F>> for Volume<F> {
    fn from(sphere: Sphere<F>) -> Self {
        Volume::Sphere(sphere)
    }
}

impl<F: Float> Intersects for Volume<F> {
    fn intersects(&self, other: &Self) -> bool {
        match (self, other) {
            (Volume::Aabb(a), Volume::Aabb(b)) => intersects_aabb_aabb(a, b),
            (Volume::Obb(a), Volume::Obb(b)) => intersects_obb_obb(a, b),
            (Volume::Sphere(a), Volume::Sphere(b)) => intersects_sphere_sphere(a, b),
            (Volume::Aabb(a), Volume::Obb(o)) | (Volume::Obb(o), Volume::Aabb(a)) => {
                intersects_aabb_obb(a, o)
            }
            (Volume::Aabb(a), Volume::Sphere(s)) | (Volume::Sphere(s), Volume::Aabb(a)) => {
                intersects_aabb_sphere(a, s)
            }
            (Volume::Obb(o), Volume::Sphere(s)) | (Volume::Sphere(s), Volume::Obb(o)) => {
                intersects_obb_sphere(o, s)
            }
        }
    }
}

impl<F: Float> Intersects<Plane<F>> for Volume<F> {
    fn intersects(&self, plane: &Plane<F>) -> bool {
        match self {
            Volume::Aabb(a) => intersects_plane_aabb(plane, a),
            Volume::Obb(o) => intersects_plane_obb(plane, o),
            Volume::Sphere(s) => intersects_plane_sphere(plane, s),
        }
    }
}

impl<F: Float> Intersects<Volume<F>> for Plane<F> {
    fn intersects(&self, volume: &Volume<F>) -> bool {
        volume.intersects(self)
    }
}

impl<F: Float> ContainsPoint<F> for Volume<F> {
    fn contains_point(&self, point: Point3<F>) -> bool {
        match self {
            Volume::Aabb(a) => point_inside_aabb(a, point),
            Volume::Obb(o) => point_inside_obb(o, point),
            Volume::Sphere(s) => point_inside_sphere(s, point),
        }
    }
}

impl<F: Float> ContainsPoint<F> for Aabb3<F> {
    fn contains_point(&self, point: Point3<F>) -> bool {
        point_inside_aabb(self, point)
    }
}

impl<F: Float> ContainsPoint<F> for Obb3<F> {
    fn contains_point(&self, point: Point3<F>) -> bool {
        point_inside_obb(self, point)
    }
}

impl<F: Float> ContainsPoint<F> for Sphere<F> {
    fn contains_point(&self, point: Point3<F>) -> bool {
        point_inside_sphere(self, point)
    }
}

impl<F: Float> Intersects for Aabb3<F> {
    fn intersects(&self, other: &Self) -> bool {
        intersects_aabb_aabb(self, other)
    }
}

impl<F: Float> Intersects for Obb3<F> {
    fn intersects(&self, other: &Self) -> bool {
        intersects_obb_obb(self, other)
    }
}

impl<F: Float> Intersects for Sphere<F> {
    fn intersects(&self, other: &Self) -> bool {
        intersects_sphere_sphere(self, other)
    }
}

impl<F: Float> Intersects<Obb3<F>> for Aabb3<F> {
    fn intersects(&self, obb: &Obb3<F>) -> bool {
        intersects_aabb_obb(self, obb)
    }
}

impl<F: Float> Intersects<Aabb3<F>> for Obb3<F> {
    fn intersects(&self, aabb: &Aabb3<F>) -> bool {
        intersects_aabb_obb(aabb, self)
    }
}

impl<F: Float> Intersects<Sphere<F>> for Aabb3<F> {
    fn intersects(&self, sphere: &Sphere<F>) -> bool {
        intersects_aabb_sphere(self, sphere)
    }
}

impl<F: Float> Intersects<Aabb3<F>> for Sphere<F> {
    fn intersects(&self, aabb: &Aabb3<F>) -> bool {
        intersects_aabb_sphere(aabb, self)
    }
}

impl<F: Float> Intersects<Sphere<F>> for Obb3<F> {
    fn intersects(&self, sphere: &Sphere<F>) -> bool {
        intersects_obb_sphere(self, sphere)
    }
}

impl<F: Float> Intersects<Obb3<F>> for Sphere<F> {
    fn intersects(&self, obb: &Obb3<F>) -> bool {
        intersects_obb_sphere(obb, self)
    }
}

impl<F: Float> Intersects<Aabb3<F>> for Plane<F> {
    fn intersects(&self, aabb: &Aabb3<F>) -> bool {
        intersects_plane_aabb(self, aabb)
    }
}

impl<F: Float> Intersects<Plane<F>> for Aabb3<F> {
    fn intersects(&self, plane: &Plane<F>) -> bool {
        intersects_plane_aabb(plane, self)
    }
}

impl<F: Float> Intersects<Obb3<F>> for Plane<F> {
    fn intersects(&self, obb: &Obb3<F>) -> bool {
        intersects_plane_obb(self, obb)
    }
}

impl<F: Float> Intersects<Plane<F>> for Obb3<F> {
    fn intersects(&self, plane: &Plane<F>) -> bool {
        intersects_plane_obb(plane, self)
    }
}

impl<F: Float> Intersects<Sphere<F>> for Plane<F> {
    fn intersects(&self, sphere: &Sphere<F>) -> bool {
        intersects_plane_sphere(self, sphere)
    }
}

impl<F: Float> Intersects<Plane<F>> for Sphere<F> {
    fn intersects(&self, plane: &Plane<F>) -> bool {
        intersects_sphere_plane(self, plane)
    }
}
