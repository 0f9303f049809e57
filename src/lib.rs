//! intersectum - Intersection tests for bounding volumes
//!
//! Closed-form overlap and containment predicates for axis-aligned boxes,
//! oriented boxes, spheres and planes, plus their 2D counterparts. Every test
//! is pure and constant time, and touching counts as intersecting.

pub mod bounds;
pub mod error;
pub mod intersection;
pub mod planar;
pub mod primitives;

#[cfg(feature = "simd")]
pub mod simd;

pub use bounds::{Aabb3, Obb3, Plane, Sphere};
pub use error::GeomError;
pub use intersection::{ContainsPoint, Intersects, PlaneSide, Volume};
pub use primitives::{Point2, Point3, Vec2, Vec3};
