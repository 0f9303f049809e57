//! Bounding volumes and planes.

mod aabb;
mod obb;
mod plane;
mod sphere;

pub use aabb::Aabb3;
pub use obb::Obb3;
pub use plane::Plane;
pub use sphere::Sphere;

pub(crate) use sphere::validate_radius;
