//! SIMD-accelerated culling.
//!
//! Vectorized sphere vs. plane tests for `f32` scenes, processing four
//! spheres per instruction.
//!
//! Enable with the `simd` feature flag:
//! ```toml
//! intersectum = { version = "0.1", features = ["simd"] }
//! ```

mod culling;
mod sphere;

pub use culling::{spheres_above_plane, spheres_below_plane, spheres_intersecting_plane};
pub use sphere::{Point3x4, Sphere3x4};
