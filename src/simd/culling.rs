//! Batched sphere vs. plane culling.
//!
//! Each function returns the indices of the spheres that pass the test, in
//! ascending order. The results match the scalar predicates in
//! [`crate::intersection`] exactly: the same comparisons are evaluated on the
//! same arithmetic, 4 spheres at a time with a scalar loop for the remainder.

use crate::bounds::{Plane, Sphere};
use crate::intersection::{above_plane, below_plane, intersects_plane_sphere};

use super::sphere::Sphere3x4;

fn collect_indices(
    spheres: &[Sphere<f32>],
    plane: &Plane<f32>,
    batch_mask: impl Fn(Sphere3x4, &Plane<f32>) -> i32,
    scalar: impl Fn(&Plane<f32>, &Sphere<f32>) -> bool,
) -> Vec<usize> {
    let n = spheres.len();
    let mut result = Vec::new();

    // Process in batches of 4
    let chunks = n / 4;
    for i in 0..chunks {
        let batch = Sphere3x4::from_slice(&spheres[i * 4..]);
        let mask_bits = batch_mask(batch, plane);

        if mask_bits != 0 {
            for j in 0..4 {
                if (mask_bits & (1 << j)) != 0 {
                    result.push(i * 4 + j);
                }
            }
        }
    }

    // Handle remainder
    for (i, sphere) in spheres.iter().enumerate().skip(chunks * 4) {
        if scalar(plane, sphere) {
            result.push(i);
        }
    }

    result
}

/// Indices of the spheres that are above or touching `plane`.
///
/// Batched form of [`above_plane`].
pub fn spheres_above_plane(spheres: &[Sphere<f32>], plane: &Plane<f32>) -> Vec<usize> {
    collect_indices(spheres, plane, Sphere3x4::above_mask, above_plane::<f32>)
}

/// Indices of the spheres that are below or touching `plane`.
///
/// Batched form of [`below_plane`].
pub fn spheres_below_plane(spheres: &[Sphere<f32>], plane: &Plane<f32>) -> Vec<usize> {
    collect_indices(spheres, plane, Sphere3x4::below_mask, below_plane::<f32>)
}

/// Indices of the spheres that touch or cross `plane`.
///
/// Batched form of [`intersects_plane_sphere`].
pub fn spheres_intersecting_plane(spheres: &[Sphere<f32>], plane: &Plane<f32>) -> Vec<usize> {
    collect_indices(
        spheres,
        plane,
        Sphere3x4::intersecting_mask,
        intersects_plane_sphere::<f32>,
    )
}
