//! Error types for shape construction.

use thiserror::Error;

/// Errors that can occur while constructing or mutating a shape.
///
/// Intersection predicates never return errors; only constructors that
/// enforce a shape invariant do.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    /// A sphere or circle radius was zero, negative or NaN.
    #[error("invalid radius {radius}: radius must be positive")]
    NonPositiveRadius {
        /// The rejected radius, widened to `f64`.
        radius: f64,
    },

    /// Input points are degenerate (coincident or collinear).
    #[error("degenerate input: points do not span a plane")]
    DegenerateInput,
}
