//! Error types for triangulation operations.

use thiserror::Error;

/// Errors that can occur while building a triangulation.
///
/// Coordinates are reported as `f64` regardless of the scalar type the
/// triangulation was computed in.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TriangulationError {
    /// The three vertices are collinear (or coincident), so the
    /// circumscribed circle does not exist.
    #[error("degenerate triangle: {a:?}, {b:?}, {c:?} are collinear")]
    DegenerateTriangle {
        /// First vertex.
        a: [f64; 2],
        /// Second vertex.
        b: [f64; 2],
        /// Third vertex.
        c: [f64; 2],
    },

    /// No points were given and no covering bounds were supplied.
    #[error("cannot derive covering bounds from an empty point set")]
    EmptyInput,

    /// Supplied bounds have a minimum corner greater than the maximum corner.
    #[error("invalid bounds: min {min:?} exceeds max {max:?}")]
    InvalidBounds {
        /// Minimum corner.
        min: [f64; 2],
        /// Maximum corner.
        max: [f64; 2],
    },

    /// A point lies outside the bounds the triangulation was seeded with.
    #[error("point {point:?} lies outside the seed bounds {min:?} to {max:?}")]
    PointOutsideBounds {
        /// The rejected point.
        point: [f64; 2],
        /// Minimum corner of the seed bounds.
        min: [f64; 2],
        /// Maximum corner of the seed bounds.
        max: [f64; 2],
    },

    /// The seed gap is negative or not finite.
    #[error("invalid seed gap {gap}: must be finite and non-negative")]
    InvalidGap {
        /// The rejected gap.
        gap: f64,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TriangulationError>;
