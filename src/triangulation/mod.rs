//! Delaunay triangulation of point sets.
//!
//! This module provides the incremental Bowyer-Watson engine, its options,
//! and checks of the Delaunay property.

mod delaunay;
mod options;
mod validate;

pub use delaunay::{triangulate, triangulate_in_batches, triangulate_with, Triangulation};
pub use options::{TriangulateOptions, DEFAULT_GAP, DEFAULT_GAP_FACTOR};
pub use validate::{delaunay_violations, is_delaunay};
