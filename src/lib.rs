//! triangulum - Incremental Delaunay triangulation
//!
//! Computes the Delaunay triangulation of a 2D point set with the
//! Bowyer-Watson algorithm: seed a covering quad, insert points one by one by
//! rebuilding the cavity each point opens, and optionally strip the quad.
//! Geometry is compared with an absolute tolerance of [`EPS`].
//!
//! ```
//! use triangulum::{triangulate, Vec2};
//!
//! let points = vec![
//!     Vec2::new(0.0_f64, 0.0),
//!     Vec2::new(3.0, 0.2),
//!     Vec2::new(1.2, 2.5),
//!     Vec2::new(1.4, 0.9),
//! ];
//! let triangles = triangulate(&points, false, None).unwrap();
//! assert_eq!(triangles.len(), 2 * points.len() + 2);
//! ```

pub mod bounds;
pub mod collection;
pub mod error;
pub mod primitives;
pub mod render;
pub mod triangulation;

pub use bounds::Aabb2;
pub use error::{Result, TriangulationError};
pub use primitives::{Circle2, Edge2, Triangle2, Vec2, EPS};
pub use triangulation::{triangulate, triangulate_with, TriangulateOptions, Triangulation};
