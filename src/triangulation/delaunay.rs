//! Delaunay triangulation using the Bowyer-Watson algorithm.
//!
//! Delaunay triangulation maximizes the minimum angle of all triangles,
//! avoiding skinny triangles when possible. It has the property that no
//! point lies inside the circumcircle of any triangle.
//!
//! # Algorithm
//!
//! The Bowyer-Watson algorithm is an incremental insertion algorithm:
//! 1. Start with a quad, split into two triangles, covering all points
//! 2. For each point, remove every triangle whose circumcircle contains it
//!    and connect the point to the border of the resulting cavity
//! 3. Optionally remove triangles connected to the quad corners
//!
//! The triangle set is rebuilt after every insertion rather than edited in
//! place, and cavity borders are found by tolerant edge comparison, so no
//! adjacency or spatial index is kept.
//!
//! # Complexity
//!
//! - Time: O(n²); every insertion scans the whole triangle set
//! - Space: O(n)
//!
//! # Example
//!
//! ```
//! use triangulum::triangulation::triangulate;
//! use triangulum::{Aabb2, Vec2};
//!
//! let points: Vec<Vec2<f64>> = vec![
//!     Vec2::new(0.0, 0.0),
//!     Vec2::new(10.0, 0.0),
//!     Vec2::new(10.0, 10.0),
//!     Vec2::new(0.0, 10.0),
//!     Vec2::new(5.0, 5.0),
//! ];
//! let bounds = Aabb2::new(Vec2::new(-50.0, -50.0), Vec2::new(60.0, 60.0));
//!
//! let triangles = triangulate(&points, true, Some(bounds)).unwrap();
//!
//! // Square with center point produces 4 triangles around the center
//! assert_eq!(triangles.len(), 4);
//! assert!(triangles.iter().all(|t| t.has_vertex(Vec2::new(5.0, 5.0))));
//! ```

use super::options::TriangulateOptions;
use crate::bounds::Aabb2;
use crate::collection::{chunks, counts, partition};
use crate::error::{Result, TriangulationError};
use crate::primitives::{Triangle2, Vec2};
use num_traits::Float;

/// Incremental Bowyer-Watson state.
///
/// Starts from two triangles spanning a covering box and accepts points one
/// at a time. Cloning gives an independent snapshot.
#[derive(Debug, Clone)]
pub struct Triangulation<F> {
    bounds: Aabb2<F>,
    corners: [Vec2<F>; 4],
    triangles: Vec<Triangle2<F>>,
}

impl<F: Float> Triangulation<F> {
    /// Seeds the triangulation with the quad spanned by `bounds`.
    ///
    /// With corners `(tl, tr, bl, br)` the seed triangles are
    /// `(tl, tr, bl)` and `(tr, br, bl)`.
    ///
    /// # Errors
    ///
    /// - [`TriangulationError::InvalidBounds`] if `bounds` is inverted
    /// - [`TriangulationError::DegenerateTriangle`] if `bounds` has zero width
    ///   or height
    pub fn seed(bounds: Aabb2<F>) -> Result<Self> {
        bounds.validate()?;

        let (tl, tr, bl, br) = bounds.corners();
        let triangles = vec![Triangle2::new(tl, tr, bl)?, Triangle2::new(tr, br, bl)?];

        tracing::debug!(
            min = ?bounds.min.to_array_f64(),
            max = ?bounds.max.to_array_f64(),
            "seeded covering quad"
        );

        Ok(Self {
            bounds,
            corners: [tl, tr, bl, br],
            triangles,
        })
    }

    /// Inserts one point.
    ///
    /// Triangles whose circumcircle contains `point` (boundary included) are
    /// removed, and every edge that bordered exactly one removed triangle is
    /// joined to `point`. The new set replaces the old one wholesale.
    ///
    /// # Errors
    ///
    /// - [`TriangulationError::PointOutsideBounds`] if `point` is not inside
    ///   the seed bounds
    /// - [`TriangulationError::DegenerateTriangle`] if `point` coincides with
    ///   an existing vertex or would form a collinear triangle with a cavity
    ///   border edge
    ///
    /// The triangulation is left unchanged on error, so the caller may skip
    /// the point and continue.
    pub fn insert(&mut self, point: Vec2<F>) -> Result<()> {
        if !self.bounds.contains(point) {
            return Err(TriangulationError::PointOutsideBounds {
                point: point.to_array_f64(),
                min: self.bounds.min.to_array_f64(),
                max: self.bounds.max.to_array_f64(),
            });
        }

        if let Some(existing) = self.triangles.iter().find(|t| t.has_vertex(point)) {
            let [a, b, _] = existing.vertices();
            let other = if a.approx_eq(point) { b } else { a };
            return Err(TriangulationError::DegenerateTriangle {
                a: point.to_array_f64(),
                b: point.to_array_f64(),
                c: other.to_array_f64(),
            });
        }

        let (to_remove, unaffected) = partition(self.triangles.iter().copied(), |t| {
            t.circumcircle().contains(point)
        });

        if to_remove.is_empty() {
            tracing::trace!(point = ?point.to_array_f64(), "point outside every circumcircle");
            return Ok(());
        }

        let edges = to_remove.iter().flat_map(Triangle2::edges);
        let border: Vec<_> = counts(edges, |a, b| a.approx_eq(*b))
            .into_iter()
            .filter(|&(_, count)| count == 1)
            .map(|(edge, _)| edge)
            .collect();

        let mut rebuilt = Vec::with_capacity(border.len() + unaffected.len());
        for edge in &border {
            rebuilt.push(Triangle2::new(point, edge.a, edge.b)?);
        }
        rebuilt.extend(unaffected);

        tracing::trace!(
            point = ?point.to_array_f64(),
            removed = to_remove.len(),
            border = border.len(),
            total = rebuilt.len(),
            "inserted point"
        );

        self.triangles = rebuilt;
        Ok(())
    }

    /// Inserts points in order, stopping at the first error.
    pub fn insert_all<'a, I>(&mut self, points: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Vec2<F>>,
        F: 'a,
    {
        for &p in points {
            self.insert(p)?;
        }
        Ok(())
    }

    /// The current triangle set, seed scaffolding included.
    #[inline]
    pub fn triangles(&self) -> &[Triangle2<F>] {
        &self.triangles
    }

    /// Number of triangles in the current set.
    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the set holds no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// The covering bounds the triangulation was seeded with.
    #[inline]
    pub fn bounds(&self) -> Aabb2<F> {
        self.bounds
    }

    /// The seed corners as `[tl, tr, bl, br]`.
    #[inline]
    pub fn seed_corners(&self) -> [Vec2<F>; 4] {
        self.corners
    }

    /// Returns true if `t` touches one of the seed corners.
    #[inline]
    pub fn is_scaffolding(&self, t: &Triangle2<F>) -> bool {
        self.corners.iter().any(|&c| t.has_vertex(c))
    }

    /// Finishes the triangulation.
    ///
    /// With `clean`, every triangle touching a seed corner is dropped.
    pub fn into_triangles(self, clean: bool) -> Vec<Triangle2<F>> {
        if !clean {
            return self.triangles;
        }

        let before = self.triangles.len();
        let kept: Vec<_> = self
            .triangles
            .iter()
            .filter(|t| !self.is_scaffolding(t))
            .copied()
            .collect();

        tracing::debug!(before, after = kept.len(), "removed seed scaffolding");
        kept
    }
}

/// Computes the Delaunay triangulation of `points`.
///
/// Seeds with `bounds` when given, otherwise with the bounds of `points`
/// grown by the default margin (see [`TriangulateOptions::margin`]). With
/// `clean`, triangles touching the seed corners are removed.
///
/// # Errors
///
/// - [`TriangulationError::EmptyInput`] if `points` is empty and no bounds are given
/// - [`TriangulationError::InvalidBounds`] if the given bounds are inverted
/// - [`TriangulationError::PointOutsideBounds`] if a point lies outside the
///   given bounds
/// - [`TriangulationError::DegenerateTriangle`] for duplicate points or
///   collinear cavity triangles
///
/// No partial result is returned on error.
pub fn triangulate<F: Float>(
    points: &[Vec2<F>],
    clean: bool,
    bounds: Option<Aabb2<F>>,
) -> Result<Vec<Triangle2<F>>> {
    let mut options = TriangulateOptions::default().with_clean(clean);
    options.bounds = bounds;
    triangulate_with(points, &options)
}

/// Computes the Delaunay triangulation of `points` with explicit options.
///
/// # Errors
///
/// As [`triangulate`], plus [`TriangulationError::InvalidGap`] for a
/// negative or non-finite gap.
pub fn triangulate_with<F: Float>(
    points: &[Vec2<F>],
    options: &TriangulateOptions<F>,
) -> Result<Vec<Triangle2<F>>> {
    let mut triangulation = Triangulation::seed(covering_bounds(points, options)?)?;
    triangulation.insert_all(points)?;

    tracing::debug!(
        points = points.len(),
        triangles = triangulation.len(),
        "triangulation complete"
    );

    Ok(triangulation.into_triangles(options.clean))
}

/// Like [`triangulate_with`], inserting `batch_size` points at a time and
/// calling `on_batch(batch_index, &state)` after each batch.
///
/// A `batch_size` of zero is treated as one.
///
/// ```
/// use triangulum::triangulation::{triangulate_in_batches, TriangulateOptions};
/// use triangulum::Vec2;
///
/// let points: Vec<Vec2<f64>> = [
///     (0.1, 0.3), (2.7, 0.9), (1.3, 2.2), (3.9, 3.1),
///     (0.6, 4.4), (2.2, 5.8), (4.8, 1.7), (5.3, 4.9),
/// ]
/// .iter()
/// .map(|&(x, y)| Vec2::new(x, y))
/// .collect();
///
/// let mut sizes = Vec::new();
/// let triangles = triangulate_in_batches(
///     &points,
///     &TriangulateOptions::default(),
///     4,
///     |_, state| sizes.push(state.len()),
/// )
/// .unwrap();
///
/// assert_eq!(sizes.len(), 2);
/// assert_eq!(*sizes.last().unwrap(), triangles.len());
/// ```
pub fn triangulate_in_batches<F, C>(
    points: &[Vec2<F>],
    options: &TriangulateOptions<F>,
    batch_size: usize,
    mut on_batch: C,
) -> Result<Vec<Triangle2<F>>>
where
    F: Float,
    C: FnMut(usize, &Triangulation<F>),
{
    let mut triangulation = Triangulation::seed(covering_bounds(points, options)?)?;

    for (index, batch) in chunks(points, batch_size.max(1)).enumerate() {
        triangulation.insert_all(batch)?;
        tracing::debug!(
            batch = index,
            inserted = batch.len(),
            triangles = triangulation.len(),
            "batch inserted"
        );
        on_batch(index, &triangulation);
    }

    Ok(triangulation.into_triangles(options.clean))
}

/// The explicit bounds from `options`, or the grown bounds of `points`.
fn covering_bounds<F: Float>(
    points: &[Vec2<F>],
    options: &TriangulateOptions<F>,
) -> Result<Aabb2<F>> {
    options.validate()?;

    match options.bounds {
        Some(bounds) => Ok(bounds),
        None => Aabb2::from_points(points.iter().copied())
            .map(|found| found.expand(options.margin(&found)))
            .ok_or(TriangulationError::EmptyInput),
    }
}
