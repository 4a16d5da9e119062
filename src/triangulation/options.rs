//! Configuration for a triangulation run.

use crate::bounds::Aabb2;
use crate::error::{Result, TriangulationError};
use num_traits::Float;

/// Smallest default margin between the input points and the seed quad.
///
/// Applies when the points span little or no area, e.g. a single point.
pub const DEFAULT_GAP: f64 = 10.0;

/// Default margin as a multiple of the larger side of the points' bounds.
///
/// Seed corners close to the data pull hull triangles into the scaffolding,
/// and those are lost when the result is cleaned. A margin proportional to
/// the extent keeps the seed far away at any scale. No finite margin rules
/// this out for every input: a hull triangle with a large enough
/// circumcircle still reaches a seed corner.
pub const DEFAULT_GAP_FACTOR: f64 = 100.0;

/// Options for [`triangulate_with`](super::triangulate_with).
///
/// ```
/// use triangulum::triangulation::TriangulateOptions;
///
/// let options = TriangulateOptions::<f64>::default()
///     .with_clean(true)
///     .with_gap(10_000.0);
/// assert!(options.clean);
/// assert_eq!(options.gap, Some(10_000.0));
/// assert!(options.bounds.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangulateOptions<F> {
    /// Drop triangles touching the seed corners from the result.
    pub clean: bool,
    /// Covering bounds to seed with. Derived from the points when `None`.
    pub bounds: Option<Aabb2<F>>,
    /// Fixed margin added around derived bounds. When `None` the margin is
    /// [`DEFAULT_GAP_FACTOR`] times the larger side, at least
    /// [`DEFAULT_GAP`]. Ignored when `bounds` is set.
    pub gap: Option<F>,
}

impl<F: Float> Default for TriangulateOptions<F> {
    fn default() -> Self {
        Self {
            clean: false,
            bounds: None,
            gap: None,
        }
    }
}

impl<F: Float> TriangulateOptions<F> {
    /// Sets whether seed scaffolding is stripped.
    pub fn with_clean(mut self, clean: bool) -> Self {
        self.clean = clean;
        self
    }

    /// Seeds with explicit covering bounds.
    pub fn with_bounds(mut self, bounds: Aabb2<F>) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Sets a fixed margin around derived bounds.
    pub fn with_gap(mut self, gap: F) -> Self {
        self.gap = Some(gap);
        self
    }

    /// The margin to grow `found` by when seeding.
    pub fn margin(&self, found: &Aabb2<F>) -> F {
        if let Some(gap) = self.gap {
            return gap;
        }
        let floor = F::from(DEFAULT_GAP).unwrap_or_else(F::one);
        let factor = F::from(DEFAULT_GAP_FACTOR).unwrap_or_else(F::one);
        (found.width().max(found.height()) * factor).max(floor)
    }

    /// Checks the gap and any explicit bounds.
    ///
    /// # Errors
    ///
    /// - [`TriangulationError::InvalidGap`] if the gap is negative or not finite
    /// - [`TriangulationError::InvalidBounds`] if explicit bounds are inverted
    pub fn validate(&self) -> Result<()> {
        if let Some(gap) = self.gap {
            if !gap.is_finite() || gap < F::zero() {
                return Err(TriangulationError::InvalidGap {
                    gap: gap.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        if let Some(bounds) = &self.bounds {
            bounds.validate()?;
        }
        Ok(())
    }
}
