//! Axis-aligned bounding box.

use crate::error::{Result, TriangulationError};
use crate::primitives::Vec2;
use num_traits::Float;

/// A 2D axis-aligned bounding box.
///
/// Defined by minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2<F> {
    /// Minimum corner (smallest x and y values).
    pub min: Vec2<F>,
    /// Maximum corner (largest x and y values).
    pub max: Vec2<F>,
}

impl<F: Float> Aabb2<F> {
    /// Creates a new AABB from min and max corners.
    ///
    /// Does not validate that min <= max; see [`Aabb2::try_new`].
    #[inline]
    pub fn new(min: Vec2<F>, max: Vec2<F>) -> Self {
        Self { min, max }
    }

    /// Creates an AABB, rejecting corners where `min > max` on either axis.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationError::InvalidBounds`] for inverted or NaN corners.
    pub fn try_new(min: Vec2<F>, max: Vec2<F>) -> Result<Self> {
        let aabb = Self { min, max };
        aabb.validate()?;
        Ok(aabb)
    }

    /// Checks that `min <= max` component-wise.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationError::InvalidBounds`] for inverted or NaN corners.
    pub fn validate(&self) -> Result<()> {
        // Written as negated `<=` so NaN coordinates are rejected too.
        if !(self.min.x <= self.max.x && self.min.y <= self.max.y) {
            return Err(TriangulationError::InvalidBounds {
                min: self.min.to_array_f64(),
                max: self.max.to_array_f64(),
            });
        }
        Ok(())
    }

    /// Creates an AABB containing a single point.
    #[inline]
    pub fn from_point(p: Vec2<F>) -> Self {
        Self { min: p, max: p }
    }

    /// Creates the tightest AABB around a set of points.
    ///
    /// Returns `None` if the iterator is empty.
    ///
    /// ```
    /// use triangulum::{Aabb2, Vec2};
    ///
    /// let points = [Vec2::new(1.0_f64, 2.0), Vec2::new(-3.0, 5.0)];
    /// let bounds = Aabb2::from_points(points).unwrap();
    /// assert_eq!(bounds.min, Vec2::new(-3.0, 2.0));
    /// assert_eq!(bounds.max, Vec2::new(1.0, 5.0));
    ///
    /// assert!(Aabb2::<f64>::from_points([]).is_none());
    /// ```
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec2<F>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;

        Some(iter.fold(Self::from_point(first), Self::expand_to_include))
    }

    /// Returns a new AABB grown by `gap` on every side.
    #[inline]
    pub fn expand(self, gap: F) -> Self {
        let d = Vec2::new(gap, gap);
        Self {
            min: self.min - d,
            max: self.max + d,
        }
    }

    /// Returns a new AABB expanded to include the given point.
    #[inline]
    pub fn expand_to_include(self, p: Vec2<F>) -> Self {
        Self {
            min: self.min.min(p),
            max: self.max.max(p),
        }
    }

    /// Returns the four corners as `(top_left, top_right, bottom_left, bottom_right)`
    /// with y pointing up.
    #[inline]
    pub fn corners(self) -> (Vec2<F>, Vec2<F>, Vec2<F>, Vec2<F>) {
        (
            Vec2::new(self.min.x, self.max.y),
            Vec2::new(self.max.x, self.max.y),
            Vec2::new(self.min.x, self.min.y),
            Vec2::new(self.max.x, self.min.y),
        )
    }

    /// Returns the width of the AABB.
    #[inline]
    pub fn width(self) -> F {
        self.max.x - self.min.x
    }

    /// Returns the height of the AABB.
    #[inline]
    pub fn height(self) -> F {
        self.max.y - self.min.y
    }

    /// Returns the size as a vector (width, height).
    #[inline]
    pub fn size(self) -> Vec2<F> {
        self.max - self.min
    }

    /// Returns the center point of the AABB.
    #[inline]
    pub fn center(self) -> Vec2<F> {
        (self.min + self.max) / (F::one() + F::one())
    }

    /// Returns `true` if this AABB contains the given point (boundary included).
    #[inline]
    pub fn contains(self, p: Vec2<F>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}
