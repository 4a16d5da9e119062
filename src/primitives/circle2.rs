//! 2D circle type.

use super::Vec2;
use num_traits::Float;

/// A 2D circle defined by center and radius.
///
/// # Example
///
/// ```
/// use triangulum::{Circle2, Vec2};
///
/// let circle: Circle2<f64> = Circle2::new(Vec2::new(0.0, 0.0), 1.0);
/// assert!(circle.contains(Vec2::new(0.5, 0.0)));
/// assert!(circle.contains(Vec2::new(1.0, 0.0)));
/// assert!(!circle.contains(Vec2::new(2.0, 0.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle2<F> {
    /// Center of the circle
    pub center: Vec2<F>,
    /// Radius of the circle (must be non-negative)
    pub radius: F,
}

impl<F: Float> Circle2<F> {
    /// Creates a new circle from center and radius.
    #[inline]
    pub fn new(center: Vec2<F>, radius: F) -> Self {
        Self { center, radius }
    }

    /// Checks if a point is inside the circle (including boundary).
    #[inline]
    pub fn contains(&self, point: Vec2<F>) -> bool {
        self.center.distance(point) <= self.radius
    }

    /// Checks if a point is strictly inside the circle (excluding boundary).
    #[inline]
    pub fn contains_strict(&self, point: Vec2<F>) -> bool {
        self.center.distance(point) < self.radius
    }

    /// Returns the signed distance from a point to the circle boundary.
    ///
    /// Negative inside, positive outside.
    #[inline]
    pub fn signed_distance(&self, point: Vec2<F>) -> F {
        self.center.distance(point) - self.radius
    }

    /// Returns true if center and radius are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.radius.is_finite()
    }
}
