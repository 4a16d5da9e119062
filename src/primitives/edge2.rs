//! Undirected 2D edge type.

use super::Vec2;
use num_traits::Float;

/// An undirected edge between two positions.
///
/// Two edges are equal (see [`Edge2::approx_eq`]) when their endpoint sets
/// match in either order under tolerance equality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge2<F> {
    pub a: Vec2<F>,
    pub b: Vec2<F>,
}

impl<F: Float> Edge2<F> {
    /// Creates a new edge.
    #[inline]
    pub fn new(a: Vec2<F>, b: Vec2<F>) -> Self {
        Self { a, b }
    }

    /// Returns the edge with its endpoints swapped.
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }

    /// Returns the length of the edge.
    #[inline]
    pub fn length(self) -> F {
        self.a.distance(self.b)
    }

    /// Returns the midpoint of the edge.
    #[inline]
    pub fn midpoint(self) -> Vec2<F> {
        (self.a + self.b) / (F::one() + F::one())
    }

    /// Symmetric tolerance equality.
    #[inline]
    pub fn approx_eq(self, other: Self) -> bool {
        (self.a.approx_eq(other.a) && self.b.approx_eq(other.b))
            || (self.a.approx_eq(other.b) && self.b.approx_eq(other.a))
    }
}
