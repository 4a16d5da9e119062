//! Triangle with a precomputed circumscribed circle.

use super::{Circle2, Edge2, Vec2};
use crate::error::{Result, TriangulationError};
use num_traits::Float;

/// A triangle together with its circumscribed circle.
///
/// The circumcircle is derived once in [`Triangle2::new`] and the fields are
/// private, so it always matches the vertices. Changing a vertex means
/// building a new triangle.
///
/// # Example
///
/// ```
/// use triangulum::{Triangle2, Vec2};
///
/// let t = Triangle2::new(
///     Vec2::new(0.0_f64, 0.0),
///     Vec2::new(1.0, 0.0),
///     Vec2::new(0.5, 0.8660254),
/// )
/// .unwrap();
///
/// let circle = t.circumcircle();
/// assert!((circle.center.x - 0.5).abs() < 1e-6);
/// assert!((circle.center.y - 0.28868).abs() < 1e-5);
/// assert!((circle.radius - 0.57735).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle2<F> {
    a: Vec2<F>,
    b: Vec2<F>,
    c: Vec2<F>,
    circumcircle: Circle2<F>,
}

impl<F: Float> Triangle2<F> {
    /// Creates a triangle and derives its circumcircle.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationError::DegenerateTriangle`] if the vertices are
    /// collinear or coincident, i.e. the circumcircle does not exist or
    /// cannot be represented.
    pub fn new(a: Vec2<F>, b: Vec2<F>, c: Vec2<F>) -> Result<Self> {
        let circumcircle = circumscribed_circle(a, b, c).ok_or_else(|| {
            TriangulationError::DegenerateTriangle {
                a: a.to_array_f64(),
                b: b.to_array_f64(),
                c: c.to_array_f64(),
            }
        })?;

        Ok(Self {
            a,
            b,
            c,
            circumcircle,
        })
    }

    /// First vertex.
    #[inline]
    pub fn a(&self) -> Vec2<F> {
        self.a
    }

    /// Second vertex.
    #[inline]
    pub fn b(&self) -> Vec2<F> {
        self.b
    }

    /// Third vertex.
    #[inline]
    pub fn c(&self) -> Vec2<F> {
        self.c
    }

    /// All three vertices in construction order.
    #[inline]
    pub fn vertices(&self) -> [Vec2<F>; 3] {
        [self.a, self.b, self.c]
    }

    /// The circumscribed circle.
    #[inline]
    pub fn circumcircle(&self) -> Circle2<F> {
        self.circumcircle
    }

    /// Iterates the edges `(a, b)`, `(b, c)`, `(c, a)`.
    ///
    /// Each call returns a fresh iterator.
    #[inline]
    pub fn edges(&self) -> std::array::IntoIter<Edge2<F>, 3> {
        [
            Edge2::new(self.a, self.b),
            Edge2::new(self.b, self.c),
            Edge2::new(self.c, self.a),
        ]
        .into_iter()
    }

    /// Returns true if `p` is tolerance-equal to one of the vertices.
    #[inline]
    pub fn has_vertex(&self, p: Vec2<F>) -> bool {
        self.a.approx_eq(p) || self.b.approx_eq(p) || self.c.approx_eq(p)
    }

    /// Signed area; positive when the vertices are counter-clockwise.
    #[inline]
    pub fn signed_area(&self) -> F {
        (self.b - self.a).cross(self.c - self.a) / (F::one() + F::one())
    }

    /// Unsigned area.
    #[inline]
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Centroid of the three vertices.
    #[inline]
    pub fn centroid(&self) -> Vec2<F> {
        let three = F::one() + F::one() + F::one();
        (self.a + self.b + self.c) / three
    }
}

/// Solves `p · u_i = |u_i|² / 2` for the offset `p` of the center from `v0`,
/// where `u_i = v_i - v0`.
fn circumscribed_circle<F: Float>(v0: Vec2<F>, v1: Vec2<F>, v2: Vec2<F>) -> Option<Circle2<F>> {
    let u1 = v1 - v0;
    let u2 = v2 - v0;

    let det = u1.cross(u2);
    if det == F::zero() {
        return None;
    }

    let q1 = u2.perpendicular_cw().scale(u1.magnitude_squared());
    let q2 = u1.perpendicular().scale(u2.magnitude_squared());
    let q = q1 + q2;

    let center = v0 + q.scale(F::one() / (det + det));
    let circle = Circle2::new(center, v0.distance(center));

    circle.is_finite().then_some(circle)
}
