//! 2D vector type used for both positions and offsets.

use crate::bounds::Aabb2;
use num_traits::Float;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Absolute tolerance for coordinate comparisons.
pub const EPS: f64 = 1e-6;

/// Converts [`EPS`] into the scalar type `F`.
#[inline]
fn eps<F: Float>() -> F {
    F::from(EPS).unwrap_or_else(F::epsilon)
}

/// A 2D vector.
///
/// Generic over floating-point types (`f32` or `f64`). The derived
/// `PartialEq` is exact; geometric code compares with [`Vec2::approx_eq`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Draws a vector with each coordinate uniform in `[0, 1)`.
    ///
    /// The generator is passed in so callers can seed it.
    ///
    /// ```
    /// use rand::{rngs::StdRng, SeedableRng};
    /// use triangulum::Vec2;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let v: Vec2<f64> = Vec2::random(&mut rng);
    /// assert!(v.x >= 0.0 && v.x < 1.0);
    /// assert!(v.y >= 0.0 && v.y < 1.0);
    /// ```
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self
    where
        Standard: Distribution<F>,
    {
        Self {
            x: rng.gen(),
            y: rng.gen(),
        }
    }

    /// Draws a vector uniformly inside `bounds`.
    pub fn random_in<R: Rng + ?Sized>(rng: &mut R, bounds: &Aabb2<F>) -> Self
    where
        Standard: Distribution<F>,
    {
        bounds.min + Self::random(rng).component_mul(bounds.size())
    }

    /// Component-wise product.
    #[inline]
    pub fn component_mul(self, other: Self) -> Self {
        Self {
            x: self.x * other.x,
            y: self.y * other.y,
        }
    }

    /// Component-wise quotient.
    #[inline]
    pub fn component_div(self, other: Self) -> Self {
        Self {
            x: self.x / other.x,
            y: self.y / other.y,
        }
    }

    /// Multiplies both components by `s`.
    #[inline]
    pub fn scale(self, s: F) -> Self {
        self * s
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product (perpendicular dot product).
    ///
    /// Returns the z-component of the 3D cross product if the vectors
    /// were extended to 3D with z=0. Positive means `other` is counter-clockwise
    /// from `self`.
    #[inline]
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Returns the vector rotated 90 degrees counter-clockwise.
    #[inline]
    pub fn perpendicular(self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }

    /// Returns the vector rotated 90 degrees clockwise.
    #[inline]
    pub fn perpendicular_cw(self) -> Self {
        Self {
            x: self.y,
            y: -self.x,
        }
    }

    /// Returns the squared magnitude (length squared).
    #[inline]
    pub fn magnitude_squared(self) -> F {
        self.dot(self)
    }

    /// Returns the magnitude (length) of the vector.
    #[inline]
    pub fn magnitude(self) -> F {
        self.magnitude_squared().sqrt()
    }

    /// Squared distance to another position.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        (self - other).magnitude_squared()
    }

    /// Distance to another position.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        (self - other).magnitude()
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
        }
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
        }
    }

    /// Returns true if both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Tolerance equality: both coordinate differences are below [`EPS`].
    #[inline]
    pub fn approx_eq(self, other: Self) -> bool {
        self.approx_eq_eps(other, eps())
    }

    /// Tolerance equality with an explicit tolerance.
    #[inline]
    pub fn approx_eq_eps(self, other: Self, eps: F) -> bool {
        (self.x - other.x).abs() < eps && (self.y - other.y).abs() < eps
    }

    /// Coordinates widened to `f64`, for diagnostics.
    pub(crate) fn to_array_f64(self) -> [f64; 2] {
        [
            self.x.to_f64().unwrap_or(f64::NAN),
            self.y.to_f64().unwrap_or(f64::NAN),
        ]
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: F) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl<F: Float> Div<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn div(self, scalar: F) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<F: Float> Default for Vec2<F> {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_arithmetic() {
        let a: Vec2<f64> = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);

        assert_eq!(a + b, Vec2::new(4.0, 6.0));
        assert_eq!(b - a, Vec2::new(2.0, 2.0));
        assert_eq!(a.component_mul(b), Vec2::new(3.0, 8.0));
        assert_eq!(b.component_div(a), Vec2::new(3.0, 2.0));
        assert_eq!(a.scale(2.0), Vec2::new(2.0, 4.0));
        assert_eq!(b / 2.0, Vec2::new(1.5, 2.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn test_dot_and_cross() {
        let a: Vec2<f64> = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a.dot(b), 11.0);
        assert_eq!(a.cross(b), -2.0);
        assert_eq!(b.cross(a), 2.0);
    }

    #[test]
    fn test_rotations() {
        let v: Vec2<f64> = Vec2::new(1.0, 0.0);
        assert_eq!(v.perpendicular(), Vec2::new(0.0, 1.0));
        assert_eq!(v.perpendicular_cw(), Vec2::new(0.0, -1.0));
        assert_eq!(v.dot(v.perpendicular()), 0.0);
        assert_eq!(v.perpendicular().perpendicular_cw(), v);
    }

    #[test]
    fn test_lengths_and_distances() {
        let v: Vec2<f64> = Vec2::new(3.0, 4.0);
        assert_eq!(v.magnitude_squared(), 25.0);
        assert_eq!(v.magnitude(), 5.0);

        let origin = Vec2::zero();
        assert_eq!(v.distance_squared(origin), 25.0);
        assert_relative_eq!(v.distance(Vec2::new(0.0, 4.0)), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_min_max() {
        let a: Vec2<f64> = Vec2::new(1.0, 5.0);
        let b = Vec2::new(3.0, -2.0);
        assert_eq!(a.min(b), Vec2::new(1.0, -2.0));
        assert_eq!(a.max(b), Vec2::new(3.0, 5.0));
    }

    #[test]
    fn test_approx_eq() {
        let a: Vec2<f64> = Vec2::new(1.0, 1.0);
        assert!(a.approx_eq(Vec2::new(1.0 + 5e-7, 1.0 - 5e-7)));
        assert!(!a.approx_eq(Vec2::new(1.0 + 2e-6, 1.0)));
        assert!(!a.approx_eq(Vec2::new(1.0, 0.9)));
        assert!(a.approx_eq_eps(Vec2::new(1.05, 1.0), 0.1));
    }

    #[test]
    fn test_random_is_seeded_and_in_unit_square() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let a: Vec2<f64> = Vec2::random(&mut rng1);
            let b: Vec2<f64> = Vec2::random(&mut rng2);
            assert_eq!(a, b);
            assert!((0.0..1.0).contains(&a.x));
            assert!((0.0..1.0).contains(&a.y));
        }
    }

    #[test]
    fn test_random_in_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        let bounds = Aabb2::new(Vec2::new(-5.0, 10.0), Vec2::new(5.0, 12.0));
        for _ in 0..100 {
            let p: Vec2<f64> = Vec2::random_in(&mut rng, &bounds);
            assert!(bounds.contains(p));
        }
    }

    #[test]
    fn test_is_finite() {
        assert!(Vec2::new(1.0_f64, 2.0).is_finite());
        assert!(!Vec2::new(f64::INFINITY, 2.0).is_finite());
        assert!(!Vec2::new(1.0, f64::NAN).is_finite());
    }
}
