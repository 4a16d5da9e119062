//! Checks of the empty-circumcircle property.

use crate::primitives::{Triangle2, Vec2};
use num_traits::Float;

/// Lists `(triangle_index, point_index)` pairs where a point that is not a
/// vertex of the triangle lies strictly inside its circumcircle.
///
/// A point counts as inside when its distance to the center is below
/// `radius - eps`, so cocircular ties are accepted.
///
/// ```
/// use triangulum::triangulation::{delaunay_violations, triangulate};
/// use triangulum::Vec2;
///
/// let points = vec![
///     Vec2::new(0.0_f64, 0.0),
///     Vec2::new(4.0, 0.5),
///     Vec2::new(1.5, 3.0),
///     Vec2::new(2.0, 1.0),
/// ];
/// let triangles = triangulate(&points, true, None).unwrap();
/// assert!(delaunay_violations(&triangles, &points, 1e-9).is_empty());
/// ```
pub fn delaunay_violations<F: Float>(
    triangles: &[Triangle2<F>],
    points: &[Vec2<F>],
    eps: F,
) -> Vec<(usize, usize)> {
    let mut violations = Vec::new();
    for (ti, tri) in triangles.iter().enumerate() {
        let circle = tri.circumcircle();
        for (pi, &p) in points.iter().enumerate() {
            if tri.has_vertex(p) {
                continue;
            }
            if circle.center.distance(p) < circle.radius - eps {
                violations.push((ti, pi));
            }
        }
    }
    violations
}

/// Returns true if no point lies strictly inside any circumcircle.
///
/// See [`delaunay_violations`].
pub fn is_delaunay<F: Float>(triangles: &[Triangle2<F>], points: &[Vec2<F>], eps: F) -> bool {
    delaunay_violations(triangles, points, eps).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_point_inside() {
        let tri = Triangle2::new(
            Vec2::new(0.0_f64, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.5, 0.866),
        )
        .unwrap();

        let points = vec![
            tri.a(),
            tri.b(),
            tri.c(),
            Vec2::new(0.5, 0.29),
            Vec2::new(10.0, 10.0),
        ];
        assert_eq!(delaunay_violations(&[tri], &points, 1e-9), vec![(0, 3)]);
        assert!(!is_delaunay(&[tri], &points, 1e-9));
    }

    #[test]
    fn test_cocircular_is_accepted() {
        // Right triangle: the circumcircle passes through the fourth square corner.
        let tri = Triangle2::new(
            Vec2::new(0.0_f64, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
        )
        .unwrap();
        let points = vec![Vec2::new(1.0, 1.0)];
        assert!(is_delaunay(&[tri], &points, 1e-9));
    }

    #[test]
    fn test_bad_diagonal_is_rejected() {
        // Thin rhombus split along its long diagonal.
        let a = Vec2::new(-2.0_f64, 0.0);
        let b = Vec2::new(0.0, -0.5);
        let c = Vec2::new(2.0, 0.0);
        let d = Vec2::new(0.0, 0.5);
        let triangles = vec![Triangle2::new(a, b, c).unwrap(), Triangle2::new(a, c, d).unwrap()];
        let points = vec![a, b, c, d];
        assert_eq!(delaunay_violations(&triangles, &points, 1e-9), vec![(0, 3), (1, 1)]);
    }
}
