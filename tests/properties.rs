//! Property tests for the triangulation and its helpers.

use proptest::prelude::*;
use triangulum::collection::{counts, partition};
use triangulum::triangulation::delaunay_violations;
use triangulum::{triangulate, Aabb2, Edge2, Triangulation, Vec2};

/// Points on a coarse lattice with a per-point jitter, so that no two points
/// coincide and exact cocircular ties are rare.
fn jittered_points(max_len: usize) -> impl Strategy<Value = Vec<Vec2<f64>>> {
    prop::collection::hash_set((0i32..40, 0i32..40), 3..max_len).prop_flat_map(|cells| {
        let len = cells.len();
        let cells: Vec<_> = cells.into_iter().collect();
        prop::collection::vec((0.05f64..0.95, 0.05f64..0.95), len).prop_map(move |jitter| {
            cells
                .iter()
                .zip(jitter)
                .map(|(&(i, j), (dx, dy))| Vec2::new(i as f64 + dx, j as f64 + dy))
                .collect()
        })
    })
}

/// Convex quad strictly enclosing every point of `jittered_points`, at least
/// one unit away from each of them.
const HULL: [(f64, f64); 4] = [(-1.0, -1.0), (41.0, -2.0), (42.0, 41.0), (-2.0, 40.0)];

/// Shoelace area of `HULL`.
const HULL_AREA: f64 = 1806.0;

fn coord() -> impl Strategy<Value = f64> {
    -1e3f64..1e3
}

proptest! {
    #[test]
    fn prop_edge_equality_is_symmetric(ax in coord(), ay in coord(), bx in coord(), by in coord()) {
        let p = Vec2::new(ax, ay);
        let q = Vec2::new(bx, by);
        prop_assert!(Edge2::new(p, q).approx_eq(Edge2::new(q, p)));
        prop_assert!(Edge2::new(p, q).approx_eq(Edge2::new(p, q)));
    }

    #[test]
    fn prop_bounds_contain_every_point(points in prop::collection::vec((coord(), coord()), 1..50)) {
        let points: Vec<Vec2<f64>> = points.into_iter().map(|(x, y)| Vec2::new(x, y)).collect();
        let bounds = Aabb2::from_points(points.iter().copied()).unwrap();
        prop_assert!(bounds.validate().is_ok());
        for p in &points {
            prop_assert!(bounds.contains(*p));
        }
    }

    #[test]
    fn prop_partition_is_stable_split(items in prop::collection::vec(0u32..100, 0..60)) {
        let (even, odd) = partition(items.clone(), |x| x % 2 == 0);
        prop_assert_eq!(even.len() + odd.len(), items.len());
        prop_assert_eq!(&even, &items.iter().copied().filter(|x| x % 2 == 0).collect::<Vec<_>>());
        prop_assert_eq!(&odd, &items.iter().copied().filter(|x| x % 2 == 1).collect::<Vec<_>>());
    }

    #[test]
    fn prop_counts_sum_to_len(items in prop::collection::vec(0u8..10, 0..60)) {
        let grouped = counts(items.clone(), |a, b| a == b);
        prop_assert_eq!(grouped.iter().map(|&(_, n)| n).sum::<usize>(), items.len());

        // Representatives are distinct and in first-seen order.
        let mut seen = Vec::new();
        for x in &items {
            if !seen.contains(x) {
                seen.push(*x);
            }
        }
        prop_assert_eq!(grouped.iter().map(|&(x, _)| x).collect::<Vec<_>>(), seen);
    }

    #[test]
    fn prop_triangulation_is_delaunay(points in jittered_points(40)) {
        let bounds = Aabb2::from_points(points.iter().copied()).unwrap().expand(10.0);
        let mut state = Triangulation::seed(bounds).unwrap();
        state.insert_all(&points).unwrap();

        let mut all = points.clone();
        all.extend(state.seed_corners());
        prop_assert!(delaunay_violations(state.triangles(), &all, 1e-7).is_empty());
    }

    #[test]
    fn prop_triangulation_tiles_seed_quad(points in jittered_points(40)) {
        let bounds = Aabb2::from_points(points.iter().copied()).unwrap().expand(10.0);
        let mut state = Triangulation::seed(bounds).unwrap();
        state.insert_all(&points).unwrap();

        let area: f64 = state.triangles().iter().map(|t| t.area()).sum();
        let expected = bounds.width() * bounds.height();
        prop_assert!((area - expected).abs() < 1e-6 * expected);
        prop_assert_eq!(state.len(), 2 * points.len() + 2);
    }

    #[test]
    fn prop_clean_result_covers_hull(points in jittered_points(40)) {
        let mut all: Vec<Vec2<f64>> = HULL.iter().map(|&(x, y)| Vec2::new(x, y)).collect();
        all.extend(points);

        let triangles = triangulate(&all, true, None).unwrap();

        let area: f64 = triangles.iter().map(|t| t.area()).sum();
        prop_assert!((area - HULL_AREA).abs() < 1e-9 * HULL_AREA, "area {} vs hull {}", area, HULL_AREA);
        // n points with 4 on the hull triangulate into 2n - 6 triangles.
        prop_assert_eq!(triangles.len(), 2 * all.len() - 6);
        prop_assert!(delaunay_violations(&triangles, &all, 1e-7).is_empty());
    }
}
