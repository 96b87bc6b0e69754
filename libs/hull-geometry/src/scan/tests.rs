//! # Graham Scan Tests

use super::*;
use glam::DVec2;

fn p(x: f64, y: f64) -> DVec2 {
    DVec2::new(x, y)
}

// =============================================================================
// LOWEST-LEFTMOST
// =============================================================================

#[test]
fn test_lowest_leftmost_prefers_min_y() {
    let points = [p(0.0, 5.0), p(10.0, 1.0), p(-3.0, 2.0)];
    assert_eq!(*lowest_leftmost(&points).unwrap(), p(10.0, 1.0));
}

#[test]
fn test_lowest_leftmost_breaks_ties_by_x() {
    let points = [p(4.0, 0.0), p(-1.0, 0.0), p(2.0, 0.0)];
    assert_eq!(*lowest_leftmost(&points).unwrap(), p(-1.0, 0.0));
}

#[test]
fn test_lowest_leftmost_fractional_difference() {
    // A sub-unit difference in y still decides the winner.
    let points = [p(0.0, 0.75), p(5.0, 0.25)];
    assert_eq!(*lowest_leftmost(&points).unwrap(), p(5.0, 0.25));
}

#[test]
fn test_lowest_leftmost_duplicates_resolve_to_first() {
    let points = [(1.0, 1.0, "first"), (1.0, 1.0, "second")];
    struct Tagged<'a>(&'a (f64, f64, &'a str));
    impl Planar for Tagged<'_> {
        fn position(&self) -> DVec2 {
            DVec2::new(self.0 .0, self.0 .1)
        }
    }
    let tagged: Vec<Tagged> = points.iter().map(Tagged).collect();
    assert_eq!(lowest_leftmost(&tagged).unwrap().0 .2, "first");
}

#[test]
fn test_lowest_leftmost_signed_zeros_tie() {
    let points = [p(5.0, -0.0), p(0.0, 0.0)];
    assert_eq!(*lowest_leftmost(&points).unwrap(), p(0.0, 0.0));

    let points = [p(0.0, 0.0), p(-0.0, -0.0)];
    assert!(lowest_leftmost(&points).unwrap().y.is_sign_positive());
}

#[test]
fn test_lowest_leftmost_empty() {
    let points: [DVec2; 0] = [];
    assert_eq!(lowest_leftmost(&points), Err(HullError::EmptyInput));
}

// =============================================================================
// ANGULAR SORT
// =============================================================================

#[test]
fn test_sorted_by_angle_orders_ascending() {
    let base = p(0.0, 0.0);
    let points = [p(-1.0, 1.0), p(1.0, 0.0), p(0.0, 1.0), p(1.0, 1.0)];
    let sorted = sorted_by_angle(&points, &base);
    assert_eq!(
        sorted,
        vec![&p(1.0, 0.0), &p(1.0, 1.0), &p(0.0, 1.0), &p(-1.0, 1.0)]
    );
}

#[test]
fn test_sorted_by_angle_keeps_farthest_per_bucket() {
    let base = p(0.0, 0.0);
    let points = [p(1.0, 0.0), p(3.0, 0.0), p(2.0, 0.0)];
    assert_eq!(sorted_by_angle(&points, &base), vec![&p(3.0, 0.0)]);
}

#[test]
fn test_sorted_by_angle_skips_base_and_coincident_points() {
    let base = p(2.0, 2.0);
    let points = [base, p(2.0, 2.0), p(5.0, 2.0)];
    assert_eq!(sorted_by_angle(&points, &base), vec![&p(5.0, 2.0)]);
}

#[test]
fn test_sorted_by_angle_with_tolerance_merges_close_angles() {
    let base = p(0.0, 0.0);
    // Nearly the same direction, the second one slightly farther.
    let points = [p(10.0, 10.0), p(20.0, 20.000001)];

    let exact = sorted_by_angle(&points, &base);
    assert_eq!(exact.len(), 2);

    let loose = sorted_by_angle_with(&points, &base, HullOptions::with_tolerance(1e-3)).unwrap();
    assert_eq!(loose, vec![&p(20.0, 20.000001)]);
}

#[test]
fn test_sorted_by_angle_uses_default_options() {
    let base = p(0.0, 0.0);
    let points = [p(3.0, 1.0), p(1.0, 3.0), p(2.0, 2.0), p(6.0, 2.0)];
    assert_eq!(
        sorted_by_angle(&points, &base),
        sorted_by_angle_with(&points, &base, HullOptions::default()).unwrap()
    );
}

#[test]
fn test_sorted_by_angle_with_rejects_bad_tolerance() {
    let base = p(0.0, 0.0);
    let points = [p(1.0, 1.0)];
    assert_eq!(
        sorted_by_angle_with(&points, &base, HullOptions::with_tolerance(-1.0)),
        Err(HullError::InvalidTolerance(-1.0))
    );
    assert!(sorted_by_angle_with(&points, &base, HullOptions::with_tolerance(f64::NAN)).is_err());
}

// =============================================================================
// GRAHAM SCAN
// =============================================================================

#[test]
fn test_empty_input_is_an_error() {
    let points: Vec<DVec2> = Vec::new();
    assert_eq!(graham_scan(&points), Err(HullError::EmptyInput));
}

#[test]
fn test_single_vertex_is_its_own_hull() {
    let points = [p(3.0, 4.0)];
    assert_eq!(graham_scan(&points).unwrap(), vec![p(3.0, 4.0)]);
}

#[test]
fn test_two_vertices_are_both_on_hull() {
    let points = [p(5.0, 5.0), p(1.0, 2.0)];
    let hull = graham_scan(&points).unwrap();
    assert_eq!(hull.len(), 2);
    assert!(hull.contains(&p(5.0, 5.0)));
    assert!(hull.contains(&p(1.0, 2.0)));
}

#[test]
fn test_coincident_vertices_collapse() {
    let points = [p(1.0, 1.0), p(1.0, 1.0), p(1.0, 1.0)];
    assert_eq!(graham_scan(&points).unwrap(), vec![p(1.0, 1.0)]);
}

#[test]
fn test_collinear_middle_vertex_excluded() {
    let points = [p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)];
    assert_eq!(graham_scan(&points).unwrap(), vec![p(0.0, 0.0), p(2.0, 0.0)]);
}

#[test]
fn test_collinear_edge_vertex_on_square_excluded() {
    // (2, 0) lies on the bottom edge, (4, 2) on the right edge.
    let points = [
        p(0.0, 0.0),
        p(2.0, 0.0),
        p(4.0, 0.0),
        p(4.0, 2.0),
        p(4.0, 4.0),
        p(0.0, 4.0),
    ];
    assert_eq!(
        graham_scan(&points).unwrap(),
        vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0)]
    );
}

#[test]
fn test_negative_zero_midpoint_excluded() {
    // (5, -0.0) sits on the bottom edge between (0, 0) and (10, 0).
    let points = [p(0.0, 0.0), p(5.0, -0.0), p(10.0, 0.0), p(5.0, 5.0)];
    assert_eq!(
        graham_scan(&points).unwrap(),
        vec![p(0.0, 0.0), p(10.0, 0.0), p(5.0, 5.0)]
    );
}

#[test]
fn test_square_with_interior_point() {
    let points = [
        p(0.0, 0.0),
        p(4.0, 0.0),
        p(4.0, 4.0),
        p(0.0, 4.0),
        p(2.0, 2.0),
    ];
    assert_eq!(
        graham_scan(&points).unwrap(),
        vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0)]
    );
}

#[test]
fn test_hull_is_independent_of_input_order() {
    let points = [
        p(2.0, 2.0),
        p(0.0, 4.0),
        p(4.0, 4.0),
        p(4.0, 0.0),
        p(0.0, 0.0),
    ];
    assert_eq!(
        graham_scan(&points).unwrap(),
        vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0)]
    );
}

#[test]
fn test_triangle_with_reflex_candidate_popped() {
    // (3, 1) is reached before (4, 4) but turns clockwise afterwards.
    let points = [p(0.0, 0.0), p(5.0, 0.0), p(3.0, 1.0), p(4.0, 4.0)];
    assert_eq!(
        graham_scan(&points).unwrap(),
        vec![p(0.0, 0.0), p(5.0, 0.0), p(4.0, 4.0)]
    );
}

#[test]
fn test_scan_with_rejects_bad_tolerance() {
    let points = [p(0.0, 0.0)];
    assert_eq!(
        graham_scan_with(&points, HullOptions::with_tolerance(f64::INFINITY)),
        Err(HullError::InvalidTolerance(f64::INFINITY))
    );
}
