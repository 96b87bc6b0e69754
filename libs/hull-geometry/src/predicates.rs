//! # Planar Predicates
//!
//! Distance, polar angle and the orientation test used by the Graham scan.

use crate::planar::Planar;
use robust::{orient2d, Coord};

/// Euclidean distance between two items.
///
/// # Examples
/// ```
/// use hull_geometry::{distance, DVec2};
/// assert_eq!(distance(&DVec2::ZERO, &DVec2::new(3.0, 4.0)), 5.0);
/// ```
pub fn distance<A: Planar, B: Planar>(a: &A, b: &B) -> f64 {
    a.position().distance(b.position())
}

/// Polar angle of `v` around `base`, measured from the positive x axis.
///
/// Computed as `acos(dx / |v - base|)`, so the result lies in `[0, π]` and
/// cannot tell `θ` from `-θ`. It is only a valid sort key when `base` is the
/// lowest-leftmost point of the set, which puts every other point at
/// `y >= base.y`. Returns NaN when `v` coincides with `base`.
///
/// # Examples
/// ```
/// use hull_geometry::{polar_angle, DVec2};
/// use std::f64::consts::FRAC_PI_2;
///
/// let up = polar_angle(&DVec2::ZERO, &DVec2::new(0.0, 2.0));
/// assert!((up - FRAC_PI_2).abs() < 1e-12);
/// ```
pub fn polar_angle<B: Planar, V: Planar>(base: &B, v: &V) -> f64 {
    let (base, v) = (base.position(), v.position());
    ((v.x - base.x) / base.distance(v)).acos()
}

/// Whether `v1 → v2 → v3` makes a strictly counter-clockwise turn.
///
/// True iff `(v2.x−v1.x)(v3.y−v1.y) − (v2.y−v1.y)(v3.x−v1.x) > 0`, with the
/// sign evaluated exactly. Collinear triples are not counter-clockwise.
///
/// # Examples
/// ```
/// use hull_geometry::{ccw, DVec2};
///
/// let (a, b) = (DVec2::new(0.0, 0.0), DVec2::new(1.0, 0.0));
/// assert!(ccw(&a, &b, &DVec2::new(1.0, 1.0)));
/// assert!(!ccw(&a, &b, &DVec2::new(1.0, -1.0)));
/// assert!(!ccw(&a, &b, &DVec2::new(2.0, 0.0)));
/// ```
pub fn ccw<A: Planar, B: Planar, C: Planar>(v1: &A, v2: &B, v3: &C) -> bool {
    orient2d(coord(v1), coord(v2), coord(v3)) > 0.0
}

fn coord<P: Planar>(p: &P) -> Coord<f64> {
    let at = p.position();
    Coord { x: at.x, y: at.y }
}
