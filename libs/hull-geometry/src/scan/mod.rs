//! # Graham Scan
//!
//! Computes the ordered boundary of the convex hull of a planar point set.
//!
//! ## Algorithm
//!
//! 1. Pick the lowest point as base, breaking ties by the smallest x
//! 2. Sort the remaining points by polar angle around the base, keeping only
//!    the farthest point for each angle
//! 3. Walk the sorted points with a stack, popping the top while the top two
//!    entries and the next point fail to make a counter-clockwise turn
//!
//! The stack, read bottom-to-top, is the hull: base first, then the boundary
//! in counter-clockwise order (y axis pointing up). Collinear boundary points
//! are dropped.

use config::constants::ANGLE_TOLERANCE;
use log::trace;

use crate::error::{HullError, Result};
use crate::planar::Planar;
use crate::predicates::{ccw, distance, polar_angle};

/// Tunables for the angular sort.
///
/// # Examples
/// ```
/// use hull_geometry::HullOptions;
/// assert_eq!(HullOptions::default().angle_tolerance, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HullOptions {
    /// Largest difference, in radians, between two polar angles that are
    /// still treated as the same direction. Zero means exact equality.
    pub angle_tolerance: f64,
}

impl HullOptions {
    /// Options with the given angle tolerance.
    pub fn with_tolerance(angle_tolerance: f64) -> Self {
        Self { angle_tolerance }
    }

    fn validate(&self) -> Result<()> {
        if self.angle_tolerance.is_finite() && self.angle_tolerance >= 0.0 {
            Ok(())
        } else {
            Err(HullError::InvalidTolerance(self.angle_tolerance))
        }
    }
}

impl Default for HullOptions {
    fn default() -> Self {
        Self {
            angle_tolerance: ANGLE_TOLERANCE,
        }
    }
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Finds the ordered vertices on the convex hull of `vertices`.
///
/// A single vertex is its own hull; two distinct vertices are both returned.
///
/// # Errors
///
/// [`HullError::EmptyInput`] when `vertices` is empty.
///
/// # Examples
/// ```
/// use hull_geometry::{graham_scan, DVec2, HullError};
///
/// let hull = graham_scan(&[(0.0, 0.0), (2.0, 0.0), (1.0, 0.0)]).unwrap();
/// assert_eq!(hull, vec![(0.0, 0.0), (2.0, 0.0)]);
///
/// let empty: [DVec2; 0] = [];
/// assert_eq!(graham_scan(&empty), Err(HullError::EmptyInput));
/// ```
pub fn graham_scan<P: Planar + Clone>(vertices: &[P]) -> Result<Vec<P>> {
    graham_scan_with(vertices, HullOptions::default())
}

/// [`graham_scan`] with explicit options.
///
/// # Errors
///
/// [`HullError::EmptyInput`] when `vertices` is empty,
/// [`HullError::InvalidTolerance`] when the tolerance is negative or not finite.
pub fn graham_scan_with<P: Planar + Clone>(vertices: &[P], options: HullOptions) -> Result<Vec<P>> {
    options.validate()?;
    let base = lowest_leftmost(vertices)?;
    let sorted = sorted_by_angle_with(vertices, base, options)?;
    trace!(
        "graham scan: {} input vertices, {} after angular sort",
        vertices.len(),
        sorted.len()
    );

    let mut stack: Vec<&P> = Vec::with_capacity(sorted.len() + 1);
    stack.push(base);
    for v in sorted {
        while let [.., next_to_top, top] = stack[..] {
            if ccw(next_to_top, top, v) {
                break;
            }
            stack.pop();
        }
        stack.push(v);
    }

    trace!("graham scan: {} hull vertices", stack.len());
    Ok(stack.into_iter().cloned().collect())
}

/// Returns the vertex with the smallest y, breaking ties by the smallest x.
///
/// `-0.0` and `0.0` compare equal. Exact duplicates resolve to the first one
/// in input order.
///
/// # Errors
///
/// [`HullError::EmptyInput`] when `vertices` is empty.
///
/// # Examples
/// ```
/// use hull_geometry::lowest_leftmost;
///
/// let points = [(3.0, 1.0), (0.0, 1.0), (2.0, 5.0)];
/// assert_eq!(lowest_leftmost(&points).unwrap(), &(0.0, 1.0));
/// ```
pub fn lowest_leftmost<P: Planar>(vertices: &[P]) -> Result<&P> {
    vertices
        .iter()
        .min_by(|a, b| {
            // Adding +0.0 folds -0.0 into 0.0 so signed zeros tie.
            let (a, b) = (a.position() + 0.0, b.position() + 0.0);
            a.y.total_cmp(&b.y).then_with(|| a.x.total_cmp(&b.x))
        })
        .ok_or(HullError::EmptyInput)
}

/// Sorts `vertices` by polar angle around `base`, bucketing equal angles.
///
/// Within each bucket only the vertex farthest from `base` survives; equally
/// far vertices keep the first in input order. Vertices at the position of
/// `base` (including `base` itself) have no angle and are left out.
///
/// # Examples
/// ```
/// use hull_geometry::sorted_by_angle;
///
/// let base = (0.0, 0.0);
/// let points = [(1.0, 1.0), (2.0, 0.0), (2.0, 2.0), base];
/// let sorted = sorted_by_angle(&points, &base);
/// assert_eq!(sorted, vec![&(2.0, 0.0), &(2.0, 2.0)]);
/// ```
pub fn sorted_by_angle<'a, P: Planar, B: Planar>(vertices: &'a [P], base: &B) -> Vec<&'a P> {
    group_by_angle(vertices, base, HullOptions::default().angle_tolerance)
}

/// [`sorted_by_angle`] with explicit options.
///
/// # Errors
///
/// [`HullError::InvalidTolerance`] when the tolerance is negative or not finite.
pub fn sorted_by_angle_with<'a, P: Planar, B: Planar>(
    vertices: &'a [P],
    base: &B,
    options: HullOptions,
) -> Result<Vec<&'a P>> {
    options.validate()?;
    Ok(group_by_angle(vertices, base, options.angle_tolerance))
}

// =============================================================================
// ANGULAR SORT
// =============================================================================

struct Candidate<'a, P> {
    angle: f64,
    distance: f64,
    vertex: &'a P,
}

fn group_by_angle<'a, P: Planar, B: Planar>(
    vertices: &'a [P],
    base: &B,
    tolerance: f64,
) -> Vec<&'a P> {
    let mut candidates: Vec<Candidate<'a, P>> = vertices
        .iter()
        .filter_map(|vertex| {
            let distance = distance(base, vertex);
            (distance > 0.0).then(|| Candidate {
                angle: polar_angle(base, vertex),
                distance,
                vertex,
            })
        })
        .collect();

    // Stable: equal keys keep input order.
    candidates.sort_by(|a, b| {
        a.angle
            .total_cmp(&b.angle)
            .then_with(|| b.distance.total_cmp(&a.distance))
    });

    let mut survivors: Vec<Candidate<'a, P>> = Vec::with_capacity(candidates.len());
    let mut bucket_angle: Option<f64> = None;
    for candidate in candidates {
        let same_bucket = bucket_angle.is_some_and(|angle| candidate.angle - angle <= tolerance);
        if !same_bucket {
            bucket_angle = Some(candidate.angle);
            survivors.push(candidate);
        } else if let Some(kept) = survivors.last_mut() {
            if candidate.distance > kept.distance {
                *kept = candidate;
            }
        }
    }
    survivors.into_iter().map(|c| c.vertex).collect()
}

#[cfg(test)]
mod tests;
