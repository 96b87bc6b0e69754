//! # Hull Geometry
//!
//! Stateless planar geometry used by the interactive hull graph.
//!
//! ## Architecture
//!
//! ```text
//! hull-graph (live vertices) → hull-geometry (graham_scan) → ordered hull
//! ```
//!
//! ## Algorithms
//!
//! - **Orientation**: adaptive-precision `orient2d` from the `robust` crate
//! - **Angular sort**: `acos`-based polar angle relative to the lowest-leftmost
//!   point, keeping only the farthest point per angle
//! - **Hull**: Graham scan, O(n log n)
//!
//! Any type implementing [`Planar`] can be fed to the scan, so callers get
//! their own items back (with identities intact) rather than bare coordinates.
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec2;
//! use hull_geometry::graham_scan;
//!
//! let points = [
//!     DVec2::new(0.0, 0.0),
//!     DVec2::new(4.0, 0.0),
//!     DVec2::new(4.0, 4.0),
//!     DVec2::new(0.0, 4.0),
//!     DVec2::new(2.0, 2.0),
//! ];
//! let hull = graham_scan(&points).unwrap();
//! assert_eq!(hull.len(), 4);
//! assert_eq!(hull[0], DVec2::new(0.0, 0.0));
//! ```

pub mod error;
pub mod planar;
pub mod predicates;
pub mod scan;

pub use error::{HullError, Result};
pub use glam::DVec2;
pub use planar::Planar;
pub use predicates::{ccw, distance, polar_angle};
pub use scan::{
    graham_scan, graham_scan_with, lowest_leftmost, sorted_by_angle, sorted_by_angle_with,
    HullOptions,
};
