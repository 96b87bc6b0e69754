//! # Configuration Constants
//!
//! Centralized values shared by the hull geometry and graph crates.
//!
//! ## Categories
//!
//! - **Canvas**: Default drawing surface used for random vertex generation
//! - **Precision**: Angle bucketing tolerance for the Graham scan sort
//! - **Limits**: Maximum values for safety bounds

use std::fmt;

// =============================================================================
// CANVAS CONSTANTS
// =============================================================================

/// Default canvas width in user units.
///
/// Matches the minimum size of the interactive drawing surface.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_CANVAS_WIDTH;
/// assert!(DEFAULT_CANVAS_WIDTH > 0.0);
/// ```
pub const DEFAULT_CANVAS_WIDTH: f64 = 500.0;

/// Default canvas height in user units.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_CANVAS_HEIGHT;
/// assert!(DEFAULT_CANVAS_HEIGHT > 0.0);
/// ```
pub const DEFAULT_CANVAS_HEIGHT: f64 = 500.0;

/// Radius a vertex is drawn with.
///
/// The core never draws anything, but random generation keeps vertices
/// this far from the right and bottom borders so they stay fully visible.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_CANVAS_WIDTH, VERTEX_RADIUS};
/// let max_x = DEFAULT_CANVAS_WIDTH - VERTEX_RADIUS;
/// assert_eq!(max_x, 485.0);
/// ```
pub const VERTEX_RADIUS: f64 = 15.0;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance used when grouping vertices by polar angle.
///
/// Zero means angles are bucketed by exact floating-point equality, which
/// keeps the classic Graham scan behaviour. A positive value merges angles
/// that differ by at most this many radians.
///
/// # Examples
/// ```
/// use config::constants::ANGLE_TOLERANCE;
/// let (a, b) = (0.5_f64, 0.5_f64);
/// assert!((a - b).abs() <= ANGLE_TOLERANCE);
/// ```
pub const ANGLE_TOLERANCE: f64 = 0.0;

// =============================================================================
// CONFIG SNAPSHOT
// =============================================================================

/// Immutable snapshot of the settings a graph controller runs with.
///
/// # Examples
/// ```
/// use config::constants::GraphConfig;
/// let config = GraphConfig::default();
/// assert!(config.canvas_width > 0.0);
/// assert_eq!(config.angle_tolerance, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphConfig {
    /// Width of the area random vertices are generated in.
    pub canvas_width: f64,
    /// Height of the area random vertices are generated in.
    pub canvas_height: f64,
    /// Angle bucketing tolerance handed to the hull solver.
    pub angle_tolerance: f64,
}

impl GraphConfig {
    /// Builds a configuration enforcing strict validation of every field.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GraphConfig;
    /// let cfg = GraphConfig::new(800.0, 600.0, 0.0).expect("valid config");
    /// assert_eq!(cfg.canvas_height, 600.0);
    /// assert!(GraphConfig::new(-1.0, 600.0, 0.0).is_err());
    /// ```
    pub fn new(
        canvas_width: f64,
        canvas_height: f64,
        angle_tolerance: f64,
    ) -> Result<Self, ConfigError> {
        if !(canvas_width.is_finite() && canvas_width > 0.0) {
            return Err(ConfigError::InvalidCanvas {
                width: canvas_width,
                height: canvas_height,
            });
        }
        if !(canvas_height.is_finite() && canvas_height > 0.0) {
            return Err(ConfigError::InvalidCanvas {
                width: canvas_width,
                height: canvas_height,
            });
        }
        if !(angle_tolerance.is_finite() && angle_tolerance >= 0.0) {
            return Err(ConfigError::InvalidTolerance(angle_tolerance));
        }
        Ok(Self {
            canvas_width,
            canvas_height,
            angle_tolerance,
        })
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            angle_tolerance: ANGLE_TOLERANCE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when a canvas dimension is zero, negative or not finite.
    InvalidCanvas {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },
    /// Raised when the angle tolerance is negative or not finite.
    InvalidTolerance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidCanvas { width, height } => {
                write!(f, "canvas must be positive and finite: {width}x{height}")
            }
            ConfigError::InvalidTolerance(value) => {
                write!(f, "angle tolerance must be >= 0 and finite: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
