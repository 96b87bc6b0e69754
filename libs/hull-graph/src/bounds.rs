//! Rectangular area random vertices are generated in.

use config::constants::GraphConfig;
use hull_geometry::DVec2;

use crate::error::{GraphError, Result};

/// The area `[0, width] × [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Bounds {
    /// Creates bounds, rejecting negative or non-finite extents.
    ///
    /// # Examples
    /// ```
    /// use hull_graph::Bounds;
    /// assert!(Bounds::new(100.0, 50.0).is_ok());
    /// assert!(Bounds::new(-1.0, 50.0).is_err());
    /// ```
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let valid = |v: f64| v.is_finite() && v >= 0.0;
        if !(valid(width) && valid(height)) {
            return Err(GraphError::InvalidBounds { width, height });
        }
        Ok(Self { width, height })
    }

    /// The canvas described by `config`.
    pub fn from_config(config: &GraphConfig) -> Self {
        Self {
            width: config.canvas_width,
            height: config.canvas_height,
        }
    }

    /// Shrinks the far edges by `margin`, never below zero.
    ///
    /// # Examples
    /// ```
    /// use config::constants::VERTEX_RADIUS;
    /// use hull_graph::Bounds;
    ///
    /// let inner = Bounds::new(500.0, 500.0).unwrap().inset(VERTEX_RADIUS);
    /// assert_eq!(inner.width, 485.0);
    /// assert_eq!(Bounds::new(10.0, 10.0).unwrap().inset(20.0).width, 0.0);
    /// ```
    pub fn inset(self, margin: f64) -> Self {
        Self {
            width: (self.width - margin).max(0.0),
            height: (self.height - margin).max(0.0),
        }
    }

    /// Whether `point` lies inside, borders included.
    pub fn contains(&self, point: DVec2) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::from_config(&GraphConfig::default())
    }
}
