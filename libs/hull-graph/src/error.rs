//! # Graph Errors
//!
//! Error types for graph controller operations. Set mutations and selection
//! toggles never fail; these errors only cover caller-contract violations
//! and geometry failures.

use hull_geometry::HullError;
use thiserror::Error;

use crate::node::NodeId;

/// Errors that can occur while editing the graph.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// An edge was requested from a vertex to itself.
    #[error("Edge endpoints must differ: {0} connects to itself")]
    SelfLoop(NodeId),

    /// An edge endpoint is not a vertex of the graph.
    #[error("Unknown vertex: {0}")]
    UnknownVertex(NodeId),

    /// Random generation was asked for zero vertices.
    #[error("Invalid vertex count: {0} (must be at least 1)")]
    InvalidCount(usize),

    /// Random generation bounds were negative or not finite.
    #[error("Invalid bounds: {width}x{height}")]
    InvalidBounds {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },

    /// A vertex coordinate was NaN or infinite.
    #[error("Vertex coordinates must be finite: ({x}, {y})")]
    NonFiniteCoordinate {
        /// Requested x.
        x: f64,
        /// Requested y.
        y: f64,
    },

    /// The hull solver rejected its input.
    #[error("Hull error: {0}")]
    Hull(#[from] HullError),
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

// =============================================================================
// TESTS
// =============================================================================
