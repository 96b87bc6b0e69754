//! # Hull Errors
//!
//! Error types for hull computation. The hull algorithm is strict about its
//! input contract and reports violations instead of returning an empty hull.

use thiserror::Error;

/// Errors that can occur while computing a convex hull.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HullError {
    /// The input collection held no vertices.
    ///
    /// Callers are expected to check for an empty vertex set first and treat
    /// it as a no-op.
    #[error("Convex hull requires at least one vertex")]
    EmptyInput,

    /// The angle tolerance handed to the angular sort was unusable.
    #[error("Invalid angle tolerance: {0}")]
    InvalidTolerance(f64),
}

/// Result type alias for hull operations.
pub type Result<T> = std::result::Result<T, HullError>;

// =============================================================================
// TESTS
// =============================================================================
