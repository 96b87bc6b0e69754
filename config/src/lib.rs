//! # Config Crate
//!
//! Centralized configuration constants for the convex hull graph engine.
//! Every magic number used by the geometry and graph crates is defined here
//! so that hosts and tests agree on the same defaults.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GraphConfig, DEFAULT_CANVAS_WIDTH, VERTEX_RADIUS};
//!
//! let cfg = GraphConfig::default();
//! assert_eq!(cfg.canvas_width, DEFAULT_CANVAS_WIDTH);
//!
//! // Random vertices stay one radius away from the far borders.
//! let usable_width = cfg.canvas_width - VERTEX_RADIUS;
//! assert!(usable_width > 0.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated Snapshots**: `GraphConfig` can only be built with sane values
//! - **No Dependencies**: Safe to depend on from every crate in the workspace

pub mod constants;
