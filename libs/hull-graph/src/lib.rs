//! # Hull Graph
//!
//! Mutable state of the interactive convex hull editor: a graph of vertices
//! and edges, the selection over it, and an undo history of edits.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    GraphController                       │
//! │   add_vertex · add_edge · delete_selected · clear ·      │
//! │   undo · solve · add_random_vertices · press             │
//! └───────┬───────────────────┬──────────────────┬───────────┘
//!         ↓                   ↓                  ↓
//!   ┌───────────┐       ┌───────────┐      ┌───────────┐
//!   │   Graph   │ ←──── │ Selection │      │  History  │
//!   └───────────┘       └───────────┘      └───────────┘
//!         ↓
//!   hull-geometry (graham_scan)
//! ```
//!
//! The controller is the only writer. Rendering layers observe the graph
//! through [`GraphController::graph`] and selection changes through a
//! [`SelectionListener`].
//!
//! ## Usage
//!
//! ```rust
//! use hull_graph::{GraphController, PressTarget};
//!
//! let mut editor = GraphController::new();
//! let a = editor.add_vertex(0.0, 0.0).unwrap();
//! let b = editor.add_vertex(10.0, 0.0).unwrap();
//! editor.add_vertex(5.0, 8.0).unwrap();
//!
//! assert_eq!(editor.solve().unwrap(), 3);
//!
//! editor.press(PressTarget::Node(a));
//! editor.press(PressTarget::Node(b));
//! // Both vertices and the three hull edges touching them.
//! assert_eq!(editor.delete_selected(), 5);
//!
//! assert!(editor.undo());
//! assert_eq!(editor.graph().len(), 6);
//! ```

pub mod bounds;
pub mod controller;
pub mod error;
pub mod history;
pub mod model;
pub mod node;
pub mod selection;

pub use bounds::Bounds;
pub use controller::GraphController;
pub use error::{GraphError, Result};
pub use history::{Action, ActionKind, History};
pub use model::Graph;
pub use node::{Edge, Node, NodeId, Selectable, Vertex};
pub use selection::{PressTarget, Selection, SelectionListener};
