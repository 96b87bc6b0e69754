//! # Graph Controller
//!
//! Single owner of the graph, the selection and the history. Every
//! high-level edit goes through here and records exactly one action, or none
//! when the edit turns out to be a no-op.
//!
//! ## Flow
//!
//! ```text
//! input layer → GraphController → Graph + Selection
//!                     ↓
//!                  History ← one Action per edit
//! ```
//!
//! Deleting a vertex also deletes the edges that end at it, inside the same
//! action, so an edge never outlives either endpoint and undo restores both.

use std::collections::HashSet;

use config::constants::GraphConfig;
use hull_geometry::{graham_scan_with, HullOptions};
use log::{debug, warn};
use rand::Rng;

use crate::bounds::Bounds;
use crate::error::{GraphError, Result};
use crate::history::{ActionKind, History};
use crate::model::Graph;
use crate::node::{Edge, Node, NodeId, Vertex};
use crate::selection::{PressTarget, Selection, SelectionListener};

/// Interactive hull graph editor state.
///
/// # Examples
/// ```
/// use hull_graph::GraphController;
///
/// let mut graph = GraphController::new();
/// for (x, y) in [(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (2.0, 2.0)] {
///     graph.add_vertex(x, y).unwrap();
/// }
/// assert_eq!(graph.solve().unwrap(), 4);
/// assert_eq!(graph.graph().edges().count(), 4);
///
/// assert!(graph.undo());
/// assert_eq!(graph.graph().edges().count(), 0);
/// ```
#[derive(Debug)]
pub struct GraphController {
    graph: Graph,
    selection: Selection,
    history: History,
    config: GraphConfig,
    next_id: u64,
}

impl Default for GraphController {
    fn default() -> Self {
        Self::with_config(GraphConfig::default())
    }
}

impl GraphController {
    /// Creates an empty controller with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty controller running with `config`.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            graph: Graph::new(),
            selection: Selection::new(),
            history: History::new(),
            config,
            next_id: 0,
        }
    }

    /// Registers the listener told about every selection change.
    pub fn set_selection_listener<L: SelectionListener + 'static>(&mut self, listener: L) {
        self.selection.set_listener(listener);
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// The live graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The recorded actions.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Configuration the controller runs with.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// The configured canvas.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_config(&self.config)
    }

    /// Whether [`undo`](Self::undo) would do anything.
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Whether [`delete_selected`](Self::delete_selected) would do anything.
    pub fn can_delete(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Whether [`clear`](Self::clear) would do anything.
    pub fn can_clear(&self) -> bool {
        !self.graph.is_empty()
    }

    /// Whether [`solve`](Self::solve) has vertices to work on.
    pub fn can_solve(&self) -> bool {
        self.graph.has_vertices()
    }

    // =========================================================================
    // SELECTION
    // =========================================================================

    /// Flips the selection of `id`; `None` when it is not in the graph.
    pub fn toggle(&mut self, id: NodeId) -> Option<bool> {
        self.selection.toggle(&mut self.graph, id)
    }

    /// Deselects everything.
    pub fn clear_selection(&mut self) {
        self.selection.clear(&mut self.graph);
    }

    /// Applies the click-to-select rule for one pointer press.
    ///
    /// A press on the background clears the selection and returns `None`;
    /// a press on a node toggles just that node.
    pub fn press(&mut self, target: PressTarget) -> Option<bool> {
        match target {
            PressTarget::Background => {
                self.clear_selection();
                None
            }
            PressTarget::Node(id) => self.toggle(id),
        }
    }

    // =========================================================================
    // EDITS
    // =========================================================================

    /// Adds a vertex at `(x, y)` and records it.
    ///
    /// # Errors
    ///
    /// [`GraphError::NonFiniteCoordinate`] for NaN or infinite coordinates.
    pub fn add_vertex(&mut self, x: f64, y: f64) -> Result<NodeId> {
        let vertex = Vertex::new(self.peek_id(), x, y).inspect_err(|err| warn!("{err}"))?;
        let id = self.issue_id();
        self.add_batch(vec![Node::from(vertex)]);
        Ok(id)
    }

    /// Connects two vertices and records the new edge.
    ///
    /// # Errors
    ///
    /// [`GraphError::SelfLoop`] when `v1 == v2`, [`GraphError::UnknownVertex`]
    /// when either endpoint is not a vertex of the graph.
    pub fn add_edge(&mut self, v1: NodeId, v2: NodeId) -> Result<NodeId> {
        let edge = {
            let source = self.vertex_or_err(v1)?;
            let target = self.vertex_or_err(v2)?;
            Edge::between(self.peek_id(), source, target).inspect_err(|err| warn!("{err}"))?
        };
        let id = self.issue_id();
        self.add_batch(vec![Node::from(edge)]);
        Ok(id)
    }

    /// Deletes the selected nodes, plus edges ending at deleted vertices.
    ///
    /// Returns the number of nodes deleted; zero means nothing was selected
    /// and nothing was recorded.
    pub fn delete_selected(&mut self) -> usize {
        if self.selection.is_empty() {
            return 0;
        }

        let selected: HashSet<NodeId> = self.selection.selected().iter().copied().collect();
        let cascaded = self
            .graph
            .edges()
            .filter(|edge| !selected.contains(&edge.id()))
            .filter(|edge| selected.contains(&edge.source()) || selected.contains(&edge.target()))
            .map(Edge::id);
        let doomed: Vec<NodeId> = self
            .selection
            .selected()
            .iter()
            .copied()
            .chain(cascaded)
            .collect();

        self.selection.clear(&mut self.graph);
        let removed = self.graph.remove_all(doomed);
        let count = removed.len();
        debug!("delete_selected: {count} node(s)");
        self.history.record(ActionKind::Delete, removed);
        count
    }

    /// Deletes every node.
    ///
    /// Returns the number of nodes deleted; zero means the graph was already
    /// empty and nothing was recorded.
    pub fn clear(&mut self) -> usize {
        if self.graph.is_empty() {
            return 0;
        }
        self.selection.clear(&mut self.graph);
        let removed = self.graph.clear();
        let count = removed.len();
        debug!("clear: {count} node(s)");
        self.history.record(ActionKind::Delete, removed);
        count
    }

    /// Reverts the most recent action.
    ///
    /// Returns `false` when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(action) = self.history.pop() else {
            return false;
        };
        match action.into_parts() {
            (ActionKind::Add, nodes) => {
                let ids: Vec<NodeId> = nodes.iter().map(Node::id).collect();
                self.selection.forget(&mut self.graph, ids.iter().copied());
                self.graph.remove_all(ids);
            }
            (ActionKind::Delete, nodes) => {
                self.graph.add_all(nodes);
            }
        }
        true
    }

    /// Current hull boundary, counter-clockwise from the lowest vertex.
    ///
    /// Records nothing. Empty when the graph has no vertices.
    ///
    /// # Errors
    ///
    /// [`GraphError::Hull`] if the configured angle tolerance is unusable.
    pub fn convex_hull(&self) -> Result<Vec<NodeId>> {
        Ok(self.hull_vertices()?.iter().map(Vertex::id).collect())
    }

    /// Adds the convex hull of the current vertices as one batch of edges.
    ///
    /// One edge per consecutive pair of hull vertices, wrapping last to first,
    /// so a two-vertex hull yields both `a → b` and `b → a`. Returns the number
    /// of edges added. Nothing is recorded when there are no vertices or the
    /// hull is a single point.
    ///
    /// # Errors
    ///
    /// [`GraphError::Hull`] if the configured angle tolerance is unusable.
    pub fn solve(&mut self) -> Result<usize> {
        let hull = self.hull_vertices()?;
        let pairs: Vec<(usize, usize)> = match hull.len() {
            0 | 1 => Vec::new(),
            n => (0..n).map(|i| (i, (i + 1) % n)).collect(),
        };
        if pairs.is_empty() {
            debug!("solve: hull has {} vertex, nothing to add", hull.len());
            return Ok(0);
        }

        let mut edges = Vec::with_capacity(pairs.len());
        for (a, b) in pairs {
            let id = self.issue_id();
            edges.push(Node::from(Edge::between(id, &hull[a], &hull[b])?));
        }
        let count = edges.len();
        debug!("solve: {} hull vertices, {count} edge(s)", hull.len());
        self.add_batch(edges);
        Ok(count)
    }

    /// Adds `count` vertices at uniformly random positions inside `bounds`,
    /// recorded as one action.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidCount`] when `count` is zero,
    /// [`GraphError::InvalidBounds`] for unusable bounds.
    pub fn add_random_vertices(&mut self, count: usize, bounds: Bounds) -> Result<Vec<NodeId>> {
        self.add_random_vertices_with(&mut rand::rng(), count, bounds)
    }

    /// [`add_random_vertices`](Self::add_random_vertices) drawing from `rng`.
    ///
    /// # Errors
    ///
    /// Same as [`add_random_vertices`](Self::add_random_vertices).
    pub fn add_random_vertices_with<R: Rng>(
        &mut self,
        rng: &mut R,
        count: usize,
        bounds: Bounds,
    ) -> Result<Vec<NodeId>> {
        if count == 0 {
            let err = GraphError::InvalidCount(count);
            warn!("{err}");
            return Err(err);
        }
        let bounds = Bounds::new(bounds.width, bounds.height)?;

        let mut vertices = Vec::with_capacity(count);
        for _ in 0..count {
            let x = rng.random_range(0.0..=bounds.width);
            let y = rng.random_range(0.0..=bounds.height);
            vertices.push(Node::from(Vertex::new(self.issue_id(), x, y)?));
        }
        let ids = vertices.iter().map(Node::id).collect();
        self.add_batch(vertices);
        Ok(ids)
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    fn add_batch(&mut self, nodes: Vec<Node>) {
        self.graph.add_all(nodes.iter().cloned());
        self.history.record(ActionKind::Add, nodes);
    }

    fn hull_vertices(&self) -> Result<Vec<Vertex>> {
        let vertices: Vec<&Vertex> = self.graph.vertices().collect();
        if vertices.is_empty() {
            return Ok(Vec::new());
        }
        let options = HullOptions::with_tolerance(self.config.angle_tolerance);
        let hull = graham_scan_with(&vertices, options)?;
        Ok(hull.into_iter().cloned().collect())
    }

    fn vertex_or_err(&self, id: NodeId) -> Result<&Vertex> {
        self.graph.vertex(id).ok_or_else(|| {
            let err = GraphError::UnknownVertex(id);
            warn!("{err}");
            err
        })
    }

    fn peek_id(&self) -> NodeId {
        NodeId::new(self.next_id)
    }

    fn issue_id(&mut self) -> NodeId {
        let id = self.peek_id();
        self.next_id += 1;
        id
    }
}
