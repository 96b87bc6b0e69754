//! # Nodes
//!
//! Vertices and edges, the two kinds of item stored in the graph and
//! targeted by selection and history.

use std::fmt;

use hull_geometry::{DVec2, Planar};

use crate::error::{GraphError, Result};

/// Opaque node identity.
///
/// Identities are issued by the graph controller and never reused, so two
/// vertices at the same position are still distinct nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    /// Wraps a raw identity value.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw identity value.
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Capability shared by every node kind: being told about selection changes.
pub trait Selectable {
    /// Whether the node is currently drawn as selected.
    fn is_selected(&self) -> bool;

    /// Called by the selection once per state change.
    fn notify_selection(&mut self, selected: bool);
}

// =============================================================================
// VERTEX
// =============================================================================

/// A point of the graph. Its position never changes after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    id: NodeId,
    position: DVec2,
    selected: bool,
}

impl Vertex {
    /// Creates a vertex at `(x, y)`.
    ///
    /// # Errors
    ///
    /// [`GraphError::NonFiniteCoordinate`] if either coordinate is NaN or
    /// infinite.
    pub fn new(id: NodeId, x: f64, y: f64) -> Result<Self> {
        if !(x.is_finite() && y.is_finite()) {
            return Err(GraphError::NonFiniteCoordinate { x, y });
        }
        Ok(Self {
            id,
            position: DVec2::new(x, y),
            selected: false,
        })
    }

    /// Identity of the vertex.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Horizontal coordinate.
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// Vertical coordinate.
    pub fn y(&self) -> f64 {
        self.position.y
    }
}

impl Planar for Vertex {
    fn position(&self) -> DVec2 {
        self.position
    }
}

impl Selectable for Vertex {
    fn is_selected(&self) -> bool {
        self.selected
    }

    fn notify_selection(&mut self, selected: bool) {
        self.selected = selected;
    }
}

// =============================================================================
// EDGE
// =============================================================================

/// A segment between two distinct vertices.
///
/// Endpoint positions are captured at creation; vertices never move, so they
/// stay accurate for as long as both endpoints exist.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    id: NodeId,
    source: NodeId,
    target: NodeId,
    from: DVec2,
    to: DVec2,
    selected: bool,
}

impl Edge {
    /// Creates the edge `source → target`.
    ///
    /// # Errors
    ///
    /// [`GraphError::SelfLoop`] when both endpoints are the same vertex.
    pub fn between(id: NodeId, source: &Vertex, target: &Vertex) -> Result<Self> {
        if source.id == target.id {
            return Err(GraphError::SelfLoop(source.id));
        }
        Ok(Self {
            id,
            source: source.id,
            target: target.id,
            from: source.position,
            to: target.position,
            selected: false,
        })
    }

    /// Identity of the edge.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Vertex the edge starts at.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Vertex the edge ends at.
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Both endpoints, in order.
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.source, self.target)
    }

    /// Segment coordinates, `(from, to)`.
    pub fn segment(&self) -> (DVec2, DVec2) {
        (self.from, self.to)
    }

    /// Whether `vertex` is one of the endpoints.
    pub fn touches(&self, vertex: NodeId) -> bool {
        self.source == vertex || self.target == vertex
    }
}

impl Selectable for Edge {
    fn is_selected(&self) -> bool {
        self.selected
    }

    fn notify_selection(&mut self, selected: bool) {
        self.selected = selected;
    }
}

// =============================================================================
// NODE
// =============================================================================

/// Anything stored in the graph.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A point.
    Vertex(Vertex),
    /// A segment between two points.
    Edge(Edge),
}

impl Node {
    /// Identity of the node.
    pub fn id(&self) -> NodeId {
        match self {
            Node::Vertex(v) => v.id(),
            Node::Edge(e) => e.id(),
        }
    }

    /// The vertex, if this node is one.
    pub fn as_vertex(&self) -> Option<&Vertex> {
        match self {
            Node::Vertex(v) => Some(v),
            Node::Edge(_) => None,
        }
    }

    /// The edge, if this node is one.
    pub fn as_edge(&self) -> Option<&Edge> {
        match self {
            Node::Edge(e) => Some(e),
            Node::Vertex(_) => None,
        }
    }
}

impl Selectable for Node {
    fn is_selected(&self) -> bool {
        match self {
            Node::Vertex(v) => v.is_selected(),
            Node::Edge(e) => e.is_selected(),
        }
    }

    fn notify_selection(&mut self, selected: bool) {
        match self {
            Node::Vertex(v) => v.notify_selection(selected),
            Node::Edge(e) => e.notify_selection(selected),
        }
    }
}

impl From<Vertex> for Node {
    fn from(vertex: Vertex) -> Self {
        Node::Vertex(vertex)
    }
}

impl From<Edge> for Node {
    fn from(edge: Edge) -> Self {
        Node::Edge(edge)
    }
}
