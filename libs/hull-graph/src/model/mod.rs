//! # Graph Model
//!
//! Owns every live vertex and edge. All operations are set-semantic and
//! total: adding a node that is already present, or removing one that is
//! absent, leaves that node alone.
//!
//! Nodes iterate in insertion order. Removing nodes preserves the relative
//! order of the rest; re-adding a node appends it.

use std::collections::{HashMap, HashSet};

use crate::node::{Edge, Node, NodeId, Vertex};

/// Insertion-ordered set of nodes keyed by identity.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    order: Vec<NodeId>,
    nodes: HashMap<NodeId, Node>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `node` unless a node with the same identity is present.
    ///
    /// Returns whether the node was inserted.
    pub fn add(&mut self, node: Node) -> bool {
        let id = node.id();
        if self.nodes.contains_key(&id) {
            return false;
        }
        self.order.push(id);
        self.nodes.insert(id, node);
        true
    }

    /// Adds every node, skipping identities already present.
    ///
    /// Returns the identities actually inserted, in insertion order.
    pub fn add_all<I>(&mut self, nodes: I) -> Vec<NodeId>
    where
        I: IntoIterator<Item = Node>,
    {
        nodes
            .into_iter()
            .filter_map(|node| {
                let id = node.id();
                self.add(node).then_some(id)
            })
            .collect()
    }

    /// Removes every listed node that is present.
    ///
    /// Returns the removed nodes in graph order.
    pub fn remove_all<I>(&mut self, ids: I) -> Vec<Node>
    where
        I: IntoIterator<Item = NodeId>,
    {
        let doomed: HashSet<NodeId> = ids
            .into_iter()
            .filter(|id| self.nodes.contains_key(id))
            .collect();
        if doomed.is_empty() {
            return Vec::new();
        }

        let mut removed = Vec::with_capacity(doomed.len());
        let nodes = &mut self.nodes;
        self.order.retain(|id| {
            if !doomed.contains(id) {
                return true;
            }
            if let Some(node) = nodes.remove(id) {
                removed.push(node);
            }
            false
        });
        removed
    }

    /// Removes every node, returning them in graph order.
    pub fn clear(&mut self) -> Vec<Node> {
        let mut nodes = std::mem::take(&mut self.nodes);
        std::mem::take(&mut self.order)
            .into_iter()
            .filter_map(|id| nodes.remove(&id))
            .collect()
    }

    /// Whether a node with this identity is present.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Looks up a node.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    /// Looks up a vertex; `None` for edges and absent nodes.
    pub fn vertex(&self, id: NodeId) -> Option<&Vertex> {
        self.get(id).and_then(Node::as_vertex)
    }

    /// Whether the graph holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Iterates nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> + '_ {
        self.order.iter().filter_map(|id| self.nodes.get(id))
    }

    /// Snapshot of every node in insertion order.
    pub fn all(&self) -> Vec<Node> {
        self.iter().cloned().collect()
    }

    /// Identities in insertion order.
    pub fn ids(&self) -> Vec<NodeId> {
        self.order.clone()
    }

    /// Iterates vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.iter().filter_map(Node::as_vertex)
    }

    /// Iterates edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.iter().filter_map(Node::as_edge)
    }

    /// Whether the graph holds at least one vertex.
    pub fn has_vertices(&self) -> bool {
        self.vertices().next().is_some()
    }

    /// Identities of the edges with `vertex` as an endpoint.
    pub fn incident_edges(&self, vertex: NodeId) -> Vec<NodeId> {
        self.edges()
            .filter(|edge| edge.touches(vertex))
            .map(Edge::id)
            .collect()
    }
}
