//! # Selection (Clipboard)
//!
//! Tracks the selected subset of the graph. Every change of a node's
//! selection state is reported exactly once: to the node itself through
//! [`Selectable::notify_selection`], and to the registered
//! [`SelectionListener`] if there is one.
//!
//! The selection only ever holds identities of nodes present in the graph.
//! Nodes leaving the graph must be passed to [`Selection::forget`] first.

use std::fmt;

use log::trace;

use crate::model::Graph;
use crate::node::{NodeId, Selectable};

/// Receives selection changes, typically the rendering layer.
pub trait SelectionListener {
    /// Called once per node whose selection state changed.
    fn selection_changed(&mut self, id: NodeId, selected: bool);
}

impl<F: FnMut(NodeId, bool)> SelectionListener for F {
    fn selection_changed(&mut self, id: NodeId, selected: bool) {
        self(id, selected)
    }
}

/// What a pointer press landed on, as resolved by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressTarget {
    /// The empty canvas, the root container, or anything not selectable.
    Background,
    /// A vertex or edge.
    Node(NodeId),
}

/// Ordered set of selected node identities.
#[derive(Default)]
pub struct Selection {
    selected: Vec<NodeId>,
    listener: Option<Box<dyn SelectionListener>>,
}

impl Selection {
    /// Creates an empty selection without a listener.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the listener told about every selection change.
    pub fn set_listener<L: SelectionListener + 'static>(&mut self, listener: L) {
        self.listener = Some(Box::new(listener));
    }

    /// Drops the registered listener.
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Flips the selection state of `id`.
    ///
    /// Returns the new state, or `None` (and does nothing) when `id` is not
    /// in the graph.
    pub fn toggle(&mut self, graph: &mut Graph, id: NodeId) -> Option<bool> {
        if !graph.contains(id) {
            return None;
        }
        let selected = !self.is_selected(id);
        self.set(graph, id, selected);
        Some(selected)
    }

    /// Deselects every selected node, notifying each once.
    pub fn clear(&mut self, graph: &mut Graph) {
        for id in std::mem::take(&mut self.selected) {
            self.notify(graph, id, false);
        }
    }

    /// Deselects those of `ids` that are selected.
    ///
    /// Call this before the nodes leave the graph so they can still be
    /// notified.
    pub fn forget<I>(&mut self, graph: &mut Graph, ids: I)
    where
        I: IntoIterator<Item = NodeId>,
    {
        for id in ids {
            if self.is_selected(id) {
                self.set(graph, id, false);
            }
        }
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Number of selected nodes.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether `id` is selected.
    pub fn is_selected(&self, id: NodeId) -> bool {
        self.selected.contains(&id)
    }

    /// Selected identities, oldest selection first.
    pub fn selected(&self) -> &[NodeId] {
        &self.selected
    }

    fn set(&mut self, graph: &mut Graph, id: NodeId, selected: bool) {
        if selected {
            self.selected.push(id);
        } else {
            self.selected.retain(|other| *other != id);
        }
        self.notify(graph, id, selected);
    }

    fn notify(&mut self, graph: &mut Graph, id: NodeId, selected: bool) {
        trace!("selection: {id} -> {selected}");
        if let Some(node) = graph.get_mut(id) {
            node.notify_selection(selected);
        }
        if let Some(listener) = self.listener.as_mut() {
            listener.selection_changed(id, selected);
        }
    }
}

impl fmt::Debug for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selection")
            .field("selected", &self.selected)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests;
