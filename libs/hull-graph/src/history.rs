//! # Action History
//!
//! Stack of reversible edit records. Each action is one logical user
//! operation and carries value snapshots of the nodes it added or deleted,
//! so a deletion can be reverted after the graph dropped those nodes.
//!
//! Undoing pops from the stack and never pushes; there is no redo.

use log::debug;

use crate::node::{Node, NodeId};

/// What an action did to its nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// The nodes were added; undone by removing them.
    Add,
    /// The nodes were deleted; undone by adding them back.
    Delete,
}

/// One undoable batch of nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    kind: ActionKind,
    nodes: Vec<Node>,
}

impl Action {
    /// Kind of the action.
    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    /// Snapshots of the affected nodes.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Identities of the affected nodes.
    pub fn ids(&self) -> Vec<NodeId> {
        self.nodes.iter().map(Node::id).collect()
    }

    /// Number of affected nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the action names no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Splits the action into its parts.
    pub fn into_parts(self) -> (ActionKind, Vec<Node>) {
        (self.kind, self.nodes)
    }
}

/// Ordered stack of actions, most recent last.
#[derive(Debug, Clone, Default)]
pub struct History {
    actions: Vec<Action>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new action.
    ///
    /// Always succeeds. Callers are expected not to record empty batches.
    pub fn record(&mut self, kind: ActionKind, nodes: Vec<Node>) {
        debug!("history: recorded {kind:?} of {} node(s)", nodes.len());
        self.actions.push(Action { kind, nodes });
    }

    /// Removes and returns the most recent action.
    pub fn pop(&mut self) -> Option<Action> {
        let action = self.actions.pop();
        if let Some(action) = &action {
            debug!(
                "history: popped {:?} of {} node(s), {} left",
                action.kind,
                action.len(),
                self.actions.len()
            );
        }
        action
    }

    /// The most recent action.
    pub fn last(&self) -> Option<&Action> {
        self.actions.last()
    }

    /// Whether there is nothing to undo.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Number of recorded actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Iterates actions, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Action> + '_ {
        self.actions.iter()
    }
}
