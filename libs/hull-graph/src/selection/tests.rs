use super::*;
use crate::node::{Node, Vertex};
use std::cell::RefCell;
use std::rc::Rc;

type Log = Rc<RefCell<Vec<(NodeId, bool)>>>;

fn graph_with(raw: &[u64]) -> Graph {
    let mut graph = Graph::new();
    graph.add_all(
        raw.iter()
            .map(|&r| Node::from(Vertex::new(NodeId::new(r), r as f64, 0.0).unwrap())),
    );
    graph
}

fn recording() -> (Selection, Log) {
    let log: Log = Rc::default();
    let sink = Rc::clone(&log);
    let mut selection = Selection::new();
    selection.set_listener(move |id: NodeId, selected: bool| {
        sink.borrow_mut().push((id, selected))
    });
    (selection, log)
}

fn is_marked(graph: &Graph, raw: u64) -> bool {
    graph
        .get(NodeId::new(raw))
        .is_some_and(Selectable::is_selected)
}

#[test]
fn test_toggle_flips_membership() {
    let mut graph = graph_with(&[1, 2]);
    let mut selection = Selection::new();
    let id = NodeId::new(1);

    assert_eq!(selection.toggle(&mut graph, id), Some(true));
    assert!(selection.is_selected(id));
    assert!(!selection.is_empty());
    assert!(is_marked(&graph, 1));

    assert_eq!(selection.toggle(&mut graph, id), Some(false));
    assert!(selection.is_empty());
    assert!(!is_marked(&graph, 1));
}

#[test]
fn test_toggle_notifies_exactly_once() {
    let mut graph = graph_with(&[1, 2]);
    let (mut selection, log) = recording();

    selection.toggle(&mut graph, NodeId::new(2));
    selection.toggle(&mut graph, NodeId::new(2));
    assert_eq!(
        *log.borrow(),
        vec![(NodeId::new(2), true), (NodeId::new(2), false)]
    );
}

#[test]
fn test_toggle_ignores_nodes_outside_graph() {
    let mut graph = graph_with(&[1]);
    let (mut selection, log) = recording();

    assert_eq!(selection.toggle(&mut graph, NodeId::new(9)), None);
    assert!(selection.is_empty());
    assert!(log.borrow().is_empty());
}

#[test]
fn test_clear_deselects_each_once() {
    let mut graph = graph_with(&[1, 2, 3]);
    let (mut selection, log) = recording();
    selection.toggle(&mut graph, NodeId::new(3));
    selection.toggle(&mut graph, NodeId::new(1));
    log.borrow_mut().clear();

    selection.clear(&mut graph);
    assert!(selection.is_empty());
    assert_eq!(
        *log.borrow(),
        vec![(NodeId::new(3), false), (NodeId::new(1), false)]
    );
    assert!(!is_marked(&graph, 1));
    assert!(!is_marked(&graph, 3));
}

#[test]
fn test_clear_is_idempotent() {
    let mut graph = graph_with(&[1]);
    let (mut selection, log) = recording();
    selection.clear(&mut graph);
    selection.clear(&mut graph);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_selected_keeps_selection_order() {
    let mut graph = graph_with(&[1, 2, 3]);
    let mut selection = Selection::new();
    for raw in [3, 1, 2] {
        selection.toggle(&mut graph, NodeId::new(raw));
    }
    selection.toggle(&mut graph, NodeId::new(1));
    assert_eq!(selection.selected(), &[NodeId::new(3), NodeId::new(2)]);
    assert_eq!(selection.len(), 2);
}

#[test]
fn test_forget_only_touches_selected_nodes() {
    let mut graph = graph_with(&[1, 2, 3]);
    let (mut selection, log) = recording();
    selection.toggle(&mut graph, NodeId::new(2));
    log.borrow_mut().clear();

    selection.forget(&mut graph, [NodeId::new(1), NodeId::new(2)]);
    assert!(selection.is_empty());
    assert_eq!(*log.borrow(), vec![(NodeId::new(2), false)]);
}

#[test]
fn test_listener_can_be_removed() {
    let mut graph = graph_with(&[1]);
    let (mut selection, log) = recording();
    selection.clear_listener();
    selection.toggle(&mut graph, NodeId::new(1));
    assert!(log.borrow().is_empty());
    assert!(format!("{selection:?}").contains("has_listener: false"));
}
