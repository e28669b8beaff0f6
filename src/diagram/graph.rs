//! petgraph-based directed graph for the compiled workflow.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Trigger,
    Step,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowNode {
    /// Mermaid node identifier (no hyphens).
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
}

/// Nodes in insertion order: the trigger first, then one per step.
/// Steps sharing an id are still separate nodes here.
#[derive(Debug, Clone, Default)]
pub struct FlowGraph {
    pub graph: DiGraph<FlowNode, ()>,
}

impl FlowGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: FlowNode) -> NodeIndex {
        self.graph.add_node(node)
    }

    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex) {
        self.graph.add_edge(from, to, ());
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn node_ids(&self) -> Vec<&str> {
        self.graph
            .node_indices()
            .map(|idx| self.graph[idx].id.as_str())
            .collect()
    }

    /// Edges as `(from_id, to_id)` in insertion order.
    pub fn edges(&self) -> Vec<(&str, &str)> {
        self.graph
            .edge_references()
            .map(|e| {
                (
                    self.graph[e.source()].id.as_str(),
                    self.graph[e.target()].id.as_str(),
                )
            })
            .collect()
    }

    pub fn trigger(&self) -> Option<&FlowNode> {
        self.graph
            .node_weights()
            .find(|n| n.kind == NodeKind::Trigger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, kind: NodeKind) -> FlowNode {
        FlowNode {
            id: id.into(),
            label: id.into(),
            kind,
        }
    }

    #[test]
    fn edges_keep_insertion_order() {
        let mut g = FlowGraph::new();
        let t = g.add_node(node("trigger", NodeKind::Trigger));
        let a = g.add_node(node("a", NodeKind::Step));
        let b = g.add_node(node("b", NodeKind::Step));
        g.add_edge(t, a);
        g.add_edge(a, b);
        assert_eq!(g.node_ids(), vec!["trigger", "a", "b"]);
        assert_eq!(g.edges(), vec![("trigger", "a"), ("a", "b")]);
        assert_eq!(g.trigger().map(|n| n.id.as_str()), Some("trigger"));
    }

    #[test]
    fn duplicate_ids_stay_distinct_nodes() {
        let mut g = FlowGraph::new();
        g.add_node(node("x", NodeKind::Step));
        g.add_node(node("x", NodeKind::Step));
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 0);
    }
}
