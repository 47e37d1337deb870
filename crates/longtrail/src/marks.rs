use fixedbitset::FixedBitSet;

use crate::{
    graph::Graph,
    types::{EdgeId, NodeId, Weight},
};

/// Removed-edge markers owned by a single query.
///
/// A fresh set starts with every edge present. Marking works on logical edges, so both
/// endpoints of an edge observe the removal at once.
#[derive(Debug, Clone)]
pub struct EdgeMarks {
    removed: FixedBitSet,
}

impl EdgeMarks {
    pub fn new(graph: &Graph) -> Self {
        EdgeMarks {
            removed: FixedBitSet::with_capacity(graph.edge_count()),
        }
    }

    #[inline(always)]
    pub fn is_marked(&self, edge: EdgeId) -> bool {
        self.removed.contains(edge.get())
    }

    #[inline(always)]
    pub fn mark(&mut self, edge: EdgeId) {
        self.removed.insert(edge.get());
    }

    #[inline(always)]
    pub fn unmark(&mut self, edge: EdgeId) {
        self.removed.set(edge.get(), false);
    }

    pub fn marked_count(&self) -> usize {
        self.removed.count_ones(..)
    }

    pub fn marked_edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.removed.ones().map(EdgeId::new)
    }

    pub fn marked_weight(&self, graph: &Graph) -> Weight {
        self.marked_edges()
            .map(|edge| graph.edge(edge).weight())
            .sum()
    }

    pub fn unmarked_weight(&self, graph: &Graph) -> Weight {
        graph
            .edges()
            .iter()
            .filter(|edge| !self.is_marked(edge.id()))
            .map(|edge| edge.weight())
            .sum()
    }

    /// Degree of `node` counting only edges that are still present.
    pub fn unmarked_degree(&self, graph: &Graph, node: NodeId) -> usize {
        graph
            .node_edges_iter(node)
            .filter(|&edge| !self.is_marked(edge))
            .count()
    }
}
