use std::sync::Arc;

use crate::{
    dijkstra::ShortestPaths,
    graph::Graph,
    matching::MatchingEdge,
    types::NodeId,
};

/// Degree of `node` once a virtual edge between `s` and `t` is added.
///
/// When `s == t` the virtual edge is a loop and adds two.
pub fn adjusted_degree(graph: &Graph, node: NodeId, s: NodeId, t: NodeId) -> usize {
    graph.degree(node) + usize::from(node == s) + usize::from(node == t)
}

/// Nodes whose parity must be flipped for an Euler trail from `s` to `t` to exist.
///
/// Nodes are kept in ascending id order and the position of a node is its dense matching
/// id. The set always has an even size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExposedNodes {
    nodes: Vec<NodeId>,
}

impl ExposedNodes {
    pub fn find(graph: &Graph, s: NodeId, t: NodeId) -> Self {
        let nodes = graph
            .node_ids()
            .filter(|&node| adjusted_degree(graph, node, s, t) % 2 == 1)
            .collect();

        ExposedNodes { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node behind a dense matching id.
    pub fn node(&self, id: usize) -> NodeId {
        self.nodes[id]
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    pub fn as_slice(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Complete graph over the exposed nodes weighted by shortest-path distance.
    ///
    /// `paths[id]` must hold the shortest paths from `self.node(id)`. Pairs that cannot
    /// reach each other are left out.
    pub fn matching_edges(&self, paths: &[Arc<ShortestPaths>]) -> Vec<MatchingEdge> {
        debug_assert_eq!(paths.len(), self.nodes.len());

        let mut edges = Vec::with_capacity(self.nodes.len() * self.nodes.len().saturating_sub(1) / 2);
        for (u, paths_u) in paths.iter().enumerate() {
            for v in (u + 1)..self.nodes.len() {
                if let Some(distance) = paths_u.distance(self.nodes[v]) {
                    edges.push(MatchingEdge::new(u, v, distance));
                }
            }
        }

        edges
    }
}
