use std::collections::BTreeMap;

use crate::types::{EdgeId, NodeId, Weight};

/// An undirected edge of the multigraph.
///
/// Both endpoints reference the same `EdgeId` from their adjacency lists, so the two
/// directions of an edge can never be removed independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphEdge {
    id: EdgeId,
    start_node: NodeId,
    end_node: NodeId,
    weight: Weight,
}

impl GraphEdge {
    pub fn new(id: EdgeId, start_node: NodeId, end_node: NodeId, weight: Weight) -> Self {
        GraphEdge {
            id,
            start_node,
            end_node,
            weight,
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn start_node(&self) -> NodeId {
        self.start_node
    }

    pub fn end_node(&self) -> NodeId {
        self.end_node
    }

    pub fn adj_node(&self, node: NodeId) -> NodeId {
        if self.start_node == node {
            self.end_node
        } else {
            self.start_node
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct Node {
    edges: Vec<EdgeId>,
}

impl Node {
    /// Incident edges in insertion order. A self-loop is listed twice.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub fn degree(&self) -> usize {
        self.edges.len()
    }
}

/// Weighted undirected multigraph keyed by arbitrary integer node ids.
///
/// The topology is frozen once built: queries only ever read it, and any per-query
/// state (removed edges, exposed nodes) lives outside the graph.
#[derive(Debug, Default, Clone)]
pub struct Graph {
    nodes: BTreeMap<NodeId, Node>,
    edges: Vec<GraphEdge>,
}

impl Graph {
    pub fn builder() -> GraphBuilder {
        GraphBuilder::default()
    }

    pub fn from_edges<I>(edges: I) -> Graph
    where
        I: IntoIterator<Item = (NodeId, NodeId, Weight)>,
    {
        let mut builder = GraphBuilder::default();
        for (a, b, weight) in edges {
            builder.add_edge(a, b, weight);
        }
        builder.build()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_node(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    pub fn node(&self, node: NodeId) -> Option<&Node> {
        self.nodes.get(&node)
    }

    /// Node ids in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.nodes.iter().map(|(&id, node)| (id, node))
    }

    /// Incident edges of `node`; empty for unknown nodes.
    pub fn node_edges_iter(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        self.nodes
            .get(&node)
            .map(|node| node.edges.as_slice())
            .unwrap_or_default()
            .iter()
            .copied()
    }

    pub fn edge(&self, edge: EdgeId) -> &GraphEdge {
        &self.edges[edge]
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn degree(&self, node: NodeId) -> usize {
        self.nodes.get(&node).map_or(0, Node::degree)
    }

    pub fn total_weight(&self) -> Weight {
        self.edges.iter().map(GraphEdge::weight).sum()
    }
}

#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    /// Registers an isolated node. Adding an existing node is a no-op.
    pub fn add_node(&mut self, node: NodeId) -> &mut Self {
        self.graph.nodes.entry(node).or_default();
        self
    }

    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: Weight) -> EdgeId {
        let edge_id = EdgeId::new(self.graph.edges.len());
        self.graph
            .edges
            .push(GraphEdge::new(edge_id, a, b, weight));
        self.graph.nodes.entry(a).or_default().edges.push(edge_id);
        self.graph.nodes.entry(b).or_default().edges.push(edge_id);
        edge_id
    }

    pub fn build(self) -> Graph {
        self.graph
    }
}
