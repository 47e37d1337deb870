use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::Arc;

use fxhash::FxHashMap;
use tracing::trace;

use crate::graph::Graph;
use crate::types::{NodeId, Weight};

/// Shortest-path step towards a node: where it was reached from and at which distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathRecord {
    /// Previous node on the shortest path, `None` for the source itself.
    pub prev: Option<NodeId>,
    pub distance: Weight,
    /// Number of edges on the path.
    pub hops: usize,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
struct HeapItem {
    node_id: NodeId,
    prev: Option<NodeId>,
    weight: Weight,
    hops: usize,
}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip everything to make this a min-heap
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.hops.cmp(&self.hops))
            .then_with(|| other.node_id.cmp(&self.node_id))
            .then_with(|| other.prev.cmp(&self.prev))
    }
}

/// Shortest paths from one source to every node reachable from it.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: NodeId,
    records: FxHashMap<NodeId, PathRecord>,
}

impl ShortestPaths {
    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn get(&self, node: NodeId) -> Option<&PathRecord> {
        self.records.get(&node)
    }

    pub fn distance(&self, node: NodeId) -> Option<Weight> {
        self.records.get(&node).map(|record| record.distance)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.records.contains_key(&node)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Nodes of the shortest path from the source to `target`, both included.
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        let mut path = vec![target];
        let mut record = self.records.get(&target)?;

        while let Some(prev) = record.prev {
            path.push(prev);
            record = self.records.get(&prev)?;
        }

        path.reverse();
        Some(path)
    }
}

/// Dijkstra from `source` over the full graph.
///
/// Paths are ordered by weight, then by number of edges, so zero-weight edges still make a
/// path longer.
///
/// Stale heap entries are skipped lazily instead of decreasing keys: the first pop of a
/// node settles it. Edge removal markers are never consulted, the result only depends on
/// the graph topology.
pub fn shortest_paths(graph: &Graph, source: NodeId) -> ShortestPaths {
    let mut records: FxHashMap<NodeId, PathRecord> = FxHashMap::default();

    if !graph.contains_node(source) {
        return ShortestPaths { source, records };
    }

    let mut heap: BinaryHeap<HeapItem> = BinaryHeap::with_capacity(graph.edge_count() + 1);
    heap.push(HeapItem {
        node_id: source,
        prev: None,
        weight: 0,
        hops: 0,
    });

    let mut iterations = 0;

    while let Some(HeapItem {
        node_id,
        prev,
        weight,
        hops,
    }) = heap.pop()
    {
        iterations += 1;

        // Node is already settled with a smaller or equal weight, skip
        if records.contains_key(&node_id) {
            continue;
        }

        records.insert(
            node_id,
            PathRecord {
                prev,
                distance: weight,
                hops,
            },
        );

        for edge_id in graph.node_edges_iter(node_id) {
            let edge = graph.edge(edge_id);
            let adj_node = edge.adj_node(node_id);

            if records.contains_key(&adj_node) {
                continue;
            }

            heap.push(HeapItem {
                node_id: adj_node,
                prev: Some(node_id),
                weight: weight.saturating_add(edge.weight()),
                hops: hops + 1,
            });
        }
    }

    trace!(source, iterations, reached = records.len(), "shortest paths");

    ShortestPaths { source, records }
}

/// Memoized shortest paths keyed by source node.
///
/// Entries are computed over the unmarked topology and stay valid for the lifetime of the
/// graph they were computed on. Never feed a cache with a different graph.
#[derive(Debug, Default)]
pub struct ShortestPathCache {
    paths: FxHashMap<NodeId, Arc<ShortestPaths>>,
}

impl ShortestPathCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute(&mut self, graph: &Graph, source: NodeId) -> Arc<ShortestPaths> {
        Arc::clone(
            self.paths
                .entry(source)
                .or_insert_with(|| Arc::new(shortest_paths(graph, source))),
        )
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
