use std::sync::Arc;

use fxhash::FxHashMap;
use tracing::trace;

use crate::{
    dijkstra::ShortestPaths,
    error::TrailError,
    exposed::ExposedNodes,
    graph::Graph,
    marks::EdgeMarks,
    types::{NodeId, Weight},
};

/// Result of removing a minimum-weight set of edges so that an Euler trail between the
/// query endpoints exists.
#[derive(Debug, Clone)]
pub struct Eulerization {
    pub(crate) exposed: ExposedNodes,
    pub(crate) pairs: Vec<(NodeId, NodeId)>,
    pub(crate) marks: EdgeMarks,
    pub(crate) removed_weight: Weight,
}

impl Eulerization {
    /// No edge needs to go, every node already has the right parity.
    pub(crate) fn untouched(graph: &Graph, exposed: ExposedNodes) -> Self {
        Eulerization {
            exposed,
            pairs: vec![],
            marks: EdgeMarks::new(graph),
            removed_weight: 0,
        }
    }

    pub fn exposed(&self) -> &ExposedNodes {
        &self.exposed
    }

    /// Matched exposed nodes, smaller id first.
    pub fn pairs(&self) -> &[(NodeId, NodeId)] {
        &self.pairs
    }

    pub fn marks(&self) -> &EdgeMarks {
        &self.marks
    }

    pub fn removed_weight(&self) -> Weight {
        self.removed_weight
    }
}

/// Removes the lightest present edge between `from` and `to`.
///
/// Fails when every parallel edge between the two nodes is already removed, which means
/// two matched paths needed the same edge instance.
pub fn mark_edge(
    graph: &Graph,
    from: NodeId,
    to: NodeId,
    marks: &mut EdgeMarks,
) -> Result<Weight, TrailError> {
    let edge = graph
        .node_edges_iter(from)
        .map(|edge_id| graph.edge(edge_id))
        .filter(|edge| edge.adj_node(from) == to && !marks.is_marked(edge.id()))
        .min_by_key(|edge| (edge.weight(), edge.id()))
        .ok_or(TrailError::MarkingInvariant { from, to })?;

    trace!(from, to, edge = %edge.id(), weight = edge.weight(), "mark edge");
    marks.mark(edge.id());

    Ok(edge.weight())
}

/// A node pair walked by two matched paths. Each path is split by the pair into the side
/// reaching the smaller node and the side reaching the larger one.
struct Crossing {
    first: usize,
    second: usize,
    low_sides: (usize, usize),
    high_sides: (usize, usize),
}

/// Re-pairs matched exposed nodes until no node pair lies on two matched paths.
///
/// `pairs` holds dense exposed ids and `paths[id]` the shortest paths from that node. Two
/// paths crossing at `x-y` are replaced by one joining both `x` sides and one joining both
/// `y` sides. That walk skips the shared edge twice, so the new pairing weighs no more and
/// has at least two fewer edges, which bounds the number of swaps.
///
/// Returns the number of swaps performed.
pub fn uncross_pairs(
    exposed: &ExposedNodes,
    paths: &[Arc<ShortestPaths>],
    pairs: &mut [(usize, usize)],
) -> Result<usize, TrailError> {
    let mut swaps = 0;

    while let Some(crossing) = find_crossing(exposed, paths, pairs)? {
        let (a, b) = crossing.low_sides;
        let (c, d) = crossing.high_sides;
        pairs[crossing.first] = (a.min(b), a.max(b));
        pairs[crossing.second] = (c.min(d), c.max(d));

        trace!(
            low = ?(exposed.node(a), exposed.node(b)),
            high = ?(exposed.node(c), exposed.node(d)),
            "uncross matched pairs"
        );
        swaps += 1;
    }

    Ok(swaps)
}

fn find_crossing(
    exposed: &ExposedNodes,
    paths: &[Arc<ShortestPaths>],
    pairs: &[(usize, usize)],
) -> Result<Option<Crossing>, TrailError> {
    // (smaller node, larger node) -> (pair, low side, high side)
    let mut walked: FxHashMap<(NodeId, NodeId), (usize, usize, usize)> = FxHashMap::default();

    for (index, &(from, to)) in pairs.iter().enumerate() {
        let target = exposed.node(to);
        let nodes = paths[from]
            .path_to(target)
            .ok_or(TrailError::MissingPath {
                from: exposed.node(from),
                to: target,
            })?;

        for step in nodes.windows(2) {
            let key = (step[0].min(step[1]), step[0].max(step[1]));
            let (low_side, high_side) = if step[0] == key.0 {
                (from, to)
            } else {
                (to, from)
            };

            match walked.get(&key) {
                Some(&(first, first_low, first_high)) if first != index => {
                    return Ok(Some(Crossing {
                        first,
                        second: index,
                        low_sides: (first_low, low_side),
                        high_sides: (first_high, high_side),
                    }));
                }
                Some(_) => {}
                None => {
                    walked.insert(key, (index, low_side, high_side));
                }
            }
        }
    }

    Ok(None)
}

/// Removes every edge of the shortest path from `paths.source()` to `target`.
///
/// Returns the removed weight.
pub fn mark_path(
    graph: &Graph,
    paths: &ShortestPaths,
    target: NodeId,
    marks: &mut EdgeMarks,
) -> Result<Weight, TrailError> {
    let missing = || TrailError::MissingPath {
        from: paths.source(),
        to: target,
    };

    let mut removed = 0;
    let mut node = target;
    let mut record = paths.get(node).ok_or_else(missing)?;

    while let Some(prev) = record.prev {
        removed += mark_edge(graph, prev, node, marks)?;
        node = prev;
        record = paths.get(node).ok_or_else(missing)?;
    }

    Ok(removed)
}
