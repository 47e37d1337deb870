//! Exhaustive solvers.
//!
//! Both run in exponential time and only exist to check the efficient solvers on small
//! inputs.

use std::collections::BTreeMap;

use crate::{
    error::TrailError,
    graph::Graph,
    marks::EdgeMarks,
    matching::{MatchingEdge, MatchingError, PerfectMatchingSolver},
    trail::LongestPaths,
    types::{NodeId, Weight},
};

/// Weight of the heaviest trail from `source` ending at every reachable node.
///
/// Explores every trail by backtracking over edge removal markers. Unreachable nodes are
/// absent from the result.
pub fn longest_trails_brute(
    graph: &Graph,
    source: NodeId,
) -> Result<BTreeMap<NodeId, Weight>, TrailError> {
    if !graph.contains_node(source) {
        return Err(TrailError::UnknownNode(source));
    }

    let mut best = BTreeMap::new();
    let mut marks = EdgeMarks::new(graph);
    explore(graph, &mut marks, &mut best, source, 0);

    Ok(best)
}

fn explore(
    graph: &Graph,
    marks: &mut EdgeMarks,
    best: &mut BTreeMap<NodeId, Weight>,
    node: NodeId,
    weight: Weight,
) {
    let entry = best.entry(node).or_insert(weight);
    if *entry < weight {
        *entry = weight;
    }

    for edge_id in graph.node_edges_iter(node) {
        if marks.is_marked(edge_id) {
            continue;
        }

        let edge = graph.edge(edge_id);
        marks.mark(edge_id);
        explore(graph, marks, best, edge.adj_node(node), weight + edge.weight());
        marks.unmark(edge_id);
    }
}

/// Same report as [`crate::trail::TrailSolver::longest_paths_from`], computed exhaustively.
pub fn longest_paths_brute(graph: &Graph, source: NodeId) -> Result<LongestPaths, TrailError> {
    let best = longest_trails_brute(graph, source)?;
    let trails = graph
        .node_ids()
        .map(|target| (target, best.get(&target).copied()))
        .collect();

    Ok(LongestPaths::new(source, trails))
}

/// Perfect matching by trying every pairing.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExhaustiveMatching;

impl PerfectMatchingSolver for ExhaustiveMatching {
    fn solve(&self, nodes: usize, edges: &[MatchingEdge]) -> Result<Vec<usize>, MatchingError> {
        if nodes % 2 == 1 {
            return Err(MatchingError::OddNodeCount(nodes));
        }

        let mut weights: Vec<Vec<Option<Weight>>> = vec![vec![None; nodes]; nodes];
        for edge in edges {
            if edge.u >= nodes || edge.v >= nodes {
                return Err(MatchingError::NodeOutOfRange {
                    u: edge.u,
                    v: edge.v,
                    nodes,
                });
            }
            if edge.u == edge.v {
                continue;
            }

            let weight = match weights[edge.u][edge.v] {
                Some(existing) => existing.min(edge.weight),
                None => edge.weight,
            };
            weights[edge.u][edge.v] = Some(weight);
            weights[edge.v][edge.u] = Some(weight);
        }

        let mut search = PairingSearch {
            weights,
            mates: vec![None; nodes],
            best: None,
        };
        search.run(0);

        search
            .best
            .map(|(_, mates)| mates)
            .ok_or(MatchingError::Infeasible { nodes })
    }
}

struct PairingSearch {
    weights: Vec<Vec<Option<Weight>>>,
    mates: Vec<Option<usize>>,
    best: Option<(Weight, Vec<usize>)>,
}

impl PairingSearch {
    fn run(&mut self, total: Weight) {
        if self
            .best
            .as_ref()
            .is_some_and(|(best_total, _)| *best_total <= total)
        {
            return;
        }

        let Some(first) = self.mates.iter().position(Option::is_none) else {
            let mates = self.mates.iter().flatten().copied().collect();
            self.best = Some((total, mates));
            return;
        };

        for partner in (first + 1)..self.mates.len() {
            if self.mates[partner].is_some() {
                continue;
            }
            let Some(weight) = self.weights[first][partner] else {
                continue;
            };

            self.mates[first] = Some(partner);
            self.mates[partner] = Some(first);
            self.run(total + weight);
            self.mates[first] = None;
            self.mates[partner] = None;
        }
    }
}
