use fxhash::FxHashMap;
use mwmatching::{Matching, SENTINEL};
use thiserror::Error;
use tracing::trace;

use crate::types::Weight;

/// Largest flipped weight handed to the blossom solver. Its dual variables and slacks are
/// 32-bit and reach a few multiples of the largest weight, so the spread between the
/// lightest and the heaviest edge has to stay below this.
const MAX_SOLVER_WEIGHT: Weight = (i32::MAX / 4) as Weight;

/// Edge of the complete graph over exposed nodes, addressed by dense matching ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchingEdge {
    pub u: usize,
    pub v: usize,
    pub weight: Weight,
}

impl MatchingEdge {
    pub fn new(u: usize, v: usize, weight: Weight) -> Self {
        MatchingEdge { u, v, weight }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchingError {
    #[error("Cannot perfectly match an odd number of nodes ({0})")]
    OddNodeCount(usize),
    #[error("Matching edge ({u}, {v}) is outside of 0..{nodes}")]
    NodeOutOfRange { u: usize, v: usize, nodes: usize },
    #[error("No perfect matching exists over {nodes} nodes")]
    Infeasible { nodes: usize },
    #[error("Edge weights span {0}, too wide for the matching solver")]
    WeightOverflow(Weight),
    #[error("Matching solver returned an inconsistent pairing")]
    Inconsistent,
}

/// Minimum-weight perfect matching over nodes `0..nodes`.
///
/// Returns the partner of every node. Pairs missing from `edges` cannot be matched.
pub trait PerfectMatchingSolver {
    fn solve(&self, nodes: usize, edges: &[MatchingEdge]) -> Result<Vec<usize>, MatchingError>;
}

impl<S: PerfectMatchingSolver + ?Sized> PerfectMatchingSolver for &S {
    fn solve(&self, nodes: usize, edges: &[MatchingEdge]) -> Result<Vec<usize>, MatchingError> {
        (**self).solve(nodes, edges)
    }
}

/// Blossom based solver.
///
/// The blossom implementation maximizes weight, so weights are flipped to `max + 1 - w`.
/// Every perfect matching has the same number of edges, so the maximum-cardinality,
/// maximum-weight matching of the flipped graph is a minimum-weight perfect matching of
/// the input graph. Only the spread `max - min` reaches the solver.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlossomMatching;

impl PerfectMatchingSolver for BlossomMatching {
    fn solve(&self, nodes: usize, edges: &[MatchingEdge]) -> Result<Vec<usize>, MatchingError> {
        let edges = normalize_edges(nodes, edges)?;
        match nodes {
            0 => return Ok(vec![]),
            // A single pair has a single perfect matching
            2 if edges.is_empty() => return Err(MatchingError::Infeasible { nodes }),
            2 => return Ok(vec![1, 0]),
            _ => {}
        }

        let max_weight = edges.iter().map(|edge| edge.weight).max().unwrap_or(0);
        let min_weight = edges.iter().map(|edge| edge.weight).min().unwrap_or(0);
        let spread = max_weight - min_weight;
        if spread >= MAX_SOLVER_WEIGHT {
            return Err(MatchingError::WeightOverflow(spread));
        }

        let solver_edges: mwmatching::Edges = edges
            .iter()
            .map(|edge| {
                let flipped = max_weight - edge.weight + 1;
                i32::try_from(flipped)
                    .map(|flipped| (edge.u, edge.v, flipped))
                    .map_err(|_| MatchingError::WeightOverflow(spread))
            })
            .collect::<Result<_, _>>()?;

        trace!(nodes, edges = solver_edges.len(), "blossom matching");

        let mut matching = Matching::new(solver_edges);
        let mates = matching.max_cardinality().solve();

        perfect_mates(nodes, &mates)
    }
}

/// Validates edges and keeps the lightest edge per unordered pair.
fn normalize_edges(nodes: usize, edges: &[MatchingEdge]) -> Result<Vec<MatchingEdge>, MatchingError> {
    if nodes % 2 == 1 {
        return Err(MatchingError::OddNodeCount(nodes));
    }

    let mut lightest: FxHashMap<(usize, usize), Weight> = FxHashMap::default();
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

        let key = (edge.u.min(edge.v), edge.u.max(edge.v));
        lightest
            .entry(key)
            .and_modify(|weight| *weight = (*weight).min(edge.weight))
            .or_insert(edge.weight);
    }

    let mut normalized: Vec<MatchingEdge> = lightest
        .into_iter()
        .map(|((u, v), weight)| MatchingEdge::new(u, v, weight))
        .collect();
    normalized.sort_unstable_by_key(|edge| (edge.u, edge.v));

    Ok(normalized)
}

fn perfect_mates(nodes: usize, mates: &[usize]) -> Result<Vec<usize>, MatchingError> {
    (0..nodes)
        .map(|node| match mates.get(node) {
            Some(&mate) if mate != SENTINEL && mate < nodes => Ok(mate),
            _ => Err(MatchingError::Infeasible { nodes }),
        })
        .collect()
}

/// Sum of the weights of the matched pairs, each pair counted once.
pub fn matching_weight(mates: &[usize], edges: &[MatchingEdge]) -> Option<Weight> {
    let mut weights: FxHashMap<(usize, usize), Weight> = FxHashMap::default();
    for edge in edges {
        let key = (edge.u.min(edge.v), edge.u.max(edge.v));
        let weight = weights.entry(key).or_insert(edge.weight);
        *weight = (*weight).min(edge.weight);
    }

    mates
        .iter()
        .enumerate()
        .filter(|&(node, &mate)| node < mate)
        .map(|(node, &mate)| weights.get(&(node, mate)).copied())
        .sum()
}
