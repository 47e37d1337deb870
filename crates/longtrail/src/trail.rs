use std::{collections::BTreeMap, sync::Arc, time::Instant};

use serde::Serialize;
use tracing::{Level, debug, instrument, trace};

use crate::{
    aggregate::component_weight,
    dijkstra::{ShortestPathCache, ShortestPaths},
    error::TrailError,
    eulerize::{Eulerization, mark_path, uncross_pairs},
    exposed::ExposedNodes,
    graph::Graph,
    marks::EdgeMarks,
    matching::{BlossomMatching, MatchingError, PerfectMatchingSolver, matching_weight},
    types::{NodeId, Weight},
};

/// Outcome of a single `(source, target)` query.
#[derive(Debug, Clone)]
pub struct TrailQuery {
    pub source: NodeId,
    pub target: NodeId,
    /// Weight of the longest trail found between `source` and `target`.
    pub weight: Weight,
    /// Weight of edges that survived eulerization but are disconnected from `source`.
    /// Zero means `weight` is the exact optimum, zero-weight edges included.
    pub dropped_weight: Weight,
    pub eulerization: Eulerization,
}

/// Longest trail weights from one source to every node of the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LongestPaths {
    source: NodeId,
    trails: BTreeMap<NodeId, Option<Weight>>,
}

impl LongestPaths {
    pub fn new(source: NodeId, trails: BTreeMap<NodeId, Option<Weight>>) -> Self {
        LongestPaths { source, trails }
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Weight of the longest trail to `target`, `None` when there is no path.
    pub fn get(&self, target: NodeId) -> Option<Weight> {
        self.trails.get(&target).copied().flatten()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Option<Weight>)> + '_ {
        self.trails.iter().map(|(&target, &weight)| (target, weight))
    }

    pub fn len(&self) -> usize {
        self.trails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trails.is_empty()
    }

    /// Reachable target with the heaviest trail. Ties go to the smallest target id.
    pub fn longest(&self) -> Option<(NodeId, Weight)> {
        self.trails
            .iter()
            .filter_map(|(&target, &weight)| weight.map(|weight| (target, weight)))
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
    }

    pub fn longest_weight(&self) -> Weight {
        self.longest().map_or(0, |(_, weight)| weight)
    }
}

/// Computes maximum-weight trails on one graph.
///
/// Shortest paths are memoized per source for the lifetime of the solver, while edge
/// removals are owned by each query, so queries never observe each other.
pub struct TrailSolver<'g, M = BlossomMatching> {
    graph: &'g Graph,
    matcher: M,
    cache: ShortestPathCache,
}

impl<'g> TrailSolver<'g, BlossomMatching> {
    pub fn new(graph: &'g Graph) -> Self {
        Self::with_matcher(graph, BlossomMatching)
    }
}

impl<'g, M> TrailSolver<'g, M>
where
    M: PerfectMatchingSolver,
{
    pub fn with_matcher(graph: &'g Graph, matcher: M) -> Self {
        TrailSolver {
            graph,
            matcher,
            cache: ShortestPathCache::new(),
        }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn cached_sources(&self) -> usize {
        self.cache.len()
    }

    fn check_node(&self, node: NodeId) -> Result<(), TrailError> {
        if self.graph.contains_node(node) {
            Ok(())
        } else {
            Err(TrailError::UnknownNode(node))
        }
    }

    pub fn shortest_paths(&mut self, source: NodeId) -> Result<Arc<ShortestPaths>, TrailError> {
        self.check_node(source)?;
        Ok(self.cache.get_or_compute(self.graph, source))
    }

    pub fn exposed_nodes(&self, s: NodeId, t: NodeId) -> Result<ExposedNodes, TrailError> {
        self.check_node(s)?;
        self.check_node(t)?;
        Ok(ExposedNodes::find(self.graph, s, t))
    }

    /// Removes a minimum-weight edge set so that every node but `s` and `t` has even
    /// degree, and `s`, `t` odd degree unless they are the same node.
    ///
    /// Returns `None` when `t` cannot be reached from `s`.
    pub fn eulerize(&mut self, s: NodeId, t: NodeId) -> Result<Option<Eulerization>, TrailError> {
        let graph = self.graph;
        let exposed = self.exposed_nodes(s, t)?;

        if !self.shortest_paths(s)?.contains(t) {
            trace!(s, t, "no path");
            return Ok(None);
        }

        if exposed.is_empty() {
            return Ok(Some(Eulerization::untouched(graph, exposed)));
        }

        debug!(s, t, exposed = ?exposed.as_slice(), "exposed nodes");

        let paths: Vec<Arc<ShortestPaths>> = exposed
            .iter()
            .map(|node| self.cache.get_or_compute(graph, node))
            .collect();
        let edges = exposed.matching_edges(&paths);
        let mates = self.matcher.solve(exposed.len(), &edges)?;
        check_mates(&mates, exposed.len())?;
        debug!(s, t, weight = ?matching_weight(&mates, &edges), "matching");

        let mut matched: Vec<(usize, usize)> = mates
            .iter()
            .enumerate()
            .filter(|&(id, &mate)| id < mate)
            .map(|(id, &mate)| (id, mate))
            .collect();
        let swaps = uncross_pairs(&exposed, &paths, &mut matched)?;
        if swaps > 0 {
            debug!(s, t, swaps, "uncrossed matched paths");
        }

        let mut marks = EdgeMarks::new(graph);
        let mut pairs = Vec::with_capacity(matched.len());
        let mut removed_weight = 0;

        for (id, mate) in matched {
            let (from, to) = (exposed.node(id), exposed.node(mate));
            let removed = mark_path(graph, &paths[id], to, &mut marks)?;
            trace!(from, to, removed, path = ?paths[id].path_to(to), "matched pair");

            removed_weight += removed;
            pairs.push((from, to));
        }

        Ok(Some(Eulerization {
            exposed,
            pairs,
            marks,
            removed_weight,
        }))
    }

    pub fn query(&mut self, s: NodeId, t: NodeId) -> Result<Option<TrailQuery>, TrailError> {
        let Some(eulerization) = self.eulerize(s, t)? else {
            return Ok(None);
        };

        let component = component_weight(self.graph, eulerization.marks(), s);
        debug!(
            s,
            t,
            weight = component.weight,
            removed = eulerization.removed_weight(),
            dropped = component.dropped_weight,
            "trail"
        );

        Ok(Some(TrailQuery {
            source: s,
            target: t,
            weight: component.weight,
            dropped_weight: component.dropped_weight,
            eulerization,
        }))
    }

    /// Weight of the longest trail between `s` and `t`, `None` when they are not connected.
    pub fn longest_trail(&mut self, s: NodeId, t: NodeId) -> Result<Option<Weight>, TrailError> {
        Ok(self.query(s, t)?.map(|query| query.weight))
    }

    #[instrument(skip(self), level = Level::DEBUG)]
    pub fn longest_paths_from(&mut self, source: NodeId) -> Result<LongestPaths, TrailError> {
        self.check_node(source)?;
        let graph = self.graph;
        let start = Instant::now();

        let mut trails = BTreeMap::new();
        for target in graph.node_ids() {
            trails.insert(target, self.longest_trail(source, target)?);
        }

        let paths = LongestPaths::new(source, trails);
        debug!(
            targets = paths.len(),
            longest = paths.longest_weight(),
            elapsed = ?start.elapsed(),
            "longest paths"
        );

        Ok(paths)
    }
}

fn check_mates(mates: &[usize], nodes: usize) -> Result<(), MatchingError> {
    let consistent = mates.len() == nodes
        && mates
            .iter()
            .enumerate()
            .all(|(node, &mate)| mate < nodes && mate != node && mates[mate] == node);

    if consistent {
        Ok(())
    } else {
        Err(MatchingError::Inconsistent)
    }
}

/// Longest trail between `s` and `t` using the blossom matcher.
pub fn longest_trail(graph: &Graph, s: NodeId, t: NodeId) -> Result<Option<Weight>, TrailError> {
    TrailSolver::new(graph).longest_trail(s, t)
}

/// Longest trails from `source` to every node using the blossom matcher.
pub fn longest_paths_from(graph: &Graph, source: NodeId) -> Result<LongestPaths, TrailError> {
    TrailSolver::new(graph).longest_paths_from(source)
}
