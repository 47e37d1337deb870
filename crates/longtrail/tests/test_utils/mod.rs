#![allow(dead_code)]

use longtrail::{Graph, NodeId, Weight, marks::EdgeMarks};
use rand::{Rng, rngs::StdRng};

pub const SAMPLE_COMPONENTS: &str = "0/2
2/2
2/3
3/4
3/5
0/1
10/1
9/10
";

pub struct RandomGraphParams {
    pub max_nodes: i64,
    pub max_edges: usize,
    pub min_weight: Weight,
    pub max_weight: Weight,
}

impl RandomGraphParams {
    /// Light weights with many free edges, so equal-weight matchings are common.
    pub fn with_zero_weights() -> Self {
        RandomGraphParams {
            min_weight: 0,
            max_weight: 3,
            ..RandomGraphParams::default()
        }
    }
}

impl Default for RandomGraphParams {
    fn default() -> Self {
        RandomGraphParams {
            max_nodes: 6,
            max_edges: 8,
            min_weight: 1,
            max_weight: 9,
        }
    }
}

/// Small multigraph over nodes `0..n` with loops, parallel edges and isolated nodes.
pub fn random_graph(rng: &mut StdRng, params: &RandomGraphParams) -> Graph {
    let nodes = rng.random_range(1..=params.max_nodes);
    let edges = rng.random_range(0..=params.max_edges);

    let mut builder = Graph::builder();
    for node in 0..nodes {
        builder.add_node(node);
    }

    let mut previous: Option<(NodeId, NodeId)> = None;
    for _ in 0..edges {
        let (a, b) = match previous {
            Some(pair) if rng.random_bool(0.2) => pair,
            _ => {
                let a = rng.random_range(0..nodes);
                let b = if rng.random_bool(0.15) {
                    a
                } else {
                    rng.random_range(0..nodes)
                };
                (a, b)
            }
        };

        builder.add_edge(a, b, rng.random_range(params.min_weight..=params.max_weight));
        previous = Some((a, b));
    }

    builder.build()
}

pub fn assert_trail_parity(graph: &Graph, marks: &EdgeMarks, s: NodeId, t: NodeId) {
    for node in graph.node_ids() {
        let degree = marks.unmarked_degree(graph, node);
        let expect_odd = s != t && (node == s || node == t);
        assert_eq!(
            degree % 2 == 1,
            expect_odd,
            "node {} has unmarked degree {} for query ({}, {}) on {:?}",
            node,
            degree,
            s,
            t,
            graph
        );
    }
}
