use crate::{graph::Graph, marks::EdgeMarks, types::NodeId};

/// (0)-5-(1)
pub fn single_edge() -> Graph {
    Graph::from_edges([(0, 1, 5)])
}

/// 0-1-2-3-0, every edge weighs 1.
pub fn square() -> Graph {
    Graph::from_edges([(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 0, 1)])
}

/// (0)-1-(1)   (2)-1-(3)
pub fn two_components() -> Graph {
    Graph::from_edges([(0, 1, 1), (2, 3, 1)])
}

/// The sample bridge components `0/2 2/2 2/3 3/4 3/5 0/1 10/1 9/10`, weighted by the sum
/// of their ports.
pub fn bridge_sample() -> Graph {
    Graph::from_edges([
        (0, 2, 2),
        (2, 2, 4),
        (2, 3, 5),
        (3, 4, 7),
        (3, 5, 8),
        (0, 1, 1),
        (10, 1, 11),
        (9, 10, 19),
    ])
}

/// Asserts that every node has even degree once `marks` are applied, except `s` and `t`
/// which must be odd when they differ.
pub fn assert_trail_parity(graph: &Graph, marks: &EdgeMarks, s: NodeId, t: NodeId) {
    for node in graph.node_ids() {
        let degree = marks.unmarked_degree(graph, node);
        let expect_odd = s != t && (node == s || node == t);
        assert_eq!(
            degree % 2 == 1,
            expect_odd,
            "node {} has unmarked degree {} for query ({}, {})",
            node,
            degree,
            s,
            t
        );
    }
}
