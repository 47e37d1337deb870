use fxhash::FxHashSet;

use crate::{
    graph::Graph,
    marks::EdgeMarks,
    types::{NodeId, Weight},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentWeight {
    /// Weight of the present edges reachable from the root.
    pub weight: Weight,
    /// Weight of the present edges outside of the root's component.
    pub dropped_weight: Weight,
    /// Number of nodes reached from the root, the root included.
    pub nodes: usize,
}

/// Sums the edges reachable from `root` without crossing a removed edge.
///
/// Every edge is seen once from each endpoint (a loop twice from its only endpoint), so
/// the accumulated weight is halved at the end.
pub fn component_weight(graph: &Graph, marks: &EdgeMarks, root: NodeId) -> ComponentWeight {
    let mut doubled_weight: Weight = 0;
    let mut seen: FxHashSet<NodeId> = FxHashSet::default();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if !seen.insert(node) {
            continue;
        }

        for edge_id in graph.node_edges_iter(node) {
            if marks.is_marked(edge_id) {
                continue;
            }

            let edge = graph.edge(edge_id);
            doubled_weight += edge.weight();
            stack.push(edge.adj_node(node));
        }
    }

    let weight = doubled_weight / 2;

    ComponentWeight {
        weight,
        dropped_weight: marks.unmarked_weight(graph) - weight,
        nodes: seen.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_utils, types::EdgeId};

    #[test]
    fn test_whole_graph() {
        let graph = test_utils::bridge_sample();
        let marks = EdgeMarks::new(&graph);

        let component = component_weight(&graph, &marks, 0);
        assert_eq!(component.weight, graph.total_weight());
        assert_eq!(component.dropped_weight, 0);
        assert_eq!(component.nodes, 8);
    }

    #[test]
    fn test_marked_edges_split_component() {
        let graph = test_utils::bridge_sample();
        let mut marks = EdgeMarks::new(&graph);
        // 0/2
        marks.mark(EdgeId::new(0));

        let component = component_weight(&graph, &marks, 0);
        assert_eq!(component.weight, 1 + 11 + 19);
        assert_eq!(component.dropped_weight, 4 + 5 + 7 + 8);
        assert_eq!(component.nodes, 4);

        let component = component_weight(&graph, &marks, 2);
        assert_eq!(component.weight, 4 + 5 + 7 + 8);
        assert_eq!(component.nodes, 4);
    }

    #[test]
    fn test_isolated_root() {
        let graph = test_utils::single_edge();
        let mut marks = EdgeMarks::new(&graph);
        marks.mark(EdgeId::new(0));

        let component = component_weight(&graph, &marks, 0);
        assert_eq!(component.weight, 0);
        assert_eq!(component.dropped_weight, 0);
        assert_eq!(component.nodes, 1);
    }
}
