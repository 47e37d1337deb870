use tracing::debug;

use crate::{
    graph::{Graph, GraphBuilder},
    types::{NodeId, Weight},
};

use super::parser::{GraphParser, ParseError, ParseErrorKind};

/// Weight given to an edge `a/b` that carries no explicit `@weight`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EdgeCost {
    /// `a + b`
    #[default]
    Strength,
    /// `10_000_000 + a + b`: any extra edge outweighs every strength difference, so the
    /// longest trail is the one with the most edges, then the strongest.
    Length,
}

const LENGTH_EDGE_BONUS: i64 = 10_000_000;

impl EdgeCost {
    pub fn weight(&self, a: NodeId, b: NodeId) -> Option<Weight> {
        let strength = a.checked_add(b)?;
        let weight = match self {
            EdgeCost::Strength => strength,
            EdgeCost::Length => strength.checked_add(LENGTH_EDGE_BONUS)?,
        };

        Weight::try_from(weight).ok()
    }
}

/// Reads one edge per line, `a/b` or `a/b@weight`. Blank lines are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct EdgeListParser {
    cost: EdgeCost,
}

impl EdgeListParser {
    pub fn new(cost: EdgeCost) -> Self {
        EdgeListParser { cost }
    }

    fn parse_node(value: &str) -> Result<NodeId, ParseErrorKind> {
        value
            .trim()
            .parse::<NodeId>()
            .map_err(|_| ParseErrorKind::InvalidNode(value.trim().to_string()))
    }

    fn parse_line(&self, line: &str) -> Result<(NodeId, NodeId, Weight), ParseErrorKind> {
        let (ports, weight) = match line.split_once('@') {
            Some((ports, weight)) => (ports, Some(weight.trim())),
            None => (line, None),
        };

        let (a, b) = ports
            .split_once('/')
            .ok_or(ParseErrorKind::MissingSeparator)?;
        let a = Self::parse_node(a)?;
        let b = Self::parse_node(b)?;

        let weight = match weight {
            Some(weight) => weight
                .parse::<Weight>()
                .map_err(|_| ParseErrorKind::InvalidWeight(weight.to_string()))?,
            None => self
                .cost
                .weight(a, b)
                .ok_or(ParseErrorKind::NegativeWeight(a, b))?,
        };

        Ok((a, b, weight))
    }
}

impl GraphParser for EdgeListParser {
    fn parse_str(&self, input: &str) -> Result<Graph, ParseError> {
        let mut builder = GraphBuilder::default();

        for (index, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let (a, b, weight) = self.parse_line(line).map_err(|kind| ParseError {
                line: index + 1,
                kind,
            })?;
            builder.add_edge(a, b, weight);
        }

        let graph = builder.build();
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "parsed edge list"
        );

        Ok(graph)
    }
}
