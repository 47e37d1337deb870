use thiserror::Error;

use crate::{matching::MatchingError, types::NodeId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrailError {
    #[error("Node {0} is not part of the graph")]
    UnknownNode(NodeId),
    #[error("Failed to match exposed nodes")]
    Matching(#[from] MatchingError),
    #[error("No unmarked edge left between {from} and {to}")]
    MarkingInvariant { from: NodeId, to: NodeId },
    #[error("Node {to} has no shortest path from {from}")]
    MissingPath { from: NodeId, to: NodeId },
}
