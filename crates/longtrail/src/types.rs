use crate::{define_index_newtype, graph::GraphEdge};

/// Caller-chosen node key. Keys do not need to be dense or contiguous.
pub type NodeId = i64;

/// Edge weights are non-negative integers.
pub type Weight = u64;

define_index_newtype!(EdgeId, GraphEdge);
