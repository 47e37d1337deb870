pub mod aggregate;
pub mod brute_force;
pub mod dijkstra;
pub mod error;
pub mod eulerize;
pub mod exposed;
pub mod graph;
pub mod marks;
pub mod matching;
pub mod parsers;
pub mod trail;
pub mod types;
mod utils;

pub use error::TrailError;
pub use graph::{Graph, GraphBuilder};
pub use trail::{LongestPaths, TrailSolver, longest_paths_from, longest_trail};
pub use types::{EdgeId, NodeId, Weight};

#[cfg(test)]
pub(crate) mod test_utils;
