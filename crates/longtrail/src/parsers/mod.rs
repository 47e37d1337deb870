pub mod edge_list;
pub mod parser;

pub use edge_list::{EdgeCost, EdgeListParser};
pub use parser::{GraphParser, ParseError, ParseErrorKind};
