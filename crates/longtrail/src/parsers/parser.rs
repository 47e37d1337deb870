use std::{io::Read, path::Path};

use thiserror::Error;

use crate::graph::Graph;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("expected `a/b` or `a/b@weight`")]
    MissingSeparator,
    #[error("invalid node id `{0}`")]
    InvalidNode(String),
    #[error("invalid weight `{0}`")]
    InvalidWeight(String),
    #[error("edge {0}/{1} has no valid default weight")]
    NegativeWeight(i64, i64),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

pub trait GraphParser {
    fn parse_str(&self, input: &str) -> Result<Graph, ParseError>;

    fn from_reader<R: Read>(&self, mut reader: R) -> Result<Graph, anyhow::Error> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        Ok(self.parse_str(&input)?)
    }

    fn from_file<P: AsRef<Path>>(&self, file: P) -> Result<Graph, anyhow::Error> {
        let input = std::fs::read_to_string(file)?;
        Ok(self.parse_str(&input)?)
    }
}
