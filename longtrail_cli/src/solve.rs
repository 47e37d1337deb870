use std::{io, path::PathBuf, time::Instant};

use anyhow::Context;
use clap::{Args, ValueEnum};
use longtrail::{
    Graph, LongestPaths, NodeId, TrailSolver,
    brute_force::longest_paths_brute,
    parsers::{EdgeCost, EdgeListParser, GraphParser},
};
use tracing::info;

use crate::report::{self, OutputFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Eulerization by minimum-weight perfect matching
    Fast,
    /// Exhaustive search, small graphs only
    Brute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Problem {
    /// Edge weight is the sum of both ports
    #[value(name = "1")]
    Strength,
    /// Longest bridge first, strongest among those
    #[value(name = "2")]
    Length,
}

impl From<Problem> for EdgeCost {
    fn from(problem: Problem) -> Self {
        match problem {
            Problem::Strength => EdgeCost::Strength,
            Problem::Length => EdgeCost::Length,
        }
    }
}

#[derive(Args)]
pub struct SolveArgs {
    #[arg(value_enum)]
    mode: Mode,

    /// Edge list, `a/b` or `a/b@weight` per line. Reads stdin when absent or `-`
    input: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "1")]
    problem: Problem,

    /// Node every trail starts from
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    source: NodeId,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn read_graph(input: Option<&PathBuf>, cost: EdgeCost) -> Result<Graph, anyhow::Error> {
    let parser = EdgeListParser::new(cost);

    match input {
        Some(path) if path.as_os_str() != "-" => parser
            .from_file(path)
            .with_context(|| format!("Failed to read graph from {}", path.display())),
        _ => parser
            .from_reader(io::stdin().lock())
            .context("Failed to read graph from stdin"),
    }
}

pub fn run(args: SolveArgs) -> Result<(), anyhow::Error> {
    let graph = read_graph(args.input.as_ref(), args.problem.into())?;
    println!("{} nodes", graph.node_count());

    let start = Instant::now();
    let paths: LongestPaths = match args.mode {
        Mode::Fast => TrailSolver::new(&graph).longest_paths_from(args.source)?,
        Mode::Brute => longest_paths_brute(&graph, args.source)?,
    };
    info!(mode = ?args.mode, elapsed = ?start.elapsed(), "solved");

    report::print(&paths, args.format)
}
