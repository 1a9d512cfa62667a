use std::{
    fs, io,
    path::{Path, PathBuf},
};

use clap::{ArgAction, Parser};
use log::debug;
use thiserror::Error;

pub mod graph;
pub mod logger;
pub mod route;
pub mod tree;

pub use graph::NestGraph;
pub use route::Route;
pub use tree::RootedTree;

/// The nest the newt starts from.
pub const ROOT: usize = 1;
/// Exclusive upper bound of the node count.
pub const NODE_N_LIMIT: usize = 1000;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid input, {0}")]
    InvalidInput(#[from] InvalidInput),
    #[error("I/O Error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("given text is empty.")]
    Empty,
    #[error("node count({0}) isn't an integer.")]
    BadNodeCount(String),
    #[error("node count({0}) is out of range (0, {max}).", max = NODE_N_LIMIT)]
    NodeCountOutOfRange(i64),
    #[error("no record for node {0}.")]
    MissingRecord(usize),
    #[error("record of node {node} needs at least 2 numbers, given {given}.")]
    ShortRecord { node: usize, given: usize },
    #[error("token({token}) in record of node {node} isn't a valid integer.")]
    NotInteger { node: usize, token: String },
    #[error("count({token}) in record of node {node} is negative.")]
    NegativeCount { node: usize, token: String },
    #[error("node {node} declares {expect} neighbor(s), given {given}.")]
    MissingNeighbors {
        node: usize,
        expect: usize,
        given: usize,
    },
    #[error("neighbor({neighbor}) of node {node} is out of range [1, {node_n}].")]
    NeighborOutOfRange {
        node: usize,
        neighbor: i64,
        node_n: usize,
    },
    #[error("node {0} can't be reached from the root nest.")]
    Unreachable(usize),
}

#[derive(Debug, Parser)]
#[command(about = "Count the apologies a newt makes delivering letters to the nests of an oak")]
pub struct CLIArgs {
    /// File with the nest description, asked for on standard input if absent.
    pub input_path: Option<PathBuf>,
    /// Also save the result to a file, `output.txt` unless given as `-o=PATH`.
    #[arg(
        short,
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "output.txt"
    )]
    pub output: Option<PathBuf>,
    /// Print the bare number only.
    #[arg(short, long)]
    pub quiet: bool,
    /// Log the solving steps to standard error, repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Run the whole pipeline over the text of one nest description.
pub fn apologies_in(text: &str) -> Result<usize, Error> {
    let graph = text.parse::<NestGraph>()?;
    let tree = RootedTree::build(&graph)?;
    let apology_n = Route::plan(&graph, &tree).apologies();
    debug!("{} apology(ies) for {} nest(s).", apology_n, graph.node_n());

    Ok(apology_n)
}

pub fn read_graph<P: AsRef<Path>>(path: P) -> Result<NestGraph, Error> {
    let text = fs::read_to_string(&path)?;
    debug!(
        "Read {} byte(s) from given file({}).",
        text.len(),
        path.as_ref().display()
    );

    Ok(text.parse()?)
}
