use std::{ops::RangeInclusive, str::FromStr};

use log::trace;

use crate::{InvalidInput, NODE_N_LIMIT, ROOT};

/// Undirected nest graph as given in the input, with the letters to deliver
/// to each nest. Slot 0 of both tables is unused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestGraph {
    letters: Vec<u64>,
    neighbors: Vec<Vec<usize>>,
}

impl NestGraph {
    pub fn node_n(&self) -> usize {
        self.letters.len() - 1
    }

    pub fn nodes(&self) -> RangeInclusive<usize> {
        ROOT..=self.node_n()
    }

    pub fn letters(&self, node: usize) -> u64 {
        self.letters.get(node).copied().unwrap_or(0)
    }

    pub fn neighbors(&self, node: usize) -> &[usize] {
        self.neighbors
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl FromStr for NestGraph {
    type Err = InvalidInput;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());
        let node_n = read_node_n(lines.next().ok_or(InvalidInput::Empty)?)?;
        let mut letters = vec![0; node_n + 1];
        let mut neighbors = vec![Vec::new(); node_n + 1];
        for node in ROOT..=node_n {
            let line = lines.next().ok_or(InvalidInput::MissingRecord(node))?;
            let (letter_n, node_neighbors) = read_record(line, node, node_n)?;
            trace!(
                "Node {} has {} letter(s) and neighbors {:?}.",
                node,
                letter_n,
                node_neighbors
            );
            letters[node] = letter_n;
            neighbors[node] = node_neighbors;
        }

        Ok(Self { letters, neighbors })
    }
}

fn read_node_n(line: &str) -> Result<usize, InvalidInput> {
    let node_n = line
        .parse::<i64>()
        .map_err(|_| InvalidInput::BadNodeCount(line.to_string()))?;

    usize::try_from(node_n)
        .ok()
        .filter(|n| (1..NODE_N_LIMIT).contains(n))
        .ok_or(InvalidInput::NodeCountOutOfRange(node_n))
}

fn read_record(
    line: &str,
    node: usize,
    node_n: usize,
) -> Result<(u64, Vec<usize>), InvalidInput> {
    let tokens = line.split_whitespace().collect::<Vec<_>>();
    if tokens.len() < 2 {
        return Err(InvalidInput::ShortRecord {
            node,
            given: tokens.len(),
        });
    }

    let neighbor_n = read_count::<usize>(tokens[0], node)?;
    let letter_n = read_count::<u64>(tokens[1], node)?;
    // Tokens after the declared neighbors are ignored.
    let neighbor_tokens = 2usize
        .checked_add(neighbor_n)
        .and_then(|end| tokens.get(2..end))
        .ok_or(InvalidInput::MissingNeighbors {
            node,
            expect: neighbor_n,
            given: tokens.len() - 2,
        })?;
    let neighbors = neighbor_tokens
        .iter()
        .map(|token| read_neighbor(token, node, node_n))
        .collect::<Result<Vec<_>, _>>()?;

    Ok((letter_n, neighbors))
}

fn read_count<T: FromStr>(token: &str, node: usize) -> Result<T, InvalidInput> {
    token.parse().map_err(|_| {
        let token = token.to_string();
        match token.parse::<i64>() {
            Ok(n) if n < 0 => InvalidInput::NegativeCount { node, token },
            _ => InvalidInput::NotInteger { node, token },
        }
    })
}

fn read_neighbor(token: &str, node: usize, node_n: usize) -> Result<usize, InvalidInput> {
    let neighbor = read_count::<i64>(token, node)?;
    usize::try_from(neighbor)
        .ok()
        .filter(|n| (ROOT..=node_n).contains(n))
        .ok_or(InvalidInput::NeighborOutOfRange {
            node,
            neighbor,
            node_n,
        })
}
