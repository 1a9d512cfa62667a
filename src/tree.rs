use std::{collections::VecDeque, iter};

use log::debug;

use crate::{InvalidInput, NestGraph, ROOT};

/// Parent of the root, no nest has this id.
pub const NO_PARENT: usize = 0;

/// The nest graph hung from the root nest, with parent and depth of every
/// nest found by a breadth-first search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootedTree {
    parents: Vec<usize>,
    depths: Vec<usize>,
}

impl RootedTree {
    pub fn build(graph: &NestGraph) -> Result<Self, InvalidInput> {
        let node_n = graph.node_n();
        let mut parents = vec![NO_PARENT; node_n + 1];
        let mut found_depths = vec![None; node_n + 1];
        found_depths[ROOT] = Some(0);
        let mut search_nodes = VecDeque::from([(ROOT, 0)]);
        while let Some((node, depth)) = search_nodes.pop_front() {
            for &neighbor in graph.neighbors(node) {
                if found_depths[neighbor].is_none() {
                    found_depths[neighbor] = Some(depth + 1);
                    parents[neighbor] = node;
                    search_nodes.push_back((neighbor, depth + 1));
                }
            }
        }

        let mut depths = Vec::with_capacity(node_n + 1);
        depths.push(0);
        for node in graph.nodes() {
            depths.push(found_depths[node].ok_or(InvalidInput::Unreachable(node))?);
        }
        debug!(
            "Hung {} nest(s) from the root, the deepest at depth {}.",
            node_n,
            depths.iter().max().copied().unwrap_or(0)
        );

        Ok(Self { parents, depths })
    }

    pub fn node_n(&self) -> usize {
        self.depths.len() - 1
    }

    pub fn contains(&self, node: usize) -> bool {
        (ROOT..=self.node_n()).contains(&node)
    }

    /// `None` for the root and for unknown nodes.
    pub fn parent(&self, node: usize) -> Option<usize> {
        self.parents
            .get(node)
            .copied()
            .filter(|&parent| parent != NO_PARENT)
    }

    pub fn depth(&self, node: usize) -> Option<usize> {
        if self.contains(node) {
            self.depths.get(node).copied()
        } else {
            None
        }
    }

    /// Walk from `node` up to the root, both ends included.
    pub fn path_to_root(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        iter::successors(self.contains(node).then_some(node), |&node| {
            self.parent(node)
        })
    }
}
