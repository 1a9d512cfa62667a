use std::collections::BTreeSet;

use log::debug;

use crate::{NestGraph, RootedTree, ROOT};

/// Everything the newt needs to know to walk its round: the nests it must
/// deliver to and the smallest part of the tree joining them to the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    targets: BTreeSet<usize>,
    subtree: BTreeSet<usize>,
    max_depth: usize,
}

impl Route {
    pub fn plan(graph: &NestGraph, tree: &RootedTree) -> Self {
        let targets = graph
            .nodes()
            .filter(|&node| graph.letters(node) > 0)
            .collect::<BTreeSet<_>>();

        let mut subtree = BTreeSet::new();
        for &target in &targets {
            for node in tree.path_to_root(target) {
                // The rest of the path is in already.
                if !subtree.insert(node) {
                    break;
                }
            }
        }
        if subtree.is_empty() {
            subtree.insert(ROOT);
        }

        let max_depth = targets
            .iter()
            .filter_map(|&target| tree.depth(target))
            .max()
            .unwrap_or(0);
        debug!(
            "{} target nest(s), subtree of {} nest(s), deepest target at depth {}.",
            targets.len(),
            subtree.len(),
            max_depth
        );

        Self {
            targets,
            subtree,
            max_depth,
        }
    }

    pub fn targets(&self) -> &BTreeSet<usize> {
        &self.targets
    }

    pub fn subtree(&self) -> &BTreeSet<usize> {
        &self.subtree
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Nests stepped on, the start included. Every subtree edge is walked
    /// down and up, except the ones on the path to the deepest target where
    /// the round ends. With nothing to deliver the newt stays home.
    pub fn visit_n(&self) -> usize {
        if self.targets.is_empty() {
            return 0;
        }

        2 * (self.subtree.len() - 1) + 1 - self.max_depth
    }

    pub fn apologies(&self) -> usize {
        self.visit_n() - self.targets.len()
    }
}
