//! Shrink each node's per-side selection list to a near-minimal set cover
//! over the opposite side.

use std::collections::HashSet;

use crate::graph::GridGraph;
use crate::node::Node;
use crate::selection::NodeSelection;

/// See §4.7. Built from the raw output of [`crate::selection::calculator::FullNodeSelectionCalculator`];
/// [`Self::optimize`] replaces each node's selection-index list with a
/// greedily-chosen near-minimal subset covering the same opposite-side nodes.
pub struct SelectionLookupOptimizer<'g> {
    graph: &'g GridGraph,
    selections: Vec<NodeSelection>,
    left_selections: Vec<Vec<usize>>,
    right_selections: Vec<Vec<usize>>,
}

impl<'g> SelectionLookupOptimizer<'g> {
    #[must_use]
    pub fn new(graph: &'g GridGraph, selections: Vec<NodeSelection>) -> Self {
        let size = graph.height() * graph.width();
        let mut left_selections = vec![Vec::new(); size];
        let mut right_selections = vec![Vec::new(); size];
        for selection in &selections {
            for &node in selection.left() {
                left_selections[graph.index(node)].push(selection.index());
            }
            for &node in selection.right() {
                right_selections[graph.index(node)].push(selection.index());
            }
        }
        Self {
            graph,
            selections,
            left_selections,
            right_selections,
        }
    }

    pub fn optimize(&mut self) {
        for node in self.graph.walkable_nodes() {
            let idx = self.graph.index(node);
            self.left_selections[idx] = greedy_cover(&self.selections, &self.left_selections[idx], |s| s.right());
            self.right_selections[idx] = greedy_cover(&self.selections, &self.right_selections[idx], |s| s.left());
        }
    }

    #[must_use]
    pub fn into_parts(self) -> (Vec<NodeSelection>, Vec<Vec<usize>>, Vec<Vec<usize>>) {
        (self.selections, self.left_selections, self.right_selections)
    }
}

/// Greedily pick selections from `candidates` that cover the largest number
/// of not-yet-covered opposite-side nodes, until the full opposite-side union
/// is covered. Deterministic tie-break: first index in iteration order.
fn greedy_cover(
    selections: &[NodeSelection],
    candidates: &[usize],
    opposite: impl Fn(&NodeSelection) -> &[Node],
) -> Vec<usize> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let all_nodes: HashSet<Node> = candidates.iter().flat_map(|&idx| opposite(&selections[idx]).iter().copied()).collect();

    let mut covered: HashSet<Node> = HashSet::new();
    let mut chosen = Vec::new();

    while covered.len() < all_nodes.len() {
        let mut best_idx = candidates[0];
        let mut best_score = 0usize;
        for &idx in candidates {
            let score = opposite(&selections[idx]).iter().filter(|n| !covered.contains(n)).count();
            if score > best_score {
                best_score = score;
                best_idx = idx;
            }
        }
        covered.extend(opposite(&selections[best_idx]).iter().copied());
        chosen.push(best_idx);
    }

    chosen
}
