//! Grow a [`NodeSelection`] outward from a seed pair, and repeat until every
//! non-adjacent node pair is covered by one.

use std::collections::VecDeque;

use indexmap::IndexSet;
use rand::Rng;

use crate::distance::{saturating_add, Distance};
use crate::graph::GridGraph;
use crate::node::Node;
use crate::pathfinding::Pathfinder;
use crate::selection::NodeSelection;

/// Computes one [`NodeSelection`] at a time, reusing its scratch state
/// (settled bitvectors, touched list) across calls the same way
/// [`crate::pathfinding::scratch::Scratch`] reuses its own.
pub struct NodeSelectionCalculator<'g> {
    graph: &'g GridGraph,
    left_settled: Vec<bool>,
    right_settled: Vec<bool>,
    touched: Vec<usize>,
    next_index: usize,
}

impl<'g> NodeSelectionCalculator<'g> {
    #[must_use]
    pub fn new(graph: &'g GridGraph) -> Self {
        let size = graph.height() * graph.width();
        Self {
            graph,
            left_settled: vec![false; size],
            right_settled: vec![false; size],
            touched: Vec::new(),
            next_index: 0,
        }
    }

    /// See §4.6. `None` if no route connects `left_start` and `right_start`.
    pub fn calculate_full_selection<P: Pathfinder>(
        &mut self,
        pathfinder: &mut P,
        left_start: Node,
        right_start: Node,
    ) -> Option<NodeSelection> {
        let path = pathfinder.find_route(left_start, right_start)?;
        let center = path.middle_node().expect("a found route has at least one node");

        let mut left_selection = vec![(left_start, pathfinder.find_distance(left_start, center))];
        let mut right_selection = vec![(right_start, pathfinder.find_distance(right_start, center))];

        let mut left_candidates = VecDeque::from([left_start]);
        let mut right_candidates = VecDeque::from([right_start]);

        while !left_candidates.is_empty() || !right_candidates.is_empty() {
            if let Some(current) = left_candidates.pop_front() {
                if let Some(left_dist) = check_affiliation(pathfinder, &right_selection, current, center) {
                    left_selection.push((current, left_dist));
                    for neighbour in self.graph.walkable_neighbours(current) {
                        let idx = self.graph.index(neighbour);
                        if !self.left_settled[idx] {
                            self.left_settled[idx] = true;
                            self.touched.push(idx);
                            left_candidates.push_back(neighbour);
                        }
                    }
                }
            }

            if let Some(current) = right_candidates.pop_front() {
                if let Some(right_dist) = check_affiliation(pathfinder, &left_selection, current, center) {
                    right_selection.push((current, right_dist));
                    for neighbour in self.graph.walkable_neighbours(current) {
                        let idx = self.graph.index(neighbour);
                        if !self.right_settled[idx] {
                            self.right_settled[idx] = true;
                            self.touched.push(idx);
                            right_candidates.push_back(neighbour);
                        }
                    }
                }
            }
        }

        let left = left_selection.into_iter().map(|(n, _)| n).collect();
        let right = right_selection.into_iter().map(|(n, _)| n).collect();
        let index = self.next_index;
        self.next_index += 1;

        for idx in self.touched.drain(..) {
            self.left_settled[idx] = false;
            self.right_settled[idx] = false;
        }

        Some(NodeSelection::new(left, right, center, index))
    }
}

/// A node joins a frontier iff its distance to every already-accepted node on
/// the opposite side routes exactly through the shared center — see the
/// `checkLeftAffiliation`/`checkRightAffiliation` note in `DESIGN.md`: this
/// falls out of ordinary `saturating_add` arithmetic, no `UNREACHABLE`
/// special case needed. Shared by both the left and right frontier since the
/// check is symmetric in which side is "current" vs. "opposite".
fn check_affiliation<P: Pathfinder>(
    pathfinder: &mut P,
    opposite_selection: &[(Node, Distance)],
    node: Node,
    center: Node,
) -> Option<Distance> {
    let center_dist = pathfinder.find_distance(node, center);
    for &(target, center_target_dist) in opposite_selection {
        let opt_dist = pathfinder.find_distance(node, target);
        if saturating_add(center_dist, center_target_dist) != opt_dist {
            return None;
        }
    }
    Some(center_dist)
}

/// Repeats [`NodeSelectionCalculator::calculate_full_selection`] over
/// uniformly-chosen uncovered pairs until every ordered, non-adjacent pair of
/// distinct walkable nodes is covered by at least one selection.
pub struct FullNodeSelectionCalculator<'g> {
    calculator: NodeSelectionCalculator<'g>,
    remaining: IndexSet<(Node, Node)>,
}

impl<'g> FullNodeSelectionCalculator<'g> {
    #[must_use]
    pub fn new(graph: &'g GridGraph) -> Self {
        let nodes: Vec<Node> = graph.walkable_nodes().collect();
        let mut remaining = IndexSet::new();
        for &first in &nodes {
            for &second in &nodes {
                if first == second || graph.are_adjacent(first, second) {
                    continue;
                }
                remaining.insert((first, second));
            }
        }
        Self {
            calculator: NodeSelectionCalculator::new(graph),
            remaining,
        }
    }

    pub fn calculate_full_node_selection<P: Pathfinder, R: Rng + ?Sized>(
        &mut self,
        pathfinder: &mut P,
        rng: &mut R,
    ) -> Vec<NodeSelection> {
        let mut selections = Vec::new();
        while !self.remaining.is_empty() {
            let pick = rng.gen_range(0..self.remaining.len());
            let (first, second) = *self.remaining.get_index(pick).expect("pick is within bounds");
            let selection = self
                .calculator
                .calculate_full_selection(pathfinder, first, second)
                .expect("a route exists between any two nodes in the same connected region");
            self.erase_covered_pairs(&selection);
            selections.push(selection);
        }
        selections
    }

    fn erase_covered_pairs(&mut self, selection: &NodeSelection) {
        for &u in selection.left() {
            for &v in selection.right() {
                self.remaining.swap_remove(&(u, v));
                self.remaining.swap_remove(&(v, u));
            }
        }
    }
}
