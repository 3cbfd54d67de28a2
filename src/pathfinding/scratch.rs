//! Mutable scratch state shared by every pathfinder variant: a distance
//! vector, a settled bitmap, predecessor links, and a lazily-reset `touched`
//! list so a new source doesn't pay for clearing the whole grid.

use crate::distance::{Distance, UNREACHABLE};
use crate::graph::GridGraph;
use crate::node::Node;
use crate::pathfinding::queue::PriorityQueue;

#[derive(Debug)]
pub struct Scratch {
    distances: Vec<Distance>,
    settled: Vec<bool>,
    before: Vec<Option<Node>>,
    touched: Vec<usize>,
    last_source: Option<Node>,
    pub(crate) queue: PriorityQueue,
}

impl Scratch {
    #[must_use]
    pub fn new(graph: &GridGraph) -> Self {
        let size = graph.height() * graph.width();
        Self {
            distances: vec![UNREACHABLE; size],
            settled: vec![false; size],
            before: vec![None; size],
            touched: Vec::new(),
            last_source: None,
            queue: PriorityQueue::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn last_source(&self) -> Option<Node> {
        self.last_source
    }

    #[inline]
    #[must_use]
    pub fn distance_at(&self, index: usize) -> Distance {
        self.distances[index]
    }

    #[inline]
    #[must_use]
    pub fn is_settled(&self, index: usize) -> bool {
        self.settled[index]
    }

    #[inline]
    #[must_use]
    pub fn predecessor_at(&self, index: usize) -> Option<Node> {
        self.before[index]
    }

    /// Clear only the indices touched since the last reset, then seed the
    /// new source at distance zero, if `source` differs from the current
    /// `last_source`. A no-op if `source == last_source`.
    pub fn reset_for_source(&mut self, graph: &GridGraph, source: Node) {
        if self.last_source == Some(source) {
            return;
        }
        for &index in &self.touched {
            self.distances[index] = UNREACHABLE;
            self.settled[index] = false;
            self.before[index] = None;
        }
        self.touched.clear();
        self.queue.clear();

        self.last_source = Some(source);
        let index = graph.index(source);
        self.distances[index] = 0;
        self.touched.push(index);
        self.queue.push(index, 0, 0);
    }

    pub fn settle(&mut self, index: usize) {
        self.settled[index] = true;
    }

    /// Relax the edge `from -> to` with the given new distance, recording
    /// `from` as `to`'s predecessor. Returns `true` if `to`'s distance was
    /// improved.
    pub fn relax(&mut self, from: Node, to_index: usize, new_dist: Distance) -> bool {
        if new_dist < self.distances[to_index] {
            if self.distances[to_index] == UNREACHABLE {
                self.touched.push(to_index);
            }
            self.distances[to_index] = new_dist;
            self.before[to_index] = Some(from);
            true
        } else {
            false
        }
    }
}
