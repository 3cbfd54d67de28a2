//! An ordered sequence of adjacent nodes, as reconstructed by a pathfinder.

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use crate::node::Node;
use std::collections::VecDeque;

#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Path {
    nodes: VecDeque<Node>,
}

impl Path {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn single(node: Node) -> Self {
        let mut nodes = VecDeque::with_capacity(1);
        nodes.push_back(node);
        Self { nodes }
    }

    #[inline]
    pub fn push_front(&mut self, node: Node) {
        self.nodes.push_front(node);
    }

    #[inline]
    pub fn push_back(&mut self, node: Node) {
        self.nodes.push_back(node);
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn source(&self) -> Option<Node> {
        self.nodes.front().copied()
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> Option<Node> {
        self.nodes.back().copied()
    }

    #[inline]
    #[must_use]
    pub fn middle_node(&self) -> Option<Node> {
        if self.nodes.is_empty() {
            return None;
        }
        self.nodes.get(self.nodes.len() / 2).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }
}

impl FromIterator<Node> for Path {
    fn from_iter<T: IntoIterator<Item = Node>>(iter: T) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn source_and_target_are_front_and_back() {
        let path: Path = [Node::new(0, 0), Node::new(0, 1), Node::new(0, 2)]
            .into_iter()
            .collect();
        assert_eq!(path.source(), Some(Node::new(0, 0)));
        assert_eq!(path.target(), Some(Node::new(0, 2)));
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn middle_node_uses_floor_division() {
        let path: Path = [Node::new(0, 0), Node::new(0, 1), Node::new(0, 2), Node::new(0, 3)]
            .into_iter()
            .collect();
        assert_eq!(path.middle_node(), Some(Node::new(0, 2)));
    }

    #[test]
    fn push_front_and_back_extend_the_ends() {
        let mut path = Path::single(Node::new(1, 1));
        path.push_front(Node::new(0, 1));
        path.push_back(Node::new(2, 1));
        assert_eq!(path.source(), Some(Node::new(0, 1)));
        assert_eq!(path.target(), Some(Node::new(2, 1)));
        assert_eq!(path.len(), 3);
    }
}
