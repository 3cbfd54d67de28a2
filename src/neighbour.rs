//! Neighbour adjacency variants: 4-connected (Manhattan) or 8-connected
//! (all-surrounding), as a tagged enum rather than a trait object — both arms
//! are trivial and should inline at call sites.

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use crate::distance::{Distance, UNREACHABLE};
use crate::node::Node;

/// Fixed offsets for the 4-connected case, in the deterministic emission
/// order: right, left, up, down.
const MANHATTAN_OFFSETS: [(i64, i64); 4] = [(0, 1), (0, -1), (-1, 0), (1, 0)];

/// Offsets added for the 8-connected case: the four diagonals, emitted after
/// the Manhattan offsets above.
const DIAGONAL_OFFSETS: [(i64, i64); 4] = [(-1, 1), (-1, -1), (1, 1), (1, -1)];

#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NeighbourMode {
    /// 4-connected: up/down/left/right.
    Manhattan,
    /// 8-connected: Manhattan plus the four diagonals.
    AllSurrounding,
}

impl NeighbourMode {
    /// Candidate neighbour coordinates of `node`, in the fixed emission
    /// order, without any bounds or walkability filtering. Candidates with a
    /// negative row/col are omitted.
    pub fn candidates(&self, node: Node, height: usize, width: usize) -> Vec<Node> {
        let offsets: &[(i64, i64)] = match self {
            NeighbourMode::Manhattan => &MANHATTAN_OFFSETS,
            NeighbourMode::AllSurrounding => &[
                MANHATTAN_OFFSETS[0],
                MANHATTAN_OFFSETS[1],
                MANHATTAN_OFFSETS[2],
                MANHATTAN_OFFSETS[3],
                DIAGONAL_OFFSETS[0],
                DIAGONAL_OFFSETS[1],
                DIAGONAL_OFFSETS[2],
                DIAGONAL_OFFSETS[3],
            ],
        };

        offsets
            .iter()
            .filter_map(|&(dr, dc)| {
                let row = node.row as i64 + dr;
                let col = node.col as i64 + dc;
                if row < 0 || col < 0 || row as usize >= height || col as usize >= width {
                    return None;
                }
                Some(Node::new(row as usize, col as usize))
            })
            .collect()
    }

    /// Trivial (closed-form, no search) distance between two nodes. Defined
    /// only under Manhattan adjacency; `UNREACHABLE` under all-surrounding,
    /// since the diagonal metric has no simple closed form consistent with
    /// unit-cost 8-connected hops around barriers.
    #[must_use]
    pub fn trivial_distance(&self, a: Node, b: Node) -> Distance {
        match self {
            NeighbourMode::Manhattan => {
                let dr = (a.row as i64 - b.row as i64).unsigned_abs() as Distance;
                let dc = (a.col as i64 - b.col as i64).unsigned_abs() as Distance;
                dr + dc
            }
            NeighbourMode::AllSurrounding => UNREACHABLE,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_manhattan(&self) -> bool {
        matches!(self, NeighbourMode::Manhattan)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn manhattan_candidates_are_in_bounds_only() {
        let candidates = NeighbourMode::Manhattan.candidates(Node::new(0, 0), 3, 3);
        assert_eq!(candidates, vec![Node::new(0, 1), Node::new(1, 0)]);
    }

    #[test]
    fn all_surrounding_adds_diagonals_after_manhattan_offsets() {
        let candidates = NeighbourMode::AllSurrounding.candidates(Node::new(1, 1), 3, 3);
        assert_eq!(
            candidates,
            vec![
                Node::new(1, 2),
                Node::new(1, 0),
                Node::new(0, 1),
                Node::new(2, 1),
                Node::new(0, 2),
                Node::new(0, 0),
                Node::new(2, 2),
                Node::new(2, 0),
            ]
        );
    }

    #[test]
    fn manhattan_trivial_distance_is_taxicab() {
        let d = NeighbourMode::Manhattan.trivial_distance(Node::new(0, 0), Node::new(3, 4));
        assert_eq!(d, 7);
    }

    #[test]
    fn all_surrounding_trivial_distance_is_unreachable() {
        let d = NeighbourMode::AllSurrounding.trivial_distance(Node::new(0, 0), Node::new(3, 4));
        assert_eq!(d, UNREACHABLE);
    }
}
