//! Axis-aligned rectangular region over grid coordinates, with quadtree-style
//! splitting into four equal sub-cells.

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use crate::node::{Corner, Node};

/// A rectangular region `[top_left, bottom_right]` (inclusive) over the grid.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    top_left: Corner,
    bottom_right: Corner,
}

impl GridCell {
    /// Construct a cell from its inclusive corners.
    ///
    /// `top_left` is ordinarily above-and-left-of `bottom_right`, but
    /// [`Self::split`] can momentarily produce an inverted (empty) corner
    /// pair for a one-wide or one-tall cell; such a cell has non-positive
    /// [`Self::size`] and iterates no nodes, so callers that check for
    /// walkable nodes before recursing discard it without special-casing it.
    #[inline]
    #[must_use]
    pub fn new(top_left: Corner, bottom_right: Corner) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    #[inline]
    #[must_use]
    pub fn top_left(&self) -> Corner {
        self.top_left
    }

    #[inline]
    #[must_use]
    pub fn bottom_right(&self) -> Corner {
        self.bottom_right
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> i64 {
        self.bottom_right.col - self.top_left.col + 1
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> i64 {
        self.bottom_right.row - self.top_left.row + 1
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> i64 {
        self.width() * self.height()
    }

    #[inline]
    #[must_use]
    pub fn is_atomic(&self) -> bool {
        self.width() == 1 && self.height() == 1
    }

    #[inline]
    #[must_use]
    pub fn is_splittable(&self) -> bool {
        let w = self.width();
        let h = self.height();
        w >= 2 && h >= 2 && w % 2 == 0 && h % 2 == 0
    }

    /// Split this cell into its four quadrants: top-left, top-right,
    /// bottom-left, bottom-right, dividing each axis by floor-halving its
    /// span. This is unconditional — it does not require
    /// [`Self::is_splittable`]. A cell that is one node wide or tall yields
    /// one or two empty quadrants on that axis (inverted corners, zero
    /// nodes); a caller recursing on sub-cells filters those out the same
    /// way it filters out any other cell with no walkable node, rather than
    /// by checking splittability up front.
    #[must_use]
    pub fn split(&self) -> [GridCell; 4] {
        let tl = self.top_left;
        let br = self.bottom_right;
        let half_width = (br.col - tl.col) / 2;
        let half_height = (br.row - tl.row) / 2;
        let mid_row = tl.row + half_height;
        let mid_col = tl.col + half_width;

        let top_left = GridCell::new(tl, Corner::new(mid_row, mid_col));
        let top_right = GridCell::new(Corner::new(tl.row, mid_col + 1), Corner::new(mid_row, br.col));
        let bottom_left = GridCell::new(Corner::new(mid_row + 1, tl.col), Corner::new(br.row, mid_col));
        let bottom_right = GridCell::new(Corner::new(mid_row + 1, mid_col + 1), br);

        [top_left, top_right, bottom_left, bottom_right]
    }

    /// The smallest cell containing all four of the given cells.
    #[must_use]
    pub fn merge(a: &GridCell, b: &GridCell, c: &GridCell, d: &GridCell) -> GridCell {
        let top_left = Corner::new(
            a.top_left.row.min(b.top_left.row).min(c.top_left.row).min(d.top_left.row),
            a.top_left.col.min(b.top_left.col).min(c.top_left.col).min(d.top_left.col),
        );
        let bottom_right = Corner::new(
            a.bottom_right
                .row
                .max(b.bottom_right.row)
                .max(c.bottom_right.row)
                .max(d.bottom_right.row),
            a.bottom_right
                .col
                .max(b.bottom_right.col)
                .max(c.bottom_right.col)
                .max(d.bottom_right.col),
        );
        GridCell::new(top_left, bottom_right)
    }

    /// Whether `self` is wholly contained within `other` (`self ⊆ other`).
    #[inline]
    #[must_use]
    pub fn is_subset_of(&self, other: &GridCell) -> bool {
        self.top_left.row >= other.top_left.row
            && self.top_left.col >= other.top_left.col
            && self.bottom_right.row <= other.bottom_right.row
            && self.bottom_right.col <= other.bottom_right.col
    }

    /// Whether `node` falls within this cell's rectangle.
    #[inline]
    #[must_use]
    pub fn contains_node(&self, node: Node) -> bool {
        let corner = node.to_corner();
        corner.row >= self.top_left.row
            && corner.row <= self.bottom_right.row
            && corner.col >= self.top_left.col
            && corner.col <= self.bottom_right.col
    }

    /// The `i`-th node of the cell in row-major order, or `None` if out of range.
    #[must_use]
    pub fn node_at(&self, i: i64) -> Option<Node> {
        if i < 0 || i >= self.size() {
            return None;
        }
        let width = self.width();
        let row = self.top_left.row + i / width;
        let col = self.top_left.col + i % width;
        if row < 0 || col < 0 {
            return None;
        }
        Some(Node::new(row as usize, col as usize))
    }

    /// Iterate over every node in the cell, row-major from the top-left.
    pub fn iter(&self) -> impl Iterator<Item = Node> + '_ {
        (0..self.size()).map(move |i| self.node_at(i).expect("index within cell bounds"))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn cell(tr: i64, tc: i64, br: i64, bc: i64) -> GridCell {
        GridCell::new(Corner::new(tr, tc), Corner::new(br, bc))
    }

    #[test]
    fn width_height_size() {
        let c = cell(0, 0, 3, 4);
        assert_eq!(c.width(), 5);
        assert_eq!(c.height(), 4);
        assert_eq!(c.size(), 20);
    }

    #[test]
    fn atomic_cell_is_not_splittable() {
        let c = cell(0, 0, 0, 0);
        assert!(c.is_atomic());
        assert!(!c.is_splittable());
    }

    #[test]
    fn split_covers_original_with_disjoint_quadrants() {
        let c = cell(0, 0, 3, 3);
        let [tl, tr, bl, br] = c.split();
        assert_eq!(tl.size() + tr.size() + bl.size() + br.size(), c.size());

        let mut nodes: Vec<Node> = tl.iter().chain(tr.iter()).chain(bl.iter()).chain(br.iter()).collect();
        nodes.sort_by_key(|n| (n.row, n.col));
        let mut expected: Vec<Node> = c.iter().collect();
        expected.sort_by_key(|n| (n.row, n.col));
        assert_eq!(nodes, expected);
    }

    #[test]
    fn split_covers_odd_dimension_cell_too() {
        let c = cell(0, 0, 4, 4);
        assert!(!c.is_splittable());
        let [tl, tr, bl, br] = c.split();
        assert_eq!(tl.size() + tr.size() + bl.size() + br.size(), c.size());

        let mut nodes: Vec<Node> = tl.iter().chain(tr.iter()).chain(bl.iter()).chain(br.iter()).collect();
        nodes.sort_by_key(|n| (n.row, n.col));
        let mut expected: Vec<Node> = c.iter().collect();
        expected.sort_by_key(|n| (n.row, n.col));
        assert_eq!(nodes, expected);
    }

    #[test]
    fn splitting_a_one_wide_cell_yields_empty_quadrants_on_that_axis() {
        let c = cell(0, 0, 4, 0);
        let [_tl, tr, _bl, br] = c.split();
        assert!(tr.size() <= 0);
        assert!(br.size() <= 0);
    }

    #[test]
    fn merge_reconstructs_bounding_cell() {
        let c = cell(0, 0, 3, 3);
        let [tl, tr, bl, br] = c.split();
        assert_eq!(GridCell::merge(&tl, &tr, &bl, &br), c);
    }

    #[test]
    fn subset_checks_rectangle_containment() {
        let outer = cell(0, 0, 3, 3);
        let inner = cell(1, 1, 2, 2);
        assert!(inner.is_subset_of(&outer));
        assert!(!outer.is_subset_of(&inner));
    }

    #[test]
    fn node_at_is_row_major_from_top_left() {
        let c = cell(2, 5, 3, 6);
        assert_eq!(c.node_at(0), Some(Node::new(2, 5)));
        assert_eq!(c.node_at(1), Some(Node::new(2, 6)));
        assert_eq!(c.node_at(2), Some(Node::new(3, 5)));
        assert_eq!(c.node_at(3), Some(Node::new(3, 6)));
        assert_eq!(c.node_at(4), None);
    }

    #[test]
    fn contains_node_checks_rectangle_bounds() {
        let c = cell(1, 1, 3, 3);
        assert!(c.contains_node(Node::new(2, 2)));
        assert!(!c.contains_node(Node::new(0, 2)));
    }
}
