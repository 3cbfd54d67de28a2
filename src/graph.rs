//! The walkable grid itself: a flat bit-vector plus the neighbour calculator
//! used to interpret adjacency over it.

use crate::cell::GridCell;
use crate::error::GraphError;
use crate::neighbour::NeighbourMode;
use crate::node::{Corner, Node};
use rand::Rng;
use tracing::info;

/// A 2D walkability matrix, flattened row-major, paired with a fixed
/// neighbour calculator.
#[derive(Debug, Clone)]
pub struct GridGraph {
    height: usize,
    width: usize,
    walkable: Vec<bool>,
    mode: NeighbourMode,
}

impl GridGraph {
    /// Build a graph from a uniform-width boolean matrix.
    ///
    /// Returns [`GraphError::EmptyGrid`] if `rows` is empty, or
    /// [`GraphError::InconsistentRowWidth`] if any row's width differs from
    /// the first row's.
    pub fn new(rows: Vec<Vec<bool>>, mode: NeighbourMode) -> Result<Self, GraphError> {
        let height = rows.len();
        if height == 0 {
            return Err(GraphError::EmptyGrid);
        }
        let width = rows[0].len();
        if width == 0 {
            return Err(GraphError::EmptyGrid);
        }

        let mut walkable = Vec::with_capacity(height * width);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != width {
                return Err(GraphError::InconsistentRowWidth {
                    row,
                    expected: width,
                    actual: cells.len(),
                });
            }
            walkable.extend(cells);
        }

        let walkable_count = walkable.iter().filter(|&&w| w).count();
        info!(height, width, walkable_count, "built grid graph");

        Ok(Self {
            height,
            width,
            walkable,
            mode,
        })
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn neighbour_mode(&self) -> NeighbourMode {
        self.mode
    }

    /// Flat row-major index of `node`. Correct formula: `row * width + col`
    /// (not `row * col`, a known historical bug — see DESIGN.md).
    #[inline]
    #[must_use]
    pub fn index(&self, node: Node) -> usize {
        node.row * self.width + node.col
    }

    #[inline]
    #[must_use]
    pub fn in_bounds(&self, node: Node) -> bool {
        node.row < self.height && node.col < self.width
    }

    #[inline]
    #[must_use]
    pub fn is_walkable(&self, node: Node) -> bool {
        self.in_bounds(node) && self.walkable[self.index(node)]
    }

    /// The in-bounds, walkable neighbours of `node`, per the configured
    /// neighbour calculator, in its fixed emission order.
    #[must_use]
    pub fn walkable_neighbours(&self, node: Node) -> Vec<Node> {
        self.mode
            .candidates(node, self.height, self.width)
            .into_iter()
            .filter(|&n| self.is_walkable(n))
            .collect()
    }

    /// Closed-form distance with no search; `UNREACHABLE` unless the
    /// configured neighbour mode is Manhattan.
    #[inline]
    #[must_use]
    pub fn trivial_distance(&self, a: Node, b: Node) -> crate::distance::Distance {
        self.mode.trivial_distance(a, b)
    }

    /// Whether `b` is one of `a`'s walkable neighbours.
    #[inline]
    #[must_use]
    pub fn are_adjacent(&self, a: Node, b: Node) -> bool {
        self.walkable_neighbours(a).contains(&b)
    }

    /// Iterate over every walkable node, row-major.
    pub fn walkable_nodes(&self) -> impl Iterator<Item = Node> + '_ {
        (0..self.height).flat_map(move |row| {
            (0..self.width).filter_map(move |col| {
                let node = Node::new(row, col);
                self.is_walkable(node).then_some(node)
            })
        })
    }

    /// The cell spanning the whole grid, top-left at the origin.
    #[must_use]
    pub fn bounding_cell(&self) -> GridCell {
        GridCell::new(
            Corner::new(0, 0),
            Corner::new(self.height as i64 - 1, self.width as i64 - 1),
        )
    }

    /// Sample a uniformly random walkable node, retrying a bounded number of
    /// times against sparse grids before giving up.
    pub fn random_walkable_node<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Node> {
        const MAX_ATTEMPTS: usize = 10_000;
        for _ in 0..MAX_ATTEMPTS {
            let row = rng.gen_range(0..self.height);
            let col = rng.gen_range(0..self.width);
            let node = Node::new(row, col);
            if self.is_walkable(node) {
                return Some(node);
            }
        }
        None
    }

    /// Sample an arbitrary in-bounds cell of the given size, without regard
    /// to walkability. Used by tests/benchmarks that need some `GridCell`.
    #[must_use]
    pub fn random_cell_of_size<R: Rng + ?Sized>(&self, rng: &mut R, size: usize) -> Option<GridCell> {
        if size == 0 || size > self.height || size > self.width {
            return None;
        }
        let top = rng.gen_range(0..=(self.height - size));
        let left = rng.gen_range(0..=(self.width - size));
        Some(GridCell::new(
            Corner::new(top as i64, left as i64),
            Corner::new((top + size - 1) as i64, (left + size - 1) as i64),
        ))
    }
}
