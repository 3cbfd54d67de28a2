use crate::distance::Distance;
use crate::graph::GridGraph;
use crate::neighbour::NeighbourMode;
use crate::node::Node;
use crate::path::Path;
use crate::pathfinding::dijkstra::{find_all_routes_core, find_distance_core, find_route_core};
use crate::pathfinding::scratch::Scratch;
use crate::pathfinding::Pathfinder;

/// [`crate::pathfinding::Dijkstra`] restricted to 4-connected grids. The
/// search loop is identical; the only thing that changes is which graph you
/// may legally construct it over.
pub struct ManhattanDijkstra<'g> {
    graph: &'g GridGraph,
    scratch: Scratch,
}

impl<'g> ManhattanDijkstra<'g> {
    /// # Panics
    /// Panics if `graph` was not built with [`NeighbourMode::Manhattan`].
    #[must_use]
    pub fn new(graph: &'g GridGraph) -> Self {
        assert!(
            graph.neighbour_mode().is_manhattan(),
            "ManhattanDijkstra requires a Manhattan-mode grid"
        );
        Self {
            scratch: Scratch::new(graph),
            graph,
        }
    }
}

impl Pathfinder for ManhattanDijkstra<'_> {
    fn find_distance(&mut self, s: Node, t: Node) -> Distance {
        find_distance_core(self.graph, &mut self.scratch, s, t)
    }

    fn find_route(&mut self, s: Node, t: Node) -> Option<Path> {
        find_route_core(self.graph, &mut self.scratch, s, t)
    }

    fn find_all_routes(&mut self, s: Node, t: Node) -> Vec<Path> {
        find_all_routes_core(self.graph, &mut self.scratch, s, t)
    }

    fn find_trivial_distance(&self, a: Node, b: Node) -> Distance {
        self.graph.trivial_distance(a, b)
    }
}
