use crate::distance::{saturating_add_step, Distance, UNREACHABLE};
use crate::graph::GridGraph;
use crate::node::Node;
use crate::path::Path;
use crate::pathfinding::dijkstra::{find_all_routes_core, find_route_core};
use crate::pathfinding::scratch::Scratch;
use crate::pathfinding::Pathfinder;

/// A* over the grid: same scratch state as [`crate::pathfinding::Dijkstra`],
/// but priority is `distance + heuristic`, where the heuristic is the
/// graph's trivial (Manhattan) distance. Admissible when the graph is
/// Manhattan-mode; using it over an 8-connected graph is legal but the
/// heuristic degenerates to `UNREACHABLE` and the search behaves like plain
/// Dijkstra (every push ties on priority).
pub struct AStar<'g> {
    graph: &'g GridGraph,
    scratch: Scratch,
}

impl<'g> AStar<'g> {
    #[must_use]
    pub fn new(graph: &'g GridGraph) -> Self {
        Self {
            scratch: Scratch::new(graph),
            graph,
        }
    }
}

impl Pathfinder for AStar<'_> {
    fn find_distance(&mut self, s: Node, t: Node) -> Distance {
        find_distance_astar(self.graph, &mut self.scratch, s, t)
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

fn find_distance_astar(graph: &GridGraph, scratch: &mut Scratch, s: Node, t: Node) -> Distance {
    if !graph.is_walkable(s) || !graph.is_walkable(t) {
        return UNREACHABLE;
    }

    let t_index = graph.index(t);
    if scratch.last_source() == Some(s) && scratch.is_settled(t_index) {
        return scratch.distance_at(t_index);
    }

    scratch.reset_for_source(graph, s);

    while let Some((u_index, u_dist)) = scratch.queue.pop() {
        if scratch.is_settled(u_index) {
            continue;
        }
        scratch.settle(u_index);

        if u_index == t_index {
            return u_dist;
        }

        let u = Node::new(u_index / graph.width(), u_index % graph.width());
        for v in graph.walkable_neighbours(u) {
            let v_index = graph.index(v);
            if scratch.is_settled(v_index) {
                continue;
            }
            let new_dist = saturating_add_step(u_dist, 1);
            if scratch.relax(u, v_index, new_dist) {
                let heuristic = graph.trivial_distance(v, t);
                let priority = saturating_add_step(new_dist, if heuristic == UNREACHABLE { 0 } else { heuristic });
                scratch.queue.push(v_index, new_dist, priority);
            }
        }
    }

    UNREACHABLE
}
