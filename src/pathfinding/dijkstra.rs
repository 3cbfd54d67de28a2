use crate::distance::{saturating_add_step, Distance, UNREACHABLE};
use crate::graph::GridGraph;
use crate::node::Node;
use crate::path::Path;
use crate::pathfinding::scratch::Scratch;
use crate::pathfinding::Pathfinder;
use std::collections::VecDeque;

/// General grid Dijkstra: works under whichever neighbour mode the borrowed
/// [`GridGraph`] was built with.
pub struct Dijkstra<'g> {
    graph: &'g GridGraph,
    scratch: Scratch,
}

impl<'g> Dijkstra<'g> {
    #[must_use]
    pub fn new(graph: &'g GridGraph) -> Self {
        Self {
            scratch: Scratch::new(graph),
            graph,
        }
    }
}

impl Pathfinder for Dijkstra<'_> {
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

/// Shared by [`Dijkstra`] and `ManhattanDijkstra`, which differ only in the
/// neighbour mode the graph they're constructed over carries.
pub(super) fn find_distance_core(
    graph: &GridGraph,
    scratch: &mut Scratch,
    s: Node,
    t: Node,
) -> Distance {
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
                scratch.queue.push(v_index, new_dist, new_dist);
            }
        }
    }

    UNREACHABLE
}

pub(super) fn find_route_core(
    graph: &GridGraph,
    scratch: &mut Scratch,
    s: Node,
    t: Node,
) -> Option<Path> {
    if find_distance_core(graph, scratch, s, t) == UNREACHABLE {
        return None;
    }

    let mut path = Path::single(t);
    let mut current = t;
    while current != s {
        let next = graph
            .walkable_neighbours(current)
            .into_iter()
            .min_by_key(|&n| scratch.distance_at(graph.index(n)))?;
        path.push_front(next);
        current = next;
    }
    Some(path)
}

pub(super) fn find_all_routes_core(
    graph: &GridGraph,
    scratch: &mut Scratch,
    s: Node,
    t: Node,
) -> Vec<Path> {
    if find_distance_core(graph, scratch, s, t) == UNREACHABLE {
        return Vec::new();
    }

    let mut completed = Vec::new();
    let mut best_len: Option<usize> = None;
    let mut frontier: VecDeque<Path> = VecDeque::new();
    frontier.push_back(Path::single(t));

    while let Some(candidate) = frontier.pop_front() {
        if let Some(best_len) = best_len {
            if candidate.len() > best_len {
                continue;
            }
        }

        let current = candidate.source().expect("candidate path is never empty");
        if current == s {
            best_len = Some(candidate.len());
            completed.push(candidate);
            continue;
        }

        let current_dist = scratch.distance_at(graph.index(current));
        let predecessor_dist = current_dist - 1;
        for n in graph.walkable_neighbours(current) {
            if scratch.distance_at(graph.index(n)) == predecessor_dist {
                let mut next = candidate.clone();
                next.push_front(n);
                frontier.push_back(next);
            }
        }
    }

    completed
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::neighbour::NeighbourMode;

    fn all_walkable(h: usize, w: usize, mode: NeighbourMode) -> GridGraph {
        GridGraph::new(vec![vec![true; w]; h], mode).unwrap()
    }

    #[test]
    fn s1_5x5_all_walkable_manhattan() {
        let graph = all_walkable(5, 5, NeighbourMode::Manhattan);
        let mut d = Dijkstra::new(&graph);
        assert_eq!(d.find_distance(Node::new(0, 0), Node::new(0, 4)), 4);
        assert_eq!(
            d.find_all_routes(Node::new(0, 0), Node::new(0, 4)).len(),
            1
        );
    }

    #[test]
    fn s2_5x5_one_barrier_manhattan() {
        let mut rows = vec![vec![true; 5]; 5];
        rows[0][2] = false;
        let graph = GridGraph::new(rows, NeighbourMode::Manhattan).unwrap();
        let mut d = Dijkstra::new(&graph);
        assert_eq!(d.find_distance(Node::new(0, 0), Node::new(0, 4)), 6);
        assert_eq!(
            d.find_all_routes(Node::new(0, 0), Node::new(0, 4)).len(),
            4
        );
    }

    #[test]
    fn s3_5x5_all_walkable_8_neighbour() {
        let graph = all_walkable(5, 5, NeighbourMode::AllSurrounding);
        let mut d = Dijkstra::new(&graph);
        assert_eq!(d.find_distance(Node::new(0, 0), Node::new(4, 4)), 4);
        for path in d.find_all_routes(Node::new(0, 0), Node::new(4, 4)) {
            assert_eq!(path.len(), 5);
            let nodes: Vec<Node> = path.iter().copied().collect();
            for pair in nodes.windows(2) {
                let dr = pair[1].row as i64 - pair[0].row as i64;
                let dc = pair[1].col as i64 - pair[0].col as i64;
                assert_eq!(dr.abs(), 1);
                assert_eq!(dc.abs(), 1);
            }
        }
    }

    #[test]
    fn barrier_endpoint_is_unreachable() {
        let mut rows = vec![vec![true; 3]; 3];
        rows[1][1] = false;
        let graph = GridGraph::new(rows, NeighbourMode::Manhattan).unwrap();
        let mut d = Dijkstra::new(&graph);
        assert_eq!(d.find_distance(Node::new(0, 0), Node::new(1, 1)), UNREACHABLE);
    }

    #[test]
    fn changing_source_resets_lazily() {
        let graph = all_walkable(4, 4, NeighbourMode::Manhattan);
        let mut d = Dijkstra::new(&graph);
        assert_eq!(d.find_distance(Node::new(0, 0), Node::new(3, 3)), 6);
        assert_eq!(d.find_distance(Node::new(1, 1), Node::new(3, 3)), 4);
        assert_eq!(d.find_distance(Node::new(0, 0), Node::new(3, 3)), 6);
    }

    #[test]
    fn symmetry_holds_for_all_walkable_pairs() {
        let graph = all_walkable(4, 4, NeighbourMode::Manhattan);
        let mut d = Dijkstra::new(&graph);
        let nodes: Vec<Node> = graph.walkable_nodes().collect();
        for &u in &nodes {
            for &v in &nodes {
                assert_eq!(d.find_distance(u, v), d.find_distance(v, u));
            }
        }
    }
}
