use crate::distance::{saturating_add_step, Distance, UNREACHABLE};
use crate::graph::GridGraph;
use crate::node::Node;
use crate::path::Path;
use crate::pathfinding::dijkstra::Dijkstra;
use crate::pathfinding::scratch::Scratch;
use crate::pathfinding::Pathfinder;
use tracing::info;

/// Precomputes all-pairs distances between walkable nodes once, up front, so
/// every subsequent [`Pathfinder::find_distance`] call is a single dense
/// table lookup. Does **not** recheck walkability on lookup — callers must
/// not query barriers.
pub struct CachingDijkstra<'g> {
    graph: &'g GridGraph,
    /// Global node index (`GridGraph::index`) -> dense walkable index.
    cache_index: Vec<Option<usize>>,
    walkable_count: usize,
    /// Dense `[W x W]` distance matrix, row-major over `cache_index` values.
    table: Vec<Distance>,
}

impl<'g> CachingDijkstra<'g> {
    #[must_use]
    pub fn new(graph: &'g GridGraph) -> Self {
        let size = graph.height() * graph.width();
        let mut cache_index = vec![None; size];
        let mut dense_nodes = Vec::new();
        for node in graph.walkable_nodes() {
            cache_index[graph.index(node)] = Some(dense_nodes.len());
            dense_nodes.push(node);
        }
        let walkable_count = dense_nodes.len();

        let mut table = vec![UNREACHABLE; walkable_count * walkable_count];
        let mut scratch = Scratch::new(graph);
        for (dense_src, &src) in dense_nodes.iter().enumerate() {
            run_single_source(graph, &mut scratch, src);
            for (dense_dst, &dst) in dense_nodes.iter().enumerate() {
                let d = scratch.distance_at(graph.index(dst));
                table[dense_src * walkable_count + dense_dst] = d;
            }
        }

        info!(
            walkable_count,
            entries = table.len(),
            "built caching dijkstra all-pairs table"
        );

        Self {
            graph,
            cache_index,
            walkable_count,
            table,
        }
    }

    #[inline]
    fn dense(&self, node: Node) -> Option<usize> {
        self.cache_index[self.graph.index(node)]
    }
}

impl Pathfinder for CachingDijkstra<'_> {
    fn find_distance(&mut self, s: Node, t: Node) -> Distance {
        match (self.dense(s), self.dense(t)) {
            (Some(ds), Some(dt)) => self.table[ds * self.walkable_count + dt],
            _ => UNREACHABLE,
        }
    }

    /// Not accelerated by the cache table (which only stores distances, not
    /// predecessors); delegates to a throwaway [`Dijkstra`] run.
    fn find_route(&mut self, s: Node, t: Node) -> Option<Path> {
        Dijkstra::new(self.graph).find_route(s, t)
    }

    fn find_all_routes(&mut self, s: Node, t: Node) -> Vec<Path> {
        Dijkstra::new(self.graph).find_all_routes(s, t)
    }

    fn find_trivial_distance(&self, a: Node, b: Node) -> Distance {
        self.graph.trivial_distance(a, b)
    }
}

/// Run Dijkstra from `source` to completion (no target, no early exit),
/// leaving `scratch` populated with the distance to every reachable node.
fn run_single_source(graph: &GridGraph, scratch: &mut Scratch, source: Node) {
    scratch.reset_for_source(graph, source);

    while let Some((u_index, u_dist)) = scratch.queue.pop() {
        if scratch.is_settled(u_index) {
            continue;
        }
        scratch.settle(u_index);

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
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::neighbour::NeighbourMode;

    #[test]
    fn matches_dijkstra_for_all_walkable_pairs() {
        let graph = GridGraph::new(vec![vec![true; 5]; 5], NeighbourMode::Manhattan).unwrap();
        let mut cached = CachingDijkstra::new(&graph);
        let mut baseline = Dijkstra::new(&graph);
        let nodes: Vec<Node> = graph.walkable_nodes().collect();
        for &u in &nodes {
            for &v in &nodes {
                assert_eq!(cached.find_distance(u, v), baseline.find_distance(u, v));
            }
        }
    }

    #[test]
    fn lookup_is_stable_across_repeated_calls() {
        let graph = GridGraph::new(vec![vec![true; 4]; 4], NeighbourMode::Manhattan).unwrap();
        let mut cached = CachingDijkstra::new(&graph);
        let d1 = cached.find_distance(Node::new(0, 0), Node::new(3, 3));
        let d2 = cached.find_distance(Node::new(0, 0), Node::new(3, 3));
        assert_eq!(d1, d2);
        assert_eq!(d1, 6);
    }
}
