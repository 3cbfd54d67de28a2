//! Answers point-to-point distance queries by replaying a pre-built WSPD,
//! without ever touching the pathfinder again.

use crate::cell::GridCell;
use crate::distance::{saturating_add, Distance};
use crate::graph::GridGraph;
use crate::node::Node;
use crate::pathfinding::Pathfinder;
use crate::separation::builder::calculate_separation;
use crate::separation::Separation;
use tracing::info;

#[derive(Debug, Clone, Copy)]
enum EntryPayload {
    Trivial,
    Complex { own_center: Node, other_center: Node, d: Distance },
}

#[derive(Debug, Clone, Copy)]
struct OracleEntry {
    other: GridCell,
    payload: EntryPayload,
}

/// See §4.8. Built once from a graph's full WSPD; every subsequent
/// [`Self::find_distance`] call walks at most one `Trivial`/`Complex` hop per
/// recursion level, bottoming out at adjacency.
pub struct SeparationDistanceOracle<'g> {
    graph: &'g GridGraph,
    /// Per-node-index list of every separation touching that node's cluster.
    lookup: Vec<Vec<OracleEntry>>,
}

impl<'g> SeparationDistanceOracle<'g> {
    /// Build the WSPD for `graph` with `pathfinder`, then index it for queries.
    #[must_use]
    pub fn build<P: Pathfinder>(graph: &'g GridGraph, pathfinder: &mut P) -> Self {
        let separations = calculate_separation(graph, pathfinder);
        Self::from_separations(graph, &separations)
    }

    /// Index an already-computed WSPD.
    #[must_use]
    pub fn from_separations(graph: &'g GridGraph, separations: &[Separation]) -> Self {
        let size = graph.height() * graph.width();
        let mut lookup: Vec<Vec<OracleEntry>> = vec![Vec::new(); size];

        for sep in separations {
            match *sep {
                Separation::Trivial { a, b } => {
                    index_side(graph, &mut lookup, a, b, EntryPayload::Trivial);
                    index_side(graph, &mut lookup, b, a, EntryPayload::Trivial);
                }
                Separation::Complex { a, b, ca, cb, d } => {
                    index_side(
                        graph,
                        &mut lookup,
                        a,
                        b,
                        EntryPayload::Complex {
                            own_center: ca,
                            other_center: cb,
                            d,
                        },
                    );
                    index_side(
                        graph,
                        &mut lookup,
                        b,
                        a,
                        EntryPayload::Complex {
                            own_center: cb,
                            other_center: ca,
                            d,
                        },
                    );
                }
            }
        }

        info!(
            separations = separations.len(),
            nodes = size,
            "built separation distance oracle"
        );

        Self { graph, lookup }
    }

    /// Answer a distance query by replaying the WSPD. See §4.8.
    #[must_use]
    pub fn find_distance(&self, u: Node, v: Node) -> Distance {
        if self.graph.are_adjacent(u, v) {
            return 1;
        }

        let index = self.graph.index(u);
        let entry = self.lookup[index]
            .iter()
            .find(|entry| entry.other.contains_node(v))
            .expect("every non-adjacent walkable pair is covered by exactly one separation");

        match entry.payload {
            EntryPayload::Trivial => self.graph.trivial_distance(u, v),
            EntryPayload::Complex { own_center, other_center, d } => {
                if u == own_center && v == other_center {
                    d
                } else if u == own_center {
                    saturating_add(d, self.find_distance(other_center, v))
                } else if v == other_center {
                    saturating_add(self.find_distance(u, own_center), d)
                } else {
                    saturating_add(saturating_add(self.find_distance(u, own_center), d), self.find_distance(other_center, v))
                }
            }
        }
    }
}

fn index_side(
    graph: &GridGraph,
    lookup: &mut [Vec<OracleEntry>],
    own: GridCell,
    other: GridCell,
    payload: EntryPayload,
) {
    for node in own.iter() {
        if graph.is_walkable(node) {
            lookup[graph.index(node)].push(OracleEntry { other, payload });
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::neighbour::NeighbourMode;
    use crate::pathfinding::{Dijkstra, Pathfinder};

    #[test]
    fn matches_dijkstra_for_every_walkable_pair() {
        let graph = GridGraph::new(vec![vec![true; 5]; 5], NeighbourMode::Manhattan).unwrap();
        let mut pf = Dijkstra::new(&graph);
        let oracle = SeparationDistanceOracle::build(&graph, &mut pf);

        let mut baseline = Dijkstra::new(&graph);
        let nodes: Vec<Node> = graph.walkable_nodes().collect();
        for &u in &nodes {
            for &v in &nodes {
                assert_eq!(
                    oracle.find_distance(u, v),
                    baseline.find_distance(u, v),
                    "mismatch for ({u:?}, {v:?})"
                );
            }
        }
    }

    #[test]
    fn matches_dijkstra_around_a_barrier() {
        let mut rows = vec![vec![true; 5]; 5];
        rows[2][2] = false;
        let graph = GridGraph::new(rows, NeighbourMode::Manhattan).unwrap();
        let mut pf = Dijkstra::new(&graph);
        let oracle = SeparationDistanceOracle::build(&graph, &mut pf);

        let mut baseline = Dijkstra::new(&graph);
        let nodes: Vec<Node> = graph.walkable_nodes().collect();
        for &u in &nodes {
            for &v in &nodes {
                assert_eq!(oracle.find_distance(u, v), baseline.find_distance(u, v));
            }
        }
    }
}
