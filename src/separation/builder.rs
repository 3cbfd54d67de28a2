//! Recursive construction of the full well-separated pair decomposition.

use crate::cell::GridCell;
use crate::distance::UNREACHABLE;
use crate::graph::GridGraph;
use crate::pathfinding::Pathfinder;
use crate::separation::{check_separation, Separation};

/// Build the full WSPD for `graph`: every pair of distinct walkable nodes is
/// covered by exactly one [`Separation`] in the returned list.
///
/// See §4.5: recursion starts from `(bounding_cell, bounding_cell)` and at
/// each step either emits a separation or descends by splitting the larger
/// of the two cells.
pub fn calculate_separation<P: Pathfinder>(graph: &GridGraph, pathfinder: &mut P) -> Vec<Separation> {
    let root = graph.bounding_cell();
    let mut out = Vec::new();
    calculate(graph, pathfinder, root, root, &mut out);
    out
}

fn calculate<P: Pathfinder>(
    graph: &GridGraph,
    pathfinder: &mut P,
    a: GridCell,
    b: GridCell,
    out: &mut Vec<Separation>,
) {
    if a == b && a.size() == 1 {
        return;
    }
    if !has_walkable_node(graph, &a) || !has_walkable_node(graph, &b) {
        return;
    }
    if let Some(sep) = check_separation(&a, &b, pathfinder) {
        out.push(sep);
        return;
    }
    if a.size() == 1 && b.size() == 1 {
        let ca = a.iter().next().expect("non-empty cell has a first node");
        let cb = b.iter().next().expect("non-empty cell has a first node");
        out.push(Separation::Complex {
            a,
            b,
            ca,
            cb,
            d: UNREACHABLE,
        });
        return;
    }
    if a.size() < b.size() {
        calculate(graph, pathfinder, b, a, out);
        return;
    }
    for quadrant in a.split() {
        calculate(graph, pathfinder, quadrant, b, out);
    }
}

fn has_walkable_node(graph: &GridGraph, cell: &GridCell) -> bool {
    cell.iter().any(|node| graph.is_walkable(node))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::neighbour::NeighbourMode;
    use crate::pathfinding::Dijkstra;

    #[test]
    fn covers_every_distinct_walkable_pair_exactly_once() {
        let graph = GridGraph::new(vec![vec![true; 5]; 5], NeighbourMode::Manhattan).unwrap();
        let mut pf = Dijkstra::new(&graph);
        let seps = calculate_separation(&graph, &mut pf);
        assert!(!seps.is_empty());

        let nodes: Vec<_> = graph.walkable_nodes().collect();
        for &u in &nodes {
            for &v in &nodes {
                if u == v {
                    continue;
                }
                let covering: Vec<_> = seps
                    .iter()
                    .filter(|sep| {
                        (sep.a().contains_node(u) && sep.b().contains_node(v))
                            || (sep.a().contains_node(v) && sep.b().contains_node(u))
                    })
                    .collect();
                assert_eq!(
                    covering.len(),
                    1,
                    "pair ({u:?}, {v:?}) covered by {} separations, expected 1",
                    covering.len()
                );
            }
        }
    }

    #[test]
    fn handles_barrier_without_panicking() {
        let mut rows = vec![vec![true; 5]; 5];
        rows[2][2] = false;
        let graph = GridGraph::new(rows, NeighbourMode::Manhattan).unwrap();
        let mut pf = Dijkstra::new(&graph);
        let seps = calculate_separation(&graph, &mut pf);
        assert!(!seps.is_empty());
    }
}
