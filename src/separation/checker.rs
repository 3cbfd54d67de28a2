//! Decide whether two cells form a well-separated pair.

use crate::cell::GridCell;
use crate::distance::{is_unreachable, saturating_add, Distance, UNREACHABLE};
use crate::node::Node;
use crate::pathfinding::Pathfinder;
use crate::separation::Separation;

/// See §4.4: scan every `(u, v)` pair, track the minimising center
/// candidate, then either confirm the trivial-distance property across the
/// whole pair or verify the center property against the tracked candidate.
pub fn check_separation<P: Pathfinder>(
    first: &GridCell,
    second: &GridCell,
    pathfinder: &mut P,
) -> Option<Separation> {
    if first.is_subset_of(second) || second.is_subset_of(first) {
        return None;
    }

    let first_nodes: Vec<Node> = first.iter().collect();
    let second_nodes: Vec<Node> = second.iter().collect();

    let mut dist = vec![vec![0 as Distance; second_nodes.len()]; first_nodes.len()];
    let mut all_trivial = true;
    let mut min_d = UNREACHABLE;
    let mut center = (first_nodes[0], second_nodes[0]);

    for (i, &u) in first_nodes.iter().enumerate() {
        for (j, &v) in second_nodes.iter().enumerate() {
            let d = pathfinder.find_distance(u, v);
            let td = pathfinder.find_trivial_distance(u, v);
            dist[i][j] = d;
            if d != td {
                all_trivial = false;
            }
            if d < min_d {
                min_d = d;
                center = (u, v);
            }
        }
    }

    if all_trivial {
        return Some(Separation::Trivial {
            a: *first,
            b: *second,
        });
    }

    let (ca, cb) = center;
    let da: Vec<Distance> = first_nodes
        .iter()
        .map(|&u| pathfinder.find_distance(ca, u))
        .collect();
    let db: Vec<Distance> = second_nodes
        .iter()
        .map(|&v| pathfinder.find_distance(cb, v))
        .collect();
    let d_center = min_d;

    for (i, &dai) in da.iter().enumerate() {
        for (j, &dbj) in db.iter().enumerate() {
            let actual = dist[i][j];
            if is_unreachable(dai) || is_unreachable(dbj) || is_unreachable(d_center) {
                if !is_unreachable(actual) {
                    return None;
                }
            } else if actual != saturating_add(saturating_add(dai, d_center), dbj) {
                return None;
            }
        }
    }

    Some(Separation::Complex {
        a: *first,
        b: *second,
        ca,
        cb,
        d: d_center,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::GridGraph;
    use crate::neighbour::NeighbourMode;
    use crate::node::Corner;
    use crate::pathfinding::Dijkstra;

    #[test]
    fn identical_cells_are_not_separated() {
        let c = GridCell::new(Corner::new(0, 0), Corner::new(1, 1));
        let graph = GridGraph::new(vec![vec![true; 4]; 4], NeighbourMode::Manhattan).unwrap();
        let mut pf = Dijkstra::new(&graph);
        assert!(check_separation(&c, &c, &mut pf).is_none());
    }

    #[test]
    fn adjacent_single_cells_on_open_grid_are_trivial() {
        let graph = GridGraph::new(vec![vec![true; 4]; 4], NeighbourMode::Manhattan).unwrap();
        let mut pf = Dijkstra::new(&graph);
        let a = GridCell::new(Corner::new(0, 0), Corner::new(0, 0));
        let b = GridCell::new(Corner::new(0, 3), Corner::new(0, 3));
        let sep = check_separation(&a, &b, &mut pf);
        assert!(matches!(sep, Some(Separation::Trivial { .. })));
    }
}
