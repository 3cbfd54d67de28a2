//! Pathfinder variants sharing one capability surface, monomorphised per
//! call site (no dynamic dispatch on this hot path).

mod astar;
mod caching_dijkstra;
mod dijkstra;
mod manhattan_dijkstra;
pub(crate) mod queue;
pub(crate) mod scratch;

pub use astar::AStar;
pub use caching_dijkstra::CachingDijkstra;
pub use dijkstra::Dijkstra;
pub use manhattan_dijkstra::ManhattanDijkstra;

use crate::distance::Distance;
use crate::node::Node;
use crate::path::Path;

/// Shared capability surface for every pathfinder variant.
pub trait Pathfinder {
    /// Shortest-path distance from `s` to `t`, or `UNREACHABLE` if either is
    /// a barrier, out of bounds, or no path exists.
    fn find_distance(&mut self, s: Node, t: Node) -> Distance;

    /// One deterministic shortest path from `s` to `t` (minimum-distance
    /// neighbour at each backward step), or `None` if unreachable.
    fn find_route(&mut self, s: Node, t: Node) -> Option<Path>;

    /// Every shortest path from `s` to `t`, admitting ties at each backward
    /// step. Empty if unreachable.
    fn find_all_routes(&mut self, s: Node, t: Node) -> Vec<Path>;

    /// Closed-form distance with no search (Manhattan only); `UNREACHABLE`
    /// otherwise.
    fn find_trivial_distance(&self, a: Node, b: Node) -> Distance;
}
